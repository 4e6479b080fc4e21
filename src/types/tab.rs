use uuid::Uuid;

/// One navigable slot in the tab host. Owns exactly one page view.
#[derive(Debug)]
pub struct Tab<P> {
    pub id: String,
    pub label: String,
    pub view: P,
}

impl<P> Tab<P> {
    /// Creates a tab with a fresh id around an already-targeted page view.
    pub fn new(label: &str, view: P) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.to_string(),
            view,
        }
    }
}
