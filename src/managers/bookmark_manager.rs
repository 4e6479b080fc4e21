use tracing::info;

/// Trait defining the bookmark list interface.
pub trait BookmarkManagerTrait {
    /// Append `address` unless an identical string is already present.
    /// Returns whether it was added.
    fn add_bookmark(&mut self, address: &str) -> bool;
    fn contains(&self, address: &str) -> bool;
    fn get_all(&self) -> &[String];
    fn is_empty(&self) -> bool;
    /// Hand over every entry in insertion order, leaving the list empty.
    fn take_all(&mut self) -> Vec<String>;
}

/// Ordered, duplicate-free, in-memory bookmark list.
///
/// Entries are compared by exact string equality; no URL normalization is done.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookmarkManager {
    bookmarks: Vec<String>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, address: &str) -> bool {
        if self.contains(address) {
            return false;
        }
        self.bookmarks.push(address.to_string());
        info!(address = %address, "Bookmarked");
        true
    }

    fn contains(&self, address: &str) -> bool {
        self.bookmarks.iter().any(|b| b == address)
    }

    fn get_all(&self) -> &[String] {
        &self.bookmarks
    }

    fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn take_all(&mut self) -> Vec<String> {
        std::mem::take(&mut self.bookmarks)
    }
}
