use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab host interface.
///
/// Tabs are only ever appended; there is no close operation. Tabs live as
/// long as the host does.
pub trait TabHost<P> {
    /// Append a tab and return its index.
    fn insert(&mut self, tab: Tab<P>) -> usize;
    fn set_focused(&mut self, index: usize) -> Result<(), TabError>;
    fn focused_index(&self) -> Option<usize>;
    fn focused(&self) -> Option<&Tab<P>>;
    fn focused_mut(&mut self) -> Option<&mut Tab<P>>;
    fn get(&self, index: usize) -> Option<&Tab<P>>;
    fn get_mut(&mut self, index: usize) -> Option<&mut Tab<P>>;
    fn tabs(&self) -> &[Tab<P>];
    fn tab_count(&self) -> usize;
}

/// In-memory tab host for the shell.
#[derive(Debug)]
pub struct TabManager<P> {
    tabs: Vec<Tab<P>>,
    focused: Option<usize>,
}

impl<P> TabManager<P> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            focused: None,
        }
    }
}

impl<P> Default for TabManager<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TabHost<P> for TabManager<P> {
    /// The first tab inserted becomes focused even without `set_focused`.
    fn insert(&mut self, tab: Tab<P>) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        if self.focused.is_none() {
            self.focused = Some(index);
        }
        index
    }

    fn set_focused(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        self.focused = Some(index);
        Ok(())
    }

    fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    fn focused(&self) -> Option<&Tab<P>> {
        self.focused.and_then(|i| self.tabs.get(i))
    }

    fn focused_mut(&mut self) -> Option<&mut Tab<P>> {
        match self.focused {
            Some(i) => self.tabs.get_mut(i),
            None => None,
        }
    }

    fn get(&self, index: usize) -> Option<&Tab<P>> {
        self.tabs.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Tab<P>> {
        self.tabs.get_mut(index)
    }

    fn tabs(&self) -> &[Tab<P>] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
