//! Input bar contract: the URL/search text field next to the bookmark trigger.

/// Trait defining the input bar interface.
///
/// The submit and bookmark events are wired by the UI layer to
/// `BrowserShell::navigate_from_input` and `BrowserShell::add_bookmark`.
pub trait InputBar {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

/// Plain in-memory input bar.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextInputBar {
    text: String,
}

impl TextInputBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputBar for TextInputBar {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
