//! Browser shell core for tabshell.
//!
//! `BrowserShell` owns the tab host, the input bar and the bookmark list, and
//! mediates every effect between them. Everything runs on the UI thread: the
//! input bar is shared with page-view handlers through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::input_bar::InputBar;
use crate::managers::page_view::{PageFactory, PageView};
use crate::managers::tab_manager::{TabHost, TabManager};
use crate::services::address::resolve_input;
use crate::services::bookmark_sink::BookmarkSink;
use crate::types::errors::TabError;
use crate::types::settings::ShellSettings;
use crate::types::tab::Tab;

/// Central coordinator of tabs, the input bar and bookmarks.
pub struct BrowserShell<F: PageFactory, I: InputBar> {
    settings: ShellSettings,
    factory: F,
    tabs: TabManager<F::View>,
    input: Rc<RefCell<I>>,
    bookmarks: BookmarkManager,
    sink: Box<dyn BookmarkSink>,
}

impl<F, I> BrowserShell<F, I>
where
    F: PageFactory,
    I: InputBar + 'static,
{
    /// Creates a shell with no tabs.
    pub fn new(factory: F, input: I, sink: Box<dyn BookmarkSink>, settings: ShellSettings) -> Self {
        Self {
            settings,
            factory,
            tabs: TabManager::new(),
            input: Rc::new(RefCell::new(input)),
            bookmarks: BookmarkManager::new(),
            sink,
        }
    }

    /// Creates a shell and opens the initial tab on the default address.
    pub fn launch(
        factory: F,
        input: I,
        sink: Box<dyn BookmarkSink>,
        settings: ShellSettings,
    ) -> Self {
        let mut shell = Self::new(factory, input, sink, settings);
        shell.open_tab(None);
        shell
    }

    /// Opens a new focused tab on `address`, or on the default address.
    ///
    /// The new page view reports every address change into the input bar,
    /// whether or not its tab is still focused. Returns the tab index.
    pub fn open_tab(&mut self, address: Option<&str>) -> usize {
        let target = address
            .unwrap_or(self.settings.default_address.as_str())
            .to_string();

        let mut view = self.factory.create_view();
        view.set_target(&target);

        let input = Rc::clone(&self.input);
        view.on_address_changed(Box::new(move |new_address: &str| {
            input.borrow_mut().set_text(new_address);
        }));

        let index = self.tabs.insert(Tab::new(&self.settings.tab_label, view));
        // Index comes straight from insert.
        let _ = self.tabs.set_focused(index);
        debug!(index, address = %target, "Opened tab");
        index
    }

    /// Opens a new tab on the input bar's text.
    ///
    /// Text not starting with `http` is prefixed with `https://`. Submissions
    /// never reuse the current tab.
    pub fn navigate_from_input(&mut self) -> usize {
        let text = self.input.borrow().text().to_string();
        let address = resolve_input(&text);
        self.open_tab(Some(&address))
    }

    /// Appends the input bar's text to the bookmarks unless already present.
    pub fn add_bookmark(&mut self) {
        let text = self.input.borrow().text().to_string();
        self.bookmarks.add_bookmark(&text);
    }

    /// Window-close handler. Flushes a non-empty bookmark list to the sink
    /// exactly once; the close always proceeds.
    pub fn shutdown(&mut self) {
        if self.bookmarks.is_empty() {
            debug!("Shutdown with no bookmarks");
            return;
        }
        let bookmarks = self.bookmarks.take_all();
        info!(count = bookmarks.len(), "Flushing bookmarks on shutdown");
        self.sink.flush(&bookmarks);
    }

    /// Focuses an existing tab. The input bar is left as it is.
    pub fn focus_tab(&mut self, index: usize) -> Result<(), TabError> {
        self.tabs.set_focused(index)?;
        debug!(index, "Focused tab");
        Ok(())
    }

    /// Delivers an address change from the rendering backend to the focused tab.
    pub fn focused_address_changed(&mut self, address: &str) {
        if let Some(tab) = self.tabs.focused_mut() {
            debug!(tab = %tab.id, address = %address, "Address changed");
            tab.view.address_changed(address);
        }
    }

    /// Relabels the focused tab, e.g. from the page title.
    pub fn set_focused_label(&mut self, label: &str) {
        if let Some(tab) = self.tabs.focused_mut() {
            tab.label = label.to_string();
        }
    }

    /// Replaces the input bar text, as typing would.
    pub fn set_input_text(&mut self, text: &str) {
        self.input.borrow_mut().set_text(text);
    }

    pub fn input_text(&self) -> String {
        self.input.borrow().text().to_string()
    }

    pub fn tabs(&self) -> &TabManager<F::View> {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabManager<F::View> {
        &mut self.tabs
    }

    pub fn bookmarks(&self) -> &[String] {
        self.bookmarks.get_all()
    }
}
