//! Page view contract consumed by the shell, plus a headless implementation.
//!
//! A page view is the rendering surface owned by one tab. The shell only ever
//! hands it a target address and listens for address-changed notifications;
//! loading, rendering and error pages are the backend's business.

use std::fmt;

/// Callback invoked with the new effective address of a page view.
pub type AddressHandler = Box<dyn FnMut(&str)>;

/// Trait defining the rendering surface interface.
pub trait PageView {
    /// Point the view at a new address. The backend loads it asynchronously.
    fn set_target(&mut self, address: &str);
    /// The address the view currently shows (or is loading).
    fn address(&self) -> &str;
    /// Register a handler fired on every address change of this view.
    fn on_address_changed(&mut self, handler: AddressHandler);
    /// Called by the backend when the effective address changes
    /// (redirect, in-page navigation, finished load).
    fn address_changed(&mut self, address: &str);
}

/// Creates page views for new tabs.
pub trait PageFactory {
    type View: PageView;
    fn create_view(&mut self) -> Self::View;
}

/// Ordered list of address-changed handlers for one page view.
#[derive(Default)]
pub struct AddressListeners {
    handlers: Vec<AddressHandler>,
}

impl AddressListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: AddressHandler) {
        self.handlers.push(handler);
    }

    /// Fire every handler, in registration order.
    pub fn emit(&mut self, address: &str) {
        for handler in self.handlers.iter_mut() {
            handler(address);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for AddressListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressListeners")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// A page view with no rendering backend. Loads complete only when
/// `finish_load` is called, which makes it useful for the console driver
/// and for tests.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    address: String,
    loads: Vec<String>,
    listeners: AddressListeners,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every address passed to `set_target`, oldest first.
    pub fn loads(&self) -> &[String] {
        &self.loads
    }

    /// Complete the pending load, reporting the current target as the new address.
    pub fn finish_load(&mut self) {
        let address = self.address.clone();
        self.listeners.emit(&address);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl PageView for HeadlessPage {
    fn set_target(&mut self, address: &str) {
        self.address = address.to_string();
        self.loads.push(address.to_string());
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn on_address_changed(&mut self, handler: AddressHandler) {
        self.listeners.subscribe(handler);
    }

    fn address_changed(&mut self, address: &str) {
        self.address = address.to_string();
        self.listeners.emit(address);
    }
}

/// Factory for [`HeadlessPage`] views.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPageFactory;

impl PageFactory for HeadlessPageFactory {
    type View = HeadlessPage;

    fn create_view(&mut self) -> HeadlessPage {
        HeadlessPage::new()
    }
}
