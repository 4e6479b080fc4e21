//! Destination for the bookmark list when the shell shuts down.
//!
//! Bookmarks are never written to durable storage; the default sink only logs.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

/// Receives the bookmark list once, at shutdown.
pub trait BookmarkSink {
    fn flush(&mut self, bookmarks: &[String]);
}

/// Writes the bookmark list to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl BookmarkSink for LogSink {
    fn flush(&mut self, bookmarks: &[String]) {
        info!(count = bookmarks.len(), ?bookmarks, "Bookmarks saved");
    }
}

/// Keeps every flush in memory. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    flushes: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every flush received so far, oldest first.
    pub fn flushes(&self) -> Vec<Vec<String>> {
        self.flushes.borrow().clone()
    }
}

impl BookmarkSink for MemorySink {
    fn flush(&mut self, bookmarks: &[String]) {
        self.flushes.borrow_mut().push(bookmarks.to_vec());
    }
}
