//! Headless, line-oriented front end for the shell.
//!
//! Plain lines are typed into the input bar and submitted. Lines starting with
//! `:` are commands:
//!
//! - `:bookmark` bookmark the current input text
//! - `:text <s>` replace the input text without submitting
//! - `:redirect <address>` the focused page reports an address change
//! - `:focus <n>` focus tab `n`
//! - `:tabs`, `:bookmarks` list state
//! - `:quit` shut down (EOF does the same)
//!
//! Headless pages finish loading as soon as they are opened.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::app::BrowserShell;
use crate::managers::input_bar::TextInputBar;
use crate::managers::page_view::{HeadlessPageFactory, PageView};
use crate::managers::tab_manager::TabHost;
use crate::services::bookmark_sink::BookmarkSink;
use crate::types::settings::ShellSettings;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Submit(String),
    Bookmark,
    SetText(String),
    Redirect(String),
    Focus(usize),
    ListTabs,
    ListBookmarks,
    Quit,
    Unknown(String),
}

impl ConsoleCommand {
    /// Parse a line with its trailing newline already removed.
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return ConsoleCommand::Submit(line.to_string());
        };
        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (rest, None),
        };
        match (name, arg) {
            ("bookmark", None) => ConsoleCommand::Bookmark,
            ("text", arg) => ConsoleCommand::SetText(arg.unwrap_or("").to_string()),
            ("redirect", Some(address)) => ConsoleCommand::Redirect(address.to_string()),
            ("focus", Some(n)) => match n.trim().parse() {
                Ok(index) => ConsoleCommand::Focus(index),
                Err(_) => ConsoleCommand::Unknown(line.to_string()),
            },
            ("tabs", None) => ConsoleCommand::ListTabs,
            ("bookmarks", None) => ConsoleCommand::ListBookmarks,
            ("quit", None) => ConsoleCommand::Quit,
            _ => ConsoleCommand::Unknown(line.to_string()),
        }
    }
}

pub type ConsoleShell = BrowserShell<HeadlessPageFactory, TextInputBar>;

/// Console driver around a headless shell.
pub struct ConsoleApp {
    shell: ConsoleShell,
}

impl ConsoleApp {
    /// Launches the shell with its initial tab, already loaded.
    pub fn new(settings: ShellSettings, sink: Box<dyn BookmarkSink>) -> Self {
        let input = TextInputBar::new();
        let mut shell = BrowserShell::launch(HeadlessPageFactory, input, sink, settings);
        finish_focused_load(&mut shell);
        Self { shell }
    }

    pub fn shell(&self) -> &ConsoleShell {
        &self.shell
    }

    /// Apply one command, writing any report to `out`.
    /// Returns `false` once the shell has shut down.
    pub fn execute<W: Write>(&mut self, command: ConsoleCommand, out: &mut W) -> io::Result<bool> {
        match command {
            ConsoleCommand::Submit(text) => {
                self.shell.set_input_text(&text);
                let index = self.shell.navigate_from_input();
                finish_focused_load(&mut self.shell);
                self.write_tab(index, out)?;
            }
            ConsoleCommand::Bookmark => {
                self.shell.add_bookmark();
            }
            ConsoleCommand::SetText(text) => {
                self.shell.set_input_text(&text);
            }
            ConsoleCommand::Redirect(address) => {
                self.shell.focused_address_changed(&address);
                writeln!(out, "> {}", self.shell.input_text())?;
            }
            ConsoleCommand::Focus(index) => match self.shell.focus_tab(index) {
                Ok(()) => self.write_tab(index, out)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ConsoleCommand::ListTabs => {
                for index in 0..self.shell.tabs().tab_count() {
                    self.write_tab(index, out)?;
                }
            }
            ConsoleCommand::ListBookmarks => {
                for bookmark in self.shell.bookmarks() {
                    writeln!(out, "* {}", bookmark)?;
                }
            }
            ConsoleCommand::Quit => {
                self.shell.shutdown();
                return Ok(false);
            }
            ConsoleCommand::Unknown(line) => {
                warn!(line = %line, "Unknown command");
                writeln!(out, "unknown command: {}", line)?;
            }
        }
        Ok(true)
    }

    /// Read commands until `:quit` or end of input, then shut down.
    ///
    /// Shutdown runs even when reading or writing fails; the I/O error is
    /// returned afterwards.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let result = self.read_commands(input, out);
        self.shell.shutdown();
        result
    }

    fn read_commands<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if !self.execute(ConsoleCommand::parse(line), out)? {
                return Ok(());
            }
            out.flush()?;
        }
        Ok(())
    }

    fn write_tab<W: Write>(&self, index: usize, out: &mut W) -> io::Result<()> {
        if let Some(tab) = self.shell.tabs().get(index) {
            let marker = if self.shell.tabs().focused_index() == Some(index) { '*' } else { ' ' };
            writeln!(out, "{}[{}] {} {}", marker, index, tab.label, tab.view.address())?;
        }
        Ok(())
    }
}

fn finish_focused_load(shell: &mut ConsoleShell) {
    if let Some(tab) = shell.tabs_mut().focused_mut() {
        tab.view.finish_load();
    }
}
