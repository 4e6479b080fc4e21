//! Unit tests for the BrowserShell coordination contract.

use tabshell::app::BrowserShell;
use tabshell::managers::input_bar::TextInputBar;
use tabshell::managers::page_view::{HeadlessPageFactory, PageView};
use tabshell::managers::tab_manager::TabHost;
use tabshell::services::address::DEFAULT_ADDRESS;
use tabshell::services::bookmark_sink::MemorySink;
use tabshell::types::settings::ShellSettings;

type Shell = BrowserShell<HeadlessPageFactory, TextInputBar>;

fn new_shell() -> (Shell, MemorySink) {
    let sink = MemorySink::new();
    let shell = BrowserShell::new(
        HeadlessPageFactory,
        TextInputBar::new(),
        Box::new(sink.clone()),
        ShellSettings::default(),
    );
    (shell, sink)
}

fn focused_address(shell: &Shell) -> String {
    shell.tabs().focused().unwrap().view.address().to_string()
}

#[test]
fn test_launch_opens_default_tab() {
    let shell = BrowserShell::launch(
        HeadlessPageFactory,
        TextInputBar::new(),
        Box::new(MemorySink::new()),
        ShellSettings::default(),
    );
    assert_eq!(shell.tabs().tab_count(), 1);
    assert_eq!(focused_address(&shell), DEFAULT_ADDRESS);
    assert_eq!(shell.tabs().focused().unwrap().label, "New Tab");
}

#[test]
fn test_open_tab_without_address_uses_default() {
    let (mut shell, _) = new_shell();
    shell.open_tab(None);
    assert_eq!(focused_address(&shell), "https://www.google.com");
}

#[test]
fn test_default_address_follows_settings() {
    let settings = ShellSettings {
        default_address: "https://duckduckgo.com".to_string(),
        ..ShellSettings::default()
    };
    let mut shell = BrowserShell::new(
        HeadlessPageFactory,
        TextInputBar::new(),
        Box::new(MemorySink::new()),
        settings,
    );
    shell.open_tab(None);
    assert_eq!(focused_address(&shell), "https://duckduckgo.com");
}

#[test]
fn test_navigate_prefixes_bare_input() {
    let (mut shell, _) = new_shell();
    shell.set_input_text("example.com");
    shell.navigate_from_input();
    assert_eq!(focused_address(&shell), "https://example.com");
}

#[test]
fn test_navigate_keeps_http_input() {
    let (mut shell, _) = new_shell();
    shell.set_input_text("http://example.com");
    shell.navigate_from_input();
    assert_eq!(focused_address(&shell), "http://example.com");
}

#[test]
fn test_search_term_becomes_invalid_https_address() {
    let (mut shell, _) = new_shell();
    shell.set_input_text("rust ownership");
    shell.navigate_from_input();
    assert_eq!(focused_address(&shell), "https://rust ownership");
}

#[test]
fn test_every_submission_opens_new_tab() {
    let (mut shell, _) = new_shell();
    shell.open_tab(None);
    shell.set_input_text("a.com");
    shell.navigate_from_input();
    shell.navigate_from_input();
    assert_eq!(shell.tabs().tab_count(), 3);
    assert_eq!(shell.tabs().focused_index(), Some(2));
    // The first tab still shows its original address.
    assert_eq!(
        shell.tabs().get(0).unwrap().view.address(),
        DEFAULT_ADDRESS
    );
}

#[test]
fn test_navigate_does_not_rewrite_input_text() {
    let (mut shell, _) = new_shell();
    shell.set_input_text("example.com");
    shell.navigate_from_input();
    assert_eq!(shell.input_text(), "example.com");
}

#[test]
fn test_focused_address_change_updates_input() {
    let (mut shell, _) = new_shell();
    shell.open_tab(None);
    shell.focused_address_changed("https://example.com");
    assert_eq!(shell.input_text(), "https://example.com");
    assert_eq!(focused_address(&shell), "https://example.com");
}

#[test]
fn test_background_tab_address_change_still_updates_input() {
    let (mut shell, _) = new_shell();
    shell.open_tab(Some("https://a.com"));
    shell.open_tab(Some("https://b.com"));
    shell.set_input_text("https://b.com");

    shell
        .tabs_mut()
        .get_mut(0)
        .unwrap()
        .view
        .address_changed("https://a.com/redirected");

    assert_eq!(shell.tabs().focused_index(), Some(1));
    assert_eq!(shell.input_text(), "https://a.com/redirected");
}

#[test]
fn test_address_change_is_not_revalidated() {
    let (mut shell, _) = new_shell();
    shell.open_tab(None);
    shell.focused_address_changed("not a url");
    assert_eq!(shell.input_text(), "not a url");
}

#[test]
fn test_bookmark_twice_keeps_one_entry() {
    let (mut shell, _) = new_shell();
    shell.set_input_text("https://a.com");
    shell.add_bookmark();
    shell.add_bookmark();
    assert_eq!(shell.bookmarks(), ["https://a.com".to_string()]);
}

#[test]
fn test_bookmarks_keep_insertion_order() {
    let (mut shell, _) = new_shell();
    shell.set_input_text("A");
    shell.add_bookmark();
    shell.set_input_text("B");
    shell.add_bookmark();
    shell.set_input_text("A");
    shell.add_bookmark();
    assert_eq!(shell.bookmarks(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn test_bookmark_uses_reflected_address() {
    let (mut shell, _) = new_shell();
    shell.open_tab(None);
    shell.tabs_mut().focused_mut().unwrap().view.finish_load();
    shell.add_bookmark();
    assert_eq!(shell.bookmarks(), [DEFAULT_ADDRESS.to_string()]);
}

#[test]
fn test_shutdown_without_bookmarks_does_not_flush() {
    let (mut shell, sink) = new_shell();
    shell.shutdown();
    assert!(sink.flushes().is_empty());
}

#[test]
fn test_shutdown_flushes_all_bookmarks_once_in_order() {
    let (mut shell, sink) = new_shell();
    for text in ["https://a.com", "https://b.com", "https://c.com"] {
        shell.set_input_text(text);
        shell.add_bookmark();
    }
    shell.shutdown();
    assert_eq!(
        sink.flushes(),
        vec![vec![
            "https://a.com".to_string(),
            "https://b.com".to_string(),
            "https://c.com".to_string(),
        ]]
    );
}
