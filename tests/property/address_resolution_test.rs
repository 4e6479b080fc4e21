//! Property-based tests for input-bar address resolution.
//!
//! Input not starting with "http" opens `"https://" + input`; input starting
//! with "http" opens unchanged. Checked both on `resolve_input` and through
//! the shell, where every submission must open exactly one new focused tab.

use proptest::prelude::*;
use tabshell::app::BrowserShell;
use tabshell::managers::input_bar::TextInputBar;
use tabshell::managers::page_view::{HeadlessPageFactory, PageView};
use tabshell::managers::tab_manager::TabHost;
use tabshell::services::address::resolve_input;
use tabshell::services::bookmark_sink::MemorySink;
use tabshell::types::settings::ShellSettings;

fn new_shell() -> BrowserShell<HeadlessPageFactory, TextInputBar> {
    BrowserShell::new(
        HeadlessPageFactory,
        TextInputBar::new(),
        Box::new(MemorySink::new()),
        ShellSettings::default(),
    )
}

/// Arbitrary text that does not start with "http".
fn arb_non_http() -> impl Strategy<Value = String> {
    ".{0,40}".prop_filter("must not start with http", |s| !s.starts_with("http"))
}

/// Arbitrary text that starts with "http".
fn arb_http() -> impl Strategy<Value = String> {
    ".{0,40}".prop_map(|rest| format!("http{}", rest))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn non_http_input_gets_https_prefix(s in arb_non_http()) {
        prop_assert_eq!(resolve_input(&s), format!("https://{}", s));
    }

    #[test]
    fn http_input_is_unchanged(s in arb_http()) {
        prop_assert_eq!(resolve_input(&s), s);
    }

    #[test]
    fn navigate_opens_one_focused_tab_on_resolved_address(
        inputs in prop::collection::vec(prop_oneof![arb_non_http(), arb_http()], 1..10)
    ) {
        let mut shell = new_shell();
        for (i, s) in inputs.iter().enumerate() {
            shell.set_input_text(s);
            let index = shell.navigate_from_input();

            prop_assert_eq!(index, i);
            prop_assert_eq!(shell.tabs().tab_count(), i + 1);
            prop_assert_eq!(shell.tabs().focused_index(), Some(i));
            let expected = resolve_input(s);
            let focused = shell.tabs().focused().unwrap();
            prop_assert_eq!(focused.view.address(), expected.as_str());
        }
    }
}
