//! Property-based tests for tab operations.
//!
//! Tabs are only ever added: for any sequence of opens and focus requests the
//! tab count equals the number of opens, a fresh tab is always focused, and an
//! address change always lands in the input bar regardless of which tab is focused.

use proptest::prelude::*;
use tabshell::app::BrowserShell;
use tabshell::managers::input_bar::TextInputBar;
use tabshell::managers::page_view::{HeadlessPageFactory, PageView};
use tabshell::managers::tab_manager::TabHost;
use tabshell::services::bookmark_sink::MemorySink;
use tabshell::types::settings::ShellSettings;

#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Focus(usize),
    /// Tab picked by index modulo the tab count reports a new address.
    Report(usize, String),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            2 => (0..20usize).prop_map(TabOp::Focus),
            2 => (0..20usize, "https://[a-z]{1,8}\\.com").prop_map(|(i, a)| TabOp::Report(i, a)),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tab_open_focus_report_invariants(ops in arb_tab_ops()) {
        let mut shell = BrowserShell::new(
            HeadlessPageFactory,
            TextInputBar::new(),
            Box::new(MemorySink::new()),
            ShellSettings::default(),
        );
        let mut opened = 0usize;

        for op in &ops {
            match op {
                TabOp::Open => {
                    let index = shell.open_tab(None);
                    opened += 1;
                    prop_assert_eq!(index, opened - 1);
                    prop_assert_eq!(shell.tabs().focused_index(), Some(index));
                }
                TabOp::Focus(i) => {
                    let before = shell.tabs().focused_index();
                    let input_before = shell.input_text();
                    let result = shell.focus_tab(*i);
                    if *i < opened {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(shell.tabs().focused_index(), Some(*i));
                    } else {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(shell.tabs().focused_index(), before);
                    }
                    prop_assert_eq!(shell.input_text(), input_before);
                }
                TabOp::Report(i, address) => {
                    if opened == 0 {
                        continue;
                    }
                    let target = i % opened;
                    shell.tabs_mut().get_mut(target).unwrap().view.address_changed(address);
                    prop_assert_eq!(shell.input_text(), address.clone());
                }
            }

            prop_assert_eq!(shell.tabs().tab_count(), opened);
        }
    }
}
