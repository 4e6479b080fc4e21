// tabshell state managers
// Managers hold the shell's collaborators: tabs, page views, the input bar and bookmarks.

pub mod bookmark_manager;
pub mod input_bar;
pub mod page_view;
pub mod tab_manager;
