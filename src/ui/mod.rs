// tabshell front ends
// `console_app` drives the shell over stdin; `webview_app` is the wry/tao window.

pub mod console_app;

#[cfg(feature = "gui")]
pub mod webview_app;
