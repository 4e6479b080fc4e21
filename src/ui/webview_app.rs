//! WebView-based window using `wry` + `tao`.
//!
//! Architecture:
//! - One window, one WebView. The focused tab's address is what the WebView shows.
//! - `with_initialization_script` injects the toolbar (input bar, bookmark
//!   button, tab strip) into every page.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; every WebView callback
//!   forwards a `UserEvent` through the event-loop proxy, so the shell itself is
//!   only touched from the event loop.

use std::error::Error;

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tracing::debug;
use wry::{PageLoadEvent, WebViewBuilder};

use crate::app::BrowserShell;
use crate::managers::input_bar::InputBar;
use crate::managers::page_view::{AddressHandler, AddressListeners, PageFactory, PageView};
use crate::managers::tab_manager::TabHost;
use crate::services::bookmark_sink::LogSink;
use crate::services::theme_engine::ThemeEngine;
use crate::types::settings::ShellSettings;

#[derive(Debug, Clone, PartialEq)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    Submit(String),
    Bookmark(String),
    Focus(usize),
    UiReady,
    PageLoaded(String),
    TitleChanged(String),
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

// ─── Collaborators backed by the WebView ───

/// Page view of one tab. Loading is forwarded to the single WebView.
struct WebViewPage {
    address: String,
    proxy: EventLoopProxy<UserEvent>,
    listeners: AddressListeners,
}

impl PageView for WebViewPage {
    fn set_target(&mut self, address: &str) {
        self.address = address.to_string();
        let _ = self.proxy.send_event(UserEvent::LoadUrl(address.to_string()));
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

struct WebViewPageFactory {
    proxy: EventLoopProxy<UserEvent>,
}

impl PageFactory for WebViewPageFactory {
    type View = WebViewPage;

    fn create_view(&mut self) -> WebViewPage {
        WebViewPage {
            address: String::new(),
            proxy: self.proxy.clone(),
            listeners: AddressListeners::new(),
        }
    }
}

/// Input bar mirrored into the injected toolbar's text field.
struct ToolbarInput {
    text: String,
    proxy: EventLoopProxy<UserEvent>,
}

impl InputBar for ToolbarInput {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        let _ = self.proxy.send_event(UserEvent::EvalScript(set_input_script(text)));
    }
}

type GuiShell = BrowserShell<WebViewPageFactory, ToolbarInput>;

// ─── Scripts ───

fn toolbar_script(settings: &ShellSettings) -> String {
    let config = serde_json::json!({
        "css": ThemeEngine::default().stylesheet(),
        "placeholder": settings.input_placeholder,
        "bookmarkLabel": settings.bookmark_label,
    });
    format!("window.__TS_CONFIG={};\n{}", config, TOOLBAR_JS)
}

fn set_input_script(text: &str) -> String {
    format!(
        "if(window.__ts_setInput)__ts_setInput({})",
        serde_json::Value::String(text.to_string())
    )
}

fn tabs_update_script(shell: &GuiShell) -> String {
    let tabs: Vec<serde_json::Value> = shell
        .tabs()
        .tabs()
        .iter()
        .map(|t| serde_json::json!({"label": t.label, "address": t.view.address()}))
        .collect();
    let state = serde_json::json!({"tabs": tabs, "focused": shell.tabs().focused_index()});
    format!("if(window.__ts_updateTabs)__ts_updateTabs({})", state)
}

// ─── IPC ───

fn parse_ipc(message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let text = || msg.get("text").and_then(|v| v.as_str()).unwrap_or("").to_string();

    match msg.get("cmd")?.as_str()? {
        "submit" => Some(UserEvent::Submit(text())),
        "bookmark" => Some(UserEvent::Bookmark(text())),
        "focus" => msg
            .get("index")
            .and_then(|v| v.as_u64())
            .map(|i| UserEvent::Focus(i as usize)),
        "ui_ready" => Some(UserEvent::UiReady),
        _ => None,
    }
}

// ─── Main entry point ───

pub fn run(settings: ShellSettings) -> Result<(), Box<dyn Error>> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(settings.window.title.as_str())
        .with_position(LogicalPosition::new(
            settings.window.x as f64,
            settings.window.y as f64,
        ))
        .with_inner_size(LogicalSize::new(
            settings.window.width as f64,
            settings.window.height as f64,
        ))
        .build(&event_loop)?;

    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let title_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_url("about:blank")
        .with_initialization_script(toolbar_script(&settings))
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let body = request.body().as_str();
            match parse_ipc(body) {
                Some(event) => {
                    let _ = ipc_proxy.send_event(event);
                }
                None => {
                    let preview: String = body.chars().take(200).collect();
                    debug!(body = %preview, "Ignored IPC message");
                }
            }
        })
        .with_on_page_load_handler(move |event, url| {
            // The placeholder page loaded before the first tab is not an address change.
            if matches!(event, PageLoadEvent::Finished) && url != "about:blank" {
                let _ = load_proxy.send_event(UserEvent::PageLoaded(url));
            }
        })
        .with_document_title_changed_handler(move |title| {
            let _ = title_proxy.send_event(UserEvent::TitleChanged(title));
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("Failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    let input = ToolbarInput {
        text: String::new(),
        proxy: proxy.clone(),
    };
    let factory = WebViewPageFactory { proxy };
    let mut shell: GuiShell = BrowserShell::launch(factory, input, Box::new(LogSink), settings);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        // Keep the window alive for as long as the loop runs.
        let _ = &window;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                shell.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    debug!(url = %url, "Loading");
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::Submit(text) => {
                    shell.set_input_text(&text);
                    shell.navigate_from_input();
                    let _ = webview.evaluate_script(&tabs_update_script(&shell));
                }
                UserEvent::Bookmark(text) => {
                    shell.set_input_text(&text);
                    shell.add_bookmark();
                }
                UserEvent::Focus(index) => {
                    if shell.focus_tab(index).is_ok() {
                        if let Some(tab) = shell.tabs().focused() {
                            let _ = webview.load_url(tab.view.address());
                        }
                        let _ = webview.evaluate_script(&tabs_update_script(&shell));
                    }
                }
                UserEvent::UiReady => {
                    let _ = webview.evaluate_script(&set_input_script(&shell.input_text()));
                    let _ = webview.evaluate_script(&tabs_update_script(&shell));
                }
                UserEvent::PageLoaded(url) => {
                    shell.focused_address_changed(&url);
                    let _ = webview.evaluate_script(&tabs_update_script(&shell));
                }
                UserEvent::TitleChanged(title) => {
                    if !title.is_empty() {
                        shell.set_focused_label(&title);
                        let _ = webview.evaluate_script(&tabs_update_script(&shell));
                    }
                }
            },

            _ => {}
        }
    })
}
