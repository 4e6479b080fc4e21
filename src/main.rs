//! tabshell — a minimal tabbed web-browser shell.
//!
//! Entry point: loads settings, sets up logging, then opens the browser window.
//! When built without the `gui` feature, runs the shell headless over stdin.

use tabshell::services::logging;
use tabshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabshell::types::settings::ShellSettings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = SettingsEngine::new(None);
    let loaded = engine.load();
    let settings = loaded.as_ref().cloned().unwrap_or_else(|_| ShellSettings::default());

    logging::init_tracing(&settings.log_filter);
    if let Err(e) = loaded {
        tracing::warn!("Settings load failed, using defaults: {}", e);
    }
    tracing::info!("tabshell v{} starting", env!("CARGO_PKG_VERSION"));

    run(settings)
}

#[cfg(feature = "gui")]
fn run(settings: ShellSettings) -> Result<(), Box<dyn std::error::Error>> {
    tabshell::ui::webview_app::run(settings)
}

#[cfg(not(feature = "gui"))]
fn run(settings: ShellSettings) -> Result<(), Box<dyn std::error::Error>> {
    use tabshell::services::bookmark_sink::LogSink;
    use tabshell::ui::console_app::ConsoleApp;

    let mut app = ConsoleApp::new(settings, Box::new(LogSink));
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    app.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
