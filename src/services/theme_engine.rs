//! Theme Engine — the shell's dark stylesheet for the window chrome.

use std::collections::HashMap;

/// Colors and metrics of the window chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub window_bg: &'static str,
    pub window_fg: &'static str,
    pub font_size_px: u32,
    pub pane_bg: &'static str,
    pub pane_border: &'static str,
    pub tab_bg: &'static str,
    pub tab_fg: &'static str,
    pub tab_selected_bg: &'static str,
    pub tab_border: &'static str,
    pub input_bg: &'static str,
    pub input_fg: &'static str,
    pub input_border: &'static str,
    pub button_bg: &'static str,
    pub button_fg: &'static str,
    pub button_border: &'static str,
    pub button_hover_bg: &'static str,
    pub button_pressed_bg: &'static str,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            window_bg: "#2E2E2E",
            window_fg: "#F0F0F0",
            font_size_px: 14,
            pane_bg: "#1D1D1D",
            pane_border: "#444",
            tab_bg: "#333",
            tab_fg: "#FFF",
            tab_selected_bg: "#444",
            tab_border: "#444",
            input_bg: "#333",
            input_fg: "#FFF",
            input_border: "#555",
            button_bg: "#444",
            button_fg: "#FFF",
            button_border: "#666",
            button_hover_bg: "#555",
            button_pressed_bg: "#666",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

/// Renders the palette into CSS for the toolbar injected above every page.
#[derive(Debug, Clone, Default)]
pub struct ThemeEngine {
    palette: Palette,
}

impl ThemeEngine {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// CSS custom properties, keyed by variable name.
    pub fn get_css_variables(&self) -> HashMap<String, String> {
        let p = &self.palette;
        let mut vars = HashMap::new();
        vars.insert("--ts-window-bg".into(), p.window_bg.into());
        vars.insert("--ts-window-fg".into(), p.window_fg.into());
        vars.insert("--ts-font-size".into(), format!("{}px", p.font_size_px));
        vars.insert("--ts-pane-bg".into(), p.pane_bg.into());
        vars.insert("--ts-pane-border".into(), p.pane_border.into());
        vars.insert("--ts-tab-bg".into(), p.tab_bg.into());
        vars.insert("--ts-tab-fg".into(), p.tab_fg.into());
        vars.insert("--ts-tab-selected-bg".into(), p.tab_selected_bg.into());
        vars.insert("--ts-tab-border".into(), p.tab_border.into());
        vars.insert("--ts-input-bg".into(), p.input_bg.into());
        vars.insert("--ts-input-fg".into(), p.input_fg.into());
        vars.insert("--ts-input-border".into(), p.input_border.into());
        vars.insert("--ts-button-bg".into(), p.button_bg.into());
        vars.insert("--ts-button-fg".into(), p.button_fg.into());
        vars.insert("--ts-button-border".into(), p.button_border.into());
        vars.insert("--ts-button-hover-bg".into(), p.button_hover_bg.into());
        vars.insert("--ts-button-pressed-bg".into(), p.button_pressed_bg.into());
        vars
    }

    /// Full stylesheet for the toolbar elements created by `toolbar.js`.
    pub fn stylesheet(&self) -> String {
        let mut vars: Vec<(String, String)> = self.get_css_variables().into_iter().collect();
        vars.sort();

        let mut css = String::from("#ts-toolbar{");
        for (name, value) in &vars {
            css.push_str(&format!("{}:{};", name, value));
        }
        css.push_str(
            "position:fixed;top:0;left:0;right:0;z-index:2147483647;\
             background-color:var(--ts-window-bg);color:var(--ts-window-fg);\
             font-size:var(--ts-font-size);font-family:sans-serif;\
             border-bottom:1px solid var(--ts-pane-border)}",
        );
        css.push_str(
            "#ts-toolbar .ts-row{display:flex;align-items:center;padding:3px}\
             #ts-toolbar .ts-tabs{background-color:var(--ts-pane-bg);overflow-x:auto}",
        );
        css.push_str(
            "#ts-toolbar .ts-tab{background-color:var(--ts-tab-bg);color:var(--ts-tab-fg);\
             padding:5px;border:1px solid var(--ts-tab-border);cursor:pointer;\
             white-space:nowrap;max-width:200px;overflow:hidden;text-overflow:ellipsis}\
             #ts-toolbar .ts-tab.selected{background-color:var(--ts-tab-selected-bg)}",
        );
        css.push_str(
            "#ts-toolbar .ts-input{flex:1;background-color:var(--ts-input-bg);\
             color:var(--ts-input-fg);border:1px solid var(--ts-input-border);padding:5px}",
        );
        css.push_str(
            "#ts-toolbar .ts-button{background-color:var(--ts-button-bg);\
             color:var(--ts-button-fg);border:1px solid var(--ts-button-border);\
             padding:5px;margin:3px;cursor:pointer}\
             #ts-toolbar .ts-button:hover{background-color:var(--ts-button-hover-bg)}\
             #ts-toolbar .ts-button:active{background-color:var(--ts-button-pressed-bg)}",
        );
        css
    }
}
