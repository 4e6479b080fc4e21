// tabshell services
// Stateless or configuration-level helpers used by the shell and its front ends.

pub mod address;
pub mod bookmark_sink;
pub mod logging;
pub mod settings_engine;
pub mod theme_engine;
