mod events;
mod render;
mod state;

// Re-export public types
pub use state::{App, Focus};


#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
