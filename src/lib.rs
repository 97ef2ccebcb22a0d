pub mod app;
pub mod batch;
pub mod config;
pub mod error;
pub mod help;
pub mod provider;
pub mod scroll;
pub mod session;
pub mod stats;
pub mod widgets;
