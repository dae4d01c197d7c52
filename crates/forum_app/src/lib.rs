//! Forum reader app: configuration, logging, navigation dispatch and CLI commands.
pub mod commands;
pub mod config;
pub mod logging;
pub mod navigation;
