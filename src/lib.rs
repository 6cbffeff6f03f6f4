pub mod commands;
pub mod config;
pub mod installer;
pub mod linker;
pub mod namespace;
pub mod package;
pub mod report;
pub mod runtime;
