// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod filter;
pub mod gui;
pub mod log;
pub mod metrics;
pub mod narrative;
pub mod output;
pub mod pages;
pub mod record;
pub mod store;
