//! Todo CLI Library
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod paths;
pub mod shell;
pub mod storage;
pub mod store;
pub mod types;
