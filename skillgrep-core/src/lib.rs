//! # skillgrep-core
//!
//! Core library for Skill Grep - an AI-powered candidate filtering demo.
//!
//! This library provides:
//! - Domain types for jobs, candidates, criteria, and chat messages
//! - The deterministic text-to-criteria extraction pipeline
//! - Prompt assembly and the scripted conversation driver
//! - The static candidate store with fit-band filtering
//! - Configuration management and logging infrastructure
//!
//! All "intelligence" here is simulated: criteria come from keyword and
//! regex matching, scores are pre-assigned, and explanations are canned.
//! The value of the crate is that every transformation is a pure function
//! with a byte-stable output, so the whole pipeline is testable.
//!
//! ## Example
//!
//! ```rust
//! use skillgrep_core::{extract, prompt};
//!
//! let criteria = extract::extract("5+ years of Python, remote ok", &[]);
//! let text = prompt::assemble("Senior Backend Engineer", &criteria);
//! assert!(text.starts_with("Evaluate candidates for:"));
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use store::Store;
pub use types::*;

// Public modules
pub mod config;
pub mod conversation;
pub mod error;
pub mod extract;
pub mod infer;
pub mod logging;
pub mod prompt;
pub mod store;
pub mod types;
