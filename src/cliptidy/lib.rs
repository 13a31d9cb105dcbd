//! # cliptidy Architecture
//!
//! cliptidy is a **UI-agnostic text cleanup library**: five deterministic
//! transformations for clipboard entries and notes, plus the plumbing to chain
//! them. The `cliptidy` binary is one client of this library, not the library
//! itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves input, prints output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (step names → Transforms)              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pipeline execution with per-step reports, config actions │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transform Core (transform/)                                │
//! │  - Pure &str -> String functions, no state, never fail      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Core Cannot Fail
//!
//! Every function in [`transform`] is total over the string domain. Empty or
//! blank input degrades to empty output, and an unknown case mode leaves the
//! text untouched. Errors ([`error::TidyError`]) only come from the outer
//! layers: config files, the clipboard, and unknown step names.
//!
//! ## Module Overview
//!
//! - [`transform`]: The five transformations
//! - [`model`]: `CaseMode` and `Transform` (a pipeline step)
//! - [`commands`]: Pipeline runner and config command
//! - [`api`]: The API facade
//! - [`config`]: Configuration file handling
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod transform;
