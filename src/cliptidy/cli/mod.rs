//! # CLI Behavior
//!
//! This is **one possible UI client** for cliptidy, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Input Resolution
//!
//! Every transforming command needs text. Sources are tried in this order:
//!
//! 1. **Text arguments**: `cliptidy list milk, eggs, bread`
//! 2. **`--file PATH`**: the file's content
//! 3. **`--clipboard`**: the current system clipboard
//! 4. **Piped stdin**: `pbpaste | cliptidy dedupe`
//!
//! Flags may follow the text (`cliptidy list milk, eggs --copy`). Text that
//! starts with a dash goes after `--`: `cliptidy list -- - milk`.
//!
//! File and stdin input lose one trailing line break (the one every editor
//! and `echo` adds), so `echo hi | cliptidy upper` prints `HI`, not `HI\n\n`.
//!
//! ## Naked Execution
//!
//! `cliptidy` with no subcommand runs the configured pipeline, so
//! `pbpaste | cliptidy | pbcopy` is the shortest useful invocation.
//!
//! ## Output
//!
//! The transformed text, and nothing else, goes to stdout. Reports, warnings
//! and errors go to stderr so the tool composes in pipes.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context setup and per-command handlers
//! - `render.rs`: turns `CmdResult` parts into styled strings

mod commands;
mod render;
mod setup;

pub use commands::run;
