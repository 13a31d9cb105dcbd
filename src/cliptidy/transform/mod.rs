//! # Transformations
//!
//! The text-processing core. Every function here is a pure `&str -> String`
//! mapping: no I/O, no configuration, no shared mutable state. Regexes are
//! compiled once into immutable statics, so the functions can be called from
//! any thread.
//!
//! | Function | What it does |
//! |----------|--------------|
//! | [`remove_duplicates`] | Drops blank and repeated lines (compared trimmed) |
//! | [`cleanup_format`] | Trims lines, collapses inner whitespace, drops blank lines |
//! | [`convert_to_list`] | Splits text into items and prefixes each with `• ` |
//! | [`fix_grammar`] | Applies a fixed sequence of spacing/capitalization heuristics |
//! | [`change_case`] | Upper, lower, title or sentence case |
//!
//! The functions are independent; chaining them is the caller's job (see
//! [`crate::commands::apply`]).

pub mod case;
pub mod cleanup;
pub mod dedupe;
pub mod grammar;
pub mod list;

pub use case::{change_case, change_case_code};
pub use cleanup::cleanup_format;
pub use dedupe::remove_duplicates;
pub use grammar::fix_grammar;
pub use list::convert_to_list;
