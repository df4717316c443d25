//! # Cronex: Cron Expression Field Expansion
//!
//! Cronex parses a cron-style schedule expression (five time fields
//! plus a trailing command) into the concrete set of integer values
//! each field represents, and renders that expansion as an aligned
//! label/value table.
//!
//! ## Features
//!
//! - **Field Expansion**: wildcards, ranges, steps, and comma-joined
//!   lists expanded into sorted, deduplicated value sets
//! - **Alias Support**: case-insensitive month and weekday names
//!   (`FeB`, `tUe`)
//! - **Descriptive Errors**: every failure names the offending text
//!   and the field it occurred in
//! - **Pure Parsing**: no I/O and no shared mutable state; safe to
//!   call from any number of threads
//!
//! ## Basic Example
//!
//! ```
//! let result = cronex::parse("*/15 0 1,15 * 1-5 /usr/bin/find")?;
//!
//! assert_eq!(result.fields[0].values, vec![0, 15, 30, 45]);
//! assert_eq!(result.command, "/usr/bin/find");
//!
//! println!("{}", cronex::table(&result));
//! # Ok::<(), cronex::CronexError>(())
//! ```
//!
//! ## Expression Syntax
//!
//! Five space-separated fields (minute, hour, day of month, month,
//! day of week) followed by the command. Everything after the fifth
//! field is the command, spaces included.
//!
//! - `*` - every value of the field (`?` on the day fields)
//! - `1-5` - inclusive range
//! - `*/15`, `1-10/3` - range with step
//! - `1/5` - repeating step anchored at a single value
//! - `1,15` - list of independently expanded units
//!
//! ## Main Components
//!
//! - [`parse`] - parses a full expression into a [`ScheduleResult`]
//! - [`expand_field`] - expands one field against a [`Slot`]
//! - [`table`] - renders a [`ScheduleResult`] as an aligned table
//! - [`CronexError`] - error types for the library

// Re-export the main components
pub use crate::errors::CronexError;
pub use crate::output::{row, table};
pub use crate::parser::{expand_field, parse, FieldResult, ScheduleResult};
pub use crate::slots::{Grammar, Slot, SLOTS};

// Main modules
pub mod errors;
pub mod output;
pub mod parser;
pub mod slots;

/// Convenient result type alias for Cronex operations.
///
/// This is equivalent to `std::result::Result<T, CronexError>`.
///
/// # Examples
///
/// ```
/// use cronex::Result;
///
/// fn do_something() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CronexError>;

/// The version of the Cronex library.
///
/// This is extracted from the `Cargo.toml` at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
