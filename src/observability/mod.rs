//! Structured logging for the widget and its host binary.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | rotating log file
//! ```
//!
//! # Features
//!
//! - **Level control**: `RUST_LOG` first, then `trace_level`, then `info`
//! - **File output**: `log_file` switches from stderr to a [`FileWriter`]
//! - **Automatic Rotation**: files rotate at 10MB with 3-backup retention
//!
//! Diagnostics never reach stdout, which carries the rendered markup.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: rotating file writer

mod file_writer;
mod init;

pub use file_writer::{FileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{build_filter, build_subscriber, configured_filter, init_tracing, DEFAULT_TRACE_LEVEL};
