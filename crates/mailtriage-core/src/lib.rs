//! # mailtriage-core - Core Domain Types
//!
//! Foundation crate for mailtriage. Provides domain types, file validation
//! rules, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalysisResult`] - Category/confidence/response returned by the classifier
//! - [`HistoryEntry`] - A persisted summary of a past analysis
//! - [`InputMode`] - Upload vs. pasted text
//! - [`ToastKind`] - Success or error notification
//!
//! ### Validation (`validation`)
//! - [`validate_file_name()`] - Extension check (`.txt` / `.pdf`)
//! - [`validate_file_size()`] - Size limit check (5 MiB)
//! - [`validate_file()`] - Both checks against file metadata
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mailtriage_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all mailtriage crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    category_slug, format_confidence, format_history_date, AnalysisResult, HistoryEntry,
    InputMode, ToastKind, HISTORY_LIMIT,
};
pub use validation::{
    has_accepted_extension, validate_file, validate_file_name, validate_file_size, SelectedFile,
    ACCEPTED_EXTENSIONS, MAX_FILE_SIZE,
};
