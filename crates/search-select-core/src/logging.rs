//! Logging facilities for search-select.
//!
//! The workspace is instrumented with the `tracing` crate. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout search-select for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "search_select::signal";
    /// Widget event dispatch span.
    pub const EVENT: &str = "search_select::event";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "search_select_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "search_select_core::signal";
    /// Widget state machine target.
    pub const WIDGET: &str = "search_select::widget";
    /// Option filtering target.
    pub const FILTER: &str = "search_select::filter";
    /// Form value and validity target.
    pub const FORM: &str = "search_select::form";
}
