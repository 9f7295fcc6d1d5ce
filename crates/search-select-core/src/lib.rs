//! Core systems for search-select.
//!
//! This crate provides the foundational components shared by the search-select
//! widget crates:
//!
//! - **Signal/Slot System**: Type-safe notification of widget state changes
//! - **Errors**: Error types for signal connection management
//! - **Logging**: Tracing target constants used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use search_select_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit("banana".to_string());
//!
//! // Disconnect when done
//! let _ = value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
