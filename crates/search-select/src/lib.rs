//! A searchable single-select combobox widget.
//!
//! This crate implements the full behavior of a search-select control: a
//! text input that filters a dropdown of options as the user types, supports
//! wraparound arrow-key navigation, and submits a single committed value to
//! its owning form with validity reporting.
//!
//! The widget core is rendering-free. All visual and focus side effects go
//! through the [`RenderSurface`] capability trait, so the same state machine
//! drives any backend; [`NullSurface`] runs it headless.
//!
//! # Modules
//!
//! - [`search_select`]: The widget controller and its state machine
//! - [`model`]: Option data ([`SelectOption`], [`OptionModel`])
//! - [`filter`]: Case-sensitive substring filtering with minimal-diff updates
//! - [`cycle`]: Wraparound cursor used for arrow navigation
//! - [`form`]: Committed value and validity ([`FormValue`], [`Validity`])
//! - [`events`]: The abstract input events that drive the widget
//! - [`surface`]: The [`RenderSurface`] capability trait
//!
//! # Example
//!
//! ```
//! use search_select::{NullSurface, SearchSelect, SelectPolicy};
//!
//! let select = SearchSelect::new("fruit", NullSurface)
//!     .with_options([("Apple", "1"), ("Banana", "2"), ("Cherry", "3")])
//!     .with_policy(SelectPolicy::eager())
//!     .with_required(true);
//!
//! select.form().value_changed.connect(|value| {
//!     println!("Value is now {:?}", value);
//! });
//!
//! assert!(!select.check_validity()); // required, nothing committed yet
//! ```

pub mod cycle;
pub mod events;
pub mod filter;
pub mod form;
pub mod model;
pub mod search_select;
pub mod surface;

pub use cycle::{CycleCursor, CycleDirection};
pub use events::{
    ContentsChangedEvent, EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key,
    KeyPressEvent, KeyboardModifiers, MousePickEvent, WidgetEvent,
};
pub use filter::{FilterOutcome, OptionFilter};
pub use form::{FormValue, Validity};
pub use model::{OptionListModel, OptionModel, SelectOption};
pub use search_select::{DropdownState, SearchSelect, SelectPolicy};
pub use surface::{NullSurface, RenderSurface};

// Re-export core types that users need for signal management
pub use search_select_core::{ConnectionGuard, ConnectionId, Signal, SignalError};
