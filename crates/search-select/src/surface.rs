//! Render surface capability trait.
//!
//! The widget core never touches a screen. Everything it needs from the
//! outside world is expressed through [`RenderSurface`]: mirroring text into
//! the search input, toggling dropdown and per-option visibility, moving the
//! active highlight, and the focus side effects (focus, select-all, blur)
//! that selection confirmation triggers. Hosts implement this trait for
//! their rendering backend; [`NullSurface`] is a no-op implementation for
//! headless use.

/// The rendering and focus operations the widget requires from its host.
///
/// Implementations should treat every call as idempotent: the widget may
/// re-assert state it believes is already in effect.
pub trait RenderSurface {
    /// Inject the widget's one-time styling into the host document.
    ///
    /// Called exactly once, when the widget is constructed.
    fn inject_styles(&mut self);

    /// Give keyboard focus to the search input.
    fn focus_input(&mut self);

    /// Remove keyboard focus from the search input.
    fn blur_input(&mut self);

    /// Select the entire contents of the search input.
    fn select_all_text(&mut self);

    /// Replace the text shown in the search input.
    fn set_input_text(&mut self, text: &str);

    /// Show or hide the dropdown list.
    fn set_dropdown_visible(&mut self, visible: bool);

    /// Show or hide a single option row, identified by its index in the full
    /// option set.
    fn set_option_visible(&mut self, index: usize, visible: bool);

    /// Move the active highlight to the option at `index`, or clear it.
    ///
    /// The index refers to the full option set.
    fn set_active_option(&mut self, index: Option<usize>);
}

/// A render surface that ignores every call.
///
/// Useful for headless operation and for driving the widget purely through
/// its signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn inject_styles(&mut self) {}
    fn focus_input(&mut self) {}
    fn blur_input(&mut self) {}
    fn select_all_text(&mut self) {}
    fn set_input_text(&mut self, _text: &str) {}
    fn set_dropdown_visible(&mut self, _visible: bool) {}
    fn set_option_visible(&mut self, _index: usize, _visible: bool) {}
    fn set_active_option(&mut self, _index: Option<usize>) {}
}
