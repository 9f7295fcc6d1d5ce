//! The search-select widget controller.
//!
//! `SearchSelect` is a searchable single-select combobox: a text input that
//! filters a dropdown of options as the user types, supports wraparound arrow
//! navigation, and submits a committed value to its owning form. The
//! controller holds all widget state and drives a [`RenderSurface`] for
//! everything the host must display.
//!
//! # Example
//!
//! ```
//! use search_select::{NullSurface, SearchSelect, WidgetEvent, KeyPressEvent, Key, KeyboardModifiers};
//!
//! let mut select = SearchSelect::new("fruit", NullSurface)
//!     .with_options([("Apple", "1"), ("Banana", "2"), ("Cherry", "3")]);
//!
//! select.activated.connect(|&index| {
//!     println!("Picked option {}", index);
//! });
//!
//! let mut down = WidgetEvent::KeyPress(KeyPressEvent::new(
//!     Key::ArrowDown,
//!     KeyboardModifiers::NONE,
//!     "",
//! ));
//! select.handle_event(&mut down);
//! ```

use search_select_core::logging::targets;
use search_select_core::Signal;
use unicode_segmentation::UnicodeSegmentation;

use crate::cycle::{CycleCursor, CycleDirection};
use crate::events::{Key, KeyPressEvent, WidgetEvent};
use crate::filter::OptionFilter;
use crate::form::{FormValue, Validity};
use crate::model::{OptionListModel, OptionModel};
use crate::surface::RenderSurface;

// ============================================================================
// Dropdown State
// ============================================================================

/// The widget's dropdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    /// The dropdown is hidden.
    #[default]
    Closed,
    /// The dropdown is open and the user is navigating with the keyboard.
    OpenBrowsing,
    /// The dropdown is open and the visible set reflects the current query.
    OpenFiltering,
}

// ============================================================================
// Selection Policy
// ============================================================================

/// Tunable selection behavior.
///
/// The two named constructors capture the two interaction styles the widget
/// supports: [`eager`](Self::eager) keeps the committed value tracking the
/// highlight, [`deferred`](Self::deferred) commits only on explicit
/// confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectPolicy {
    /// After each filtering pass, highlight the first visible option.
    pub auto_activate_first_match: bool,
    /// Commit the highlighted option's value while navigating with arrows,
    /// and resolve a best-effort value when focus is lost.
    pub commit_on_navigate: bool,
    /// Select the entire input text when the widget gains focus.
    pub select_all_on_focus: bool,
}

impl SelectPolicy {
    /// Eager selection: the committed value follows the highlight.
    pub fn eager() -> Self {
        Self {
            auto_activate_first_match: true,
            commit_on_navigate: true,
            select_all_on_focus: true,
        }
    }

    /// Deferred selection: nothing is committed until Enter or a mouse pick.
    pub fn deferred() -> Self {
        Self {
            auto_activate_first_match: false,
            commit_on_navigate: false,
            select_all_on_focus: true,
        }
    }
}

impl Default for SelectPolicy {
    fn default() -> Self {
        Self::eager()
    }
}

// ============================================================================
// SearchSelect Widget
// ============================================================================

/// A searchable single-select combobox.
///
/// The widget owns its option model, the current query, the visible subset,
/// the active highlight, and the form-facing committed value. It is driven
/// entirely through [`handle_event`](Self::handle_event) and pushes every
/// visual consequence to its [`RenderSurface`].
///
/// # Signals
///
/// - `activated(usize)`: an option was confirmed (Enter or mouse pick); the
///   payload is the option's index in the full option set
/// - `highlighted(usize)`: the active highlight moved to an option
///
/// Value and validity signals live on the widget's [`FormValue`], reachable
/// through [`form`](Self::form).
pub struct SearchSelect<S: RenderSurface> {
    /// The host-facing rendering and focus operations.
    surface: S,

    /// Form participation: committed value and validity.
    form: FormValue,

    /// The option set.
    model: OptionListModel,

    /// Per-option visibility across filtering passes.
    filter: OptionFilter,

    /// Indices of currently visible options, in model order.
    visible: Vec<usize>,

    /// Position of the active highlight within `visible`.
    active: Option<usize>,

    /// The current query text, mirrored into the search input.
    query: String,

    /// Dropdown state.
    state: DropdownState,

    /// Selection behavior.
    policy: SelectPolicy,

    // Signals
    /// Signal emitted when an option is confirmed.
    pub activated: Signal<usize>,
    /// Signal emitted when the active highlight moves.
    pub highlighted: Signal<usize>,
}

impl<S: RenderSurface> SearchSelect<S> {
    /// Create a widget that submits under `name`, with no options yet.
    ///
    /// The surface's one-time styling is injected here.
    pub fn new(name: impl Into<String>, mut surface: S) -> Self {
        surface.inject_styles();
        surface.set_dropdown_visible(false);

        Self {
            surface,
            form: FormValue::new(name),
            model: OptionListModel::empty(),
            filter: OptionFilter::new(0),
            visible: Vec::new(),
            active: None,
            query: String::new(),
            state: DropdownState::Closed,
            policy: SelectPolicy::default(),
            activated: Signal::new(),
            highlighted: Signal::new(),
        }
    }

    /// Set options using builder pattern.
    pub fn with_options(mut self, options: impl Into<OptionListModel>) -> Self {
        self.set_options(options.into());
        self
    }

    /// Set the selection policy using builder pattern.
    pub fn with_policy(mut self, policy: SelectPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set whether an empty value fails validation, using builder pattern.
    pub fn with_required(mut self, required: bool) -> Self {
        self.form.set_required(required);
        self
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Replace the option set.
    ///
    /// The visible subset resets to the full set, the highlight clears, and
    /// the legal value set used for validation is rebuilt. If the new set
    /// marks an option as pre-selected, its value is committed and its text
    /// mirrored into the input.
    pub fn set_options(&mut self, options: OptionListModel) {
        let count = options.row_count();
        self.model = options;
        self.form.set_valid_values(self.model.values());

        self.filter.reset(count);
        self.visible = (0..count).collect();
        for index in 0..count {
            self.surface.set_option_visible(index, true);
        }
        self.active = None;
        self.surface.set_active_option(None);

        if let Some(selected) = self.model.selected_index()
            && let Some(option) = self.model.option(selected)
        {
            self.query = option.text.clone();
            self.surface.set_input_text(&option.text);
            self.form.set_value(Some(option.value));
            // The visible subset is the full set here, so position == index.
            self.active = Some(selected);
            self.surface.set_active_option(Some(selected));
        }
    }

    /// The option set.
    pub fn options(&self) -> &OptionListModel {
        &self.model
    }

    /// Indices of the currently visible options, in model order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// The model index of the highlighted option, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|pos| self.visible[pos])
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    /// The dropdown state.
    pub fn state(&self) -> DropdownState {
        self.state
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selection policy.
    pub fn policy(&self) -> SelectPolicy {
        self.policy
    }

    /// The committed value, if any.
    pub fn value(&self) -> Option<&str> {
        self.form.value()
    }

    /// The form-facing state (value and validity signals live here).
    pub fn form(&self) -> &FormValue {
        &self.form
    }

    /// Mutable access to the form-facing state.
    pub fn form_mut(&mut self) -> &mut FormValue {
        &mut self.form
    }

    /// The current validity flags.
    pub fn validity(&self) -> &Validity {
        self.form.validity()
    }

    /// Whether the committed value currently passes validation.
    pub fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    /// Check validity and ask the host to surface the result to the user.
    pub fn report_validity(&self) -> bool {
        self.form.report_validity()
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch a widget event. Returns `true` (and accepts the event) when
    /// the widget handled it.
    pub fn handle_event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::FocusIn(_) => self.handle_focus_in(),
            WidgetEvent::FocusOut(_) => self.handle_focus_out(),
            WidgetEvent::KeyPress(e) => {
                let e = e.clone();
                self.handle_key_press(&e)
            }
            WidgetEvent::MousePick(e) => {
                let index = e.index;
                self.handle_mouse_pick(index)
            }
            WidgetEvent::ContentsChanged(e) => {
                let options = std::mem::take(&mut e.options);
                self.set_options(OptionListModel::new(options));
                true
            }
        };

        if handled {
            event.accept();
        }
        handled
    }

    fn handle_focus_in(&mut self) -> bool {
        if self.state == DropdownState::Closed {
            self.set_state(DropdownState::OpenBrowsing);
        }
        self.surface.set_dropdown_visible(true);
        if self.policy.select_all_on_focus {
            self.surface.select_all_text();
        }
        // The input may still hold text from a previous visit; make the
        // visible subset match it.
        self.apply_filter();
        true
    }

    fn handle_focus_out(&mut self) -> bool {
        if self.state == DropdownState::Closed {
            // Already closed (e.g. Escape released focus); nothing to resolve.
            return false;
        }

        if self.policy.commit_on_navigate {
            self.resolve_best_effort();
        }

        // Losing focus forgets the filtering: every option is visible again
        // the next time the dropdown opens.
        self.show_all_options();
        self.clear_active();
        self.set_state(DropdownState::Closed);
        self.surface.set_dropdown_visible(false);
        true
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        match event.key {
            Key::ArrowDown => {
                self.navigate(CycleDirection::Forward);
                return true;
            }
            Key::ArrowUp => {
                self.navigate(CycleDirection::Backward);
                return true;
            }
            Key::Enter => {
                self.confirm_selection();
                return true;
            }
            Key::Escape => {
                self.cancel();
                return true;
            }
            Key::Backspace => {
                // Remove one grapheme cluster, not one byte or code point.
                if let Some((offset, _)) = self.query.grapheme_indices(true).next_back() {
                    self.query.truncate(offset);
                }
                self.on_query_edited();
                return true;
            }
            _ => {}
        }

        // Printable input extends the query.
        if let Some(ch) = event.text.chars().next()
            && !ch.is_control()
        {
            self.query.push(ch);
            self.on_query_edited();
            return true;
        }

        false
    }

    fn handle_mouse_pick(&mut self, index: usize) -> bool {
        if !self.filter.is_visible(index) {
            return false;
        }

        self.active = self.visible.iter().position(|&i| i == index);
        self.surface.set_active_option(Some(index));
        self.commit_option(index);
        self.surface.focus_input();
        self.set_state(DropdownState::Closed);
        self.surface.set_dropdown_visible(false);
        true
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// A keystroke changed the query: show the dropdown, refilter, and track
    /// the raw text as the committed value so validity follows the typing.
    fn on_query_edited(&mut self) {
        self.set_state(DropdownState::OpenFiltering);
        self.surface.set_dropdown_visible(true);
        self.surface.set_input_text(&self.query);
        self.apply_filter();
        self.form.set_value(Some(self.query.clone()));
    }

    /// Move the highlight one step through the visible subset, wrapping at
    /// the ends. Navigation never refilters; the option's text replaces the
    /// query so the next keystroke edits it.
    fn navigate(&mut self, direction: CycleDirection) {
        if self.state == DropdownState::Closed {
            self.set_state(DropdownState::OpenBrowsing);
            self.surface.set_dropdown_visible(true);
        }
        if self.visible.is_empty() {
            return;
        }

        let mut cursor = CycleCursor::new(&self.visible, self.active, direction);
        let option_index = *cursor.next();
        self.active = cursor.index();
        self.surface.set_active_option(Some(option_index));

        if let Some(option) = self.model.option(option_index) {
            self.query = option.text.clone();
            self.surface.set_input_text(&option.text);
            if self.policy.commit_on_navigate {
                self.form.set_value(Some(option.value));
            }
        }
        self.highlighted.emit(option_index);
    }

    /// Enter: confirm the highlighted option, or the first visible one, or
    /// clear the value when nothing is visible. Keeps keyboard focus on the
    /// input and closes the dropdown.
    fn confirm_selection(&mut self) {
        let target = self
            .active
            .map(|pos| self.visible[pos])
            .or_else(|| self.visible.first().copied());

        match target {
            Some(index) => self.commit_option(index),
            None => self.form.set_value(None),
        }

        self.surface.focus_input();
        self.set_state(DropdownState::Closed);
        self.surface.set_dropdown_visible(false);
    }

    /// Escape: release focus without touching the committed value. The state
    /// moves to Closed here so the follow-up focus-out is a no-op.
    fn cancel(&mut self) {
        self.show_all_options();
        self.clear_active();
        self.set_state(DropdownState::Closed);
        self.surface.set_dropdown_visible(false);
        self.surface.blur_input();
    }

    /// Commit the option at `index`: mirror its text, submit its value, and
    /// announce the confirmation.
    fn commit_option(&mut self, index: usize) {
        if let Some(option) = self.model.option(index) {
            self.query = option.text.clone();
            self.surface.set_input_text(&option.text);
            self.form.set_value(Some(option.value));
            self.activated.emit(index);
        }
    }

    /// On focus loss, resolve the highlight (or the first match of a
    /// non-empty query) into a committed value. Unlike confirmation this
    /// announces nothing; the user never picked explicitly.
    fn resolve_best_effort(&mut self) {
        let target = self.active.map(|pos| self.visible[pos]).or_else(|| {
            if self.query.is_empty() {
                None
            } else {
                self.visible.first().copied()
            }
        });

        if let Some(index) = target
            && let Some(option) = self.model.option(index)
        {
            self.query = option.text.clone();
            self.surface.set_input_text(&option.text);
            self.form.set_value(Some(option.value));
        }
    }

    /// Refilter against the current query and push only the visibility
    /// changes to the surface. When the visible subset changes shape the old
    /// highlight is meaningless: it either moves to the first match (eager)
    /// or clears.
    fn apply_filter(&mut self) {
        let outcome = self.filter.apply(&self.query, &self.model);
        for &index in &outcome.hidden {
            self.surface.set_option_visible(index, false);
        }
        for &index in &outcome.shown {
            self.surface.set_option_visible(index, true);
        }

        let shape_changed = !outcome.shown.is_empty() || !outcome.hidden.is_empty();
        self.visible = outcome.visible;

        if shape_changed {
            if self.policy.auto_activate_first_match && !self.visible.is_empty() {
                let first = self.visible[0];
                self.active = Some(0);
                self.surface.set_active_option(Some(first));
                self.highlighted.emit(first);
            } else {
                self.clear_active();
            }
        } else if let Some(pos) = self.active
            && pos >= self.visible.len()
        {
            self.clear_active();
        }
    }

    fn show_all_options(&mut self) {
        let count = self.model.row_count();
        for index in 0..count {
            if !self.filter.is_visible(index) {
                self.surface.set_option_visible(index, true);
            }
        }
        self.filter.reset(count);
        self.visible = (0..count).collect();
    }

    fn clear_active(&mut self) {
        if self.active.is_some() {
            self.active = None;
            self.surface.set_active_option(None);
        }
    }

    fn set_state(&mut self, state: DropdownState) {
        if self.state != state {
            tracing::debug!(
                target: targets::WIDGET,
                from = ?self.state,
                to = ?state,
                "dropdown state"
            );
            self.state = state;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
