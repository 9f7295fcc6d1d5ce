//! Option models for the search-select widget.
//!
//! An option is a display text paired with a submission value, optionally
//! marked as pre-selected. The widget reads options through the
//! [`OptionModel`] trait; [`OptionListModel`] is the default in-memory
//! implementation.

// ============================================================================
// Option Model Trait
// ============================================================================

/// A single selectable option with display text and submission value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// The display text shown in the dropdown.
    pub text: String,
    /// The value submitted when this option is chosen.
    pub value: String,
    /// Whether this option is marked as pre-selected.
    pub selected: bool,
}

impl SelectOption {
    /// Create a new option with text and value.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Mark this option as pre-selected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Trait for providing options to a search-select widget.
///
/// Implement this trait to provide custom data sources for the widget.
pub trait OptionModel: Send + Sync {
    /// Get the number of options in the model.
    fn row_count(&self) -> usize;

    /// Get the option at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn option(&self, index: usize) -> Option<SelectOption>;

    /// Get just the display text at the given index (for efficiency).
    fn text(&self, index: usize) -> Option<String> {
        self.option(index).map(|opt| opt.text)
    }

    /// Get just the submission value at the given index (for efficiency).
    fn value(&self, index: usize) -> Option<String> {
        self.option(index).map(|opt| opt.value)
    }

    /// Find the index of an option by display text.
    ///
    /// Returns the first matching index, or `None` if not found.
    fn find_text(&self, text: &str) -> Option<usize> {
        for i in 0..self.row_count() {
            if let Some(opt_text) = self.text(i)
                && opt_text == text
            {
                return Some(i);
            }
        }
        None
    }

    /// Find the index of an option by submission value.
    ///
    /// Returns the first matching index, or `None` if not found.
    fn find_value(&self, value: &str) -> Option<usize> {
        for i in 0..self.row_count() {
            if let Some(opt_value) = self.value(i)
                && opt_value == value
            {
                return Some(i);
            }
        }
        None
    }

    /// Check whether a submission value belongs to this model.
    fn contains_value(&self, value: &str) -> bool {
        self.find_value(value).is_some()
    }

    /// The index of the first option marked as pre-selected, if any.
    fn selected_index(&self) -> Option<usize> {
        (0..self.row_count()).find(|&i| self.option(i).is_some_and(|opt| opt.selected))
    }
}

// ============================================================================
// Option List Model
// ============================================================================

/// A simple option model backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct OptionListModel {
    options: Vec<SelectOption>,
}

impl OptionListModel {
    /// Create a new model with the given options.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Create an empty model.
    pub fn empty() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Get a reference to the options.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Set the options.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    /// Add an option.
    pub fn add_option(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    /// Clear all options.
    pub fn clear(&mut self) {
        self.options.clear();
    }

    /// Collect all submission values in model order.
    pub fn values(&self) -> Vec<String> {
        self.options.iter().map(|opt| opt.value.clone()).collect()
    }
}

impl OptionModel for OptionListModel {
    fn row_count(&self) -> usize {
        self.options.len()
    }

    fn option(&self, index: usize) -> Option<SelectOption> {
        self.options.get(index).cloned()
    }

    fn text(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|opt| opt.text.clone())
    }

    fn value(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|opt| opt.value.clone())
    }
}

impl From<Vec<SelectOption>> for OptionListModel {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl From<Vec<(&str, &str)>> for OptionListModel {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(text, value)| SelectOption::new(text, value))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for OptionListModel {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(text, value)| SelectOption::new(text, value))
                .collect(),
        )
    }
}

impl From<Vec<&str>> for OptionListModel {
    fn from(texts: Vec<&str>) -> Self {
        Self::new(
            texts
                .into_iter()
                .map(|text| SelectOption::new(text, text))
                .collect(),
        )
    }
}
