//! Substring filtering of the option list.
//!
//! Filtering is a pure function of the current query: an option matches when
//! its display text contains the query as a case-sensitive substring, and an
//! empty query matches everything. [`OptionFilter`] additionally tracks which
//! options are currently shown so each pass reports only the visibility
//! *changes*, letting the render surface toggle the few options that moved
//! instead of rebuilding the whole list.

use search_select_core::logging::targets;

use crate::model::OptionModel;

/// Check whether an option's display text matches a query.
///
/// An empty query matches everything; otherwise the query must appear as a
/// case-sensitive substring of the text.
pub fn matches(query: &str, text: &str) -> bool {
    query.is_empty() || text.contains(query)
}

/// The result of one filtering pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Indices of all matching options, in model order.
    pub visible: Vec<usize>,
    /// Indices that were hidden before this pass and are now shown.
    pub shown: Vec<usize>,
    /// Indices that were shown before this pass and are now hidden.
    pub hidden: Vec<usize>,
}

/// Tracks per-option visibility across filtering passes.
#[derive(Debug, Clone, Default)]
pub struct OptionFilter {
    visibility: Vec<bool>,
}

impl OptionFilter {
    /// Create a filter for `count` options, all initially visible.
    pub fn new(count: usize) -> Self {
        Self {
            visibility: vec![true; count],
        }
    }

    /// Reset to `count` options, all visible. Used when the option set is
    /// replaced.
    pub fn reset(&mut self, count: usize) {
        self.visibility.clear();
        self.visibility.resize(count, true);
    }

    /// Whether the option at `index` is currently visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.get(index).copied().unwrap_or(false)
    }

    /// Indices of all currently visible options, in model order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visibility
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
            .collect()
    }

    /// Run one filtering pass against `query`.
    ///
    /// The outcome's `shown` and `hidden` lists carry only the options whose
    /// visibility changed relative to the previous pass. The resulting
    /// visible set depends only on the query and the option texts, never on
    /// the order of earlier passes.
    pub fn apply(&mut self, query: &str, model: &dyn OptionModel) -> FilterOutcome {
        debug_assert_eq!(self.visibility.len(), model.row_count());

        let mut outcome = FilterOutcome::default();
        for index in 0..model.row_count() {
            let text = model.text(index).unwrap_or_default();
            let is_match = matches(query, &text);
            let was_visible = self.visibility[index];
            if is_match && !was_visible {
                outcome.shown.push(index);
            } else if !is_match && was_visible {
                outcome.hidden.push(index);
            }
            self.visibility[index] = is_match;
            if is_match {
                outcome.visible.push(index);
            }
        }

        tracing::debug!(
            target: targets::FILTER,
            query,
            visible = outcome.visible.len(),
            shown = outcome.shown.len(),
            hidden = outcome.hidden.len(),
            "filtered options"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionListModel;

    fn fruit_model() -> OptionListModel {
        OptionListModel::from([("Apple", "1"), ("Banana", "2"), ("Cherry", "3")])
    }

    #[test]
    fn test_matches_is_case_sensitive_substring() {
        assert!(matches("an", "Banana"));
        assert!(!matches("AN", "Banana"));
        assert!(matches("", "anything"));
        assert!(!matches("xyz", "Banana"));
    }

    #[test]
    fn test_query_an_keeps_only_banana() {
        let model = fruit_model();
        let mut filter = OptionFilter::new(model.row_count());

        let outcome = filter.apply("an", &model);
        assert_eq!(outcome.visible, vec![1]);
        assert_eq!(outcome.shown, vec![]);
        assert_eq!(outcome.hidden, vec![0, 2]);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let model = fruit_model();
        let mut filter = OptionFilter::new(model.row_count());

        filter.apply("an", &model);
        let outcome = filter.apply("", &model);
        assert_eq!(outcome.visible, vec![0, 1, 2]);
        assert_eq!(outcome.shown, vec![0, 2]);
        assert_eq!(outcome.hidden, vec![]);
    }

    #[test]
    fn test_repeated_query_reports_no_changes() {
        let model = fruit_model();
        let mut filter = OptionFilter::new(model.row_count());

        filter.apply("err", &model);
        let outcome = filter.apply("err", &model);
        assert_eq!(outcome.visible, vec![2]);
        assert_eq!(outcome.shown, vec![]);
        assert_eq!(outcome.hidden, vec![]);
    }

    #[test]
    fn test_no_hysteresis_across_query_sequences() {
        // The visible set for a query must not depend on which queries ran
        // before it.
        let model = fruit_model();

        let mut stepped = OptionFilter::new(model.row_count());
        stepped.apply("a", &model);
        stepped.apply("herr", &model);
        let stepped_outcome = stepped.apply("an", &model);

        let mut fresh = OptionFilter::new(model.row_count());
        let fresh_outcome = fresh.apply("an", &model);

        assert_eq!(stepped_outcome.visible, fresh_outcome.visible);
        assert_eq!(stepped.visible_indices(), fresh.visible_indices());
    }

    #[test]
    fn test_reset_restores_full_visibility() {
        let model = fruit_model();
        let mut filter = OptionFilter::new(model.row_count());

        filter.apply("zz", &model);
        assert_eq!(filter.visible_indices(), vec![]);

        filter.reset(model.row_count());
        assert_eq!(filter.visible_indices(), vec![0, 1, 2]);
        assert!(filter.is_visible(1));
    }

    #[test]
    fn test_no_match_hides_all() {
        let model = fruit_model();
        let mut filter = OptionFilter::new(model.row_count());

        let outcome = filter.apply("zzz", &model);
        assert_eq!(outcome.visible, vec![]);
        assert_eq!(outcome.hidden, vec![0, 1, 2]);
    }
}
