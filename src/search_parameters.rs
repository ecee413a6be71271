use super::*;

/// The query and tag refinements the engine is searching with.
///
/// This is the only place refinement state lives. Anything that shows whether
/// a tag is selected reads it from here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchParameters {
  pub(crate) query: String,
  pub(crate) refinements: BTreeSet<String>,
}

impl SearchParameters {
  /// Facet filters in `attribute:value` form, one per refined value. The
  /// backend combines them with OR. A leading `-` would negate the filter, so
  /// it is escaped.
  pub(crate) fn facet_filters(&self, attribute: &str) -> Vec<String> {
    self
      .refinements
      .iter()
      .map(|value| {
        if value.starts_with('-') {
          format!("{attribute}:\\{value}")
        } else {
          format!("{attribute}:{value}")
        }
      })
      .collect()
  }

  pub(crate) fn is_refined(&self, value: &str) -> bool {
    self.refinements.contains(value)
  }

  pub(crate) fn new(query: impl Into<String>) -> Self {
    Self {
      query: query.into(),
      refinements: BTreeSet::new(),
    }
  }

  /// Returns whether `value` is refined after the toggle.
  pub(crate) fn toggle_refinement(&mut self, value: &str) -> bool {
    if self.refinements.remove(value) {
      false
    } else {
      self.refinements.insert(value.to_string());
      true
    }
  }
}
