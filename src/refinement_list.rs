use super::*;

/// One tag chip as it should be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RefinementToggle {
  pub(crate) count: u64,
  pub(crate) refined: bool,
  pub(crate) value: String,
}

/// Tag values from the latest facet aggregation, sorted by value.
///
/// Only the facet buckets and a cursor are stored here. Whether a chip is
/// selected always comes from the `SearchParameters` passed to `toggles`.
#[derive(Default)]
pub(crate) struct RefinementList {
  values: ListView<FacetValue>,
}

impl RefinementList {
  pub(crate) fn cursor(&self) -> Option<usize> {
    self.values.selected_index()
  }

  pub(crate) fn cursor_value(&self) -> Option<&str> {
    self
      .values
      .selected_item()
      .map(|facet| facet.value.as_str())
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub(crate) fn select_first(&mut self) {
    self.values.set_selected(0);
  }

  pub(crate) fn select_last(&mut self) {
    self.values.select_last();
  }

  pub(crate) fn select_next(&mut self) {
    self.values.select_next();
  }

  pub(crate) fn select_previous(&mut self) {
    self.values.select_previous();
  }

  pub(crate) fn toggles(
    &self,
    parameters: &SearchParameters,
  ) -> Vec<RefinementToggle> {
    self
      .values
      .items()
      .iter()
      .map(|facet| RefinementToggle {
        count: facet.count,
        refined: parameters.is_refined(&facet.value),
        value: facet.value.clone(),
      })
      .collect()
  }

  /// Takes a fresh aggregation. Refined values missing from it are kept with
  /// a zero count so they can still be switched off.
  pub(crate) fn update(
    &mut self,
    facets: Vec<FacetValue>,
    parameters: &SearchParameters,
  ) {
    let mut values = facets
      .into_iter()
      .map(|facet| (facet.value, facet.count))
      .collect::<BTreeMap<String, u64>>();

    for refined in &parameters.refinements {
      values.entry(refined.clone()).or_insert(0);
    }

    let values = values
      .into_iter()
      .map(|(value, count)| FacetValue::new(value, count))
      .collect();

    self.values.replace(values, |a, b| a.value == b.value);
  }
}
