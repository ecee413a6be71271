use super::*;

/// Everything one round trip to the index produced for a set of parameters.
#[derive(Clone, Debug)]
pub(crate) struct SearchResults {
  pub(crate) facets: Vec<FacetValue>,
  pub(crate) hits: Vec<SearchHit>,
  pub(crate) parameters: SearchParameters,
  pub(crate) total: u64,
}
