use super::*;

/// Body of a `POST /1/indexes/{index}/query` call.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchRequest {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub(crate) facet_filters: Vec<Vec<String>>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub(crate) facets: Vec<String>,
  pub(crate) hits_per_page: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) max_values_per_facet: Option<usize>,
  pub(crate) query: String,
}

impl SearchRequest {
  const MAX_FACET_VALUES: usize = 100;

  /// Counts for every value of `attribute` matching `query`, without hits.
  pub(crate) fn facet_aggregation(attribute: &str, query: &str) -> Self {
    Self {
      facet_filters: Vec::new(),
      facets: vec![attribute.to_string()],
      hits_per_page: 0,
      max_values_per_facet: Some(Self::MAX_FACET_VALUES),
      query: query.to_string(),
    }
  }

  /// Hits for `query`. All filters share one inner array, which the backend
  /// treats as a disjunction.
  pub(crate) fn hits(
    query: &str,
    filters: &[String],
    hits_per_page: usize,
  ) -> Self {
    let facet_filters = if filters.is_empty() {
      Vec::new()
    } else {
      vec![filters.to_vec()]
    };

    Self {
      facet_filters,
      facets: Vec::new(),
      hits_per_page,
      max_values_per_facet: None,
      query: query.to_string(),
    }
  }
}
