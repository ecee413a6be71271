use super::*;

/// A hosted search index.
#[async_trait]
pub(crate) trait SearchBackend: Send + Sync {
  /// Counts for each value of `attribute` among documents matching `query`.
  async fn aggregate_facet(
    &self,
    index_name: &str,
    attribute: &str,
    query: &str,
  ) -> Result<Vec<FacetValue>>;

  /// Hits for `query`, restricted to documents matching any of `filters`.
  async fn search(
    &self,
    index_name: &str,
    query: &str,
    filters: &[String],
  ) -> Result<SearchPage>;
}

/// Runs the hit search and the facet aggregation for `parameters` together.
///
/// The aggregation ignores the refinements on `attribute`, so every tag
/// stays selectable while others are refined.
pub(crate) async fn fetch_results(
  backend: &dyn SearchBackend,
  index_name: &str,
  attribute: &str,
  parameters: SearchParameters,
) -> Result<SearchResults> {
  let filters = parameters.facet_filters(attribute);

  let (page, facets) = futures::try_join!(
    backend.search(index_name, &parameters.query, &filters),
    backend.aggregate_facet(index_name, attribute, &parameters.query),
  )?;

  debug!(
    query = %parameters.query,
    hits = page.hits.len(),
    total = page.total,
    facets = facets.len(),
    "search completed"
  );

  Ok(SearchResults {
    facets,
    hits: page.hits,
    parameters,
    total: page.total,
  })
}
