use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  #[serde(default)]
  pub(crate) facets: BTreeMap<String, BTreeMap<String, u64>>,
  #[serde(default, deserialize_with = "deserialize_hits")]
  pub(crate) hits: Vec<SearchHit>,
  #[serde(default, rename = "nbHits")]
  pub(crate) nb_hits: u64,
}

impl SearchResponse {
  pub(crate) fn facet_values(&mut self, attribute: &str) -> Vec<FacetValue> {
    self
      .facets
      .remove(attribute)
      .unwrap_or_default()
      .into_iter()
      .map(|(value, count)| FacetValue::new(value, count))
      .collect()
  }
}

/// Hits that do not parse, for example without an `objectID`, are logged and
/// left out so the rest of the page still renders.
fn deserialize_hits<'de, D>(
  deserializer: D,
) -> Result<Vec<SearchHit>, D::Error>
where
  D: Deserializer<'de>,
{
  let values = Vec::<Value>::deserialize(deserializer)?;

  Ok(
    values
      .into_iter()
      .filter_map(|value| match serde_json::from_value::<SearchHit>(value) {
        Ok(hit) => Some(hit),
        Err(error) => {
          warn!(%error, "skipping malformed hit");
          None
        }
      })
      .collect(),
  )
}
