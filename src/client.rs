use super::*;

/// Algolia REST client for one application.
#[derive(Clone)]
pub(crate) struct Client {
  api_key: String,
  app_id: String,
  base_url: String,
  client: reqwest::Client,
  hits_per_page: usize,
}

impl Client {
  const API_KEY_HEADER: &str = "X-Algolia-API-Key";

  const APP_ID_HEADER: &str = "X-Algolia-Application-Id";

  pub(crate) fn default_base_url(app_id: &str) -> String {
    format!("https://{app_id}-dsn.algolia.net")
  }

  pub(crate) fn new(config: &Config) -> Self {
    Self {
      api_key: config.api_key.clone(),
      app_id: config.app_id.clone(),
      base_url: config.base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
      hits_per_page: config.hits_per_page,
    }
  }

  async fn query(
    &self,
    index_name: &str,
    request: &SearchRequest,
  ) -> Result<SearchResponse> {
    let url = self.query_url(index_name);

    debug!(%url, query = %request.query, "querying index");

    let response = self
      .client
      .post(&url)
      .header(Self::APP_ID_HEADER, &self.app_id)
      .header(Self::API_KEY_HEADER, &self.api_key)
      .json(request)
      .send()
      .await
      .with_context(|| format!("failed to reach index `{index_name}`"))?
      .error_for_status()
      .with_context(|| format!("index `{index_name}` rejected the query"))?
      .json::<SearchResponse>()
      .await
      .with_context(|| format!("invalid response from index `{index_name}`"))?;

    Ok(response)
  }

  fn query_url(&self, index_name: &str) -> String {
    format!("{}/1/indexes/{index_name}/query", self.base_url)
  }
}

#[async_trait]
impl SearchBackend for Client {
  async fn aggregate_facet(
    &self,
    index_name: &str,
    attribute: &str,
    query: &str,
  ) -> Result<Vec<FacetValue>> {
    let mut response = self
      .query(index_name, &SearchRequest::facet_aggregation(attribute, query))
      .await?;

    Ok(response.facet_values(attribute))
  }

  async fn search(
    &self,
    index_name: &str,
    query: &str,
    filters: &[String],
  ) -> Result<SearchPage> {
    let response = self
      .query(
        index_name,
        &SearchRequest::hits(query, filters, self.hits_per_page),
      )
      .await?;

    Ok(SearchPage {
      hits: response.hits,
      total: response.nb_hits,
    })
  }
}
