use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "blog-search",
  version,
  about = "Search a hosted blog index from the terminal"
)]
pub(crate) struct Arguments {
  #[arg(long, env = "ALGOLIA_API_KEY", hide_env_values = true)]
  api_key: String,
  #[arg(long, env = "ALGOLIA_APP_ID")]
  app_id: String,
  /// Override the index host, e.g. for a proxy
  #[arg(long, env = "BLOG_SEARCH_BASE_URL")]
  base_url: Option<String>,
  /// Facet attribute used for tag refinements
  #[arg(long, env = "BLOG_SEARCH_FACET", default_value = "tags")]
  facet: String,
  #[arg(long, env = "BLOG_SEARCH_HITS_PER_PAGE", default_value_t = 20)]
  hits_per_page: usize,
  #[arg(long, env = "BLOG_SEARCH_INDEX", default_value = "blog")]
  index: String,
  /// Write logs to this file
  #[arg(long, env = "BLOG_SEARCH_LOG_FILE")]
  log_file: Option<PathBuf>,
  /// Initial search query
  #[arg(long, default_value = "")]
  query: String,
  /// Site that serves `/blog/<slug>`, used to open results
  #[arg(long, env = "BLOG_SEARCH_SITE_URL")]
  site_url: Option<String>,
}

impl Arguments {
  pub(crate) fn into_config(self) -> Result<Config> {
    ensure!(!self.app_id.trim().is_empty(), "application id is empty");
    ensure!(!self.api_key.trim().is_empty(), "API key is empty");
    ensure!(!self.index.trim().is_empty(), "index name is empty");
    ensure!(!self.facet.trim().is_empty(), "facet attribute is empty");
    ensure!(self.hits_per_page > 0, "hits per page must be positive");

    let base_url = self
      .base_url
      .filter(|url| !url.trim().is_empty())
      .unwrap_or_else(|| Client::default_base_url(&self.app_id));

    let site_url = self
      .site_url
      .map(|url| url.trim_end_matches('/').to_string())
      .filter(|url| !url.is_empty());

    let initial_query = self
      .query
      .chars()
      .take(QueryBinder::MAX_LENGTH)
      .collect::<String>();

    Ok(Config {
      api_key: self.api_key,
      app_id: self.app_id,
      base_url,
      facet_attribute: self.facet,
      hits_per_page: self.hits_per_page,
      index_name: self.index,
      initial_query,
      log_file: self.log_file,
      site_url,
    })
  }
}
