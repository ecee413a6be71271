use super::*;

/// Everything needed to build a backend client and run the interface.
#[derive(Clone)]
pub(crate) struct Config {
  pub(crate) api_key: String,
  pub(crate) app_id: String,
  pub(crate) base_url: String,
  pub(crate) facet_attribute: String,
  pub(crate) hits_per_page: usize,
  pub(crate) index_name: String,
  pub(crate) initial_query: String,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) site_url: Option<String>,
}

impl Debug for Config {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("app_id", &self.app_id)
      .field("base_url", &self.base_url)
      .field("facet_attribute", &self.facet_attribute)
      .field("hits_per_page", &self.hits_per_page)
      .field("index_name", &self.index_name)
      .field("initial_query", &self.initial_query)
      .field("log_file", &self.log_file)
      .field("site_url", &self.site_url)
      .finish()
  }
}
