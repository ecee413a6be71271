use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct SearchPage {
  pub(crate) hits: Vec<SearchHit>,
  pub(crate) total: u64,
}
