use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  OpenUrl {
    url: String,
  },
  Search {
    parameters: SearchParameters,
    request_id: u64,
  },
}
