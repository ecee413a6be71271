/// One bucket of a facet aggregation: a tag and the number of hits carrying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FacetValue {
  pub(crate) count: u64,
  pub(crate) value: String,
}

impl FacetValue {
  pub(crate) fn new(value: impl Into<String>, count: u64) -> Self {
    Self {
      count,
      value: value.into(),
    }
  }
}
