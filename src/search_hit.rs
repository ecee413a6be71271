use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SearchHit {
  #[serde(default, deserialize_with = "deserialize_authors")]
  pub(crate) authors: Vec<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) image: Option<String>,
  #[serde(rename = "objectID")]
  pub(crate) object_id: String,
  #[serde(
    default,
    rename = "readLength",
    deserialize_with = "deserialize_optional_string"
  )]
  pub(crate) read_length: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) sizzle: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) title: Option<String>,
}
