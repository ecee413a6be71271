use super::*;

/// Author names from a string, a list of strings, or a list of objects with a
/// `name`. Entries of any other shape are skipped.
pub(crate) fn deserialize_authors<'de, D>(
  deserializer: D,
) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  fn author_name(value: Value) -> Option<String> {
    match value {
      Value::String(name) => Some(name),
      Value::Object(mut fields) => match fields.remove("name") {
        Some(Value::String(name)) => Some(name),
        _ => None,
      },
      _ => None,
    }
  }

  let value = Option::<Value>::deserialize(deserializer)?;

  Ok(match value {
    None | Some(Value::Null) => Vec::new(),
    Some(Value::Array(values)) => {
      values.into_iter().filter_map(author_name).collect()
    }
    Some(value) => author_name(value).into_iter().collect(),
  })
}

/// A string or number as text. Any other value reads as absent.
pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  Ok(match value {
    Some(Value::String(s)) => Some(s),
    Some(Value::Number(n)) => Some(n.to_string()),
    _ => None,
  })
}

/// A string. Any other value reads as absent.
pub(crate) fn deserialize_optional_text<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  Ok(match value {
    Some(Value::String(s)) => Some(s),
    _ => None,
  })
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct AuthorsWrapper {
    #[serde(default, deserialize_with = "deserialize_authors")]
    authors: Vec<String>,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct OptionalWrapper {
    #[serde(deserialize_with = "deserialize_optional_string")]
    value: Option<String>,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct TextWrapper {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    value: Option<String>,
  }

  fn parse_authors(input: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str::<AuthorsWrapper>(input).map(|wrapper| wrapper.authors)
  }

  fn parse_text(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<TextWrapper>(input).map(|wrapper| wrapper.value)
  }

  fn parse_value(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<OptionalWrapper>(input).map(|wrapper| wrapper.value)
  }

  #[test]
  fn deserialize_authors_accepts_strings_lists_and_objects() {
    assert_eq!(parse_authors(r"{}").unwrap(), Vec::<String>::new());

    assert_eq!(
      parse_authors(r#"{"authors": null}"#).unwrap(),
      Vec::<String>::new()
    );

    assert_eq!(
      parse_authors(r#"{"authors": "Ada"}"#).unwrap(),
      vec!["Ada".to_string()]
    );

    assert_eq!(
      parse_authors(r#"{"authors": ["Ada", {"name": "Grace"}]}"#).unwrap(),
      vec!["Ada".to_string(), "Grace".to_string()]
    );

    assert_eq!(
      parse_authors(r#"{"authors": [1, {"id": 2}, "Ada", true]}"#).unwrap(),
      vec!["Ada".to_string()]
    );

    assert_eq!(
      parse_authors(r#"{"authors": {"id": 2}}"#).unwrap(),
      Vec::<String>::new()
    );
  }

  #[test]
  fn deserialize_optional_string_supports_string_numbers_and_null() {
    assert_eq!(
      parse_value(r#"{"value": "5 min"}"#).unwrap(),
      Some("5 min".to_string())
    );

    assert_eq!(
      parse_value(r#"{"value": 42}"#).unwrap(),
      Some("42".to_string())
    );

    assert_eq!(parse_value(r#"{"value": null}"#).unwrap(), None);

    assert_eq!(parse_value(r#"{"value": true}"#).unwrap(), None);
    assert_eq!(parse_value(r#"{"value": [1]}"#).unwrap(), None);
  }

  #[test]
  fn deserialize_optional_text_only_keeps_strings() {
    assert_eq!(
      parse_text(r#"{"value": "cover.png"}"#).unwrap(),
      Some("cover.png".to_string())
    );

    assert_eq!(parse_text(r#"{"value": 5}"#).unwrap(), None);
    assert_eq!(parse_text(r#"{"value": {"src": "a"}}"#).unwrap(), None);
    assert_eq!(parse_text(r"{}").unwrap(), None);
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }
}
