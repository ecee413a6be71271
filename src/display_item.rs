use super::*;

const BLOG_PATH: &str = "/blog/";
const FALLBACK_IMAGE: &str = "/blog/coffee.jpg";

/// What a result card shows for one hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DisplayItem {
  pub(crate) ambiguous_date: bool,
  pub(crate) authors: Vec<String>,
  pub(crate) image_path: String,
  pub(crate) link_href: String,
  pub(crate) object_id: String,
  pub(crate) publish_date: Option<String>,
  pub(crate) read_length: Option<String>,
  pub(crate) sizzle: Option<String>,
  pub(crate) slug: String,
  pub(crate) title: Option<String>,
}

impl From<&SearchHit> for DisplayItem {
  fn from(hit: &SearchHit) -> Self {
    let id = ObjectId::parse(&hit.object_id);

    let image_path = match hit.image.as_deref() {
      Some(image) if !image.is_empty() => format!("{BLOG_PATH}{image}"),
      _ => FALLBACK_IMAGE.to_string(),
    };

    Self {
      ambiguous_date: id.is_ambiguous(),
      authors: hit.authors.clone(),
      image_path,
      link_href: format!("{BLOG_PATH}{}", id.slug()),
      object_id: hit.object_id.clone(),
      publish_date: id.publish_date().map(str::to_string),
      read_length: hit.read_length.clone(),
      sizzle: hit.sizzle.clone(),
      slug: id.slug().to_string(),
      title: hit.title.clone(),
    }
  }
}

impl DisplayItem {
  pub(crate) fn byline(&self) -> Option<String> {
    (!self.authors.is_empty())
      .then(|| format!("by {}", self.authors.join(", ")))
  }

  pub(crate) fn detail(&self) -> Option<String> {
    let read_length = self.read_length.as_deref().map(|length| {
      if length.parse::<u64>().is_ok() {
        format!("{length} min read")
      } else {
        length.to_string()
      }
    });

    match (self.publish_date.as_deref(), read_length) {
      (Some(date), Some(length)) => Some(format!("{date} • {length}")),
      (Some(date), None) => Some(date.to_string()),
      (None, Some(length)) => Some(length),
      (None, None) => None,
    }
  }

  pub(crate) fn heading(&self) -> &str {
    self
      .title
      .as_deref()
      .filter(|title| !title.is_empty())
      .unwrap_or(&self.slug)
  }

  pub(crate) fn url(&self, site_url: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), self.link_href)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn hit(object_id: &str, image: Option<&str>) -> SearchHit {
    SearchHit {
      authors: Vec::new(),
      image: image.map(str::to_string),
      object_id: object_id.to_string(),
      read_length: None,
      sizzle: None,
      title: None,
    }
  }

  #[test]
  fn dated_post_without_image_uses_fallback() {
    let item = DisplayItem::from(&hit("post-2023-05-10-launch.mdx", None));

    assert_eq!(item.publish_date.as_deref(), Some("2023-05-10"));
    assert_eq!(item.slug, "post-launch");
    assert_eq!(item.image_path, "/blog/coffee.jpg");
    assert_eq!(item.link_href, "/blog/post-launch");
  }

  #[test]
  fn undated_post_with_image() {
    let item = DisplayItem::from(&hit("notes.mdx", Some("cover.png")));

    assert_eq!(item.publish_date, None);
    assert_eq!(item.slug, "notes");
    assert_eq!(item.image_path, "/blog/cover.png");
    assert_eq!(item.link_href, "/blog/notes");
  }

  #[test]
  fn empty_image_uses_fallback() {
    let item = DisplayItem::from(&hit("notes.mdx", Some("")));

    assert_eq!(item.image_path, "/blog/coffee.jpg");
  }

  #[test]
  fn formatting_is_deterministic() {
    let ids = [
      "post-2023-05-10-launch.mdx",
      "notes.mdx",
      "x-2020-01-01-2021-02-02-y.mdx",
      "2019-12-31-",
      "",
      "plain",
      "ünïcode-2022-02-02-pöst.mdx",
    ];

    for id in ids {
      for image in [None, Some(""), Some("a.png")] {
        let hit = hit(id, image);

        let first = DisplayItem::from(&hit);
        let second = DisplayItem::from(&hit);

        assert_eq!(first, second, "{id}");
        assert_eq!(first.link_href, format!("/blog/{}", first.slug), "{id}");

        match image {
          Some("a.png") => assert_eq!(first.image_path, "/blog/a.png"),
          _ => assert_eq!(first.image_path, "/blog/coffee.jpg"),
        }
      }
    }
  }

  #[test]
  fn prefixed_identifiers_drop_date_segment() {
    for (prefix, date, rest) in [
      ("post", "2023-05-10", "launch"),
      ("weekly-notes", "1999-01-31", "a-b-c"),
      ("x", "2000-00-00", "y"),
    ] {
      let item =
        DisplayItem::from(&hit(&format!("{prefix}-{date}-{rest}.mdx"), None));

      assert_eq!(item.slug, format!("{prefix}-{rest}"));
      assert_eq!(item.publish_date.as_deref(), Some(date));
      assert!(!item.ambiguous_date);
    }
  }

  #[test]
  fn detail_combines_date_and_read_length() {
    let mut item = DisplayItem::from(&hit("post-2023-05-10-launch.mdx", None));

    assert_eq!(item.detail().as_deref(), Some("2023-05-10"));

    item.read_length = Some("5".to_string());
    assert_eq!(item.detail().as_deref(), Some("2023-05-10 • 5 min read"));

    item.publish_date = None;
    item.read_length = Some("short".to_string());
    assert_eq!(item.detail().as_deref(), Some("short"));
  }

  #[test]
  fn heading_falls_back_to_slug() {
    let mut item = DisplayItem::from(&hit("notes.mdx", None));

    assert_eq!(item.heading(), "notes");

    item.title = Some("Field notes".to_string());
    assert_eq!(item.heading(), "Field notes");
  }

  #[test]
  fn url_joins_site_and_link() {
    let item = DisplayItem::from(&hit("notes.mdx", None));

    assert_eq!(
      item.url("https://example.com/"),
      "https://example.com/blog/notes"
    );
  }

  #[test]
  fn byline_lists_authors() {
    let mut item = DisplayItem::from(&hit("notes.mdx", None));

    assert_eq!(item.byline(), None);

    item.authors = vec!["Ada".to_string(), "Grace".to_string()];
    assert_eq!(item.byline().as_deref(), Some("by Ada, Grace"));
  }
}
