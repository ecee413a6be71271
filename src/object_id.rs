use super::*;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern is valid")
});

static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\d{4}-\d{2}-\d{2}-").expect("date prefix pattern is valid")
});

const EXTENSION: &str = ".mdx";

/// A blog post identifier, conventionally `<prefix>-YYYY-MM-DD-<name>.mdx`.
///
/// The publish date is the first `YYYY-MM-DD` run anywhere in the identifier.
/// The slug is the identifier with the first `YYYY-MM-DD-` run removed and a
/// trailing `.mdx` dropped. The two are separate scans, so an identifier with
/// several date-like runs can yield a date and a slug that refer to different
/// runs. Such identifiers are still parsed and report `is_ambiguous`.
///
/// Parsing never fails: missing pieces come back as `None` or are left in
/// place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ObjectId {
  date_count: usize,
  publish_date: Option<String>,
  slug: String,
}

impl ObjectId {
  pub(crate) fn is_ambiguous(&self) -> bool {
    self.date_count > 1
  }

  pub(crate) fn parse(raw: &str) -> Self {
    let publish_date = DATE.find(raw).map(|date| date.as_str().to_string());

    let date_count = DATE.find_iter(raw).count();

    let without_date = DATE_PREFIX.replace(raw, "");

    let slug = without_date
      .strip_suffix(EXTENSION)
      .unwrap_or(&without_date)
      .to_string();

    Self {
      date_count,
      publish_date,
      slug,
    }
  }

  pub(crate) fn publish_date(&self) -> Option<&str> {
    self.publish_date.as_deref()
  }

  pub(crate) fn slug(&self) -> &str {
    &self.slug
  }
}
