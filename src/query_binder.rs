use super::*;

/// Keeps the search box contents and pushes them to the engine query.
///
/// Edits change the local input immediately. `commit` copies the input into
/// the engine parameters whenever the two differ, so every edit produces a
/// query and the results catch up with the box one response later.
pub(crate) struct QueryBinder {
  input: String,
}

impl QueryBinder {
  pub(crate) const MAX_LENGTH: usize = 512;

  pub(crate) fn backspace(&mut self) -> bool {
    self.input.pop().is_some()
  }

  pub(crate) fn clear(&mut self) -> bool {
    if self.input.is_empty() {
      return false;
    }

    self.input.clear();

    true
  }

  /// Returns whether `parameters.query` changed.
  pub(crate) fn commit(&self, parameters: &mut SearchParameters) -> bool {
    if parameters.query == self.input {
      return false;
    }

    parameters.query.clone_from(&self.input);

    true
  }

  pub(crate) fn input(&self) -> &str {
    &self.input
  }

  pub(crate) fn insert(&mut self, ch: char) -> bool {
    if ch.is_control() || self.input.chars().count() >= Self::MAX_LENGTH {
      return false;
    }

    self.input.push(ch);

    true
  }

  pub(crate) fn new(input: impl Into<String>) -> Self {
    Self {
      input: input.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_edit_is_committed() {
    let mut binder = QueryBinder::new("");
    let mut parameters = SearchParameters::default();

    let mut committed = Vec::new();

    for ch in "rust".chars() {
      assert!(binder.insert(ch));

      if binder.commit(&mut parameters) {
        committed.push(parameters.query.clone());
      }
    }

    assert_eq!(committed, vec!["r", "ru", "rus", "rust"]);
    assert_eq!(binder.input(), parameters.query);
  }

  #[test]
  fn commit_is_a_no_op_once_converged() {
    let binder = QueryBinder::new("rust");
    let mut parameters = SearchParameters::new("rust");

    assert!(!binder.commit(&mut parameters));
  }

  #[test]
  fn backspace_and_clear_report_changes() {
    let mut binder = QueryBinder::new("ab");

    assert!(binder.backspace());
    assert_eq!(binder.input(), "a");

    assert!(binder.clear());
    assert_eq!(binder.input(), "");

    assert!(!binder.backspace());
    assert!(!binder.clear());
  }

  #[test]
  fn input_is_capped() {
    let mut binder = QueryBinder::new("x".repeat(QueryBinder::MAX_LENGTH));

    assert!(!binder.insert('y'));
    assert_eq!(binder.input().len(), QueryBinder::MAX_LENGTH);
  }

  #[test]
  fn control_characters_are_ignored() {
    let mut binder = QueryBinder::new("");

    assert!(!binder.insert('\n'));
    assert_eq!(binder.input(), "");
  }
}
