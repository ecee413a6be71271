#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Backspace,
  ClearQuery,
  FocusNext,
  FocusPrevious,
  FocusResults,
  FocusSearch,
  HideHelp,
  InsertChar(char),
  None,
  OpenSelected,
  PageDown,
  PageUp,
  Quit,
  Refresh,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  ToggleRefinement,
}
