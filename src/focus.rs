use super::*;

/// Which part of the screen receives keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Focus {
  Results,
  #[default]
  Search,
  Tags,
}

impl Focus {
  const SEARCH_WIDTH_FOCUSED: u16 = 50;

  const SEARCH_WIDTH_IDLE: u16 = 25;

  pub(crate) fn handle_key(self, key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
        return Command::Quit;
      }
      KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
        return Command::Refresh;
      }
      KeyCode::Tab => return Command::FocusNext,
      KeyCode::BackTab => return Command::FocusPrevious,
      _ => {}
    }

    match self {
      Focus::Search => match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Command::FocusResults,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::ClearQuery
        }
        KeyCode::Char(ch) => {
          if modifiers.contains(KeyModifiers::CONTROL)
            || modifiers.contains(KeyModifiers::ALT)
            || modifiers.contains(KeyModifiers::SUPER)
          {
            Command::None
          } else {
            Command::InsertChar(ch)
          }
        }
        _ => Command::None,
      },
      Focus::Tags => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('/') => Command::FocusSearch,
        KeyCode::Left | KeyCode::Char('h') => Command::SelectPrevious,
        KeyCode::Right | KeyCode::Char('l') => Command::SelectNext,
        KeyCode::Home => Command::SelectFirst,
        KeyCode::End => Command::SelectLast,
        KeyCode::Down | KeyCode::Char('j') => Command::FocusResults,
        KeyCode::Enter | KeyCode::Char(' ') => Command::ToggleRefinement,
        _ => Command::None,
      },
      Focus::Results => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('/') => Command::FocusSearch,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageDown
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageUp
        }
        KeyCode::Home => Command::SelectFirst,
        KeyCode::End => Command::SelectLast,
        KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenSelected,
        _ => Command::None,
      },
    }
  }

  pub(crate) fn next(self) -> Self {
    match self {
      Focus::Search => Focus::Tags,
      Focus::Tags => Focus::Results,
      Focus::Results => Focus::Search,
    }
  }

  pub(crate) fn previous(self) -> Self {
    match self {
      Focus::Search => Focus::Results,
      Focus::Tags => Focus::Search,
      Focus::Results => Focus::Tags,
    }
  }

  /// Share of the top row, in percent, given to the search box. It widens
  /// while focused.
  pub(crate) fn search_width(self) -> u16 {
    if self == Focus::Search {
      Self::SEARCH_WIDTH_FOCUSED
    } else {
      Self::SEARCH_WIDTH_IDLE
    }
  }

  pub(crate) fn status(self) -> &'static str {
    match self {
      Focus::Results => RESULTS_STATUS,
      Focus::Search => SEARCH_STATUS,
      Focus::Tags => TAGS_STATUS,
    }
  }
}
