use super::*;

pub(crate) struct State {
  focus: Focus,
  help: HelpView,
  list_height: usize,
  message: String,
  next_request_id: u64,
  parameters: SearchParameters,
  pending_effects: Vec<Effect>,
  pending_search: Option<PendingSearch>,
  query_binder: QueryBinder,
  refinements: RefinementList,
  results: ListView<DisplayItem>,
  results_loaded: bool,
  site_url: Option<String>,
  transient_message: Option<TransientMessage>,
}

impl State {
  const CARD_HEIGHT: usize = 5;

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::Backspace => self.edit_query(QueryBinder::backspace),
      Command::ClearQuery => self.edit_query(QueryBinder::clear),
      Command::InsertChar(ch) => self.edit_query(|binder| binder.insert(ch)),
      Command::FocusNext => self.focus = self.focus.next(),
      Command::FocusPrevious => self.focus = self.focus.previous(),
      Command::FocusResults => self.focus = Focus::Results,
      Command::FocusSearch => self.focus = Focus::Search,
      Command::OpenSelected => self.open_selected(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::Refresh => self.start_search(),
      Command::SelectFirst => self.select_first(),
      Command::SelectLast => self.select_last(),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::ToggleRefinement => self.toggle_refinement(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn edit_query<F>(&mut self, edit: F)
  where
    F: FnOnce(&mut QueryBinder) -> bool,
  {
    if edit(&mut self.query_binder)
      && self.query_binder.commit(&mut self.parameters)
    {
      self.start_search();
    }
  }

  /// Text for the result area when there are no cards to show.
  pub(crate) fn empty_message(&self) -> &'static str {
    if !self.results_loaded && self.pending_search.is_some() {
      LOADING_SEARCH_STATUS
    } else {
      NO_RESULTS_MESSAGE
    }
  }

  pub(crate) fn focus(&self) -> Focus {
    self.focus
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::SearchResults { request_id, result } => {
        let Some(pending) = self.pending_search.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          debug!(
            request_id,
            latest = pending.request_id,
            "dropping stale search results"
          );
          return;
        }

        let Some(pending) = self.pending_search.take() else {
          return;
        };

        self.results_loaded = true;

        match result {
          Ok(results) => {
            debug!(
              request_id,
              query = %results.parameters.query,
              hits = results.hits.len(),
              "received search results"
            );

            let items = results
              .hits
              .iter()
              .map(DisplayItem::from)
              .collect::<Vec<_>>();

            for item in items.iter().filter(|item| item.ambiguous_date) {
              warn!(
                object_id = %item.object_id,
                "identifier holds more than one date"
              );
            }

            self.results = ListView::new(items);

            self.refinements.update(results.facets, &self.parameters);

            let message = Self::summary(
              self.results.len(),
              results.total,
              &pending.query,
            );

            if self.help.is_visible() {
              self.help.set_backup(message);
            } else {
              self.message = message;
            }
          }
          Err(error) => {
            warn!(query = %pending.query, "search failed: {error:#}");

            self.results = ListView::default();

            let message = format!("Could not search: {error}");

            if self.help.is_visible() {
              self.help.set_backup(message);
            } else {
              self.set_transient_message(message);
            }
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(initial_query: &str, site_url: Option<String>) -> Self {
    Self {
      focus: Focus::default(),
      help: HelpView::new(),
      list_height: 0,
      message: String::new(),
      next_request_id: 0,
      parameters: SearchParameters::new(initial_query),
      pending_effects: Vec::new(),
      pending_search: None,
      query_binder: QueryBinder::new(initial_query),
      refinements: RefinementList::default(),
      results: ListView::default(),
      results_loaded: false,
      site_url,
      transient_message: None,
    }
  }

  fn open_selected(&mut self) {
    let Some(item) = self.results.selected_item() else {
      return;
    };

    match self.site_url.as_deref() {
      Some(site_url) => {
        let url = item.url(site_url);
        self.pending_effects.push(Effect::OpenUrl { url });
      }
      None => {
        let message =
          format!("{} (set --site-url to open posts)", item.link_href);
        self.set_transient_message(message);
      }
    }
  }

  fn page_down(&mut self) {
    let target = self
      .results
      .selected_index()
      .unwrap_or(0)
      .saturating_add(self.page_jump());

    self.results.set_selected(target);
  }

  fn page_jump(&self) -> usize {
    (self.list_height / Self::CARD_HEIGHT).max(1)
  }

  fn page_up(&mut self) {
    let target = self
      .results
      .selected_index()
      .unwrap_or(0)
      .saturating_sub(self.page_jump());

    self.results.set_selected(target);
  }

  pub(crate) fn query_input(&self) -> &str {
    self.query_binder.input()
  }

  pub(crate) fn refinement_cursor(&self) -> Option<usize> {
    self.refinements.cursor()
  }

  pub(crate) fn refinement_toggles(&self) -> Vec<RefinementToggle> {
    self.refinements.toggles(&self.parameters)
  }

  pub(crate) fn refinements_are_empty(&self) -> bool {
    self.refinements.is_empty()
  }

  pub(crate) fn results(&self) -> &ListView<DisplayItem> {
    &self.results
  }

  pub(crate) fn results_mut(&mut self) -> &mut ListView<DisplayItem> {
    &mut self.results
  }

  fn select_first(&mut self) {
    match self.focus {
      Focus::Results => self.results.set_selected(0),
      Focus::Tags => self.refinements.select_first(),
      Focus::Search => {}
    }
  }

  fn select_last(&mut self) {
    match self.focus {
      Focus::Results => self.results.select_last(),
      Focus::Tags => self.refinements.select_last(),
      Focus::Search => {}
    }
  }

  fn select_next(&mut self) {
    match self.focus {
      Focus::Results => self.results.select_next(),
      Focus::Tags => self.refinements.select_next(),
      Focus::Search => {}
    }
  }

  fn select_previous(&mut self) {
    match self.focus {
      Focus::Results => self.results.select_previous(),
      Focus::Tags => self.refinements.select_previous(),
      Focus::Search => {}
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_search(&mut self) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    debug!(
      request_id,
      query = %self.parameters.query,
      refinements = self.parameters.refinements.len(),
      "starting search"
    );

    self.pending_search = Some(PendingSearch {
      query: self.parameters.query.clone(),
      request_id,
    });

    self.transient_message = None;

    if self.help.is_visible() {
      self.help.set_backup(LOADING_SEARCH_STATUS.into());
    } else {
      self.message = LOADING_SEARCH_STATUS.into();
    }

    self.pending_effects.push(Effect::Search {
      parameters: self.parameters.clone(),
      request_id,
    });
  }

  fn summary(shown: usize, total: u64, query: &str) -> String {
    let query = truncate(query.trim(), 40);

    let suffix = if query.is_empty() {
      String::new()
    } else {
      format!(" for \"{query}\"")
    };

    match total {
      0 => format!("No results{suffix}"),
      1 => format!("Found 1 result{suffix}"),
      _ if u64::try_from(shown).is_ok_and(|shown| shown < total) => {
        format!("Showing {shown} of {total} results{suffix}")
      }
      _ => format!("Found {total} results{suffix}"),
    }
  }

  fn toggle_refinement(&mut self) {
    let Some(value) = self.refinements.cursor_value().map(str::to_string)
    else {
      return;
    };

    let refined = self.parameters.toggle_refinement(&value);

    info!(tag = %value, refined, "toggled refinement");

    self.start_search();
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::anyhow};

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

  fn search_effect(dispatch: &CommandDispatch) -> (SearchParameters, u64) {
    assert_eq!(dispatch.effects.len(), 1);

    match &dispatch.effects[0] {
      Effect::Search {
        parameters,
        request_id,
      } => (parameters.clone(), *request_id),
      Effect::OpenUrl { .. } => panic!("unexpected effect variant"),
    }
  }

  fn results(
    parameters: SearchParameters,
    hits: Vec<SearchHit>,
    facets: Vec<FacetValue>,
  ) -> SearchResults {
    SearchResults {
      facets,
      total: u64::try_from(hits.len()).unwrap(),
      hits,
      parameters,
    }
  }

  fn loaded_state() -> State {
    let mut state = State::new("", Some("https://example.com".to_string()));

    let dispatch = state.dispatch_command(Command::Refresh);
    let (parameters, request_id) = search_effect(&dispatch);

    state.handle_event(Event::SearchResults {
      request_id,
      result: Ok(results(
        parameters,
        vec![
          hit("post-2023-05-10-launch.mdx", None),
          hit("notes.mdx", Some("cover.png")),
        ],
        vec![FacetValue::new("web", 1), FacetValue::new("rust", 2)],
      )),
    });

    state
  }

  #[test]
  fn keystrokes_push_every_query() {
    let mut state = State::new("", None);

    let mut queries = Vec::new();

    for ch in "go".chars() {
      let dispatch = state.dispatch_command(Command::InsertChar(ch));
      queries.push(search_effect(&dispatch).0.query);
    }

    assert_eq!(queries, vec!["g", "go"]);
    assert_eq!(state.query_input(), "go");
    assert_eq!(state.message(), LOADING_SEARCH_STATUS);
  }

  #[test]
  fn unchanged_input_does_not_search() {
    let mut state = State::new("", None);

    let dispatch = state.dispatch_command(Command::Backspace);

    assert!(dispatch.effects.is_empty());
  }

  #[test]
  fn stale_results_are_dropped() {
    let mut state = State::new("", None);

    let (first, first_id) =
      search_effect(&state.dispatch_command(Command::InsertChar('a')));

    let (second, second_id) =
      search_effect(&state.dispatch_command(Command::InsertChar('b')));

    state.handle_event(Event::SearchResults {
      request_id: first_id,
      result: Ok(results(first, vec![hit("old.mdx", None)], Vec::new())),
    });

    assert!(state.results().is_empty());
    assert_eq!(state.empty_message(), LOADING_SEARCH_STATUS);

    state.handle_event(Event::SearchResults {
      request_id: second_id,
      result: Ok(results(second, vec![hit("new.mdx", None)], Vec::new())),
    });

    assert_eq!(state.results().len(), 1);
    assert_eq!(state.results().items()[0].slug, "new");
    assert_eq!(state.message(), "Found 1 result for \"ab\"");
  }

  #[test]
  fn results_are_formatted_for_display() {
    let state = loaded_state();

    let items = state.results().items();

    assert_eq!(items[0].publish_date.as_deref(), Some("2023-05-10"));
    assert_eq!(items[0].link_href, "/blog/post-launch");
    assert_eq!(items[0].image_path, "/blog/coffee.jpg");
    assert_eq!(items[1].publish_date, None);
    assert_eq!(items[1].link_href, "/blog/notes");
    assert_eq!(items[1].image_path, "/blog/cover.png");

    assert_eq!(state.message(), "Found 2 results");
  }

  #[test]
  fn empty_result_set_shows_no_results_message() {
    let mut state = State::new("zzz", None);

    let (parameters, request_id) =
      search_effect(&state.dispatch_command(Command::Refresh));

    state.handle_event(Event::SearchResults {
      request_id,
      result: Ok(results(parameters, Vec::new(), Vec::new())),
    });

    assert!(state.results().is_empty());
    assert_eq!(state.empty_message(), "No blogs match your criteria.");
    assert_eq!(state.message(), "No results for \"zzz\"");
  }

  #[test]
  fn backend_failure_renders_empty_list() {
    let mut state = loaded_state();

    let (_, request_id) =
      search_effect(&state.dispatch_command(Command::Refresh));

    state.handle_event(Event::SearchResults {
      request_id,
      result: Err(anyhow!("connection refused")),
    });

    assert!(state.results().is_empty());
    assert_eq!(state.empty_message(), NO_RESULTS_MESSAGE);
    assert_eq!(state.message(), "Could not search: connection refused");
  }

  #[test]
  fn results_arriving_behind_help_reach_status_line() {
    let mut state = State::new("", None);

    let (parameters, request_id) =
      search_effect(&state.dispatch_command(Command::Refresh));

    state.dispatch_command(Command::ShowHelp);
    assert_eq!(state.message(), HELP_STATUS);

    state.handle_event(Event::SearchResults {
      request_id,
      result: Ok(results(parameters, vec![hit("notes.mdx", None)], Vec::new())),
    });

    assert_eq!(state.message(), HELP_STATUS);

    state.dispatch_command(Command::HideHelp);
    assert_eq!(state.message(), "Found 1 result");
  }

  #[test]
  fn toggling_a_tag_refines_and_searches() {
    let mut state = loaded_state();

    state.dispatch_command(Command::FocusNext);
    assert_eq!(state.focus(), Focus::Tags);

    state.dispatch_command(Command::SelectNext);

    let (parameters, _) =
      search_effect(&state.dispatch_command(Command::ToggleRefinement));

    assert!(parameters.is_refined("web"));

    let toggles = state.refinement_toggles();

    assert_eq!(toggles[0].value, "rust");
    assert!(!toggles[0].refined);
    assert_eq!(toggles[1].value, "web");
    assert!(toggles[1].refined);

    let (parameters, _) =
      search_effect(&state.dispatch_command(Command::ToggleRefinement));

    assert!(parameters.refinements.is_empty());
    assert!(state.refinement_toggles().iter().all(|toggle| !toggle.refined));
  }

  #[test]
  fn open_selected_uses_site_url() {
    let mut state = loaded_state();

    state.dispatch_command(Command::FocusResults);
    state.dispatch_command(Command::SelectNext);

    let dispatch = state.dispatch_command(Command::OpenSelected);

    match &dispatch.effects[..] {
      [Effect::OpenUrl { url }] => {
        assert_eq!(url, "https://example.com/blog/notes");
      }
      _ => panic!("expected a single open effect"),
    }
  }

  #[test]
  fn open_selected_without_site_url_reports_link() {
    let mut state = loaded_state();
    state.site_url = None;

    let dispatch = state.dispatch_command(Command::OpenSelected);

    assert!(dispatch.effects.is_empty());
    assert!(state.message().starts_with("/blog/post-launch"));
  }

  #[test]
  fn summary_mentions_truncated_pages() {
    assert_eq!(
      State::summary(20, 45, "rust"),
      "Showing 20 of 45 results for \"rust\""
    );
    assert_eq!(State::summary(3, 3, " "), "Found 3 results");
  }

  #[test]
  fn quit_exits() {
    let mut state = State::new("", None);

    assert!(state.dispatch_command(Command::Quit).should_exit);
  }
}
