use super::*;

pub(crate) struct App {
  backend: Arc<dyn SearchBackend>,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  facet_attribute: String,
  handle: Handle,
  index_name: String,
  state: State,
}

impl App {
  const PLACEHOLDER: &str = "Search";

  fn card(item: &DisplayItem, available_width: u16) -> ListItem {
    let wrap_width = usize::from(available_width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        item.heading().to_string(),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
    ])];

    if let Some(detail) = item.detail() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    if let Some(sizzle) = item.sizzle.as_deref() {
      for line in wrap_text(sizzle, wrap_width) {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(line, Style::default().fg(Color::Gray)),
        ]));
      }
    }

    if let Some(byline) = item.byline() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(byline, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        format!("{} • {}", item.link_href, item.image_path),
        Style::default()
          .fg(Color::DarkGray)
          .add_modifier(Modifier::ITALIC),
      ),
    ]));

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn dispatch(&mut self, command: Command) -> bool {
    let dispatch = self.state.dispatch_command(command);

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    dispatch.should_exit
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
      ])
      .split(frame.area());

    let focus = self.state.focus();

    let search_width = focus.search_width();

    let top = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([
        Constraint::Percentage(100 - search_width),
        Constraint::Percentage(search_width),
      ])
      .split(layout[0]);

    self.draw_tags(frame, top[0], focus == Focus::Tags);
    self.draw_search_box(frame, top[1], focus == Focus::Search);
    self.draw_results(frame, layout[1], focus == Focus::Results);

    let status = Paragraph::new(vec![
      Line::from(self.state.message().to_string()),
      Line::from(Span::styled(
        focus.status(),
        Style::default().fg(Color::DarkGray),
      )),
    ]);

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_results(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
    self.state.set_list_height(usize::from(area.height));

    let results = self.state.results();

    let list_items: Vec<ListItem> = if results.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(self.state.empty_message()),
      ]))]
    } else {
      results
        .items()
        .iter()
        .map(|item| Self::card(item, area.width))
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(results.selected_index())
      .with_offset(results.offset());

    let highlight = if focused {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };

    let list = List::new(list_items)
      .highlight_style(highlight)
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);

    self.state.results_mut().set_offset(list_state.offset());
  }

  fn draw_search_box(&self, frame: &mut Frame, area: Rect, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border));

    let inner = block.inner(area);

    let input = self.state.query_input();

    let visible_width = usize::from(inner.width.saturating_sub(1));

    let skip = input.chars().count().saturating_sub(visible_width);

    let visible = input.chars().skip(skip).collect::<String>();

    let line = if input.is_empty() {
      Line::from(Span::styled(
        Self::PLACEHOLDER,
        Style::default().fg(Color::DarkGray),
      ))
    } else {
      Line::from(visible.clone())
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && !self.state.help_is_visible() {
      let column = u16::try_from(visible.chars().count()).unwrap_or(u16::MAX);

      frame.set_cursor_position(Position::new(
        inner.x.saturating_add(column),
        inner.y,
      ));
    }
  }

  fn draw_tags(&self, frame: &mut Frame, area: Rect, focused: bool) {
    let block = Block::default()
      .borders(Borders::ALL)
      .title("Tags")
      .border_style(Style::default().fg(if focused {
        Color::Cyan
      } else {
        Color::DarkGray
      }));

    let inner_width = usize::from(block.inner(area).width);

    if self.state.refinements_are_empty() {
      let empty = Paragraph::new(Span::styled(
        "no tags",
        Style::default().fg(Color::DarkGray),
      ))
      .block(block);

      frame.render_widget(empty, area);

      return;
    }

    let cursor = self.state.refinement_cursor();

    let (mut spans, mut position, mut scroll) = (Vec::new(), 0usize, 0usize);

    for (index, toggle) in self.state.refinement_toggles().iter().enumerate() {
      let chip = format!(" {} ({}) ", toggle.value, toggle.count);

      let width = chip.chars().count();

      let mut style = if toggle.refined {
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::Gray)
      };

      if focused && cursor == Some(index) {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);

        scroll = (position + width).saturating_sub(inner_width);
      }

      spans.push(Span::styled(chip, style));
      spans.push(Span::raw(" "));

      position += width + 1;
    }

    let tags = Paragraph::new(Line::from(spans))
      .block(block)
      .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)));

    frame.render_widget(tags, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Search {
        parameters,
        request_id,
      } => {
        let (backend, sender) = (self.backend.clone(), self.event_tx.clone());

        let (index_name, attribute) =
          (self.index_name.clone(), self.facet_attribute.clone());

        self.handle.spawn(async move {
          let result = fetch_results(
            backend.as_ref(),
            &index_name,
            &attribute,
            parameters,
          )
          .await;

          let _ = sender.send(Event::SearchResults { request_id, result });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          info!(%url, "opened post");

          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open post");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(backend: Arc<dyn SearchBackend>, config: &Config) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      backend,
      event_rx,
      event_tx,
      facet_attribute: config.facet_attribute.clone(),
      handle: Handle::current(),
      index_name: config.index_name.clone(),
      state: State::new(&config.initial_query, config.site_url.clone()),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    if self.dispatch(Command::Refresh) {
      return Ok(());
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(100))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.focus().handle_key(key)
      };

      if self.dispatch(command) {
        break;
      }
    }

    info!("exiting");

    Ok(())
  }
}
