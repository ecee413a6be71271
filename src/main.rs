use {
  anyhow::{Context, ensure},
  app::App,
  arguments::Arguments,
  async_trait::async_trait,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  display_item::DisplayItem,
  effect::Effect,
  event::Event,
  facet_value::FacetValue,
  focus::Focus,
  help_view::HelpView,
  list_view::ListView,
  object_id::ObjectId,
  pending_search::PendingSearch,
  query_binder::QueryBinder,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  refinement_list::{RefinementList, RefinementToggle},
  regex::Regex,
  search_backend::{SearchBackend, fetch_results},
  search_hit::SearchHit,
  search_page::SearchPage,
  search_parameters::SearchParameters,
  search_request::SearchRequest,
  search_response::SearchResponse,
  search_results::SearchResults,
  serde::{Deserialize, Deserializer, Serialize},
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Debug, Formatter},
    fs::OpenOptions,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::{Arc, LazyLock, Mutex},
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{
    deserialize_authors, deserialize_optional_string, deserialize_optional_text,
    truncate, wrap_text,
  },
};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod config;
mod display_item;
mod effect;
mod event;
mod facet_value;
mod focus;
mod help_view;
mod list_view;
mod logging;
mod object_id;
mod pending_search;
mod query_binder;
mod refinement_list;
mod search_backend;
mod search_hit;
mod search_page;
mod search_parameters;
mod search_request;
mod search_response;
mod search_results;
mod state;
mod transient_message;
mod utils;

const SEARCH_STATUS: &str =
  "type to search • ctrl+u clear • enter/↓ results • tab tags • esc leave";

const TAGS_STATUS: &str = "←/h →/l move • enter/space toggle tag • / search • tab results • q quit • ? help";

const RESULTS_STATUS: &str = "↑/k up • ↓/j down • enter/o open • / search • tab search • ctrl+r refresh • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_SEARCH_STATUS: &str = "Searching...";
const NO_RESULTS_MESSAGE: &str = "No blogs match your criteria.";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Focus:
  tab        move focus: search → tags → results
  shift+tab  move focus backwards
  /          jump to the search box

Search box:
  type       every keystroke updates the query
  backspace  delete the last character
  ctrl+u     clear the query
  enter / ↓  move to the results
  esc        leave the search box

Tags:
  ← / h      previous tag
  → / l      next tag
  enter      toggle the tag filter
  space      toggle the tag filter

Results:
  ↑ / k      move selection up
  ↓ / j      move selection down
  pg↓ pg↑    page down and up
  home end   jump to first or last result
  enter / o  open the selected post in your browser
  ctrl+r     run the current search again

  q          quit
  ctrl+c     quit from anywhere
  ?          toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Arguments::parse()
    .into_config()
    .context("invalid configuration")?;

  logging::init(config.log_file.as_deref())?;

  info!(config = ?config, "starting blog search");

  let backend: Arc<dyn SearchBackend> = Arc::new(Client::new(&config));

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(backend, &config);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
