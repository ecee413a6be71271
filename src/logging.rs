use super::*;

const DEFAULT_FILTER: &str = "blog_search=info";

/// Sends `tracing` output to `log_file`, if one was given.
///
/// The terminal interface owns stdout and stderr, so there is no console
/// fallback.
pub(crate) fn init(log_file: Option<&Path>) -> Result {
  let Some(path) = log_file else {
    return Ok(());
  };

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow::anyhow!(error))
    .context("could not install log subscriber")?;

  Ok(())
}
