//! Log output for the command line tool.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_cli_logger(verbose: bool) {
  let default_filter = if verbose {
    "portfolio_site=debug,info"
  } else {
    "portfolio_site=info,warn"
  };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  let installed = tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact(),
    )
    .try_init();

  if let Err(err) = installed {
    tracing::debug!("keeping existing log subscriber: {err}");
  }
}
