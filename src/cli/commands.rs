//! Command execution: wires settings, services and presenter for one run

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::output::{self, Presenter};
use crate::cli::CliResult;
use crate::config::Settings;
use crate::infrastructure::ServiceContainer;

/// Emitted on stderr for `--level L1` / `--level L2`.
pub const ADVISORY_LEVEL_NOTE: &str = "MASVS v2 dataset does not include per-control L1/L2 mapping; treating --level as planning context only.";

/// Run a lookup with real services, printing to stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let container = ServiceContainer::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_lookup(cli, &container, &mut out)
}

/// Run a lookup against the given container, writing results to `out`.
#[instrument(skip_all)]
pub fn run_lookup<W: Write>(cli: &Cli, container: &ServiceContainer, out: &mut W) -> CliResult<()> {
    let query = cli.to_query();
    debug!("run_lookup: {:?}", query);

    let result = container
        .lookup_service()
        .lookup(cli.data.as_deref(), &container.settings, &query)?;

    if query.level.is_some_and(|level| level.is_advisory()) {
        output::note(ADVISORY_LEVEL_NOTE);
    }

    Presenter::new(query.limit, cli.show_path).render(out, &result)
}
