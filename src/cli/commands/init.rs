use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes a configuration file with default values at the default
/// location, or at `--config` when given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = Config::resolve_path(cli.config.as_deref());

    if path.exists() && !force {
        warning(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    info("Initializing telopcsv…");
    Config::default().save(&path)?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
