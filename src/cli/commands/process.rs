use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::ui::review;
use crate::utils::path::expand_tilde;
use std::collections::BTreeSet;
use std::io::{self, Read};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        dir,
        file,
        format,
        delete,
        dry_run,
        force,
    } = cmd
    {
        let mut session = Session::new(cfg.session_options());

        load_input(&mut session, input.as_deref())?;
        run_process(&mut session)?;

        //
        // Righe da eliminare (numeri 1-based, duplicati ignorati)
        //
        if !delete.is_empty() {
            let numbers: BTreeSet<usize> = delete.iter().copied().collect();
            for n in numbers {
                if n == 0 {
                    return Err(AppError::InvalidRow(0));
                }
                session.toggle_row(n - 1)?;
            }
            let removed = session.delete_selected();
            info(format!("Deleted {removed} row(s)."));
        }

        header("処理結果");
        print!("{}", review::render(&session, cfg));

        if *dry_run {
            info("Dry run: nothing written.");
            return Ok(());
        }

        if let Some(name) = file {
            session.set_file_name(name.clone());
        }

        session.download(&output_dir(dir.as_deref(), cfg), *format, *force)?;
    }
    Ok(())
}

/// `--dir` when given, else `output_dir` from config.
pub(crate) fn output_dir(dir: Option<&str>, cfg: &Config) -> PathBuf {
    dir.map(expand_tilde).unwrap_or_else(|| cfg.output_dir())
}

/// Fill the session from a file, or from stdin for `None` / `-`.
pub(crate) fn load_input(session: &mut Session, input: Option<&str>) -> AppResult<()> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            session.set_raw_text(text);
        }
        Some(path) => {
            let path = expand_tilde(path);
            let bytes = session.load_file(&path)?;
            info(format!("Loaded {} ({bytes} bytes)", path.display()));
        }
    }
    Ok(())
}

/// Process the raw text and report every parse warning of the batch.
pub(crate) fn run_process(session: &mut Session) -> AppResult<usize> {
    let count = session.process()?;

    for issue in session.warnings() {
        warning(format!("Warning: {issue}"));
    }
    success(format!("Processed {count} row(s)."));

    Ok(count)
}
