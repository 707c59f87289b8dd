//! Interactive session: a line prompt driving `Session` one action at a time.
//!
//! Errors are shown and the prompt continues; only stdin failures end it.

use crate::cli::commands::process::{output_dir, run_process};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::{error, info, success, warning};
use crate::ui::review;
use crate::utils::formatting::parse_row_numbers;
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  load <file>        load raw text from a file
  paste              enter raw text, end with a line containing only '.'
  text               print the raw text
  process | p        process the raw text
  show | ls          show the result table
  toggle | t <n...>  toggle selection of rows (1-based)
  all / none         select all rows / clear selection
  delete | d         delete selected rows
  name [file]        show or set the output file name
  save [--force]     write CSV
  json [--force]     write JSON
  status             show session status
  help               show this help
  quit | q           leave";

enum Flow {
    Continue,
    Quit,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { input, dir } = cmd {
        let out_dir = output_dir(dir.as_deref(), cfg);
        let mut session = Session::new(cfg.session_options());

        if let Some(path) = input {
            session.load_file(&expand_tilde(path))?;
            match run_process(&mut session) {
                Ok(_) => print!("{}", review::render(&session, cfg)),
                Err(e) => error(e),
            }
        }

        println!("{HELP}");

        loop {
            print!("telopcsv> ");
            io::stdout().flush().ok();

            let Some(line) = read_line()? else {
                break;
            };

            match execute(&mut session, cfg, &out_dir, line.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => error(e),
            }
        }
    }
    Ok(())
}

/// `None` on EOF.
fn read_line() -> AppResult<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn execute(session: &mut Session, cfg: &Config, out_dir: &Path, line: &str) -> AppResult<Flow> {
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));

    match verb {
        "" => {}
        "help" | "h" | "?" => println!("{HELP}"),
        "quit" | "q" | "exit" => return Ok(Flow::Quit),

        "load" => {
            if rest.is_empty() {
                warning("Usage: load <file>");
            } else {
                let bytes = session.load_file(&expand_tilde(rest))?;
                success(format!("Loaded {rest} ({bytes} bytes)"));
            }
        }
        "paste" => {
            let mut lines = Vec::new();
            while let Some(l) = read_line()? {
                if l.trim_end_matches(['\r', '\n']) == "." {
                    break;
                }
                lines.push(l.trim_end_matches(['\r', '\n']).to_string());
            }
            session.set_raw_text(lines.join("\n"));
            success(format!("Raw text set ({} lines)", lines.len()));
        }
        "text" => println!("{}", session.raw_text()),

        "process" | "p" => {
            run_process(session)?;
            print!("{}", review::render(session, cfg));
        }
        "show" | "ls" => print!("{}", review::render(session, cfg)),

        "toggle" | "t" => {
            let indices = match parse_row_numbers(rest) {
                Ok(v) if !v.is_empty() => v,
                Ok(_) => {
                    warning("Usage: toggle <n> [n...]");
                    return Ok(Flow::Continue);
                }
                Err(msg) => {
                    warning(msg);
                    return Ok(Flow::Continue);
                }
            };
            // tutto o niente: nessun toggle se un numero è fuori tabella
            if let Some(&bad) = indices.iter().find(|&&i| i >= session.rows().len()) {
                return Err(AppError::InvalidRow(bad + 1));
            }
            for i in indices {
                let on = session.toggle_row(i)?;
                info(format!(
                    "Row {} {}",
                    i + 1,
                    if on { "selected" } else { "unselected" }
                ));
            }
        }
        "all" => {
            session.select_all(true);
            info(format!("{} row(s) selected", session.selected().len()));
        }
        "none" => {
            session.select_all(false);
            info("Selection cleared");
        }
        "delete" | "d" => {
            if session.selected().is_empty() {
                warning("No rows selected.");
            } else {
                let removed = session.delete_selected();
                success(format!("Deleted {removed} row(s)."));
            }
        }

        "name" => {
            if rest.is_empty() {
                println!("{}", session.resolved_file_name(ExportFormat::Csv));
            } else {
                session.set_file_name(rest);
                info(format!("Output file name: {rest}"));
            }
        }
        "save" | "s" => {
            session.download(out_dir, ExportFormat::Csv, rest == "--force")?;
        }
        "json" => {
            session.download(out_dir, ExportFormat::Json, rest == "--force")?;
        }
        "status" => print_status(session),

        other => warning(format!("Unknown command '{other}' (type `help`)")),
    }

    Ok(Flow::Continue)
}

fn print_status(session: &Session) {
    println!("Rows     : {}", session.rows().len());
    println!("Selected : {}", session.selected().len());
    println!("File name: {}", session.resolved_file_name(ExportFormat::Csv));
    match session.error_message() {
        Some(msg) => println!("Message  : {msg}"),
        None => println!("Message  : -"),
    }
}
