//! Explore command - interactive indicator selection.
//!
//! Each line read from stdin is one selection write. Every write recomputes
//! all views before the next line is read.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use healthatlas::{Dashboard, EXPORT_FILE_NAME, Indicator, write_csv};
use tracing::debug;

use crate::cli::IngestArgs;
use crate::render;

/// One parsed line of input.
#[derive(Debug, PartialEq)]
enum Action {
    Select(Indicator),
    List,
    Table,
    Export(PathBuf),
    Help,
    Quit,
    Skip,
}

fn parse_action(line: &str) -> Result<Action, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Ok(Action::Skip),
        "list" | "ls" => Ok(Action::List),
        "table" => Ok(Action::Table),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        "export" => {
            let path = if rest.is_empty() { EXPORT_FILE_NAME } else { rest };
            Ok(Action::Export(PathBuf::from(path)))
        }
        _ => line.parse().map(Action::Select),
    }
}

pub fn run(
    ingest: IngestArgs,
    indicator: Indicator,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = super::load(&ingest)?;
    let mut dashboard = loaded.dashboard(indicator);

    dashboard.subscribe(|frame| {
        let degraded = frame.panels.iter().filter(|p| p.is_degraded()).count();
        debug!(revision = frame.revision, indicator = %frame.indicator, degraded, "frame ready");
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session(&mut dashboard, stdin.lock(), &mut stdout)
}

/// Drive the dashboard from `input` until it ends or the user quits.
fn session<R: BufRead, W: Write>(
    dashboard: &mut Dashboard,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    write!(out, "{}", render::frame(dashboard.frame()))?;
    writeln!(out)?;
    write_help(out)?;

    for line in input.lines() {
        let line = line?;
        match parse_action(&line) {
            Ok(Action::Select(indicator)) => {
                let frame = dashboard.select(indicator);
                writeln!(out)?;
                write!(out, "{}", render::frame(frame))?;
            }
            Ok(Action::List) => write_list(dashboard, out)?,
            Ok(Action::Table) => write!(out, "{}", render::preview(&dashboard.preview(10)))?,
            Ok(Action::Export(path)) => match write_csv(dashboard.dataset(), &path) {
                Ok(()) => writeln!(
                    out,
                    "{} {}",
                    "Exported to".green(),
                    path.display().to_string().white().bold()
                )?,
                // Export failures leave the session running.
                Err(e) => writeln!(out, "{} {}", "Export failed:".red(), e)?,
            },
            Ok(Action::Help) => write_help(out)?,
            Ok(Action::Quit) => break,
            Ok(Action::Skip) => {}
            Err(message) => writeln!(out, "{}", message.red())?,
        }
        out.flush()?;
    }

    Ok(())
}

fn write_list<W: Write>(dashboard: &Dashboard, out: &mut W) -> io::Result<()> {
    let schema = dashboard.dataset().schema();
    for indicator in Indicator::ALL {
        let marker = if indicator == dashboard.indicator() { "*" } else { " " };
        let presence = if schema.has_column(indicator.column()) {
            "".normal()
        } else {
            "(not in data)".dimmed()
        };
        writeln!(out, "{} {:<22} {}", marker, indicator.column(), presence)?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Type an indicator name to switch, or: list, table, export [path], help, quit".dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthatlas::HealthAtlas;
    use std::io::Cursor;

    fn dashboard() -> Dashboard {
        colored::control::set_override(false);
        let loaded = HealthAtlas::new()
            .load_bytes(
                b"country,healthcare_facilities,vaccination_rate,access_to_water\n\
                  Kenya,120,80,59\nGhana,90,94,87\n",
            )
            .unwrap();
        loaded.dashboard(Indicator::VaccinationRate)
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("  "), Ok(Action::Skip));
        assert_eq!(parse_action("list"), Ok(Action::List));
        assert_eq!(parse_action("QUIT"), Ok(Action::Quit));
        assert_eq!(
            parse_action("export"),
            Ok(Action::Export(PathBuf::from(EXPORT_FILE_NAME)))
        );
        assert_eq!(
            parse_action("export out/data.csv"),
            Ok(Action::Export(PathBuf::from("out/data.csv")))
        );
        assert_eq!(
            parse_action("access to water"),
            Ok(Action::Select(Indicator::AccessToWater))
        );
        assert!(parse_action("gdp").is_err());
    }

    #[test]
    fn test_session_switches_indicators() {
        let mut dash = dashboard();
        let input = Cursor::new("access_to_water\nnonsense\nquit\nhiv_prevalence\n");
        let mut out = Vec::new();

        session(&mut dash, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(dash.indicator(), Indicator::AccessToWater);
        assert_eq!(dash.frame().revision, 1);
        assert!(text.contains("Top 3 Countries by Access To Water"));
        assert!(text.contains("Unknown indicator: nonsense"));
        assert!(!text.contains("Hiv Prevalence"));
    }

    #[test]
    fn test_session_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut dash = dashboard();
        let input = Cursor::new(format!("export {}\n", path.display()));
        let mut out = Vec::new();

        session(&mut dash, input, &mut out).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("country,healthcare_facilities,vaccination_rate"));
        assert!(written.contains("Kenya,120,80,59,KEN"));
    }

    #[test]
    fn test_list_marks_current() {
        let dash = dashboard();
        let mut out = Vec::new();
        write_list(&dash, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("* vaccination_rate"));
        assert!(text.contains("malaria_prevalence"));
        assert!(text.contains("(not in data)"));
    }
}
