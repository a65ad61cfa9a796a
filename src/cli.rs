//! `stopwatch` command-line tool: time an external command

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::config::StopwatchConfig;
use crate::core::{try_measure, write_report};
use crate::ui::console::print_warning;
use crate::ui::units_table;
use crate::units::DurationUnit;

#[derive(Debug, Parser)]
#[command(name = "stopwatch", version, about = "Time a command and report how long it took")]
pub struct Cli {
    /// Unit to report in (nanoseconds, microseconds, milliseconds, seconds, minutes or ns/us/ms/s/min)
    #[arg(short, long, value_name = "UNIT")]
    pub unit: Option<DurationUnit>,

    /// Text printed before the elapsed count
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Measure without printing anything
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the measurement as JSON instead of a sentence
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// JSON config file (defaults to ./stopwatch.json when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List supported units and exit
    #[arg(long)]
    pub list_units: bool,

    /// Command to time, followed by its arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "list_units",
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Config file values with command-line flags applied on top
    pub fn effective_config(&self) -> Result<StopwatchConfig> {
        let mut config = StopwatchConfig::resolve(self.config.as_deref())
            .context("failed to load configuration")?;
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if self.json && config.quiet {
            warn!("--json given, ignoring Quiet from the configuration file");
            config.quiet = false;
        }
        config.quiet |= self.quiet;
        Ok(config)
    }
}

/// Run the tool, writing reports to `out`. Returns the process exit code.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<i32> {
    if cli.list_units {
        writeln!(out, "{}", units_table())?;
        return Ok(0);
    }

    let config = cli.effective_config()?;
    let Some((program, args)) = cli.command.split_first() else {
        bail!("no command given");
    };

    info!(program = %program, unit = config.unit.label(), "timing command");

    let mut status: Option<ExitStatus> = None;
    let measurement = try_measure(config.unit, || {
        status = Some(Command::new(program).args(args).status()?);
        Ok::<(), std::io::Error>(())
    })
    .with_context(|| format!("failed to run {}", program))?;

    if !config.quiet {
        if cli.json {
            serde_json::to_writer(&mut *out, &measurement)?;
            writeln!(out)?;
        } else {
            write_report(out, &config.prefix, &measurement)?;
        }
    }

    let code = match status {
        Some(status) if status.success() => 0,
        Some(status) => {
            warn!(%status, "command failed");
            print_warning(format!("{} exited with {}", program, status));
            status.code().unwrap_or(1)
        }
        None => 1,
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("stopwatch").chain(args.iter().copied()))
    }

    #[test]
    fn trailing_arguments_belong_to_command() {
        let cli = parse(&["--unit", "us", "--", "ls", "-la"]);
        assert_eq!(cli.unit, Some(DurationUnit::Microseconds));
        assert_eq!(cli.command, ["ls", "-la"]);
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["-u", "seconds", "-p", "Took ", "-q", "true"]);
        let config = cli.effective_config().unwrap();
        assert_eq!(config.unit, DurationUnit::Seconds);
        assert_eq!(config.prefix, "Took ");
        assert!(config.quiet);
    }

    #[test]
    fn json_flag_overrides_quiet_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwatch.json");
        std::fs::write(&path, r#"{ "Quiet": true }"#).unwrap();
        let config_arg = path.to_str().unwrap();

        let quiet = parse(&["--config", config_arg, "true"]).effective_config().unwrap();
        assert!(quiet.quiet);

        let json = parse(&["--config", config_arg, "--json", "true"]).effective_config().unwrap();
        assert!(!json.quiet);
    }

    #[test]
    fn rejects_unknown_unit() {
        let result = Cli::try_parse_from(["stopwatch", "--unit", "hours", "true"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_units_needs_no_command() {
        let cli = parse(&["--list-units"]);
        let mut out = Vec::new();
        assert_eq!(run(&cli, &mut out).unwrap(), 0);
        assert!(String::from_utf8(out).unwrap().contains("milliseconds"));
    }

    #[test]
    fn missing_program_is_an_error() {
        let cli = parse(&["--", "definitely-not-a-real-program-7f3a"]);
        let mut out = Vec::new();
        assert!(run(&cli, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn reports_after_command_finishes() {
        let cli = parse(&["-p", "Ran for ", "--", "true"]);
        let mut out = Vec::new();
        assert_eq!(run(&cli, &mut out).unwrap(), 0);

        let line = String::from_utf8(out).unwrap();
        let parsed = crate::utils::parse_report_line(&line).unwrap();
        assert_eq!(parsed.prefix, "Ran for ");
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_still_reports_and_passes_exit_code() {
        let cli = parse(&["--json", "--", "sh", "-c", "exit 3"]);
        let mut out = Vec::new();
        assert_eq!(run(&cli, &mut out).unwrap(), 3);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["unit"], "milliseconds");
    }
}
