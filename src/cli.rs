use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{self, RunOptions};
use crate::config::{load_config, LinestatsConfig};
use crate::errors::ToolError;
use crate::formatting::{Diagnostics, FormattingConfig, StderrDiagnostics};
use crate::logging::init_logging;
use crate::report::RenderedReport;

/// The three line-oriented tools shipped as separate binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Descriptive statistics over numbers
    Statistics,
    /// Integers to fixed-width binary and hexadecimal
    Convert,
    /// Frequency of distinct lines
    WordCount,
}

impl Tool {
    pub fn binary_name(self) -> &'static str {
        match self {
            Tool::Statistics => "compute-statistics",
            Tool::Convert => "convert-numbers",
            Tool::WordCount => "word-count",
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Tool::Statistics => {
                "Compute count, mean, median, mode, standard deviation and variance of a file of numbers"
            }
            Tool::Convert => "Convert a file of integers to binary and hexadecimal",
            Tool::WordCount => "Count how often each distinct line of a file occurs",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Arguments shared by every tool.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(version)]
pub struct ToolArgs {
    /// Input file, one entry per line
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory that receives the results file
    #[arg(long = "output-dir", value_name = "DIR", env = "LINESTATS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,

    /// Disable colored diagnostics
    #[arg(long = "plain")]
    pub plain: bool,
}

/// Clap command for `tool`, named after its binary.
pub fn command(tool: Tool) -> clap::Command {
    ToolArgs::command()
        .name(tool.binary_name())
        .bin_name(tool.binary_name())
        .about(tool.about())
}

pub fn try_parse_args_from<I, T>(tool: Tool, args: I) -> Result<ToolArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command(tool).try_get_matches_from(args)?;
    ToolArgs::from_arg_matches(&matches)
}

/// Entry point used by the binaries.
pub fn main(tool: Tool) -> ExitCode {
    match try_parse_args_from(tool, std::env::args_os()) {
        Ok(args) => run(tool, args),
        Err(err) => {
            // --help and --version land here too; only real usage errors fail
            let status = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            ExitCode::from(status)
        }
    }
}

/// Run `tool` and map the outcome to a process exit status.
pub fn run(tool: Tool, args: ToolArgs) -> ExitCode {
    let formatting = if args.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let diagnostics = StderrDiagnostics::new(formatting);

    let config = load_config().unwrap_or_else(|err| {
        diagnostics.warning(&config_warning(&err));
        LinestatsConfig::default()
    });
    init_logging(args.verbosity, config.log_level());

    match execute(tool, &args, &config, &diagnostics) {
        Ok(rendered) => {
            log::debug!("{} finished with {} report lines", tool, rendered.body().len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            diagnostics.error(&failure_message(&err));
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Resolve options for `tool` and dispatch to its command.
pub fn execute(
    tool: Tool,
    args: &ToolArgs,
    config: &LinestatsConfig,
    diagnostics: &dyn Diagnostics,
) -> anyhow::Result<RenderedReport> {
    let input = args.input.clone().ok_or(ToolError::Usage {
        program: tool.binary_name(),
    })?;
    let options = RunOptions::new(input, config.output_dir_for(args.output_dir.as_deref()));
    log::debug!(
        "{}: input {}, output directory {}",
        tool,
        options.input.display(),
        options.output_dir.display()
    );

    match tool {
        Tool::Statistics => commands::statistics::run(&options, diagnostics),
        Tool::Convert => commands::convert::run(&options, diagnostics),
        Tool::WordCount => commands::word_count::run(&options),
    }
}

/// Text shown to the user for a fatal error.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ToolError>() {
        Some(usage @ ToolError::Usage { .. }) => usage.to_string(),
        Some(tool_error) => {
            let outer = err.to_string();
            let detail = tool_error.to_string();
            if outer == detail {
                format!("Error [{}]: {}", tool_error.code(), detail)
            } else {
                format!("Error [{}]: {}: {}", tool_error.code(), outer, detail)
            }
        }
        None => format!("Error: {:#}", err),
    }
}

/// Text shown when `.linestats.toml` is unusable and defaults apply.
pub fn config_warning(err: &ToolError) -> String {
    format!("Warning [{}]: {}. Using defaults.", err.code(), err)
}

fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ToolError>()
        .map(ToolError::exit_code)
        .unwrap_or(1)
}
