//! Basil CLI - Command line interface
//!
//! `basil compile <PATH>` tokenizes a source file and prints its tokens.
//! Settings come from `basil.json` (or `--config`), overridden by flags.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{load_project, LogConfig};
use crate::platform::{print_error_with_source, source_listing};
use basil_api::{
    get_config, init_config, read_source, tokenize, BasilConfig, BasilError, LogFormat, LogLevel,
    OutputFormat, RunConfig, TokenizeOutput, UnrecognizedPolicy,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "basil",
    about = "Basil programming language - lexer front end",
    version = "0.1.0"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a source file and print its tokens
    Compile(CompileArgs),
    /// Anything else is reported as an unknown command
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Args, Debug)]
struct CompileArgs {
    /// Source file to tokenize
    path: String,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Echo the numbered source before the tokens
    #[arg(long)]
    show_source: bool,

    /// Print structured tokens (JSON only)
    #[arg(long)]
    tokens: bool,

    /// Store string literals without their quotes
    #[arg(long)]
    strip_quotes: bool,

    /// What to do with unrecognized characters
    #[arg(long, value_enum)]
    unrecognized: Option<PolicyArg>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Also append logs to this file
    #[arg(long)]
    log_file: Option<String>,

    /// Log line format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Project file (default: ./basil.json if present)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Collect,
    Skip,
    Reject,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Compile(args) => handle_compile(args),
        Command::External(argv) => {
            let verb = argv.into_iter().next().unwrap_or_default();
            print_error_with_source(&BasilError::UnknownCommand(verb), None);
            1
        }
    };
    process::exit(code);
}

/// Merge flags over the project file
fn apply_overrides(project: &mut BasilConfig, args: &CompileArgs) {
    if let Some(format) = args.format {
        project.output.format = match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        };
    }
    project.output.show_source |= args.show_source;
    project.output.tokens |= args.tokens;
    project.lexer.strip_quotes |= args.strip_quotes;
    if let Some(policy) = args.unrecognized {
        project.lexer.unrecognized = match policy {
            PolicyArg::Collect => UnrecognizedPolicy::Collect,
            PolicyArg::Skip => UnrecognizedPolicy::Skip,
            PolicyArg::Reject => UnrecognizedPolicy::Reject,
        };
    }
    if let Some(level) = args.log_level {
        project.logging.level = level;
    }
    if let Some(file) = &args.log_file {
        project.logging.file = Some(file.clone());
    }
    if let Some(format) = args.log_format {
        project.logging.format = match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
    }
}

fn handle_compile(args: CompileArgs) -> i32 {
    let mut project = match load_project(args.config.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            print_error_with_source(&e, None);
            return 1;
        }
    };
    apply_overrides(&mut project, &args);

    let log_config = LogConfig::from(&project.logging);
    if let Err(e) = logging::init_with_file(
        &log_config,
        project.logging.format,
        project.logging.file.as_deref(),
    ) {
        print_error_with_source(&BasilError::Config(e), None);
        return 1;
    }
    debug!(target: "basil::cli", ?args, "compile requested");

    // Initialize API config (global singleton for convenience)
    if init_config(RunConfig::from_project(&project)).is_err() {
        warn!(target: "basil::cli", "configuration already initialized");
    }
    let Some(run_config) = get_config() else {
        print_error_with_source(
            &BasilError::Config("configuration unavailable".to_string()),
            None,
        );
        return 1;
    };

    let source = match read_source(&args.path, run_config) {
        Ok(s) => s,
        Err(e) => {
            report(&e, None, run_config);
            return 1;
        }
    };

    if run_config.output.show_source {
        // stdout stays pure JSON in json mode
        match run_config.output.format {
            OutputFormat::Text => print!("{}", source_listing(&source)),
            OutputFormat::Json => eprint!("{}", source_listing(&source)),
        }
    }

    match tokenize(&source, run_config) {
        Ok(output) => {
            print_diagnostics(&output);
            print_tokens(&output, run_config);
            0
        }
        Err(e) => {
            report(&e, Some(&source), run_config);
            1
        }
    }
}

fn report(e: &BasilError, source: Option<&str>, config: &RunConfig) {
    match config.output.format {
        OutputFormat::Json => eprintln!("{}", e.to_report().to_json()),
        OutputFormat::Text => print_error_with_source(e, source),
    }
}

fn print_diagnostics(output: &TokenizeOutput) {
    for d in &output.diagnostics {
        eprintln!("warning: {}: {}", d.name(), d);
    }
}

fn print_tokens(output: &TokenizeOutput, config: &RunConfig) {
    match config.output.format {
        OutputFormat::Text => {
            for (i, line) in output.display().iter().enumerate() {
                println!("{}: [{}]", i, line.join(", "));
            }
        }
        OutputFormat::Json => {
            let lines: serde_json::Map<String, serde_json::Value> = if config.output.tokens {
                output
                    .stream
                    .tokens()
                    .iter()
                    .enumerate()
                    .map(|(i, line)| (i.to_string(), serde_json::json!(line)))
                    .collect()
            } else {
                output
                    .display()
                    .iter()
                    .enumerate()
                    .map(|(i, line)| (i.to_string(), serde_json::json!(line)))
                    .collect()
            };
            println!("{:#}", serde_json::Value::Object(lines));
        }
    }
}
