//! morse-translator CLI
//!
//! Translate text to and from Morse code, one-shot or interactively.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use morse_translator::codec::translate;
use morse_translator::input::{InputSource, read_input};
use morse_translator::logging::init_cli_logger;
use morse_translator::report::{format_chart, format_translation};
use morse_translator::tui;
use morse_translator::types::{Direction, OutputFormat};

#[derive(Parser)]
#[command(name = "morse-translator")]
#[command(about = "Translate text to and from Morse code")]
#[command(version)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate text into Morse code
    Encode {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Translate Morse code into text
    Decode {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the Morse code key
    Chart {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Open the interactive translator (default)
    Tui,
}

#[derive(clap::Args)]
struct InputArgs {
    /// Text to translate (default: read --input or stdin).
    /// Morse starting with '-' is taken as text, not as a flag.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    text: Vec<String>,

    /// Read input from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // The TUI owns the terminal; a stderr subscriber would draw over it
    if !matches!(command, Commands::Tui) {
        init_cli_logger(cli.verbose);
    }

    let result = match command {
        Commands::Encode { input } => cmd_translate(Direction::ToMorse, input),
        Commands::Decode { input } => cmd_translate(Direction::FromMorse, input),
        Commands::Chart { format } => cmd_chart(format.into()),
        Commands::Tui => tui::run().map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_translate(direction: Direction, args: InputArgs) -> Result<(), String> {
    let source = InputSource::from_args(args.text, args.input);
    debug!(?source, %direction, "reading input");

    let text = read_input(&source).map_err(|e| match &source {
        InputSource::File(path) => format!("Cannot read {}: {}", path.display(), e),
        _ => e.to_string(),
    })?;
    debug!(bytes = text.len(), lines = text.lines().count(), "translating");

    let translation = translate(direction, &text).map_err(|e| e.to_string())?;
    debug!(bytes = translation.output.len(), "translated");

    print!("{}", format_translation(&translation, args.format.into()));
    Ok(())
}

fn cmd_chart(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_chart(format));
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
