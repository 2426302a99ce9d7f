//! CLI module for the FunLang compiler
//!
//! ## Commands
//!
//! - `compile <INPUT> <OUTPUT_DIR>` - Check the program and write `FunProgram.java`
//! - `run <FILE>` - Check the program and interpret it
//! - `check <FILE>` - Run the rule engine and the analyzer, reporting warnings and errors
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::FUNLANG_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// I/O and usage failures.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The program itself was rejected (syntax, semantic, emission or runtime errors).
    pub const PROGRAM_ERROR: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a program error (exit code 2).
    pub fn program(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::PROGRAM_ERROR)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The FunLang compiler
#[derive(Parser, Debug)]
#[command(name = "funlang")]
#[command(version = FUNLANG_VERSION)]
#[command(about = "The FunLang compiler: check, interpret, or translate to Java", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,

    /// Print the generated Java unit to stdout (debug)
    #[arg(long = "emit-java", value_name = "FILE")]
    pub emit_java_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a program to Java source
    Compile {
        /// Source file to compile
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Directory the Java file is written to (created if missing)
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
        /// Name of the generated Java class
        #[arg(long = "class-name", value_name = "NAME")]
        class_name: Option<String>,
    },

    /// Check and interpret a program
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Report rule engine and analyzer findings without producing output
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }
    if let Some(file) = cli.emit_java_file {
        return commands::emit_java(&file);
    }

    match cli.command {
        Some(Command::Compile {
            input,
            output_dir,
            class_name,
        }) => commands::compile_file(&input, &output_dir, class_name),
        Some(Command::Run { file }) => commands::run_file(&file),
        Some(Command::Check { file }) => commands::check_file(&file),
        None => Err(CliError::failure(
            "Error: no command given (try `funlang compile`, `funlang run` or `funlang check`)",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
