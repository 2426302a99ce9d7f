//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::backend::java::EmitConfig;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::lexer;
use crate::pipeline::{self, PipelineError};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))
}

/// Render lex/parse errors with source snippets.
fn syntax_error(file_path: &Path, source: &str, errs: &[CompileError]) -> CliError {
    let name = file_path.display().to_string();
    let mut msg = String::new();
    for err in errs {
        msg.push_str(&diagnostics::format_error(&name, source, err));
        msg.push('\n');
    }
    CliError::program(msg.trim_end())
}

/// Map a pipeline failure to a CLI error; syntax errors get miette rendering.
fn pipeline_error(file_path: &Path, source: &str, err: PipelineError) -> CliError {
    match err {
        PipelineError::Syntax(errs) => syntax_error(file_path, source, &errs),
        other => CliError::program(other.to_string()),
    }
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| syntax_error(file_path, &source, &errs))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ast = pipeline::parse_source(&source).map_err(|errs| syntax_error(file_path, &source, &errs))?;
    println!("{:#?}", ast);
    Ok(ExitCode::SUCCESS)
}

/// Run the rule engine and the analyzer, printing every finding.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ast = pipeline::parse_source(&source).map_err(|errs| syntax_error(file_path, &source, &errs))?;
    let report = pipeline::check_program(&source, &ast);

    for warning in report.warnings() {
        eprintln!("warning: {}", warning);
    }

    if report.has_errors() {
        let msg: Vec<String> = report
            .error_messages()
            .iter()
            .map(|m| format!("error: {}", m))
            .collect();
        return Err(CliError::program(msg.join("\n")));
    }

    println!("✓ Check passed!");
    Ok(ExitCode::SUCCESS)
}

/// Print the generated Java unit to stdout.
pub fn emit_java(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let java = pipeline::compile_source(&source, &EmitConfig::default())
        .map_err(|e| pipeline_error(file_path, &source, e))?;
    print!("{}", java);
    Ok(ExitCode::SUCCESS)
}

/// Compile to `<output_dir>/<ClassName>.java`.
pub fn compile_file(input: &Path, output_dir: &Path, class_name: Option<String>) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let config = match class_name {
        Some(name) => EmitConfig::default().with_class_name(name),
        None => EmitConfig::default(),
    };
    let java = pipeline::compile_source(&source, &config).map_err(|e| pipeline_error(input, &source, e))?;

    fs::create_dir_all(output_dir).map_err(|e| {
        CliError::failure(format!(
            "Error creating output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;
    let out_path = output_dir.join(config.file_name());
    fs::write(&out_path, java)
        .map_err(|e| CliError::failure(format!("Error writing '{}': {}", out_path.display(), e)))?;

    let shown = fs::canonicalize(&out_path).unwrap_or(out_path);
    tracing::info!(path = %shown.display(), "java source written");
    println!("Wrote Java source to: {}", shown.display());
    Ok(ExitCode::SUCCESS)
}

/// Check and interpret a program, streaming its output to stdout.
pub fn run_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = pipeline::run_source(&source, &mut out);
    let _ = out.flush();
    result.map_err(|e| pipeline_error(file_path, &source, e))?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("funlang_cli_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/definitely/not/here.fun")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_compile_writes_java_file() {
        let dir = temp_dir("compile");
        let input = dir.join("prog.fun");
        fs::write(&input, "let x: integer = 2\nprint x\n").unwrap();
        let out_dir = dir.join("out");

        let code = compile_file(&input, &out_dir, None).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let java = fs::read_to_string(out_dir.join("FunProgram.java")).unwrap();
        assert!(java.contains("public class FunProgram"));
        assert!(java.contains("int x = 2;"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_compile_reports_semantic_errors_with_code_two() {
        let dir = temp_dir("semantic");
        let input = dir.join("bad.fun");
        fs::write(&input, "print missing\n").unwrap();

        let err = compile_file(&input, &dir.join("out"), None).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::PROGRAM_ERROR);
        assert!(err.message.contains("Use of undeclared variable: missing"));
        assert!(!dir.join("out").join("FunProgram.java").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_check_renders_syntax_errors() {
        let dir = temp_dir("syntax");
        let input = dir.join("broken.fun");
        fs::write(&input, "let = 1\n").unwrap();

        let err = check_file(&input).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::PROGRAM_ERROR);
        assert!(err.message.contains("Expected variable name"), "got: {}", err.message);
        assert!(err.message.contains("broken.fun"), "got: {}", err.message);
        let _ = fs::remove_dir_all(&dir);
    }
}
