//! Golden snapshot tests for Java emission
//!
//! These tests generate Java from `.fun` input files and compare the output against stored snapshots. This ensures
//! emitter changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use funlang::backend::java::EmitConfig;
use funlang::pipeline;

/// Generate Java source from FunLang source
fn generate_java(source: &str) -> String {
    pipeline::compile_source(source, &EmitConfig::default()).unwrap_or_else(|e| panic!("compilation failed: {e}"))
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.fun", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_basics_codegen() {
    let java = generate_java(&load_test_file("basics"));
    insta::assert_snapshot!("basics", java.trim_end());
}

#[test]
fn test_control_flow_codegen() {
    let java = generate_java(&load_test_file("control_flow"));
    insta::assert_snapshot!("control_flow", java.trim_end());
}

#[test]
fn test_functions_and_chains_codegen() {
    let java = generate_java(&load_test_file("functions_and_chains"));
    insta::assert_snapshot!("functions_and_chains", java.trim_end());
}

/// Every snapshot input must still compile, even without a stored snapshot
#[test]
fn test_all_snapshot_inputs_compile() {
    insta::glob!("codegen_snapshots/*.fun", |path| {
        let source = fs::read_to_string(path).unwrap();
        let java = generate_java(&source);
        assert!(java.contains("public static void main(String[] args) {"));
        assert!(java.trim_end().ends_with('}'));
    });
}
