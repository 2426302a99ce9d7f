use super::*;
use crate::frontend::{lexer, parser};

fn analyze_str(source: &str) -> Vec<String> {
    let tokens = lexer::lex(source).expect("lex failed");
    let program = parser::parse(&tokens).expect("parse failed");
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&program);
    analyzer.errors().to_vec()
}

fn assert_clean(source: &str) {
    let errors = analyze_str(source);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_well_scoped_program() {
    assert_clean(
        r#"
        let x: integer = 5
        var name: text = "fun"
        func area(w: decimal, h: decimal) {
            let a = w * h
            return a
        }
        if x > 0 { print area(x, 2) } else { print 0 }
        while x > 0 { x = x - 1 }
        "#,
    );
}

#[test]
fn test_calls_may_precede_definitions() {
    assert_clean("print twice(2)\nfunc twice(n: integer) { return n * 2 }");
}

#[test]
fn test_duplicate_function_reported_once() {
    let errors = analyze_str("func f() { return 1 }\nfunc f() { return 2 }");
    assert_eq!(errors, vec!["Duplicate function name: f"]);
}

#[test]
fn test_function_named_like_builtin_is_a_duplicate() {
    let errors = analyze_str("func MIN(a: integer) { return a }");
    assert_eq!(errors, vec!["Duplicate function name: MIN"]);
}

#[test]
fn test_undeclared_use_reported_once() {
    let errors = analyze_str("print y");
    assert_eq!(errors, vec!["Use of undeclared variable: y"]);
}

#[test]
fn test_undeclared_assignment() {
    let errors = analyze_str("y = 1");
    assert_eq!(errors, vec!["Assignment to undeclared variable: y"]);
}

#[test]
fn test_redeclaration_in_same_scope() {
    let errors = analyze_str("let x = 1\nvar x = 2");
    assert_eq!(errors, vec!["Variable already declared in this scope: x"]);
}

#[test]
fn test_hiding_an_enclosing_local_is_rejected() {
    let errors = analyze_str("let x = 1\nif x > 0 { let x = 2 print x }\n{ { var x = 3 } }");
    assert_eq!(
        errors,
        vec![
            "Variable already declared in this scope: x",
            "Variable already declared in this scope: x",
        ]
    );

    let errors = analyze_str("func f(n: integer) { while n > 0 { let n = 1 } }");
    assert_eq!(errors, vec!["Variable already declared in this scope: n"]);
}

#[test]
fn test_sibling_blocks_may_reuse_names() {
    assert_clean("if true { let t = 1 } else { let t = 2 }\n{ let t = 3 }\nlet t = 4");
    assert_clean("let x = 1\nfunc f() { let x = 2 return x }");
}

#[test]
fn test_initializer_sees_outer_binding_only() {
    let errors = analyze_str("let x = x");
    assert_eq!(errors, vec!["Use of undeclared variable: x"]);
}

#[test]
fn test_loop_variable_is_scoped_to_loop() {
    let errors = analyze_str("for i = 1 to 3 { print i }\nprint i");
    assert_eq!(errors, vec!["Use of undeclared variable: i"]);
}

#[test]
fn test_loop_body_shares_loop_scope() {
    let errors = analyze_str("for i = 1 to 3 { let i = 0 }");
    assert_eq!(errors, vec!["Variable already declared in this scope: i"]);
}

#[test]
fn test_loop_variable_may_shadow_outer_variable() {
    assert_clean("let i = 10\nfor i = 1 to i { print i }");
}

#[test]
fn test_function_scope_discipline() {
    let errors = analyze_str("func f(a: integer) { let b = a return b }\nprint a\nprint b");
    assert_eq!(
        errors,
        vec!["Use of undeclared variable: a", "Use of undeclared variable: b"]
    );
}

#[test]
fn test_block_locals_do_not_leak() {
    let errors = analyze_str("if true { let t = 1 }\nprint t\nwhile false { let w = 1 }\nprint w");
    assert_eq!(
        errors,
        vec!["Use of undeclared variable: t", "Use of undeclared variable: w"]
    );
}

#[test]
fn test_builtins_accept_any_arity() {
    assert_clean("print MIN()\nprint MIN(1)\nprint MIN(1, 2, 3, 4)\nprint SQRT()\nprint SQRT(4, 9)");
}

#[test]
fn test_call_to_undefined_function() {
    let errors = analyze_str("print g(1)");
    assert_eq!(errors, vec!["Call to undefined function: g"]);
}

#[test]
fn test_call_arguments_are_checked() {
    let errors = analyze_str("print MIN(a, 1)");
    assert_eq!(errors, vec!["Use of undeclared variable: a"]);
}

#[test]
fn test_calling_a_variable() {
    let errors = analyze_str("let v = 1\nprint v(2)");
    assert_eq!(errors, vec!["Called name is not a function: v"]);
}

#[test]
fn test_user_function_arity() {
    let errors = analyze_str("func f(a: integer, b: integer) { return a + b }\nprint f(1)");
    assert_eq!(errors, vec!["Function f expects 2 argument(s) but got 1"]);
}

#[test]
fn test_nested_function_definition() {
    let errors = analyze_str("func outer() { func inner() { return 1 } return 2 }");
    assert_eq!(errors, vec!["Function definitions are only allowed at top level: inner"]);
}

#[test]
fn test_duplicate_parameter() {
    let errors = analyze_str("func f(a: integer, a: decimal) { return a }");
    assert_eq!(errors, vec!["Duplicate parameter name in function f: a"]);
}

#[test]
fn test_return_outside_function() {
    let errors = analyze_str("return 1");
    assert_eq!(errors, vec!["Return statement outside of function"]);
}

#[test]
fn test_return_inside_nested_block_of_function() {
    assert_clean("func f(n: integer) { if n > 0 { return n } return 0 }");
}

#[test]
fn test_forward_chain_counts_injected_argument() {
    assert_clean("func inc(n: integer) { return n + 1 }\nlet x = 1\nlet y = 0\nx => inc() => y");
}

#[test]
fn test_forward_chain_arity_mismatch() {
    let errors = analyze_str("func inc(n: integer) { return n + 1 }\nlet x = 1\nx => inc(2)");
    assert_eq!(errors, vec!["Function inc expects 1 argument(s) but got 2"]);
}

#[test]
fn test_forward_chain_into_undeclared_name() {
    let errors = analyze_str("let x = 1\nx => y");
    assert_eq!(errors, vec!["Assignment to undeclared variable: y"]);
}

#[test]
fn test_chain_target_shape() {
    let errors = analyze_str("let x = 1\nx => 5");
    assert_eq!(errors, vec!["Chain target must be a function call or a variable"]);
}

#[test]
fn test_forward_into_function_name_needs_parentheses() {
    let errors = analyze_str("func f(n: integer) { return n }\nlet x = 1\nx => f");
    assert_eq!(errors, vec!["Chain target must be a function call or a variable"]);
}

#[test]
fn test_bidirectional_requires_call_and_variable() {
    let errors = analyze_str(
        "func inc(n: integer) { return n + 1 }\nlet x = 1\nlet y = 0\nx <=> y\n5 <=> inc()\nx => inc() <=> inc()",
    );
    assert_eq!(
        errors,
        vec![
            "Bidirectional pipe target must be a function call",
            "Bidirectional pipe requires a variable on its left-hand side",
            "Bidirectional pipe requires a variable on its left-hand side",
        ]
    );
}

#[test]
fn test_bidirectional_after_forward_into_variable() {
    assert_clean("func inc(n: integer) { return n + 1 }\nlet x = 1\nlet y = 0\nx => y <=> inc()\nx <=> inc() <=> inc()");
}

#[test]
fn test_free_function_returns_symbols_at_global_scope() {
    let tokens = lexer::lex("let x = 1 func f(a: integer) { return a }").unwrap();
    let program = parser::parse(&tokens).unwrap();
    let symbols = analyze(&program).expect("clean program");
    assert_eq!(symbols.depth(), 0);
    assert!(symbols.resolve("x").is_some());
    assert_eq!(symbols.function("f").and_then(|f| f.arity()), Some(1));
    assert!(symbols.resolve("a").is_none());
}

#[test]
fn test_free_function_returns_errors() {
    let tokens = lexer::lex("print nope").unwrap();
    let program = parser::parse(&tokens).unwrap();
    let errors = analyze(&program).unwrap_err();
    assert_eq!(errors.len(), 1);
}
