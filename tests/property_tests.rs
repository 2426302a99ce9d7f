//! Property-based tests for the FunLang compiler
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use funlang::backend::java::EmitConfig;
use funlang::frontend::lexer;
use funlang::pipeline;
use proptest::prelude::*;

// Strategy for generating identifiers that are neither keywords nor word operators
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("Not reserved", |s| {
        !matches!(
            s.as_str(),
            "let" | "var" | "print" | "if" | "elif" | "else" | "while" | "for" | "to" | "step" | "return"
                | "func" | "true" | "false" | "and" | "or"
        )
    })
}

// Strategy for small arithmetic expressions over one variable `v`
fn arith_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0i64..20).prop_map(|n| n.to_string()), Just("v".to_string())];
    leaf.prop_recursive(3, 8, 2, |inner| {
        (inner.clone(), prop_oneof![Just("+"), Just("-"), Just("*")], inner)
            .prop_map(|(l, op, r)| format!("({l} {op} {r})"))
    })
}

proptest! {
    /// Property: Identifiers remain single tokens through the lexer
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let source = format!("{ident} = 1");
        let tokens = lexer::lex(&source).expect("Lex failed");
        prop_assert!(
            matches!(&tokens[0].kind, lexer::TokenKind::Ident(name) if *name == ident),
            "first token was {:?}",
            tokens[0].kind
        );
    }

    /// Property: Declared-then-printed variables always compile, and the name reaches the Java output
    #[test]
    fn declared_variables_compile(ident in ident_strategy(), value in 0i64..10_000) {
        let source = format!("let {ident}: integer = {value}\nprint {ident}");
        let java = pipeline::compile_source(&source, &EmitConfig::default()).expect("compile failed");
        let decl = format!("int {ident} = {value};");
        prop_assert!(java.contains(&decl));
    }

    /// Property: Using a never-declared name is always rejected
    #[test]
    fn undeclared_names_are_rejected(ident in ident_strategy()) {
        let source = format!("print {ident}");
        prop_assert!(pipeline::compile_source(&source, &EmitConfig::default()).is_err());
    }

    /// Property: The interpreter agrees with i64 arithmetic on small expressions
    #[test]
    fn interpreter_matches_reference_arithmetic(expr in arith_strategy(), v in -50i64..50) {
        let source = format!("let v = {v}\nprint {expr}");
        let mut out = Vec::new();
        pipeline::run_source(&source, &mut out).expect("run failed");

        let expected = reference_eval(&expr, v);
        prop_assert_eq!(String::from_utf8(out).unwrap(), format!("{expected}\n"));
    }

    /// Property: Emitted braces always balance
    #[test]
    fn emitted_braces_balance(depth in 0usize..6) {
        let mut source = String::from("var n = 0\n");
        for _ in 0..depth {
            source.push_str("if n < 10 {\n");
        }
        source.push_str("n = n + 1\n");
        for _ in 0..depth {
            source.push_str("}\n");
        }
        let java = pipeline::compile_source(&source, &EmitConfig::default()).expect("compile failed");
        let opens = java.matches('{').count();
        let closes = java.matches('}').count();
        prop_assert_eq!(opens, closes);
    }
}

/// Evaluate a fully parenthesized expression produced by `arith_strategy`.
fn reference_eval(expr: &str, v: i64) -> i64 {
    fn parse(chars: &[char], pos: &mut usize, v: i64) -> i64 {
        if chars[*pos] == '(' {
            *pos += 1;
            let left = parse(chars, pos, v);
            *pos += 1; // space
            let op = chars[*pos];
            *pos += 2; // op and space
            let right = parse(chars, pos, v);
            *pos += 1; // ')'
            match op {
                '+' => left + right,
                '-' => left - right,
                _ => left * right,
            }
        } else if chars[*pos] == 'v' {
            *pos += 1;
            v
        } else {
            let start = *pos;
            while *pos < chars.len() && chars[*pos].is_ascii_digit() {
                *pos += 1;
            }
            chars[start..*pos].iter().collect::<String>().parse().unwrap()
        }
    }
    let chars: Vec<char> = expr.chars().collect();
    parse(&chars, &mut 0, v)
}
