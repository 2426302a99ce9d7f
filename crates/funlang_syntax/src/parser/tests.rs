#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_str(source: &str) -> Program {
        let tokens = lex(source).expect("lex failed");
        parse(&tokens).expect("parse failed")
    }

    fn parse_err(source: &str) -> Vec<CompileError> {
        let tokens = lex(source).expect("lex failed");
        parse(&tokens).expect_err("expected parse errors")
    }

    fn single_expr(source: &str) -> Expr {
        let program = parse_str(&format!("print {source}"));
        match &program.statements[0].node {
            Statement::Print(e) => e.node.clone(),
            other => panic!("expected print, got {other:?}"),
        }
    }

    #[test]
    fn test_let_with_type_and_init() {
        let program = parse_str("let x: integer = 5");
        let Statement::Let(decl) = &program.statements[0].node else {
            panic!("expected let");
        };
        assert_eq!(decl.keyword, BindingKeyword::Let);
        assert_eq!(decl.name, "x");
        assert_eq!(decl.ty, Some(TypeName::Integer));
        assert!(matches!(
            decl.init.as_ref().map(|e| &e.node),
            Some(Expr::Literal(Literal::Int(5)))
        ));
    }

    #[test]
    fn test_var_without_type_or_init() {
        let program = parse_str("var total");
        let Statement::Let(decl) = &program.statements[0].node else {
            panic!("expected let");
        };
        assert_eq!(decl.keyword, BindingKeyword::Var);
        assert!(decl.ty.is_none());
        assert!(decl.init.is_none());
    }

    #[test]
    fn test_list_type_with_element() {
        let program = parse_str("let xs: list<decimal> = [1, 2.5]");
        let Statement::Let(decl) = &program.statements[0].node else {
            panic!("expected let");
        };
        assert_eq!(decl.ty, Some(TypeName::List(Some(Box::new(TypeName::Decimal)))));
        let Some(Expr::Literal(Literal::List(items))) = decl.init.as_ref().map(|e| &e.node) else {
            panic!("expected list literal");
        };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let errors = parse_err("let x: number = 1");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unknown type 'number'");
    }

    #[test]
    fn test_statements_without_separators() {
        let program = parse_str("let x = 5 print x x = x + 1; print x");
        assert_eq!(program.statements.len(), 4);
        assert!(matches!(program.statements[2].node, Statement::Assign(_)));
    }

    #[test]
    fn test_statement_spans_exclude_semicolon() {
        let program = parse_str("print 1;");
        assert_eq!(program.statements[0].span, Span::new(0, 7));
    }

    #[test]
    fn test_if_elif_else_if_else() {
        let program = parse_str("if a { print 1 } elif b { print 2 } else if c { print 3 } else { print 4 }");
        let Statement::If(stmt) = &program.statements[0].node else {
            panic!("expected if");
        };
        assert_eq!(stmt.branches.len(), 3);
        assert!(stmt.else_block.is_some());
        assert_eq!(stmt.blocks().count(), 4);
    }

    #[test]
    fn test_for_with_step() {
        let program = parse_str("for i = 0 to 10 step 2 { print i }");
        let Statement::For(stmt) = &program.statements[0].node else {
            panic!("expected for");
        };
        assert_eq!(stmt.var, "i");
        assert!(matches!(stmt.step.as_ref().map(|s| &s.node), Some(Expr::Literal(Literal::Int(2)))));
        assert_eq!(stmt.body.statements.len(), 1);
    }

    #[test]
    fn test_for_without_step() {
        let program = parse_str("for i = 1 to n { }");
        let Statement::For(stmt) = &program.statements[0].node else {
            panic!("expected for");
        };
        assert!(stmt.step.is_none());
        assert!(matches!(stmt.end.node, Expr::Ident(ref n) if n == "n"));
    }

    #[test]
    fn test_func_def_with_params() {
        let program = parse_str("func add(a: integer, b: decimal) { return a + b }");
        let Statement::Func(def) = &program.statements[0].node else {
            panic!("expected func");
        };
        assert_eq!(def.name, "add");
        let params: Vec<_> = def.params.iter().map(|p| (p.name.as_str(), p.ty.clone())).collect();
        assert_eq!(params, vec![("a", TypeName::Integer), ("b", TypeName::Decimal)]);
        assert!(matches!(def.body.statements[0].node, Statement::Return(_)));
    }

    #[test]
    fn test_untyped_param_is_an_error_with_hint() {
        let errors = parse_err("func f(a) { }");
        assert!(errors[0].message.starts_with("Expected ':' after parameter name"));
        assert_eq!(errors[0].hints.len(), 1);
    }

    #[test]
    fn test_bare_block_and_while() {
        let program = parse_str("{ let y = 1 } while x < 3 { x = x + 1 }");
        assert!(matches!(program.statements[0].node, Statement::Block(_)));
        assert!(matches!(program.statements[1].node, Statement::While(_)));
    }

    #[test]
    fn test_precedence_mul_over_add() {
        let Expr::Binary(left, op, right) = single_expr("1 + 2 * 3") else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Add);
        assert!(matches!(left.node, Expr::Literal(Literal::Int(1))));
        assert!(matches!(right.node, Expr::Binary(_, BinaryOp::Mul, _)));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let Expr::Binary(_, op, right) = single_expr("a OR b and c") else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Or);
        assert!(matches!(right.node, Expr::Binary(_, BinaryOp::And, _)));
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let Expr::Binary(left, BinaryOp::Sub, right) = single_expr("10 - 3 - 2") else {
            panic!("expected subtraction");
        };
        assert!(matches!(left.node, Expr::Binary(_, BinaryOp::Sub, _)));
        assert!(matches!(right.node, Expr::Literal(Literal::Int(2))));
    }

    #[test]
    fn test_negative_literals_fold() {
        assert_eq!(single_expr("-5"), Expr::Literal(Literal::Int(-5)));
        assert_eq!(single_expr("-2.5"), Expr::Literal(Literal::Decimal("-2.5".to_string())));
    }

    #[test]
    fn test_negated_identifier_becomes_zero_minus() {
        let Expr::Binary(left, BinaryOp::Sub, right) = single_expr("-x") else {
            panic!("expected subtraction");
        };
        assert_eq!(left.node, Expr::Literal(Literal::Int(0)));
        assert_eq!(right.node, Expr::Ident("x".to_string()));
    }

    #[test]
    fn test_parenthesized_expression_is_kept() {
        assert!(matches!(single_expr("(1 + 2)"), Expr::Paren(_)));
    }

    #[test]
    fn test_call_with_arguments() {
        let Expr::Call(call) = single_expr("MIN(a, 2)") else {
            panic!("expected call");
        };
        assert_eq!(call.name, "MIN");
        assert_eq!(call.args.len(), 2);
    }

    #[test]
    fn test_chain_structure() {
        let program = parse_str("x => double() <=> inc() => y");
        let Statement::Expr(expr) = &program.statements[0].node else {
            panic!("expected expression statement");
        };
        let Expr::Chain(chain) = &expr.node else {
            panic!("expected chain");
        };
        assert_eq!(chain.stage_count(), 4);
        let ops: Vec<_> = chain.links.iter().map(|l| l.op).collect();
        assert_eq!(ops, vec![ChainOp::Forward, ChainOp::Bidirectional, ChainOp::Forward]);
        assert!(matches!(chain.head.node, Expr::Ident(ref n) if n == "x"));
    }

    #[test]
    fn test_chain_binds_looser_than_arithmetic() {
        let Expr::Chain(chain) = single_expr("a + 1 => f()") else {
            panic!("expected chain");
        };
        assert!(matches!(chain.head.node, Expr::Binary(_, BinaryOp::Add, _)));
    }

    #[test]
    fn test_multiple_errors_are_collected() {
        let errors = parse_err("let = 1\nprint )\nlet ok = 2\nlet : integer");
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(errors[0].message.starts_with("Expected variable name"));
        assert!(errors[1].message.starts_with("Expected expression"));
    }

    #[test]
    fn test_errors_inside_block_keep_the_block() {
        let errors = parse_err("func f(a: integer) { let }\nprint )");
        assert_eq!(errors.len(), 2, "{errors:?}");
    }

    #[test]
    fn test_unclosed_block_reports_missing_brace() {
        let errors = parse_err("while x { print x");
        assert!(errors[0].message.starts_with("Expected '}' to close block"));
    }

    #[test]
    fn test_error_message_names_found_token() {
        let errors = parse_err("for i = 1 10 { }");
        assert_eq!(errors[0].message, "Expected 'to' in for loop, found integer 10");
    }

    #[test]
    fn test_empty_program() {
        assert!(parse_str("").statements.is_empty());
        assert!(parse_str(";;").statements.is_empty());
    }
}
