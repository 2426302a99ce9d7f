/// Statement parsing.
///
/// This chunk contains the statement dispatcher plus one method per statement form. Blocks recover from errors
/// locally so a bad statement inside a function body does not hide errors further down.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span().start;

        let stmt = match &self.peek().kind {
            TokenKind::Keyword(KeywordId::Let) | TokenKind::Keyword(KeywordId::Var) => {
                Statement::Let(self.let_decl()?)
            }
            TokenKind::Keyword(KeywordId::Print) => {
                self.advance();
                Statement::Print(self.expression()?)
            }
            TokenKind::Keyword(KeywordId::If) => Statement::If(self.if_stmt()?),
            TokenKind::Keyword(KeywordId::While) => Statement::While(self.while_stmt()?),
            TokenKind::Keyword(KeywordId::For) => Statement::For(self.for_stmt()?),
            TokenKind::Keyword(KeywordId::Func) => Statement::Func(self.func_def()?),
            TokenKind::Keyword(KeywordId::Return) => {
                self.advance();
                Statement::Return(self.expression()?)
            }
            TokenKind::Punctuation(PunctuationId::LBrace) => Statement::Block(self.block()?),
            TokenKind::Ident(_) if self.peek_next().kind.is_operator(OperatorId::Eq) => {
                Statement::Assign(self.assignment()?)
            }
            _ if self.is_at_expr_start() => Statement::Expr(self.expression()?),
            _ => return Err(self.error_here("Expected statement")),
        };

        Ok(Spanned::new(stmt, Span::new(start, self.previous_end())))
    }

    /// `let|var name (: type)? (= expr)?`
    fn let_decl(&mut self) -> Result<LetDecl, CompileError> {
        let keyword = if self.match_keyword(KeywordId::Var) {
            BindingKeyword::Var
        } else {
            self.expect_keyword(KeywordId::Let, "Expected 'let' or 'var'")?;
            BindingKeyword::Let
        };

        let (name, name_span) = self.expect_ident("Expected variable name")?;

        let ty = if self.match_punct(PunctuationId::Colon) {
            Some(self.type_name()?)
        } else {
            None
        };

        let init = if self.match_op(OperatorId::Eq) {
            Some(self.expression()?)
        } else {
            None
        };

        Ok(LetDecl {
            keyword,
            name,
            name_span,
            ty,
            init,
        })
    }

    /// `name = expr`
    fn assignment(&mut self) -> Result<Assignment, CompileError> {
        let (name, name_span) = self.expect_ident("Expected variable name")?;
        self.expect_op(OperatorId::Eq, "Expected '='")?;
        let value = self.expression()?;
        Ok(Assignment { name, name_span, value })
    }

    /// `if c { } (elif c { } | else if c { })* (else { })?`
    fn if_stmt(&mut self) -> Result<IfStmt, CompileError> {
        self.expect_keyword(KeywordId::If, "Expected 'if'")?;
        let mut branches = vec![self.if_branch()?];
        let mut else_block = None;

        loop {
            if self.match_keyword(KeywordId::Elif) {
                branches.push(self.if_branch()?);
            } else if self.check_keyword(KeywordId::Else) {
                self.advance();
                if self.match_keyword(KeywordId::If) {
                    branches.push(self.if_branch()?);
                } else {
                    else_block = Some(self.block()?);
                    break;
                }
            } else {
                break;
            }
        }

        Ok(IfStmt { branches, else_block })
    }

    fn if_branch(&mut self) -> Result<IfBranch, CompileError> {
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(IfBranch { condition, body })
    }

    /// `while c { }`
    fn while_stmt(&mut self) -> Result<WhileStmt, CompileError> {
        self.expect_keyword(KeywordId::While, "Expected 'while'")?;
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(WhileStmt { condition, body })
    }

    /// `for i = start to end (step s)? { }`
    fn for_stmt(&mut self) -> Result<ForStmt, CompileError> {
        self.expect_keyword(KeywordId::For, "Expected 'for'")?;
        let (var, var_span) = self.expect_ident("Expected loop variable name")?;
        self.expect_op(OperatorId::Eq, "Expected '=' after loop variable")?;
        let start = self.expression()?;
        self.expect_keyword(KeywordId::To, "Expected 'to' in for loop")?;
        let end = self.expression()?;
        let step = if self.match_keyword(KeywordId::Step) {
            Some(self.expression()?)
        } else {
            None
        };
        let body = self.block()?;

        Ok(ForStmt {
            var,
            var_span,
            start,
            end,
            step,
            body,
        })
    }

    /// `func name(p: type, ...) { }`
    fn func_def(&mut self) -> Result<FuncDef, CompileError> {
        self.expect_keyword(KeywordId::Func, "Expected 'func'")?;
        let (name, name_span) = self.expect_ident("Expected function name")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                params.push(self.param()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;

        let body = self.block()?;
        Ok(FuncDef {
            name,
            name_span,
            params,
            body,
        })
    }

    fn param(&mut self) -> Result<Param, CompileError> {
        let (name, name_span) = self.expect_ident("Expected parameter name")?;
        self.expect_punct(PunctuationId::Colon, "Expected ':' after parameter name")
            .map_err(|e| e.with_hint("Function parameters need a type, e.g. `n: integer`"))?;
        let ty = self.type_name()?;
        Ok(Param {
            name,
            ty,
            span: Span::new(name_span.start, self.previous_end()),
        })
    }

    /// `{ statement* }`
    ///
    /// Errors inside the block are recorded and skipped; only a missing `{` fails the whole block.
    fn block(&mut self) -> Result<Block, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;

        let mut statements = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    if !self.check_punct(PunctuationId::RBrace) {
                        self.synchronize();
                    }
                }
            }
        }

        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close block")?;
        Ok(Block { statements })
    }
}
