/// Expression parsing (precedence climbing).
///
/// Precedence, loosest first: chain pipes (`=>`, `<=>`), `OR`, `AND`, comparisons, `+ -`, `* / %`, unary minus,
/// primaries. Every binary level is left-associative.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.chain()
    }

    /// `or_expr ((=> | <=>) or_expr)*`
    fn chain(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let head = self.or_expr()?;
        let mut links = Vec::new();

        loop {
            let op = if self.match_op(OperatorId::Pipe) {
                ChainOp::Forward
            } else if self.match_op(OperatorId::BiPipe) {
                ChainOp::Bidirectional
            } else {
                break;
            };
            let stage = self.or_expr()?;
            links.push(ChainLink { op, stage });
        }

        match links.last() {
            None => Ok(head),
            Some(last) => {
                let span = head.span.merge(last.stage.span);
                Ok(Spanned::new(
                    Expr::Chain(ChainExpr {
                        head: Box::new(head),
                        links,
                    }),
                    span,
                ))
            }
        }
    }

    fn or_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.and_expr()?;
        while self.match_op(OperatorId::Or) {
            let right = self.and_expr()?;
            left = binary(left, BinaryOp::Or, right);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.comparison()?;
        while self.match_op(OperatorId::And) {
            let right = self.comparison()?;
            left = binary(left, BinaryOp::And, right);
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.additive()?;
        loop {
            let op = match self.peek().kind.operator_id() {
                Some(OperatorId::EqEq) => BinaryOp::Eq,
                Some(OperatorId::NotEq) => BinaryOp::NotEq,
                Some(OperatorId::Lt) => BinaryOp::Lt,
                Some(OperatorId::LtEq) => BinaryOp::LtEq,
                Some(OperatorId::Gt) => BinaryOp::Gt,
                Some(OperatorId::GtEq) => BinaryOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.additive()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek().kind.operator_id() {
                Some(OperatorId::Plus) => BinaryOp::Add,
                Some(OperatorId::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.term()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek().kind.operator_id() {
                Some(OperatorId::Star) => BinaryOp::Mul,
                Some(OperatorId::Slash) => BinaryOp::Div,
                Some(OperatorId::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Unary minus.
    ///
    /// A minus directly before a number literal folds into a negative literal. Anything else becomes `0 - operand`.
    fn unary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        if !self.check_op(OperatorId::Minus) {
            return self.primary();
        }
        let minus_span = self.advance().span;

        let folded = match &self.peek().kind {
            TokenKind::Int(n) => Some(Literal::Int(-*n)),
            TokenKind::Decimal(text) => Some(Literal::Decimal(format!("-{text}"))),
            _ => None,
        };
        if let Some(lit) = folded {
            let end = self.advance().span.end;
            return Ok(Spanned::new(Expr::Literal(lit), Span::new(minus_span.start, end)));
        }

        let operand = self.unary()?;
        let zero = Spanned::new(Expr::Literal(Literal::Int(0)), minus_span);
        Ok(binary(zero, BinaryOp::Sub, operand))
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let span = self.current_span();

        let lit = match &self.peek().kind {
            TokenKind::Int(n) => Some(Literal::Int(*n)),
            TokenKind::Decimal(text) => Some(Literal::Decimal(text.clone())),
            TokenKind::Text(text) => Some(Literal::Text(text.clone())),
            TokenKind::Keyword(KeywordId::True) => Some(Literal::Bool(true)),
            TokenKind::Keyword(KeywordId::False) => Some(Literal::Bool(false)),
            _ => None,
        };
        if let Some(lit) = lit {
            self.advance();
            return Ok(Spanned::new(Expr::Literal(lit), span));
        }

        if self.match_punct(PunctuationId::LBracket) {
            let elements = self.comma_separated(PunctuationId::RBracket)?;
            self.expect_punct(PunctuationId::RBracket, "Expected ']' after list elements")?;
            return Ok(Spanned::new(
                Expr::Literal(Literal::List(elements)),
                Span::new(span.start, self.previous_end()),
            ));
        }

        if self.match_punct(PunctuationId::LParen) {
            let inner = self.expression()?;
            self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
            return Ok(Spanned::new(
                Expr::Paren(Box::new(inner)),
                Span::new(span.start, self.previous_end()),
            ));
        }

        if let TokenKind::Ident(_) = self.peek().kind {
            let (name, _) = self.expect_ident("Expected identifier")?;
            if self.match_punct(PunctuationId::LParen) {
                let args = self.comma_separated(PunctuationId::RParen)?;
                self.expect_punct(PunctuationId::RParen, "Expected ')' after arguments")?;
                return Ok(Spanned::new(
                    Expr::Call(CallExpr { name, args }),
                    Span::new(span.start, self.previous_end()),
                ));
            }
            return Ok(Spanned::new(Expr::Ident(name), span));
        }

        Err(self.error_here("Expected expression"))
    }

    /// Parse `expr (, expr)*` up to (not including) `close`. Allows an empty list.
    fn comma_separated(&mut self, close: PunctuationId) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut items = Vec::new();
        if self.check_punct(close) {
            return Ok(items);
        }
        loop {
            items.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(items)
    }
}

fn binary(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Spanned<Expr> {
    let span = left.span.merge(right.span);
    Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span)
}
