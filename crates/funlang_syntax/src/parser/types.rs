/// Type annotation parsing.
///
/// Type names are ordinary identifiers resolved against the builtin type registry, so `integer` can still be used
/// as a variable name outside type positions.
impl<'a> Parser<'a> {
    /// Parse `integer | decimal | text | boolean | list ('<' type '>')?`.
    fn type_name(&mut self) -> Result<TypeName, CompileError> {
        let span = self.current_span();
        let (name, _) = self.expect_ident("Expected type name")?;
        let Some(id) = type_names::from_str(&name) else {
            return Err(CompileError::syntax(format!("Unknown type '{name}'"), span)
                .with_hint("Valid types are: integer, decimal, text, boolean, list"));
        };

        Ok(match id {
            TypeNameId::Integer => TypeName::Integer,
            TypeNameId::Decimal => TypeName::Decimal,
            TypeNameId::Text => TypeName::Text,
            TypeNameId::Boolean => TypeName::Boolean,
            TypeNameId::List => {
                if self.match_op(OperatorId::Lt) {
                    let elem = self.type_name()?;
                    self.expect_op(OperatorId::Gt, "Expected '>' after list element type")?;
                    TypeName::List(Some(Box::new(elem)))
                } else {
                    TypeName::List(None)
                }
            }
        })
    }
}
