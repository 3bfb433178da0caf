//! Expression parsing via precedence climbing, lowest precedence
//! first: ternary, `or`, `and`, comparison, additive, multiplicative,
//! unary, then primary postfix chaining over an atom.

use crate::ast::Expr;
use crate::Parser;
use chocopy_lex::{LiteralValue, TokenKind};
use chocopy_util::{ParseError, Symbol};

impl<'a> Parser<'a> {
    /// `expr := or_expr [ if or_expr else expr ]`. The ternary's `else`
    /// arm recurses into `expr` itself, making it right-associative:
    /// `a if b else c if d else e` groups as
    /// `a if b else (c if d else e)`.
    pub(crate) fn expr(&mut self) -> Result<Expr, ParseError> {
        let then_branch = self.or_expr()?;
        if self.check(TokenKind::If) {
            let position = self.consume()?.position;
            let condition = self.or_expr()?;
            self.expect(TokenKind::Else)?;
            let else_branch = self.expr()?;
            Ok(Expr::IfExpr {
                then_branch: Box::new(then_branch),
                condition: Box::new(condition),
                else_branch: Box::new(else_branch),
                position,
            })
        } else {
            Ok(then_branch)
        }
    }

    fn or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.and_expr()?;
        while self.check(TokenKind::Or) {
            let op = self.consume()?;
            let right = self.and_expr()?;
            left = Expr::Binary {
                left: Box::new(left),
                op: op.lexeme,
                right: Box::new(right),
                position: op.position,
            };
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.comparison()?;
        while self.check(TokenKind::And) {
            let op = self.consume()?;
            let right = self.comparison()?;
            left = Expr::Binary {
                left: Box::new(left),
                op: op.lexeme,
                right: Box::new(right),
                position: op.position,
            };
        }
        Ok(left)
    }

    /// ChocoPy's grammar allows chained comparisons (`a < b < c`)
    /// syntactically; whether that is meaningful is a semantic-analysis
    /// concern this crate does not adjudicate.
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.arithmetic()?;
        while matches!(
            self.peek().kind,
            TokenKind::DoubleEqual
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
                | TokenKind::Is
        ) {
            let op = self.consume()?;
            let right = self.arithmetic()?;
            left = Expr::Binary {
                left: Box::new(left),
                op: op.lexeme,
                right: Box::new(right),
                position: op.position,
            };
        }
        Ok(left)
    }

    fn arithmetic(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;
        while matches!(self.peek().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.consume()?;
            let right = self.term()?;
            left = Expr::Binary {
                left: Box::new(left),
                op: op.lexeme,
                right: Box::new(right),
                position: op.position,
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        while matches!(
            self.peek().kind,
            TokenKind::Multiply | TokenKind::DoubleSlash | TokenKind::Percent
        ) {
            let op = self.consume()?;
            let right = self.unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                op: op.lexeme,
                right: Box::new(right),
                position: op.position,
            };
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.peek().kind, TokenKind::Minus | TokenKind::Not) {
            let op = self.consume()?;
            let operand = self.unary()?;
            Ok(Expr::Unary {
                op: op.lexeme,
                operand: Box::new(operand),
                position: op.position,
            })
        } else {
            self.primary()
        }
    }

    /// `primary := atom ( . Id | [ expr ] | ( arglist? ) )*`, chaining
    /// without limit.
    fn primary(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.atom()?;
        loop {
            match self.peek().kind {
                TokenKind::Dot => {
                    let dot = self.consume()?;
                    let member = self.expect(TokenKind::Id)?;
                    expr = Expr::Member {
                        object: Box::new(expr),
                        member: Symbol::intern(&member.lexeme),
                        position: dot.position,
                    };
                }
                TokenKind::BracketLeft => {
                    let bracket = self.consume()?;
                    let index = self.expr()?;
                    self.expect(TokenKind::BracketRight)?;
                    expr = Expr::Index {
                        list: Box::new(expr),
                        index: Box::new(index),
                        position: bracket.position,
                    };
                }
                TokenKind::ParenLeft => {
                    let paren = self.consume()?;
                    let args = self.arglist(TokenKind::ParenRight)?;
                    self.expect(TokenKind::ParenRight)?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                        position: paren.position,
                    };
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    /// A comma-separated expression list, empty if `closing` is seen
    /// immediately. Used for both call arguments and list literals.
    fn arglist(&mut self, closing: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.check(closing) {
            return Ok(args);
        }
        args.push(self.expr()?);
        while self.check(TokenKind::Comma) {
            self.consume()?;
            args.push(self.expr()?);
        }
        Ok(args)
    }

    /// `atom := literal | Id | ( expr ) | [ expr (, expr)* ]`.
    fn atom(&mut self) -> Result<Expr, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::None => {
                self.consume()?;
                Ok(Expr::NoneLit { position: tok.position })
            }
            TokenKind::True => {
                self.consume()?;
                Ok(Expr::BoolLit { value: true, position: tok.position })
            }
            TokenKind::False => {
                self.consume()?;
                Ok(Expr::BoolLit { value: false, position: tok.position })
            }
            TokenKind::Integer => {
                self.consume()?;
                let value = match tok.literal {
                    Some(LiteralValue::Integer(v)) => v,
                    _ => unreachable!("Integer token always carries an Integer literal"),
                };
                Ok(Expr::IntLit { value, position: tok.position })
            }
            TokenKind::String => {
                self.consume()?;
                let value = match tok.literal {
                    Some(LiteralValue::Str(s)) => s,
                    _ => unreachable!("String token always carries a Str literal"),
                };
                Ok(Expr::StrLit { value, position: tok.position })
            }
            TokenKind::Id => {
                self.consume()?;
                Ok(Expr::Variable {
                    name: Symbol::intern(&tok.lexeme),
                    position: tok.position,
                })
            }
            TokenKind::ParenLeft => {
                self.consume()?;
                let inner = self.expr()?;
                self.expect(TokenKind::ParenRight)?;
                Ok(inner)
            }
            TokenKind::BracketLeft => {
                self.consume()?;
                let elements = self.arglist(TokenKind::BracketRight)?;
                self.expect(TokenKind::BracketRight)?;
                Ok(Expr::ListLiteral { elements, position: tok.position })
            }
            _ => Err(self.unexpected(&tok)),
        }
    }

    /// The restricted literal production used by a variable definition's
    /// right-hand side: `None | True | False | Integer | String | Id`.
    /// A bare identifier becomes `IdString` rather than `Variable` —
    /// semantic analysis decides later whether that is acceptable.
    pub(crate) fn literal_for_var_def(&mut self) -> Result<Expr, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::None => {
                self.consume()?;
                Ok(Expr::NoneLit { position: tok.position })
            }
            TokenKind::True => {
                self.consume()?;
                Ok(Expr::BoolLit { value: true, position: tok.position })
            }
            TokenKind::False => {
                self.consume()?;
                Ok(Expr::BoolLit { value: false, position: tok.position })
            }
            TokenKind::Integer => {
                self.consume()?;
                let value = match tok.literal {
                    Some(LiteralValue::Integer(v)) => v,
                    _ => unreachable!("Integer token always carries an Integer literal"),
                };
                Ok(Expr::IntLit { value, position: tok.position })
            }
            TokenKind::String => {
                self.consume()?;
                let value = match tok.literal {
                    Some(LiteralValue::Str(s)) => s,
                    _ => unreachable!("String token always carries a Str literal"),
                };
                Ok(Expr::StrLit { value, position: tok.position })
            }
            TokenKind::Id => {
                self.consume()?;
                Ok(Expr::IdString {
                    name: Symbol::intern(&tok.lexeme),
                    position: tok.position,
                })
            }
            _ => Err(self.unexpected(&tok)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn parse_expr(source: &str) -> Expr {
        let mut parser = Parser::new(source).unwrap();
        parser.expr().unwrap()
    }

    #[test]
    fn s4_precedence_of_plus_and_star() {
        let e = parse_expr("1 + 2 * 3");
        match e {
            Expr::Binary { op, left, right, .. } => {
                assert_eq!(op, "+");
                assert!(matches!(*left, Expr::IntLit { value: 1, .. }));
                match *right {
                    Expr::Binary { op, left, right, .. } => {
                        assert_eq!(op, "*");
                        assert!(matches!(*left, Expr::IntLit { value: 2, .. }));
                        assert!(matches!(*right, Expr::IntLit { value: 3, .. }));
                    }
                    _ => panic!("expected nested Binary"),
                }
            }
            _ => panic!("expected Binary"),
        }
    }

    #[test]
    fn s5_ternary_with_logicals() {
        let e = parse_expr("a or b if c and d else e");
        match e {
            Expr::IfExpr { then_branch, condition, else_branch, .. } => {
                assert!(matches!(*then_branch, Expr::Binary { .. }));
                assert!(matches!(*condition, Expr::Binary { .. }));
                assert!(matches!(*else_branch, Expr::Variable { .. }));
            }
            _ => panic!("expected IfExpr"),
        }
    }

    #[test]
    fn ternary_else_arm_is_right_associative() {
        let e = parse_expr("a if b else c if d else e");
        match e {
            Expr::IfExpr { else_branch, .. } => {
                assert!(matches!(*else_branch, Expr::IfExpr { .. }));
            }
            _ => panic!("expected outer IfExpr"),
        }
    }

    #[test]
    fn unary_minus_and_not() {
        assert!(matches!(parse_expr("-x"), Expr::Unary { .. }));
        assert!(matches!(parse_expr("not x"), Expr::Unary { .. }));
    }

    #[test]
    fn grouping_parens_do_not_wrap_a_node() {
        assert!(matches!(parse_expr("(1)"), Expr::IntLit { value: 1, .. }));
    }

    #[test]
    fn postfix_chain_member_index_call() {
        let e = parse_expr("a.b[0](1, 2)");
        match e {
            Expr::Call { callee, args, .. } => {
                assert_eq!(args.len(), 2);
                match *callee {
                    Expr::Index { list, .. } => {
                        assert!(matches!(*list, Expr::Member { .. }));
                    }
                    _ => panic!("expected Index"),
                }
            }
            _ => panic!("expected Call"),
        }
    }

    #[test]
    fn list_literal_with_elements_and_empty() {
        assert!(matches!(parse_expr("[1, 2, 3]"), Expr::ListLiteral { .. }));
        match parse_expr("[]") {
            Expr::ListLiteral { elements, .. } => assert!(elements.is_empty()),
            _ => panic!("expected ListLiteral"),
        }
    }

    #[test]
    fn literal_for_var_def_turns_bare_id_into_idstring() {
        let mut parser = Parser::new("x").unwrap();
        let e = parser.literal_for_var_def().unwrap();
        assert!(matches!(e, Expr::IdString { .. }));
    }

    #[test]
    fn literal_for_var_def_rejects_general_expressions() {
        let mut parser = Parser::new("1 + 2").unwrap();
        assert!(parser.literal_for_var_def().is_ok());
        // only the leading `1` is consumed; `+ 2` is left for the caller,
        // matching the grammar's restriction to a single literal token.
        assert!(parser.check(TokenKind::Plus));
    }
}
