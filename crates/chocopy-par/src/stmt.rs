//! Statement and block parsing.

use crate::ast::Stmt;
use crate::Parser;
use chocopy_lex::TokenKind;
use chocopy_util::{ParseError, Symbol, SyntaxError, SyntaxErrorKind};

impl<'a> Parser<'a> {
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().kind {
            TokenKind::If => self.if_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::For => self.for_stmt(),
            _ => self.simple_stmt(),
        }
    }

    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let position = self.consume()?.position;
        let condition = self.expr()?;
        self.expect(TokenKind::Colon)?;
        let then_body = self.block()?;
        let else_body = self.else_clause()?;
        Ok(Stmt::If { condition, then_body, else_body, position })
    }

    /// `elif` is parsed as a nested `If` placed in the parent's else
    /// branch, so the tree stays acyclic without a separate `Elif` node.
    fn else_clause(&mut self) -> Result<Vec<Stmt>, ParseError> {
        if self.check(TokenKind::Elif) {
            let position = self.consume()?.position;
            let condition = self.expr()?;
            self.expect(TokenKind::Colon)?;
            let then_body = self.block()?;
            let else_body = self.else_clause()?;
            Ok(vec![Stmt::If { condition, then_body, else_body, position }])
        } else if self.check(TokenKind::Else) {
            self.consume()?;
            self.expect(TokenKind::Colon)?;
            self.block()
        } else {
            Ok(Vec::new())
        }
    }

    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let position = self.consume()?.position;
        let condition = self.expr()?;
        self.expect(TokenKind::Colon)?;
        let body = self.block()?;
        Ok(Stmt::While { condition, body, position })
    }

    fn for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let position = self.consume()?.position;
        let id = self.expect(TokenKind::Id)?;
        self.expect(TokenKind::In)?;
        let iterable = self.expr()?;
        self.expect(TokenKind::Colon)?;
        let body = self.block()?;
        Ok(Stmt::For {
            id: Symbol::intern(&id.lexeme),
            iterable,
            body,
            position,
        })
    }

    /// `pass | return expr? | expr ( = expr )?`, each terminated by a
    /// `Newline` or, at a block's tail, by `Eof`/`Dedent`.
    fn simple_stmt(&mut self) -> Result<Stmt, ParseError> {
        let stmt = match self.peek().kind {
            TokenKind::Pass => {
                let position = self.consume()?.position;
                Stmt::Pass { position }
            }
            TokenKind::Return => {
                let position = self.consume()?.position;
                let value = if self.ends_simple_stmt() {
                    None
                } else {
                    Some(self.expr()?)
                };
                Stmt::Return { value, position }
            }
            _ => {
                let position = self.peek().position;
                let target = self.expr()?;
                if self.check(TokenKind::Equal) {
                    self.consume()?;
                    if !target.is_assignable() {
                        return Err(ParseError::Syntax(SyntaxError::new(
                            target.position(),
                            SyntaxErrorKind::InvalidAssignTarget(target.kind_name().to_string()),
                        )));
                    }
                    let value = self.expr()?;
                    Stmt::AssignStmt { target, value, position }
                } else {
                    Stmt::ExprStmt { expr: target, position }
                }
            }
        };
        self.terminate_simple_stmt()?;
        Ok(stmt)
    }

    fn ends_simple_stmt(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Newline | TokenKind::Eof | TokenKind::Dedent
        )
    }

    fn terminate_simple_stmt(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Newline) {
            self.consume()?;
            Ok(())
        } else if matches!(self.peek().kind, TokenKind::Eof | TokenKind::Dedent) {
            Ok(())
        } else {
            let tok = self.peek().clone();
            Err(self.unexpected(&tok))
        }
    }

    /// `Newline Indent stmt+ Dedent`. Stray blank `Newline`s that
    /// survive layout (none are emitted by the current lexer inside an
    /// already-open block, but the grammar allows for it) are skipped.
    pub(crate) fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(TokenKind::Newline)?;
        let indent_position = self.expect(TokenKind::Indent)?.position;
        self.skip_newlines()?;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::Dedent) {
            stmts.push(self.statement()?);
            self.skip_newlines()?;
        }
        self.expect(TokenKind::Dedent)?;
        if stmts.is_empty() {
            return Err(ParseError::Syntax(SyntaxError::new(
                indent_position,
                SyntaxErrorKind::EmptyBlock,
            )));
        }
        Ok(stmts)
    }
}
