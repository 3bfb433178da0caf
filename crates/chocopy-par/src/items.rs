//! Top-level declaration parsing: classes, functions, global variables,
//! and the `program` entry point that orders them against top-level
//! statements.

use crate::ast::{
    ClassDef, Decl, FuncDef, GlobalDecl, NonlocalDecl, Program, TopLevelDecl, TypedVar, VarDef,
};
use crate::Parser;
use chocopy_lex::TokenKind;
use chocopy_util::{ParseError, Symbol, SyntaxError, SyntaxErrorKind};

impl<'a> Parser<'a> {
    /// `class Id ( Id ) : Newline Indent class_body Dedent`.
    fn class_def(&mut self) -> Result<ClassDef, ParseError> {
        let position = self.consume()?.position;
        let name = self.expect(TokenKind::Id)?;
        self.expect(TokenKind::ParenLeft)?;
        let super_class = self.expect(TokenKind::Id)?;
        self.expect(TokenKind::ParenRight)?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;
        self.skip_newlines()?;

        let (var_defs, methods) = if self.check(TokenKind::Pass) {
            self.consume()?;
            self.terminate_class_pass()?;
            (Vec::new(), Vec::new())
        } else {
            let mut var_defs = Vec::new();
            while self.check(TokenKind::Id) && self.check_next(TokenKind::Colon) {
                var_defs.push(self.var_def()?);
                self.skip_newlines()?;
            }
            let mut methods = Vec::new();
            while self.check(TokenKind::Def) {
                methods.push(self.func_def()?);
                self.skip_newlines()?;
            }
            (var_defs, methods)
        };

        self.expect(TokenKind::Dedent)?;
        Ok(ClassDef {
            name: Symbol::intern(&name.lexeme),
            super_class: Symbol::intern(&super_class.lexeme),
            var_defs,
            methods,
            position,
        })
    }

    fn terminate_class_pass(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Newline) {
            self.consume()?;
        }
        Ok(())
    }

    /// `def Id ( params? ) -> Type : Newline Indent func_body Dedent`.
    fn func_def(&mut self) -> Result<FuncDef, ParseError> {
        let position = self.consume()?.position;
        let name = self.expect(TokenKind::Id)?;
        self.expect(TokenKind::ParenLeft)?;
        let params = self.param_list()?;
        self.expect(TokenKind::ParenRight)?;
        self.expect(TokenKind::Arrow)?;
        let return_type = self.type_annotation()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Newline)?;
        let indent_position = self.expect(TokenKind::Indent)?.position;
        self.skip_newlines()?;

        let mut var_defs = Vec::new();
        let mut decls = Vec::new();
        loop {
            if self.check(TokenKind::Id) && self.check_next(TokenKind::Colon) {
                var_defs.push(self.var_def()?);
            } else if self.check(TokenKind::Global) {
                decls.push(self.global_decl()?);
            } else if self.check(TokenKind::Nonlocal) {
                decls.push(self.nonlocal_decl()?);
            } else {
                break;
            }
            self.skip_newlines()?;
        }

        let mut nested_funcs = Vec::new();
        while self.check(TokenKind::Def) {
            nested_funcs.push(self.func_def()?);
            self.skip_newlines()?;
        }

        let mut body = Vec::new();
        while !self.check(TokenKind::Dedent) {
            body.push(self.statement()?);
            self.skip_newlines()?;
        }
        self.expect(TokenKind::Dedent)?;

        if body.is_empty() {
            return Err(ParseError::Syntax(SyntaxError::new(
                indent_position,
                SyntaxErrorKind::EmptyBlock,
            )));
        }

        Ok(FuncDef {
            name: Symbol::intern(&name.lexeme),
            params,
            return_type,
            var_defs,
            nested_funcs,
            decls,
            body,
            position,
        })
    }

    fn param_list(&mut self) -> Result<Vec<TypedVar>, ParseError> {
        let mut params = Vec::new();
        if self.check(TokenKind::ParenRight) {
            return Ok(params);
        }
        params.push(self.typed_var()?);
        while self.check(TokenKind::Comma) {
            self.consume()?;
            params.push(self.typed_var()?);
        }
        Ok(params)
    }

    /// `TypedVar := Id : Type`.
    fn typed_var(&mut self) -> Result<TypedVar, ParseError> {
        let id = self.expect(TokenKind::Id)?;
        self.expect(TokenKind::Colon)?;
        let ty = self.type_annotation()?;
        Ok(TypedVar {
            name: Symbol::intern(&id.lexeme),
            ty,
            position: id.position,
        })
    }

    /// Consumes a required `Newline`, except at a terminal position where
    /// none follows: `Eof` (end of source) or `Dedent` (the definition
    /// was the last line of a block with no trailing newline — the lexer
    /// emits the block's `Dedent`s before ever reaching `Eof`, so `Dedent`
    /// is just as terminal as `Eof` here; see `stmt.rs`'s
    /// `ends_simple_stmt`/`terminate_simple_stmt` for the same check).
    fn terminate_with_optional_newline(&mut self) -> Result<(), ParseError> {
        if matches!(self.peek().kind, TokenKind::Eof | TokenKind::Dedent) {
            Ok(())
        } else {
            self.expect(TokenKind::Newline)?;
            Ok(())
        }
    }

    /// `TypedVar = Literal Newline?`.
    fn var_def(&mut self) -> Result<VarDef, ParseError> {
        let position = self.peek().position;
        let typed_var = self.typed_var()?;
        self.expect(TokenKind::Equal)?;
        let literal = self.literal_for_var_def()?;
        self.terminate_with_optional_newline()?;
        Ok(VarDef { typed_var, literal, position })
    }

    fn global_decl(&mut self) -> Result<Decl, ParseError> {
        let position = self.consume()?.position;
        let id = self.expect(TokenKind::Id)?;
        self.terminate_with_optional_newline()?;
        Ok(Decl::Global(GlobalDecl {
            name: Symbol::intern(&id.lexeme),
            position,
        }))
    }

    fn nonlocal_decl(&mut self) -> Result<Decl, ParseError> {
        let position = self.consume()?.position;
        let id = self.expect(TokenKind::Id)?;
        self.terminate_with_optional_newline()?;
        Ok(Decl::Nonlocal(NonlocalDecl {
            name: Symbol::intern(&id.lexeme),
            position,
        }))
    }

    /// Top-level entry point: class definitions, then variable
    /// definitions, then function definitions, then statements, each
    /// read to exhaustion before the next group begins.
    pub(crate) fn program(&mut self) -> Result<Program, ParseError> {
        let position = self.peek().position;
        let mut declarations = Vec::new();

        while self.check(TokenKind::Class) {
            declarations.push(TopLevelDecl::Class(self.class_def()?));
            self.skip_newlines()?;
        }
        while self.check(TokenKind::Id) && self.check_next(TokenKind::Colon) {
            declarations.push(TopLevelDecl::Var(self.var_def()?));
            self.skip_newlines()?;
        }
        while self.check(TokenKind::Def) {
            declarations.push(TopLevelDecl::Func(self.func_def()?));
            self.skip_newlines()?;
        }

        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            if self.check(TokenKind::Newline) {
                self.consume()?;
                continue;
            }
            statements.push(self.statement()?);
        }

        Ok(Program { declarations, statements, position })
    }
}
