//! Type-annotation parsing: `Type := Id | [ Type ]`.

use crate::ast::TypeAnnotation;
use crate::Parser;
use chocopy_lex::TokenKind;
use chocopy_util::{ParseError, Symbol};

impl<'a> Parser<'a> {
    /// Parses a single type annotation. List nesting is unbounded and
    /// strictly right-recursive: `[[int]]` parses as
    /// `ListType(ListType(ClassType(int)))`.
    pub(crate) fn type_annotation(&mut self) -> Result<TypeAnnotation, ParseError> {
        if self.check(TokenKind::BracketLeft) {
            let position = self.peek().position;
            self.consume()?;
            let element = self.type_annotation()?;
            self.expect(TokenKind::BracketRight)?;
            Ok(TypeAnnotation::ListType {
                element: Box::new(element),
                position,
            })
        } else if self.check(TokenKind::String) {
            // ChocoPy permits a quoted class name as a type annotation
            // (used for `self`'s own class, which cannot otherwise be
            // named before the class body finishes parsing).
            let tok = self.consume()?;
            let name = tok
                .literal
                .and_then(|lit| match lit {
                    chocopy_lex::LiteralValue::Str(s) => Some(s),
                    _ => None,
                })
                .unwrap_or_default();
            Ok(TypeAnnotation::ClassType {
                name: Symbol::intern(&name),
                position: tok.position,
            })
        } else {
            let tok = self.expect(TokenKind::Id)?;
            Ok(TypeAnnotation::ClassType {
                name: Symbol::intern(&tok.lexeme),
                position: tok.position,
            })
        }
    }
}
