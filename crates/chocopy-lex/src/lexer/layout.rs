//! Indentation tracking: the heart of the lexer.
//!
//! Triggered whenever [`Lexer::next_token`](super::core::Lexer::next_token)
//! finds `\n` outside of a string. Emits one `Newline`, then skips any
//! run of blank or comment-only physical lines, then compares the
//! indentation of the resulting logical line against the stack and
//! enqueues `Indent`/`Dedent` tokens to match.

use super::core::Lexer;
use crate::token::{Token, TokenKind};
use chocopy_util::{LexicalError, LexicalErrorKind};

impl<'a> Lexer<'a> {
    pub(super) fn handle_newline(&mut self) -> Result<(), LexicalError> {
        let newline_pos = self.cursor.position();
        self.cursor.advance(); // consume the '\n' itself
        self.queue
            .push_back(Token::new(TokenKind::Newline, "\n", newline_pos));

        let indentation = self.skip_blank_and_comment_lines();

        let top = *self.indent_stack.last().expect("stack always has a bottom of 0");
        if indentation > top {
            self.indent_stack.push(indentation);
            self.queue
                .push_back(Token::new(TokenKind::Indent, "", self.cursor.position()));
        } else if indentation < top {
            while *self.indent_stack.last().unwrap() > indentation {
                self.indent_stack.pop();
                self.queue
                    .push_back(Token::new(TokenKind::Dedent, "", self.cursor.position()));
            }
            if *self.indent_stack.last().unwrap() != indentation {
                return Err(self.error(LexicalErrorKind::InconsistentIndentation));
            }
        }
        Ok(())
    }

    /// Skips forward through blank lines and comment-only lines,
    /// returning the indentation (count of leading whitespace
    /// characters) of the first genuine logical line found, or `0` if
    /// EOF is reached first.
    fn skip_blank_and_comment_lines(&mut self) -> u32 {
        loop {
            self.skip_spaces_tabs_cr();
            if self.cursor.is_at_end() {
                return 0;
            }
            match self.cursor.current() {
                '\n' => {
                    self.cursor.advance();
                    continue;
                }
                '#' => {
                    self.skip_line_comment();
                    continue;
                }
                _ => return self.cursor.position().column - 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn blank_lines_between_statements_are_invisible_to_layout() {
        use TokenKind::*;
        let got = kinds("pass\n\n\npass");
        assert_eq!(got, vec![Pass, Newline, Pass, Eof]);
    }

    #[test]
    fn comment_only_lines_are_invisible_to_layout() {
        use TokenKind::*;
        let got = kinds("pass\n# a comment\npass");
        assert_eq!(got, vec![Pass, Newline, Pass, Eof]);
    }

    #[test]
    fn indentation_resets_to_exact_stack_level_on_dedent() {
        use TokenKind::*;
        let got = kinds("if True:\n    pass\nif False:\n    pass\npass");
        assert_eq!(
            got,
            vec![
                If, True, Colon, Newline, Indent, Pass, Newline, Dedent, If, False, Colon,
                Newline, Indent, Pass, Newline, Dedent, Pass, Eof,
            ]
        );
    }

    #[test]
    fn trailing_dedents_emitted_at_eof_without_final_newline() {
        use TokenKind::*;
        let got = kinds("if True:\n    pass");
        assert_eq!(got, vec![If, True, Colon, Newline, Indent, Pass, Dedent, Eof]);
    }
}
