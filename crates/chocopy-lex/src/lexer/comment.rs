//! Intra-line whitespace and `#` comment skipping.
//!
//! Neither routine here ever consumes `\n`: the newline is always left
//! for [`layout`](super::layout) to handle, since it is the signal that
//! the logical line is complete.

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn skip_spaces_tabs_cr(&mut self) {
        loop {
            match self.cursor.current() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }
    }

    /// Consumes a `#` comment through to, but not including, the next
    /// `\n` (or end of input).
    pub(super) fn skip_line_comment(&mut self) {
        debug_assert_eq!(self.cursor.current(), '#');
        while !self.cursor.is_at_end() && self.cursor.current() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    #[test]
    fn comment_to_end_of_line_is_skipped() {
        let mut lexer = Lexer::new("pass # a trailing comment\npass");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pass);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pass);
    }

    #[test]
    fn comment_running_to_eof_is_skipped() {
        let mut lexer = Lexer::new("pass # comment with no trailing newline");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pass);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn tabs_and_carriage_returns_are_skipped_like_spaces() {
        let mut lexer = Lexer::new("pass\t\r pass");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pass);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pass);
    }
}
