//! Token and token-kind definitions, plus keyword recognition.

use chocopy_util::{Position, Symbol};
use std::fmt;

/// A single token produced by the [`Lexer`](crate::Lexer).
///
/// `lexeme` is the raw source text the token was scanned from (for a
/// string literal this includes the surrounding quotes); `literal`
/// carries the decoded payload for tokens that have one.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
    pub literal: Option<LiteralValue>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
            literal: None,
        }
    }

    pub fn with_literal(mut self, literal: LiteralValue) -> Self {
        self.literal = Some(literal);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.lexeme)
    }
}

/// The decoded payload of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Integer(i32),
    Bool(bool),
    Str(String),
    None,
}

/// The closed set of token categories the lexer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords used by the grammar.
    None,
    True,
    False,
    And,
    Not,
    Or,
    Is,
    If,
    Elif,
    Else,
    While,
    For,
    In,
    Pass,
    Return,
    Def,
    Class,
    Global,
    Nonlocal,

    // Reserved keywords: lexed so they cannot be used as identifiers,
    // but never produced by a grammar production.
    As,
    Assert,
    Async,
    Await,
    Del,
    Break,
    Continue,
    Except,
    Finally,
    From,
    Import,
    Lambda,
    Raise,
    Try,
    With,
    Yield,

    // Literals / identifiers.
    Id,
    Integer,
    String,

    // Operators / punctuation.
    Plus,
    Minus,
    Multiply,
    DoubleSlash,
    Percent,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    DoubleEqual,
    NotEqual,
    Equal,
    ParenLeft,
    ParenRight,
    BracketLeft,
    BracketRight,
    Comma,
    Colon,
    Dot,
    Arrow,

    // Layout.
    Newline,
    Indent,
    Dedent,
    Eof,
}

impl TokenKind {
    /// True for the keywords listed in §3 that are recognized only to
    /// be rejected in identifier/statement position; the grammar never
    /// produces a node for them.
    pub fn is_reserved_unused(self) -> bool {
        matches!(
            self,
            TokenKind::As
                | TokenKind::Assert
                | TokenKind::Async
                | TokenKind::Await
                | TokenKind::Del
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Except
                | TokenKind::Finally
                | TokenKind::From
                | TokenKind::Import
                | TokenKind::Lambda
                | TokenKind::Raise
                | TokenKind::Try
                | TokenKind::With
                | TokenKind::Yield
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Looks up `text` in the keyword table, returning the matching
/// `TokenKind` if `text` is exactly a reserved spelling. Matching is
/// case-sensitive: `True` is a keyword, `TRUE` and `true_` are not.
pub fn keyword_lookup(text: &str) -> Option<TokenKind> {
    Some(match text {
        "None" => TokenKind::None,
        "True" => TokenKind::True,
        "False" => TokenKind::False,
        "and" => TokenKind::And,
        "not" => TokenKind::Not,
        "or" => TokenKind::Or,
        "is" => TokenKind::Is,
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "pass" => TokenKind::Pass,
        "return" => TokenKind::Return,
        "def" => TokenKind::Def,
        "class" => TokenKind::Class,
        "global" => TokenKind::Global,
        "nonlocal" => TokenKind::Nonlocal,
        "as" => TokenKind::As,
        "assert" => TokenKind::Assert,
        "async" => TokenKind::Async,
        "await" => TokenKind::Await,
        "del" => TokenKind::Del,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "except" => TokenKind::Except,
        "finally" => TokenKind::Finally,
        "from" => TokenKind::From,
        "import" => TokenKind::Import,
        "lambda" => TokenKind::Lambda,
        "raise" => TokenKind::Raise,
        "try" => TokenKind::Try,
        "with" => TokenKind::With,
        "yield" => TokenKind::Yield,
        _ => return None,
    })
}

/// Builds an identifier/keyword token from its scanned text and
/// position. Keyword tokens get the literal payload their kind implies
/// (`True`/`False`/`None`); `Id` tokens carry none, just an interned
/// [`Symbol`] recoverable from `lexeme`.
pub fn identifier_or_keyword(text: &str, position: Position) -> Token {
    match keyword_lookup(text) {
        Some(TokenKind::True) => {
            Token::new(TokenKind::True, text, position).with_literal(LiteralValue::Bool(true))
        }
        Some(TokenKind::False) => {
            Token::new(TokenKind::False, text, position).with_literal(LiteralValue::Bool(false))
        }
        Some(kind @ TokenKind::None) => {
            Token::new(kind, text, position).with_literal(LiteralValue::None)
        }
        Some(kind) => Token::new(kind, text, position),
        None => {
            // Interning is for the AST's benefit (Symbol equality is
            // O(1) there); the token keeps the raw text as its lexeme.
            let _ = Symbol::intern(text);
            Token::new(TokenKind::Id, text, position)
        }
    }
}
