//! The lexer splits a single node descriptor line into a sequence of tokens.
//!
//! A descriptor has the shape `a:b,c`, so there are only three meaningful
//! token kinds: names, the colon separating the node name from its
//! neighbour list, and the commas separating the neighbours.

use logos::Logos;

/// Byte range of a token within the descriptor line.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind<'src> {
    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    // A node name.
    //
    // Names are taken verbatim: anything up to the next delimiter belongs
    // to the name, including whitespace. There is no escaping, so `:` and
    // `,` cannot appear in a name.
    #[regex(r"[^:,\r\n]+")]
    Name(&'src str),

    // Line breaks cannot appear inside a descriptor; they surface as an
    // invalid token and are rejected by the parser.
    #[regex(r"[\r\n]+")]
    Invalid(&'src str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    /// The position of the token in the descriptor line.
    pub span: Span,
}

/// Takes one descriptor line and splits it into a sequence of tokens.
pub fn tokenize(src: &str) -> Vec<Token> {
    TokenKind::lexer(src)
        .spanned()
        .map(|(result, span)| {
            let kind = result.unwrap_or(TokenKind::Invalid(&src[span.start..span.end]));
            Token { kind, span }
        })
        .collect()
}

impl std::fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Name(name) => write!(f, "name `{name}`"),
            TokenKind::Invalid(text) => write!(f, "invalid input `{}`", text.escape_debug()),
        }
    }
}
