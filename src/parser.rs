use chumsky::{prelude::*, Stream};

use crate::{
    lexer::{Token, TokenKind},
    node::Node,
};

pub type ParseError<'src> = Simple<TokenKind<'src>>;

/// Parses the token sequence of one descriptor line into a node.
///
/// The grammar is `name (':' (name (',' name)*)?)?`: a bare `name` and a
/// `name:` both describe a node with no outgoing edges.
pub fn parse<'src>(tokens: Vec<Token<'src>>) -> Result<Node, Vec<ParseError<'src>>> {
    let end = tokens.last().map(|token| token.span.end).unwrap_or(0);
    let stream = Stream::from_iter(
        end..end + 1,
        tokens.into_iter().map(|token| (token.kind, token.span)),
    );

    descriptor_parser().parse(stream)
}

fn descriptor_parser<'src>() -> impl Parser<TokenKind<'src>, Node, Error = ParseError<'src>> {
    let name = select! {
        TokenKind::Name(name) => name.to_string(),
    }
    .labelled("name");

    let neighbours = just(TokenKind::Colon)
        .ignore_then(name.clone().separated_by(just(TokenKind::Comma)))
        .or_not()
        .map(|neighbours| neighbours.unwrap_or_default());

    name.then(neighbours)
        .then_ignore(end())
        .map(|(name, neighbours)| Node::with_neighbours(name, neighbours))
        .labelled("node descriptor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn name_and_neighbours() {
        let output = parse(tokenize("a:b,c"));
        let expected = Ok(Node::with_neighbours("a", ["b", "c"]));
        assert_eq!(output, expected);
    }

    #[test]
    fn bare_name() {
        let output = parse(tokenize("a"));
        let expected = Ok(Node::new("a"));
        assert_eq!(output, expected);
    }

    #[test]
    fn trailing_colon() {
        let output = parse(tokenize("a:"));
        let expected = Ok(Node::new("a"));
        assert_eq!(output, expected);
    }

    #[test]
    fn duplicate_neighbours_are_kept() {
        let output = parse(tokenize("b:c,a,c"));
        let expected = Ok(Node::with_neighbours("b", ["c", "a", "c"]));
        assert_eq!(output, expected);
    }

    #[test]
    fn empty_line_is_rejected() {
        assert!(parse(tokenize("")).is_err());
    }

    #[test]
    fn missing_name_is_rejected() {
        assert!(parse(tokenize(":a")).is_err());
    }

    #[test]
    fn empty_neighbour_is_rejected() {
        assert!(parse(tokenize("a:b,,c")).is_err());
    }

    #[test]
    fn trailing_comma_is_rejected() {
        assert!(parse(tokenize("a:b,")).is_err());
    }
}
