// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WKT bracket tokenizer using nom combinators
//!
//! Parses ISO 19162 bracketed text into a token tree. Brackets nest by
//! recursion, so an `ELLIPSOID[...]` buried inside `DATUM[...]` comes out
//! as a child node and never truncates at the first `]`.

use memchr::memchr;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    multi::separated_list0,
    sequence::{delimited, pair},
    IResult, Parser,
};
use terra_model::ParseError;

/// One argument inside a bracketed clause
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Nested clause (DATUM[...], AXIS[...])
    Node(Node<'a>),
    /// Quoted text ("WGS 84"), quotes stripped
    Quoted(&'a str),
    /// Bare word: numbers, directions, cs types, timestamps
    Atom(&'a str),
}

impl<'a> Token<'a> {
    /// The quoted text, if this is a quoted token
    pub fn as_quoted(&self) -> Option<&'a str> {
        match self {
            Token::Quoted(text) => Some(text),
            _ => None,
        }
    }

    /// The bare text, if this is an atom
    pub fn as_atom(&self) -> Option<&'a str> {
        match self {
            Token::Atom(text) => Some(text),
            _ => None,
        }
    }

    /// The nested clause, if this is a node
    pub fn as_node(&self) -> Option<&Node<'a>> {
        match self {
            Token::Node(node) => Some(node),
            _ => None,
        }
    }
}

/// A bracketed clause: `KEYWORD[arg,arg,...]`
#[derive(Clone, Debug, PartialEq)]
pub struct Node<'a> {
    pub keyword: &'a str,
    pub args: Vec<Token<'a>>,
}

impl<'a> Node<'a> {
    /// Quoted text at argument position `index`
    pub fn quoted_arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index)?.as_quoted()
    }

    /// Bare text at argument position `index`
    pub fn atom_arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index)?.as_atom()
    }

    /// First child clause with the given keyword
    pub fn child(&self, keyword: &str) -> Option<&Node<'a>> {
        self.children().find(|node| node.keyword == keyword)
    }

    /// All child clauses, in argument order
    pub fn children(&self) -> impl Iterator<Item = &Node<'a>> {
        self.args.iter().filter_map(Token::as_node)
    }
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse whitespace (indented WKT has newlines after commas)
fn ws(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

/// Parse a clause keyword (GEODCRS, DATUM, AXIS, ...)
fn keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_uppercase())(input)
}

/// Parse a quoted field ("text")
fn quoted(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('"')(input)?;
    match memchr(b'"', input.as_bytes()) {
        Some(end) => Ok((&input[end + 1..], Token::Quoted(&input[..end]))),
        None => Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeUntil,
        ))),
    }
}

/// Parse a bare word: numbers, directions, cs types, ISO timestamps
fn atom(input: &str) -> IResult<&str, Token> {
    let (input, text) = take_while1(|c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | ':' | '_')
    })(input)?;
    Ok((input, Token::Atom(text)))
}

/// Parse a bracketed clause
fn node(input: &str) -> IResult<&str, Node> {
    let (input, kw) = keyword(input)?;
    let (input, args) = delimited(
        pair(char('['), ws),
        separated_list0((ws, char(','), ws), token),
        pair(ws, char(']')),
    )
    .parse(input)?;
    Ok((input, Node { keyword: kw, args }))
}

/// Parse any argument token
///
/// A keyword not followed by `[` backtracks out of `node` and is taken as
/// an atom, so direction words like `north` and type names like
/// `Cartesian` pass through unharmed.
fn token(input: &str) -> IResult<&str, Token> {
    alt((quoted, map(node, Token::Node), atom)).parse(input)
}

// ============================================================================
// Entry Point
// ============================================================================

/// Tokenize a complete WKT string into its outer clause
///
/// The input must be exactly one `KEYWORD[...]` envelope, with optional
/// surrounding whitespace.
pub fn tokenize(input: &str) -> Result<Node<'_>, ParseError> {
    let text = input.trim();
    match node(text) {
        Ok((rest, root)) if rest.trim().is_empty() => Ok(root),
        Ok((rest, _)) => Err(ParseError::structure(format!(
            "trailing content after outer clause: {:?}",
            rest.trim()
        ))),
        Err(_) => Err(ParseError::structure(
            "input is not a KEYWORD[...] envelope",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted() {
        let (remaining, token) = quoted("\"WGS 84\"").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(token, Token::Quoted("WGS 84"));
    }

    #[test]
    fn test_unterminated_quote_fails() {
        assert!(quoted("\"WGS 84").is_err());
    }

    #[test]
    fn test_parse_atom() {
        let (remaining, token) = atom("298.257223563,").unwrap();
        assert_eq!(remaining, ",");
        assert_eq!(token, Token::Atom("298.257223563"));
    }

    #[test]
    fn test_atom_timestamp() {
        let (remaining, token) = atom("2001-08-07T00:00:00.0Z]").unwrap();
        assert_eq!(remaining, "]");
        assert_eq!(token, Token::Atom("2001-08-07T00:00:00.0Z"));
    }

    #[test]
    fn test_parse_node() {
        let (remaining, node) = node("LENGTHUNIT[\"metre\",1.0]").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(node.keyword, "LENGTHUNIT");
        assert_eq!(node.quoted_arg(0), Some("metre"));
        assert_eq!(node.atom_arg(1), Some("1.0"));
    }

    #[test]
    fn test_nested_brackets_do_not_truncate() {
        let root = tokenize(
            "DATUM[\"World Geodetic System 1984\",\
             ELLIPSOID[\"WGS 84\",6378137,298.257223563,LENGTHUNIT[\"metre\",1.0]]]",
        )
        .unwrap();
        let ellipsoid = root.child("ELLIPSOID").unwrap();
        assert_eq!(ellipsoid.atom_arg(2), Some("298.257223563"));
        let unit = ellipsoid.child("LENGTHUNIT").unwrap();
        assert_eq!(unit.quoted_arg(0), Some("metre"));
    }

    #[test]
    fn test_whitespace_between_args() {
        let root = tokenize("CS[ellipsoidal,\n      3]").unwrap();
        assert_eq!(root.atom_arg(0), Some("ellipsoidal"));
        assert_eq!(root.atom_arg(1), Some("3"));
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert!(matches!(
            tokenize("CS[temporal,1] CS[temporal,1]"),
            Err(ParseError::Structure { .. })
        ));
    }

    #[test]
    fn test_not_an_envelope() {
        assert!(tokenize("just some words").is_err());
        assert!(tokenize("").is_err());
    }

    #[test]
    fn test_children_in_order() {
        let root = tokenize("X[AXIS[\"a\",north],AXIS[\"b\",east],CS[temporal,1]]").unwrap();
        let keywords: Vec<&str> = root.children().map(|n| n.keyword).collect();
        assert_eq!(keywords, ["AXIS", "AXIS", "CS"]);
    }
}
