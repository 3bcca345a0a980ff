//! Parser for canonical literal syntax
//!
//! Grammar (whitespace around tokens is ignored):
//!
//! ```text
//! literal  ::= ["¬" | "~"] term
//! term     ::= name | name "(" term ("," term)* ")"
//! name     ::= (alphanumeric | "_" | "?")+
//! ```
//!
//! A bare `name` is classified by
//! [`crate::logic::Variable::is_variable_token`]: the reserved letters and
//! `?`-prefixed names are variables, anything else is a constant. Terms are
//! built once here and never re-parsed.

use crate::error::{ParseError, Result};
use crate::logic::{Literal, Term, ASCII_NEGATION_MARKER, NEGATION_MARKER, VARIABLE_MARKER};
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, cut, opt},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use std::str::FromStr;

/// Parse a possibly negated literal such as `¬Leal(x, Cesar)`
pub fn parse_literal(input: &str) -> Result<Literal> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    run(literal, input)
}

/// Parse an unsigned term such as `f(x)` or `Marco`
pub fn parse_term(input: &str) -> Result<Term> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    run(term, input)
}

/// Run `parser` over the whole of `input`, turning a nom failure into a [`ParseError`]
fn run<'a, O>(parser: impl FnMut(&'a str) -> IResult<&'a str, O>, input: &'a str) -> Result<O> {
    match all_consuming(delimited(multispace0, parser, multispace0))(input) {
        Ok((_, output)) => Ok(output),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(classify(input, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(classify(input, "")),
    }
}

fn literal(input: &str) -> IResult<&str, Literal> {
    let (input, negation) = opt(terminated(negation_marker, multispace0))(input)?;
    let (input, term) = term(input)?;
    Ok((
        input,
        Literal {
            polarity: negation.is_none(),
            term,
        },
    ))
}

fn negation_marker(input: &str) -> IResult<&str, char> {
    alt((char(NEGATION_MARKER), char(ASCII_NEGATION_MARKER)))(input)
}

/// Parse a term; an argument list turns the name into a functor
fn term(input: &str) -> IResult<&str, Term> {
    let (input, name) = identifier(input)?;
    let (input, args) = opt(arguments)(input)?;

    let term = match args {
        Some(args) => Term::compound(name, args),
        None => Term::atom(name),
    };
    Ok((input, term))
}

/// `(term, term, ...)`; once the `(` is seen the list must be well formed
fn arguments(input: &str) -> IResult<&str, Vec<Term>> {
    preceded(
        pair(multispace0, char('(')),
        cut(terminated(
            separated_list1(
                tuple((multispace0, char(','), multispace0)),
                preceded(multispace0, term),
            ),
            pair(multispace0, char(')')),
        )),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char)(input)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == VARIABLE_MARKER
}

fn is_negation_marker(c: char) -> bool {
    c == NEGATION_MARKER || c == ASCII_NEGATION_MARKER
}

/// Map the position where parsing stopped to the matching error.
///
/// `rest` is the unparsed suffix of `input`.
fn classify(input: &str, rest: &str) -> ParseError {
    let consumed = &input[..input.len() - rest.len()];
    let before = consumed.trim_end();
    let open = consumed.matches('(').count() > consumed.matches(')').count();
    let owned = input.to_string();

    match rest.chars().next() {
        None if open => ParseError::UnbalancedParentheses { input: owned },
        None => ParseError::EmptyFunctor { input: owned },
        Some(c) if is_negation_marker(c) => ParseError::NestedNegation { input: owned },
        Some(')') if before.ends_with(|c: char| c == '(' || c == ',') => {
            ParseError::EmptyArgument { input: owned }
        }
        Some(')') => ParseError::UnbalancedParentheses { input: owned },
        Some(',') if open => ParseError::EmptyArgument { input: owned },
        Some('(')
            if before.is_empty()
                || before.ends_with(|c: char| c == '(' || c == ',' || is_negation_marker(c)) =>
        {
            ParseError::EmptyFunctor { input: owned }
        }
        Some('(') | Some(',') => ParseError::TrailingInput { input: owned },
        Some(c) if is_name_char(c) && !open && !before.ends_with(is_name_char) => {
            ParseError::TrailingInput { input: owned }
        }
        Some(_) => ParseError::InvalidName {
            name: offending_name(input, before, rest).to_string(),
            input: owned,
        },
    }
}

/// The malformed name around the stop position: the name chars just before
/// it plus the rest of the token after it
fn offending_name<'a>(input: &'a str, before: &str, rest: &str) -> &'a str {
    let start = before.trim_end_matches(is_name_char).len();
    let tail = rest
        .find(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .unwrap_or(rest.len());
    &input[start..input.len() - rest.len() + tail]
}

impl FromStr for Literal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_literal(s)
    }
}

impl FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_term(s)
    }
}

impl Literal {
    /// Parse a literal, additionally requiring it to be ground
    pub fn parse_ground(input: &str) -> Result<Literal> {
        let literal = parse_literal(input)?;
        if !literal.is_ground() {
            return Err(ParseError::NonGroundFact {
                input: input.to_string(),
            });
        }
        Ok(literal)
    }
}
