use winnow::{
    ModalResult, Parser,
    ascii::digit1,
    combinator::{alt, opt, preceded},
    error::{ContextError, StrContext, StrContextValue},
    token::take_while,
};

use crate::{Grammar, RangeSpec, VersionError, VersionSpec};

type Input<'a> = &'a str;

type Res<T> = ModalResult<T, ContextError>;

/// Parses a whole string as `major(.minor(.patch)?)?(-qualifier)?`.
pub(crate) fn parse_version(input: &str) -> Result<VersionSpec, VersionError> {
    version
        .parse(input)
        .map_err(|err| VersionError::invalid_format(input, Grammar::Version, err.offset()))
}

/// Parses a whole string as a bracketed pair of versions, e.g. `[1.0, 2.0)`.
pub(crate) fn parse_range(input: &str) -> Result<RangeSpec, VersionError> {
    range
        .parse(input)
        .map_err(|err| VersionError::invalid_format(input, Grammar::Range, err.offset()))
}

/// Checks a standalone qualifier, as accepted after the `-` of a version.
pub(crate) fn parse_qualifier(input: &str) -> Result<&str, VersionError> {
    qualifier
        .parse(input)
        .map_err(|err| VersionError::invalid_format(input, Grammar::Qualifier, err.offset()))
}

pub(crate) fn is_qualifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Equivalent to the regex
/// `(\d+)(\.(\d+)(\.(\d+))?)?(-([a-zA-Z0-9_.\-]+))?`
fn version(i: &mut Input<'_>) -> Res<VersionSpec> {
    let major = number.context(label("major")).parse_next(i)?;
    let minor_patch = opt(preceded('.', (number, opt(preceded('.', number))))).parse_next(i)?;
    let qualifier = opt(preceded('-', qualifier)).parse_next(i)?;

    let (minor, patch) = match minor_patch {
        Some((minor, patch)) => (minor, patch.unwrap_or(0)),
        None => (0, 0),
    };

    Ok(VersionSpec::from_parts(
        major,
        minor,
        patch,
        qualifier.map(str::to_owned),
    ))
}

/// e.g.
/// [1.0, 2.0)
/// ( 1.2.3-RC1 ,2 ]
fn range(i: &mut Input<'_>) -> Res<RangeSpec> {
    let start_inclusive = alt(('['.value(true), '('.value(false)))
        .context(label("opening bracket"))
        .context(expected('['))
        .context(expected('('))
        .parse_next(i)?;
    let start = preceded(ws, version).parse_next(i)?;
    (ws, ',', ws).void().context(expected(',')).parse_next(i)?;
    let end = version.parse_next(i)?;
    let end_inclusive = preceded(ws, alt((']'.value(true), ')'.value(false))))
        .context(label("closing bracket"))
        .context(expected(']'))
        .context(expected(')'))
        .parse_next(i)?;

    Ok(RangeSpec::new(
        Some(start),
        start_inclusive,
        Some(end),
        end_inclusive,
    ))
}

/// Any Unicode whitespace, including form feeds and no-break spaces.
fn ws<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    take_while(0.., char::is_whitespace).parse_next(i)
}

fn number(i: &mut Input<'_>) -> Res<u64> {
    digit1
        .try_map(|digits: &str| digits.parse::<u64>())
        .parse_next(i)
}

fn qualifier<'i>(i: &mut Input<'i>) -> Res<&'i str> {
    take_while(1.., is_qualifier_char)
        .context(label("qualifier"))
        .parse_next(i)
}

fn label(name: &'static str) -> StrContext {
    StrContext::Label(name)
}

fn expected(c: char) -> StrContext {
    StrContext::Expected(StrContextValue::CharLiteral(c))
}
