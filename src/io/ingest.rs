//! Text ingest for the three raw request fields.
//!
//! This module turns user-typed text into typed values:
//!
//! - the coordinate list `"(x1,y1),(x2,y2),...,(xn,yn)"`
//! - the integer degree
//! - the query x-value
//!
//! Every failure collapses to `FitError::MalformedInput`; callers do not learn
//! which field failed. No fitting logic here.

use std::borrow::Cow;

use crate::domain::{CoordinateList, Point};
use crate::error::FitError;

/// Separator between consecutive pairs once the outer parentheses are trimmed.
const PAIR_SEPARATOR: &str = "),(";

/// Parse the coordinate list.
///
/// Steps:
/// 1. trim any run of `(`/`)` from both ends
/// 2. split on the literal `"),("`
/// 3. split each pair on `,` and require exactly two numeric tokens
///
/// Whitespace around a number is tolerated (`"(1, 2)"`), but a space between
/// pairs breaks the separator (`"(1,2), (3,4)"` is rejected).
pub fn parse_coordinates(data: &str) -> Result<CoordinateList, FitError> {
    let body = data.trim_matches(|c: char| c == '(' || c == ')');

    let points = body
        .split(PAIR_SEPARATOR)
        .map(parse_pair)
        .collect::<Result<Vec<_>, _>>()?;

    let list = CoordinateList::new(points).ok_or(FitError::MalformedInput)?;
    tracing::debug!(points = list.len(), "parsed coordinate list");
    Ok(list)
}

fn parse_pair(pair: &str) -> Result<Point, FitError> {
    let mut tokens = pair.split(',');
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(FitError::MalformedInput);
    };
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

/// Parse a floating-point token.
///
/// Accepts the usual decimal and exponent forms plus `inf`/`infinity`/`nan`
/// in any case, with optional sign and `_` digit separators.
pub fn parse_number(token: &str) -> Result<f64, FitError> {
    strip_digit_separators(token.trim())?
        .parse::<f64>()
        .map_err(|_| FitError::MalformedInput)
}

/// Parse the degree as an integer. Range checking happens later.
///
/// `"1.5"` and `"2.0"` are not integers and fail here; `"1_0"` is ten.
pub fn parse_degree(raw: &str) -> Result<i64, FitError> {
    strip_digit_separators(raw.trim())?
        .parse::<i64>()
        .map_err(|_| FitError::MalformedInput)
}

/// Remove `_` separators (`1_000`). Each one must sit between two ASCII digits.
fn strip_digit_separators(token: &str) -> Result<Cow<'_, str>, FitError> {
    if !token.contains('_') {
        return Ok(Cow::Borrowed(token));
    }

    let bytes = token.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let between_digits = matches!(
            (before, after),
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit()
        );
        if !between_digits {
            return Err(FitError::MalformedInput);
        }
    }
    Ok(Cow::Owned(token.replace('_', "")))
}

/// Parse the query x-value.
pub fn parse_query(raw: &str) -> Result<f64, FitError> {
    parse_number(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &CoordinateList) -> Vec<(f64, f64)> {
        list.points().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn parses_canonical_notation() {
        let list = parse_coordinates("(1,1.2),(2,2.8),(3,8.2)").unwrap();
        assert_eq!(pairs(&list), vec![(1.0, 1.2), (2.0, 2.8), (3.0, 8.2)]);
    }

    #[test]
    fn parses_single_pair_and_exponents() {
        let list = parse_coordinates("(-1.5e2,+3)").unwrap();
        assert_eq!(pairs(&list), vec![(-150.0, 3.0)]);
    }

    #[test]
    fn tolerates_missing_or_repeated_outer_parens() {
        assert_eq!(pairs(&parse_coordinates("1,2),(3,4").unwrap()), vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(pairs(&parse_coordinates("((1,2))").unwrap()), vec![(1.0, 2.0)]);
    }

    #[test]
    fn whitespace_around_numbers_is_accepted() {
        assert_eq!(pairs(&parse_coordinates("(1, 2),(3 ,4)").unwrap()), vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn rejects_malformed_lists() {
        for bad in [
            "not-a-tuple",
            "",
            "()",
            "(1,2,3)",
            "(1)",
            "(1,2), (3,4)",
            "(1,2);(3,4)",
            "(1,2),(3,4),",
            "(a,b)",
            " (1,2)",
        ] {
            assert_eq!(parse_coordinates(bad), Err(FitError::MalformedInput), "input {bad:?}");
        }
    }

    #[test]
    fn special_float_tokens_parse() {
        let list = parse_coordinates("(nan,1),(2,inf)").unwrap();
        assert!(list.points()[0].x.is_nan());
        assert!(list.points()[1].y.is_infinite());
    }

    #[test]
    fn degree_must_be_an_integer_token() {
        assert_eq!(parse_degree("2"), Ok(2));
        assert_eq!(parse_degree(" -5 "), Ok(-5));
        assert_eq!(parse_degree("+3"), Ok(3));
        assert_eq!(parse_degree("1.5"), Err(FitError::MalformedInput));
        assert_eq!(parse_degree("2.0"), Err(FitError::MalformedInput));
        assert_eq!(parse_degree("d"), Err(FitError::MalformedInput));
        assert_eq!(parse_degree(""), Err(FitError::MalformedInput));
    }

    #[test]
    fn query_parses_as_float() {
        assert_eq!(parse_query("4"), Ok(4.0));
        assert_eq!(parse_query(" 2.5\n"), Ok(2.5));
        assert_eq!(parse_query("four"), Err(FitError::MalformedInput));
    }

    #[test]
    fn underscores_between_digits_are_separators() {
        assert_eq!(parse_degree("1_0"), Ok(10));
        assert_eq!(parse_query("1_000.2_5"), Ok(1000.25));
        assert_eq!(parse_number("1e1_0"), Ok(1e10));
        assert_eq!(pairs(&parse_coordinates("(1_0,2)").unwrap()), vec![(10.0, 2.0)]);
        for bad in ["_1", "1_", "1__0", "1_.5", "-_1", "_"] {
            assert_eq!(parse_number(bad), Err(FitError::MalformedInput), "token {bad:?}");
        }
    }
}
