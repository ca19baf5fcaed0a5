// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag,
          character::complete::{hex_digit1, space0, space1},
          combinator::{eof, map_res, opt, rest, value, verify},
          multi::many1,
          sequence::preceded};

use super::ConformanceCase;
use crate::{CodePoint, GStringError, GStringResult, ok};

pub mod constants {
    pub const BREAK: &str = "÷";
    pub const NO_BREAK: &str = "×";
    pub const COMMENT: &str = "#";
}

/// Parse one line of `GraphemeBreakTest.txt`. Returns [`None`] for blank and comment
/// only lines.
///
/// # Errors
///
/// Returns [`GStringError::MalformedConformanceLine`] if the line is not in the
/// expected format.
pub fn parse_test_line(
    line_number: usize,
    line: &str,
) -> GStringResult<Option<ConformanceCase>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(constants::COMMENT) {
        return ok!(None);
    }

    match parse_case(line) {
        Ok((_, case)) => ok!(Some(case)),
        Err(_) => Err(GStringError::MalformedConformanceLine {
            line_number,
            line: line.to_string(),
        }
        .into()),
    }
}

/// Matches `÷ XXXX (÷|×) XXXX (÷|×) ... # comment`.
#[rustfmt::skip]
pub fn parse_case(input: &str) -> IResult<&str, ConformanceCase> {
    let (input, _) = (space0, tag(constants::BREAK)).parse(input)?;

    let (input, pairs) = many1(
        (
            /* code point */ preceded(space1, parse_code_point),
            /* marker after it */ preceded(space1, parse_marker),
        )
    ).parse(input)?;

    let (input, _discarded) = (
        space0,
        opt(preceded(tag(constants::COMMENT), rest)),
        eof,
    ).parse(input)?;

    let mut code_points = Vec::with_capacity(pairs.len());
    let mut expected_boundaries = vec![];
    for (index, (code_point, is_break)) in pairs.into_iter().enumerate() {
        code_points.push(code_point);
        if is_break {
            expected_boundaries.push(index + 1);
        }
    }

    // The line has to end in a boundary.
    if expected_boundaries.last() != Some(&code_points.len()) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok((input, ConformanceCase { code_points, expected_boundaries }))
}

/// Matches 4 to 6 hex digits, that are a valid code point.
#[rustfmt::skip]
fn parse_code_point(input: &str) -> IResult<&str, CodePoint> {
    map_res(
        verify(hex_digit1, |it: &str| (4..=6).contains(&it.len())),
        |it: &str| {
            u32::from_str_radix(it, 16)
                .ok()
                .filter(|&value| value <= CodePoint::MAX.as_u32())
                .map(CodePoint)
                .ok_or(it)
        },
    ).parse(input)
}

/// `÷` is `true` (break) and `×` is `false` (no break).
fn parse_marker(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, tag(constants::BREAK)),
        value(false, tag(constants::NO_BREAK)),
    ))
    .parse(input)
}
