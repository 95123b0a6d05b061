//! Parse option strings into typed placement options.
//!
//! Accepts the compact string forms hosts tend to carry around in
//! configuration: `"left top"`, `"push none"`, `"50%"`, `"padding"`.
//! Unknown words degrade to a sensible value and log a warning; only input
//! that cannot be split into words at all is an error.

use miette::SourceSpan;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::defaults;
use crate::edge::Edge;
use crate::errors::ParseError;
use crate::placement::{Align, AlignmentCode, Collision, CollisionPolicy, OffsetValue};
use crate::types::Axis;

#[derive(Parser)]
#[grammar = "options.pest"]
struct OptionsParser;

/// A word and where it sits in the input.
struct Word<'i> {
    text: &'i str,
    start: usize,
    end: usize,
}

impl<'i> From<Pair<'i, Rule>> for Word<'i> {
    fn from(pair: Pair<'i, Rule>) -> Self {
        let span = pair.as_span();
        Word { text: span.as_str(), start: span.start(), end: span.end() }
    }
}

fn pest_span(err: &pest::error::Error<Rule>) -> SourceSpan {
    match err.location {
        InputLocation::Pos(pos) => (pos, 0).into(),
        InputLocation::Span((start, end)) => (start, end - start).into(),
    }
}

/// Split `input` into at most two words.
fn words<'i>(what: &'static str, input: &'i str) -> Result<Vec<Word<'i>>, ParseError> {
    let pairs = OptionsParser::parse(Rule::words, input).map_err(|err| {
        ParseError::malformed(what, input, err.variant.message().into_owned(), pest_span(&err))
    })?;

    let words: Vec<Word<'i>> = pairs
        .flat_map(|pair| pair.into_inner())
        .filter(|pair| pair.as_rule() == Rule::word)
        .map(Word::from)
        .collect();

    if words.len() > 2 {
        let span = (words[2].start, input.trim_end().len() - words[2].start);
        return Err(ParseError::too_many(what, input, words.len(), span));
    }
    Ok(words)
}

fn first_letter(word: &Word<'_>) -> char {
    word.text.chars().next().unwrap_or(' ')
}

fn align_on(word: &Word<'_>, axis: Axis) -> Option<Align> {
    let align = Align::from_code(first_letter(word), axis);
    if align.is_none() {
        crate::log::warn!(word = word.text, ?axis, "unknown alignment word");
    }
    align
}

/// Parse `"<horizontal> <vertical>"`, e.g. `"left top"` or `"center bottom"`.
///
/// Only the first letter of each word counts. A single word sets its own
/// axis and centers the other: `"left"` is left/center, `"top"` is
/// center/top. An unknown word leaves its axis unrecognized, which
/// [`place`](crate::place) resolves by lining up the centers on that axis.
pub fn parse_alignment(input: &str) -> Result<AlignmentCode, ParseError> {
    let words = words("alignment", input)?;
    match words.as_slice() {
        [] => Err(ParseError::malformed("alignment", input, "expected one or two words", (0, input.len()))),
        [only] => {
            let code = first_letter(only);
            Ok(match (Align::from_code(code, Axis::Horizontal), Align::from_code(code, Axis::Vertical)) {
                (Some(x), Some(y)) => AlignmentCode::new(x, y),
                (Some(x), None) => AlignmentCode::new(x, Align::Center),
                (None, Some(y)) => AlignmentCode::new(Align::Center, y),
                (None, None) => {
                    crate::log::warn!(word = only.text, "unknown alignment word");
                    AlignmentCode::UNKNOWN
                }
            })
        }
        [x, y, ..] => Ok(AlignmentCode { x: align_on(x, Axis::Horizontal), y: align_on(y, Axis::Vertical) }),
    }
}

fn collision_or_none(word: &Word<'_>) -> Collision {
    word.text.parse().unwrap_or_else(|_| {
        crate::log::warn!(word = word.text, "unknown collision rule, using none");
        Collision::None
    })
}

/// Parse `"<rule>"` for all four sides or `"<horizontal> <vertical>"`.
pub fn parse_collision(input: &str) -> Result<CollisionPolicy, ParseError> {
    let words = words("collision", input)?;
    match words.as_slice() {
        [] => Err(ParseError::malformed("collision", input, "expected one or two words", (0, input.len()))),
        [only] => Ok(CollisionPolicy::uniform(collision_or_none(only))),
        [h, v, ..] => Ok(CollisionPolicy::axes(collision_or_none(h), collision_or_none(v))),
    }
}

/// Parse an edge name. Empty input or an unknown name gives the default edge.
pub fn parse_edge(input: &str) -> Result<Edge, ParseError> {
    let words = words("edge", input)?;
    match words.as_slice() {
        [] => Ok(defaults::EDGE),
        [only] => Ok(only.text.parse().unwrap_or_else(|_| {
            crate::log::warn!(word = only.text, "unknown edge, using default");
            defaults::EDGE
        })),
        [_, second, ..] => Err(ParseError::malformed(
            "edge",
            input,
            "expected a single edge name",
            (second.start, second.end - second.start),
        )),
    }
}

/// Parse an offset: a number, optionally followed by `%`.
///
/// Follows `parseFloat` rules: the leading number is used and the rest is
/// ignored, except that a `%` anywhere makes it a percentage. Input with no
/// leading number is zero pixels.
pub fn parse_offset(input: &str) -> OffsetValue {
    let pairs = match OptionsParser::parse(Rule::offset, input) {
        Ok(pairs) => pairs,
        Err(_) => return OffsetValue::default(),
    };

    let mut number = None;
    let mut percent = false;
    for pair in pairs.flat_map(|pair| pair.into_inner()) {
        match pair.as_rule() {
            Rule::number => number = pair.as_str().parse::<f64>().ok(),
            Rule::rest => percent = pair.as_str().contains('%'),
            _ => {}
        }
    }

    match number {
        Some(value) if percent => OffsetValue::Percent(value),
        Some(value) => OffsetValue::Px(value),
        None => {
            crate::log::warn!(input, "offset is not a number, using 0");
            OffsetValue::default()
        }
    }
}
