use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::trace;

use crate::lexer::{Token, tokenize};

/// Best-effort date/time extraction from free text.
pub trait FuzzyDateParser {
    fn parse_fuzzy(&self, text: &str) -> Option<NaiveDateTime>;

    /// Every reading of `text`, best first. Callers that reject a reading
    /// (out of range) fall through to the next one.
    fn parse_all(&self, text: &str) -> Vec<NaiveDateTime> {
        self.parse_fuzzy(text).into_iter().collect()
    }
}

/// Token-scanning parser for dates embedded in file names.
///
/// Non-date tokens are skipped. Patterns are tried from most to least
/// specific: compact digit runs and numeric triples, then month names.
/// A bare four digit year is only considered when nothing more specific
/// was found.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenDateParser;

impl FuzzyDateParser for TokenDateParser {
    fn parse_fuzzy(&self, text: &str) -> Option<NaiveDateTime> {
        self.parse_all(text).into_iter().next()
    }

    fn parse_all(&self, text: &str) -> Vec<NaiveDateTime> {
        let tokens = tokenize(text);

        let mut found: Vec<_> = (0..tokens.len())
            .filter_map(|i| parse_compact(&tokens, i).or_else(|| parse_numeric_triple(&tokens, i)))
            .collect();
        found.extend((0..tokens.len()).filter_map(|i| parse_month_name(&tokens, i)));
        if found.is_empty() {
            found.extend(tokens.iter().filter_map(parse_bare_year));
        }

        trace!("[parse_fuzzy] {:?} -> {:?}", text, found);
        found
    }
}

fn date(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// `HHMM` or `HHMMSS` packed into a single run of digits.
fn compact_time(digits: &str) -> Option<NaiveTime> {
    let field = |r: std::ops::Range<usize>| digits.get(r)?.parse::<u32>().ok();
    match digits.len() {
        4 => NaiveTime::from_hms_opt(field(0..2)?, field(2..4)?, 0),
        6 => NaiveTime::from_hms_opt(field(0..2)?, field(2..4)?, field(4..6)?),
        _ => None,
    }
}

/// `YYYYMMDD`, `YYYYMMDDHHMM` or `YYYYMMDDHHMMSS`, optionally followed by a
/// packed time token (`IMG_20200115_143022`).
fn parse_compact(tokens: &[Token<'_>], i: usize) -> Option<NaiveDateTime> {
    let tok = tokens.get(i)?;
    if !tok.is_number() || !matches!(tok.lexeme.len(), 8 | 12 | 14) {
        return None;
    }

    let digits = tok.lexeme;
    let field = |r: std::ops::Range<usize>| digits.get(r)?.parse::<u32>().ok();
    let day = date(field(0..4)?, field(4..6)?, field(6..8)?)?;

    let time = if digits.len() > 8 {
        compact_time(&digits[8..])
    } else {
        tokens
            .get(i + 1)
            .filter(|t| t.is_number())
            .and_then(|t| compact_time(t.lexeme))
    };

    Some(time.map_or_else(|| midnight(day), |t| day.and_time(t)))
}

/// Three consecutive numbers forming `YYYY MM DD` or `MM DD YYYY`
/// (`DD MM YYYY` when the first number cannot be a month). A time may
/// follow a year-first date.
fn parse_numeric_triple(tokens: &[Token<'_>], i: usize) -> Option<NaiveDateTime> {
    let window = tokens.get(i..i + 3)?;
    if !window.iter().all(Token::is_number) {
        return None;
    }

    let lens = [
        window[0].lexeme.len(),
        window[1].lexeme.len(),
        window[2].lexeme.len(),
    ];

    match lens {
        [4, 1..=2, 1..=2] => {
            let day = date(
                window[0].number(4)?,
                window[1].number(2)?,
                window[2].number(2)?,
            )?;
            let time = trailing_time(&tokens[i + 3..]);
            Some(time.map_or_else(|| midnight(day), |t| day.and_time(t)))
        }
        [1..=2, 1..=2, 4] => {
            let (a, b, year) = (
                window[0].number(2)?,
                window[1].number(2)?,
                window[2].number(4)?,
            );
            let (month, day) = if a > 12 { (b, a) } else { (a, b) };
            date(year, month, day).map(midnight)
        }
        _ => None,
    }
}

/// Time right after a date: either one packed token or `HH MM [SS]`,
/// optionally introduced by `T` (ISO 8601) or `at`.
fn trailing_time(rest: &[Token<'_>]) -> Option<NaiveTime> {
    let rest = match rest.first() {
        Some(t) if !t.is_number() && matches!(t.lexeme.to_ascii_lowercase().as_str(), "t" | "at") => {
            &rest[1..]
        }
        _ => rest,
    };

    let first = rest.first().filter(|t| t.is_number())?;
    if let Some(t) = compact_time(first.lexeme) {
        return Some(t);
    }

    let hour = first.number(2)?;
    let minute = rest.get(1)?.number(2)?;
    let second = rest.get(2).and_then(|t| t.number(2)).unwrap_or(0);

    NaiveTime::from_hms_opt(hour, minute, second)
        .or_else(|| NaiveTime::from_hms_opt(hour, minute, 0))
}

fn month_from_name(word: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    let w = word.to_lowercase();
    if w == "sept" {
        return Some(9);
    }
    if w.len() < 3 {
        return None;
    }

    MONTHS
        .iter()
        .position(|m| *m == w || (w.len() == 3 && m.starts_with(w.as_str())))
        .map(|idx| idx as u32 + 1)
}

/// A month name with a four digit year and an optional day within two
/// tokens on either side (`15 Jan 2020`, `January 15, 2020`, `2020 Mar`).
fn parse_month_name(tokens: &[Token<'_>], i: usize) -> Option<NaiveDateTime> {
    let tok = &tokens[i];
    if tok.is_number() {
        return None;
    }
    let month = month_from_name(tok.lexeme)?;

    let lo = i.saturating_sub(2);
    let hi = (i + 3).min(tokens.len());
    let neighbours: Vec<(usize, &Token<'_>)> = (lo..hi)
        .filter(|&j| j != i)
        .map(|j| (j, &tokens[j]))
        .collect();

    let year = neighbours
        .iter()
        .filter(|(_, t)| t.lexeme.len() == 4)
        .find_map(|(j, t)| t.number(4).map(|y| (*j, y)));
    let (year_idx, year) = year?;

    let day = neighbours
        .iter()
        .filter(|(j, _)| *j != year_idx)
        .find_map(|(_, t)| t.number(2).filter(|d| (1..=31).contains(d)))
        .unwrap_or(1);

    date(year, month, day).map(midnight)
}

fn parse_bare_year(tok: &Token<'_>) -> Option<NaiveDateTime> {
    if tok.lexeme.len() != 4 {
        return None;
    }
    let year = tok.number(4).filter(|y| *y >= 1000)?;
    date(year, 1, 1).map(midnight)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
