use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::country::CountryTable;
use crate::model::{ParsedPrediction, ParsedSheet, SheetDate, SheetTime};

/// How far down the sheet an unlabeled name line is still believed.
const IMPLICIT_NAME_WINDOW: usize = 5;
/// Sentinel returned when no name can be extracted; the caller is expected
/// to ask a human for the real one.
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";

/// Glyphs OCR produces for a score box the participant left empty.
const SCORE_PLACEHOLDERS: &[char] = &['_', '-', 'x', 'X', '?', '.', '•'];

// "Name: John", "imię Jan", "Nazwisko: Kowalski" - label word, optional
// colon, rest of line. Both sheet locales are covered.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:name|imię|imie|nazwisko)\b\s*:?\s*(\S.*)").unwrap());

// "15.06", "15.06.", "15.06 niedziela" - a section header carrying the day
// for the match lines below it.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.?(?:\s+\p{L}+\.?)?$").unwrap());

// "12. 2:1", "3) 1-0", "7: 0:0", "5 2:1" - the numbered-sheet format.
static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3})[.):\s][.):\s]*(\d{1,2})\s*[:\-]\s*(\d{1,2})").unwrap());

// "A 15:00 Brazil 2:_ Germany" - optional group letter, optional kickoff
// time, home team, score pair (either side may be a placeholder), away team.
static FIXTURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:([A-Ha-h])\s+)?(?:(\d{1,2}):(\d{2})\s+)?(\p{L}[\p{L} .'\-]*?)\s+(\d{1,2}|[_xX?.•-])\s*:\s*(\d{1,2}|[_xX?.•-])\s+(\p{L}[\p{L} .'\-]*)$",
    )
    .unwrap()
});

// "Brazylia - Niemcy 2:1" - the separator the pool's own fixture lists use,
// handed back by OCR. The placeholder set drops '-' here to keep it apart
// from the team separator.
static DASH_FIXTURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\p{L}[\p{L} .']*?)\s*[-–—]\s*(\p{L}[\p{L} .']*?)\s+(\d{1,2}|[_xX?.•])\s*:\s*(\d{1,2}|[_xX?.•])$",
    )
    .unwrap()
});

/// The line formats the parser knows, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Numbered,
    Fixture,
    DashFixture,
}

/// Ordered attempt list; [`match_line`] stops at the first hit, so one line
/// never yields more than one prediction even when several alternatives
/// would match.
pub const PATTERN_ORDER: &[LinePattern] = &[
    LinePattern::Numbered,
    LinePattern::Fixture,
    LinePattern::DashFixture,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    Matched(ParsedPrediction),
    Unmatched,
}

impl LinePattern {
    pub fn apply(self, line: &str, table: &CountryTable) -> LineMatch {
        match self {
            LinePattern::Numbered => apply_numbered(line),
            LinePattern::Fixture => apply_fixture(line, table),
            LinePattern::DashFixture => apply_dash_fixture(line, table),
        }
    }
}

/// First pattern in [`PATTERN_ORDER`] that accepts the line.
pub fn match_line(line: &str, table: &CountryTable) -> LineMatch {
    for pattern in PATTERN_ORDER {
        if let LineMatch::Matched(prediction) = pattern.apply(line, table) {
            return LineMatch::Matched(prediction);
        }
    }
    LineMatch::Unmatched
}

/// Parse one OCR blob with the built-in country table.
pub fn parse_sheet(raw: &str) -> ParsedSheet {
    parse_sheet_with(CountryTable::builtin(), raw)
}

/// Best-effort parse: never fails, degrades to partial output plus the raw
/// text. Unmatched lines contribute nothing; matched lines are kept in
/// source order.
pub fn parse_sheet_with(table: &CountryTable, raw: &str) -> ParsedSheet {
    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let (participant_name, name_line) = extract_name(&lines);

    let mut predictions = Vec::new();
    let mut current_date: Option<SheetDate> = None;
    for (idx, line) in lines.iter().enumerate() {
        if Some(idx) == name_line {
            continue;
        }
        if let Some(date) = parse_date_line(line) {
            current_date = Some(date);
            continue;
        }
        if let LineMatch::Matched(mut prediction) = match_line(line, table) {
            if prediction.date.is_none() {
                prediction.date = current_date;
            }
            predictions.push(prediction);
        }
    }

    ParsedSheet {
        participant_name: participant_name
            .unwrap_or_else(|| UNKNOWN_PARTICIPANT.to_string()),
        raw_text: raw.to_string(),
        predictions,
    }
}

/// Explicit label anywhere wins; otherwise a digit-free, colon-free line
/// near the top is taken as the name. Returns the line index so the match
/// loop can skip it.
fn extract_name(lines: &[&str]) -> (Option<String>, Option<usize>) {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(cap) = NAME_RE.captures(line) {
            return (Some(cap[1].trim().to_string()), Some(idx));
        }
    }
    for (idx, line) in lines.iter().take(IMPLICIT_NAME_WINDOW).enumerate() {
        if !line.contains(':') && !line.chars().any(|c| c.is_ascii_digit()) {
            return (Some((*line).to_string()), Some(idx));
        }
    }
    (None, None)
}

fn parse_date_line(line: &str) -> Option<SheetDate> {
    let cap = DATE_RE.captures(line)?;
    let day: u8 = cap[1].parse().ok()?;
    let month: u8 = cap[2].parse().ok()?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    Some(SheetDate { day, month })
}

fn apply_numbered(line: &str) -> LineMatch {
    let Some(cap) = NUMBERED_RE.captures(line) else {
        return LineMatch::Unmatched;
    };
    let (Ok(match_number), Ok(home), Ok(away)) =
        (cap[1].parse::<u32>(), cap[2].parse::<u8>(), cap[3].parse::<u8>())
    else {
        return LineMatch::Unmatched;
    };
    LineMatch::Matched(ParsedPrediction {
        match_number: Some(match_number),
        home_score: Some(home),
        away_score: Some(away),
        ..ParsedPrediction::default()
    })
}

fn apply_fixture(line: &str, table: &CountryTable) -> LineMatch {
    let Some(cap) = FIXTURE_RE.captures(line) else {
        return LineMatch::Unmatched;
    };
    let group = cap
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase());
    let time = match (cap.get(2), cap.get(3)) {
        (Some(hour), Some(minute)) => parse_time(hour.as_str(), minute.as_str()),
        _ => None,
    };
    let (Some(home_team), Some(away_team)) =
        (resolve_team(table, &cap[4]), resolve_team(table, &cap[7]))
    else {
        return LineMatch::Unmatched;
    };
    LineMatch::Matched(ParsedPrediction {
        group,
        time,
        home_team: Some(home_team),
        away_team: Some(away_team),
        home_score: score_cell(&cap[5]),
        away_score: score_cell(&cap[6]),
        ..ParsedPrediction::default()
    })
}

fn apply_dash_fixture(line: &str, table: &CountryTable) -> LineMatch {
    let Some(cap) = DASH_FIXTURE_RE.captures(line) else {
        return LineMatch::Unmatched;
    };
    let (Some(home_team), Some(away_team)) =
        (resolve_team(table, &cap[1]), resolve_team(table, &cap[2]))
    else {
        return LineMatch::Unmatched;
    };
    LineMatch::Matched(ParsedPrediction {
        home_team: Some(home_team),
        away_team: Some(away_team),
        home_score: score_cell(&cap[3]),
        away_score: score_cell(&cap[4]),
        ..ParsedPrediction::default()
    })
}

/// A placeholder glyph is a box left blank: `None`, never zero.
fn score_cell(token: &str) -> Option<u8> {
    let mut chars = token.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        if SCORE_PLACEHOLDERS.contains(&only) {
            return None;
        }
    }
    token.parse::<u8>().ok()
}

fn parse_time(hour: &str, minute: &str) -> Option<SheetTime> {
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(SheetTime { hour, minute })
}

/// Canonical code when the table knows the token, otherwise the raw text -
/// an unknown team is a review item, not a dropped line.
fn resolve_team(table: &CountryTable, raw: &str) -> Option<String> {
    let raw = raw.trim().trim_matches(|c| c == ',' || c == ';' || c == '.');
    if raw.is_empty() {
        return None;
    }
    match table.resolve_code(raw) {
        Some(code) => Some(code.to_string()),
        None => {
            debug!(team = raw, "team name did not resolve, keeping raw text");
            Some(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_takes_precedence_over_fixture() {
        let table = CountryTable::builtin();
        // Matches the numbered pattern; the fixture pattern must not get a
        // second bite at the same line.
        let m = match_line("12. 2:1", table);
        let LineMatch::Matched(p) = m else {
            panic!("line should match");
        };
        assert_eq!(p.match_number, Some(12));
        assert_eq!(p.home_team, None);
    }

    #[test]
    fn fixture_line_parses_all_tokens() {
        let table = CountryTable::builtin();
        let LineMatch::Matched(p) = match_line("A 15:00 Brazil 2:_ Germany", table) else {
            panic!("line should match");
        };
        assert_eq!(p.group, Some('A'));
        assert_eq!(p.time, Some(SheetTime { hour: 15, minute: 0 }));
        assert_eq!(p.home_team.as_deref(), Some("BRA"));
        assert_eq!(p.away_team.as_deref(), Some("DEU"));
        assert_eq!(p.home_score, Some(2));
        assert_eq!(p.away_score, None);
    }

    #[test]
    fn dash_fixture_keeps_unresolved_names_raw() {
        let table = CountryTable::builtin();
        let LineMatch::Matched(p) = match_line("Brazylia - Wakanda 1:0", table) else {
            panic!("line should match");
        };
        assert_eq!(p.home_team.as_deref(), Some("BRA"));
        assert_eq!(p.away_team.as_deref(), Some("Wakanda"));
    }

    #[test]
    fn noise_lines_are_unmatched() {
        let table = CountryTable::builtin();
        assert_eq!(match_line("--- page 2 ---", table), LineMatch::Unmatched);
        assert_eq!(match_line("powodzenia!", table), LineMatch::Unmatched);
    }

    #[test]
    fn date_line_carries_day_and_month() {
        assert_eq!(
            parse_date_line("15.06 niedziela"),
            Some(SheetDate { day: 15, month: 6 })
        );
        assert_eq!(parse_date_line("15.13"), None);
        assert_eq!(parse_date_line("15.06 2:1"), None);
    }
}
