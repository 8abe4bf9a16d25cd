//! Compiled patterns for the name-extraction cascade. Kept in one place
//! so the priority contract in `cascade.rs` reads as a table.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single name token: Latin-1 letters plus the apostrophes and hyphens
/// that show up in NCAA rosters.
const NAME_TOKEN: &str = r"[A-Za-zÀ-ÿ'’\-]+";

/// "Foul on Last, First." — surname first, comma separated.
pub static FOUL_ON_LAST_FIRST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfoul on\s+([^,]+),\s*([^.]+)").unwrap());

/// "Foul on Springfield." — a team foul with no player attached. No comma
/// is allowed before the closing period; player fouls carry one.
pub static FOUL_ON_TEAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfoul on\s+([A-Za-z][^,.]*)\.\s*$").unwrap());

/// "Save (by goalie) First Last" — remainder of the clause up to the next
/// period.
pub static SAVE_BY_GOALIE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsave\s*\(by goalie\)\s*([^.]+)").unwrap());

/// "Assist by First Last".
pub static ASSIST_BY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bassist\s+by\s+([^.]+)").unwrap());

/// "Save by First Last" — two tokens, no comma.
pub static SAVE_BY: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?i)\bsave\s+by\s+({n})\s+({n})", n = NAME_TOKEN)).unwrap());

/// "Sub in First Last" / "Sub out First Last".
pub static SUB_IN_OUT: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?i)\bsub\s+(?:in|out)\s+({n})\s+({n})", n = NAME_TOKEN)).unwrap());

/// "by CODE Last, First" — 2-5 letter all-caps team code, then a
/// comma-separated surname-first name. The code class stays
/// case-sensitive on purpose.
pub static BY_TEAM_LAST_FIRST: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"\b[Bb]y\s+[A-Z]{{2,5}}\s+({n}),\s*({n})", n = NAME_TOKEN)).unwrap());

/// "by First Last" — plain two-token name.
pub static BY_FIRST_LAST: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"\b[Bb]y\s+({n})\s+({n})", n = NAME_TOKEN)).unwrap());

/// Generic "by ..." — everything after the keyword.
pub static GENERIC_BY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bby\s+(.+)").unwrap());

/// Embedded bracketed clock markers, e.g. "[44:29]".
pub static BRACKET_CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\s*\d{1,3}:\d{2}\s*\]").unwrap());

/// Leading dotted team label: 1-4 capitalized words ending in a period
/// followed by a space, e.g. "Worcester St. ".
pub static TEAM_PREFIX_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-Za-z&'’\-]+(?:\s+[A-Za-z&'’\-]+){0,3})\.\s+").unwrap());

/// Leading all-caps team code (2-5 letters) with a remainder.
pub static LEADING_ALLCAPS_TEAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-Z]{2,5})\s+(.+)$").unwrap());

/// Clause-break characters that end a name chunk.
pub static CLAUSE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,(.]").unwrap());

/// Internal whitespace runs.
pub static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
