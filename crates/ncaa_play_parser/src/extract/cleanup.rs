//! Cleanup pipeline applied to captured name chunks before they are
//! accepted as candidates: bracket-clock removal, clause truncation,
//! whitespace collapsing and the two team-prefix stripping heuristics.

use crate::extract::patterns::{BRACKET_CLOCK, CLAUSE_BREAK, LEADING_ALLCAPS_TEAM, TEAM_PREFIX_DOT, WHITESPACE_RUN};

/// A tentative (first, last) pair pulled out of play text. Casing is kept
/// as captured; `normalized()` yields the lowercased form used for roster
/// keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
	first: String,
	last: String,
}

impl NameCandidate {
	pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
		NameCandidate {
			first: first.into(),
			last: last.into(),
		}
	}

	/// Given name, as captured.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// Family name, as captured. May contain spaces ("de Brito").
	pub fn last(&self) -> &str {
		&self.last
	}

	/// Lowercased (first, last) pair for key construction.
	pub fn normalized(&self) -> (String, String) {
		(self.first.to_lowercase(), self.last.to_lowercase())
	}
}

/// Trim a captured chunk down to the name it starts with: drop embedded
/// "[mm:ss]" markers, cut at the first clause break (comma, open paren or
/// period) to lose trailing narrative, and collapse whitespace.
pub fn scrub_fragment(raw: &str) -> String {
	let no_clock = BRACKET_CLOCK.replace_all(raw, "");
	let head = match CLAUSE_BREAK.find(&no_clock) {
		Some(brk) => &no_clock[..brk.start()],
		None => no_clock.as_ref(),
	};
	WHITESPACE_RUN.replace_all(head.trim(), " ").into_owned()
}

/// Remove one leading dotted team label ("Worcester St. Olivia M" ->
/// "Olivia M"). Returns `None` when the chunk carries no such label.
pub fn strip_dotted_team_prefix(raw: &str) -> Option<String> {
	let matched = TEAM_PREFIX_DOT.find(raw)?;
	Some(raw[matched.end()..].to_string())
}

/// Remove a single leading all-caps team code ("MIT Natalie Barnouw" ->
/// "Natalie Barnouw"). The removal is rejected (returns `None`) when
/// fewer than two words would remain, so a real one-word fragment is
/// never eaten.
pub fn strip_allcaps_team_code(raw: &str) -> Option<String> {
	let caps = LEADING_ALLCAPS_TEAM.captures(raw.trim())?;
	let remainder = caps[2].trim().to_string();
	if remainder.split_whitespace().count() >= 2 {
		Some(remainder)
	} else {
		None
	}
}

/// Split a cleaned chunk into a candidate: first token is the given name,
/// the rest joined form the family name. Fewer than two tokens is a
/// rejection, not an error.
pub fn normalize_tokens(cleaned: &str) -> Option<NameCandidate> {
	let tokens: Vec<&str> = cleaned.split_whitespace().collect();
	if tokens.len() < 2 {
		return None;
	}
	Some(NameCandidate::new(tokens[0], tokens[1..].join(" ")))
}

/// Run a captured chunk through the team-prefix variants, most specific
/// strip first, and accept the first variant whose cleaned form
/// normalizes into a two-or-more token name. A chunk that opens with a
/// dotted team label never falls back to the label's own words.
pub fn candidate_from_chunk(chunk: &str) -> Option<NameCandidate> {
	if let Some(dotted) = strip_dotted_team_prefix(chunk) {
		// The label is demonstrably a team name; accept its remainder
		// (alone or with a team code also stripped) or nothing.
		return normalize_tokens(&scrub_fragment(&dotted))
			.or_else(|| strip_allcaps_team_code(&dotted).and_then(|both| normalize_tokens(&scrub_fragment(&both))));
	}

	if let Some(allcaps) = strip_allcaps_team_code(chunk) {
		if let Some(candidate) = normalize_tokens(&scrub_fragment(&allcaps)) {
			return Some(candidate);
		}
	}

	normalize_tokens(&scrub_fragment(chunk))
}

/// Plain cleanup for strategies whose captures are already bare token
/// pairs: no team-prefix variants, just scrub and normalize.
pub fn candidate_from_pair(first: &str, last: &str) -> Option<NameCandidate> {
	normalize_tokens(&scrub_fragment(&format!("{} {}", first, last)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scrub_fragment() {
		let test_cases = vec![
			("Olivia Magierowski, wide.", "Olivia Magierowski"),
			("Natalie  Barnouw [44:29]", "Natalie Barnouw"),
			("Abby Ngugi (own goal).", "Abby Ngugi"),
			("  Gabriela   de Brito  ", "Gabriela de Brito"),
		];

		for (input, expected) in test_cases {
			assert_eq!(scrub_fragment(input), expected, "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_strip_dotted_team_prefix() {
		assert_eq!(strip_dotted_team_prefix("Worcester St. Olivia Magierowski"), Some("Olivia Magierowski".to_string()));
		assert_eq!(strip_dotted_team_prefix("Westfield St. Morgan Berthiaume"), Some("Morgan Berthiaume".to_string()));
		assert_eq!(strip_dotted_team_prefix("Olivia Magierowski"), None);
		// Trailing period with nothing after it is sentence punctuation,
		// not a label.
		assert_eq!(strip_dotted_team_prefix("Olivia Magierowski."), None);
	}

	#[test]
	fn test_strip_allcaps_team_code() {
		assert_eq!(strip_allcaps_team_code("MIT Natalie Barnouw"), Some("Natalie Barnouw".to_string()));
		// One-word remainder: removal rejected.
		assert_eq!(strip_allcaps_team_code("MIT Barnouw"), None);
		assert_eq!(strip_allcaps_team_code("Natalie Barnouw"), None);
		// Six letters is a word, not a code.
		assert_eq!(strip_allcaps_team_code("GOALIE Natalie Barnouw"), None);
	}

	#[test]
	fn test_normalize_tokens() {
		let candidate = normalize_tokens("Gabriela de Brito").unwrap();
		assert_eq!(candidate.normalized(), ("gabriela".to_string(), "de brito".to_string()));
		assert_eq!(candidate.first(), "Gabriela");
		assert_eq!(candidate.last(), "de Brito");

		assert_eq!(normalize_tokens("Magierowski"), None);
		assert_eq!(normalize_tokens(""), None);
	}

	#[test]
	fn test_candidate_from_chunk_variants() {
		let dotted = candidate_from_chunk("Worcester St. Olivia Magierowski").unwrap();
		assert_eq!(dotted.normalized(), ("olivia".to_string(), "magierowski".to_string()));

		let allcaps = candidate_from_chunk("MIT Natalie Barnouw").unwrap();
		assert_eq!(allcaps.normalized(), ("natalie".to_string(), "barnouw".to_string()));

		let plain = candidate_from_chunk("Gabriela de Brito").unwrap();
		assert_eq!(plain.normalized(), ("gabriela".to_string(), "de brito".to_string()));

		// A dotted team label followed by a lone surname must not fall
		// back to the label's own words.
		assert_eq!(candidate_from_chunk("Worcester St. Magierowski"), None);
	}
}
