//! Priority-ordered extraction cascade. Each strategy is a pure function
//! from play text to an optional candidate; the cascade tries them in
//! order and the first hit wins. Most specific shapes sit on top, the
//! generic "by ..." catch-all at the bottom.

use tracing::trace;

use crate::extract::cleanup::{candidate_from_chunk, candidate_from_pair, NameCandidate};
use crate::extract::patterns::{
	ASSIST_BY, BY_FIRST_LAST, BY_TEAM_LAST_FIRST, FOUL_ON_LAST_FIRST, FOUL_ON_TEAM, GENERIC_BY, LEADING_ALLCAPS_TEAM, SAVE_BY, SAVE_BY_GOALIE, SUB_IN_OUT,
	TEAM_PREFIX_DOT,
};

type StrategyFn = fn(&str) -> Option<NameCandidate>;

struct Strategy {
	name: &'static str,
	run: StrategyFn,
}

/// The cascade, in contract order. Reordering entries changes which
/// template wins on ambiguous text.
const STRATEGIES: &[Strategy] = &[
	Strategy {
		name: "foul_on_last_first",
		run: foul_on_last_first,
	},
	Strategy {
		name: "save_by_goalie",
		run: save_by_goalie,
	},
	Strategy { name: "assist_by", run: assist_by },
	Strategy { name: "save_by", run: save_by },
	Strategy { name: "sub_in_out", run: sub_in_out },
	Strategy {
		name: "by_team_last_first",
		run: by_team_last_first,
	},
	Strategy {
		name: "by_first_last",
		run: by_first_last,
	},
	Strategy { name: "generic_by", run: generic_by },
];

/// Pull a candidate player name out of play text. Both the text and the
/// team id must be present; the team id itself takes no part in matching,
/// but extraction without one is pointless because the candidate could
/// never be resolved.
pub fn extract_name(text: &str, team_id: &str) -> Option<NameCandidate> {
	if text.trim().is_empty() || team_id.trim().is_empty() {
		return None;
	}

	// Team-only fouls ("Foul on Springfield.") carry no player; bail
	// before any strategy can misparse the team name as a surname.
	if FOUL_ON_TEAM.is_match(text) {
		return None;
	}

	for strategy in STRATEGIES {
		if let Some(candidate) = (strategy.run)(text) {
			trace!(strategy = strategy.name, first = candidate.first(), last = candidate.last(), "extracted name candidate");
			return Some(candidate);
		}
	}

	None
}

/// 1. "Foul on Last, First." — comma-separated, surname first.
fn foul_on_last_first(text: &str) -> Option<NameCandidate> {
	let caps = FOUL_ON_LAST_FIRST.captures(text)?;
	candidate_from_pair(&caps[2], &caps[1])
}

/// 2. "Save (by goalie) Name" — remainder of the clause.
fn save_by_goalie(text: &str) -> Option<NameCandidate> {
	let caps = SAVE_BY_GOALIE.captures(text)?;
	candidate_from_chunk(&caps[1])
}

/// 3. "Assist by Name".
fn assist_by(text: &str) -> Option<NameCandidate> {
	let caps = ASSIST_BY.captures(text)?;
	candidate_from_chunk(&caps[1])
}

/// 4. "Save by First Last" — two tokens, no comma.
fn save_by(text: &str) -> Option<NameCandidate> {
	let caps = SAVE_BY.captures(text)?;
	candidate_from_pair(&caps[1], &caps[2])
}

/// 5. "Sub in/out First Last".
fn sub_in_out(text: &str) -> Option<NameCandidate> {
	let caps = SUB_IN_OUT.captures(text)?;
	candidate_from_pair(&caps[1], &caps[2])
}

/// 6. "by CODE Last, First" — all-caps team code, surname first.
fn by_team_last_first(text: &str) -> Option<NameCandidate> {
	let caps = BY_TEAM_LAST_FIRST.captures(text)?;
	candidate_from_chunk(&format!("{} {}", &caps[2], &caps[1]))
}

/// 7. "by First Last" — plain two-token name. When the chunk after "by"
/// opens with a team label the tokens would be the label itself, so the
/// shape is left to the later strategies.
fn by_first_last(text: &str) -> Option<NameCandidate> {
	let caps = BY_FIRST_LAST.captures(text)?;
	let chunk = GENERIC_BY.captures(text)?;
	let chunk = &chunk[1];
	if TEAM_PREFIX_DOT.is_match(chunk) {
		return None;
	}
	if LEADING_ALLCAPS_TEAM.captures(chunk).is_some_and(|code| code[2].trim().split_whitespace().count() >= 2) {
		return None;
	}
	candidate_from_pair(&caps[1], &caps[2])
}

/// 8. Generic "by ..." — everything after the keyword, full cleanup.
fn generic_by(text: &str) -> Option<NameCandidate> {
	let caps = GENERIC_BY.captures(text)?;
	candidate_from_chunk(&caps[1])
}
