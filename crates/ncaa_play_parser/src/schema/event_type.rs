use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical event tags for a single play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
	Goal,
	Shot,
	Save,
	Foul,
	FoulWon,
	RedCard,
	YellowCard,
	Card,
	Substitution,
	Corner,
	FreeKick,
	ThrowIn,
	Offside,
	Kickoff,
	Other,
}

/// Tags excluded from final output by policy, not for lack of information.
pub const EXCLUDED_EVENTS: [EventType; 2] = [EventType::ThrowIn, EventType::Other];

/// Ordered keyword table driving classification. First match wins, so the
/// specific "cardred"/"cardyellow" tokens must sit above the bare "card"
/// fallback, and "goal" above everything it can appear inside of.
static KEYWORD_TABLE: Lazy<Vec<(Regex, EventType)>> = Lazy::new(|| {
	[
		(r"\bgoal\b", EventType::Goal),
		(r"\bshot\b", EventType::Shot),
		(r"\bsave\b", EventType::Save),
		(r"\bfoul\b", EventType::Foul),
		(r"\bfoulwon\b", EventType::FoulWon),
		(r"\bcardred\b", EventType::RedCard),
		(r"\bcardyellow\b", EventType::YellowCard),
		(r"\bsub\b", EventType::Substitution),
		(r"\bcorner\b", EventType::Corner),
		(r"\bfree\s*kick\b", EventType::FreeKick),
		(r"\bthrow\s*in\b|\bthrowin\b", EventType::ThrowIn),
		(r"\boffside\b", EventType::Offside),
		(r"\bcard\b", EventType::Card),
		(r"\bkickoff\b", EventType::Kickoff),
	]
	.into_iter()
	.map(|(pattern, event)| (Regex::new(pattern).unwrap(), event))
	.collect()
});

/// Map raw play text to an event tag. Total and pure: absent or empty
/// text classifies as `Other`, and identical text always yields the
/// identical tag.
pub fn classify(text: Option<&str>) -> EventType {
	let Some(text) = text else {
		return EventType::Other;
	};
	if text.trim().is_empty() {
		return EventType::Other;
	}

	let lowered = text.to_lowercase();
	KEYWORD_TABLE
		.iter()
		.find(|(pattern, _)| pattern.is_match(&lowered))
		.map_or(EventType::Other, |(_, event)| *event)
}

impl EventType {
	pub fn is_excluded(self) -> bool {
		EXCLUDED_EVENTS.contains(&self)
	}

	pub fn as_tag(self) -> &'static str {
		match self {
			EventType::Goal => "GOAL",
			EventType::Shot => "SHOT",
			EventType::Save => "SAVE",
			EventType::Foul => "FOUL",
			EventType::FoulWon => "FOUL_WON",
			EventType::RedCard => "RED_CARD",
			EventType::YellowCard => "YELLOW_CARD",
			EventType::Card => "CARD",
			EventType::Substitution => "SUBSTITUTION",
			EventType::Corner => "CORNER",
			EventType::FreeKick => "FREE_KICK",
			EventType::ThrowIn => "THROW_IN",
			EventType::Offside => "OFFSIDE",
			EventType::Kickoff => "KICKOFF",
			EventType::Other => "OTHER",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_tag())
	}
}
