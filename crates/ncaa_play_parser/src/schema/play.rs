use crate::roster::PlayerId;
use crate::schema::EventType;
use serde::Serialize;

/// One play as handed to the parser: raw description text, an optional
/// clock string and the acting team's id. Borrowed, consumed once.
#[derive(Debug, Clone, Copy)]
pub struct PlayText<'a> {
	pub text: Option<&'a str>,
	pub clock: Option<&'a str>,
	pub team_id: Option<&'a str>,
}

/// Structured output record for one attributable play. Produced fresh per
/// input play; the caller owns persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayEvent {
	pub play_id: u64,
	pub game_id: String,
	pub player_id: Option<PlayerId>,
	pub time_of_play: Option<String>,
	pub event_type: EventType,
	pub description: String,
}
