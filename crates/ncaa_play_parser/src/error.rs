use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameClockError {
	#[error("Invalid minutes: {minutes}")]
	InvalidMinutes { minutes: u16 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Invalid clock format: {clock}")]
	InvalidFormat { clock: String },

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},
}

impl GameClockError {
	pub fn invalid_minutes_error(minutes: u16) -> Self {
		GameClockError::InvalidMinutes { minutes }
	}

	pub fn invalid_seconds_error(seconds: u8) -> Self {
		GameClockError::InvalidSeconds { seconds }
	}

	pub fn invalid_format_error(clock: &str) -> Self {
		GameClockError::InvalidFormat { clock: clock.to_string() }
	}
}

#[derive(Debug, Error)]
pub enum RosterError {
	#[error("CSV error in roster snapshot: {0}")]
	Csv(#[from] csv::Error),

	#[error("Roster snapshot is missing column: {column}")]
	MissingColumn { column: &'static str },

	#[error("Invalid player id {value:?}: {source}")]
	InvalidPlayerId { value: String, source: ParseIntError },
}

impl RosterError {
	pub fn missing_column_error(column: &'static str) -> Self {
		RosterError::MissingColumn { column }
	}

	pub fn invalid_player_id_error(value: &str, source: ParseIntError) -> Self {
		RosterError::InvalidPlayerId {
			value: value.to_string(),
			source,
		}
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum PlayByPlayError {
	#[error("Play-by-play document has no contest id")]
	MissingContestId,

	#[error("Play-by-play document for contest {contest_id} has no team list")]
	MissingTeams { contest_id: String },
}

impl PlayByPlayError {
	pub fn missing_teams_error(contest_id: &str) -> Self {
		PlayByPlayError::MissingTeams {
			contest_id: contest_id.to_string(),
		}
	}
}
