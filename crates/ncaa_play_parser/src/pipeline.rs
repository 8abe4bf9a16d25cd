//! Per-play orchestration: classify, apply the exclusion policy, extract
//! and resolve the player, normalize the clock, number the output.

use tracing::{debug, warn};

use crate::error::PlayByPlayError;
use crate::extract::{extract_name, NameCandidate};
use crate::roster::{PlayerId, Roster, RosterBuilder};
use crate::schema::{classify, GameClock, IdValue, PlayByPlayDoc, PlayEvent, PlayText};

enum RosterView<'a> {
	Snapshot(&'a Roster),
	Builder(&'a mut RosterBuilder),
}

/// Orchestrator for one run. Owns the run-scoped sequence counter and the
/// injected roster view; the components underneath are pure and carry no
/// sequencing state. One parser instance processes one batch of games to
/// completion.
pub struct PlayParser<'a> {
	roster: RosterView<'a>,
	next_play_id: u64,
}

/// Result of parsing a batch of documents: the events that survived the
/// exclusion policy, plus how many whole games were skipped for
/// structural reasons.
#[derive(Debug, Default)]
pub struct ParseOutcome {
	pub events: Vec<PlayEvent>,
	pub skipped_games: usize,
}

impl<'a> PlayParser<'a> {
	/// Parser over a read-only roster snapshot: unknown players stay
	/// unresolved.
	pub fn new(roster: &'a Roster) -> Self {
		PlayParser {
			roster: RosterView::Snapshot(roster),
			next_play_id: 1,
		}
	}

	/// Parser in roster-synthesis mode: unknown players are minted and
	/// registered on the builder.
	pub fn with_builder(builder: &'a mut RosterBuilder) -> Self {
		PlayParser {
			roster: RosterView::Builder(builder),
			next_play_id: 1,
		}
	}

	/// Continue numbering from an existing sequence instead of 1.
	pub fn starting_at(mut self, next_play_id: u64) -> Self {
		self.next_play_id = next_play_id;
		self
	}

	fn resolve(&mut self, candidate: &NameCandidate, team_id: &str) -> Option<PlayerId> {
		match &mut self.roster {
			RosterView::Snapshot(roster) => roster.resolve(candidate, team_id),
			RosterView::Builder(builder) => builder.resolve_or_mint(candidate, team_id),
		}
	}

	/// Process one play. Returns `None` when the play is dropped by the
	/// exclusion policy; an unresolvable player or clock is represented
	/// in the event, never an error.
	pub fn parse_play(&mut self, game_id: &str, play: &PlayText<'_>) -> Option<PlayEvent> {
		let event_type = classify(play.text);
		if event_type.is_excluded() {
			// Deliberate short-circuit: no extraction, no output record.
			return None;
		}
		let text = play.text?;

		let candidate = play.team_id.and_then(|team_id| extract_name(text, team_id));
		let player_id = match (&candidate, play.team_id) {
			(Some(candidate), Some(team_id)) => self.resolve(candidate, team_id),
			_ => None,
		};

		let time_of_play = play.clock.and_then(|clock| clock.parse::<GameClock>().ok()).map(|clock| clock.to_string());

		let play_id = self.next_play_id;
		self.next_play_id += 1;

		Some(PlayEvent {
			play_id,
			game_id: game_id.to_string(),
			player_id,
			time_of_play,
			event_type,
			description: text.to_string(),
		})
	}

	/// Process one decoded contest document. Structural problems fail
	/// this game only; sibling games are unaffected.
	pub fn parse_game(&mut self, doc: &PlayByPlayDoc) -> Result<Vec<PlayEvent>, PlayByPlayError> {
		let contest_id = doc
			.contest_id
			.as_ref()
			.map(IdValue::as_string)
			.filter(|id| !id.is_empty())
			.ok_or(PlayByPlayError::MissingContestId)?;
		if doc.teams.is_empty() {
			return Err(PlayByPlayError::missing_teams_error(&contest_id));
		}

		let known_teams = doc.known_team_ids();

		let mut events = Vec::new();
		for period in &doc.periods {
			for block in &period.playbyplay_stats {
				// A block attributed to a team outside the document's
				// team list keeps its plays, but no player can resolve.
				let team_id = block.team_id.as_ref().map(IdValue::as_string).filter(|id| known_teams.contains(id));

				for play in &block.plays {
					let play_text = PlayText {
						text: play.play_text.as_deref(),
						clock: play.clock.as_deref(),
						team_id: team_id.as_deref(),
					};
					if let Some(event) = self.parse_play(&contest_id, &play_text) {
						events.push(event);
					}
				}
			}
		}

		debug!(contest_id = %contest_id, events = events.len(), "parsed game");
		Ok(events)
	}

	/// Process a batch of documents, isolating each game's failure from
	/// its siblings.
	pub fn parse_games<'d, I>(&mut self, docs: I) -> ParseOutcome
	where
		I: IntoIterator<Item = &'d PlayByPlayDoc>,
	{
		let mut outcome = ParseOutcome::default();
		for doc in docs {
			match self.parse_game(doc) {
				Ok(events) => outcome.events.extend(events),
				Err(error) => {
					warn!(error = %error, "skipping game");
					outcome.skipped_games += 1;
				}
			}
		}
		outcome
	}
}
