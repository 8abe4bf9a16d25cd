use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::RosterError;
use crate::extract::NameCandidate;

/// Stable numeric identifier for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Canonical lookup key: lowercased first/last name plus the team id,
/// kept string-typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterKey {
	pub first: String,
	pub last: String,
	pub team_id: String,
}

impl RosterKey {
	pub fn new(first: &str, last: &str, team_id: &str) -> Self {
		RosterKey {
			first: first.to_lowercase(),
			last: last.to_lowercase(),
			team_id: team_id.to_string(),
		}
	}

	pub fn from_candidate(candidate: &NameCandidate, team_id: &str) -> Self {
		RosterKey::new(candidate.first(), candidate.last(), team_id)
	}
}

/// Read-only roster snapshot: the known players of all teams for one run.
#[derive(Debug, Clone, Default)]
pub struct Roster {
	players: HashMap<RosterKey, PlayerId>,
}

impl Roster {
	pub fn new() -> Self {
		Roster::default()
	}

	pub fn insert(&mut self, key: RosterKey, id: PlayerId) {
		self.players.insert(key, id);
	}

	pub fn len(&self) -> usize {
		self.players.len()
	}

	pub fn is_empty(&self) -> bool {
		self.players.is_empty()
	}

	/// Exact lookup on the normalized key. No fuzzy matching happens
	/// here; all of it lives in the extraction cascade. Never errors.
	pub fn resolve(&self, candidate: &NameCandidate, team_id: &str) -> Option<PlayerId> {
		if team_id.trim().is_empty() {
			return None;
		}
		self.players.get(&RosterKey::from_candidate(candidate, team_id)).copied()
	}

	/// Load the roster snapshot the external roster manager persists:
	/// a CSV with `player_id`, `first_name`, `last_name` and
	/// `university_id` columns.
	pub fn from_csv_path(path: &Path) -> Result<Self, RosterError> {
		let mut reader = csv::Reader::from_path(path)?;
		let headers = reader.headers()?.clone();
		let column = |name: &'static str| headers.iter().position(|header| header == name).ok_or(RosterError::missing_column_error(name));

		let player_id_at = column("player_id")?;
		let first_at = column("first_name")?;
		let last_at = column("last_name")?;
		let university_at = column("university_id")?;

		let mut roster = Roster::new();
		for record in reader.records() {
			let record = record?;
			let raw_id = &record[player_id_at];
			let id = raw_id.trim().parse::<u32>().map_err(|source| RosterError::invalid_player_id_error(raw_id, source))?;
			roster.insert(RosterKey::new(&record[first_at], &record[last_at], &record[university_at]), PlayerId(id));
		}
		Ok(roster)
	}
}

/// Deterministically mint an identifier for a player missing from the
/// roster snapshot: SHA-256 over `"team:first:last"`, first eight hex
/// digits as a fixed-width integer.
///
/// This hashes the *as-captured* casing, not the lowercased lookup form.
/// The roster lookup path always compares the normalized key; this
/// function deliberately does not, so repeated extraction runs over the
/// same source text keep minting the same id alongside the
/// original-casing record. Keep both conventions or previously minted
/// identifiers stop matching.
pub fn synthesize_id(team_id: &str, first_raw: &str, last_raw: &str) -> PlayerId {
	let mut hasher = Sha256::new();
	hasher.update(team_id.as_bytes());
	hasher.update(b":");
	hasher.update(first_raw.as_bytes());
	hasher.update(b":");
	hasher.update(last_raw.as_bytes());
	let digest = hasher.finalize();
	PlayerId(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

/// A newly minted roster entry, to be merged back into the persisted
/// roster by the external roster manager. Carries the as-captured casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintedPlayer {
	pub player_id: PlayerId,
	pub first_name: String,
	pub last_name: String,
	pub university_id: String,
}

/// Roster wrapper for roster-construction passes: resolves against the
/// snapshot and mints identifiers for unknown players, registering them
/// locally so repeated sightings reuse the same id. Minted entries are
/// handed back to the caller; no shared table is ever mutated.
#[derive(Debug, Default)]
pub struct RosterBuilder {
	roster: Roster,
	minted: Vec<MintedPlayer>,
}

impl RosterBuilder {
	pub fn new(roster: Roster) -> Self {
		RosterBuilder { roster, minted: Vec::new() }
	}

	pub fn resolve_or_mint(&mut self, candidate: &NameCandidate, team_id: &str) -> Option<PlayerId> {
		if team_id.trim().is_empty() {
			return None;
		}
		if let Some(id) = self.roster.resolve(candidate, team_id) {
			return Some(id);
		}

		let id = synthesize_id(team_id, candidate.first(), candidate.last());
		self.roster.insert(RosterKey::from_candidate(candidate, team_id), id);
		self.minted.push(MintedPlayer {
			player_id: id,
			first_name: candidate.first().to_string(),
			last_name: candidate.last().to_string(),
			university_id: team_id.to_string(),
		});
		Some(id)
	}

	pub fn roster(&self) -> &Roster {
		&self.roster
	}

	pub fn minted(&self) -> &[MintedPlayer] {
		&self.minted
	}

	pub fn into_parts(self) -> (Roster, Vec<MintedPlayer>) {
		(self.roster, self.minted)
	}
}
