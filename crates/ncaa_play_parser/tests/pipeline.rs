// tests/pipeline.rs
// End-to-end tests over decoded play-by-play documents

use ncaa_play_parser::{EventType, PlayByPlayDoc, PlayParser, PlayerId, Roster, RosterBuilder, RosterKey};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

fn roster() -> Roster {
	let mut roster = Roster::new();
	roster.insert(RosterKey::new("Abby", "Ngugi", "305"), PlayerId(4471));
	roster.insert(RosterKey::new("Olivia", "Magierowski", "410"), PlayerId(1208));
	roster
}

fn contest_doc() -> PlayByPlayDoc {
	serde_json::from_value(json!({
		"contestId": "5811",
		"teams": [{"teamId": "305"}, {"teamId": 410}],
		"periods": [
			{
				"playbyplayStats": [
					{
						"teamId": "305",
						"plays": [
							{"playText": "Kickoff by WAY.", "clock": "00:00"},
							{"playText": "GOAL by WAY Ngugi, Abby", "clock": "12:34"},
							{"playText": "Throw in by WAY", "clock": "15:02"}
						]
					},
					{
						"teamId": 410,
						"plays": [
							{"playText": "Save (by goalie) Olivia Magierowski.", "clock": "12:20"},
							{"playText": "End of period.", "clock": "45:00"}
						]
					}
				]
			},
			{
				"playbyplayStats": [
					{
						"teamId": "305",
						"plays": [
							{"playText": "Foul on Springfield.", "clock": "61:08"},
							{"playText": "Shot by Worcester St. Olivia Magierowski [77:45], wide.", "clock": "bad clock"}
						]
					}
				]
			}
		]
	}))
	.unwrap()
}

// ============================================================================
// Single-game behavior
// ============================================================================

#[test]
fn parses_a_contest_end_to_end() {
	let roster = roster();
	let mut parser = PlayParser::new(&roster);

	let events = parser.parse_game(&contest_doc()).unwrap();

	// Throw-in and narration plays are dropped entirely.
	assert_eq!(events.len(), 5);
	assert!(events.iter().all(|event| !event.event_type.is_excluded()));

	let goal = &events[1];
	assert_eq!(goal.event_type, EventType::Goal);
	assert_eq!(goal.player_id, Some(PlayerId(4471)));
	assert_eq!(goal.time_of_play.as_deref(), Some("12:34"));
	assert_eq!(goal.game_id, "5811");
	assert_eq!(goal.description, "GOAL by WAY Ngugi, Abby");

	let save = &events[2];
	assert_eq!(save.event_type, EventType::Save);
	assert_eq!(save.player_id, Some(PlayerId(1208)));

	// Team foul: event survives, player does not. The clock is past the
	// hour mark and must come through intact.
	let foul = &events[3];
	assert_eq!(foul.event_type, EventType::Foul);
	assert_eq!(foul.player_id, None);
	assert_eq!(foul.time_of_play.as_deref(), Some("61:08"));

	// Wrong team for Magierowski, and an unparsable clock.
	let shot = &events[4];
	assert_eq!(shot.event_type, EventType::Shot);
	assert_eq!(shot.player_id, None);
	assert_eq!(shot.time_of_play, None);
}

#[test]
fn sequence_ids_are_monotonic_across_games() {
	let roster = roster();
	let mut parser = PlayParser::new(&roster);

	let first = parser.parse_game(&contest_doc()).unwrap();
	let second = parser.parse_game(&contest_doc()).unwrap();

	let ids: Vec<u64> = first.iter().chain(second.iter()).map(|event| event.play_id).collect();
	assert_eq!(ids, (1..=ids.len() as u64).collect::<Vec<u64>>());
}

#[test]
fn sequence_can_continue_an_existing_run() {
	let roster = roster();
	let mut parser = PlayParser::new(&roster).starting_at(100);
	let events = parser.parse_game(&contest_doc()).unwrap();
	assert_eq!(events[0].play_id, 100);
}

#[test]
fn unknown_block_team_leaves_players_unresolved() {
	let roster = roster();
	let mut parser = PlayParser::new(&roster);

	let doc: PlayByPlayDoc = serde_json::from_value(json!({
		"contestId": "5812",
		"teams": [{"teamId": "305"}],
		"periods": [{
			"playbyplayStats": [{
				"teamId": "999",
				"plays": [{"playText": "GOAL by WAY Ngugi, Abby", "clock": "12:34"}]
			}]
		}]
	}))
	.unwrap();

	let events = parser.parse_game(&doc).unwrap();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].player_id, None);
}

// ============================================================================
// Batch behavior: structural errors stay contained
// ============================================================================

#[test]
fn structural_errors_skip_one_game_only() {
	let roster = roster();
	let mut parser = PlayParser::new(&roster);

	let missing_contest: PlayByPlayDoc = serde_json::from_value(json!({
		"teams": [{"teamId": "305"}],
		"periods": []
	}))
	.unwrap();
	let missing_teams: PlayByPlayDoc = serde_json::from_value(json!({
		"contestId": "5813",
		"periods": []
	}))
	.unwrap();

	let docs = vec![missing_contest, contest_doc(), missing_teams];
	let outcome = parser.parse_games(&docs);

	assert_eq!(outcome.skipped_games, 2);
	assert_eq!(outcome.events.len(), 5);
	assert!(outcome.events.iter().all(|event| event.game_id == "5811"));
}

// ============================================================================
// Roster-synthesis mode
// ============================================================================

#[test]
fn synthesis_mode_mints_stable_ids() {
	let mut builder = RosterBuilder::new(roster());
	let mut parser = PlayParser::with_builder(&mut builder);

	let doc: PlayByPlayDoc = serde_json::from_value(json!({
		"contestId": "5814",
		"teams": [{"teamId": "305"}],
		"periods": [{
			"playbyplayStats": [{
				"teamId": "305",
				"plays": [
					{"playText": "Shot by Morgan Berthiaume, wide.", "clock": "08:11"},
					{"playText": "GOAL by Morgan Berthiaume", "clock": "09:40"}
				]
			}]
		}]
	}))
	.unwrap();

	let events = parser.parse_game(&doc).unwrap();
	assert_eq!(events.len(), 2);

	let first = events[0].player_id.expect("minted id");
	let second = events[1].player_id.expect("reused id");
	assert_eq!(first, second);

	let (_, minted) = builder.into_parts();
	assert_eq!(minted.len(), 1);
	assert_eq!(minted[0].player_id, first);
	assert_eq!(minted[0].first_name, "Morgan");
	assert_eq!(minted[0].last_name, "Berthiaume");
	assert_eq!(minted[0].university_id, "305");

	// Same triple, same id, in a completely separate run.
	assert_eq!(ncaa_play_parser::synthesize_id("305", "Morgan", "Berthiaume"), first);
}
