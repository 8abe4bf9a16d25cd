use ncaa_play_parser::{PlayByPlayDoc, PlayParser, PlayerId, Roster, RosterKey};

fn main() {
	tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

	let mut roster = Roster::new();
	roster.insert(RosterKey::new("Abby", "Ngugi", "305"), PlayerId(4471));
	roster.insert(RosterKey::new("Natalie", "Barnouw", "410"), PlayerId(2157));

	let doc: PlayByPlayDoc = serde_json::from_value(serde_json::json!({
		"contestId": "5811",
		"teams": [{"teamId": "305"}, {"teamId": "410"}],
		"periods": [{
			"playbyplayStats": [
				{
					"teamId": "305",
					"plays": [
						{"playText": "GOAL by WAY Ngugi, Abby", "clock": "12:34"},
						{"playText": "Throw in by WAY", "clock": "13:02"},
						{"playText": "Foul on Springfield.", "clock": "21:45"}
					]
				},
				{
					"teamId": "410",
					"plays": [
						{"playText": "Corner kick by MIT Natalie Barnouw [44:29].", "clock": "44:29"}
					]
				}
			]
		}]
	}))
	.expect("demo document is well-formed");

	let mut parser = PlayParser::new(&roster);
	match parser.parse_game(&doc) {
		Ok(events) => {
			for event in events {
				println!(
					"#{} {} {} player={} clock={} :: {}",
					event.play_id,
					event.game_id,
					event.event_type,
					event.player_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
					event.time_of_play.as_deref().unwrap_or("-"),
					event.description
				);
			}
		}
		Err(e) => {
			eprintln!("Failed to parse the contest: {}", e);
		}
	}
}
