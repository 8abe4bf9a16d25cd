use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Id fields in the upstream feed arrive as either JSON strings or
/// numbers depending on the endpoint. Decode both and treat them as
/// strings downstream; no numeric coercion happens in the core.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
	Number(i64),
	Text(String),
}

impl IdValue {
	pub fn as_string(&self) -> String {
		match self {
			IdValue::Number(value) => value.to_string(),
			IdValue::Text(value) => value.clone(),
		}
	}
}

impl fmt::Display for IdValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IdValue::Number(value) => write!(f, "{}", value),
			IdValue::Text(value) => f.write_str(value),
		}
	}
}

/// Decoded play-by-play document for one contest, as handed over by the
/// fetch layer. Every field is optional or defaulted; structural
/// requirements are enforced by the pipeline, not the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayDoc {
	#[serde(default)]
	pub contest_id: Option<IdValue>,
	#[serde(default)]
	pub teams: Vec<TeamEntry>,
	#[serde(default)]
	pub periods: Vec<Period>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
	#[serde(default)]
	pub team_id: Option<IdValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
	#[serde(default)]
	pub playbyplay_stats: Vec<TeamPlays>,
}

/// One team's block of plays within a period.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlays {
	#[serde(default)]
	pub team_id: Option<IdValue>,
	#[serde(default)]
	pub plays: Vec<PlayEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEntry {
	#[serde(default)]
	pub play_text: Option<String>,
	#[serde(default)]
	pub clock: Option<String>,
}

impl PlayByPlayDoc {
	/// Team ids named in the document's team list. Play blocks whose team
	/// is not in this set carry an unattributable team id.
	pub fn known_team_ids(&self) -> HashSet<String> {
		self.teams.iter().filter_map(|team| team.team_id.as_ref().map(IdValue::as_string)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_document_decodes_mixed_id_types() {
		let doc: PlayByPlayDoc = serde_json::from_value(serde_json::json!({
			"contestId": 12345,
			"teams": [{"teamId": "305"}, {"teamId": 410}],
			"periods": [{
				"playbyplayStats": [{
					"teamId": "305",
					"plays": [{"playText": "GOAL by WAY Ngugi, Abby", "clock": "12:34"}]
				}]
			}]
		}))
		.unwrap();

		assert_eq!(doc.contest_id.as_ref().map(IdValue::as_string), Some("12345".to_string()));
		assert_eq!(doc.known_team_ids(), ["305".to_string(), "410".to_string()].into_iter().collect());
		assert_eq!(doc.periods[0].playbyplay_stats[0].plays[0].play_text.as_deref(), Some("GOAL by WAY Ngugi, Abby"));
	}

	#[test]
	fn test_document_tolerates_missing_fields() {
		let doc: PlayByPlayDoc = serde_json::from_value(serde_json::json!({
			"periods": [{"playbyplayStats": [{"plays": [{}]}]}]
		}))
		.unwrap();

		assert!(doc.contest_id.is_none());
		assert!(doc.teams.is_empty());
		assert!(doc.periods[0].playbyplay_stats[0].plays[0].play_text.is_none());
	}
}
