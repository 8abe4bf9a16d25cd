pub mod error;
pub mod extract;
pub mod pipeline;
pub mod roster;
pub mod schema;

pub use extract::{extract_name, NameCandidate};
pub use pipeline::{ParseOutcome, PlayParser};
pub use roster::{synthesize_id, MintedPlayer, PlayerId, Roster, RosterBuilder, RosterKey};
pub use schema::{classify, EventType, GameClock, PlayByPlayDoc, PlayEvent, PlayText};
