pub mod document;
pub mod event_type;
pub mod game_clock;
pub mod play;

pub use document::*;
pub use event_type::*;
pub use game_clock::*;
pub use play::*;
