pub mod cascade;
pub mod cleanup;
pub mod patterns;

pub use cascade::extract_name;
pub use cleanup::NameCandidate;
