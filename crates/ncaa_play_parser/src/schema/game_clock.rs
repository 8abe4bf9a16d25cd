use crate::error::GameClockError;
use std::fmt;
use std::str::FromStr;

/// Upper bound on a count-up minute value: 120 regulation-plus-extra-time
/// minutes with generous stoppage headroom.
const MAX_COUNT_UP_MINUTES: u16 = 150;

/// Struct to represent clock minutes. The match clock counts up, so
/// minutes run past 59 ("77:45" is a normal second-half stamp); the cap
/// only rejects values no match can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(u16);

impl Minutes {
	pub fn new(value: u16) -> Result<Self, GameClockError> {
		if value > MAX_COUNT_UP_MINUTES {
			Err(GameClockError::invalid_minutes_error(value))
		} else {
			Ok(Minutes(value))
		}
	}

	pub fn value(self) -> u16 {
		self.0
	}
}

impl FromStr for Minutes {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<u16>()?;
		Minutes::new(value)
	}
}

/// Struct to represent clock seconds (valid range: 0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(u8);

impl Seconds {
	pub fn new(value: u8) -> Result<Self, GameClockError> {
		if value > 59 {
			Err(GameClockError::invalid_seconds_error(value))
		} else {
			Ok(Seconds(value))
		}
	}

	pub fn value(self) -> u8 {
		self.0
	}
}

impl FromStr for Seconds {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<u8>()?;
		Seconds::new(value)
	}
}

/// A normalized play clock. Accepts the two shapes the source data uses,
/// count-up `MM:SS` and wall-clock `HH:MM:SS`, and re-renders the
/// canonical zero-padded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
	hours: Option<u8>,
	minutes: Minutes,
	seconds: Seconds,
}

impl GameClock {
	pub fn new(hours: Option<u8>, minutes: Minutes, seconds: Seconds) -> Self {
		GameClock { hours, minutes, seconds }
	}

	pub fn minutes(&self) -> u16 {
		self.minutes.value()
	}

	pub fn seconds(&self) -> u8 {
		self.seconds.value()
	}
}

impl FromStr for GameClock {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.trim().split(':').collect();

		match parts.as_slice() {
			[minutes, seconds] => {
				let minutes = minutes.parse::<Minutes>()?;
				let seconds = seconds.parse::<Seconds>()?;
				Ok(GameClock::new(None, minutes, seconds))
			}
			[hours, minutes, seconds] => {
				let hours = hours.trim().parse::<u8>()?;
				if hours > 23 {
					return Err(GameClockError::invalid_format_error(s));
				}
				let minutes = minutes.parse::<Minutes>()?;
				// With an hour field the minutes are a wall-clock component,
				// not a count-up total.
				if minutes.value() > 59 {
					return Err(GameClockError::invalid_minutes_error(minutes.value()));
				}
				let seconds = seconds.parse::<Seconds>()?;
				Ok(GameClock::new(Some(hours), minutes, seconds))
			}
			_ => Err(GameClockError::invalid_format_error(s)),
		}
	}
}

impl fmt::Display for GameClock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.hours {
			Some(hours) => write!(f, "{:02}:{:02}:{:02}", hours, self.minutes.value(), self.seconds.value()),
			None => write!(f, "{:02}:{:02}", self.minutes.value(), self.seconds.value()),
		}
	}
}
