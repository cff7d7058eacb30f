//! Time-of-day values as carried by `data-time` attributes.
//!
//! Attributes encode a time as `H:M:S:am|pm`. Seeds written by the server use
//! a 12-hour hour (`3:07:09:pm`); values written back by the time-up counter
//! keep the 24-hour hour next to a recomputed meridiem (`15:7:10:pm`). Both
//! parse to the same [`ClockTime`].

use crate::errors::ParseError;
use chrono::Timelike;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }
}

impl FromStr for Meridiem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            _ => Err(ParseError::InvalidMeridiem(s.to_string())),
        }
    }
}

/// A normalized 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, ParseError> {
        Ok(Self {
            hours: bounded("hours", hours, 23)?,
            minutes: bounded("minutes", minutes, 59)?,
            seconds: bounded("seconds", seconds, 59)?,
        })
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            // leap seconds report 60
            seconds: time.second().min(59) as u8,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Hour on a 12-hour dial, midnight and noon shown as 12.
    pub fn twelve_hour(&self) -> u8 {
        match self.hours % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hours < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Moves forward by one second. Midnight wraps to `0:00:00` without
    /// tracking a day.
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes >= 60 {
                self.minutes = 0;
                self.hours = (self.hours + 1) % 24;
            }
        }
    }

    /// Seed form served by the admin app: 12-hour hour, padded fields.
    pub fn to_seed(&self) -> String {
        format!(
            "{}:{:02}:{:02}:{}",
            self.twelve_hour(),
            self.minutes,
            self.seconds,
            self.meridiem().as_str()
        )
    }

    /// Attribute form: 24-hour hour, unpadded fields, recomputed meridiem.
    pub fn to_attribute(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.hours,
            self.minutes,
            self.seconds,
            self.meridiem().as_str()
        )
    }
}

fn bounded(field: &'static str, value: u32, max: u32) -> Result<u8, ParseError> {
    if value > max {
        return Err(ParseError::OutOfRange { field, value });
    }
    Ok(value as u8)
}

/// ASCII digits only; `+5` and `-0` are rejected.
pub(crate) fn number<T: FromStr>(field: &'static str, input: &str) -> Result<T, ParseError> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber {
            field,
            input: input.to_string(),
        });
    }
    digits.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        input: input.to_string(),
    })
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let [hours, minutes, seconds, meridiem] = fields.as_slice() else {
            return Err(ParseError::FieldCount {
                input: s.to_string(),
                found: fields.len(),
            });
        };

        let mut hours: u32 = number("hours", hours)?;
        let minutes: u32 = number("minutes", minutes)?;
        let seconds: u32 = number("seconds", seconds)?;
        match meridiem.parse::<Meridiem>()? {
            Meridiem::Pm if hours < 12 => hours += 12,
            Meridiem::Am if hours == 12 => hours = 0,
            _ => {}
        }

        ClockTime::new(hours, minutes, seconds)
    }
}

/// Renders `H:MM:SS am|pm` with a 12-hour hour.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02} {}",
            self.twelve_hour(),
            self.minutes,
            self.seconds,
            self.meridiem().as_str()
        )
    }
}
