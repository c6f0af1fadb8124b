//! Clip playing length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AircastError;

/// Non-negative playing length of a clip.
///
/// Parses the legacy `hours:minutes:seconds[.fraction]` text form and renders
/// the canonical zero-padded variant of the same shape. Shorter forms are
/// accepted the way the legacy duration text was: `12:30` is twelve hours
/// thirty minutes, and a lone number is a count of hours.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Playlength(Duration);

impl Playlength {
    /// Zero-length playlength.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Create from a std `Duration`.
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Create from whole hours, minutes and seconds.
    pub fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self(Duration::from_secs(hours * 3600 + minutes * 60 + seconds))
    }

    /// The underlying duration.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for Playlength {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl FromStr for Playlength {
    type Err = AircastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AircastError::InvalidPlaylength(s.to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.starts_with('-') || trimmed.starts_with('+') {
            return Err(invalid());
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }

        let hours: u64 = parts[0].parse().map_err(|_| invalid())?;
        let minutes: u64 = match parts.get(1) {
            Some(part) => part.parse().map_err(|_| invalid())?,
            None => 0,
        };
        let (seconds, nanos) = match parts.get(2) {
            Some(part) => {
                let (whole, fraction) = match part.split_once('.') {
                    Some((whole, fraction)) => (whole, Some(fraction)),
                    None => (*part, None),
                };
                let seconds: u64 = whole.parse().map_err(|_| invalid())?;
                let nanos = match fraction {
                    Some(digits) => parse_fraction(digits).ok_or_else(invalid)?,
                    None => 0,
                };
                (seconds, nanos)
            }
            None => (0, 0),
        };

        Ok(Self(Duration::new(
            hours * 3600 + minutes * 60 + seconds,
            nanos,
        )))
    }
}

/// Fractional seconds digits to nanoseconds; digits past the ninth are
/// dropped.
fn parse_fraction(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut nanos: u32 = 0;
    for (position, byte) in digits.bytes().take(9).enumerate() {
        let digit = u32::from(byte - b'0');
        nanos += digit * 10u32.pow(8 - position as u32);
    }
    Some(nanos)
}

impl fmt::Display for Playlength {
    /// Canonical `HH:MM:SS[.fraction]` form, trailing fraction zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")?;

        let nanos = self.0.subsec_nanos();
        if nanos > 0 {
            let padded = format!("{nanos:09}");
            write!(f, ".{}", padded.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_form() {
        let playlength: Playlength = "01:02:03".parse().unwrap();
        assert_eq!(playlength, Playlength::from_hms(1, 2, 3));
    }

    #[test]
    fn parses_fractional_seconds() {
        let playlength: Playlength = "00:00:00.5".parse().unwrap();
        assert_eq!(
            playlength.as_duration(),
            Duration::from_millis(500),
        );
    }

    #[test]
    fn parses_short_forms_as_leading_hours() {
        let hours_minutes: Playlength = "12:30".parse().unwrap();
        assert_eq!(hours_minutes, Playlength::from_hms(12, 30, 0));
        let hours_only: Playlength = "5".parse().unwrap();
        assert_eq!(hours_only, Playlength::from_hms(5, 0, 0));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!("".parse::<Playlength>().is_err());
        assert!("abc".parse::<Playlength>().is_err());
        assert!("-00:00:01".parse::<Playlength>().is_err());
        assert!("1:2:3:4".parse::<Playlength>().is_err());
        assert!("00:00:xx".parse::<Playlength>().is_err());
        assert!("00:00:01.".parse::<Playlength>().is_err());
    }

    #[test]
    fn renders_canonical_form() {
        assert_eq!(Playlength::from_hms(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(Playlength::ZERO.to_string(), "00:00:00");
        assert_eq!(
            Playlength::new(Duration::from_millis(500)).to_string(),
            "00:00:00.5",
        );
    }

    #[test]
    fn canonical_form_round_trips() {
        for playlength in [
            Playlength::from_hms(0, 0, 0),
            Playlength::from_hms(1, 2, 3),
            Playlength::new(Duration::new(3723, 250_000_000)),
        ] {
            let rendered = playlength.to_string();
            assert_eq!(rendered.parse::<Playlength>().unwrap(), playlength);
        }
    }
}
