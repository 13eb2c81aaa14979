//! Timestamp formatting in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a stored UTC timestamp as `YYYY-MM-DD HH:MM:SS TZ` in the
/// system timezone.
#[derive(Debug, Clone, Copy)]
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let ts = Timestamp::from_second(1_700_000_000).unwrap();
        let output = LocalDateTime(&ts).to_string();

        // Date and time portion is fixed width regardless of the zone
        let (date, rest) = output.split_once(' ').unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(rest.split(' ').next().unwrap().len(), 8);
    }
}
