//! Teaching weekdays.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A teaching day. Sunday classes are not modeled.
///
/// The declaration order is the column order of every grid and the index
/// into a [`WeekMask`](super::WeekMask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All six teaching days in column order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Number of modeled days.
    pub const COUNT: usize = 6;

    /// Zero-based column index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day for a column index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Registration-system symbol (`M`, `T`, `W`, `Th`, `F`, `S`).
    pub fn symbol(self) -> &'static str {
        match self {
            Weekday::Mon => "M",
            Weekday::Tue => "T",
            Weekday::Wed => "W",
            Weekday::Thu => "Th",
            Weekday::Fri => "F",
            Weekday::Sat => "S",
        }
    }

    /// Full English name, used as a grid column header.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = EngineError;

    /// Parses a single day symbol. `T` is Tuesday; Thursday is `Th`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Weekday::Mon),
            "T" => Ok(Weekday::Tue),
            "W" => Ok(Weekday::Wed),
            "Th" | "TH" => Ok(Weekday::Thu),
            "F" => Ok(Weekday::Fri),
            "S" => Ok(Weekday::Sat),
            other => Err(EngineError::UnknownDay(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), Some(*day));
        }
        assert_eq!(Weekday::from_index(6), None);
    }

    #[test]
    fn test_total_ordering() {
        assert!(Weekday::Mon < Weekday::Tue);
        assert!(Weekday::Fri < Weekday::Sat);
        let mut days = vec![Weekday::Sat, Weekday::Mon, Weekday::Thu];
        days.sort();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Thu, Weekday::Sat]);
    }

    #[test]
    fn test_symbol_parse() {
        assert_eq!("Th".parse::<Weekday>().unwrap(), Weekday::Thu);
        assert_eq!("T".parse::<Weekday>().unwrap(), Weekday::Tue);
        assert!("Su".parse::<Weekday>().is_err());
        for day in Weekday::ALL {
            assert_eq!(day.symbol().parse::<Weekday>().unwrap(), day);
        }
    }
}
