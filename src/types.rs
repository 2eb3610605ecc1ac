use crate::consts::{MAX_MONTH, SEASON_FIRST_MONTH};
use crate::locale::{FixedHoliday, Locale, WEEKLY_REST_DESCRIPTION};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week in the Persian week, which starts on Saturday.
/// The discriminant is the position in that week (`Saturday` = 0 .. `Friday` = 6).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// All weekdays, Saturday first
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Position in the Saturday-first week (0..=6)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday at the given Saturday-first position
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Friday is the fixed weekly rest day
    #[inline]
    pub const fn is_weekly_rest(self) -> bool {
        matches!(self, Self::Friday)
    }

    /// Localized weekday name
    pub const fn name(self, locale: Locale) -> &'static str {
        locale.weekday_names()[self as usize]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Saturday => Self::Sat,
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
        }
    }
}

/// Season of the solar year; each covers three consecutive months starting at Farvardin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season containing `month`.
    ///
    /// Returns `None` if the month is outside `1..=MAX_MONTH`.
    pub const fn from_month(month: u8) -> Option<Self> {
        if month == 0 || month > MAX_MONTH {
            return None;
        }
        Some(Self::containing(month))
    }

    /// Season containing an already validated month
    pub(crate) const fn containing(month: u8) -> Self {
        match SEASON_FIRST_MONTH[month as usize] {
            1 => Self::Spring,
            4 => Self::Summer,
            7 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// First month of the season
    pub const fn first_month(self) -> u8 {
        match self {
            Self::Spring => 1,
            Self::Summer => 4,
            Self::Autumn => 7,
            Self::Winter => 10,
        }
    }

    /// Half of the year the season falls in
    pub const fn half(self) -> HalfOfYear {
        match self {
            Self::Spring | Self::Summer => HalfOfYear::First,
            Self::Autumn | Self::Winter => HalfOfYear::Second,
        }
    }
}

/// First half (31-day months) or second half (30/29-day months) of the year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum HalfOfYear {
    First,
    Second,
}

/// Why a day is a holiday.
/// Both rules can hold at once, e.g. a Nowruz day falling on a Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Holiday {
    weekly_rest: bool,
    fixed: Option<&'static FixedHoliday>,
}

impl Holiday {
    pub(crate) const fn new(weekly_rest: bool, fixed: Option<&'static FixedHoliday>) -> Self {
        Self { weekly_rest, fixed }
    }

    /// True if either rule matched
    #[inline]
    pub const fn is_holiday(&self) -> bool {
        self.weekly_rest || self.fixed.is_some()
    }

    /// True if the day is the weekly rest day
    #[inline]
    pub const fn is_weekly_rest(&self) -> bool {
        self.weekly_rest
    }

    /// Matching entry of the fixed holiday table
    #[inline]
    pub const fn fixed(&self) -> Option<&'static FixedHoliday> {
        self.fixed
    }

    /// Reasons joined by newlines, weekly rest first. Empty for working days.
    pub fn description(&self) -> String {
        let weekly = self.weekly_rest.then_some(WEEKLY_REST_DESCRIPTION);
        let fixed = self.fixed.map(FixedHoliday::description);
        weekly
            .into_iter()
            .chain(fixed)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
