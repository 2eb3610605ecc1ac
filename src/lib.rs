mod calendar;
pub mod civil;
mod consts;
mod format;
mod locale;
mod prelude;
mod range;
mod types;

pub use calendar::MonthCalendar;
pub use civil::{CivilCalendar, JalaliDate, SolarHijri};
pub use consts::*;
pub use locale::{FixedHoliday, HOLIDAYS, Locale, WEEKLY_REST_DESCRIPTION, fixed_holiday};
pub use range::{PersianDateRange, RangeDays, RangeError};
pub use types::{HalfOfYear, Holiday, Season, Weekday};

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Converter backing every [`PersianDate`]
const CALENDAR: SolarHijri = SolarHijri;

/// One day of the solar Hijri (Jalali) calendar.
///
/// Every value carries its weekday, day of year, leap status and holiday classification,
/// all derived from the same conversion as the (year, month, day) triple. Values are
/// immutable: arithmetic and period boundaries return new, fully derived dates.
///
/// Equality, hashing and ordering only look at the triple.
#[derive(Debug, Clone, Copy)]
pub struct PersianDate {
    year: u16,
    month: u8,
    day: u8,
    weekday: Weekday,
    day_of_year: u16,
    leap_year: bool,
    holiday: Holiday,
    gregorian: NaiveDate,
}

/// Error type for date construction, arithmetic and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The triple fails the range check or names a day that does not exist.
    #[error("Invalid date: {year:04}/{month:02}/{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    /// The result falls outside years `MIN_YEAR..=MAX_YEAR`.
    #[error("Date is outside the supported years {}-{}", MIN_YEAR, MAX_YEAR)]
    OutOfRange,

    /// Text could not be read as a date.
    #[error("Invalid date format: {input}")]
    Format { input: String },
}

impl PersianDate {
    /// 0001/01/01, the first supported day (proleptic Gregorian 0622-03-21)
    pub const MIN: Self = Self {
        year: MIN_YEAR,
        month: FARVARDIN,
        day: MIN_DAY,
        weekday: Weekday::Thursday,
        day_of_year: 1,
        leap_year: true,
        holiday: Holiday::new(false, Some(&HOLIDAYS[0])),
        gregorian: match NaiveDate::from_ymd_opt(622, 3, 21) {
            Some(date) => date,
            None => panic!("0622-03-21 is a valid Gregorian date"),
        },
    };

    /// 9378/12/29, the last supported day (proleptic Gregorian 10000-03-19)
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: ESFAND,
        day: ESFAND_DAYS,
        weekday: Weekday::Sunday,
        day_of_year: 365,
        leap_year: false,
        holiday: Holiday::new(false, Some(&HOLIDAYS[HOLIDAYS.len() - 1])),
        gregorian: match NaiveDate::from_ymd_opt(10_000, 3, 19) {
            Some(date) => date,
            None => panic!("10000-03-19 is a valid Gregorian date"),
        },
    };

    /// Creates a date from a Jalali triple.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the year is outside `MIN_YEAR..=MAX_YEAR`, the month
    /// outside `1..=12`, the day outside `1..=31`, or the day does not exist in that month
    /// (e.g. Mehr 31, or Esfand 30 in a common year).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDate { year, month, day };

        if !(MIN_YEAR..=MAX_YEAR).contains(&year)
            || !(FARVARDIN..=MAX_MONTH).contains(&month)
            || !(MIN_DAY..=MAX_DAY).contains(&day)
        {
            tracing::debug!(year, month, day, "date fails range check");
            return Err(invalid);
        }

        let Some(gregorian) = CALENDAR.to_gregorian(i32::from(year), month, day) else {
            tracing::debug!(year, month, day, "day does not exist in month");
            return Err(invalid);
        };
        Self::from_civil(gregorian)
    }

    /// Creates the date falling on a Gregorian day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the day lies before 0001/01/01 or after the last day
    /// of `MAX_YEAR`.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateError> {
        Self::from_civil(date)
    }

    /// Gregorian day this date falls on
    #[inline]
    pub const fn to_gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the system clock is outside the supported years.
    #[cfg(feature = "clock")]
    pub fn today() -> Result<Self, DateError> {
        Self::from_civil(chrono::Local::now().date_naive())
    }

    /// True if this date is today in the local time zone
    #[cfg(feature = "clock")]
    pub fn is_today(&self) -> bool {
        self.gregorian == chrono::Local::now().date_naive()
    }

    /// Derives every field from the Gregorian day.
    fn from_civil(gregorian: NaiveDate) -> Result<Self, DateError> {
        let fields = CALENDAR.to_jalali(gregorian).ok_or(DateError::OutOfRange)?;
        let year = u16::try_from(fields.year)
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .ok_or(DateError::OutOfRange)?;

        let weekday = Weekday::from(CALENDAR.weekday(gregorian));
        let holiday = Holiday::new(
            weekday.is_weekly_rest(),
            fixed_holiday(fields.month, fields.day),
        );

        Ok(Self {
            year,
            month: fields.month,
            day: fields.day,
            weekday,
            day_of_year: fields.day_of_year,
            leap_year: fields.leap_year,
            holiday,
            gregorian,
        })
    }

    /// Returns the year (1..=9378)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1..=31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the day of the year (1..=366)
    #[inline]
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        self.leap_year
    }

    /// Number of days in this date's month
    pub fn days_in_month(&self) -> u8 {
        CALENDAR.days_in_month(i32::from(self.year), self.month)
    }

    /// Localized name of the month
    pub const fn month_name(&self, locale: Locale) -> &'static str {
        locale.month_names()[self.month as usize - 1]
    }

    /// Localized name of the weekday
    pub const fn weekday_name(&self, locale: Locale) -> &'static str {
        self.weekday.name(locale)
    }

    pub const fn season(&self) -> Season {
        Season::containing(self.month)
    }

    pub const fn half_of_year(&self) -> HalfOfYear {
        self.season().half()
    }

    /// Holiday classification of this day
    #[inline]
    pub const fn holiday(&self) -> Holiday {
        self.holiday
    }

    /// True on Fridays and on fixed national holidays
    #[inline]
    pub const fn is_holiday(&self) -> bool {
        self.holiday.is_holiday()
    }

    /// Why the day is a holiday, one reason per line; empty on working days
    pub fn holiday_description(&self) -> String {
        self.holiday.description()
    }

    /// Entry of the fixed holiday table matching this day
    pub const fn fixed_holiday(&self) -> Option<&'static FixedHoliday> {
        self.holiday.fixed()
    }

    /// Same month and day in another year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the day does not exist in that year (Esfand 30).
    pub fn with_year(&self, year: u16) -> Result<Self, DateError> {
        Self::new(year, self.month, self.day)
    }

    /// Same year and day in another month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the day does not exist in that month.
    pub fn with_month(&self, month: u8) -> Result<Self, DateError> {
        Self::new(self.year, month, self.day)
    }

    /// Same year and month, another day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the day does not exist in this month.
    pub fn with_day(&self, day: u8) -> Result<Self, DateError> {
        Self::new(self.year, self.month, day)
    }
}

// --- arithmetic ---
impl PersianDate {
    /// Moves the date by years, then months, then days.
    ///
    /// The order matters: year and month steps keep the day of month and clamp it to the
    /// length of the target month before the day delta is applied, so
    /// `1397/06/30` shifted by one month and one day is `1397/08/01`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn shift(&self, days: i64, months: i32, years: i32) -> Result<Self, DateError> {
        let shifted = CALENDAR
            .add_years(self.gregorian, years)
            .and_then(|date| CALENDAR.add_months(date, months))
            .and_then(|date| CALENDAR.add_days(date, days));

        let Some(date) = shifted else {
            tracing::trace!(date = %self, days, months, years, "shift leaves supported range");
            return Err(DateError::OutOfRange);
        };
        Self::from_civil(date)
    }

    /// Adds (or with a negative count, subtracts) days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn goto_days(&self, days: i64) -> Result<Self, DateError> {
        self.shift(days, 0, 0)
    }

    /// Adds (or subtracts) whole weeks.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn goto_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        let days = weeks
            .checked_mul(DAYS_IN_WEEK)
            .ok_or(DateError::OutOfRange)?;
        self.shift(days, 0, 0)
    }

    /// Adds (or subtracts) months, clamping the day to the target month's length.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn goto_months(&self, months: i32) -> Result<Self, DateError> {
        self.shift(0, months, 0)
    }

    /// Adds (or subtracts) years, clamping Esfand 30 to Esfand 29 in common years.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn goto_years(&self, years: i32) -> Result<Self, DateError> {
        self.shift(0, 0, years)
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &Self) -> i64 {
        other.gregorian.signed_duration_since(self.gregorian).num_days()
    }
}

// --- period boundaries ---
impl PersianDate {
    /// First day of the month.
    ///
    /// # Errors
    /// Never fails for a valid date; shares the signature of the other boundaries.
    pub fn begin_of_month(&self) -> Result<Self, DateError> {
        Self::new(self.year, self.month, MIN_DAY)
    }

    /// Last day of the month: one month past the first day, one day back.
    ///
    /// # Errors
    /// Never fails for a valid date; shares the signature of the other boundaries.
    pub fn end_of_month(&self) -> Result<Self, DateError> {
        self.begin_of_month()?.shift(-1, 1, 0)
    }

    /// The Saturday starting this week.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` in the first days of year 1.
    pub fn begin_of_week(&self) -> Result<Self, DateError> {
        self.shift(self.days_to(Weekday::Saturday), 0, 0)
    }

    /// The Friday ending this week.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` in the last days of `MAX_YEAR`.
    pub fn end_of_week(&self) -> Result<Self, DateError> {
        self.shift(self.days_to(Weekday::Friday), 0, 0)
    }

    /// Signed distance to another day of the same Saturday-first week
    fn days_to(&self, weekday: Weekday) -> i64 {
        i64::from(weekday.index()) - i64::from(self.weekday.index())
    }

    /// First day of the season.
    ///
    /// # Errors
    /// Never fails for a valid date; shares the signature of the other boundaries.
    pub fn begin_of_season(&self) -> Result<Self, DateError> {
        Self::new(self.year, self.season().first_month(), MIN_DAY)
    }

    /// Last day of the season: three months past its first day, one day back.
    ///
    /// # Errors
    /// Never fails for a valid date; shares the signature of the other boundaries.
    pub fn end_of_season(&self) -> Result<Self, DateError> {
        self.begin_of_season()?.shift(-1, MONTHS_IN_SEASON, 0)
    }

    /// 1 Farvardin of this year.
    ///
    /// # Errors
    /// Never fails for a valid date; shares the signature of the other boundaries.
    pub fn begin_of_year(&self) -> Result<Self, DateError> {
        Self::new(self.year, FARVARDIN, MIN_DAY)
    }

    /// Last day of Esfand: Esfand 30 in leap years, Esfand 29 otherwise.
    ///
    /// # Errors
    /// Never fails for a valid date; shares the signature of the other boundaries.
    pub fn end_of_year(&self) -> Result<Self, DateError> {
        self.begin_of_year()?.shift(-1, 0, 1)
    }
}

impl TryFrom<NaiveDate> for PersianDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(date)
    }
}

impl From<PersianDate> for NaiveDate {
    fn from(date: PersianDate) -> Self {
        date.gregorian
    }
}

impl TryFrom<(u16, u8, u8)> for PersianDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl PartialEq for PersianDate {
    fn eq(&self, other: &Self) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }
}

impl Eq for PersianDate {}

impl Hash for PersianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year, self.month, self.day).hash(state);
    }
}

impl PartialOrd for PersianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
