/// Minimum valid Jalali year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: u16 = 9378;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Upper bound of the gross day check; the real limit depends on the month
pub const MAX_DAY: u8 = 31;

/// Month number for Farvardin
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in each of the first six months
pub const FIRST_HALF_MONTH_DAYS: u8 = 31;
/// Days in months seven to eleven
pub const SECOND_HALF_MONTH_DAYS: u8 = 30;
/// Days in Esfand for common years
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in the first half of the year (six 31-day months)
pub(crate) const FIRST_HALF_DAYS: u16 = 186;

/// Leap years repeat on a 33 year cycle...
pub(crate) const LEAP_CYCLE_YEARS: i64 = 33;
/// ...which holds eight leap years
pub(crate) const LEAP_CYCLE_LEAPS: i64 = 8;
/// Days in one full 33 year cycle
pub(crate) const LEAP_CYCLE_DAYS: i64 = LEAP_CYCLE_YEARS * 365 + LEAP_CYCLE_LEAPS;

/// Days from 0001-01-01 CE to 0001/01/01 AP (proleptic Gregorian 0622-03-21), counted the way
/// `chrono::Datelike::num_days_from_ce` counts them
pub(crate) const JALALI_EPOCH_DAYS_FROM_CE: i64 = 226_895;

/// First month of the season each month belongs to (index 0 is unused, months are 1-indexed)
pub const SEASON_FIRST_MONTH: [u8; 13] = [0, 1, 1, 1, 4, 4, 4, 7, 7, 7, 10, 10, 10];

/// Months in a season
pub const MONTHS_IN_SEASON: i32 = 3;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Separators dropped from compact input such as `1397-10-23` or `1397/10/23`
pub const COMPACT_SEPARATORS: [char; 2] = ['-', '/'];
/// Number of digits in compact `yyyymmdd` input
pub const COMPACT_LEN: usize = 8;

/// Range separator (`1397/10/01..1397/10/30`)
pub const RANGE_SEPARATOR: &str = "..";

/// Pattern used by `Display`
pub const DEFAULT_PATTERN: &str = "yyyy/mm/dd";
/// Pattern used by `to_short_string`
pub const SHORT_PATTERN: &str = "yyyymmdd";
/// Pattern used by `to_long_string`
pub const LONG_PATTERN: &str = "yyyy MM - DD dd";
