//! Gregorian <-> Jalali conversion.
//!
//! [`CivilCalendar`] is the contract [`crate::PersianDate`] relies on: field conversion in both
//! directions, leap years, month lengths and calendar-aware stepping of a Gregorian date.
//! [`SolarHijri`] implements it with the arithmetic 33 year leap cycle.

use crate::consts::{
    ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, FIRST_HALF_DAYS, FIRST_HALF_MONTH_DAYS,
    JALALI_EPOCH_DAYS_FROM_CE, LEAP_CYCLE_DAYS, LEAP_CYCLE_LEAPS, LEAP_CYCLE_YEARS, MAX_MONTH,
    MIN_DAY, SECOND_HALF_MONTH_DAYS,
};
use chrono::{Datelike, Days, NaiveDate};

/// Jalali fields of one Gregorian date, as produced by [`CivilCalendar::to_jalali`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// 1..=366
    pub day_of_year: u16,
    pub leap_year: bool,
}

/// Conversion between the Gregorian and Jalali calendars.
///
/// Years are signed and unbounded here so intermediate results of stepping (for example the
/// first day of the year after the last supported one) stay representable; range limits are
/// enforced by the date type built on top.
pub trait CivilCalendar {
    /// Gregorian date of a Jalali triple.
    /// Returns `None` if the triple names no real day (e.g. month 7 day 31) or is not
    /// representable.
    fn to_gregorian(&self, year: i32, month: u8, day: u8) -> Option<NaiveDate>;

    /// Jalali fields of a Gregorian date.
    /// Returns `None` for dates before the start of the Jalali era.
    fn to_jalali(&self, date: NaiveDate) -> Option<JalaliDate>;

    fn is_leap_year(&self, year: i32) -> bool;

    /// Number of days in `month` of `year`; 0 for a month outside `1..=12`, so no day of such a
    /// month passes a `day <= days_in_month` check
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Gregorian day of the week
    fn weekday(&self, date: NaiveDate) -> chrono::Weekday {
        date.weekday()
    }

    /// Moves `date` by whole days. Returns `None` on overflow.
    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate> {
        if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }

    /// Moves `date` by Jalali months, keeping the day of month and clamping it to the length of
    /// the target month.
    fn add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate> {
        let jalali = self.to_jalali(date)?;
        let total = i64::from(jalali.year) * i64::from(MAX_MONTH)
            + i64::from(jalali.month - 1)
            + i64::from(months);
        let year = i32::try_from(total.div_euclid(i64::from(MAX_MONTH))).ok()?;
        let month = u8::try_from(total.rem_euclid(i64::from(MAX_MONTH))).ok()? + 1;
        let day = jalali.day.min(self.days_in_month(year, month));
        self.to_gregorian(year, month, day)
    }

    /// Moves `date` by Jalali years, keeping month and day and clamping the day to the length
    /// of the target month (Esfand 30 becomes Esfand 29 in a common year).
    fn add_years(&self, date: NaiveDate, years: i32) -> Option<NaiveDate> {
        self.add_months(date, years.checked_mul(i32::from(MAX_MONTH))?)
    }
}

/// The solar Hijri calendar with the arithmetic 33 year leap cycle.
///
/// Day one is 1 Farvardin 1, proleptic Gregorian 622-03-21. A year `y` is a leap year when
/// `(25y + 11) mod 33 < 8`, which gives the eight leap years 1, 5, 9, 13, 17, 22, 26, 30 of
/// every cycle and agrees with the astronomical calendar across the modern era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SolarHijri;

impl SolarHijri {
    /// Days elapsed from 1 Farvardin 1 to 1 Farvardin of `year`
    const fn days_before_year(year: i64) -> i64 {
        365 * (year - 1) + (LEAP_CYCLE_LEAPS * year + 21).div_euclid(LEAP_CYCLE_YEARS)
    }

    /// Day of the year (1..=366) for a month and day.
    ///
    /// Returns `None` for a month outside `1..=12`, day 0, or a day past the longest length the
    /// month can have (Esfand 30 is accepted whatever the year).
    pub const fn day_of_year(month: u8, day: u8) -> Option<u16> {
        if month == 0 || month > MAX_MONTH || day < MIN_DAY {
            return None;
        }
        let (month, day) = (month as u16, day as u16);
        if month <= 6 {
            if day > FIRST_HALF_MONTH_DAYS as u16 {
                return None;
            }
            Some((month - 1) * FIRST_HALF_MONTH_DAYS as u16 + day)
        } else {
            if day > SECOND_HALF_MONTH_DAYS as u16 {
                return None;
            }
            Some(FIRST_HALF_DAYS + (month - 7) * SECOND_HALF_MONTH_DAYS as u16 + day)
        }
    }

    /// Month and day for a day of the year.
    ///
    /// Returns `None` outside `1..=366`.
    pub const fn month_day(day_of_year: u16) -> Option<(u8, u8)> {
        if day_of_year == 0 || day_of_year > FIRST_HALF_DAYS + 6 * SECOND_HALF_MONTH_DAYS as u16 {
            return None;
        }
        let offset = day_of_year - 1;
        if day_of_year <= FIRST_HALF_DAYS {
            let month_days = FIRST_HALF_MONTH_DAYS as u16;
            Some(((offset / month_days) as u8 + 1, (offset % month_days) as u8 + 1))
        } else {
            let offset = offset - FIRST_HALF_DAYS;
            let month_days = SECOND_HALF_MONTH_DAYS as u16;
            Some(((offset / month_days) as u8 + 7, (offset % month_days) as u8 + 1))
        }
    }
}

impl CivilCalendar for SolarHijri {
    fn to_gregorian(&self, year: i32, month: u8, day: u8) -> Option<NaiveDate> {
        if year < 1 || !(1..=MAX_MONTH).contains(&month) {
            return None;
        }
        if day < MIN_DAY || day > self.days_in_month(year, month) {
            return None;
        }
        let days = JALALI_EPOCH_DAYS_FROM_CE
            + Self::days_before_year(i64::from(year))
            + i64::from(Self::day_of_year(month, day)?)
            - 1;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)
    }

    fn to_jalali(&self, date: NaiveDate) -> Option<JalaliDate> {
        let elapsed = i64::from(date.num_days_from_ce()) - JALALI_EPOCH_DAYS_FROM_CE;
        if elapsed < 0 {
            return None;
        }

        // Estimate from the mean cycle length, then settle on the exact year.
        let mut year = elapsed * LEAP_CYCLE_YEARS / LEAP_CYCLE_DAYS + 1;
        while Self::days_before_year(year + 1) <= elapsed {
            year += 1;
        }
        while year > 1 && Self::days_before_year(year) > elapsed {
            year -= 1;
        }

        let day_of_year = u16::try_from(elapsed - Self::days_before_year(year) + 1).ok()?;
        let (month, day) = Self::month_day(day_of_year)?;
        let year = i32::try_from(year).ok()?;
        Some(JalaliDate {
            year,
            month,
            day,
            day_of_year,
            leap_year: self.is_leap_year(year),
        })
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (25 * i64::from(year) + 11).rem_euclid(LEAP_CYCLE_YEARS) < LEAP_CYCLE_LEAPS
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            1..=6 => FIRST_HALF_MONTH_DAYS,
            7..=11 => SECOND_HALF_MONTH_DAYS,
            ESFAND if self.is_leap_year(year) => ESFAND_DAYS_LEAP,
            ESFAND => ESFAND_DAYS,
            _ => 0,
        }
    }
}
