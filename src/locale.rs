//! Static name and holiday tables.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Language of weekday and month names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum Locale {
    /// Names in Persian script
    #[default]
    Persian,
    /// Latin transliteration of the Persian names
    English,
}

impl Locale {
    /// Weekday names, Saturday first
    pub const fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Self::Persian => &PERSIAN_WEEKDAYS,
            Self::English => &ENGLISH_WEEKDAYS,
        }
    }

    /// Month names, Farvardin first
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Persian => &PERSIAN_MONTHS,
            Self::English => &ENGLISH_MONTHS,
        }
    }
}

const PERSIAN_WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یک شنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنج شنبه",
    "جمعه",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Shanbeh",
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
];

const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Description given to the weekly rest day
pub const WEEKLY_REST_DESCRIPTION: &str = "تعطیل هفتگی";

/// A national holiday that falls on the same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedHoliday {
    month: u8,
    day: u8,
    description: &'static str,
}

impl FixedHoliday {
    const fn new(month: u8, day: u8, description: &'static str) -> Self {
        Self {
            month,
            day,
            description,
        }
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn description(&self) -> &'static str {
        self.description
    }
}

/// Fixed-date holidays, at most one entry per (month, day), sorted by date.
///
/// Nowruz is the four official days Farvardin 1 to 4. Esfand 30 is the last day of a leap year,
/// not a holiday.
pub static HOLIDAYS: [FixedHoliday; 10] = [
    FixedHoliday::new(1, 1, "نوروز"),
    FixedHoliday::new(1, 2, "نوروز"),
    FixedHoliday::new(1, 3, "نوروز"),
    FixedHoliday::new(1, 4, "نوروز"),
    FixedHoliday::new(1, 12, "روز جمهوری اسلامی"),
    FixedHoliday::new(1, 13, "روز طبیعت"),
    FixedHoliday::new(3, 14, "رحلت امام خمینی"),
    FixedHoliday::new(3, 15, "قیام ۱۵ خرداد"),
    FixedHoliday::new(11, 22, "پیروزی انقلاب اسلامی"),
    FixedHoliday::new(12, 29, "ملی شدن صنعت نفت"),
];

/// Looks up the fixed holiday on the given month and day
pub fn fixed_holiday(month: u8, day: u8) -> Option<&'static FixedHoliday> {
    HOLIDAYS
        .binary_search_by_key(&(month, day), |h| (h.month, h.day))
        .ok()
        .map(|i| &HOLIDAYS[i])
}
