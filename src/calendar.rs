//! Month view over [`PersianDate`].

use crate::{DateError, Locale, PersianDate, PersianDateRange, RangeError, Weekday};

const TITLE_PATTERN: &str = "MM yyyy";

/// One month laid out in whole Saturday..Friday weeks.
///
/// The calendar keeps a selected date; the month shown is the month containing it.
/// Navigation moves the selection and keeps its day of month where the target month allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCalendar {
    selected: PersianDate,
}

impl MonthCalendar {
    pub const fn new(selected: PersianDate) -> Self {
        Self { selected }
    }

    /// Calendar showing the current month.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the system clock is outside the supported years.
    #[cfg(feature = "clock")]
    pub fn today() -> Result<Self, DateError> {
        PersianDate::today().map(Self::new)
    }

    pub const fn selected(&self) -> PersianDate {
        self.selected
    }

    pub const fn year(&self) -> u16 {
        self.selected.year()
    }

    pub const fn month(&self) -> u8 {
        self.selected.month()
    }

    /// True if `date` falls in the shown month, as opposed to the padding around it
    pub const fn in_month(&self, date: &PersianDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Month name and year, e.g. `دی 1397`
    pub fn title(&self, locale: Locale) -> String {
        self.selected.format_with_locale(TITLE_PATTERN, locale)
    }

    /// # Errors
    /// Never fails for a valid date.
    pub fn first_day(&self) -> Result<PersianDate, DateError> {
        self.selected.begin_of_month()
    }

    /// # Errors
    /// Never fails for a valid date.
    pub fn last_day(&self) -> Result<PersianDate, DateError> {
        self.selected.end_of_month()
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` past the last supported month.
    pub fn next_month(&self) -> Result<Self, DateError> {
        self.selected.goto_months(1).map(Self::new)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` before the first supported month.
    pub fn previous_month(&self) -> Result<Self, DateError> {
        self.selected.goto_months(-1).map(Self::new)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` past the last supported year.
    pub fn next_year(&self) -> Result<Self, DateError> {
        self.selected.goto_years(1).map(Self::new)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` before the first supported year.
    pub fn previous_year(&self) -> Result<Self, DateError> {
        self.selected.goto_years(-1).map(Self::new)
    }

    /// The shown span: the Saturday on or before the first day of the month through the
    /// Friday on or after its last day.
    ///
    /// # Errors
    /// Returns `RangeError::Date` when the padding weeks leave the supported years, which
    /// only happens in the first and last month.
    pub fn range(&self) -> Result<PersianDateRange, RangeError> {
        let start = self.first_day()?.begin_of_week()?;
        let end = self.last_day()?.end_of_week()?;
        PersianDateRange::new(start, end)
    }

    /// Every day of [`MonthCalendar::range`], a multiple of seven long.
    ///
    /// # Errors
    /// See [`MonthCalendar::range`].
    pub fn days(&self) -> Result<Vec<PersianDate>, RangeError> {
        Ok(self.range()?.days().collect())
    }

    /// [`MonthCalendar::days`] split into rows of seven, Saturday first.
    ///
    /// # Errors
    /// See [`MonthCalendar::range`].
    pub fn weeks(&self) -> Result<Vec<Vec<PersianDate>>, RangeError> {
        let days = self.days()?;
        Ok(days.chunks(Weekday::ALL.len()).map(<[PersianDate]>::to_vec).collect())
    }
}

impl From<PersianDate> for MonthCalendar {
    fn from(selected: PersianDate) -> Self {
        Self::new(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_YEAR;

    fn date(year: u16, month: u8, day: u8) -> PersianDate {
        PersianDate::new(year, month, day).expect("test date must be valid")
    }

    #[test]
    fn test_month_starting_on_saturday() {
        // 1397/10/01 is a Saturday, 1397/10/30 a Sunday
        let cal = MonthCalendar::new(date(1397, 10, 23));
        let days = cal.days().unwrap();

        assert_eq!(days.len(), 35);
        assert_eq!(days[0], date(1397, 10, 1));
        assert_eq!(days[34], date(1397, 11, 5));
        assert_eq!(days.iter().filter(|d| cal.in_month(d)).count(), 30);
    }

    #[test]
    fn test_month_padded_both_ends() {
        // 1404/01/01 is a Friday; 1403 is a leap year so Esfand has 30 days
        let cal = MonthCalendar::new(date(1404, 1, 1));
        let range = cal.range().unwrap();

        assert_eq!(range.start(), date(1403, 12, 25));
        assert_eq!(range.end(), date(1404, 2, 5));
        assert_eq!(range.day_count(), 42);
    }

    #[test]
    fn test_weeks_are_saturday_to_friday() {
        for selected in [date(1397, 10, 23), date(1404, 1, 1), date(1399, 12, 30)] {
            let cal = MonthCalendar::new(selected);
            let weeks = cal.weeks().unwrap();
            assert!(!weeks.is_empty());
            for week in &weeks {
                assert_eq!(week.len(), 7, "short week in {}", cal.title(Locale::English));
                assert_eq!(week[0].weekday(), Weekday::Saturday);
                assert_eq!(week[6].weekday(), Weekday::Friday);
            }
            let shown = weeks.iter().flatten().filter(|d| cal.in_month(d)).count();
            assert_eq!(shown, usize::from(selected.days_in_month()));
        }
    }

    #[test]
    fn test_first_and_last_day() {
        let cal = MonthCalendar::new(date(1399, 12, 5));
        assert_eq!(cal.first_day().unwrap(), date(1399, 12, 1));
        assert_eq!(cal.last_day().unwrap(), date(1399, 12, 30));
    }

    #[test]
    fn test_navigation() {
        let cal = MonthCalendar::new(date(1397, 6, 31));

        let next = cal.next_month().unwrap();
        assert_eq!(next.selected(), date(1397, 7, 30));
        assert_eq!((next.year(), next.month()), (1397, 7));

        let previous = MonthCalendar::new(date(1397, 1, 10)).previous_month().unwrap();
        assert_eq!(previous.selected(), date(1396, 12, 10));

        assert_eq!(cal.next_year().unwrap().selected(), date(1398, 6, 31));
        assert_eq!(cal.previous_year().unwrap().selected(), date(1396, 6, 31));
    }

    #[test]
    fn test_navigation_at_range_edges() {
        let first = MonthCalendar::new(date(1, 1, 1));
        assert_eq!(first.previous_month(), Err(DateError::OutOfRange));
        assert_eq!(first.previous_year(), Err(DateError::OutOfRange));

        let last = MonthCalendar::new(date(MAX_YEAR, 12, 1));
        assert_eq!(last.next_month(), Err(DateError::OutOfRange));
    }

    #[test]
    fn test_first_month_padding_leaves_range() {
        // 0001/01/01 is a Thursday, its Saturday is before the era
        let cal = MonthCalendar::new(date(1, 1, 1));
        assert_eq!(cal.range(), Err(RangeError::Date(DateError::OutOfRange)));
        assert!(cal.days().is_err());
    }

    #[test]
    fn test_title() {
        let cal = MonthCalendar::from(date(1397, 10, 23));
        assert_eq!(cal.title(Locale::Persian), "دی 1397");
        assert_eq!(cal.title(Locale::English), "Dey 1397");
    }

    #[cfg(feature = "clock")]
    #[test]
    fn test_today() {
        let cal = MonthCalendar::today().unwrap();
        assert!(cal.selected().is_today());
        assert!(cal.days().unwrap().iter().any(PersianDate::is_today));
    }
}
