//! Parsing and pattern formatting.

use crate::consts::{
    COMPACT_LEN, COMPACT_SEPARATORS, DEFAULT_PATTERN, LONG_PATTERN, SHORT_PATTERN,
};
use crate::{DateError, Locale, PersianDate};
use std::fmt;
use std::str::FromStr;

/// Pattern tokens, longest first where one is a prefix of another
const TOKENS: [(&str, Token); 8] = [
    ("yyyy", Token::Year),
    ("yy", Token::ShortYear),
    ("MM", Token::MonthName),
    ("mm", Token::PaddedMonth),
    ("m", Token::Month),
    ("DD", Token::WeekdayName),
    ("dd", Token::PaddedDay),
    ("d", Token::Day),
];

#[derive(Debug, Clone, Copy)]
enum Token {
    Year,
    ShortYear,
    MonthName,
    PaddedMonth,
    Month,
    WeekdayName,
    PaddedDay,
    Day,
}

impl PersianDate {
    /// Parses a date.
    ///
    /// Without a separator the text must be eight digits `yyyymmdd` once every `-` and `/` is
    /// removed, so `13971023`, `1397-10-23` and `1397/10/23` all read the same. With a
    /// separator the text must split into exactly three numbers, year first.
    ///
    /// # Errors
    /// Returns `DateError::Format` carrying the input for malformed text and for text naming a
    /// date that does not exist.
    pub fn parse(text: &str, separator: Option<char>) -> Result<Self, DateError> {
        let fields = match separator {
            None => Self::split_compact(text),
            Some(separator) => Self::split_separated(text, separator),
        };

        fields
            .and_then(|(year, month, day)| Self::new(year, month, day).ok())
            .ok_or_else(|| {
                tracing::debug!(input = text, ?separator, "rejected date text");
                DateError::Format {
                    input: text.to_owned(),
                }
            })
    }

    /// Like [`PersianDate::parse`], returning `None` instead of an error
    pub fn try_parse(text: &str, separator: Option<char>) -> Option<Self> {
        Self::parse(text, separator).ok()
    }

    fn split_compact(text: &str) -> Option<(u16, u8, u8)> {
        let digits: String = text
            .chars()
            .filter(|c| !COMPACT_SEPARATORS.contains(c))
            .collect();
        if digits.len() != COMPACT_LEN || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some((
            digits[0..4].parse().ok()?,
            digits[4..6].parse().ok()?,
            digits[6..8].parse().ok()?,
        ))
    }

    fn split_separated(text: &str, separator: char) -> Option<(u16, u8, u8)> {
        let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return None;
        };
        Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
    }

    /// Formats the date with Persian names. See [`PersianDate::format_with_locale`].
    pub fn format(&self, pattern: &str) -> String {
        self.format_with_locale(pattern, Locale::default())
    }

    /// Formats the date by replacing tokens in `pattern`:
    ///
    /// | token | output |
    /// |-------|--------|
    /// | `yyyy` | year, four digits |
    /// | `yy` | last two digits of the year |
    /// | `MM` | month name |
    /// | `mm` | month, two digits |
    /// | `m` | month |
    /// | `DD` | weekday name |
    /// | `dd` | day, two digits |
    /// | `d` | day |
    ///
    /// Everything else is copied as is. The pattern is scanned once, left to right, so names
    /// substituted into the output are never mistaken for tokens.
    pub fn format_with_locale(&self, pattern: &str, locale: Locale) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut rest = pattern;

        while !rest.is_empty() {
            if let Some((text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
                self.push_token(&mut out, *token, locale);
                rest = &rest[text.len()..];
            } else {
                let mut chars = rest.chars();
                out.extend(chars.next());
                rest = chars.as_str();
            }
        }
        out
    }

    fn push_token(&self, out: &mut String, token: Token, locale: Locale) {
        match token {
            Token::Year => out.push_str(&format!("{:04}", self.year())),
            Token::ShortYear => out.push_str(&format!("{:02}", self.year() % 100)),
            Token::MonthName => out.push_str(self.month_name(locale)),
            Token::PaddedMonth => out.push_str(&format!("{:02}", self.month())),
            Token::Month => out.push_str(&self.month().to_string()),
            Token::WeekdayName => out.push_str(self.weekday_name(locale)),
            Token::PaddedDay => out.push_str(&format!("{:02}", self.day())),
            Token::Day => out.push_str(&self.day().to_string()),
        }
    }

    /// `yyyymmdd`, e.g. `13971023`
    pub fn to_short_string(&self) -> String {
        self.format(SHORT_PATTERN)
    }

    /// `yyyy MM - DD dd`, e.g. `1397 دی - یک شنبه 23`
    pub fn to_long_string(&self) -> String {
        self.format(LONG_PATTERN)
    }
}

/// `yyyy/mm/dd`
impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_PATTERN))
    }
}

impl FromStr for PersianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> PersianDate {
        PersianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_compact() {
        assert_eq!(PersianDate::parse("13971023", None).unwrap(), date(1397, 10, 23));
        assert_eq!(PersianDate::parse("1397-10-23", None).unwrap(), date(1397, 10, 23));
        assert_eq!(PersianDate::parse("1397/10/23", None).unwrap(), date(1397, 10, 23));
        assert_eq!(PersianDate::parse("00010101", None).unwrap(), date(1, 1, 1));
    }

    #[test]
    fn test_parse_compact_rejects() {
        struct TestCase {
            input: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input: "bad-input",
                description: "not digits",
            },
            TestCase {
                input: "",
                description: "empty",
            },
            TestCase {
                input: "1397102",
                description: "seven digits",
            },
            TestCase {
                input: "139710230",
                description: "nine digits",
            },
            TestCase {
                input: "1397/1/23",
                description: "unpadded month",
            },
            TestCase {
                input: "1397 1023",
                description: "inner space",
            },
            TestCase {
                input: "13971323",
                description: "month thirteen",
            },
            TestCase {
                input: "13970731",
                description: "day past month end",
            },
            TestCase {
                input: "00000101",
                description: "year zero",
            },
            TestCase {
                input: "+1397102",
                description: "sign",
            },
        ];

        for case in &cases {
            let result = PersianDate::parse(case.input, None);
            assert_eq!(
                result,
                Err(DateError::Format {
                    input: case.input.to_owned()
                }),
                "Expected format error for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_parse_with_separator() {
        assert_eq!(
            PersianDate::parse("1397/10/23", Some('/')).unwrap(),
            date(1397, 10, 23)
        );
        assert_eq!(
            PersianDate::parse("1397.1.5", Some('.')).unwrap(),
            date(1397, 1, 5)
        );
        assert_eq!(
            PersianDate::parse(" 1397 - 01 - 05 ", Some('-')).unwrap(),
            date(1397, 1, 5)
        );
    }

    #[test]
    fn test_parse_with_separator_rejects() {
        for input in ["1397/10", "1397/10/23/1", "1397/x/23", "1397//23", "1397/7/31"] {
            assert!(
                matches!(
                    PersianDate::parse(input, Some('/')),
                    Err(DateError::Format { .. })
                ),
                "{input} should be rejected"
            );
        }
        // separator not present in the text
        assert!(PersianDate::parse("1397/10/23", Some('-')).is_err());
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(PersianDate::try_parse("13971023", None), Some(date(1397, 10, 23)));
        assert_eq!(PersianDate::try_parse("bad-input", None), None);
        assert_eq!(PersianDate::try_parse("1397-10-23", Some('-')), Some(date(1397, 10, 23)));
    }

    #[test]
    fn test_from_str() {
        let d: PersianDate = "1397/10/23".parse().unwrap();
        assert_eq!(d, date(1397, 10, 23));
        assert!("bad-input".parse::<PersianDate>().is_err());
    }

    #[test]
    fn test_format_error_message() {
        let err = PersianDate::parse("bad-input", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format: bad-input");
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1397, 10, 23).to_string(), "1397/10/23");
        assert_eq!(date(1397, 1, 5).to_string(), "1397/01/05");
        assert_eq!(date(12, 1, 5).to_string(), "0012/01/05");
    }

    #[test]
    fn test_short_and_long_strings() {
        let d = date(1397, 10, 23);
        assert_eq!(d.to_short_string(), "13971023");
        assert_eq!(d.to_long_string(), "1397 دی - یک شنبه 23");
    }

    #[test]
    fn test_format_tokens() {
        let d = date(1397, 4, 8);
        struct TestCase {
            pattern: &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                pattern: "yyyy",
                expected: "1397",
            },
            TestCase {
                pattern: "yy",
                expected: "97",
            },
            TestCase {
                pattern: "MM",
                expected: "تیر",
            },
            TestCase {
                pattern: "mm",
                expected: "04",
            },
            TestCase {
                pattern: "m",
                expected: "4",
            },
            TestCase {
                pattern: "DD",
                expected: "جمعه",
            },
            TestCase {
                pattern: "dd",
                expected: "08",
            },
            TestCase {
                pattern: "d",
                expected: "8",
            },
            TestCase {
                pattern: "d/m/yy",
                expected: "8/4/97",
            },
            TestCase {
                pattern: "yyy",
                expected: "97y",
            },
            TestCase {
                pattern: "[yyyy-mm-dd]",
                expected: "[1397-04-08]",
            },
            TestCase {
                pattern: "",
                expected: "",
            },
        ];

        for case in &cases {
            assert_eq!(d.format(case.pattern), case.expected, "pattern {:?}", case.pattern);
        }
    }

    #[test]
    fn test_format_does_not_rescan_names() {
        // "Mordad" and "Doshanbeh" contain token letters; they must come through untouched
        let d = date(1397, 5, 8);
        assert_eq!(d.weekday().to_string(), "Monday");
        assert_eq!(
            d.format_with_locale("DD dd MM yyyy", Locale::English),
            "Doshanbeh 08 Mordad 1397"
        );
    }

    #[test]
    fn test_format_short_year_for_small_years() {
        assert_eq!(date(5, 1, 1).format("yy"), "05");
        assert_eq!(date(1400, 1, 1).format("yy"), "00");
    }

    #[test]
    fn test_display_parse_round_trip() {
        let d = date(1399, 12, 30);
        assert_eq!(d.to_string().parse::<PersianDate>().unwrap(), d);
        assert_eq!(PersianDate::parse(&d.to_short_string(), None).unwrap(), d);
    }
}
