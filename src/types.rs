use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// Error type for birthdate derivation.
///
/// A `CprNumber` constructs successfully from any clean 9- or 10-digit
/// numeral, so the encoded date triple may still be invalid. These errors
/// surface only from the birthdate query, never from number construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the range a CPR number can encode.
    #[error("Invalid year: {} (must be {}-{})", .0, MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),

    /// Month outside 1-12.
    #[error("Invalid month: {} (must be 1-{})", .0, MAX_MONTH)]
    InvalidMonth(u8),

    /// Day invalid for the given year and month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR`
/// (1858..=2057), the span the CPR century rule can produce.
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is outside that range.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year,
            month,
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(DateError::InvalidDay {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        if value < MIN_DAY {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        // Since we validated value >= MIN_DAY (which is 1), value is non-zero
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A concrete calendar date reconstructed from a CPR number.
/// All components are validated on construction, including leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    year: Year,
    month: Month,
    day: Day,
}

impl BirthDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns the `DateError` for the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year component (as u16 for convenience)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

impl TryFrom<(u16, u8, u8)> for BirthDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(MIN_YEAR).is_ok());
        assert!(Year::new(1901).is_ok());
        assert!(Year::new(2005).is_ok());
        assert!(Year::new(MAX_YEAR).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_outside_cpr_range() {
        let result = Year::new(1857);
        assert!(matches!(result, Err(DateError::InvalidYear(1857))));

        let result = Year::new(2058);
        assert!(matches!(result, Err(DateError::InvalidYear(2058))));
    }

    #[test]
    fn test_year_get() {
        let year = Year::new(1991).unwrap();
        assert_eq!(year.get(), 1991);
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(1991).unwrap();
        assert_eq!(year.to_string(), "1991");
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 1991.try_into().unwrap();
        assert_eq!(year.get(), 1991);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = 9999.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_into_u16() {
        let year = Year::new(1991).unwrap();
        let value: u16 = year.into();
        assert_eq!(value, 1991);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1991).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1991");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(13);
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));

        let result = Month::new(255);
        assert!(matches!(result, Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 1991, 1).is_ok());
        assert!(Day::new(31, 1991, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 1991, 2).is_ok());
        assert!(Day::new(29, 1991, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2000, 2).is_ok());
        assert!(Day::new(30, 2000, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 1991, 4).is_ok());
        assert!(Day::new(31, 1991, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, 1991, 1);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_invalid_too_large() {
        // 32 is invalid for January
        let result = Day::new(32, 1991, 1);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 1991,
                month: 1,
                day: 32
            })
        ));
    }

    #[test]
    fn test_day_display() {
        let day = Day::new(15, 1991, 8).unwrap();
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_try_from_u8() {
        // Valid day (context-free validation)
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        // Zero is invalid
        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_birth_date_new_valid() {
        let date = BirthDate::new(1901, 1, 1).unwrap();
        assert_eq!(date.year(), 1901);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_birth_date_new_invalid_month() {
        let result = BirthDate::new(1991, 13, 1);
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_birth_date_new_invalid_day() {
        let result = BirthDate::new(1991, 2, 30);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_birth_date_leap_years() {
        // 2000 is a leap year (divisible by 400)
        assert!(BirthDate::new(2000, 2, 29).is_ok());

        // 1900 is not (divisible by 100 but not 400)
        let result = BirthDate::new(1900, 2, 29);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_birth_date_display() {
        let date = BirthDate::new(1901, 1, 1).unwrap();
        assert_eq!(date.to_string(), "1901-01-01");

        let date = BirthDate::new(2005, 12, 31).unwrap();
        assert_eq!(date.to_string(), "2005-12-31");
    }

    #[test]
    fn test_birth_date_ordering() {
        let d1 = BirthDate::new(1901, 1, 1).unwrap();
        let d2 = BirthDate::new(1901, 1, 2).unwrap();
        let d3 = BirthDate::new(1901, 2, 1).unwrap();
        let d4 = BirthDate::new(2005, 1, 1).unwrap();
        assert!(d1 < d2);
        assert!(d2 < d3);
        assert!(d3 < d4);
    }

    #[test]
    fn test_birth_date_typed_accessors() {
        let date = BirthDate::new(1991, 8, 15).unwrap();
        assert_eq!(date.year_typed().get(), 1991);
        assert_eq!(date.month_typed().get(), 8);
        assert_eq!(date.day_typed().get(), 15);
    }

    #[test]
    fn test_birth_date_try_from_tuple() {
        let date: BirthDate = (1991, 8, 15).try_into().unwrap();
        assert_eq!(date.to_string(), "1991-08-15");

        let result: Result<BirthDate, _> = (1991, 2, 30).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(
                days_in_month(1991, month),
                31,
                "Month {month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(
                days_in_month(1991, month),
                30,
                "Month {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(1991, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(
            days_in_month(1900, 2),
            28,
            "Century year not divisible by 400"
        );
    }
}
