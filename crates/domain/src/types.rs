// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::weekday_from_index;
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// The set of weekdays that are always off.
///
/// Stored as a bitmask indexed by days from Sunday (bit 0 = Sunday,
/// bit 6 = Saturday). Serialized as the sorted list of those indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct WeekendDays {
    mask: u8,
}

impl WeekendDays {
    /// Creates a weekend definition with no days off at all.
    #[must_use]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    /// Creates a weekend definition from a list of weekdays.
    #[must_use]
    pub fn from_weekdays<I>(weekdays: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mask: u8 = weekdays
            .into_iter()
            .fold(0_u8, |acc, day| acc | (1 << day.number_days_from_sunday()));
        Self { mask }
    }

    /// Creates a weekend definition from weekday indices (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekday` if any index is greater than 6.
    pub fn from_indices(indices: &[u8]) -> Result<Self, DomainError> {
        let weekdays: Vec<Weekday> = indices
            .iter()
            .map(|index| weekday_from_index(*index))
            .collect::<Result<_, _>>()?;
        Ok(Self::from_weekdays(weekdays))
    }

    /// Returns whether the given weekday is part of the weekend.
    #[must_use]
    pub const fn contains(&self, weekday: Weekday) -> bool {
        self.mask & (1 << weekday.number_days_from_sunday()) != 0
    }

    /// Returns whether the given date falls on a weekend day.
    #[must_use]
    pub const fn is_weekend(&self, date: Date) -> bool {
        self.contains(date.weekday())
    }

    /// Returns the weekday indices (0 = Sunday) in ascending order.
    #[must_use]
    pub fn indices(&self) -> Vec<u8> {
        (0_u8..7).filter(|bit| self.mask & (1 << bit) != 0).collect()
    }

    /// Returns the number of weekend days per week.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Returns whether no weekday is part of the weekend.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl Default for WeekendDays {
    fn default() -> Self {
        Self::from_weekdays([Weekday::Saturday, Weekday::Sunday])
    }
}

impl From<WeekendDays> for Vec<u8> {
    fn from(days: WeekendDays) -> Self {
        days.indices()
    }
}

impl TryFrom<Vec<u8>> for WeekendDays {
    type Error = DomainError;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_indices(&indices)
    }
}

/// A dated, named entry of an external calendar (public holiday or
/// company day off).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedDate {
    /// The calendar date.
    pub date: Date,
    /// The display name (e.g., "Canada Day").
    pub name: String,
}

impl NamedDate {
    /// Creates a new `NamedDate`.
    #[must_use]
    pub fn new(date: Date, name: &str) -> Self {
        Self {
            date,
            name: name.to_string(),
        }
    }
}

/// One date of the planning window with its fixed and derived attributes.
///
/// The fixed attributes (weekend, public holiday, company day off) are
/// independent flags and are set once by the classifier. The CTO flag is
/// only ever set on a day that has none of them, including when a day is
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarDayRecord")]
#[allow(clippy::struct_excessive_bools)]
pub struct CalendarDay {
    /// The calendar date.
    date: Date,
    /// Whether the date falls on a configured weekend day.
    is_weekend: bool,
    /// Whether the date is a public holiday.
    is_public_holiday: bool,
    /// The name of the public holiday, if any.
    holiday_name: Option<String>,
    /// Whether the employer has mandated this date off.
    is_company_day_off: bool,
    /// The name of the company day off, if any.
    company_day_name: Option<String>,
    /// Whether a CTO day has been spent on this date.
    is_cto: bool,
    /// Whether this date is a member of a detected break.
    is_part_of_break: bool,
}

impl CalendarDay {
    /// Creates a plain working day.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self {
            date,
            is_weekend: false,
            is_public_holiday: false,
            holiday_name: None,
            is_company_day_off: false,
            company_day_name: None,
            is_cto: false,
            is_part_of_break: false,
        }
    }

    /// Flags this day as a weekend day.
    #[must_use]
    pub fn with_weekend(mut self, is_weekend: bool) -> Self {
        self.is_weekend = is_weekend;
        self
    }

    /// Flags this day as a named public holiday.
    #[must_use]
    pub fn with_holiday(mut self, name: &str) -> Self {
        self.is_public_holiday = true;
        self.holiday_name = Some(name.to_string());
        self
    }

    /// Flags this day as a named company day off.
    #[must_use]
    pub fn with_company_day_off(mut self, name: &str) -> Self {
        self.is_company_day_off = true;
        self.company_day_name = Some(name.to_string());
        self
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns whether this day is a weekend day.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    /// Returns whether this day is a public holiday.
    #[must_use]
    pub const fn is_public_holiday(&self) -> bool {
        self.is_public_holiday
    }

    /// Returns the public holiday name, if any.
    #[must_use]
    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday_name.as_deref()
    }

    /// Returns whether this day is a company day off.
    #[must_use]
    pub const fn is_company_day_off(&self) -> bool {
        self.is_company_day_off
    }

    /// Returns the company day off name, if any.
    #[must_use]
    pub fn company_day_name(&self) -> Option<&str> {
        self.company_day_name.as_deref()
    }

    /// Returns whether a CTO day is spent on this day.
    #[must_use]
    pub const fn is_cto(&self) -> bool {
        self.is_cto
    }

    /// Returns whether this day belongs to a detected break.
    #[must_use]
    pub const fn is_part_of_break(&self) -> bool {
        self.is_part_of_break
    }

    /// Returns whether this day is off for a reason other than CTO.
    #[must_use]
    pub const fn is_fixed_off(&self) -> bool {
        self.is_weekend || self.is_public_holiday || self.is_company_day_off
    }

    /// Returns whether this day is off for any reason.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.is_fixed_off() || self.is_cto
    }

    /// Returns whether a CTO day could still be spent on this day.
    #[must_use]
    pub const fn is_working_day(&self) -> bool {
        !self.is_off()
    }

    /// Spends a CTO day on this day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotAWorkingDay` if the day is already a weekend,
    /// public holiday, or company day off.
    pub fn mark_cto(&mut self) -> Result<(), DomainError> {
        if self.is_fixed_off() {
            return Err(DomainError::NotAWorkingDay { date: self.date });
        }
        self.is_cto = true;
        Ok(())
    }

    /// Returns a previously spent CTO day.
    pub const fn clear_cto(&mut self) {
        self.is_cto = false;
    }

    /// Records whether this day is a member of a detected break.
    pub const fn set_part_of_break(&mut self, is_part_of_break: bool) {
        self.is_part_of_break = is_part_of_break;
    }
}

/// Unchecked wire shape of a `CalendarDay`.
#[derive(Deserialize)]
#[allow(clippy::struct_excessive_bools)]
struct CalendarDayRecord {
    date: Date,
    is_weekend: bool,
    is_public_holiday: bool,
    holiday_name: Option<String>,
    is_company_day_off: bool,
    company_day_name: Option<String>,
    is_cto: bool,
    is_part_of_break: bool,
}

impl TryFrom<CalendarDayRecord> for CalendarDay {
    type Error = DomainError;

    fn try_from(record: CalendarDayRecord) -> Result<Self, Self::Error> {
        let mut day: Self = Self {
            date: record.date,
            is_weekend: record.is_weekend,
            is_public_holiday: record.is_public_holiday,
            holiday_name: record.holiday_name,
            is_company_day_off: record.is_company_day_off,
            company_day_name: record.company_day_name,
            is_cto: false,
            is_part_of_break: record.is_part_of_break,
        };
        if record.is_cto {
            day.mark_cto()?;
        }
        Ok(day)
    }
}
