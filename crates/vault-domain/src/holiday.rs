//! Static catalog of fixed-date holidays offered on the milestones step.

use serde::Serialize;

use crate::calendar::MonthDay;

/// Read-only reference entry; never created at runtime.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HolidayOption {
    pub id: &'static str,
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
}

impl HolidayOption {
    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month, self.day)
    }
}

pub const HOLIDAY_CATALOG: &[HolidayOption] = &[
    HolidayOption {
        id: "new_years_day",
        name: "New Year's Day",
        month: 1,
        day: 1,
    },
    HolidayOption {
        id: "valentines_day",
        name: "Valentine's Day",
        month: 2,
        day: 14,
    },
    HolidayOption {
        id: "st_patricks_day",
        name: "St. Patrick's Day",
        month: 3,
        day: 17,
    },
    HolidayOption {
        id: "independence_day",
        name: "Independence Day",
        month: 7,
        day: 4,
    },
    HolidayOption {
        id: "halloween",
        name: "Halloween",
        month: 10,
        day: 31,
    },
    HolidayOption {
        id: "christmas_eve",
        name: "Christmas Eve",
        month: 12,
        day: 24,
    },
    HolidayOption {
        id: "christmas",
        name: "Christmas",
        month: 12,
        day: 25,
    },
    HolidayOption {
        id: "new_years_eve",
        name: "New Year's Eve",
        month: 12,
        day: 31,
    },
];

pub fn holiday_by_id(id: &str) -> Option<&'static HolidayOption> {
    HOLIDAY_CATALOG.iter().find(|holiday| holiday.id == id)
}

/// First catalog holiday falling on `date`.
///
/// Two holidays sharing a date would be ambiguous here; the first entry wins.
pub fn holiday_on(date: MonthDay) -> Option<&'static HolidayOption> {
    HOLIDAY_CATALOG
        .iter()
        .find(|holiday| holiday.month_day() == date)
}
