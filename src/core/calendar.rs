use crate::domain::model::Day;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Saturday and Sunday are weekend, the other five days are weekdays.
pub fn day_type(day: Day) -> DayType {
    if day.is_weekend() {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}
