//! Operating-hours gate for the light.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

use crate::config;

/// Immutable operating-hours policy, built once at startup.
#[derive(Clone, Debug)]
pub struct Schedule {
    /// When false the gate is wide open.
    pub enabled: bool,
    /// Start of the allowed window, inclusive.
    pub start: NaiveTime,
    /// End of the allowed window, inclusive.
    pub end: NaiveTime,
    /// Days on which the window applies.
    pub weekdays: Vec<Weekday>,
}

#[derive(Debug)]
pub enum ScheduleError {
    /// A time string that is not HH:MM.
    InvalidTime(String),
    /// A weekday name chrono does not recognize.
    InvalidWeekday(String),
}

impl Schedule {
    /// Build the schedule from its raw configuration form.
    pub fn from_config(config: &config::ScheduleConfig) -> Result<Schedule, ScheduleError> {
        let start = parse_time(&config.start)?;
        let end = parse_time(&config.end)?;

        let mut weekdays = Vec::with_capacity(config.weekdays.len());
        for day in &config.weekdays {
            let weekday = day
                .parse::<Weekday>()
                .map_err(|_| ScheduleError::InvalidWeekday(day.clone()))?;
            weekdays.push(weekday);
        }

        Ok(Schedule {
            enabled: config.enabled,
            start,
            end,
            weekdays,
        })
    }

    /// Whether control requests are honored at the given moment.
    ///
    /// The caller supplies `now` explicitly, so the gate has no clock of
    /// its own. Both window bounds are inclusive.
    pub fn allows(&self, now: NaiveDateTime) -> bool {
        if !self.enabled {
            return true;
        }
        let time = now.time();
        self.weekdays.contains(&now.weekday()) && self.start <= time && time <= self.end
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ScheduleError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn workday_schedule() -> Schedule {
        Schedule {
            enabled: true,
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }

    // 2024-01-01 is a Monday, 2024-01-06 a Saturday.
    fn monday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn disabled_schedule_allows_everything() {
        let schedule = Schedule {
            enabled: false,
            ..workday_schedule()
        };
        let saturday_night = NaiveDate::from_ymd_opt(2024, 1, 6)
            .unwrap()
            .and_hms_opt(3, 0, 0)
            .unwrap();
        assert!(schedule.allows(saturday_night));
        assert!(schedule.allows(monday(12, 0)));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let schedule = workday_schedule();
        assert!(schedule.allows(monday(8, 0)));
        assert!(schedule.allows(monday(17, 0)));
        assert!(!schedule.allows(monday(7, 59)));
        assert!(!schedule.allows(monday(17, 1)));
    }

    #[test]
    fn weekend_is_blocked_even_inside_the_window() {
        let schedule = workday_schedule();
        let saturday_noon = NaiveDate::from_ymd_opt(2024, 1, 6)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!(!schedule.allows(saturday_noon));
    }

    #[test]
    fn builds_from_config_strings() {
        let raw = config::ScheduleConfig {
            enabled: true,
            start: "08:00".to_string(),
            end: "17:00".to_string(),
            weekdays: vec!["mon".to_string(), "friday".to_string()],
            check_interval_secs: None,
        };
        let schedule = Schedule::from_config(&raw).unwrap();
        assert_eq!(schedule.start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(schedule.end, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(schedule.weekdays, vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn rejects_malformed_config() {
        let mut raw = config::ScheduleConfig {
            enabled: true,
            start: "8 o'clock".to_string(),
            end: "17:00".to_string(),
            weekdays: vec![],
            check_interval_secs: None,
        };
        match Schedule::from_config(&raw) {
            Err(ScheduleError::InvalidTime(_)) => {}
            other => panic!("expected time error, got {:?}", other),
        }

        raw.start = "08:00".to_string();
        raw.weekdays = vec!["noday".to_string()];
        match Schedule::from_config(&raw) {
            Err(ScheduleError::InvalidWeekday(_)) => {}
            other => panic!("expected weekday error, got {:?}", other),
        }
    }
}
