// models/src/schedule.rs

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The seven canonical weekdays, ordered Monday through Sunday so day sets
/// always render in week order regardless of the order days were picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            _ => Err(ValidationError::UnknownWeekday(s.to_string())),
        }
    }
}

/// Form default shown before any schedule edit.
pub fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

pub fn default_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}

/// Weekly availability carried by a doctor-hospital association.
///
/// `start_time <= end_time` is expected but not enforced anywhere; the
/// backing API stores whatever the form submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSchedule {
    pub days: BTreeSet<Weekday>,
    #[serde(rename = "startTime", with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(rename = "endTime", with = "hhmm")]
    pub end_time: NaiveTime,
}

impl Default for DoctorSchedule {
    fn default() -> Self {
        DoctorSchedule {
            days: BTreeSet::new(),
            start_time: default_start(),
            end_time: default_end(),
        }
    }
}

/// Wall-clock times travel as "HH:MM" strings on the wire.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_canonical_weekday_names() {
        for day in Weekday::ALL {
            assert_eq!(day.as_str().parse::<Weekday>(), Ok(day));
        }
    }

    #[test]
    fn should_reject_unknown_weekday() {
        let parsed = "Funday".parse::<Weekday>();
        assert_eq!(
            parsed,
            Err(ValidationError::UnknownWeekday("Funday".to_string()))
        );
    }

    #[test]
    fn should_default_to_nine_to_five_with_no_days() {
        let schedule = DoctorSchedule::default();
        assert!(schedule.days.is_empty());
        assert_eq!(schedule.start_time, default_start());
        assert_eq!(schedule.end_time, default_end());
    }

    #[test]
    fn should_serialize_times_as_hh_mm() {
        let mut schedule = DoctorSchedule::default();
        schedule.days.insert(Weekday::Wednesday);
        schedule.days.insert(Weekday::Monday);

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "17:00");
        // Day sets serialize in week order, not insertion order.
        assert_eq!(
            json["days"],
            serde_json::json!(["Monday", "Wednesday"])
        );
    }

    #[test]
    fn should_deserialize_wire_schedule() {
        let schedule: DoctorSchedule = serde_json::from_str(
            r#"{"days":["Tuesday"],"startTime":"10:30","endTime":"14:00"}"#,
        )
        .unwrap();
        assert!(schedule.days.contains(&Weekday::Tuesday));
        assert_eq!(schedule.start_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(schedule.end_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    }
}
