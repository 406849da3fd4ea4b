// models/src/appointment.rs

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::EntityId;
use crate::errors::ValidationError;
use crate::schedule::hhmm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitType {
    #[serde(rename = "consultation")]
    Consultation,
    #[serde(rename = "follow-up")]
    FollowUp,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::Consultation => "consultation",
            VisitType::FollowUp => "follow-up",
        }
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisitType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consultation" => Ok(VisitType::Consultation),
            "follow-up" => Ok(VisitType::FollowUp),
            _ => Err(ValidationError::UnknownVisitType(s.to_string())),
        }
    }
}

/// A booked visit.
///
/// `fee` is a snapshot taken at booking time; later changes to the
/// association's fee do not touch existing appointments. The doctor and
/// hospital names are denormalized display copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: EntityId,
    pub user_id: EntityId,
    pub doctor_id: EntityId,
    pub doctor_name: String,
    pub hospital_id: EntityId,
    pub hospital_name: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub visit_type: VisitType,
    pub fee: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Appointment {
        Appointment {
            id: 2,
            user_id: 1,
            doctor_id: 102,
            doctor_name: "Dr. Michael Chen".to_string(),
            hospital_id: 1,
            hospital_name: "Central Medical Center".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            status: AppointmentStatus::Completed,
            visit_type: VisitType::FollowUp,
            fee: 1000,
        }
    }

    #[test]
    fn should_serialize_wire_field_names() {
        let json = serde_json::to_value(fixture()).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["doctorName"], "Dr. Michael Chen");
        assert_eq!(json["date"], "2024-03-20");
        assert_eq!(json["time"], "14:30");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["type"], "follow-up");
    }

    #[test]
    fn should_round_trip_through_json() {
        let appointment = fixture();
        let json = serde_json::to_string(&appointment).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appointment);
    }

    #[test]
    fn should_parse_status_and_visit_type_labels() {
        assert_eq!("scheduled".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Scheduled));
        assert_eq!("follow-up".parse::<VisitType>(), Ok(VisitType::FollowUp));
        assert_eq!(
            "walk-in".parse::<VisitType>(),
            Err(ValidationError::UnknownVisitType("walk-in".to_string()))
        );
    }
}
