// models/src/association.rs

use serde::{Deserialize, Serialize};

use crate::{Doctor, DoctorSchedule, EntityId};

/// The doctor <-> hospital <-> specialty join record, the one stored shape
/// for hospital staffing.
///
/// `specialty` is stored independently of `Doctor::specialty`, and the
/// `(hospital_id, doctor_id, specialty)` triple is not checked for
/// uniqueness before insert; duplicate submissions create duplicate records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocHospital {
    pub id: EntityId,
    pub hospital_id: EntityId,
    pub doctor_id: EntityId,
    pub specialty: String,
    pub fee: u32,
    pub schedule: DoctorSchedule,
}

/// Payload for creating an association; the backing API assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocHospital {
    pub hospital_id: EntityId,
    pub doctor_id: EntityId,
    pub specialty: String,
    pub fee: u32,
    pub schedule: DoctorSchedule,
}

/// A catalog doctor merged with one association's hospital-specific fee and
/// schedule, as a hospital page displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalDoctor {
    #[serde(flatten)]
    pub doctor: Doctor,
    #[serde(rename = "hospitalFee")]
    pub hospital_fee: u32,
    pub schedule: DoctorSchedule,
}

/// A hospital's doctors grouped under one specialty label; resolver output,
/// consumed by both the read view and the edit form's draft seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyGroup {
    pub name: String,
    pub doctors: Vec<HospitalDoctor>,
}
