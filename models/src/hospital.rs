// models/src/hospital.rs

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A healthcare facility. Staffing lives in `DocHospital` join records; the
/// per-specialty doctor tree a hospital page shows is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub image: String,
    pub rating: f32,
}

/// Payload for creating a hospital; the backing API assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    pub image: String,
    pub rating: f32,
}
