// models/src/doctor.rs

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A doctor in the platform catalog.
///
/// Owned by the catalog; doctor-hospital associations reference it by id and
/// never embed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: EntityId,
    pub name: String,
    pub specialty: String,
    pub image: String,
    pub experience: u32,
    pub rating: f32,
}

/// Payload for creating a doctor; the backing API assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub image: String,
    pub experience: u32,
    pub rating: f32,
}
