// console/src/directory/doctors.rs

use client::AdminApi;
use models::{Doctor, EntityId, NewDoctor};
use tracing::error;

use super::matches;

/// The doctors list view's state: the fetched catalog plus local search.
///
/// Write failures are logged and swallowed; the view resyncs on the next
/// refresh or quietly diverges until then.
#[derive(Debug, Default)]
pub struct DoctorsDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorsDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches the catalog; a failed fetch keeps the stale list.
    pub async fn refresh(&mut self, api: &dyn AdminApi) {
        match api.list_doctors().await {
            Ok(doctors) => self.doctors = doctors,
            Err(err) => error!("failed to fetch doctors: {err}"),
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Linear scan over name and specialty.
    pub fn search(&self, term: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| matches(&d.name, term) || matches(&d.specialty, term))
            .collect()
    }

    pub async fn create(&mut self, api: &dyn AdminApi, doctor: NewDoctor) {
        if let Err(err) = api.create_doctor(doctor).await {
            error!("failed to create doctor: {err}");
        }
        self.refresh(api).await;
    }

    pub async fn update(&mut self, api: &dyn AdminApi, doctor: Doctor) {
        if let Err(err) = api.update_doctor(&doctor).await {
            error!(doctor_id = doctor.id, "failed to update doctor: {err}");
        }
        self.refresh(api).await;
    }

    /// Optimistic delete: the local row goes first, the server owns
    /// cascading association cleanup. The caller confirms beforehand.
    pub async fn delete(&mut self, api: &dyn AdminApi, id: EntityId) {
        self.doctors.retain(|d| d.id != id);
        if let Err(err) = api.delete_doctor(id).await {
            error!(doctor_id = id, "failed to delete doctor: {err}");
        }
    }
}
