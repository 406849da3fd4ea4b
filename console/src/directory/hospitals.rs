// console/src/directory/hospitals.rs

use client::AdminApi;
use models::{DocHospital, Doctor, EntityId, Hospital, SpecialtyGroup};
use tracing::error;

use super::matches;
use crate::draft::HospitalDraft;
use crate::resolver;
use crate::submit;

/// The hospitals list view's state: the hospitals themselves plus the doctor
/// catalog and association records the resolver derives the specialty trees
/// from.
#[derive(Debug, Default)]
pub struct HospitalsDirectory {
    hospitals: Vec<Hospital>,
    doctors: Vec<Doctor>,
    associations: Vec<DocHospital>,
}

impl HospitalsDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches all three collections; each failed fetch keeps its stale
    /// slice.
    pub async fn refresh(&mut self, api: &dyn AdminApi) {
        match api.list_hospitals().await {
            Ok(hospitals) => self.hospitals = hospitals,
            Err(err) => error!("failed to fetch hospitals: {err}"),
        }
        match api.list_doctors().await {
            Ok(doctors) => self.doctors = doctors,
            Err(err) => error!("failed to fetch doctors: {err}"),
        }
        match api.list_associations().await {
            Ok(associations) => self.associations = associations,
            Err(err) => error!("failed to fetch doctor associations: {err}"),
        }
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Linear scan over name and address.
    pub fn search(&self, term: &str) -> Vec<&Hospital> {
        self.hospitals
            .iter()
            .filter(|h| matches(&h.name, term) || matches(&h.address, term))
            .collect()
    }

    /// The derived specialty tree for one hospital's card.
    pub fn specialty_groups(&self, hospital_id: EntityId) -> Vec<SpecialtyGroup> {
        resolver::specialty_groups(&self.doctors, &self.associations, hospital_id)
    }

    /// Seeds the edit form's draft from the same derivation the card
    /// renders, so an untouched form resubmits what was displayed.
    pub fn edit_draft(&self, hospital_id: EntityId) -> Option<HospitalDraft> {
        let hospital = self.hospitals.iter().find(|h| h.id == hospital_id)?;
        let groups = self.specialty_groups(hospital_id);
        Some(HospitalDraft::from_hospital(hospital, &groups))
    }

    /// Submits a create draft, then re-syncs from the server.
    pub async fn submit_create(&mut self, api: &dyn AdminApi, draft: &HospitalDraft) {
        if let Err(err) = submit::create_hospital(api, draft).await {
            error!("failed to create hospital: {err}");
        }
        self.refresh(api).await;
    }

    pub async fn submit_update(&mut self, api: &dyn AdminApi, id: EntityId, draft: &HospitalDraft) {
        if let Err(err) = submit::update_hospital(api, id, draft).await {
            error!(hospital_id = id, "failed to update hospital: {err}");
        }
        self.refresh(api).await;
    }

    /// Optimistic delete of the hospital and its locally-held associations;
    /// the server owns the real cascade. The caller confirms beforehand.
    pub async fn delete(&mut self, api: &dyn AdminApi, id: EntityId) {
        self.hospitals.retain(|h| h.id != id);
        self.associations.retain(|a| a.hospital_id != id);
        if let Err(err) = api.delete_hospital(id).await {
            error!(hospital_id = id, "failed to delete hospital: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use models::DoctorSchedule;

    fn hospital(id: EntityId, name: &str, address: &str) -> Hospital {
        Hospital {
            id,
            name: name.to_string(),
            address: address.to_string(),
            image: String::new(),
            rating: 4.8,
        }
    }

    fn doctor(id: EntityId, name: &str, specialty: &str) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            image: String::new(),
            experience: 10,
            rating: 4.5,
        }
    }

    fn association(
        id: EntityId,
        hospital_id: EntityId,
        doctor_id: EntityId,
        specialty: &str,
        fee: u32,
    ) -> DocHospital {
        DocHospital {
            id,
            hospital_id,
            doctor_id,
            specialty: specialty.to_string(),
            fee,
            schedule: DoctorSchedule::default(),
        }
    }

    fn canned() -> MockApi {
        MockApi {
            hospitals: vec![
                hospital(1, "Central Medical Center", "123 Healthcare Ave"),
                hospital(2, "Riverside Clinic", "9 Bank St"),
            ],
            doctors: vec![doctor(101, "Dr. Sarah Johnson", "Cardiology")],
            associations: vec![association(1, 1, 101, "Cardiology", 2000)],
            ..MockApi::default()
        }
    }

    #[tokio::test]
    async fn should_search_name_and_address() {
        let api = canned();
        let mut directory = HospitalsDirectory::new();
        directory.refresh(&api).await;

        let hits: Vec<&str> = directory
            .search("healthcare")
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(hits, ["Central Medical Center"]);
        assert_eq!(directory.search("c").len(), 2);
    }

    #[tokio::test]
    async fn should_seed_an_edit_draft_from_the_displayed_tree() {
        let api = canned();
        let mut directory = HospitalsDirectory::new();
        directory.refresh(&api).await;

        let draft = directory.edit_draft(1).unwrap();
        assert_eq!(draft.name, "Central Medical Center");
        assert!(draft.selected("Cardiology", 101));
        assert_eq!(draft.schedule(101).fee, 2000);

        assert!(directory.edit_draft(99).is_none());
    }

    #[tokio::test]
    async fn should_drop_hospital_and_its_associations_locally_on_delete() {
        let api = canned();
        let mut directory = HospitalsDirectory::new();
        directory.refresh(&api).await;

        directory.delete(&api, 1).await;
        assert_eq!(directory.hospitals().len(), 1);
        assert!(directory.specialty_groups(1).is_empty());
    }

    #[tokio::test]
    async fn should_resync_after_submitting_a_create_draft() {
        let api = canned();
        let mut directory = HospitalsDirectory::new();

        let mut draft = HospitalDraft::new();
        draft.name = "New Hope".to_string();
        draft.add_specialty("Cardiology");
        draft.toggle_doctor("Cardiology", 101, true);

        directory.submit_create(&api, &draft).await;
        assert_eq!(
            api.calls(),
            [
                "POST /hospitals",
                "POST /dochospitals",
                "GET /hospitals",
                "GET /doctors",
                "GET /dochospitals"
            ]
        );
    }
}
