// console/src/submit.rs

use client::{AdminApi, ApiError};
use models::{EntityId, Hospital};
use tracing::{error, info};

use crate::draft::HospitalDraft;

/// Creates the hospital record, then one association record per staged
/// (specialty, doctor) pair.
///
/// The association writes start only once the hospital id is known and run
/// one at a time, each awaited before the next. A failed write is logged and
/// skipped; the remaining writes are still attempted and the hospital itself
/// stays created. No retries, no rollback.
pub async fn create_hospital(
    api: &dyn AdminApi,
    draft: &HospitalDraft,
) -> Result<Hospital, ApiError> {
    let hospital = api.create_hospital(draft.new_hospital()).await?;
    info!(hospital_id = hospital.id, "created hospital");

    for association in draft.staged_associations(hospital.id) {
        let doctor_id = association.doctor_id;
        let specialty = association.specialty.clone();
        if let Err(err) = api.create_association(association).await {
            error!(
                doctor_id,
                specialty = %specialty,
                "failed to create doctor association: {err}"
            );
        }
    }

    Ok(hospital)
}

/// Replaces the hospital's scalar fields.
///
/// TODO: association edits staged in the draft are dropped here while the
/// create path persists them; confirm with product whether the edit form
/// should also write /dochospitals before changing this.
pub async fn update_hospital(
    api: &dyn AdminApi,
    id: EntityId,
    draft: &HospitalDraft,
) -> Result<Hospital, ApiError> {
    let hospital = api.update_hospital(&draft.scalar_hospital(id)).await?;
    info!(hospital_id = hospital.id, "updated hospital");
    Ok(hospital)
}
