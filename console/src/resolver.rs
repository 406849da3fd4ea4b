// console/src/resolver.rs

use std::collections::HashMap;

use models::{DocHospital, Doctor, EntityId, HospitalDoctor, SpecialtyGroup};
use tracing::debug;

/// Rebuilds the `hospital -> specialty -> doctors` tree a hospital page
/// renders from the flat association records.
///
/// Pure and deterministic: specialty groups appear in first-occurrence order
/// among the hospital's associations and doctors keep association order, so
/// the read view and the edit form derive the identical tree and an edit
/// round-trips losslessly. An association whose doctor id does not resolve
/// in the catalog is dropped without surfacing an error.
pub fn specialty_groups(
    doctors: &[Doctor],
    associations: &[DocHospital],
    hospital_id: EntityId,
) -> Vec<SpecialtyGroup> {
    let by_id: HashMap<EntityId, &Doctor> =
        doctors.iter().map(|doctor| (doctor.id, doctor)).collect();

    let mut groups: Vec<SpecialtyGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for association in associations.iter().filter(|a| a.hospital_id == hospital_id) {
        let Some(doctor) = by_id.get(&association.doctor_id) else {
            debug!(
                doctor_id = association.doctor_id,
                "skipping association with unknown doctor"
            );
            continue;
        };

        let slot = *index
            .entry(association.specialty.clone())
            .or_insert_with(|| {
                groups.push(SpecialtyGroup {
                    name: association.specialty.clone(),
                    doctors: Vec::new(),
                });
                groups.len() - 1
            });

        groups[slot].doctors.push(HospitalDoctor {
            doctor: (*doctor).clone(),
            hospital_fee: association.fee,
            schedule: association.schedule.clone(),
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{DoctorSchedule, Weekday};

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

    fn fixture() -> (Vec<Doctor>, Vec<DocHospital>) {
        let doctors = vec![
            doctor(101, "Dr. Sarah Johnson", "Cardiology"),
            doctor(102, "Dr. Michael Chen", "Cardiology"),
            doctor(103, "Dr. Emily Park", "Neurology"),
        ];
        let associations = vec![
            association(1, 1, 101, "Cardiology", 2000),
            association(2, 1, 103, "Neurology", 1800),
            association(3, 1, 102, "Cardiology", 2500),
            association(4, 2, 101, "Cardiology", 3000),
        ];
        (doctors, associations)
    }

    #[test]
    fn should_group_by_first_occurrence_and_keep_association_order() {
        let (doctors, associations) = fixture();
        let groups = specialty_groups(&doctors, &associations, 1);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Cardiology");
        assert_eq!(groups[1].name, "Neurology");

        let names: Vec<&str> = groups[0]
            .doctors
            .iter()
            .map(|d| d.doctor.name.as_str())
            .collect();
        assert_eq!(names, ["Dr. Sarah Johnson", "Dr. Michael Chen"]);
        assert_eq!(groups[0].doctors[0].hospital_fee, 2000);
        assert_eq!(groups[0].doctors[1].hospital_fee, 2500);
    }

    #[test]
    fn should_only_include_the_target_hospital() {
        let (doctors, associations) = fixture();
        let groups = specialty_groups(&doctors, &associations, 2);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].doctors.len(), 1);
        assert_eq!(groups[0].doctors[0].hospital_fee, 3000);
    }

    #[test]
    fn should_be_idempotent() {
        let (doctors, associations) = fixture();
        let first = specialty_groups(&doctors, &associations, 1);
        let second = specialty_groups(&doctors, &associations, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn should_silently_drop_unresolvable_doctor_references() {
        let (doctors, mut associations) = fixture();
        associations.push(association(5, 1, 999, "Cardiology", 100));

        let groups = specialty_groups(&doctors, &associations, 1);
        let total: usize = groups.iter().map(|g| g.doctors.len()).sum();
        assert_eq!(total, 3);
        assert!(
            groups
                .iter()
                .flat_map(|g| &g.doctors)
                .all(|d| d.doctor.id != 999)
        );
    }

    #[test]
    fn should_merge_association_schedule_onto_the_doctor() {
        let (doctors, mut associations) = fixture();
        associations[0].schedule.days.insert(Weekday::Monday);
        associations[0].schedule.days.insert(Weekday::Friday);

        let groups = specialty_groups(&doctors, &associations, 1);
        let staffed = &groups[0].doctors[0];
        assert!(staffed.schedule.days.contains(&Weekday::Monday));
        assert!(staffed.schedule.days.contains(&Weekday::Friday));
        // The doctor's catalog fields ride along untouched.
        assert_eq!(staffed.doctor.specialty, "Cardiology");
    }
}
