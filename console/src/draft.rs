// console/src/draft.rs

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveTime;
use models::schedule::{default_end, default_start};
use models::{
    DoctorSchedule, Doctor, EntityId, Hospital, HospitalDoctor, NewDocHospital, NewHospital,
    SpecialtyGroup, Weekday,
};

/// One doctor's staged fee and schedule, shared by every specialty group
/// that selects the doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub days: BTreeSet<Weekday>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub fee: u32,
}

impl Default for ScheduleEntry {
    fn default() -> Self {
        ScheduleEntry {
            days: BTreeSet::new(),
            start_time: default_start(),
            end_time: default_end(),
            fee: 0,
        }
    }
}

impl ScheduleEntry {
    fn to_schedule(&self) -> DoctorSchedule {
        DoctorSchedule {
            days: self.days.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// In-progress edits to a hospital and its doctor associations, staged until
/// a single submission event and discarded on cancel.
///
/// Doctor schedules live in one table keyed by doctor id; specialty groups
/// hold doctor ids only, and every rendered copy reads through the table, so
/// an edit made under one specialty is visible under every specialty that
/// selected the doctor. The table outlives specialty removal on purpose:
/// re-adding a specialty and re-selecting a doctor restores the last-entered
/// inputs.
#[derive(Debug, Clone, Default)]
pub struct HospitalDraft {
    pub name: String,
    pub address: String,
    pub image: String,
    pub rating: f32,
    specialties: Vec<String>,
    selections: HashMap<String, Vec<EntityId>>,
    schedules: HashMap<EntityId, ScheduleEntry>,
}

impl HospitalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the draft from a hospital record and its resolved specialty
    /// groups, the edit-form path. Because the groups come from the same
    /// derivation the read view uses, opening and resubmitting an untouched
    /// form stages exactly what was displayed.
    pub fn from_hospital(hospital: &Hospital, groups: &[SpecialtyGroup]) -> Self {
        let mut draft = HospitalDraft {
            name: hospital.name.clone(),
            address: hospital.address.clone(),
            image: hospital.image.clone(),
            rating: hospital.rating,
            ..HospitalDraft::default()
        };
        for group in groups {
            draft.specialties.push(group.name.clone());
            let picks = draft.selections.entry(group.name.clone()).or_default();
            for staffed in &group.doctors {
                picks.push(staffed.doctor.id);
                draft.schedules.insert(
                    staffed.doctor.id,
                    ScheduleEntry {
                        days: staffed.schedule.days.clone(),
                        start_time: staffed.schedule.start_time,
                        end_time: staffed.schedule.end_time,
                        fee: staffed.hospital_fee,
                    },
                );
            }
        }
        draft
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn has_specialty(&self, label: &str) -> bool {
        self.specialties.iter().any(|s| s == label)
    }

    /// Stages a new specialty group. Empty and already-present labels are
    /// ignored; doctors already picked for the label (from an edit seed)
    /// carry over.
    pub fn add_specialty(&mut self, label: &str) {
        if label.is_empty() || self.has_specialty(label) {
            return;
        }
        self.specialties.push(label.to_string());
        self.selections.entry(label.to_string()).or_default();
    }

    /// Drops a staged group together with its picks. Per-doctor schedule
    /// entries are kept so a re-added specialty restores prior inputs.
    pub fn remove_specialty(&mut self, label: &str) {
        self.specialties.retain(|s| s != label);
        self.selections.remove(label);
    }

    /// Selects or deselects a doctor under a specialty. Selecting creates
    /// the doctor's schedule entry with form defaults if none exists yet; a
    /// doctor appears at most once per specialty.
    pub fn toggle_doctor(&mut self, specialty: &str, doctor_id: EntityId, selected: bool) {
        let picks = self.selections.entry(specialty.to_string()).or_default();
        if selected {
            self.schedules.entry(doctor_id).or_default();
            if !picks.contains(&doctor_id) {
                picks.push(doctor_id);
            }
        } else {
            picks.retain(|id| *id != doctor_id);
        }
    }

    pub fn selected(&self, specialty: &str, doctor_id: EntityId) -> bool {
        self.selections
            .get(specialty)
            .is_some_and(|picks| picks.contains(&doctor_id))
    }

    /// The staged entry backing a doctor's form inputs, defaults included.
    pub fn schedule(&self, doctor_id: EntityId) -> ScheduleEntry {
        self.schedules.get(&doctor_id).cloned().unwrap_or_default()
    }

    pub fn set_fee(&mut self, doctor_id: EntityId, fee: u32) {
        self.schedules.entry(doctor_id).or_default().fee = fee;
    }

    pub fn set_start_time(&mut self, doctor_id: EntityId, start_time: NaiveTime) {
        self.schedules.entry(doctor_id).or_default().start_time = start_time;
    }

    pub fn set_end_time(&mut self, doctor_id: EntityId, end_time: NaiveTime) {
        self.schedules.entry(doctor_id).or_default().end_time = end_time;
    }

    /// Flips one day in a doctor's availability set; toggling twice restores
    /// the set.
    pub fn toggle_day(&mut self, doctor_id: EntityId, day: Weekday) {
        let entry = self.schedules.entry(doctor_id).or_default();
        if !entry.days.remove(&day) {
            entry.days.insert(day);
        }
    }

    /// Derives the staged specialty tree for rendering, merging each picked
    /// doctor with their current table entry. Picks whose doctor is missing
    /// from the catalog are skipped, mirroring the resolver.
    pub fn specialty_groups(&self, doctors: &[Doctor]) -> Vec<SpecialtyGroup> {
        let by_id: HashMap<EntityId, &Doctor> = doctors.iter().map(|d| (d.id, d)).collect();
        self.specialties
            .iter()
            .map(|label| SpecialtyGroup {
                name: label.clone(),
                doctors: self
                    .selections
                    .get(label)
                    .into_iter()
                    .flatten()
                    .filter_map(|id| {
                        let entry = self.schedule(*id);
                        by_id.get(id).map(|doctor| HospitalDoctor {
                            doctor: (*doctor).clone(),
                            hospital_fee: entry.fee,
                            schedule: entry.to_schedule(),
                        })
                    })
                    .collect(),
            })
            .collect()
    }

    /// Scalar payload for the create call.
    pub fn new_hospital(&self) -> NewHospital {
        NewHospital {
            name: self.name.clone(),
            address: self.address.clone(),
            image: self.image.clone(),
            rating: self.rating,
        }
    }

    /// Whole-record replacement for the edit call. Associations are not part
    /// of this payload.
    pub fn scalar_hospital(&self, id: EntityId) -> Hospital {
        Hospital {
            id,
            name: self.name.clone(),
            address: self.address.clone(),
            image: self.image.clone(),
            rating: self.rating,
        }
    }

    /// One association payload per (specialty, picked doctor), in group then
    /// pick order.
    pub fn staged_associations(&self, hospital_id: EntityId) -> Vec<NewDocHospital> {
        let mut staged = Vec::new();
        for label in &self.specialties {
            let Some(picks) = self.selections.get(label) else {
                continue;
            };
            for doctor_id in picks {
                let entry = self.schedule(*doctor_id);
                staged.push(NewDocHospital {
                    hospital_id,
                    doctor_id: *doctor_id,
                    specialty: label.clone(),
                    fee: entry.fee,
                    schedule: entry.to_schedule(),
                });
            }
        }
        staged
    }
}
