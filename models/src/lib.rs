// models/src/lib.rs

pub mod appointment;
pub mod association;
pub mod doctor;
pub mod errors;
pub mod hospital;
pub mod schedule;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, VisitType};
pub use association::{DocHospital, HospitalDoctor, NewDocHospital, SpecialtyGroup};
pub use doctor::{Doctor, NewDoctor};
pub use errors::ValidationError;
pub use hospital::{Hospital, NewHospital};
pub use schedule::{DoctorSchedule, Weekday};
pub use user::{Admin, NewAdmin, NewUser, Role, User};

/// Server-assigned entity identity, as the backing API hands it out.
pub type EntityId = i64;
