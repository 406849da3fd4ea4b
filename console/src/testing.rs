// console/src/testing.rs

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use client::{AdminApi, ApiError, StatusCode};
use models::{
    Admin, Appointment, DocHospital, Doctor, EntityId, Hospital, NewAdmin, NewDocHospital,
    NewDoctor, NewHospital, NewUser, User,
};

pub(crate) fn server_error(message: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.to_string(),
    }
}

/// Canned-data `AdminApi` double that records every call in order.
#[derive(Default)]
pub(crate) struct MockApi {
    pub doctors: Vec<Doctor>,
    pub hospitals: Vec<Hospital>,
    pub associations: Vec<DocHospital>,
    pub users: Vec<User>,
    pub appointments: Vec<Appointment>,
    pub admins: Vec<Admin>,
    /// Id handed back by `create_hospital`.
    pub created_hospital_id: EntityId,
    /// 1-based ordinals of `create_association` calls that fail.
    pub failing_association_calls: Vec<usize>,
    /// When set, every delete call fails after being recorded.
    pub fail_deletes: bool,
    pub calls: Mutex<Vec<String>>,
    pub created_associations: Mutex<Vec<NewDocHospital>>,
    pub(crate) association_calls: AtomicUsize,
}

impl MockApi {
    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_associations(&self) -> Vec<NewDocHospital> {
        self.created_associations.lock().unwrap().clone()
    }

    fn delete(&self, call: String) -> Result<(), ApiError> {
        self.record(call);
        if self.fail_deletes {
            return Err(server_error("Something went wrong"));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminApi for MockApi {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.record("GET /doctors");
        Ok(self.doctors.clone())
    }

    async fn create_doctor(&self, doctor: NewDoctor) -> Result<Doctor, ApiError> {
        self.record("POST /doctors");
        Ok(Doctor {
            id: 1,
            name: doctor.name,
            specialty: doctor.specialty,
            image: doctor.image,
            experience: doctor.experience,
            rating: doctor.rating,
        })
    }

    async fn update_doctor(&self, doctor: &Doctor) -> Result<Doctor, ApiError> {
        self.record(format!("PUT /doctors/{}", doctor.id));
        Ok(doctor.clone())
    }

    async fn delete_doctor(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(format!("DELETE /doctors/{}", id))
    }

    async fn list_hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.record("GET /hospitals");
        Ok(self.hospitals.clone())
    }

    async fn create_hospital(&self, hospital: NewHospital) -> Result<Hospital, ApiError> {
        self.record("POST /hospitals");
        Ok(Hospital {
            id: self.created_hospital_id,
            name: hospital.name,
            address: hospital.address,
            image: hospital.image,
            rating: hospital.rating,
        })
    }

    async fn update_hospital(&self, hospital: &Hospital) -> Result<Hospital, ApiError> {
        self.record(format!("PUT /hospitals/{}", hospital.id));
        Ok(hospital.clone())
    }

    async fn delete_hospital(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(format!("DELETE /hospitals/{}", id))
    }

    async fn list_associations(&self) -> Result<Vec<DocHospital>, ApiError> {
        self.record("GET /dochospitals");
        Ok(self.associations.clone())
    }

    async fn create_association(
        &self,
        association: NewDocHospital,
    ) -> Result<DocHospital, ApiError> {
        let ordinal = self.association_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.record("POST /dochospitals");
        if self.failing_association_calls.contains(&ordinal) {
            return Err(server_error("Something went wrong"));
        }
        self.created_associations
            .lock()
            .unwrap()
            .push(association.clone());
        Ok(DocHospital {
            id: ordinal as EntityId,
            hospital_id: association.hospital_id,
            doctor_id: association.doctor_id,
            specialty: association.specialty,
            fee: association.fee,
            schedule: association.schedule,
        })
    }

    async fn delete_association(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(format!("DELETE /dochospitals/{}", id))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("GET /users");
        Ok(self.users.clone())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, ApiError> {
        self.record("POST /users");
        Ok(User {
            id: 1,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        })
    }

    async fn update_user(&self, user: &User) -> Result<User, ApiError> {
        self.record(format!("PUT /users/{}", user.id));
        Ok(user.clone())
    }

    async fn delete_user(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(format!("DELETE /users/{}", id))
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.record("GET /appointments");
        Ok(self.appointments.clone())
    }

    async fn update_appointment(&self, appointment: &Appointment) -> Result<Appointment, ApiError> {
        self.record(format!("PUT /appointments/{}", appointment.id));
        Ok(appointment.clone())
    }

    async fn delete_appointment(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(format!("DELETE /appointments/{}", id))
    }

    async fn list_admins(&self) -> Result<Vec<Admin>, ApiError> {
        self.record("GET /admins");
        Ok(self.admins.clone())
    }

    async fn register_admin(&self, admin: NewAdmin) -> Result<Admin, ApiError> {
        self.record("POST /admins");
        if self.admins.iter().any(|a| a.email == admin.email) {
            return Err(ApiError::Status {
                status: StatusCode::BAD_REQUEST,
                message: "Email already registered".to_string(),
            });
        }
        Ok(Admin {
            id: 1,
            name: admin.name,
            email: admin.email,
            password: admin.password,
        })
    }
}
