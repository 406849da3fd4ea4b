// client/src/api.rs

use async_trait::async_trait;
use models::{
    Admin, Appointment, DocHospital, Doctor, EntityId, Hospital, NewAdmin, NewDocHospital,
    NewDoctor, NewHospital, NewUser, User,
};

use crate::{ApiClient, ApiError};

/// Every REST operation the console performs, as an object-safe seam so the
/// directories and the submission flow can run against a test double.
///
/// Updates are whole-record replacements (PUT by identity); the server owns
/// cascading deletes of dependent records.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError>;
    async fn create_doctor(&self, doctor: NewDoctor) -> Result<Doctor, ApiError>;
    async fn update_doctor(&self, doctor: &Doctor) -> Result<Doctor, ApiError>;
    async fn delete_doctor(&self, id: EntityId) -> Result<(), ApiError>;

    async fn list_hospitals(&self) -> Result<Vec<Hospital>, ApiError>;
    async fn create_hospital(&self, hospital: NewHospital) -> Result<Hospital, ApiError>;
    async fn update_hospital(&self, hospital: &Hospital) -> Result<Hospital, ApiError>;
    async fn delete_hospital(&self, id: EntityId) -> Result<(), ApiError>;

    async fn list_associations(&self) -> Result<Vec<DocHospital>, ApiError>;
    async fn create_association(
        &self,
        association: NewDocHospital,
    ) -> Result<DocHospital, ApiError>;
    async fn delete_association(&self, id: EntityId) -> Result<(), ApiError>;

    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn create_user(&self, user: NewUser) -> Result<User, ApiError>;
    async fn update_user(&self, user: &User) -> Result<User, ApiError>;
    async fn delete_user(&self, id: EntityId) -> Result<(), ApiError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError>;
    async fn update_appointment(&self, appointment: &Appointment) -> Result<Appointment, ApiError>;
    async fn delete_appointment(&self, id: EntityId) -> Result<(), ApiError>;

    async fn list_admins(&self) -> Result<Vec<Admin>, ApiError>;
    async fn register_admin(&self, admin: NewAdmin) -> Result<Admin, ApiError>;
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.get_json("/doctors").await
    }

    async fn create_doctor(&self, doctor: NewDoctor) -> Result<Doctor, ApiError> {
        self.post_json("/doctors", &doctor).await
    }

    async fn update_doctor(&self, doctor: &Doctor) -> Result<Doctor, ApiError> {
        self.put_json(&format!("/doctors/{}", doctor.id), doctor).await
    }

    async fn delete_doctor(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(&format!("/doctors/{}", id)).await
    }

    async fn list_hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.get_json("/hospitals").await
    }

    async fn create_hospital(&self, hospital: NewHospital) -> Result<Hospital, ApiError> {
        self.post_json("/hospitals", &hospital).await
    }

    async fn update_hospital(&self, hospital: &Hospital) -> Result<Hospital, ApiError> {
        self.put_json(&format!("/hospitals/{}", hospital.id), hospital).await
    }

    async fn delete_hospital(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(&format!("/hospitals/{}", id)).await
    }

    async fn list_associations(&self) -> Result<Vec<DocHospital>, ApiError> {
        self.get_json("/dochospitals").await
    }

    async fn create_association(
        &self,
        association: NewDocHospital,
    ) -> Result<DocHospital, ApiError> {
        self.post_json("/dochospitals", &association).await
    }

    async fn delete_association(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(&format!("/dochospitals/{}", id)).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, ApiError> {
        self.post_json("/users", &user).await
    }

    async fn update_user(&self, user: &User) -> Result<User, ApiError> {
        self.put_json(&format!("/users/{}", user.id), user).await
    }

    async fn delete_user(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("/appointments").await
    }

    async fn update_appointment(&self, appointment: &Appointment) -> Result<Appointment, ApiError> {
        self.put_json(&format!("/appointments/{}", appointment.id), appointment)
            .await
    }

    async fn delete_appointment(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(&format!("/appointments/{}", id)).await
    }

    async fn list_admins(&self) -> Result<Vec<Admin>, ApiError> {
        self.get_json("/admins").await
    }

    async fn register_admin(&self, admin: NewAdmin) -> Result<Admin, ApiError> {
        self.post_json("/admins", &admin).await
    }
}
