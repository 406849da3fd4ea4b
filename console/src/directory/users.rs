// console/src/directory/users.rs

use client::AdminApi;
use models::{Appointment, AppointmentStatus, EntityId, NewUser, User};
use tracing::error;

use super::matches;

/// The users list view's state: platform accounts and their appointments,
/// with the scheduled/completed toggle applied per expanded row.
#[derive(Debug, Default)]
pub struct UsersDirectory {
    users: Vec<User>,
    appointments: Vec<Appointment>,
}

impl UsersDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches both collections; each failed fetch keeps its stale slice.
    pub async fn refresh(&mut self, api: &dyn AdminApi) {
        match api.list_users().await {
            Ok(users) => self.users = users,
            Err(err) => error!("failed to fetch users: {err}"),
        }
        match api.list_appointments().await {
            Ok(appointments) => self.appointments = appointments,
            Err(err) => error!("failed to fetch appointments: {err}"),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Linear scan over name, email, and phone.
    pub fn search(&self, term: &str) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| {
                matches(&u.name, term) || matches(&u.email, term) || matches(&u.phone, term)
            })
            .collect()
    }

    /// Email doubles as the natural key where no id is at hand.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// One user's appointments under the active status filter.
    pub fn appointments_for(
        &self,
        user_id: EntityId,
        status: AppointmentStatus,
    ) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.user_id == user_id && a.status == status)
            .collect()
    }

    pub async fn create(&mut self, api: &dyn AdminApi, user: NewUser) {
        if let Err(err) = api.create_user(user).await {
            error!("failed to create user: {err}");
        }
        self.refresh(api).await;
    }

    pub async fn update(&mut self, api: &dyn AdminApi, user: User) {
        if let Err(err) = api.update_user(&user).await {
            error!(user_id = user.id, "failed to update user: {err}");
        }
        self.refresh(api).await;
    }

    /// Optimistic delete: the user's rows and their locally-held
    /// appointments go first; the server owns the real cascade. The caller
    /// confirms beforehand.
    pub async fn delete(&mut self, api: &dyn AdminApi, id: EntityId) {
        self.users.retain(|u| u.id != id);
        self.appointments.retain(|a| a.user_id != id);
        if let Err(err) = api.delete_user(id).await {
            error!(user_id = id, "failed to delete user: {err}");
        }
    }

    /// Whole-record replacement of an edited appointment.
    pub async fn update_appointment(&mut self, api: &dyn AdminApi, appointment: Appointment) {
        if let Err(err) = api.update_appointment(&appointment).await {
            error!(
                appointment_id = appointment.id,
                "failed to update appointment: {err}"
            );
        }
        self.refresh(api).await;
    }

    pub async fn delete_appointment(&mut self, api: &dyn AdminApi, id: EntityId) {
        self.appointments.retain(|a| a.id != id);
        if let Err(err) = api.delete_appointment(id).await {
            error!(appointment_id = id, "failed to delete appointment: {err}");
        }
    }
}
