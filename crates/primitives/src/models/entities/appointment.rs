use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = crate::schema::appointments)]
#[diesel(belongs_to(crate::models::entities::user::User))]
#[diesel(belongs_to(crate::models::entities::doctor::Doctor))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub doctor_id: Uuid,
    pub slot_date: String,
    pub slot_time: String,
    pub user_data: Value,
    pub doc_data: Value,
    pub amount: i64,
    pub booked_at: DateTime<Utc>,
    pub cancelled: bool,
    pub payment: bool,
    pub is_completed: bool,
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment lifecycle of an appointment.
///
/// `Pending -> OrderCreated -> Paid`; `Cancelled` is reachable from the
/// first two. `Paid` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentState {
    Pending,
    OrderCreated,
    Paid,
    Cancelled,
}

impl Appointment {
    pub fn state(&self) -> AppointmentState {
        if self.cancelled {
            AppointmentState::Cancelled
        } else if self.payment {
            AppointmentState::Paid
        } else if self.order_id.is_some() {
            AppointmentState::OrderCreated
        } else {
            AppointmentState::Pending
        }
    }

    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::appointments)]
pub struct NewAppointment<'a> {
    pub user_id: Uuid,
    pub doctor_id: Uuid,
    pub slot_date: &'a str,
    pub slot_time: &'a str,
    pub user_data: Value,
    pub doc_data: Value,
    pub amount: i64,
}
