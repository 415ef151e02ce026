use crate::models::entities::appointment::{Appointment, AppointmentState};
use crate::utility::{canonical_slot_date, validate_not_blank, validate_slot_date};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookAppointmentRequest {
    #[serde(rename = "docId", default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub doc_id: String,

    #[serde(rename = "slotDate", default)]
    #[schema(example = "5_6_2025")]
    #[validate(custom(function = "validate_slot_date"))]
    pub slot_date: String,

    #[serde(rename = "slotTime", default)]
    #[schema(example = "10:00 AM")]
    #[validate(custom(function = "validate_not_blank"))]
    pub slot_time: String,
}

impl BookAppointmentRequest {
    pub fn normalize(mut self) -> Self {
        self.doc_id = self.doc_id.trim().to_string();
        let slot_date = self.slot_date.trim();
        // padded dates must land on the same slot key as unpadded ones
        self.slot_date = canonical_slot_date(slot_date).unwrap_or_else(|| slot_date.to_string());
        self.slot_time = self.slot_time.trim().to_string();
        self
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AppointmentIdRequest {
    #[serde(rename = "appointmentId", default)]
    pub appointment_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "docId")]
    pub doc_id: Uuid,
    #[serde(rename = "slotDate")]
    pub slot_date: String,
    #[serde(rename = "slotTime")]
    pub slot_time: String,
    #[serde(rename = "userData")]
    pub user_data: Value,
    #[serde(rename = "docData")]
    pub doc_data: Value,
    pub amount: i64,
    /// Booking time in epoch milliseconds.
    pub date: i64,
    pub cancelled: bool,
    pub payment: bool,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    pub status: AppointmentState,
}

impl From<Appointment> for AppointmentDto {
    fn from(a: Appointment) -> Self {
        let status = a.state();
        Self {
            id: a.id,
            user_id: a.user_id,
            doc_id: a.doctor_id,
            slot_date: a.slot_date,
            slot_time: a.slot_time,
            user_data: a.user_data,
            doc_data: a.doc_data,
            amount: a.amount,
            date: a.booked_at.timestamp_millis(),
            cancelled: a.cancelled,
            payment: a.payment,
            is_completed: a.is_completed,
            status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentsResponse {
    pub success: bool,
    pub appointments: Vec<AppointmentDto>,
}
