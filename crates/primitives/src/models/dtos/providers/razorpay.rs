use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderNotes {
    #[serde(rename = "appointmentId")]
    pub appointment_id: String,
    #[serde(rename = "doctorName")]
    pub doctor_name: String,
    #[serde(rename = "patientName")]
    pub patient_name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderRequest<'a> {
    /// Minor currency units (paise for INR).
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
    pub notes: OrderNotes,
    pub payment_capture: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Attempted,
    Paid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RazorpayOrder {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    pub amount: i64,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub offer_id: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub attempts: i64,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub notes: Value,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct RazorpayErrorResponse {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct RazorpayErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
