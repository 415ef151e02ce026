use crate::app_state::AppState;
use crate::clients::RazorpayClient;
use crate::repositories::appointment_repository::AppointmentRepository;
use diesel::prelude::*;
use prescripto_primitives::error::{ApiError, PaymentError};
use prescripto_primitives::models::dtos::payment_dto::VerifyPaymentRequest;
use prescripto_primitives::models::dtos::providers::razorpay::{
    CreateOrderRequest, OrderNotes, OrderStatus, RazorpayOrder,
};
use prescripto_primitives::models::entities::appointment::Appointment;
use prescripto_primitives::utility::parse_id;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct PaymentService;

impl PaymentService {
    fn gateway(state: &AppState) -> Result<&RazorpayClient, ApiError> {
        state.razorpay.as_ref().ok_or_else(|| {
            error!("Razorpay instance not initialized");
            ApiError::Payment(PaymentError::NotConfigured)
        })
    }

    /// Appointment fee in minor currency units.
    pub fn minor_amount(amount: i64) -> Result<i64, PaymentError> {
        if amount <= 0 {
            return Err(PaymentError::InvalidAmount);
        }
        amount.checked_mul(100).ok_or(PaymentError::InvalidAmount)
    }

    fn ensure_payable(appointment: &Appointment, user_id: Uuid) -> Result<(), ApiError> {
        if !appointment.belongs_to(user_id) {
            return Err(ApiError::Forbidden("Unauthorized action".into()));
        }
        if appointment.cancelled {
            return Err(PaymentError::AlreadyCancelled.into());
        }
        if appointment.payment {
            return Err(PaymentError::AlreadyPaid.into());
        }
        Ok(())
    }

    fn snapshot_name(document: &Value) -> String {
        document
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Opens a Razorpay order for the appointment fee and records its id on
    /// the appointment. The returned order always names its currency.
    pub async fn create_order(
        state: &AppState,
        user_id: Uuid,
        appointment_id: &str,
    ) -> Result<RazorpayOrder, ApiError> {
        let gateway = Self::gateway(state)?;

        let appointment_id = parse_id(appointment_id)
            .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

        let mut conn = state.db.get().map_err(|_| {
            error!("payment.create_order: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let appointment = AppointmentRepository::find_by_id(&mut conn, appointment_id)?
            .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

        Self::ensure_payable(&appointment, user_id)?;

        let amount = Self::minor_amount(appointment.amount)?;
        let receipt = appointment.id.to_string();
        let currency = state.config.currency.as_str();

        let request = CreateOrderRequest {
            amount,
            currency,
            receipt: &receipt,
            notes: OrderNotes {
                appointment_id: receipt.clone(),
                doctor_name: Self::snapshot_name(&appointment.doc_data),
                patient_name: Self::snapshot_name(&appointment.user_data),
            },
            payment_capture: 1,
        };

        let mut order = gateway.create_order(&request).await?;
        order.currency = currency.to_string();

        AppointmentRepository::set_order_id(&mut conn, appointment.id, &order.id)?;

        info!(
            user_id = %user_id,
            appointment_id = %appointment.id,
            order_id = %order.id,
            amount,
            "Razorpay order created"
        );

        Ok(order)
    }

    /// Marks the appointment named by a paid order's receipt as paid. The
    /// order status reported by Razorpay is the authority; the client's
    /// signature is not recomputed here.
    pub async fn verify(
        state: &AppState,
        user_id: Uuid,
        payload: VerifyPaymentRequest,
    ) -> Result<Appointment, ApiError> {
        let (order_id, payment_id) = match (
            Self::present(payload.razorpay_order_id),
            Self::present(payload.razorpay_payment_id),
            Self::present(payload.razorpay_signature),
        ) {
            (Some(order_id), Some(payment_id), Some(_signature)) => (order_id, payment_id),
            _ => return Err(PaymentError::MissingFields.into()),
        };

        let gateway = Self::gateway(state)?;

        let order = gateway
            .fetch_order(&order_id)
            .await?
            .ok_or(PaymentError::OrderNotFound)?;

        if order.status != OrderStatus::Paid {
            warn!(order_id = %order_id, status = ?order.status, "payment not completed");
            return Err(PaymentError::NotCompleted.into());
        }

        let appointment_id = order
            .receipt
            .as_deref()
            .and_then(parse_id)
            .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

        let mut conn = state.db.get().map_err(|_| {
            error!("payment.verify: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let appointment = conn.transaction::<_, ApiError, _>(|conn| {
            let appointment = AppointmentRepository::find_by_id_for_update(conn, appointment_id)?
                .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

            Self::ensure_payable(&appointment, user_id)?;

            // only the last order issued for the appointment can settle it
            if appointment.order_id.as_deref() != Some(order_id.as_str()) {
                warn!(
                    appointment_id = %appointment.id,
                    order_id = %order_id,
                    "order is not the one issued for this appointment"
                );
                return Err(PaymentError::OrderMismatch.into());
            }

            if order.amount_paid != Self::minor_amount(appointment.amount)? {
                warn!(
                    appointment_id = %appointment.id,
                    order_id = %order_id,
                    amount_paid = order.amount_paid,
                    "paid amount does not match appointment"
                );
                return Err(PaymentError::AmountMismatch.into());
            }

            AppointmentRepository::mark_paid(conn, appointment.id, &payment_id)
        })?;

        info!(
            user_id = %user_id,
            appointment_id = %appointment.id,
            order_id = %order_id,
            payment_id = %payment_id,
            "Payment verified"
        );

        Ok(appointment)
    }

    fn present(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
