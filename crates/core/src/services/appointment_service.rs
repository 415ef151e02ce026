use crate::app_state::AppState;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::slot_allocator::SlotAllocator;
use diesel::prelude::*;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::dtos::appointment_dto::{AppointmentDto, BookAppointmentRequest};
use prescripto_primitives::models::entities::appointment::{Appointment, NewAppointment};
use prescripto_primitives::models::entities::snapshot::{to_document, DoctorSnapshot, UserSnapshot};
use prescripto_primitives::utility::parse_id;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct AppointmentService;

impl AppointmentService {
    /// Books a slot and records the appointment in one transaction. The
    /// doctor row stays locked until commit, and any failure rolls the slot
    /// map back with it.
    pub async fn book(
        state: &AppState,
        user_id: Uuid,
        payload: BookAppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let payload = payload.normalize();
        payload.validate()?;

        let doctor_id =
            parse_id(&payload.doc_id).ok_or_else(|| ApiError::NotFound("Doctor not found".into()))?;

        let mut conn = state.db.get().map_err(|_| {
            error!("appointment.book: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let appointment = conn.transaction::<_, ApiError, _>(|conn| {
            let doctor = SlotAllocator::lock(conn, doctor_id)?
                .ok_or_else(|| ApiError::NotFound("Doctor not found".into()))?;

            if !doctor.available {
                return Err(ApiError::DoctorUnavailable);
            }

            SlotAllocator::try_book(conn, &doctor, &payload.slot_date, &payload.slot_time)?;

            let user = UserRepository::find_by_id(conn, user_id)?
                .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

            AppointmentRepository::create(
                conn,
                NewAppointment {
                    user_id: user.id,
                    doctor_id: doctor.id,
                    slot_date: &payload.slot_date,
                    slot_time: &payload.slot_time,
                    user_data: to_document(&UserSnapshot::from(&user)),
                    doc_data: to_document(&DoctorSnapshot::from(&doctor)),
                    amount: doctor.fees,
                },
            )
        })?;

        info!(
            user_id = %user_id,
            appointment_id = %appointment.id,
            doctor_id = %appointment.doctor_id,
            slot_date = %appointment.slot_date,
            slot_time = %appointment.slot_time,
            "Appointment booked"
        );

        Ok(appointment)
    }

    /// Cancels the caller's appointment and frees its slot. Cancelling an
    /// already cancelled appointment succeeds without touching the slot map,
    /// since the slot may have been booked again since.
    pub async fn cancel(
        state: &AppState,
        user_id: Uuid,
        appointment_id: &str,
    ) -> Result<(), ApiError> {
        let appointment_id = parse_id(appointment_id)
            .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

        let mut conn = state.db.get().map_err(|_| {
            error!("appointment.cancel: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let released = conn.transaction::<_, ApiError, _>(|conn| {
            let appointment = AppointmentRepository::find_by_id(conn, appointment_id)?
                .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

            if !appointment.belongs_to(user_id) {
                return Err(ApiError::Forbidden("Unauthorized action".into()));
            }

            // doctor before appointment, the same order booking takes
            let doctor = SlotAllocator::lock(conn, appointment.doctor_id)?;

            let appointment = AppointmentRepository::find_by_id_for_update(conn, appointment_id)?
                .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

            if appointment.cancelled {
                return Ok(false);
            }

            if appointment.payment {
                return Err(ApiError::Conflict(
                    "Paid appointments cannot be cancelled".into(),
                ));
            }

            AppointmentRepository::mark_cancelled(conn, appointment.id)?;

            match doctor {
                Some(doctor) => SlotAllocator::release(
                    conn,
                    &doctor,
                    &appointment.slot_date,
                    &appointment.slot_time,
                ),
                None => Ok(false),
            }
        })?;

        info!(
            user_id = %user_id,
            appointment_id = %appointment_id,
            slot_released = released,
            "Appointment cancelled"
        );

        Ok(())
    }

    /// Every appointment of the user, cancelled ones included, newest
    /// booking first.
    pub async fn list(state: &AppState, user_id: Uuid) -> Result<Vec<AppointmentDto>, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("appointment.list: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let appointments = AppointmentRepository::find_by_user(&mut conn, user_id)?;

        Ok(appointments.into_iter().map(AppointmentDto::from).collect())
    }
}
