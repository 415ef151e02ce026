use chrono::Utc;
use diesel::prelude::*;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::entities::appointment::{Appointment, NewAppointment};
use prescripto_primitives::schema::appointments;
use uuid::Uuid;

pub struct AppointmentRepository;

impl AppointmentRepository {
    /// A clash with the active-slot index means another booking won the
    /// slot first.
    pub fn create(
        conn: &mut PgConnection,
        new_appointment: NewAppointment,
    ) -> Result<Appointment, ApiError> {
        diesel::insert_into(appointments::table)
            .values(&new_appointment)
            .returning(Appointment::as_returning())
            .get_result(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Conflict("Slot not available".into())
                } else {
                    ApiError::Database(e)
                }
            })
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, ApiError> {
        appointments::table
            .find(appointment_id)
            .select(Appointment::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn find_by_id_for_update(
        conn: &mut PgConnection,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, ApiError> {
        appointments::table
            .find(appointment_id)
            .select(Appointment::as_select())
            .for_update()
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn find_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Appointment>, ApiError> {
        appointments::table
            .filter(appointments::user_id.eq(user_id))
            .order((appointments::booked_at.desc(), appointments::id.desc()))
            .select(Appointment::as_select())
            .load(conn)
            .map_err(ApiError::Database)
    }

    pub fn mark_cancelled(conn: &mut PgConnection, appointment_id: Uuid) -> Result<(), ApiError> {
        diesel::update(appointments::table.find(appointment_id))
            .set(appointments::cancelled.eq(true))
            .execute(conn)
            .map(|_| ())
            .map_err(ApiError::Database)
    }

    pub fn set_order_id(
        conn: &mut PgConnection,
        appointment_id: Uuid,
        order_id: &str,
    ) -> Result<(), ApiError> {
        diesel::update(appointments::table.find(appointment_id))
            .set(appointments::order_id.eq(order_id))
            .execute(conn)
            .map(|_| ())
            .map_err(ApiError::Database)
    }

    pub fn mark_paid(
        conn: &mut PgConnection,
        appointment_id: Uuid,
        payment_id: &str,
    ) -> Result<Appointment, ApiError> {
        diesel::update(appointments::table.find(appointment_id))
            .set((
                appointments::payment.eq(true),
                appointments::payment_id.eq(payment_id),
                appointments::payment_date.eq(Utc::now()),
            ))
            .returning(Appointment::as_returning())
            .get_result(conn)
            .map_err(ApiError::Database)
    }
}
