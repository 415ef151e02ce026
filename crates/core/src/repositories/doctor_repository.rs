use diesel::prelude::*;
use prescripto_primitives::error::{ApiError, AuthError};
use prescripto_primitives::models::entities::doctor::{Doctor, NewDoctor};
use prescripto_primitives::models::entities::slots::SlotsBooked;
use prescripto_primitives::schema::doctors;
use uuid::Uuid;

pub struct DoctorRepository;

impl DoctorRepository {
    pub fn find_by_id(conn: &mut PgConnection, doctor_id: Uuid) -> Result<Option<Doctor>, ApiError> {
        doctors::table
            .find(doctor_id)
            .select(Doctor::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    /// Row-locks the doctor until the surrounding transaction ends; every
    /// change to `slots_booked` goes through this lock.
    pub fn find_by_id_for_update(
        conn: &mut PgConnection,
        doctor_id: Uuid,
    ) -> Result<Option<Doctor>, ApiError> {
        doctors::table
            .find(doctor_id)
            .select(Doctor::as_select())
            .for_update()
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Doctor>, ApiError> {
        doctors::table
            .select(Doctor::as_select())
            .order(doctors::created_at.asc())
            .load(conn)
            .map_err(ApiError::Database)
    }

    pub fn create(conn: &mut PgConnection, new_doctor: NewDoctor) -> Result<Doctor, ApiError> {
        diesel::insert_into(doctors::table)
            .values(&new_doctor)
            .returning(Doctor::as_returning())
            .get_result(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Auth(AuthError::DuplicateEmail)
                } else {
                    ApiError::Database(e)
                }
            })
    }

    pub fn update_slots(
        conn: &mut PgConnection,
        doctor_id: Uuid,
        slots: &SlotsBooked,
    ) -> Result<(), ApiError> {
        diesel::update(doctors::table.find(doctor_id))
            .set(doctors::slots_booked.eq(slots.to_value()))
            .execute(conn)
            .map(|_| ())
            .map_err(ApiError::Database)
    }

    /// Flips `available` and returns the new value, or `None` when the
    /// doctor does not exist.
    pub fn toggle_availability(
        conn: &mut PgConnection,
        doctor_id: Uuid,
    ) -> Result<Option<bool>, ApiError> {
        diesel::update(doctors::table.find(doctor_id))
            .set(doctors::available.eq(diesel::dsl::not(doctors::available)))
            .returning(doctors::available)
            .get_result::<bool>(conn)
            .optional()
            .map_err(ApiError::Database)
    }
}
