use crate::repositories::doctor_repository::DoctorRepository;
use diesel::PgConnection;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::entities::doctor::Doctor;
use tracing::debug;
use uuid::Uuid;

/// Persists changes to a doctor's `slots_booked` map.
///
/// Every call must run inside the caller's transaction, on a doctor row
/// obtained from [`SlotAllocator::lock`] in that same transaction. The row
/// lock serialises all slot changes for one doctor, so the
/// check-then-append in [`SlotAllocator::try_book`] cannot interleave with
/// another booking.
pub struct SlotAllocator;

impl SlotAllocator {
    pub fn lock(conn: &mut PgConnection, doctor_id: Uuid) -> Result<Option<Doctor>, ApiError> {
        DoctorRepository::find_by_id_for_update(conn, doctor_id)
    }

    /// Fails with `Conflict("Slot not available")` when the time is taken.
    pub fn try_book(
        conn: &mut PgConnection,
        doctor: &Doctor,
        date: &str,
        time: &str,
    ) -> Result<(), ApiError> {
        let mut slots = doctor.slots()?;
        slots.try_book(date, time)?;
        DoctorRepository::update_slots(conn, doctor.id, &slots)?;

        debug!(doctor_id = %doctor.id, slot_date = %date, slot_time = %time, "slot booked");
        Ok(())
    }

    /// Returns whether the time was booked. Releasing a free slot writes
    /// nothing.
    pub fn release(
        conn: &mut PgConnection,
        doctor: &Doctor,
        date: &str,
        time: &str,
    ) -> Result<bool, ApiError> {
        let mut slots = doctor.slots()?;

        if !slots.release(date, time) {
            return Ok(false);
        }

        DoctorRepository::update_slots(conn, doctor.id, &slots)?;

        debug!(doctor_id = %doctor.id, slot_date = %date, slot_time = %time, "slot released");
        Ok(true)
    }
}
