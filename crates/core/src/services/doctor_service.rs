use crate::app_state::AppState;
use crate::repositories::doctor_repository::DoctorRepository;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::dtos::doctor_dto::DoctorSummary;
use tracing::error;

pub struct DoctorService;

impl DoctorService {
    pub async fn list(state: &AppState) -> Result<Vec<DoctorSummary>, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("doctor.list: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        DoctorRepository::list(&mut conn)?
            .iter()
            .map(DoctorSummary::try_from)
            .collect()
    }
}
