use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::dtos::profile_dto::{UpdateProfileRequest, UserProfile};
use prescripto_primitives::models::entities::user::UserProfileChanges;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProfileService;

impl ProfileService {
    pub async fn get_profile(state: &AppState, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("profile.get: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = UserRepository::find_by_id(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

        Ok(UserProfile::from(&user))
    }

    /// Applies the form fields; an attached image is uploaded first and only
    /// its URL is stored.
    pub async fn update_profile(
        state: &AppState,
        user_id: Uuid,
        mut payload: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        payload.ensure_present()?;
        let address = payload.parsed_address()?;

        let image_url = match payload.image.take() {
            Some(image) => {
                let images = state.images.as_ref().ok_or_else(|| {
                    error!("profile.update: image upload requested but storage is not configured");
                    ApiError::Internal("Image storage not configured".into())
                })?;
                Some(images.upload_image(image).await?)
            }
            None => None,
        };

        let mut conn = state.db.get().map_err(|_| {
            error!("profile.update: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let field = |value: &Option<String>| {
            value.as_deref().map(str::trim).unwrap_or_default().to_string()
        };
        let (name, phone, dob, gender) = (
            field(&payload.name),
            field(&payload.phone),
            field(&payload.dob),
            field(&payload.gender),
        );

        let user = UserRepository::update_profile(
            &mut conn,
            user_id,
            UserProfileChanges {
                name: &name,
                phone: &phone,
                address: address.to_value(),
                dob: &dob,
                gender: &gender,
                image: image_url.as_deref(),
            },
        )?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

        info!(user_id = %user.id, image_updated = image_url.is_some(), "Profile updated");

        Ok(UserProfile::from(&user))
    }
}
