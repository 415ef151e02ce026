use crate::app_state::AppState;
use crate::repositories::doctor_repository::DoctorRepository;
use crate::security::{Role, SecurityConfig};
use crate::services::auth_service::AuthService;
use prescripto_primitives::error::{ApiError, AuthError};
use prescripto_primitives::models::dtos::auth_dto::{AuthResponse, LoginRequest};
use prescripto_primitives::models::dtos::doctor_dto::AddDoctorRequest;
use prescripto_primitives::models::entities::doctor::{Doctor, NewDoctor};
use prescripto_primitives::utility::parse_id;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::{error, info, warn};
use validator::Validate;

pub const DEFAULT_DOCTOR_IMAGE: &str =
    "https://res.cloudinary.com/prescripto/image/upload/v1/doctors/default.png";

pub struct AdminService;

impl AdminService {
    pub async fn login(state: &AppState, payload: LoginRequest) -> Result<AuthResponse, ApiError> {
        let admin = state
            .config
            .admin_details
            .as_ref()
            .ok_or(ApiError::Auth(AuthError::NotConfigured))?;

        let payload = payload.normalize();

        let email_ok = payload
            .email
            .as_bytes()
            .ct_eq(admin.admin_email.as_bytes());
        let password_ok = payload
            .password
            .as_bytes()
            .ct_eq(admin.admin_password.expose_secret().as_bytes());

        if !bool::from(email_ok & password_ok) {
            warn!("admin.login: invalid credentials");
            return Err(ApiError::Auth(AuthError::InvalidCredentials));
        }

        let token = SecurityConfig::create_token(state, &admin.admin_email, Role::Admin)?;

        info!("Admin logged in");

        Ok(AuthResponse::new(token))
    }

    pub async fn add_doctor(state: &AppState, payload: AddDoctorRequest) -> Result<Doctor, ApiError> {
        let payload = payload.normalize();
        payload.validate()?;

        let password_hash =
            AuthService::hash_password(&SecretString::new(payload.password.clone().into()))?;

        let image = payload
            .image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_DOCTOR_IMAGE);

        let mut conn = state.db.get().map_err(|_| {
            error!("admin.add_doctor: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let doctor = DoctorRepository::create(
            &mut conn,
            NewDoctor {
                name: &payload.name,
                email: &payload.email,
                password_hash: &password_hash,
                image,
                speciality: payload.speciality.trim(),
                degree: payload.degree.trim(),
                experience: payload.experience.trim(),
                about: payload.about.trim(),
                fees: payload.fees,
                address: payload.address.to_value(),
            },
        )?;

        info!(doctor_id = %doctor.id, "Doctor added");

        Ok(doctor)
    }

    /// Flips the doctor's availability and returns the new value.
    pub async fn change_availability(state: &AppState, doctor_id: &str) -> Result<bool, ApiError> {
        let doctor_id =
            parse_id(doctor_id).ok_or_else(|| ApiError::NotFound("Doctor not found".into()))?;

        let mut conn = state.db.get().map_err(|_| {
            error!("admin.change_availability: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let available = DoctorRepository::toggle_availability(&mut conn, doctor_id)?
            .ok_or_else(|| ApiError::NotFound("Doctor not found".into()))?;

        info!(doctor_id = %doctor_id, available, "Doctor availability changed");

        Ok(available)
    }
}
