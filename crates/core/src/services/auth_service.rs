use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use crate::security::{Role, SecurityConfig};
use argon2::{password_hash::PasswordHash, Argon2, Params, PasswordVerifier};
use password_hash::{PasswordHasher, SaltString};
use prescripto_primitives::error::{ApiError, AuthError};
use prescripto_primitives::models::dtos::auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
use prescripto_primitives::models::entities::user::{NewUser, User};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, warn};
use validator::Validate;

pub struct AuthService;

impl AuthService {
    pub async fn register(
        state: &AppState,
        payload: RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        payload.ensure_present()?;
        let payload = payload.normalize();
        payload.validate()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("auth.register: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let password = SecretString::new(payload.password.into());
        let password_hash = Self::hash_password(&password)?;

        let user = UserRepository::create(
            &mut conn,
            NewUser {
                name: &payload.name,
                email: &payload.email,
                password_hash: &password_hash,
            },
        )?;

        let token = SecurityConfig::create_token(state, &user.id.to_string(), Role::User)?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(AuthResponse::new(token))
    }

    pub async fn login(state: &AppState, payload: LoginRequest) -> Result<AuthResponse, ApiError> {
        let payload = payload.normalize();

        let mut conn = state.db.get().map_err(|_| {
            error!("auth.login: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = UserRepository::find_by_email(&mut conn, &payload.email)?;
        Self::verify_password(&payload.password, user.as_ref())?;

        let user = user.ok_or(ApiError::Auth(AuthError::InvalidCredentials))?;

        let token = SecurityConfig::create_token(state, &user.id.to_string(), Role::User)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(AuthResponse::new(token))
    }

    pub fn hash_password(password: &SecretString) -> Result<String, ApiError> {
        let argon2 = Self::create_argon2()?;
        let salt = SaltString::generate(&mut rand_core::OsRng);

        argon2
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| {
                error!("auth: password hashing failed");
                ApiError::Internal("Credential processing failed".into())
            })
    }

    pub fn create_argon2() -> Result<Argon2<'static>, ApiError> {
        let params = Params::new(
            65536, // 64 MiB memory
            3,     // iterations
            1,     // parallelism
            None,
        )
        .map_err(|e| {
            error!("Argon2 params error: {}", e);
            ApiError::Internal("Encryption configuration error".to_string())
        })?;

        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }

    /// Verifies against the stored hash, or against a fixed dummy hash when
    /// the account does not exist, so both paths cost one argon2 run.
    fn verify_password(password: &str, user: Option<&User>) -> Result<(), ApiError> {
        let hash = user
            .map(|u| u.password_hash.as_str())
            .unwrap_or(Self::dummy_hash());

        let parsed = PasswordHash::new(hash).map_err(|_| {
            error!("auth.login: invalid password hash");
            ApiError::Internal("Authentication failure".into())
        })?;

        let argon2 = Self::create_argon2()?;

        if argon2.verify_password(password.as_bytes(), &parsed).is_err() || user.is_none() {
            warn!("auth.login: invalid credentials");
            return Err(ApiError::Auth(AuthError::InvalidCredentials));
        }

        Ok(())
    }

    fn dummy_hash() -> &'static str {
        "$argon2id$v=19$m=65536,t=3,p=1$\
         c29tZXNhbHQ$\
         c29tZWZha2VoYXNo"
    }
}
