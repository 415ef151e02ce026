use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

const MIN_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct JWTInfo {
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

impl JWTInfo {
    pub fn new() -> Result<JWTInfo, Report> {
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| eyre!("JWT_SECRET must be set in environment variables"))?;

        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(eyre!("JWT_SECRET must be at least {} characters long", MIN_SECRET_LEN));
        }

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "168".into())
            .parse::<i64>()
            .map_err(|e| eyre!("Invalid JWT expiration configuration: {}", e))?;

        if jwt_expiration_hours <= 0 {
            return Err(eyre!("JWT_EXPIRATION_HOURS must be positive"));
        }

        Ok(Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            jwt_expiration_hours,
            jwt_issuer: env::var("ISSUER").unwrap_or_else(|_| "prescripto".into()),
            jwt_audience: env::var("AUDIENCE").unwrap_or_else(|_| "prescripto_api".into()),
        })
    }
}
