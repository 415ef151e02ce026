use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct AdminInfo {
    pub admin_email: String,
    pub admin_password: SecretString,
}

impl AdminInfo {
    pub fn from_env() -> Option<Self> {
        let email = env::var("ADMIN_EMAIL").ok().filter(|v| !v.trim().is_empty())?;
        let password = env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty())?;

        Some(Self {
            admin_email: email.trim().to_lowercase(),
            admin_password: SecretString::new(password.into()),
        })
    }
}
