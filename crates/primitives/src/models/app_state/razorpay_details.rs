use secrecy::SecretString;
use std::env;
use tracing::error;

const TEST_KEY_PREFIX: &str = "rzp_test_";

#[derive(Debug, Clone)]
pub struct RazorpayInfo {
    pub razorpay_key_id: String,
    pub razorpay_key_secret: SecretString,
    pub razorpay_api_url: String,
}

impl RazorpayInfo {
    /// Payments are optional: a missing or rejected key leaves the gateway
    /// unconfigured instead of failing start-up. Outside production only
    /// test keys are accepted.
    pub fn from_env(production: bool) -> Option<Self> {
        let (key_id, key_secret) = match (
            env::var("RAZORPAY_KEY_ID").ok().filter(|v| !v.trim().is_empty()),
            env::var("RAZORPAY_KEY_SECRET").ok().filter(|v| !v.trim().is_empty()),
        ) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                error!("Razorpay credentials not found in environment variables");
                return None;
            }
        };

        if !production && !key_id.starts_with(TEST_KEY_PREFIX) {
            error!("Invalid Razorpay key ID. Must use test key for development");
            return None;
        }

        Some(Self {
            razorpay_key_id: key_id,
            razorpay_key_secret: SecretString::new(key_secret.into()),
            razorpay_api_url: env::var("RAZORPAY_API_URL")
                .unwrap_or_else(|_| "https://api.razorpay.com".into()),
        })
    }
}
