use secrecy::SecretString;
use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct CloudinaryInfo {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: SecretString,
    pub api_url: String,
}

impl CloudinaryInfo {
    pub fn from_env() -> Option<Self> {
        let cloud_name = env::var("CLOUDINARY_NAME").ok();
        let api_key = env::var("CLOUDINARY_API_KEY").ok();
        let api_secret = env::var("CLOUDINARY_SECRET_KEY").ok();

        match (cloud_name, api_key, api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(Self {
                cloud_name,
                api_key,
                api_secret: SecretString::new(api_secret.into()),
                api_url: env::var("CLOUDINARY_API_URL")
                    .unwrap_or_else(|_| "https://api.cloudinary.com".into()),
            }),
            _ => {
                warn!("Cloudinary is not configured; profile image uploads are disabled");
                None
            }
        }
    }
}
