use crate::models::app_state::admin_details::AdminInfo;
use crate::models::app_state::cloudinary_details::CloudinaryInfo;
use crate::models::app_state::jwt_details::JWTInfo;
use crate::models::app_state::razorpay_details::RazorpayInfo;
use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JWTInfo,

    /// `production`, `development` or `test`.
    pub app_env: String,

    pub cors_origins: Vec<String>,

    pub currency: String,

    pub razorpay_details: Option<RazorpayInfo>,

    pub cloudinary_details: Option<CloudinaryInfo>,

    pub admin_details: Option<AdminInfo>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let production = app_env == "production";

        Ok(Self {
            jwt_details: JWTInfo::new()?,

            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".into())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),

            currency: env::var("CURRENCY").unwrap_or_else(|_| "INR".into()),

            razorpay_details: RazorpayInfo::from_env(production),

            cloudinary_details: CloudinaryInfo::from_env(),

            admin_details: AdminInfo::from_env(),

            app_env,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    pub fn is_test(&self) -> bool {
        self.app_env == "test"
    }
}
