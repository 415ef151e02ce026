use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

use crate::clients::{CloudinaryClient, RazorpayClient};
use eyre::Result;
pub use prescripto_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub razorpay: Option<RazorpayClient>,
    pub images: Option<CloudinaryClient>,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let razorpay = config
            .razorpay_details
            .as_ref()
            .map(|details| RazorpayClient::new(http.clone(), details))
            .transpose()?;

        let images = config
            .cloudinary_details
            .as_ref()
            .map(|details| CloudinaryClient::new(http.clone(), details))
            .transpose()?;

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
            razorpay,
            images,
        }))
    }
}
