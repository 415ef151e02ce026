use prescripto_primitives::error::{ApiError, PaymentError};
use prescripto_primitives::models::app_state::razorpay_details::RazorpayInfo;
use prescripto_primitives::models::dtos::providers::razorpay::{
    CreateOrderRequest, RazorpayErrorResponse, RazorpayOrder,
};
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{error, warn};

#[derive(Clone)]
pub struct RazorpayClient {
    http: Client,
    base_url: Url,
    key_id: String,
    key_secret: SecretString,
}

impl RazorpayClient {
    pub fn new(http: Client, details: &RazorpayInfo) -> Result<Self, ApiError> {
        let base_url = Url::parse(&details.razorpay_api_url)
            .map_err(|_| ApiError::Internal("Invalid Razorpay base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            key_id: details.razorpay_key_id.clone(),
            key_secret: details.razorpay_key_secret.clone(),
        })
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal("Invalid Razorpay URL path".into()))?
            .pop_if_empty()
            .extend(["v1"].iter().chain(segments));
        Ok(url)
    }

    pub async fn create_order(
        &self,
        payload: &CreateOrderRequest<'_>,
    ) -> Result<RazorpayOrder, ApiError> {
        let url = self.endpoint(&["orders"])?;

        let resp = self
            .http
            .post(url)
            .basic_auth(&self.key_id, Some(self.key_secret.expose_secret()))
            .timeout(Duration::from_secs(15))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach Razorpay");
                PaymentError::Gateway("Razorpay service unavailable".into())
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let description = Self::error_description(&body);
            warn!(
                http_status = status.as_u16(),
                razorpay_message = %description,
                "Razorpay create order failed"
            );
            return Err(PaymentError::Gateway(description).into());
        }

        serde_json::from_str::<RazorpayOrder>(&body).map_err(|e| {
            error!(error = %e, "Invalid Razorpay order response");
            PaymentError::Gateway("Invalid Razorpay response".into()).into()
        })
    }

    /// `Ok(None)` when Razorpay does not know the order.
    pub async fn fetch_order(&self, order_id: &str) -> Result<Option<RazorpayOrder>, ApiError> {
        let url = self.endpoint(&["orders", order_id])?;

        let resp = self
            .http
            .get(url)
            .basic_auth(&self.key_id, Some(self.key_secret.expose_secret()))
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach Razorpay");
                PaymentError::Gateway("Razorpay service unavailable".into())
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let description = Self::error_description(&body);

            if status == StatusCode::BAD_REQUEST
                && description.to_lowercase().contains("does not exist")
            {
                return Ok(None);
            }

            warn!(
                http_status = status.as_u16(),
                order_id = %order_id,
                razorpay_message = %description,
                "Razorpay fetch order failed"
            );
            return Err(PaymentError::Gateway(description).into());
        }

        serde_json::from_str::<RazorpayOrder>(&body)
            .map(Some)
            .map_err(|e| {
                error!(error = %e, "Invalid Razorpay order response");
                PaymentError::Gateway("Invalid Razorpay response".into()).into()
            })
    }

    fn error_description(body: &str) -> String {
        serde_json::from_str::<RazorpayErrorResponse>(body)
            .ok()
            .and_then(|e| e.error.description)
            .unwrap_or_else(|| "Razorpay request failed".into())
    }
}
