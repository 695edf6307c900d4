use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use strike_shared::{BookingRequest, BookingResponse, ConfirmationRecord};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Booking service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Booking service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected booking response: {0}")]
    Decode(String),
}

/// The remote booking endpoint
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Place a booking and return the server's confirmation details
    async fn create_booking(&self, request: &BookingRequest) -> Result<ConfirmationRecord, ApiError>;
}

/// `POST {base_url}/booking` over HTTP
#[derive(Debug, Clone)]
pub struct HttpBookingClient {
    client: Client,
    base_url: String,
}

impl HttpBookingClient {
    /// No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BookingApi for HttpBookingClient {
    async fn create_booking(&self, request: &BookingRequest) -> Result<ConfirmationRecord, ApiError> {
        let url = format!("{}/booking", self.base_url);
        debug!("POST {} {:?}", url, request);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: BookingResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.booking_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = HttpBookingClient::new("http://127.0.0.1:3000/", None).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) is closed on test machines.
        let client = HttpBookingClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let request = BookingRequest {
            when: "2024-12-25T18:00".into(),
            people: 1,
            lanes: 1,
            shoes: vec!["42".into()],
        };

        let err = client.create_booking(&request).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
