use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError};

/// Login with user name and password
pub async fn login(user_name: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        user_name,
        password,
    };

    let response = Request::post(&api_url("/Auth/Login"))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: response.text().await.unwrap_or_default(),
        });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
