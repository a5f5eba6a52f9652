//! Generic CRUD client for every [`CrudResource`].
//!
//! Endpoint paths are built by pure functions so they can be checked without
//! a browser; the request functions add the bearer token and the audit
//! headers the backend expects (`createdBy`, `modifiedBy`, `deletedBy`).

use crate::shared::api_utils::{api_url, ApiError};
use crate::system::auth::storage;
use contracts::domain::common::CrudResource;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn all_path<T: CrudResource>() -> String {
    format!("{}/Get-All-{}", T::BASE, T::SINGULAR)
}

pub fn by_id_path<T: CrudResource>(id: i64) -> String {
    format!("{}/Get-{}-By-Id/{}", T::BASE, T::SINGULAR, id)
}

pub fn add_path<T: CrudResource>() -> String {
    format!("{}/Add-{}", T::BASE, T::SINGULAR)
}

pub fn update_path<T: CrudResource>(id: i64) -> String {
    format!("{}/Update-{}/{}", T::BASE, T::SINGULAR, id)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteQuery {
    deleted_by: i64,
}

pub fn delete_path<T: CrudResource>(id: i64, deleted_by: i64) -> String {
    let query = serde_qs::to_string(&DeleteQuery { deleted_by }).unwrap_or_default();
    format!("{}/Delete-{}/{}?{}", T::BASE, T::SINGULAR, id, query)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn current_user() -> Result<i64, ApiError> {
    storage::get_user_id().ok_or(ApiError::NotAuthenticated)
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message })
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Serializing the request body failed before anything was sent.
fn encode(e: impl std::fmt::Display) -> ApiError {
    ApiError::Encode(e.to_string())
}

/// `GET` an arbitrary API path and decode its JSON body.
pub async fn get_json<R: DeserializeOwned>(path: &str) -> Result<R, ApiError> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response)
        .await?
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_all<T: CrudResource>() -> Result<Vec<T>, ApiError> {
    get_json(&all_path::<T>()).await
}

pub async fn fetch_by_id<T: CrudResource>(id: i64) -> Result<T, ApiError> {
    get_json(&by_id_path::<T>(id)).await
}

pub async fn create<T: CrudResource>(dto: &T) -> Result<(), ApiError> {
    let user_id = current_user()?;
    let request = authorized(Request::post(&api_url(&add_path::<T>())))
        .header("createdBy", &user_id.to_string())
        .json(dto)
        .map_err(encode)?;
    ensure_ok(request.send().await.map_err(network)?).await?;
    Ok(())
}

pub async fn update<T: CrudResource>(id: i64, dto: &T) -> Result<(), ApiError> {
    let user_id = current_user()?;
    let request = authorized(Request::put(&api_url(&update_path::<T>(id))))
        .header("modifiedBy", &user_id.to_string())
        .json(dto)
        .map_err(encode)?;
    ensure_ok(request.send().await.map_err(network)?).await?;
    Ok(())
}

pub async fn delete<T: CrudResource>(id: i64) -> Result<(), ApiError> {
    let user_id = current_user()?;
    let response = authorized(Request::delete(&api_url(&delete_path::<T>(id, user_id))))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?;
    Ok(())
}

/// Create when the record has no id yet, update otherwise.
pub async fn save<T: CrudResource>(dto: &T) -> Result<(), ApiError> {
    match dto.id() {
        Some(id) => update(id, dto).await,
        None => create(dto).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_unit_charge::aggregate::UnitCharge;

    #[test]
    fn builds_backend_endpoint_names() {
        assert_eq!(all_path::<UnitCharge>(), "/UnitCharge/Get-All-UnitCharge");
        assert_eq!(by_id_path::<UnitCharge>(9), "/UnitCharge/Get-UnitCharge-By-Id/9");
        assert_eq!(add_path::<UnitCharge>(), "/UnitCharge/Add-UnitCharge");
        assert_eq!(update_path::<UnitCharge>(9), "/UnitCharge/Update-UnitCharge/9");
        assert_eq!(
            delete_path::<UnitCharge>(9, 2),
            "/UnitCharge/Delete-UnitCharge/9?deletedBy=2"
        );
    }

    #[test]
    fn body_encoding_failure_is_not_a_network_error() {
        let err = encode("key must be a string");
        assert_eq!(err, ApiError::Encode("key must be a string".into()));
        assert_ne!(
            err.user_message(),
            ApiError::Network("offline".into()).user_message()
        );
    }
}
