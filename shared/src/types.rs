//! API request and response types
//!
//! Account payloads use camelCase field names on the wire, matching the
//! frontend the service was originally built against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Success envelope: `{"status":"success", "message": ..., "data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessBody<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
            data,
        }
    }
}

/// Success envelope for list endpoints, with a result count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBody<T> {
    pub status: String,
    pub results: usize,
    pub data: T,
}

impl<T> ListBody<T> {
    pub fn new(results: usize, data: T) -> Self {
        Self {
            status: "success".to_string(),
            results,
            data,
        }
    }
}

/// Success envelope without a data payload (logout)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub status: String,
    pub message: String,
}

impl MessageBody {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Failure envelope: `{"status":"fail", "message": ...}`
///
/// Every user-visible failure takes this shape, regardless of status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailBody {
    pub status: String,
    pub message: String,
}

impl FailBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
        }
    }
}

/// Password signup request
///
/// Unknown body fields are ignored; everything the service persists is
/// named here explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub associated_building_ids: Vec<Uuid>,
}

/// Login request; both fields are required but deserialized leniently so
/// a missing field yields a 400 with a useful message rather than a 422
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Body for the email-only endpoints (federated signup, lookup-by-email)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Building manager response payload.
///
/// This is an explicit allow-list: the password hash is not a field here,
/// so it cannot leak no matter what the store returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub associated_building_ids: Vec<Uuid>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `data` wrapper for single-account responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    pub account: AccountResponse,
}

/// Unit response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitResponse {
    pub id: String,
    pub unit_number: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<i64>,
    pub occupied: bool,
}

/// `data` wrapper for unit listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsData {
    pub units: Vec<UnitResponse>,
}
