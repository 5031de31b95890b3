//! Building manager service: signup, login, session lookup, federated
//! provisioning
//!
//! The store carries no validators, so every schema rule is applied here
//! before a write. Password hashing runs on the blocking thread pool.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{ManagerRecord, ManagerRepository, NewManager};
use property_manager_shared::errors::AuthError;
use property_manager_shared::types::{AccountResponse, LoginRequest, SignUpRequest};
use property_manager_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;

/// Building manager service
pub struct ManagerService;

impl ManagerService {
    /// Password-based signup
    ///
    /// Returns the created account plus a freshly issued session token; the
    /// route layer turns the token into the cookie.
    pub async fn sign_up(
        pool: &PgPool,
        jwt: &JwtService,
        req: SignUpRequest,
    ) -> Result<(AccountResponse, String), ApiError> {
        let password = req
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::Validation("Password is required".to_string()))?;
        validation::validate_password(password).map_err(ApiError::Validation)?;

        let name = normalize(req.name);
        if let Some(name) = &name {
            validation::validate_name(name).map_err(ApiError::Validation)?;
        }

        let username = normalize(req.username);
        if let Some(username) = &username {
            validation::validate_username(username).map_err(ApiError::Validation)?;
        }

        let phone = trimmed(req.phone);
        if let Some(phone) = &phone {
            validation::validate_phone(phone).map_err(ApiError::Validation)?;
        }

        let avatar_url = trimmed(req.avatar_url);
        if let Some(url) = &avatar_url {
            validation::validate_url(url).map_err(ApiError::Validation)?;
        }

        let email = derived_email(username.as_deref(), normalize(req.email));
        if let Some(email) = &email {
            validation::validate_email(email).map_err(ApiError::Validation)?;
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;

        let record = ManagerRepository::create(
            pool,
            NewManager {
                name,
                username,
                email,
                password_hash: Some(password_hash),
                phone,
                avatar_url,
                associated_building_ids: req.associated_building_ids,
            },
        )
        .await?;

        let token = jwt.issue(record.id).map_err(ApiError::Internal)?;
        Ok((to_response(record), token))
    }

    /// Login with username and password
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        req: LoginRequest,
    ) -> Result<(AccountResponse, String), ApiError> {
        let username = normalize(req.username);
        let password = req.password.filter(|p| !p.is_empty());
        let (Some(username), Some(password)) = (username, password) else {
            return Err(ApiError::Validation(
                "Username and password are required".to_string(),
            ));
        };

        // Unknown username, federated account, and wrong password all fail
        // with the same message so usernames cannot be enumerated.
        let manager = ManagerRepository::find_by_username_with_hash(pool, &username).await?;
        let Some(manager) = manager else {
            return Err(AuthError::InvalidCredentials.into());
        };
        let Some(hash) = manager.password_hash.clone() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = PasswordService::verify_async(password, hash)
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = jwt.issue(manager.id).map_err(ApiError::Internal)?;
        Ok((to_response(manager), token))
    }

    /// Look up the account behind a verified session
    pub async fn current(pool: &PgPool, manager_id: Uuid) -> Result<AccountResponse, ApiError> {
        let manager = ManagerRepository::find_by_id(pool, manager_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Building manager not found".to_string()))?;
        Ok(to_response(manager))
    }

    /// Federated (email-only) provisioning
    ///
    /// Idempotent: an existing account for the email is returned as-is, a
    /// missing one is created with a synthesized username, no password, and
    /// no session.
    pub async fn provision_by_email(
        pool: &PgPool,
        email: Option<String>,
    ) -> Result<AccountResponse, ApiError> {
        let email = normalize(email)
            .ok_or_else(|| ApiError::Validation("Email is required".to_string()))?;
        validation::validate_email(&email).map_err(ApiError::Validation)?;

        if let Some(existing) = ManagerRepository::find_by_email(pool, &email).await? {
            return Ok(to_response(existing));
        }

        let record = ManagerRepository::create(
            pool,
            NewManager {
                username: Some(federated_username(&email)),
                email: Some(email),
                ..Default::default()
            },
        )
        .await?;
        Ok(to_response(record))
    }

    /// Look up an account by email; never creates
    pub async fn lookup_by_email(
        pool: &PgPool,
        email: Option<String>,
    ) -> Result<AccountResponse, ApiError> {
        let email = normalize(email)
            .ok_or_else(|| ApiError::Validation("Email is required".to_string()))?;

        let manager = ManagerRepository::find_by_email(pool, &email)
            .await?
            .ok_or_else(|| ApiError::NotFound("Building manager not found".to_string()))?;
        Ok(to_response(manager))
    }
}

/// Trim, lowercase, and drop empty strings (name/username/email are stored
/// case-normalized)
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Trim without case folding (phone numbers, URLs)
fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Choose the email to persist at signup.
///
/// A non-empty username synthesizes a placeholder address that wins over
/// any caller-supplied email, so every account resolves to some address.
/// This is a deliberate product rule, not an accident.
pub(crate) fn derived_email(username: Option<&str>, provided: Option<String>) -> Option<String> {
    match username {
        Some(u) if !u.is_empty() => Some(placeholder_email(u)),
        _ => provided,
    }
}

/// Placeholder address built from the username, skipping its 8-character
/// "manager@" prefix
pub(crate) fn placeholder_email(username: &str) -> String {
    let suffix = username.get(8..).unwrap_or("");
    format!("dummyEmail{}@example.com", suffix).to_lowercase()
}

/// Username synthesized for a federated account: `manager@<local part>`
pub(crate) fn federated_username(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    format!("manager@{}", local)
}

/// Shape a record for the wire: explicit allow-list, the hash is dropped
/// here no matter which query produced the record
fn to_response(record: ManagerRecord) -> AccountResponse {
    AccountResponse {
        id: record.id.to_string(),
        name: record.name,
        username: record.username,
        email: record.email,
        phone: record.phone,
        avatar_url: record.avatar_url,
        associated_building_ids: record.associated_building_ids,
        role: record.role,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_placeholder_email_skips_manager_prefix() {
        assert_eq!(
            placeholder_email("manager@alice"),
            "dummyemailalice@example.com"
        );
    }

    #[test]
    fn test_placeholder_email_short_username() {
        // shorter than the offset: suffix is empty, address still valid
        assert_eq!(placeholder_email("alice"), "dummyemail@example.com");
    }

    #[test]
    fn test_derived_email_placeholder_wins_over_provided() {
        let email = derived_email(
            Some("manager@bob"),
            Some("real.bob@example.com".to_string()),
        );
        assert_eq!(email.as_deref(), Some("dummyemailbob@example.com"));
    }

    #[test]
    fn test_derived_email_falls_back_to_provided() {
        let email = derived_email(None, Some("carol@example.com".to_string()));
        assert_eq!(email.as_deref(), Some("carol@example.com"));

        let email = derived_email(Some(""), Some("carol@example.com".to_string()));
        assert_eq!(email.as_deref(), Some("carol@example.com"));
    }

    #[test]
    fn test_federated_username_uses_local_part() {
        assert_eq!(federated_username("dave@example.com"), "manager@dave");
        assert_eq!(federated_username("no-at-sign"), "manager@no-at-sign");
    }

    #[test]
    fn test_normalize_trims_lowercases_and_drops_empty() {
        assert_eq!(
            normalize(Some("  Manager@Alice  ".to_string())),
            Some("manager@alice".to_string())
        );
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_response_shaping_drops_the_hash() {
        let record = ManagerRecord {
            id: Uuid::new_v4(),
            name: None,
            username: Some("manager@eve".to_string()),
            email: Some("dummyemaileve@example.com".to_string()),
            password_hash: Some("$argon2id$v=19$secret".to_string()),
            phone: None,
            avatar_url: None,
            associated_building_ids: vec![],
            role: "buildingManager".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = to_response(record);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.to_lowercase().contains("password"));
    }
}
