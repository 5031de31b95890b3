//! Building manager repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Role constant stamped on every record at creation; immutable thereafter
pub const MANAGER_ROLE: &str = "buildingManager";

/// Building manager record from the database
///
/// `password_hash` is only populated by the login query; default reads do
/// not select the column, so `#[sqlx(default)]` leaves it `None`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ManagerRecord {
    pub id: Uuid,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    #[sqlx(default)]
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub associated_building_ids: Vec<Uuid>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a building manager
#[derive(Debug, Clone, Default)]
pub struct NewManager {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub associated_building_ids: Vec<Uuid>,
}

/// Building manager repository
pub struct ManagerRepository;

impl ManagerRepository {
    /// Create a building manager
    ///
    /// A unique-index collision on username/email comes back as
    /// `sqlx::Error::Database` with code 23505 and the index name.
    pub async fn create(pool: &PgPool, manager: NewManager) -> Result<ManagerRecord, sqlx::Error> {
        sqlx::query_as::<_, ManagerRecord>(
            r#"
            INSERT INTO building_managers
                (name, username, email, password_hash, phone, avatar_url,
                 associated_building_ids, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, username, email, phone, avatar_url,
                      associated_building_ids, role, created_at, updated_at
            "#,
        )
        .bind(manager.name)
        .bind(manager.username)
        .bind(manager.email)
        .bind(manager.password_hash)
        .bind(manager.phone)
        .bind(manager.avatar_url)
        .bind(manager.associated_building_ids)
        .bind(MANAGER_ROLE)
        .fetch_one(pool)
        .await
    }

    /// Find a building manager by id (no hash)
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ManagerRecord>, sqlx::Error> {
        sqlx::query_as::<_, ManagerRecord>(
            r#"
            SELECT id, name, username, email, phone, avatar_url,
                   associated_building_ids, role, created_at, updated_at
            FROM building_managers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find a building manager by email (no hash)
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<ManagerRecord>, sqlx::Error> {
        sqlx::query_as::<_, ManagerRecord>(
            r#"
            SELECT id, name, username, email, phone, avatar_url,
                   associated_building_ids, role, created_at, updated_at
            FROM building_managers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find a building manager by username, including the password hash.
    /// Login is the only caller.
    pub async fn find_by_username_with_hash(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<ManagerRecord>, sqlx::Error> {
        sqlx::query_as::<_, ManagerRecord>(
            r#"
            SELECT id, name, username, email, password_hash, phone, avatar_url,
                   associated_building_ids, role, created_at, updated_at
            FROM building_managers
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }
}
