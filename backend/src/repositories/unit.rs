//! Unit repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Rental unit record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UnitRecord {
    pub id: Uuid,
    pub unit_number: String,
    pub kind: String,
    pub building_id: Option<Uuid>,
    pub floor: Option<i32>,
    pub bedrooms: Option<i32>,
    pub rent: Option<i64>,
    pub occupied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unit repository
pub struct UnitRepository;

impl UnitRepository {
    /// List all units, optionally filtered to an exact rent
    pub async fn list(pool: &PgPool, rent: Option<i64>) -> Result<Vec<UnitRecord>, sqlx::Error> {
        sqlx::query_as::<_, UnitRecord>(
            r#"
            SELECT id, unit_number, kind, building_id, floor, bedrooms, rent,
                   occupied, created_at, updated_at
            FROM units
            WHERE ($1::BIGINT IS NULL OR rent = $1)
            ORDER BY unit_number
            "#,
        )
        .bind(rent)
        .fetch_all(pool)
        .await
    }

    /// List units of one kind, optionally filtered to an exact rent
    pub async fn list_by_kind(
        pool: &PgPool,
        kind: &str,
        rent: Option<i64>,
    ) -> Result<Vec<UnitRecord>, sqlx::Error> {
        sqlx::query_as::<_, UnitRecord>(
            r#"
            SELECT id, unit_number, kind, building_id, floor, bedrooms, rent,
                   occupied, created_at, updated_at
            FROM units
            WHERE kind = $1 AND ($2::BIGINT IS NULL OR rent = $2)
            ORDER BY unit_number
            "#,
        )
        .bind(kind)
        .bind(rent)
        .fetch_all(pool)
        .await
    }
}
