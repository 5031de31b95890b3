//! Unit listing routes

use crate::error::ApiResult;
use crate::repositories::{UnitRecord, UnitRepository};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use property_manager_shared::types::{ListBody, UnitResponse, UnitsData};
use serde::Deserialize;

/// Query parameters for unit listings; `rent` is the only filter the API
/// whitelists
#[derive(Debug, Deserialize)]
pub struct UnitListQuery {
    pub rent: Option<i64>,
}

/// Create unit routes
pub fn unit_routes() -> Router<AppState> {
    Router::new().route("/", get(list_units))
}

/// Create apartment unit routes
pub fn apartment_unit_routes() -> Router<AppState> {
    Router::new().route("/", get(list_apartment_units))
}

/// GET /api/v1/units
async fn list_units(
    State(state): State<AppState>,
    Query(query): Query<UnitListQuery>,
) -> ApiResult<Json<ListBody<UnitsData>>> {
    let units = UnitRepository::list(&state.db, query.rent).await?;
    Ok(Json(list_body(units)))
}

/// GET /api/v1/apartment-units
async fn list_apartment_units(
    State(state): State<AppState>,
    Query(query): Query<UnitListQuery>,
) -> ApiResult<Json<ListBody<UnitsData>>> {
    let units = UnitRepository::list_by_kind(&state.db, "apartment", query.rent).await?;
    Ok(Json(list_body(units)))
}

fn list_body(records: Vec<UnitRecord>) -> ListBody<UnitsData> {
    let units: Vec<UnitResponse> = records.into_iter().map(to_response).collect();
    ListBody::new(units.len(), UnitsData { units })
}

fn to_response(record: UnitRecord) -> UnitResponse {
    UnitResponse {
        id: record.id.to_string(),
        unit_number: record.unit_number,
        kind: record.kind,
        building_id: record.building_id,
        floor: record.floor,
        bedrooms: record.bedrooms,
        rent: record.rent,
        occupied: record.occupied,
    }
}
