use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::countries::dtos::{
    CountryDetailDto, CountrySummaryDto, CreateCountryDto, UpdateCountryDto,
};
use crate::features::countries::services::CountryService;
use crate::shared::types::{ApiResponse, Meta};

/// List all countries
///
/// Returns summaries in insertion order. No filtering, no pagination.
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "List of country summaries", body = ApiResponse<Vec<CountrySummaryDto>>),
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<CountryService>>,
) -> Result<Json<ApiResponse<Vec<CountrySummaryDto>>>> {
    let countries = service.list().await;
    let total = countries.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(countries),
        None,
        Some(Meta { total }),
    )))
}

/// Get country detail by id
#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    params(
        ("id" = Uuid, Path, description = "Country id")
    ),
    responses(
        (status = 200, description = "Country found", body = ApiResponse<CountryDetailDto>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CountryDetailDto>>> {
    let country = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(country), None, None)))
}

/// Create a country
///
/// The id is server-assigned; the response carries a `Location` header
/// referencing the new resource.
#[utoipa::path(
    post,
    path = "/api/countries",
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Country created successfully", body = ApiResponse<CountryDetailDto>),
        (status = 400, description = "Validation error or code already in use")
    ),
    tag = "countries"
)]
pub async fn create_country(
    State(service): State<Arc<CountryService>>,
    AppJson(dto): AppJson<CreateCountryDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ApiResponse<CountryDetailDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.create(dto).await?;
    let location = format!("/api/countries/{}", country.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(country), None, None)),
    ))
}

/// Update a country
///
/// The body id must match the path id.
#[utoipa::path(
    put,
    path = "/api/countries/{id}",
    params(
        ("id" = Uuid, Path, description = "Country id")
    ),
    request_body = UpdateCountryDto,
    responses(
        (status = 204, description = "Country updated successfully"),
        (status = 400, description = "Validation error, id mismatch or code already in use"),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn update_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCountryDto>,
) -> Result<StatusCode> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a country
///
/// The last remaining record cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    params(
        ("id" = Uuid, Path, description = "Country id")
    ),
    responses(
        (status = 204, description = "Country deleted successfully"),
        (status = 404, description = "Country not found"),
        (status = 409, description = "Last record cannot be deleted")
    ),
    tag = "countries"
)]
pub async fn delete_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
