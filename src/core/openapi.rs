use utoipa::{Modify, OpenApi};

use crate::features::countries::{dtos as countries_dtos, handlers as countries_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Countries
        countries_handlers::list_countries,
        countries_handlers::get_country,
        countries_handlers::create_country,
        countries_handlers::update_country,
        countries_handlers::delete_country,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Countries
            countries_dtos::CountrySummaryDto,
            countries_dtos::CountryDetailDto,
            countries_dtos::CreateCountryDto,
            countries_dtos::UpdateCountryDto,
            ApiResponse<Vec<countries_dtos::CountrySummaryDto>>,
            ApiResponse<countries_dtos::CountryDetailDto>,
        )
    ),
    tags(
        (name = "countries", description = "ISO-3166 country records (public)"),
    ),
    info(
        title = "Atlas API",
        version = "0.1.0",
        description = "REST API for hierarchical geographic resources",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
