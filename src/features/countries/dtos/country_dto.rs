use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::countries::models::Country;
use crate::shared::validation::{ALPHA_CODE2_REGEX, ALPHA_CODE3_REGEX, NUMERIC_CODE_REGEX};

/// Summary view for country list responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountrySummaryDto {
    pub id: Uuid,
    pub numeric_code: String,
    pub name: String,
    pub alpha_code2: String,
}

impl From<&Country> for CountrySummaryDto {
    fn from(c: &Country) -> Self {
        Self {
            id: c.id,
            numeric_code: c.numeric_code.clone(),
            name: c.name.clone(),
            alpha_code2: c.alpha_code2.clone(),
        }
    }
}

/// Full view for single-country responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryDetailDto {
    pub id: Uuid,
    pub numeric_code: String,
    pub alpha_code2: String,
    pub alpha_code3: String,
    pub name: String,
    pub description: String,
}

impl From<&Country> for CountryDetailDto {
    fn from(c: &Country) -> Self {
        Self {
            id: c.id,
            numeric_code: c.numeric_code.clone(),
            alpha_code2: c.alpha_code2.clone(),
            alpha_code3: c.alpha_code3.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
        }
    }
}

// Create request (id is server-assigned)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCountryDto {
    /// ISO 3166-1 numeric code (three digits)
    #[validate(regex(path = *NUMERIC_CODE_REGEX, message = "numeric_code must be exactly three digits"))]
    pub numeric_code: String,

    /// ISO 3166-1 alpha-2 code (two uppercase letters)
    #[validate(regex(path = *ALPHA_CODE2_REGEX, message = "alpha_code2 must be exactly two uppercase letters"))]
    pub alpha_code2: String,

    /// ISO 3166-1 alpha-3 code (three uppercase letters)
    #[validate(regex(path = *ALPHA_CODE3_REGEX, message = "alpha_code3 must be exactly three uppercase letters"))]
    pub alpha_code3: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
}

// Update request (id must match the path id)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCountryDto {
    pub id: Uuid,

    /// ISO 3166-1 numeric code (three digits)
    #[validate(regex(path = *NUMERIC_CODE_REGEX, message = "numeric_code must be exactly three digits"))]
    pub numeric_code: String,

    /// ISO 3166-1 alpha-2 code (two uppercase letters)
    #[validate(regex(path = *ALPHA_CODE2_REGEX, message = "alpha_code2 must be exactly two uppercase letters"))]
    pub alpha_code2: String,

    /// ISO 3166-1 alpha-3 code (three uppercase letters)
    #[validate(regex(path = *ALPHA_CODE3_REGEX, message = "alpha_code3 must be exactly three uppercase letters"))]
    pub alpha_code3: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
}
