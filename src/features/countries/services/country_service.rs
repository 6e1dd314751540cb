use tokio::sync::RwLock;
use uuid::{uuid, Uuid};

use crate::core::error::{AppError, Result};
use crate::features::countries::dtos::{
    CountryDetailDto, CountrySummaryDto, CreateCountryDto, UpdateCountryDto,
};
use crate::features::countries::models::Country;

/// In-memory country registry.
///
/// Owns the authoritative list of country records and enforces the uniqueness
/// and minimum-count invariants on every mutation. All operations take the
/// write lock for the full read-modify-write, so mutations are linearizable;
/// a rejected mutation leaves the list untouched.
pub struct CountryService {
    countries: RwLock<Vec<Country>>,
}

impl Default for CountryService {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryService {
    /// Create a registry seeded with the reference data set.
    pub fn new() -> Self {
        Self {
            countries: RwLock::new(seed_countries()),
        }
    }

    #[cfg(test)]
    pub fn with_records(records: Vec<Country>) -> Self {
        Self {
            countries: RwLock::new(records),
        }
    }

    /// List all countries in insertion order, projected to summaries.
    pub async fn list(&self) -> Vec<CountrySummaryDto> {
        let countries = self.countries.read().await;
        countries.iter().map(CountrySummaryDto::from).collect()
    }

    /// Get full country detail by id.
    pub async fn get(&self, id: Uuid) -> Result<CountryDetailDto> {
        let countries = self.countries.read().await;
        countries
            .iter()
            .find(|c| c.id == id)
            .map(CountryDetailDto::from)
            .ok_or_else(|| not_found(id))
    }

    /// Insert a new country with a fresh server-assigned id.
    ///
    /// Code uniqueness is checked against all existing records, in the order
    /// numeric_code, alpha_code2, alpha_code3; the first collision wins.
    pub async fn create(&self, dto: CreateCountryDto) -> Result<CountryDetailDto> {
        let mut countries = self.countries.write().await;

        check_unique_codes(
            &countries,
            &dto.numeric_code,
            &dto.alpha_code2,
            &dto.alpha_code3,
            None,
        )?;

        let country = Country {
            id: Uuid::new_v4(),
            numeric_code: dto.numeric_code,
            alpha_code2: dto.alpha_code2,
            alpha_code3: dto.alpha_code3,
            name: dto.name,
            description: dto.description,
        };

        let detail = CountryDetailDto::from(&country);
        countries.push(country);

        Ok(detail)
    }

    /// Replace all mutable fields of the country addressed by `id`.
    ///
    /// The body id must match the addressed id; collisions are checked
    /// against all other records so a record may keep its own codes.
    pub async fn update(&self, id: Uuid, dto: UpdateCountryDto) -> Result<()> {
        if dto.id != id {
            return Err(AppError::BadRequest(format!(
                "There is an inconsistency in the submitted information: path id '{}' does not match body id '{}'",
                id, dto.id
            )));
        }

        let mut countries = self.countries.write().await;

        if !countries.iter().any(|c| c.id == id) {
            return Err(not_found(id));
        }

        check_unique_codes(
            &countries,
            &dto.numeric_code,
            &dto.alpha_code2,
            &dto.alpha_code3,
            Some(id),
        )?;

        // Lookup cannot fail, existence was checked above under the same lock.
        if let Some(country) = countries.iter_mut().find(|c| c.id == id) {
            country.numeric_code = dto.numeric_code;
            country.alpha_code2 = dto.alpha_code2;
            country.alpha_code3 = dto.alpha_code3;
            country.name = dto.name;
            country.description = dto.description;
        }

        Ok(())
    }

    /// Remove the country addressed by `id`.
    ///
    /// The last remaining record cannot be deleted.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut countries = self.countries.write().await;

        let position = countries
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        if countries.len() == 1 {
            return Err(AppError::Conflict(
                "This record could not be deleted because there must be at least one record in the registry".to_string(),
            ));
        }

        countries.remove(position);

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!(
        "No records found matching your search criteria. Search country id: '{}'",
        id
    ))
}

/// Enforce code uniqueness against the current records.
///
/// Check order is significant: numeric_code, then alpha_code2, then
/// alpha_code3, first failure short-circuits. `exclude` allows a record to
/// keep its own codes on update.
fn check_unique_codes(
    countries: &[Country],
    numeric_code: &str,
    alpha_code2: &str,
    alpha_code3: &str,
    exclude: Option<Uuid>,
) -> Result<()> {
    let others = || countries.iter().filter(|c| Some(c.id) != exclude);

    if others().any(|c| c.numeric_code == numeric_code) {
        return Err(AppError::BadRequest(format!(
            "Numeric code is used by another record. Numeric code is: '{}'",
            numeric_code
        )));
    }

    if others().any(|c| c.alpha_code2 == alpha_code2) {
        return Err(AppError::BadRequest(format!(
            "Alpha code2 is used by another record. Alpha code2 is: '{}'",
            alpha_code2
        )));
    }

    if others().any(|c| c.alpha_code3 == alpha_code3) {
        return Err(AppError::BadRequest(format!(
            "Alpha code3 is used by another record. Alpha code3 is: '{}'",
            alpha_code3
        )));
    }

    Ok(())
}

/// Reference seed records, loaded at construction.
/// https://en.wikipedia.org/wiki/List_of_ISO_3166_country_codes
fn seed_countries() -> Vec<Country> {
    vec![
        Country {
            id: uuid!("6ad0fe84-1255-4eb0-beea-e259d1055495"),
            numeric_code: "008".to_string(),
            alpha_code2: "AL".to_string(),
            alpha_code3: "ALB".to_string(),
            name: "Albania".to_string(),
            description: "The Republic of Albania".to_string(),
        },
        Country {
            id: uuid!("5f2bc6be-1655-49e8-aebd-a43e3d501a06"),
            numeric_code: "076".to_string(),
            alpha_code2: "BR".to_string(),
            alpha_code3: "BRA".to_string(),
            name: "Brazil".to_string(),
            description: "The Federative Republic of Brazil".to_string(),
        },
        Country {
            id: uuid!("7f8b45f6-0ca1-47e2-80b0-5db38384155f"),
            numeric_code: "792".to_string(),
            alpha_code2: "TR".to_string(),
            alpha_code3: "TUR".to_string(),
            name: "Türkiye".to_string(),
            description: "The Republic of Turkey".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(numeric: &str, alpha2: &str, alpha3: &str, name: &str) -> CreateCountryDto {
        CreateCountryDto {
            numeric_code: numeric.to_string(),
            alpha_code2: alpha2.to_string(),
            alpha_code3: alpha3.to_string(),
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn update_dto(
        id: Uuid,
        numeric: &str,
        alpha2: &str,
        alpha3: &str,
        name: &str,
        description: &str,
    ) -> UpdateCountryDto {
        UpdateCountryDto {
            id,
            numeric_code: numeric.to_string(),
            alpha_code2: alpha2.to_string(),
            alpha_code3: alpha3.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_registry_lists_in_insertion_order() {
        let service = CountryService::new();

        let summaries = service.list().await;

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].name, "Albania");
        assert_eq!(summaries[1].name, "Brazil");
        assert_eq!(summaries[2].name, "Türkiye");
        assert_eq!(summaries[0].numeric_code, "008");
        assert_eq!(summaries[0].alpha_code2, "AL");
    }

    #[tokio::test]
    async fn test_get_returns_full_detail() {
        let service = CountryService::new();
        let albania_id = service.list().await[0].id;

        let detail = service.get(albania_id).await.unwrap();

        assert_eq!(detail.id, albania_id);
        assert_eq!(detail.numeric_code, "008");
        assert_eq!(detail.alpha_code2, "AL");
        assert_eq!(detail.alpha_code3, "ALB");
        assert_eq!(detail.name, "Albania");
        assert_eq!(detail.description, "The Republic of Albania");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = CountryService::new();

        let result = service.get(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_roundtrips() {
        let service = CountryService::new();
        let dto = CreateCountryDto {
            numeric_code: "392".to_string(),
            alpha_code2: "JP".to_string(),
            alpha_code3: "JPN".to_string(),
            name: "Japan".to_string(),
            description: "The State of Japan".to_string(),
        };

        let created = service.create(dto).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched.numeric_code, "392");
        assert_eq!(fetched.alpha_code2, "JP");
        assert_eq!(fetched.alpha_code3, "JPN");
        assert_eq!(fetched.name, "Japan");
        assert_eq!(fetched.description, "The State of Japan");
        assert_eq!(service.list().await.len(), 4);
        // appended at the end, insertion order preserved
        assert_eq!(service.list().await[3].id, created.id);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_numeric_code_first() {
        let service = CountryService::new();

        // Collides with Albania on numeric_code only; check order makes
        // numeric_code the reported field.
        let result = service.create(create_dto("008", "XX", "XXX", "Dup")).await;

        match result {
            Err(AppError::BadRequest(msg)) => {
                assert!(msg.contains("Numeric code"));
                assert!(msg.contains("008"));
            }
            other => panic!("expected BadRequest, got {:?}", other.map(|d| d.name)),
        }
        assert_eq!(service.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_alpha_code2() {
        let service = CountryService::new();

        let result = service.create(create_dto("999", "BR", "XXX", "Dup")).await;

        match result {
            Err(AppError::BadRequest(msg)) => {
                assert!(msg.contains("Alpha code2"));
                assert!(msg.contains("BR"));
            }
            other => panic!("expected BadRequest, got {:?}", other.map(|d| d.name)),
        }
        assert_eq!(service.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_alpha_code3() {
        let service = CountryService::new();

        // alpha_code3 is checked on its own, not via the numeric_code result
        let result = service.create(create_dto("999", "XX", "TUR", "Dup")).await;

        match result {
            Err(AppError::BadRequest(msg)) => {
                assert!(msg.contains("Alpha code3"));
                assert!(msg.contains("TUR"));
            }
            other => panic!("expected BadRequest, got {:?}", other.map(|d| d.name)),
        }
        assert_eq!(service.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_sequences_never_produce_duplicate_codes() {
        let service = CountryService::new();

        let attempts = vec![
            create_dto("392", "JP", "JPN", "Japan"),
            create_dto("392", "DE", "DEU", "Collides on numeric"),
            create_dto("276", "JP", "DEU", "Collides on alpha2"),
            create_dto("276", "DE", "JPN", "Collides on alpha3"),
            create_dto("276", "DE", "DEU", "Germany"),
        ];

        for dto in attempts {
            let _ = service.create(dto).await;
        }

        let records = service.list().await;
        let mut numeric: Vec<_> = records.iter().map(|c| c.numeric_code.clone()).collect();
        numeric.sort();
        numeric.dedup();
        assert_eq!(numeric.len(), records.len());

        let mut alpha2: Vec<_> = records.iter().map(|c| c.alpha_code2.clone()).collect();
        alpha2.sort();
        alpha2.dedup();
        assert_eq!(alpha2.len(), records.len());
    }

    #[tokio::test]
    async fn test_update_with_mismatched_id_is_rejected_unchanged() {
        let service = CountryService::new();
        let albania_id = service.list().await[0].id;
        let before = service.get(albania_id).await.unwrap();

        let dto = update_dto(Uuid::new_v4(), "008", "AL", "ALB", "Renamed", "changed");
        let result = service.update(albania_id, dto).await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("inconsistency")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        let after = service.get(albania_id).await.unwrap();
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = CountryService::new();
        let id = Uuid::new_v4();

        let dto = update_dto(id, "999", "XX", "XXX", "Ghost", "");
        let result = service.update(id, dto).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_codes() {
        let service = CountryService::new();
        let albania_id = service.list().await[0].id;

        // Only the description changes; the record keeps its own codes.
        let dto = update_dto(
            albania_id,
            "008",
            "AL",
            "ALB",
            "Albania",
            "A country in Southeast Europe",
        );
        service.update(albania_id, dto).await.unwrap();

        let detail = service.get(albania_id).await.unwrap();
        assert_eq!(detail.description, "A country in Southeast Europe");
        assert_eq!(detail.numeric_code, "008");
        assert_eq!(detail.alpha_code2, "AL");
        assert_eq!(detail.alpha_code3, "ALB");
        assert_eq!(detail.name, "Albania");
    }

    #[tokio::test]
    async fn test_update_rejects_codes_of_other_records() {
        let service = CountryService::new();
        let albania_id = service.list().await[0].id;

        // Brazil already owns numeric_code 076
        let dto = update_dto(albania_id, "076", "AL", "ALB", "Albania", "");
        let result = service.update(albania_id, dto).await;

        match result {
            Err(AppError::BadRequest(msg)) => {
                assert!(msg.contains("Numeric code"));
                assert!(msg.contains("076"));
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
        // registry unchanged
        let detail = service.get(albania_id).await.unwrap();
        assert_eq!(detail.numeric_code, "008");
    }

    #[tokio::test]
    async fn test_update_check_order_reports_numeric_code_first() {
        let service = CountryService::new();
        let albania_id = service.list().await[0].id;

        // Collides with Brazil on all three codes; numeric_code wins.
        let dto = update_dto(albania_id, "076", "BR", "BRA", "Albania", "");
        let result = service.update(albania_id, dto).await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("Numeric code")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_only_the_target() {
        let service = CountryService::new();
        let summaries = service.list().await;
        let brazil_id = summaries[1].id;

        service.delete(brazil_id).await.unwrap();

        let remaining = service.list().await;
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|c| c.id != brazil_id));
        assert_eq!(remaining[0].name, "Albania");
        assert_eq!(remaining[1].name, "Türkiye");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let service = CountryService::new();

        let result = service.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(service.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_last_record_is_rejected() {
        let only = Country {
            id: Uuid::new_v4(),
            numeric_code: "008".to_string(),
            alpha_code2: "AL".to_string(),
            alpha_code3: "ALB".to_string(),
            name: "Albania".to_string(),
            description: String::new(),
        };
        let only_id = only.id;
        let service = CountryService::with_records(vec![only]);

        let result = service.delete(only_id).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        // record still present
        assert_eq!(service.list().await.len(), 1);
        assert!(service.get(only_id).await.is_ok());
    }
}
