use uuid::Uuid;

/// In-memory record for a country, keyed by server-assigned id.
///
/// `numeric_code`, `alpha_code2` and `alpha_code3` are each unique across the
/// registry; the service enforces this on every mutation. `id` is assigned at
/// creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: Uuid,
    pub numeric_code: String,
    pub alpha_code2: String,
    pub alpha_code3: String,
    pub name: String,
    pub description: String,
}
