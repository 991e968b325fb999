use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered athlete as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Athlete {
    pub id: Uuid,
    pub name: String,
    /// National identification string, e.g. `123.456.789-00`.
    pub tax_id: String,
    pub training_center: String,
    pub category: String,
}
