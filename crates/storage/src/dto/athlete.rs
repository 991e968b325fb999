use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Athlete;

/// Response containing athlete information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub training_center: String,
    pub category: String,
}

/// Request payload for registering a new athlete.
///
/// `id` is accepted for compatibility with clients that echo full records
/// back, but it is always replaced by a server-generated one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 32,
        message = "Tax id must be between 1 and 32 characters"
    ))]
    pub tax_id: String,

    #[validate(length(min = 1, max = 255, message = "Training center is required"))]
    pub training_center: String,

    #[validate(length(min = 1, max = 255, message = "Category is required"))]
    pub category: String,
}

impl CreateAthleteRequest {
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        training_center: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            tax_id: tax_id.into(),
            training_center: training_center.into(),
            category: category.into(),
        }
    }
}

/// Partial update for an existing athlete. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub tax_id: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub training_center: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub category: Option<String>,
}

impl UpdateAthleteRequest {
    /// Applies every present field to `athlete`.
    pub fn apply_to(&self, athlete: &mut Athlete) {
        if let Some(name) = &self.name {
            athlete.name = name.clone();
        }
        if let Some(tax_id) = &self.tax_id {
            athlete.tax_id = tax_id.clone();
        }
        if let Some(training_center) = &self.training_center {
            athlete.training_center = training_center.clone();
        }
        if let Some(category) = &self.category {
            athlete.category = category.clone();
        }
    }
}

/// Substring filters for athlete queries. Matching is case-sensitive.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct AthleteFilter {
    /// Substring the athlete name must contain
    pub name: Option<String>,
    /// Substring the athlete tax id must contain
    pub tax_id: Option<String>,
}

impl AthleteFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            tax_id: None,
        }
    }

    pub fn by_tax_id(tax_id: impl Into<String>) -> Self {
        Self {
            name: None,
            tax_id: Some(tax_id.into()),
        }
    }

    pub fn matches(&self, athlete: &Athlete) -> bool {
        contains_or_unset(&athlete.name, self.name.as_deref())
            && contains_or_unset(&athlete.tax_id, self.tax_id.as_deref())
    }
}

// An empty query string constrains nothing, same as an absent one.
fn contains_or_unset(value: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => value.contains(needle),
        _ => true,
    }
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            tax_id: athlete.tax_id,
            training_center: athlete.training_center,
            category: athlete.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(name: &str, tax_id: &str) -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            training_center: "Centro A".to_string(),
            category: "Profissional".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(AthleteFilter::default().matches(&athlete("João", "123.456.789-00")));
    }

    #[test]
    fn test_empty_string_filter_matches_everything() {
        let filter = AthleteFilter {
            name: Some(String::new()),
            tax_id: Some(String::new()),
        };
        assert!(filter.matches(&athlete("Maria", "987.654.321-00")));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let athlete = athlete("João", "123.456.789-00");
        assert!(AthleteFilter::by_name("Jo").matches(&athlete));
        assert!(!AthleteFilter::by_name("jo").matches(&athlete));
    }

    #[test]
    fn test_both_filters_must_match() {
        let athlete = athlete("João", "123.456.789-00");
        let filter = AthleteFilter {
            name: Some("Jo".to_string()),
            tax_id: Some("987".to_string()),
        };
        assert!(!filter.matches(&athlete));
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut target = athlete("João", "123.456.789-00");
        let before = target.clone();

        let patch = UpdateAthleteRequest {
            category: Some("Amador".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut target);

        assert_eq!(target.category, "Amador");
        assert_eq!(target.id, before.id);
        assert_eq!(target.name, before.name);
        assert_eq!(target.tax_id, before.tax_id);
        assert_eq!(target.training_center, before.training_center);
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req = CreateAthleteRequest::new("", "123.456.789-00", "Centro A", "Amador");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_rejects_empty_field() {
        let req = UpdateAthleteRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
        assert!(UpdateAthleteRequest::default().validate().is_ok());
    }
}
