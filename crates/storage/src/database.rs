use std::sync::Arc;

use parking_lot::RwLock;

use crate::dto::athlete::CreateAthleteRequest;
use crate::error::Result;
use crate::models::Athlete;
use crate::repository::athlete::AthleteRepository;

/// In-memory athlete store.
///
/// Cloning yields another handle to the same records. The backing vector is
/// only reachable through [`AthleteRepository`], which hands out copies.
#[derive(Debug, Clone, Default)]
pub struct Database {
    athletes: Arc<RwLock<Vec<Athlete>>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the demo roster.
    pub fn with_demo_data() -> Result<Self> {
        let db = Self::new();
        db.seed(demo_athletes())?;
        Ok(db)
    }

    pub fn seed(&self, athletes: impl IntoIterator<Item = CreateAthleteRequest>) -> Result<()> {
        let repo = AthleteRepository::new(self);
        for athlete in athletes {
            repo.create(&athlete)?;
        }
        Ok(())
    }

    pub(crate) fn athletes(&self) -> &RwLock<Vec<Athlete>> {
        &self.athletes
    }
}

pub fn demo_athletes() -> Vec<CreateAthleteRequest> {
    vec![
        CreateAthleteRequest::new("João", "123.456.789-00", "Centro A", "Profissional"),
        CreateAthleteRequest::new("Maria", "987.654.321-00", "Centro B", "Amador"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_records() {
        let db = Database::new();
        let handle = db.clone();

        db.seed(demo_athletes()).unwrap();

        assert_eq!(AthleteRepository::new(&handle).count(), 2);
    }

    #[test]
    fn test_demo_data_in_order() {
        let db = Database::with_demo_data().unwrap();
        let names: Vec<String> = AthleteRepository::new(&db)
            .list()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["João", "Maria"]);
    }
}
