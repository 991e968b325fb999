use uuid::Uuid;

use crate::Database;
use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    db: &'a Database,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all athletes in registration order
    pub fn list(&self) -> Vec<Athlete> {
        self.db.athletes().read().to_vec()
    }

    pub fn count(&self) -> usize {
        self.db.athletes().read().len()
    }

    /// Find athlete by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        self.db
            .athletes()
            .read()
            .iter()
            .find(|athlete| athlete.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    /// Register a new athlete.
    ///
    /// Any client-supplied id is discarded. Fails with
    /// [`StorageError::DuplicateKey`] when the tax id is already taken.
    pub fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        // Held across the uniqueness check and the push.
        let mut athletes = self.db.athletes().write();

        if athletes.iter().any(|existing| existing.tax_id == req.tax_id) {
            tracing::warn!(tax_id = %req.tax_id, "Rejected athlete with duplicate tax id");
            return Err(StorageError::DuplicateKey(req.tax_id.clone()));
        }

        let athlete = Athlete {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            tax_id: req.tax_id.clone(),
            training_center: req.training_center.clone(),
            category: req.category.clone(),
        };
        athletes.push(athlete.clone());

        tracing::debug!(athlete_id = %athlete.id, "Athlete created");
        Ok(athlete)
    }

    /// Apply a partial update to an existing athlete.
    ///
    /// The tax id is not re-checked for uniqueness here.
    pub fn update(&self, id: Uuid, req: &UpdateAthleteRequest) -> Result<Athlete> {
        let mut athletes = self.db.athletes().write();

        let athlete = athletes
            .iter_mut()
            .find(|athlete| athlete.id == id)
            .ok_or(StorageError::NotFound(id))?;

        req.apply_to(athlete);

        tracing::debug!(athlete_id = %id, "Athlete updated");
        Ok(athlete.clone())
    }
}
