use storage::{
    Database,
    dto::{
        athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest},
        common::{Page, PaginationParams},
    },
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
    services::query,
};
use uuid::Uuid;

/// List all athletes
pub fn list_athletes(db: &Database) -> Vec<Athlete> {
    let repo = AthleteRepository::new(db);
    repo.list()
}

/// Get athlete by id
pub fn get_athlete(db: &Database, id: Uuid) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    repo.find_by_id(id)
}

/// List athletes matching the name and tax id substrings
pub fn query_athletes(db: &Database, filter: &AthleteFilter) -> Vec<Athlete> {
    let repo = AthleteRepository::new(db);
    query::filter(&repo.list(), filter)
}

/// List one page of athletes
pub fn list_athletes_paginated(db: &Database, params: &PaginationParams) -> Result<Page<Athlete>> {
    let repo = AthleteRepository::new(db);
    query::paginate(repo.list(), params.page as usize, params.size as usize)
}

/// Create a new athlete
pub fn create_athlete(db: &Database, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    let athlete = repo.create(request)?;
    tracing::info!(athlete_id = %athlete.id, "Registered athlete {}", athlete.name);
    Ok(athlete)
}

/// Update an athlete
pub fn update_athlete(db: &Database, id: Uuid, request: &UpdateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(db);
    let athlete = repo.update(id, request)?;
    tracing::info!(athlete_id = %id, "Updated athlete");
    Ok(athlete)
}
