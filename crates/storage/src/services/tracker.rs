//! Domain query façade consumed by the presentation layer.
//!
//! Every public operation is total: transport or parsing failures degrade
//! to empty collections for reads and to `{success: false, message}` for
//! writes, with the diagnostic detail logged. Nothing below this module
//! is allowed to surface an error into presentation code.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::dto::{ActionResult, CreateExerciseRequest, CreateExerciseResult};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, ProgressEntry, WorkoutSet};
use crate::repository::{ExerciseRepository, ProgressRepository};
use crate::store::TabularStore;
use crate::tables::UserTables;

pub const MSG_NOT_AUTHENTICATED: &str = "Not authenticated";
pub const MSG_FIELDS_REQUIRED: &str = "Name and category are required";
pub const MSG_EXERCISE_REQUIRED: &str = "Exercise and date are required";
pub const MSG_EXERCISE_ADDED: &str = "Exercise added successfully";
pub const MSG_EXERCISE_FAILED: &str = "Failed to add exercise";
pub const MSG_PROGRESS_LOGGED: &str = "Progress logged successfully";
pub const MSG_PROGRESS_LOG_FAILED: &str = "Failed to log progress";
pub const MSG_PROGRESS_UPDATED: &str = "Progress updated successfully";
pub const MSG_PROGRESS_UPDATE_FAILED: &str = "Failed to update progress";
pub const MSG_PROGRESS_NOT_FOUND: &str = "Progress entry not found";

#[derive(Clone)]
pub struct TrackerService {
    store: Arc<dyn TabularStore>,
}

impl TrackerService {
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self { store }
    }

    async fn tables<'a>(&'a self, user: Option<&str>) -> Result<UserTables<'a>> {
        UserTables::open(self.store.as_ref(), user).await
    }

    /// All of the user's exercises, storage order. Empty on any failure.
    pub async fn list_exercises(&self, user: Option<&str>) -> Vec<Exercise> {
        match self.list_exercises_inner(user).await {
            Ok(exercises) => exercises,
            Err(e) => {
                log_read_failure("list exercises", &e);
                Vec::new()
            }
        }
    }

    async fn list_exercises_inner(&self, user: Option<&str>) -> Result<Vec<Exercise>> {
        let tables = self.tables(user).await?;
        ExerciseRepository::new(&tables).list().await
    }

    /// Lookup by id. Absent both for unknown ids and on failure.
    pub async fn get_exercise(&self, user: Option<&str>, id: &str) -> Option<Exercise> {
        match self.get_exercise_inner(user, id).await {
            Ok(exercise) => Some(exercise),
            Err(StorageError::NotFound) => None,
            Err(e) => {
                log_read_failure("get exercise", &e);
                None
            }
        }
    }

    async fn get_exercise_inner(&self, user: Option<&str>, id: &str) -> Result<Exercise> {
        let tables = self.tables(user).await?;
        ExerciseRepository::new(&tables).find_by_id(id).await
    }

    /// Progress history for one exercise, ascending by date (stable).
    pub async fn list_progress(&self, user: Option<&str>, exercise_id: &str) -> Vec<ProgressEntry> {
        match self.list_progress_inner(user, exercise_id).await {
            Ok(entries) => entries,
            Err(e) => {
                log_read_failure("list progress", &e);
                Vec::new()
            }
        }
    }

    async fn list_progress_inner(
        &self,
        user: Option<&str>,
        exercise_id: &str,
    ) -> Result<Vec<ProgressEntry>> {
        let tables = self.tables(user).await?;
        ProgressRepository::new(&tables)
            .list_for_exercise(exercise_id)
            .await
    }

    /// The latest-dated session across all of the user's exercises.
    pub async fn most_recent_workout(&self, user: Option<&str>) -> Option<ProgressEntry> {
        match self.most_recent_workout_inner(user).await {
            Ok(entry) => entry,
            Err(e) => {
                log_read_failure("most recent workout", &e);
                None
            }
        }
    }

    async fn most_recent_workout_inner(&self, user: Option<&str>) -> Result<Option<ProgressEntry>> {
        let tables = self.tables(user).await?;
        ProgressRepository::new(&tables).most_recent().await
    }

    /// Add an exercise. Field validation happens before any store I/O.
    pub async fn create_exercise(
        &self,
        user: Option<&str>,
        req: &CreateExerciseRequest,
    ) -> CreateExerciseResult {
        if req.name.trim().is_empty() || req.category.trim().is_empty() {
            return CreateExerciseResult::failed(MSG_FIELDS_REQUIRED);
        }

        match self.create_exercise_inner(user, req).await {
            Ok(exercise) => CreateExerciseResult::ok(MSG_EXERCISE_ADDED, exercise),
            Err(StorageError::Unauthenticated) => {
                CreateExerciseResult::failed(MSG_NOT_AUTHENTICATED)
            }
            Err(e) => {
                tracing::error!("Failed to create exercise: {e}");
                CreateExerciseResult::failed(MSG_EXERCISE_FAILED)
            }
        }
    }

    async fn create_exercise_inner(
        &self,
        user: Option<&str>,
        req: &CreateExerciseRequest,
    ) -> Result<Exercise> {
        let tables = self.tables(user).await?;
        ExerciseRepository::new(&tables)
            .create(req.name.trim(), req.category.trim())
            .await
    }

    /// Log a new session and run the aggregate step.
    pub async fn log_progress(
        &self,
        user: Option<&str>,
        exercise_id: &str,
        date: NaiveDate,
        sets: &[WorkoutSet],
    ) -> ActionResult {
        if exercise_id.trim().is_empty() {
            return ActionResult::failed(MSG_EXERCISE_REQUIRED);
        }

        match self.log_progress_inner(user, exercise_id, date, sets).await {
            Ok(()) => ActionResult::ok(MSG_PROGRESS_LOGGED),
            Err(StorageError::Unauthenticated) => ActionResult::failed(MSG_NOT_AUTHENTICATED),
            Err(e) => {
                tracing::error!("Failed to log progress: {e}");
                ActionResult::failed(MSG_PROGRESS_LOG_FAILED)
            }
        }
    }

    async fn log_progress_inner(
        &self,
        user: Option<&str>,
        exercise_id: &str,
        date: NaiveDate,
        sets: &[WorkoutSet],
    ) -> Result<()> {
        let tables = self.tables(user).await?;

        let entry = ProgressEntry::from_sets(exercise_id.to_string(), date, sets);
        ProgressRepository::new(&tables).append(&entry).await?;

        // Second leg of the two-step write; an interruption here leaves
        // the aggregate stale until the next successful write.
        ExerciseRepository::new(&tables)
            .apply_peak(exercise_id, entry.peak_weight())
            .await
    }

    /// Edit an existing session's sets and re-run the aggregate step.
    /// Never creates a row: an unmatched `(exercise_id, date)` pair fails.
    pub async fn update_progress(
        &self,
        user: Option<&str>,
        exercise_id: &str,
        date: NaiveDate,
        sets: &[WorkoutSet],
    ) -> ActionResult {
        if exercise_id.trim().is_empty() {
            return ActionResult::failed(MSG_EXERCISE_REQUIRED);
        }

        match self
            .update_progress_inner(user, exercise_id, date, sets)
            .await
        {
            Ok(()) => ActionResult::ok(MSG_PROGRESS_UPDATED),
            Err(StorageError::NotFound) => ActionResult::failed(MSG_PROGRESS_NOT_FOUND),
            Err(StorageError::Unauthenticated) => ActionResult::failed(MSG_NOT_AUTHENTICATED),
            Err(e) => {
                tracing::error!("Failed to update progress: {e}");
                ActionResult::failed(MSG_PROGRESS_UPDATE_FAILED)
            }
        }
    }

    async fn update_progress_inner(
        &self,
        user: Option<&str>,
        exercise_id: &str,
        date: NaiveDate,
        sets: &[WorkoutSet],
    ) -> Result<()> {
        let tables = self.tables(user).await?;

        let updated = ProgressRepository::new(&tables)
            .update_sets(exercise_id, date, sets)
            .await?;

        ExerciseRepository::new(&tables)
            .apply_peak(exercise_id, updated.peak_weight())
            .await
    }
}

fn log_read_failure(operation: &str, error: &StorageError) {
    // An absent user id is an expected state on public pages, not a fault.
    if error.is_unauthenticated() {
        tracing::debug!("{operation}: no authenticated user");
    } else {
        tracing::error!("Failed to {operation}: {error}");
    }
}
