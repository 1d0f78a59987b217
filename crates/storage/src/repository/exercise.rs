use crate::error::{Result, StorageError};
use crate::mapper::{exercise_from_row, exercise_to_row};
use crate::models::Exercise;
use crate::store::Row;
use crate::tables::UserTables;

pub struct ExerciseRepository<'a> {
    tables: &'a UserTables<'a>,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(tables: &'a UserTables<'a>) -> Self {
        Self { tables }
    }

    /// All exercises, in storage order.
    pub async fn list(&self) -> Result<Vec<Exercise>> {
        let rows = self
            .tables
            .store()
            .read_all(self.tables.exercises())
            .await?;

        Ok(rows.iter().map(exercise_from_row).collect())
    }

    /// Linear search by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Exercise> {
        self.list()
            .await?
            .into_iter()
            .find(|exercise| exercise.id == id)
            .ok_or(StorageError::NotFound)
    }

    /// Create an exercise with the next free numeric id, zeroed
    /// aggregates, and the default unit.
    pub async fn create(&self, name: &str, category: &str) -> Result<Exercise> {
        let existing = self.list().await?;
        let next_id = existing
            .iter()
            .map(|exercise| exercise.id.parse::<u64>().unwrap_or(0))
            .max()
            .unwrap_or(0)
            + 1;

        let exercise = Exercise::new(next_id.to_string(), name.to_string(), category.to_string());
        self.tables
            .store()
            .append_row(self.tables.exercises(), &exercise_to_row(&exercise))
            .await?;

        Ok(exercise)
    }

    /// The aggregate-maintainer write: the submitted entry's peak becomes
    /// the current weight, and the personal best ratchets up if exceeded.
    ///
    /// A missing exercise row (orphaned progress entry) is not an error;
    /// the aggregates are simply left untouched.
    pub async fn apply_peak(&self, id: &str, peak: f64) -> Result<()> {
        let rows = self
            .tables
            .store()
            .read_all(self.tables.exercises())
            .await?;

        let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| exercise_from_row(row).id == id)
        else {
            return Ok(());
        };

        let exercise = exercise_from_row(row);
        // Recompute against the stored best, never assign from the peak
        // alone: an edited historic entry must not lower the record.
        let personal_best = exercise.personal_best.max(peak);

        let fields = Row::from([
            ("lastWeight".to_string(), peak.to_string()),
            ("personalBest".to_string(), personal_best.to_string()),
        ]);
        self.tables
            .store()
            .update_row(self.tables.exercises(), index, &fields)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TabularStore;
    use crate::store::memory::MemoryStore;

    async fn seed(store: &MemoryStore, user: &str, ids: &[&str]) {
        let tables = UserTables::open(store, Some(user)).await.unwrap();
        for id in ids {
            let exercise = Exercise::new(id.to_string(), format!("ex-{id}"), "Back".to_string());
            store
                .append_row(tables.exercises(), &exercise_to_row(&exercise))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_next_id_skips_gaps() {
        let store = MemoryStore::new();
        seed(&store, "anna", &["2", "5", "7"]).await;

        let tables = UserTables::open(&store, Some("anna")).await.unwrap();
        let created = ExerciseRepository::new(&tables)
            .create("Squat", "Legs")
            .await
            .unwrap();
        assert_eq!(created.id, "8");
    }

    #[tokio::test]
    async fn test_non_numeric_ids_count_as_zero() {
        let store = MemoryStore::new();
        seed(&store, "anna", &["legacy", "3"]).await;

        let tables = UserTables::open(&store, Some("anna")).await.unwrap();
        let created = ExerciseRepository::new(&tables)
            .create("Squat", "Legs")
            .await
            .unwrap();
        assert_eq!(created.id, "4");
    }

    #[tokio::test]
    async fn test_apply_peak_ratchets_personal_best() {
        let store = MemoryStore::new();
        seed(&store, "anna", &["1"]).await;
        let tables = UserTables::open(&store, Some("anna")).await.unwrap();
        let repo = ExerciseRepository::new(&tables);

        repo.apply_peak("1", 100.0).await.unwrap();
        repo.apply_peak("1", 90.0).await.unwrap();

        let exercise = repo.find_by_id("1").await.unwrap();
        assert_eq!(exercise.last_weight, 90.0);
        assert_eq!(exercise.personal_best, 100.0);
    }

    #[tokio::test]
    async fn test_apply_peak_without_exercise_is_noop() {
        let store = MemoryStore::new();
        seed(&store, "anna", &[]).await;
        let tables = UserTables::open(&store, Some("anna")).await.unwrap();

        ExerciseRepository::new(&tables)
            .apply_peak("9", 100.0)
            .await
            .unwrap();
        assert!(ExerciseRepository::new(&tables).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let store = MemoryStore::new();
        seed(&store, "anna", &["1"]).await;
        let tables = UserTables::open(&store, Some("anna")).await.unwrap();

        let err = ExerciseRepository::new(&tables).find_by_id("2").await;
        assert!(matches!(err, Err(StorageError::NotFound)));
    }
}
