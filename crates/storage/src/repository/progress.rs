use chrono::NaiveDate;

use crate::error::{Result, StorageError};
use crate::mapper::{progress_from_row, progress_to_row};
use crate::models::{ProgressEntry, WorkoutSet};
use crate::store::Row;
use crate::tables::UserTables;

pub struct ProgressRepository<'a> {
    tables: &'a UserTables<'a>,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(tables: &'a UserTables<'a>) -> Self {
        Self { tables }
    }

    async fn read_entries(&self) -> Result<Vec<ProgressEntry>> {
        let rows = self.tables.store().read_all(self.tables.progress()).await?;
        Ok(rows.iter().map(progress_from_row).collect())
    }

    /// All entries for one exercise, ascending by date. The sort is stable,
    /// so same-date entries keep their storage order.
    pub async fn list_for_exercise(&self, exercise_id: &str) -> Result<Vec<ProgressEntry>> {
        let mut entries: Vec<ProgressEntry> = self
            .read_entries()
            .await?
            .into_iter()
            .filter(|entry| entry.exercise_id == exercise_id)
            .collect();
        entries.sort_by_key(|entry| entry.date);

        Ok(entries)
    }

    pub async fn append(&self, entry: &ProgressEntry) -> Result<()> {
        self.tables
            .store()
            .append_row(self.tables.progress(), &progress_to_row(entry))
            .await
    }

    /// Overwrite the set slots of the first row matching
    /// `(exercise_id, date)`. The legacy triple is cleared at the same
    /// time so the stored row's peak agrees with the submitted sets.
    ///
    /// Duplicate `(exercise_id, date)` rows are possible (logging twice on
    /// one day appends); first match in storage order is the one edited.
    pub async fn update_sets(
        &self,
        exercise_id: &str,
        date: NaiveDate,
        sets: &[WorkoutSet],
    ) -> Result<ProgressEntry> {
        let index = self
            .read_entries()
            .await?
            .iter()
            .position(|entry| entry.exercise_id == exercise_id && entry.date == date)
            .ok_or(StorageError::NotFound)?;

        let updated = ProgressEntry::from_sets(exercise_id.to_string(), date, sets);
        let mut fields = Row::new();
        for (n, set) in updated.set_slots().iter().enumerate() {
            fields.insert(format!("set{}Weight", n + 1), set.weight.to_string());
            fields.insert(format!("set{}Reps", n + 1), set.reps.to_string());
        }
        fields.insert("weight".to_string(), "0".to_string());
        fields.insert("reps".to_string(), "0".to_string());
        fields.insert("sets".to_string(), "0".to_string());

        self.tables
            .store()
            .update_row(self.tables.progress(), index, &fields)
            .await?;

        Ok(updated)
    }

    /// The row with the maximum date across the whole table, if any.
    pub async fn most_recent(&self) -> Result<Option<ProgressEntry>> {
        Ok(self
            .read_entries()
            .await?
            .into_iter()
            .max_by_key(|entry| entry.date))
    }
}
