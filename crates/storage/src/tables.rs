//! Per-user table resolution and lazy provisioning.

use crate::error::{Result, StorageError};
use crate::mapper::{EXERCISE_HEADERS, PROGRESS_HEADERS};
use crate::store::TabularStore;

const EXERCISES_SUFFIX: &str = "Exercises";
const PROGRESS_SUFFIX: &str = "Progress";

/// A user's pair of tables, resolved once per request.
///
/// Both tables are provisioned together on first touch; a creation failure
/// for either propagates rather than leaving the pair half-usable.
pub struct UserTables<'a> {
    store: &'a dyn TabularStore,
    exercises: String,
    progress: String,
}

impl<'a> UserTables<'a> {
    /// Resolve and provision the tables for `user_id`.
    ///
    /// An absent or blank user id is an authentication failure, raised
    /// before any store I/O; the façade turns it into empty reads or a
    /// fixed failure message.
    pub async fn open(store: &'a dyn TabularStore, user_id: Option<&str>) -> Result<UserTables<'a>> {
        let user_id = match user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(StorageError::Unauthenticated),
        };

        let tables = Self {
            store,
            exercises: format!("{user_id}{EXERCISES_SUFFIX}"),
            progress: format!("{user_id}{PROGRESS_SUFFIX}"),
        };

        store
            .ensure_table(&tables.exercises, &EXERCISE_HEADERS)
            .await?;
        store
            .ensure_table(&tables.progress, &PROGRESS_HEADERS)
            .await?;

        Ok(tables)
    }

    pub fn store(&self) -> &'a dyn TabularStore {
        self.store
    }

    pub fn exercises(&self) -> &str {
        &self.exercises
    }

    pub fn progress(&self) -> &str {
        &self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_open_derives_both_table_names() {
        let store = MemoryStore::new();
        let tables = UserTables::open(&store, Some("anna")).await.unwrap();
        assert_eq!(tables.exercises(), "annaExercises");
        assert_eq!(tables.progress(), "annaProgress");

        // Provisioned, so empty reads succeed.
        assert!(store.read_all("annaExercises").await.unwrap().is_empty());
        assert!(store.read_all("annaProgress").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_missing_user() {
        let store = MemoryStore::new();
        for user in [None, Some(""), Some("   ")] {
            let err = UserTables::open(&store, user).await.err().unwrap();
            assert!(err.is_unauthenticated());
        }
    }

    #[tokio::test]
    async fn test_user_ids_are_case_sensitive() {
        let store = MemoryStore::new();
        let a = UserTables::open(&store, Some("Anna")).await.unwrap();
        let b = UserTables::open(&store, Some("anna")).await.unwrap();
        assert_ne!(a.exercises(), b.exercises());
    }
}
