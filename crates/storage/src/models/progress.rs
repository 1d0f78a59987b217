use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recorded set: weight lifted and repetitions performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSet {
    pub weight: f64,
    pub reps: u32,
}

/// One dated workout session for one exercise.
///
/// Two shapes coexist in storage: the legacy single `weight`/`reps`/`sets`
/// triple and the four independent set slots. Both are readable; the
/// per-set fields take precedence when present. There is no row id;
/// identity for edits is the `(exercise_id, date)` pair, first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub exercise_id: String,
    pub date: NaiveDate,
    /// Legacy single-weight shape; 0 when the entry uses per-set fields.
    pub weight: f64,
    pub reps: u32,
    pub sets: u32,
    pub set1: WorkoutSet,
    pub set2: WorkoutSet,
    pub set3: WorkoutSet,
    pub set4: WorkoutSet,
}

impl ProgressEntry {
    /// Build an entry from submitted sets. At most four are honored;
    /// missing slots stay at 0/0 and the legacy triple is left empty.
    pub fn from_sets(exercise_id: String, date: NaiveDate, sets: &[WorkoutSet]) -> Self {
        let slot = |i: usize| sets.get(i).copied().unwrap_or_default();
        Self {
            exercise_id,
            date,
            weight: 0.0,
            reps: 0,
            sets: 0,
            set1: slot(0),
            set2: slot(1),
            set3: slot(2),
            set4: slot(3),
        }
    }

    pub fn set_slots(&self) -> [WorkoutSet; 4] {
        [self.set1, self.set2, self.set3, self.set4]
    }

    /// The session's peak weight: the legacy weight when present and
    /// nonzero, otherwise the maximum across the four set slots.
    pub fn peak_weight(&self) -> f64 {
        if self.weight != 0.0 {
            return self.weight;
        }
        self.set_slots()
            .iter()
            .map(|s| s.weight)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn set(weight: f64, reps: u32) -> WorkoutSet {
        WorkoutSet { weight, reps }
    }

    #[test]
    fn test_peak_prefers_legacy_weight() {
        let mut entry = ProgressEntry::from_sets("1".into(), date("2024-01-01"), &[]);
        entry.weight = 80.0;
        assert_eq!(entry.peak_weight(), 80.0);
    }

    #[test]
    fn test_peak_is_max_of_sets() {
        let entry = ProgressEntry::from_sets(
            "1".into(),
            date("2024-01-01"),
            &[set(60.0, 10), set(65.0, 8), set(70.0, 6), set(0.0, 0)],
        );
        assert_eq!(entry.peak_weight(), 70.0);
    }

    #[test]
    fn test_peak_of_empty_entry_is_zero() {
        let entry = ProgressEntry::from_sets("1".into(), date("2024-01-01"), &[]);
        assert_eq!(entry.peak_weight(), 0.0);
    }

    #[test]
    fn test_from_sets_ignores_extra_sets() {
        let entry = ProgressEntry::from_sets(
            "1".into(),
            date("2024-01-01"),
            &[set(10.0, 1), set(20.0, 1), set(30.0, 1), set(40.0, 1), set(99.0, 1)],
        );
        assert_eq!(entry.set4, set(40.0, 1));
        assert_eq!(entry.peak_weight(), 40.0);
    }
}
