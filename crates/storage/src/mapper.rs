//! The one place where the store's stringly-typed cells become domain
//! values and back. Everything above this module only sees typed records.

use chrono::{Local, NaiveDate};

use crate::models::exercise::DEFAULT_UNIT;
use crate::models::{Exercise, ProgressEntry, WorkoutSet};
use crate::store::Row;

pub const EXERCISE_HEADERS: [&str; 6] =
    ["id", "name", "category", "lastWeight", "personalBest", "unit"];

pub const PROGRESS_HEADERS: [&str; 13] = [
    "exerciseId",
    "date",
    "weight",
    "reps",
    "sets",
    "set1Weight",
    "set1Reps",
    "set2Weight",
    "set2Reps",
    "set3Weight",
    "set3Reps",
    "set4Weight",
    "set4Reps",
];

/// Weight cell → f64. Absent, unparsable, or non-finite cells become 0 so
/// NaN never reaches persisted state or the aggregates.
pub fn parse_weight(row: &Row, header: &str) -> f64 {
    row.get(header)
        .and_then(|cell| cell.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Count cell (reps, sets) → u32, defaulting to 0.
pub fn parse_count(row: &Row, header: &str) -> u32 {
    row.get(header)
        .and_then(|cell| cell.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Date cell → NaiveDate; a missing or malformed date falls back to today.
/// Rare in practice since callers always supply the date.
pub fn parse_date(row: &Row, header: &str) -> NaiveDate {
    row.get(header)
        .and_then(|cell| cell.trim().parse::<NaiveDate>().ok())
        .unwrap_or_else(|| Local::now().date_naive())
}

fn text(row: &Row, header: &str) -> String {
    row.get(header).cloned().unwrap_or_default()
}

fn fmt_weight(value: f64) -> String {
    value.to_string()
}

pub fn exercise_from_row(row: &Row) -> Exercise {
    let unit = match text(row, "unit") {
        u if u.is_empty() => DEFAULT_UNIT.to_string(),
        u => u,
    };
    Exercise {
        id: text(row, "id"),
        name: text(row, "name"),
        category: text(row, "category"),
        last_weight: parse_weight(row, "lastWeight"),
        personal_best: parse_weight(row, "personalBest"),
        unit,
    }
}

pub fn exercise_to_row(exercise: &Exercise) -> Row {
    Row::from([
        ("id".to_string(), exercise.id.clone()),
        ("name".to_string(), exercise.name.clone()),
        ("category".to_string(), exercise.category.clone()),
        ("lastWeight".to_string(), fmt_weight(exercise.last_weight)),
        ("personalBest".to_string(), fmt_weight(exercise.personal_best)),
        ("unit".to_string(), exercise.unit.clone()),
    ])
}

pub fn progress_from_row(row: &Row) -> ProgressEntry {
    let slot = |n: u8| WorkoutSet {
        weight: parse_weight(row, &format!("set{n}Weight")),
        reps: parse_count(row, &format!("set{n}Reps")),
    };
    ProgressEntry {
        exercise_id: text(row, "exerciseId"),
        date: parse_date(row, "date"),
        weight: parse_weight(row, "weight"),
        reps: parse_count(row, "reps"),
        sets: parse_count(row, "sets"),
        set1: slot(1),
        set2: slot(2),
        set3: slot(3),
        set4: slot(4),
    }
}

pub fn progress_to_row(entry: &ProgressEntry) -> Row {
    let mut row = Row::from([
        ("exerciseId".to_string(), entry.exercise_id.clone()),
        ("date".to_string(), entry.date.format("%Y-%m-%d").to_string()),
        ("weight".to_string(), fmt_weight(entry.weight)),
        ("reps".to_string(), entry.reps.to_string()),
        ("sets".to_string(), entry.sets.to_string()),
    ]);
    for (n, set) in entry.set_slots().iter().enumerate() {
        row.insert(format!("set{}Weight", n + 1), fmt_weight(set.weight));
        row.insert(format!("set{}Reps", n + 1), set.reps.to_string());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_weight_defaults() {
        assert_eq!(parse_weight(&row(&[]), "w"), 0.0);
        assert_eq!(parse_weight(&row(&[("w", "abc")]), "w"), 0.0);
        assert_eq!(parse_weight(&row(&[("w", "NaN")]), "w"), 0.0);
        assert_eq!(parse_weight(&row(&[("w", "inf")]), "w"), 0.0);
        assert_eq!(parse_weight(&row(&[("w", " 72.5 ")]), "w"), 72.5);
    }

    #[test]
    fn test_parse_count_defaults() {
        assert_eq!(parse_count(&row(&[]), "r"), 0);
        assert_eq!(parse_count(&row(&[("r", "-3")]), "r"), 0);
        assert_eq!(parse_count(&row(&[("r", "10")]), "r"), 10);
    }

    #[test]
    fn test_exercise_defaults() {
        let exercise = exercise_from_row(&row(&[("id", "3"), ("name", "Squat")]));
        assert_eq!(exercise.id, "3");
        assert_eq!(exercise.last_weight, 0.0);
        assert_eq!(exercise.unit, "kgs");
    }

    #[test]
    fn test_exercise_round_trip() {
        let exercise = Exercise {
            id: "7".into(),
            name: "Bench Press".into(),
            category: "Chest".into(),
            last_weight: 82.5,
            personal_best: 100.0,
            unit: "kgs".into(),
        };
        assert_eq!(exercise_from_row(&exercise_to_row(&exercise)), exercise);
    }

    #[test]
    fn test_progress_round_trip() {
        let entry = ProgressEntry::from_sets(
            "2".into(),
            "2024-02-10".parse().unwrap(),
            &[
                WorkoutSet { weight: 60.0, reps: 10 },
                WorkoutSet { weight: 65.5, reps: 8 },
            ],
        );
        assert_eq!(progress_from_row(&progress_to_row(&entry)), entry);
    }

    #[test]
    fn test_legacy_progress_shape_reads() {
        let entry = progress_from_row(&row(&[
            ("exerciseId", "1"),
            ("date", "2024-03-01"),
            ("weight", "80"),
            ("reps", "10"),
            ("sets", "3"),
        ]));
        assert_eq!(entry.weight, 80.0);
        assert_eq!(entry.sets, 3);
        assert_eq!(entry.peak_weight(), 80.0);
    }
}
