/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for workout exercise entity

use entity::*;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_workout_exercise_entity_basic() -> Result<(), DbErr> {
    let entry_id = Uuid::new_v4();
    let workout_id = Uuid::new_v4();
    let exercise_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![workout_exercise::Model {
            id: entry_id,
            workout: workout_id,
            exercise: exercise_id,
            sets: 3,
            reps: 10,
            weight: Some(Decimal::new(8250, 2)),
            notes: String::new(),
            order: 0,
        }]])
        .into_connection();

    let result = workout_exercise::Entity::find_by_id(entry_id).one(&db).await?;

    assert!(result.is_some());
    let entry = result.unwrap();
    assert_eq!(entry.sets, 3);
    assert_eq!(entry.reps, 10);
    assert_eq!(entry.weight, Some(Decimal::new(8250, 2)));
    assert_eq!(entry.order, 0);
    assert_eq!(entry.workout, workout_id);
    assert_eq!(entry.exercise, exercise_id);

    Ok(())
}

#[test]
fn test_workout_exercise_optional_weight() {
    let entry = workout_exercise::Model {
        id: Uuid::new_v4(),
        workout: Uuid::new_v4(),
        exercise: Uuid::new_v4(),
        sets: 5,
        reps: 5,
        weight: None,
        notes: "bodyweight only".to_owned(),
        order: 2,
    };

    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"weight\":null"));
    assert!(json.contains("bodyweight only"));
}
