/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for exercise entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_exercise_entity_basic() -> Result<(), DbErr> {
    let exercise_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![exercise::Model {
            id: exercise_id,
            created_by: user_id,
            name: "Push-ups".to_owned(),
            description: "Basic push-ups".to_owned(),
            created_at: naive_date,
            updated_at: naive_date,
        }]])
        .into_connection();

    let result = exercise::Entity::find_by_id(exercise_id).one(&db).await?;

    assert!(result.is_some());
    let exercise = result.unwrap();
    assert_eq!(exercise.name, "Push-ups");
    assert_eq!(exercise.description, "Basic push-ups");
    assert_eq!(exercise.created_by, user_id);

    Ok(())
}

#[test]
fn test_exercise_serialization() {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let exercise = exercise::Model {
        id: Uuid::new_v4(),
        created_by: Uuid::new_v4(),
        name: "Squats".to_owned(),
        description: String::new(),
        created_at: naive_date,
        updated_at: naive_date,
    };

    let json = serde_json::to_string(&exercise).unwrap();
    assert!(json.contains("Squats"));
    assert!(json.contains("created_by"));
}
