/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for workout entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_workout_entity_basic() -> Result<(), DbErr> {
    let workout_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let naive_date = date.and_hms_opt(0, 0, 0).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![workout::Model {
            id: workout_id,
            created_by: user_id,
            title: "Morning Workout".to_owned(),
            description: String::new(),
            date,
            duration: 30,
            created_at: naive_date,
            updated_at: naive_date,
        }]])
        .into_connection();

    let result = workout::Entity::find_by_id(workout_id).one(&db).await?;

    assert!(result.is_some());
    let workout = result.unwrap();
    assert_eq!(workout.title, "Morning Workout");
    assert_eq!(workout.duration, 30);
    assert_eq!(workout.date, date);
    assert_eq!(workout.created_by, user_id);

    Ok(())
}

#[test]
fn test_workout_date_serialization() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let naive_date = date.and_hms_opt(8, 30, 0).unwrap();

    let workout = workout::Model {
        id: Uuid::new_v4(),
        created_by: Uuid::new_v4(),
        title: "Leg Day".to_owned(),
        description: "Heavy squats".to_owned(),
        date,
        duration: 45,
        created_at: naive_date,
        updated_at: naive_date,
    };

    let json = serde_json::to_string(&workout).unwrap();
    assert!(json.contains("2024-06-15"));
    assert!(json.contains("Leg Day"));
}
