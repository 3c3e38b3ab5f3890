/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for comment entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_comment_entity_basic() -> Result<(), DbErr> {
    let comment_id = Uuid::new_v4();
    let workout_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![comment::Model {
            id: comment_id,
            workout: workout_id,
            created_by: user_id,
            text: "Great workout!".to_owned(),
            created_at: naive_date,
            updated_at: naive_date,
        }]])
        .into_connection();

    let result = comment::Entity::find_by_id(comment_id).one(&db).await?;

    assert!(result.is_some());
    let comment = result.unwrap();
    assert_eq!(comment.text, "Great workout!");
    assert_eq!(comment.workout, workout_id);
    assert_eq!(comment.created_by, user_id);

    Ok(())
}
