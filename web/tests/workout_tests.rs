/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use chrono::NaiveDate;
use uuid::Uuid;
use web::endpoints::comments::CommentResponse;
use web::endpoints::workout_exercises::WorkoutExerciseResponse;
use web::endpoints::workouts::*;

#[test]
fn test_make_workout_request_deserialization() {
    let request: MakeWorkoutRequest = serde_json::from_str(
        "{\"title\":\"Morning Workout\",\"date\":\"2024-06-15\",\"duration\":30}",
    )
    .unwrap();

    assert_eq!(request.title, "Morning Workout");
    assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    assert_eq!(request.duration, 30);
    assert_eq!(request.description, "");
}

#[test]
fn test_make_workout_request_rejects_invalid_date() {
    let result: Result<MakeWorkoutRequest, _> = serde_json::from_str(
        "{\"title\":\"Morning Workout\",\"date\":\"2024-13-45\",\"duration\":30}",
    );

    assert!(result.is_err());
}

#[test]
fn test_workout_details_response_shape() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let naive_date = date.and_hms_opt(8, 0, 0).unwrap();

    let details = WorkoutDetailsResponse {
        id: Uuid::new_v4(),
        title: "Morning Workout".to_string(),
        description: String::new(),
        date,
        duration: 30,
        created_at: naive_date,
        updated_at: naive_date,
        workout_exercises: vec![WorkoutExerciseResponse {
            id: Uuid::new_v4(),
            exercise: Uuid::new_v4(),
            exercise_name: "Push-ups".to_string(),
            sets: 3,
            reps: 10,
            weight: None,
            notes: String::new(),
            order: 0,
        }],
        comments: vec![CommentResponse {
            id: Uuid::new_v4(),
            username: "testuser".to_string(),
            text: "Great workout!".to_string(),
            created_at: naive_date,
            updated_at: naive_date,
        }],
    };

    let json = serde_json::to_string(&details).unwrap();
    assert!(json.contains("\"workout_exercises\""));
    assert!(json.contains("\"exercise_name\":\"Push-ups\""));
    assert!(json.contains("\"sets\":3"));
    assert!(json.contains("\"reps\":10"));
    assert!(json.contains("\"comments\""));
    assert!(json.contains("\"username\":\"testuser\""));
    assert!(json.contains("\"text\":\"Great workout!\""));
}
