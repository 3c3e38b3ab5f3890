/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use web::endpoints::exercises::*;

#[test]
fn test_make_exercise_request_serialization() {
    let request = MakeExerciseRequest {
        name: "Push-ups".to_string(),
        description: "Basic push-ups".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("Push-ups"));
    assert!(json.contains("Basic push-ups"));
}

#[test]
fn test_make_exercise_request_description_defaults_empty() {
    let request: MakeExerciseRequest = serde_json::from_str("{\"name\":\"Push-ups\"}").unwrap();

    assert_eq!(request.name, "Push-ups");
    assert_eq!(request.description, "");
}

#[test]
fn test_patch_exercise_request_fields_optional() {
    let request: PatchExerciseRequest = serde_json::from_str("{}").unwrap();

    assert!(request.name.is_none());
    assert!(request.description.is_none());

    let request: PatchExerciseRequest =
        serde_json::from_str("{\"name\":\"Modified Push-ups\"}").unwrap();

    assert_eq!(request.name.as_deref(), Some("Modified Push-ups"));
    assert!(request.description.is_none());
}
