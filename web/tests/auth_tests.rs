/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use web::endpoints::auth::*;

#[test]
fn test_make_login_request_serialization() {
    let request = MakeLoginRequest {
        username: "testuser".to_string(),
        password: "Str0ng!Pw".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("testuser"));
    assert!(json.contains("Str0ng!Pw"));
}

#[test]
fn test_make_user_request_serialization() {
    let request = MakeUserRequest {
        username: "testuser".to_string(),
        password: "Str0ng!Pw".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("testuser"));
    assert!(json.contains("Str0ng!Pw"));
}

#[test]
fn test_session_response_serialization() {
    let response = SessionResponse {
        username: "testuser".to_string(),
        token: "a".repeat(64),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("testuser"));
    assert!(json.contains("token"));
}

#[test]
fn test_csrf_response_field_name() {
    let response = CsrfResponse {
        csrf_token: "tok".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("csrfToken"));
    assert!(!json.contains("csrf_token"));
}

#[test]
fn test_mock_state_configuration() {
    let state = common::create_mock_state();

    assert!(!state.cli.disable_registration);
    assert_eq!(state.cli.port, 3000);
}
