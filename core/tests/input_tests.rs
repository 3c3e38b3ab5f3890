/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use fittrack_core::input::*;
use rust_decimal::Decimal;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");
}

#[test]
fn test_check_index_name() {
    assert!(check_index_name("valid-name").is_ok());
    assert!(check_index_name("valid123").is_ok());

    let err = check_index_name("").unwrap_err();
    assert_eq!(err, "Name cannot be empty");

    let err = check_index_name("UpperCase").unwrap_err();
    assert_eq!(err, "Name must be lowercase");

    let err = check_index_name("under_score").unwrap_err();
    assert_eq!(err, "Name can only contain letters, numbers, and dashes");

    let err = check_index_name("-leading").unwrap_err();
    assert_eq!(err, "Name can only start and end with letters or numbers");

    let err = check_index_name("trailing-").unwrap_err();
    assert_eq!(err, "Name can only start and end with letters or numbers");
}

#[test]
fn test_validate_username() {
    assert!(validate_username("user1").is_ok());

    let err = validate_username("a".repeat(151).as_str()).unwrap_err();
    assert_eq!(err, "Username cannot exceed 150 characters");

    assert!(validate_username("User1").is_err());
    assert!(validate_username("").is_err());
}

#[test]
fn test_validate_display_name() {
    assert!(validate_display_name("Push-ups").is_ok());
    assert!(validate_display_name("Morning Workout").is_ok());

    let err = validate_display_name("").unwrap_err();
    assert_eq!(err, "Name cannot be empty");

    let err = validate_display_name("a".repeat(201).as_str()).unwrap_err();
    assert_eq!(err, "Name cannot exceed 200 characters");

    assert!(validate_display_name("a".repeat(200).as_str()).is_ok());
}

#[test]
fn test_validate_weight() {
    assert!(validate_weight(&Decimal::new(8250, 2)).is_ok());
    assert!(validate_weight(&Decimal::new(99999, 2)).is_ok());
    assert!(validate_weight(&Decimal::new(0, 0)).is_ok());

    let err = validate_weight(&Decimal::new(100000, 2)).unwrap_err();
    assert_eq!(err, "Weight cannot exceed 999.99");

    let err = validate_weight(&Decimal::new(82555, 3)).unwrap_err();
    assert_eq!(err, "Weight cannot have more than 2 decimal places");

    // Trailing zeros do not count as extra precision
    assert!(validate_weight(&Decimal::new(82500, 3)).is_ok());
}

#[test]
fn test_validate_password() {
    assert!(validate_password("Str0ng!Pw").is_ok());

    let err = validate_password("Sh0rt!").unwrap_err();
    assert_eq!(err, "Password must be at least 8 characters long");

    let err = validate_password("N0special").unwrap_err();
    assert_eq!(
        err,
        "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
    );

    let err = validate_password("nouppercase1!").unwrap_err();
    assert_eq!(err, "Password must contain at least one uppercase letter");

    let err = validate_password("NOLOWERCASE1!").unwrap_err();
    assert_eq!(err, "Password must contain at least one lowercase letter");

    let err = validate_password("NoDigits!!").unwrap_err();
    assert_eq!(err, "Password must contain at least one digit");

    let err = validate_password("MyPassword1!").unwrap_err();
    assert_eq!(err, "Password cannot contain the word 'password'");

    let err = validate_password("Xk9!abcdq2").unwrap_err();
    assert_eq!(
        err,
        "Password cannot contain sequential characters (e.g., 'abcd', '1234')"
    );

    let err = validate_password("Xk9!aaaqw2").unwrap_err();
    assert_eq!(
        err,
        "Password cannot contain repeated characters (e.g., 'aaa', '111')"
    );
}
