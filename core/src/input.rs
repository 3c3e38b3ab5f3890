/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rust_decimal::Decimal;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn check_index_name(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s != s.to_lowercase() {
        return Err("Name must be lowercase".to_string());
    }

    if s.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err("Name can only contain letters, numbers, and dashes".to_string());
    }

    if s.starts_with('-') || s.ends_with('-') {
        return Err("Name can only start and end with letters or numbers".to_string());
    }

    Ok(())
}

pub fn validate_username(s: &str) -> Result<(), String> {
    if s.chars().count() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username cannot exceed {} characters",
            MAX_USERNAME_LENGTH
        ));
    }

    check_index_name(s)
}

pub fn validate_display_name(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("Name cannot exceed {} characters", MAX_NAME_LENGTH));
    }

    Ok(())
}

pub fn validate_weight(weight: &Decimal) -> Result<(), String> {
    if weight.abs() > *MAX_WEIGHT {
        return Err(format!("Weight cannot exceed {}", *MAX_WEIGHT));
    }

    if weight.normalize().scale() > 2 {
        return Err("Weight cannot have more than 2 decimal places".to_string());
    }

    Ok(())
}

/// Validates password strength requirements
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password cannot exceed 128 characters".to_string());
    }

    if password.to_lowercase().contains("password") {
        return Err("Password cannot contain the word 'password'".to_string());
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c));

    if !has_uppercase {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !has_lowercase {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }

    if !has_special {
        return Err(
            "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
                .to_string(),
        );
    }

    if password.chars().collect::<Vec<_>>().windows(4).any(|w| {
        w[0] as u8 + 1 == w[1] as u8 && w[1] as u8 + 1 == w[2] as u8 && w[2] as u8 + 1 == w[3] as u8
    }) {
        return Err(
            "Password cannot contain sequential characters (e.g., 'abcd', '1234')".to_string(),
        );
    }

    if password
        .chars()
        .collect::<Vec<_>>()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
    {
        return Err("Password cannot contain repeated characters (e.g., 'aaa', '111')".to_string());
    }

    Ok(())
}
