/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod comment;
pub mod exercise;
pub mod session;
pub mod user;
pub mod workout;
pub mod workout_exercise;
