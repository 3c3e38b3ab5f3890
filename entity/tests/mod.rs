/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Test modules for entity package

pub mod comment_tests;
pub mod exercise_tests;
pub mod workout_exercise_tests;
pub mod workout_tests;
