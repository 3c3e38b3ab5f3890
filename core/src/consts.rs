/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc());

/// Weight column is stored as decimal(5, 2).
pub static MAX_WEIGHT: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(99999, 2));

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_USERNAME_LENGTH: usize = 150;

pub const SESSION_TOKEN_LENGTH: usize = 64;
