/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        disable_registration: false,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::user::Model>::new()])
        .into_connection();

    Arc::new(ServerState { db, cli })
}
