/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use fittrack_core::init_state;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    web::serve_web(state).await?;

    Ok(())
}
