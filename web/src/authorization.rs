/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Json, Response};
use chrono::Utc;
use core::consts::SESSION_TOKEN_LENGTH;
use core::types::*;
use rand::Rng;
use rand::distr::Alphanumeric;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, (StatusCode, Json<BaseResponse<String>>)> {
    let auth_header = req.headers_mut().get(axum::http::header::AUTHORIZATION);

    let auth_header = match auth_header {
        Some(header) => header.to_str().map_err(|_| {
            (
                StatusCode::FORBIDDEN,
                Json(BaseResponse {
                    error: true,
                    message: "Authorization header empty".to_string(),
                }),
            )
        })?,
        None => {
            return Err((
                StatusCode::FORBIDDEN,
                Json(BaseResponse {
                    error: true,
                    message: "Authorization header not found".to_string(),
                }),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let (bearer, token) = (header.next(), header.next());

    if bearer != Some("Bearer") || token.is_none() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(BaseResponse {
                error: true,
                message: "Invalid Authorization header".to_string(),
            }),
        ));
    }

    let token_str = match token {
        Some(t) => t.to_string(),
        None => {
            return Err((
                StatusCode::FORBIDDEN,
                Json(BaseResponse {
                    error: true,
                    message: "Missing authorization token".to_string(),
                }),
            ));
        }
    };

    let session = match ESession::find()
        .filter(CSession::Token.eq(token_str))
        .one(&state.db)
        .await
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BaseResponse {
                    error: true,
                    message: "Database error".to_string(),
                }),
            )
        })? {
        Some(session) => session,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(BaseResponse {
                    error: true,
                    message: "Invalid session token".to_string(),
                }),
            ));
        }
    };

    let mut asession: ASession = session.into();

    asession.last_used_at = Set(Utc::now().naive_utc());
    let session = asession.update(&state.db).await.map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(BaseResponse {
                error: true,
                message: "Database error".to_string(),
            }),
        )
    })?;

    let current_user = match EUser::find_by_id(session.owned_by)
        .one(&state.db)
        .await
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BaseResponse {
                    error: true,
                    message: "Database error".to_string(),
                }),
            )
        })? {
        Some(user) => user,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(BaseResponse {
                    error: true,
                    message: "User not found".to_string(),
                }),
            ));
        }
    };

    req.extensions_mut().insert(current_user);
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

pub async fn open_session(state: State<Arc<ServerState>>, user_id: Uuid) -> Result<MSession> {
    let asession = ASession {
        id: Set(Uuid::new_v4()),
        owned_by: Set(user_id),
        token: Set(generate_token()),
        last_used_at: Set(Utc::now().naive_utc()),
        created_at: Set(Utc::now().naive_utc()),
    };

    Ok(asession
        .insert(&state.db)
        .await
        .context("Failed to create session")?)
}

pub async fn update_last_login(state: State<Arc<ServerState>>, user: MUser) -> Result<MUser> {
    let mut auser: AUser = user.into();

    auser.last_login_at = Set(Utc::now().naive_utc());
    Ok(auser
        .update(&state.db)
        .await
        .context("Failed to update user last login")?)
}

pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
