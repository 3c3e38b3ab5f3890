/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{generate_token, open_session, update_last_login};
use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use core::consts::*;
use core::input::{validate_password, validate_username};
use core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub username: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<SessionResponse>>)> {
    let Json(body) = body?;

    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if let Err(e) = validate_username(body.username.as_str()) {
        return Err(WebError::validation("username", e));
    }

    if let Err(e) = validate_password(body.password.as_str()) {
        return Err(WebError::validation("password", e));
    }

    let existing_user = EUser::find()
        .filter(CUser::Username.eq(body.username.clone()))
        .one(&state.db)
        .await?;

    if existing_user.is_some() {
        return Err(WebError::validation("username", "Username already exists"));
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(body.username.clone()),
        password: Set(generate_hash(body.password.clone())),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&state.db).await?;
    let session = open_session(state, user.id).await?;

    let res = BaseResponse {
        error: false,
        message: SessionResponse {
            username: user.username,
            token: session.token,
        },
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<SessionResponse>>> {
    let Json(body) = body?;

    let user = EUser::find()
        .filter(CUser::Username.eq(body.username.clone()))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password)
        .map_err(|_| WebError::invalid_credentials())?;

    let session = open_session(state.clone(), user.id).await?;
    let user = update_last_login(state, user).await?;

    let res = BaseResponse {
        error: false,
        message: SessionResponse {
            username: user.username,
            token: session.token,
        },
    };

    Ok(Json(res))
}

pub async fn post_logout(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<MSession>,
) -> WebResult<Json<BaseResponse<String>>> {
    let asession: ASession = session.into();
    asession.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Logout successful".to_string(),
    };

    Ok(Json(res))
}

// Browser clients fetch a token here before mutating requests
pub async fn get_csrf() -> WebResult<Json<BaseResponse<CsrfResponse>>> {
    let res = BaseResponse {
        error: false,
        message: CsrfResponse {
            csrf_token: generate_token(),
        },
    };

    Ok(Json(res))
}
