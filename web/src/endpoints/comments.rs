/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{NaiveDateTime, Utc};
use core::database::{get_comment_by_id, get_workout_by_id};
use core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeCommentRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CommentResponse {
    pub id: Uuid,
    pub username: String,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub(crate) async fn enrich_comment(
    state: &State<Arc<ServerState>>,
    comment: MComment,
) -> WebResult<CommentResponse> {
    let author: MUser = EUser::find_by_id(comment.created_by)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            tracing::error!(
                "Author {} not found for comment {}",
                comment.created_by,
                comment.id
            );
            WebError::InternalServerError("Comment data inconsistency".to_string())
        })?;

    Ok(CommentResponse {
        id: comment.id,
        username: author.username,
        text: comment.text,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    })
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(workout_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<CommentResponse>>>> {
    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    let comments = EComment::find()
        .filter(CComment::Workout.eq(workout.id))
        .order_by_desc(CComment::CreatedAt)
        .all(&state.db)
        .await?;

    let mut entries = Vec::new();

    for comment in comments {
        entries.push(enrich_comment(&state, comment).await?);
    }

    let res = BaseResponse {
        error: false,
        message: entries,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(workout_id): Path<Uuid>,
    body: Result<Json<MakeCommentRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<CommentResponse>>)> {
    let Json(body) = body?;

    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    if body.text.is_empty() {
        return Err(WebError::validation("text", "Text cannot be empty"));
    }

    let comment = AComment {
        id: Set(Uuid::new_v4()),
        workout: Set(workout.id),
        created_by: Set(user.id),
        text: Set(body.text.clone()),
        created_at: Set(Utc::now().naive_utc()),
        updated_at: Set(Utc::now().naive_utc()),
    };

    let comment = comment.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: enrich_comment(&state, comment).await?,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_comment(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((workout_id, comment_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<CommentResponse>>> {
    let (_workout, comment): (MWorkout, MComment) =
        get_comment_by_id(state.0.clone(), user.id, workout_id, comment_id)
            .await?
            .ok_or_else(|| WebError::not_found("Comment"))?;

    let res = BaseResponse {
        error: false,
        message: enrich_comment(&state, comment).await?,
    };

    Ok(Json(res))
}

pub async fn put_comment(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((workout_id, comment_id)): Path<(Uuid, Uuid)>,
    body: Result<Json<MakeCommentRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<CommentResponse>>> {
    let Json(body) = body?;

    let (_workout, comment): (MWorkout, MComment) =
        get_comment_by_id(state.0.clone(), user.id, workout_id, comment_id)
            .await?
            .ok_or_else(|| WebError::not_found("Comment"))?;

    if body.text.is_empty() {
        return Err(WebError::validation("text", "Text cannot be empty"));
    }

    let mut acomment: AComment = comment.into();

    acomment.text = Set(body.text.clone());
    acomment.updated_at = Set(Utc::now().naive_utc());

    let comment = acomment.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: enrich_comment(&state, comment).await?,
    };

    Ok(Json(res))
}

pub async fn delete_comment(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((workout_id, comment_id)): Path<(Uuid, Uuid)>,
) -> WebResult<StatusCode> {
    let (_workout, comment): (MWorkout, MComment) =
        get_comment_by_id(state.0.clone(), user.id, workout_id, comment_id)
            .await?
            .ok_or_else(|| WebError::not_found("Comment"))?;

    let acomment: AComment = comment.into();
    acomment.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
