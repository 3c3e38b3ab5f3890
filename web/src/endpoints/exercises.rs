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
use chrono::Utc;
use core::database::get_exercise_by_id;
use core::input::validate_display_name;
use core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeExerciseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchExerciseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MExercise>>>> {
    let exercises = EExercise::find()
        .filter(CExercise::CreatedBy.eq(user.id))
        .order_by_asc(CExercise::Name)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: exercises,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<MakeExerciseRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MExercise>>)> {
    let Json(body) = body?;

    if let Err(e) = validate_display_name(body.name.as_str()) {
        return Err(WebError::validation("name", e));
    }

    let existing_exercise = EExercise::find()
        .filter(
            Condition::all()
                .add(CExercise::CreatedBy.eq(user.id))
                .add(CExercise::Name.eq(body.name.clone())),
        )
        .one(&state.db)
        .await?;

    if existing_exercise.is_some() {
        return Err(WebError::validation(
            "name",
            "You already have an exercise with this name",
        ));
    }

    let exercise = AExercise {
        id: Set(Uuid::new_v4()),
        created_by: Set(user.id),
        name: Set(body.name.clone()),
        description: Set(body.description.clone()),
        created_at: Set(Utc::now().naive_utc()),
        updated_at: Set(Utc::now().naive_utc()),
    };

    let exercise = exercise.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: exercise,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_exercise(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(exercise_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MExercise>>> {
    let exercise: MExercise = get_exercise_by_id(state.0.clone(), user.id, exercise_id)
        .await?
        .ok_or_else(|| WebError::not_found("Exercise"))?;

    let res = BaseResponse {
        error: false,
        message: exercise,
    };

    Ok(Json(res))
}

pub async fn put_exercise(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(exercise_id): Path<Uuid>,
    body: Result<Json<PatchExerciseRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MExercise>>> {
    let Json(body) = body?;

    let exercise: MExercise = get_exercise_by_id(state.0.clone(), user.id, exercise_id)
        .await?
        .ok_or_else(|| WebError::not_found("Exercise"))?;

    let mut aexercise: AExercise = exercise.into();

    if let Some(name) = body.name {
        if let Err(e) = validate_display_name(name.as_str()) {
            return Err(WebError::validation("name", e));
        }

        let existing_exercise = EExercise::find()
            .filter(
                Condition::all()
                    .add(CExercise::CreatedBy.eq(user.id))
                    .add(CExercise::Name.eq(name.clone()))
                    .add(CExercise::Id.ne(exercise_id)),
            )
            .one(&state.db)
            .await?;

        if existing_exercise.is_some() {
            return Err(WebError::validation(
                "name",
                "You already have an exercise with this name",
            ));
        }

        aexercise.name = Set(name);
    }

    if let Some(description) = body.description {
        aexercise.description = Set(description);
    }

    aexercise.updated_at = Set(Utc::now().naive_utc());
    let exercise = aexercise.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: exercise,
    };

    Ok(Json(res))
}

pub async fn delete_exercise(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(exercise_id): Path<Uuid>,
) -> WebResult<StatusCode> {
    let exercise: MExercise = get_exercise_by_id(state.0.clone(), user.id, exercise_id)
        .await?
        .ok_or_else(|| WebError::not_found("Exercise"))?;

    let aexercise: AExercise = exercise.into();
    aexercise.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
