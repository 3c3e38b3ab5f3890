/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::endpoints::comments::{CommentResponse, enrich_comment};
use crate::endpoints::workout_exercises::{WorkoutExerciseResponse, enrich_workout_exercise};
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use core::database::get_workout_by_id;
use core::input::validate_display_name;
use core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeWorkoutRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub duration: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkoutDetailsResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub workout_exercises: Vec<WorkoutExerciseResponse>,
    pub comments: Vec<CommentResponse>,
}

fn validate_workout(body: &MakeWorkoutRequest) -> WebResult<()> {
    if let Err(e) = validate_display_name(body.title.as_str()) {
        return Err(WebError::validation("title", e));
    }

    if body.duration <= 0 {
        return Err(WebError::validation(
            "duration",
            "Duration must be a positive number of minutes",
        ));
    }

    Ok(())
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MWorkout>>>> {
    let workouts = EWorkout::find()
        .filter(CWorkout::CreatedBy.eq(user.id))
        .order_by_desc(CWorkout::Date)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: workouts,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<MakeWorkoutRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MWorkout>>)> {
    let Json(body) = body?;

    validate_workout(&body)?;

    let workout = AWorkout {
        id: Set(Uuid::new_v4()),
        created_by: Set(user.id),
        title: Set(body.title.clone()),
        description: Set(body.description.clone()),
        date: Set(body.date),
        duration: Set(body.duration),
        created_at: Set(Utc::now().naive_utc()),
        updated_at: Set(Utc::now().naive_utc()),
    };

    let workout = workout.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: workout,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_workout(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(workout_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<WorkoutDetailsResponse>>> {
    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    let workout_exercises = EWorkoutExercise::find()
        .filter(CWorkoutExercise::Workout.eq(workout.id))
        .order_by_asc(CWorkoutExercise::Order)
        .all(&state.db)
        .await?;

    let mut exercise_entries = Vec::new();

    for workout_exercise in workout_exercises {
        exercise_entries.push(enrich_workout_exercise(&state, workout_exercise).await?);
    }

    let comments = EComment::find()
        .filter(CComment::Workout.eq(workout.id))
        .order_by_desc(CComment::CreatedAt)
        .all(&state.db)
        .await?;

    let mut comment_entries = Vec::new();

    for comment in comments {
        comment_entries.push(enrich_comment(&state, comment).await?);
    }

    let workout_details = WorkoutDetailsResponse {
        id: workout.id,
        title: workout.title,
        description: workout.description,
        date: workout.date,
        duration: workout.duration,
        created_at: workout.created_at,
        updated_at: workout.updated_at,
        workout_exercises: exercise_entries,
        comments: comment_entries,
    };

    let res = BaseResponse {
        error: false,
        message: workout_details,
    };

    Ok(Json(res))
}

pub async fn put_workout(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(workout_id): Path<Uuid>,
    body: Result<Json<MakeWorkoutRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MWorkout>>> {
    let Json(body) = body?;

    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    validate_workout(&body)?;

    let mut aworkout: AWorkout = workout.into();

    aworkout.title = Set(body.title.clone());
    aworkout.description = Set(body.description.clone());
    aworkout.date = Set(body.date);
    aworkout.duration = Set(body.duration);
    aworkout.updated_at = Set(Utc::now().naive_utc());

    let workout = aworkout.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: workout,
    };

    Ok(Json(res))
}

pub async fn delete_workout(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(workout_id): Path<Uuid>,
) -> WebResult<StatusCode> {
    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    let aworkout: AWorkout = workout.into();
    aworkout.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
