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
use core::database::{get_exercise_by_id, get_workout_by_id, get_workout_exercise_by_id};
use core::input::validate_weight;
use core::types::*;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeWorkoutExerciseRequest {
    pub exercise_id: Uuid,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkoutExerciseResponse {
    pub id: Uuid,
    pub exercise: Uuid,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<Decimal>,
    pub notes: String,
    pub order: i32,
}

pub(crate) async fn enrich_workout_exercise(
    state: &State<Arc<ServerState>>,
    workout_exercise: MWorkoutExercise,
) -> WebResult<WorkoutExerciseResponse> {
    let exercise: MExercise = EExercise::find_by_id(workout_exercise.exercise)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            tracing::error!(
                "Exercise {} not found for workout exercise {}",
                workout_exercise.exercise,
                workout_exercise.id
            );
            WebError::InternalServerError("Exercise data inconsistency".to_string())
        })?;

    Ok(WorkoutExerciseResponse {
        id: workout_exercise.id,
        exercise: workout_exercise.exercise,
        exercise_name: exercise.name,
        sets: workout_exercise.sets,
        reps: workout_exercise.reps,
        weight: workout_exercise.weight,
        notes: workout_exercise.notes,
        order: workout_exercise.order,
    })
}

async fn validate_entry(
    state: &State<Arc<ServerState>>,
    user_id: Uuid,
    workout_id: Uuid,
    body: &MakeWorkoutExerciseRequest,
    exclude_id: Option<Uuid>,
) -> WebResult<()> {
    // The referenced exercise must exist and belong to the workout owner;
    // a foreign exercise is reported exactly like an absent one.
    if get_exercise_by_id(state.0.clone(), user_id, body.exercise_id)
        .await?
        .is_none()
    {
        return Err(WebError::validation("exercise_id", "Exercise not found"));
    }

    if let Some(weight) = &body.weight {
        if let Err(e) = validate_weight(weight) {
            return Err(WebError::validation("weight", e));
        }
    }

    let mut condition = Condition::all()
        .add(CWorkoutExercise::Workout.eq(workout_id))
        .add(CWorkoutExercise::Exercise.eq(body.exercise_id))
        .add(CWorkoutExercise::Order.eq(body.order));

    if let Some(id) = exclude_id {
        condition = condition.add(CWorkoutExercise::Id.ne(id));
    }

    let existing_entry = EWorkoutExercise::find()
        .filter(condition)
        .one(&state.db)
        .await?;

    if existing_entry.is_some() {
        return Err(WebError::validation(
            "order",
            "This exercise is already assigned to this position",
        ));
    }

    Ok(())
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(workout_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<WorkoutExerciseResponse>>>> {
    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    let workout_exercises = EWorkoutExercise::find()
        .filter(CWorkoutExercise::Workout.eq(workout.id))
        .order_by_asc(CWorkoutExercise::Order)
        .all(&state.db)
        .await?;

    let mut entries = Vec::new();

    for workout_exercise in workout_exercises {
        entries.push(enrich_workout_exercise(&state, workout_exercise).await?);
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
    body: Result<Json<MakeWorkoutExerciseRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<WorkoutExerciseResponse>>)> {
    let Json(body) = body?;

    let workout: MWorkout = get_workout_by_id(state.0.clone(), user.id, workout_id)
        .await?
        .ok_or_else(|| WebError::not_found("Workout"))?;

    validate_entry(&state, user.id, workout.id, &body, None).await?;

    let workout_exercise = AWorkoutExercise {
        id: Set(Uuid::new_v4()),
        workout: Set(workout.id),
        exercise: Set(body.exercise_id),
        sets: Set(body.sets),
        reps: Set(body.reps),
        weight: Set(body.weight),
        notes: Set(body.notes.clone()),
        order: Set(body.order),
    };

    let workout_exercise = workout_exercise.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: enrich_workout_exercise(&state, workout_exercise).await?,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_workout_exercise(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((workout_id, workout_exercise_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<WorkoutExerciseResponse>>> {
    let (_workout, workout_exercise): (MWorkout, MWorkoutExercise) =
        get_workout_exercise_by_id(state.0.clone(), user.id, workout_id, workout_exercise_id)
            .await?
            .ok_or_else(|| WebError::not_found("Workout Exercise"))?;

    let res = BaseResponse {
        error: false,
        message: enrich_workout_exercise(&state, workout_exercise).await?,
    };

    Ok(Json(res))
}

pub async fn put_workout_exercise(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((workout_id, workout_exercise_id)): Path<(Uuid, Uuid)>,
    body: Result<Json<MakeWorkoutExerciseRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<WorkoutExerciseResponse>>> {
    let Json(body) = body?;

    let (workout, workout_exercise): (MWorkout, MWorkoutExercise) =
        get_workout_exercise_by_id(state.0.clone(), user.id, workout_id, workout_exercise_id)
            .await?
            .ok_or_else(|| WebError::not_found("Workout Exercise"))?;

    validate_entry(&state, user.id, workout.id, &body, Some(workout_exercise.id)).await?;

    // Full replacement: omitted weight/notes/order reset to their defaults
    let mut aworkout_exercise: AWorkoutExercise = workout_exercise.into();

    aworkout_exercise.exercise = Set(body.exercise_id);
    aworkout_exercise.sets = Set(body.sets);
    aworkout_exercise.reps = Set(body.reps);
    aworkout_exercise.weight = Set(body.weight);
    aworkout_exercise.notes = Set(body.notes.clone());
    aworkout_exercise.order = Set(body.order);

    let workout_exercise = aworkout_exercise.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: enrich_workout_exercise(&state, workout_exercise).await?,
    };

    Ok(Json(res))
}

pub async fn delete_workout_exercise(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((workout_id, workout_exercise_id)): Path<(Uuid, Uuid)>,
) -> WebResult<StatusCode> {
    let (_workout, workout_exercise): (MWorkout, MWorkoutExercise) =
        get_workout_exercise_by_id(state.0.clone(), user.id, workout_id, workout_exercise_id)
            .await?
            .ok_or_else(|| WebError::not_found("Workout Exercise"))?;

    let aworkout_exercise: AWorkoutExercise = workout_exercise.into();
    aworkout_exercise.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
