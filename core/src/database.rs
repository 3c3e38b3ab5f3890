/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn get_exercise_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    exercise_id: Uuid,
) -> Result<Option<MExercise>> {
    Ok(EExercise::find()
        .filter(
            Condition::all()
                .add(CExercise::CreatedBy.eq(user_id))
                .add(CExercise::Id.eq(exercise_id)),
        )
        .one(&state.db)
        .await
        .context("Failed to query exercise")?)
}

pub async fn get_workout_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    workout_id: Uuid,
) -> Result<Option<MWorkout>> {
    Ok(EWorkout::find()
        .filter(
            Condition::all()
                .add(CWorkout::CreatedBy.eq(user_id))
                .add(CWorkout::Id.eq(workout_id)),
        )
        .one(&state.db)
        .await
        .context("Failed to query workout")?)
}

pub async fn get_workout_exercise_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    workout_id: Uuid,
    workout_exercise_id: Uuid,
) -> Result<Option<(MWorkout, MWorkoutExercise)>> {
    match get_workout_by_id(state.clone(), user_id, workout_id).await? {
        Some(w) => Ok(EWorkoutExercise::find()
            .filter(
                Condition::all()
                    .add(CWorkoutExercise::Workout.eq(w.id))
                    .add(CWorkoutExercise::Id.eq(workout_exercise_id)),
            )
            .one(&state.db)
            .await
            .context("Failed to query workout exercise")?
            .map(|we| (w, we))),
        None => Ok(None),
    }
}

pub async fn get_comment_by_id(
    state: Arc<ServerState>,
    user_id: Uuid,
    workout_id: Uuid,
    comment_id: Uuid,
) -> Result<Option<(MWorkout, MComment)>> {
    match get_workout_by_id(state.clone(), user_id, workout_id).await? {
        Some(w) => Ok(EComment::find()
            .filter(
                Condition::all()
                    .add(CComment::Workout.eq(w.id))
                    .add(CComment::Id.eq(comment_id)),
            )
            .one(&state.db)
            .await
            .context("Failed to query comment")?
            .map(|c| (w, c))),
        None => Ok(None),
    }
}
