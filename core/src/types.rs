/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Fittrack", display_name = "Fittrack", bin_name = "fittrack-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "FITTRACK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "FITTRACK_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "FITTRACK_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "FITTRACK_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "FITTRACK_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "FITTRACK_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EComment = comment::Entity;
pub type EExercise = exercise::Entity;
pub type ESession = session::Entity;
pub type EUser = user::Entity;
pub type EWorkout = workout::Entity;
pub type EWorkoutExercise = workout_exercise::Entity;

pub type MComment = comment::Model;
pub type MExercise = exercise::Model;
pub type MSession = session::Model;
pub type MUser = user::Model;
pub type MWorkout = workout::Model;
pub type MWorkoutExercise = workout_exercise::Model;

pub type AComment = comment::ActiveModel;
pub type AExercise = exercise::ActiveModel;
pub type ASession = session::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AWorkout = workout::ActiveModel;
pub type AWorkoutExercise = workout_exercise::ActiveModel;

pub type CComment = comment::Column;
pub type CExercise = exercise::Column;
pub type CSession = session::Column;
pub type CUser = user::Column;
pub type CWorkout = workout::Column;
pub type CWorkoutExercise = workout_exercise::Column;

pub type RComment = comment::Relation;
pub type RExercise = exercise::Relation;
pub type RSession = session::Relation;
pub type RUser = user::Relation;
pub type RWorkout = workout::Relation;
pub type RWorkoutExercise = workout_exercise::Relation;
