/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "workout_exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub workout: Uuid,
    pub exercise: Uuid,
    pub sets: i32,
    pub reps: i32,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub weight: Option<Decimal>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workout::Entity",
        from = "Column::Workout",
        to = "super::workout::Column::Id"
    )]
    Workout,
    #[sea_orm(
        belongs_to = "super::exercise::Entity",
        from = "Column::Exercise",
        to = "super::exercise::Column::Id"
    )]
    Exercise,
}

impl ActiveModelBehavior for ActiveModel {}
