/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutExercise::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutExercise::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkoutExercise::Workout).uuid().not_null())
                    .col(ColumnDef::new(WorkoutExercise::Exercise).uuid().not_null())
                    .col(ColumnDef::new(WorkoutExercise::Sets).integer().not_null())
                    .col(ColumnDef::new(WorkoutExercise::Reps).integer().not_null())
                    .col(ColumnDef::new(WorkoutExercise::Weight).decimal_len(5, 2))
                    .col(ColumnDef::new(WorkoutExercise::Notes).text().not_null())
                    .col(
                        ColumnDef::new(WorkoutExercise::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-workout_exercise-workout")
                            .from(WorkoutExercise::Table, WorkoutExercise::Workout)
                            .to(Workout::Table, Workout::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-workout_exercise-exercise")
                            .from(WorkoutExercise::Table, WorkoutExercise::Exercise)
                            .to(Exercise::Table, Exercise::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // No two entries at the same position for the same exercise
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-workout_exercise-workout-exercise-order")
                    .table(WorkoutExercise::Table)
                    .col(WorkoutExercise::Workout)
                    .col(WorkoutExercise::Exercise)
                    .col(WorkoutExercise::Order)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutExercise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkoutExercise {
    Table,
    Id,
    Workout,
    Exercise,
    Sets,
    Reps,
    Weight,
    Notes,
    Order,
}

#[derive(DeriveIden)]
enum Workout {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Exercise {
    Table,
    Id,
}
