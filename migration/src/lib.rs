/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250312_101000_create_table_user;
mod m20250312_101200_create_table_exercise;
mod m20250312_101400_create_table_workout;
mod m20250312_101600_create_table_workout_exercise;
mod m20250312_101800_create_table_comment;
mod m20250312_102000_create_table_session;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250312_101000_create_table_user::Migration),
            Box::new(m20250312_101200_create_table_exercise::Migration),
            Box::new(m20250312_101400_create_table_workout::Migration),
            Box::new(m20250312_101600_create_table_workout_exercise::Migration),
            Box::new(m20250312_101800_create_table_comment::Migration),
            Box::new(m20250312_102000_create_table_session::Migration),
        ]
    }
}
