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
                    .table(Workout::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workout::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Workout::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Workout::Title).string().not_null())
                    .col(ColumnDef::new(Workout::Description).text().not_null())
                    .col(ColumnDef::new(Workout::Date).date().not_null())
                    .col(ColumnDef::new(Workout::Duration).integer().not_null())
                    .col(ColumnDef::new(Workout::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Workout::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-workout-created_by")
                            .from(Workout::Table, Workout::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workout {
    Table,
    Id,
    CreatedBy,
    Title,
    Description,
    Date,
    Duration,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
