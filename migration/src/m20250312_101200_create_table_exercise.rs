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
                    .table(Exercise::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Exercise::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Exercise::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Exercise::Name).string().not_null())
                    .col(ColumnDef::new(Exercise::Description).text().not_null())
                    .col(ColumnDef::new(Exercise::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Exercise::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exercise-created_by")
                            .from(Exercise::Table, Exercise::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One exercise name per user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-exercise-created_by-name")
                    .table(Exercise::Table)
                    .col(Exercise::CreatedBy)
                    .col(Exercise::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Exercise {
    Table,
    Id,
    CreatedBy,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
