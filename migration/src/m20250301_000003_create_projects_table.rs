use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `projects` table and its columns.
#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Budget,
    ReviewScore,
    StartDate,
    EndDate,
    Status,
    ClientId,
    FreelancerId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Freelancers {
    Table,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Budget).double().not_null())
                    .col(ColumnDef::new(Projects::ReviewScore).double().null())
                    .col(
                        ColumnDef::new(Projects::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string()
                            .not_null()
                            .default("Not started"),
                    )
                    .col(ColumnDef::new(Projects::ClientId).integer().not_null())
                    .col(ColumnDef::new(Projects::FreelancerId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_client_id")
                            .from(Projects::Table, Projects::ClientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_freelancer_id")
                            .from(Projects::Table, Projects::FreelancerId)
                            .to(Freelancers::Table, Freelancers::UserId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_freelancer_id")
                    .table(Projects::Table)
                    .col(Projects::FreelancerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}
