use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `freelancers` table and its columns.
#[derive(DeriveIden)]
enum Freelancers {
    Table,
    UserId,
    Title,
    HourlyRate,
    ExpYears,
    Rating,
    TotalProjects,
    Skills,
    LinkedinUrl,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Freelancers::Table)
                    .if_not_exists()
                    // One freelancer profile per user: the user id is the primary key.
                    .col(
                        ColumnDef::new(Freelancers::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Freelancers::Title).string().not_null())
                    .col(ColumnDef::new(Freelancers::HourlyRate).double().not_null())
                    .col(ColumnDef::new(Freelancers::ExpYears).integer().not_null())
                    .col(
                        ColumnDef::new(Freelancers::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Freelancers::TotalProjects)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Freelancers::Skills).json_binary().not_null())
                    .col(ColumnDef::new(Freelancers::LinkedinUrl).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancers_user_id")
                            .from(Freelancers::Table, Freelancers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Freelancers::Table).to_owned())
            .await
    }
}
