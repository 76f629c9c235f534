use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volantes::Table)
                    .if_not_exists()
                    .col(pk_auto(Volantes::Id))
                    .col(string(Volantes::Name))
                    .col(string_len(Volantes::Cpf, 11))
                    .col(string_uniq(Volantes::IdentityKey))
                    .col(text(Volantes::Numbers))
                    .col(timestamp_with_time_zone(Volantes::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_volantes_timestamp")
                    .table(Volantes::Table)
                    .col(Volantes::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Volantes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Volantes {
    Table,
    Id,
    Name,
    Cpf,
    IdentityKey,
    Numbers,
    Timestamp,
}
