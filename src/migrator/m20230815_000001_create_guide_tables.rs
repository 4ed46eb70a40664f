use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DtvMultiplex::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DtvMultiplex::Mplexid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DtvMultiplex::Sourceid).integer().not_null())
                    .col(ColumnDef::new(DtvMultiplex::Transportid).integer().not_null())
                    .col(ColumnDef::new(DtvMultiplex::Networkid).integer().not_null())
                    .col(ColumnDef::new(DtvMultiplex::Frequency).integer().not_null())
                    .col(ColumnDef::new(DtvMultiplex::Symbolrate).integer().not_null())
                    .col(ColumnDef::new(DtvMultiplex::Polarity).char_len(1).not_null())
                    .col(ColumnDef::new(DtvMultiplex::ModSys).string_len(10).not_null())
                    .col(ColumnDef::new(DtvMultiplex::Hierarchy).char_len(1).not_null())
                    .col(ColumnDef::new(DtvMultiplex::Modulation).string_len(10).not_null())
                    .col(ColumnDef::new(DtvMultiplex::Constellation).string_len(10).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Channel::Chanid).integer().not_null().primary_key())
                    .col(ColumnDef::new(Channel::Channum).integer().not_null())
                    .col(ColumnDef::new(Channel::Sourceid).integer().not_null())
                    .col(ColumnDef::new(Channel::Callsign).string().not_null())
                    .col(ColumnDef::new(Channel::Name).string().not_null())
                    .col(ColumnDef::new(Channel::Useonairguide).boolean().not_null())
                    .col(ColumnDef::new(Channel::Mplexid).integer().not_null())
                    .col(ColumnDef::new(Channel::Serviceid).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DtvMultiplex::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DtvMultiplex {
    Table,
    Mplexid,
    Sourceid,
    Transportid,
    Networkid,
    Frequency,
    Symbolrate,
    Polarity,
    ModSys,
    Hierarchy,
    Modulation,
    Constellation,
}

#[derive(Iden)]
enum Channel {
    Table,
    Chanid,
    Channum,
    Sourceid,
    Callsign,
    Name,
    Useonairguide,
    Mplexid,
    Serviceid,
}
