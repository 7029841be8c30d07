use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Query, Table};

/// Positions every fresh database starts with. Registration only ever looks
/// these up; it never creates new ones.
pub const CANONICAL_POSITIONS: [&str; 6] = [
    "Goleiro",
    "Lateral",
    "Zagueiro",
    "Volante",
    "Meio-campo",
    "Atacante",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Positions {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    Stats,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum PlayerPositions {
    Table,
    PlayerId,
    Slot,
    PositionId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // positions
        manager
            .create_table(
                Table::create()
                    .table(Positions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Positions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Positions::Name).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_positions_name")
                    .table(Positions::Table)
                    .col(Positions::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Players::Stats).json().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // player_positions: one row per declared slot, so order and duplicates survive
        manager
            .create_table(
                Table::create()
                    .table(PlayerPositions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerPositions::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlayerPositions::Slot).integer().not_null())
                    .col(
                        ColumnDef::new(PlayerPositions::PositionId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PlayerPositions::PlayerId)
                            .col(PlayerPositions::Slot),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_positions_player_id")
                            .from(PlayerPositions::Table, PlayerPositions::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_positions_position_id")
                            .from(PlayerPositions::Table, PlayerPositions::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_player_positions_position_id")
                    .table(PlayerPositions::Table)
                    .col(PlayerPositions::PositionId)
                    .to_owned(),
            )
            .await?;

        // seed canonical positions
        for name in CANONICAL_POSITIONS {
            let insert = Query::insert()
                .into_table(Positions::Table)
                .columns([Positions::Name])
                .values([name.into()])
                .map_err(|e| DbErr::Migration(format!("seed position '{name}': {e}")))?
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_player_positions_position_id")
                    .table(PlayerPositions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerPositions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_positions_name")
                    .table(Positions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Positions::Table).to_owned())
            .await?;

        Ok(())
    }
}
