//! Create `wisata` table.
//! One row per destination. `seq` is assigned by the database and records
//! insertion order; rows are addressed by the caller-assigned, unique `id_wisata`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wisata::Table)
                    .if_not_exists()
                    .col(pk_auto(Wisata::Seq))
                    .col(string_len(Wisata::IdWisata, 64).unique_key())
                    .col(string_len(Wisata::NamaObjek, 256))
                    .col(string_len(Wisata::NamaDaerah, 128))
                    .col(text(Wisata::Kategori))
                    .col(text(Wisata::Alamat))
                    .col(string_len(Wisata::Kontak, 64))
                    .col(big_integer(Wisata::HargaTiket))
                    .col(big_integer_null(Wisata::IdPajak))
                    .col(big_integer_null(Wisata::IdGuide))
                    .col(big_integer_null(Wisata::IdAsuransi))
                    .col(big_integer_null(Wisata::IdRoom))
                    .col(big_integer_null(Wisata::Nik))
                    .check(Expr::col(Wisata::HargaTiket).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wisata::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wisata {
    Table,
    Seq,
    IdWisata,
    NamaObjek,
    NamaDaerah,
    Kategori,
    Alamat,
    Kontak,
    HargaTiket,
    IdPajak,
    IdGuide,
    IdAsuransi,
    IdRoom,
    Nik,
}
