use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GalleryItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GalleryItems::Title).text())
                    .col(ColumnDef::new(GalleryItems::Description).text())
                    .col(
                        // before-after / clearance / cleaning / vide-maison
                        ColumnDef::new(GalleryItems::Category).string(),
                    )
                    .col(
                        // 単一画像、またはビフォーアフター比較の画像ペア
                        ColumnDef::new(GalleryItems::Image).text(),
                    )
                    .col(ColumnDef::new(GalleryItems::ImageBefore).text())
                    .col(ColumnDef::new(GalleryItems::ImageAfter).text())
                    .col(
                        ColumnDef::new(GalleryItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(GalleryItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryItems::Table).to_owned())
            .await
    }
}

/// Iden Enum for the 'gallery_items' table and its columns
#[derive(DeriveIden)]
enum GalleryItems {
    Table,
    Id,
    Title,
    Description,
    Category,
    Image,
    ImageBefore,
    ImageAfter,
    CreatedAt,
    UpdatedAt,
}
