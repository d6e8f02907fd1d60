use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // display_order カラムにインデックスを追加（公開一覧の並び順用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Services::Table)
                    .name("idx_services_display_order")
                    .col(Services::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        // created_at カラムにインデックスを追加（新着順の一覧用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(GalleryItems::Table)
                    .name("idx_gallery_items_created_at")
                    .col(GalleryItems::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ContactMessages::Table)
                    .name("idx_contact_messages_created_at")
                    .col(ContactMessages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // インデックスを削除
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Services::Table)
                    .name("idx_services_display_order")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(GalleryItems::Table)
                    .name("idx_gallery_items_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ContactMessages::Table)
                    .name("idx_contact_messages_created_at")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

/// Reference to the services table
#[derive(DeriveIden)]
enum Services {
    Table,
    DisplayOrder,
}

/// Reference to the gallery_items table
#[derive(DeriveIden)]
enum GalleryItems {
    Table,
    CreatedAt,
}

/// Reference to the contact_messages table
#[derive(DeriveIden)]
enum ContactMessages {
    Table,
    CreatedAt,
}
