use chrono::{Duration, Utc};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 公開ページの初期コンテンツ（サービス4件・ギャラリー5件）
const SERVICES: [(&str, &str, &str, i32); 4] = [
    (
        "Débarras d'encombrants",
        "Nous enlevons rapidement tous vos objets encombrants : meubles, électroménagers, matelas, cartons. Service complet avec tri et évacuation professionnelle.",
        "https://images.pexels.com/photos/4246196/pexels-photo-4246196.jpeg?auto=compress&cs=tinysrgb&w=800",
        1,
    ),
    (
        "Vide maison complet",
        "Succession, déménagement ou rénovation ? Nous vidons entièrement votre maison ou appartement avec soin et efficacité. Prise en charge totale de A à Z.",
        "https://images.pexels.com/photos/4246120/pexels-photo-4246120.jpeg?auto=compress&cs=tinysrgb&w=800",
        2,
    ),
    (
        "Vide cave et grenier",
        "Libérez vos caves, greniers et garages encombrés. Notre équipe accède aux espaces difficiles et évacue tous vos encombrants en toute sécurité.",
        "https://images.pexels.com/photos/5025636/pexels-photo-5025636.jpeg?auto=compress&cs=tinysrgb&w=800",
        3,
    ),
    (
        "Débarras de bureau",
        "Fermeture, déménagement ou réorganisation de bureaux ? Nous nous occupons du débarras professionnel de vos locaux commerciaux et administratifs.",
        "https://images.pexels.com/photos/3760072/pexels-photo-3760072.jpeg?auto=compress&cs=tinysrgb&w=800",
        4,
    ),
];

const GALLERY_ITEMS: [(&str, &str, &str, &str); 5] = [
    (
        "Débarras hangar complet",
        "Avant/Après - Hangar vidé entièrement",
        "before-after",
        "https://images.pexels.com/photos/4107278/pexels-photo-4107278.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Débarras garage",
        "Avant/Après - Garage débarrassé",
        "before-after",
        "https://images.pexels.com/photos/6196238/pexels-photo-6196238.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Débarras atelier",
        "Avant/Après - Atelier entièrement vidé",
        "before-after",
        "https://images.pexels.com/photos/4108715/pexels-photo-4108715.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Vide appartement",
        "Avant/Après - Appartement vidé et nettoyé",
        "before-after",
        "https://images.pexels.com/photos/7464230/pexels-photo-7464230.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Vide maison",
        "Avant/Après - Maison complètement vidée",
        "before-after",
        "https://images.pexels.com/photos/5691641/pexels-photo-5691641.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = Utc::now();

        // サービスを挿入（display_order 昇順で4件）
        for (title, description, image, display_order) in SERVICES {
            let values: Vec<SimpleExpr> = vec![
                Uuid::new_v4().into(),
                title.into(),
                description.into(),
                image.into(),
                display_order.into(),
                now.into(),
                now.into(),
            ];
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Services::Table)
                        .columns([
                            Services::Id,
                            Services::Title,
                            Services::Description,
                            Services::Image,
                            Services::DisplayOrder,
                            Services::CreatedAt,
                            Services::UpdatedAt,
                        ])
                        .values_panic(values)
                        .to_owned(),
                )
                .await?;
        }

        // ギャラリーを挿入（created_at 降順の一覧で定義順になるよう1秒ずつずらす）
        for (idx, (title, description, category, image)) in GALLERY_ITEMS.iter().enumerate() {
            let created_at = now - Duration::seconds(idx as i64);
            let values: Vec<SimpleExpr> = vec![
                Uuid::new_v4().into(),
                (*title).into(),
                (*description).into(),
                (*category).into(),
                (*image).into(),
                created_at.into(),
                created_at.into(),
            ];
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(GalleryItems::Table)
                        .columns([
                            GalleryItems::Id,
                            GalleryItems::Title,
                            GalleryItems::Description,
                            GalleryItems::Category,
                            GalleryItems::Image,
                            GalleryItems::CreatedAt,
                            GalleryItems::UpdatedAt,
                        ])
                        .values_panic(values)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // シードしたタイトルの行を削除
        for (title, _, _, _) in SERVICES {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(Services::Table)
                        .and_where(Expr::col(Services::Title).eq(title))
                        .to_owned(),
                )
                .await?;
        }

        for (title, _, _, _) in GALLERY_ITEMS {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(GalleryItems::Table)
                        .and_where(Expr::col(GalleryItems::Title).eq(title))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Image,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GalleryItems {
    Table,
    Id,
    Title,
    Description,
    Category,
    Image,
    CreatedAt,
    UpdatedAt,
}
