// src/domain/gallery_category.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// ギャラリーのカテゴリタグ
///
/// ストレージ上は自由な文字列として保存されるが、管理画面のフォームが
/// 提示するのはこの4種。DTO層のバリデーションで使用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    BeforeAfter,
    Clearance,
    Cleaning,
    VideMaison,
}

impl GalleryCategory {
    /// 文字列からGalleryCategoryに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "before-after" => Some(Self::BeforeAfter),
            "clearance" => Some(Self::Clearance),
            "cleaning" => Some(Self::Cleaning),
            "vide-maison" => Some(Self::VideMaison),
            _ => None,
        }
    }

    /// GalleryCategoryを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeAfter => "before-after",
            Self::Clearance => "clearance",
            Self::Cleaning => "cleaning",
            Self::VideMaison => "vide-maison",
        }
    }

    /// すべての有効なカテゴリを取得
    pub fn all() -> Vec<Self> {
        vec![
            Self::BeforeAfter,
            Self::Clearance,
            Self::Cleaning,
            Self::VideMaison,
        ]
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
