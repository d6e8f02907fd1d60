// src/images.rs

/// 画像参照をそのページで使える絶対URLへ正規化する
///
/// ルール:
/// - 絶対URL（http/https）はそのまま
/// - `/api/uploads/…`（現行）と `/uploads/…`（旧）はバックエンドのオリジンを前置
/// - それ以外の値もそのまま通す
pub fn resolve_image_url(path: &str, backend_origin: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    if path.starts_with("/api/uploads/") || path.starts_with("/uploads/") {
        return format!("{}{}", backend_origin.trim_end_matches('/'), path);
    }

    path.to_string()
}
