//! ユーティリティモジュール

pub mod content_store;
pub mod document;
pub mod export;
pub mod log_trace;
pub mod seed;
pub mod session;
pub mod storage;

/// 初期データの更新日時を取得（ビルド時に埋め込み）
pub fn format_seed_modified_time() -> String {
    let timestamp: i64 = option_env!("SEED_DATA_MODIFIED")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(dt) if timestamp > 0 => {
            format!("Données par défaut : {}", dt.format("%Y-%m-%d %H:%M UTC"))
        }
        _ => "Données par défaut : date inconnue".to_string(),
    }
}
