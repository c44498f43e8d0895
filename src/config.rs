//! アプリ設定（ビルド時に確定する定数）

/// 初期データ(JSON)の配置ディレクトリ
pub fn seed_base_path() -> &'static str {
    option_env!("ECOLE_SEED_BASE").unwrap_or("data")
}

// ============================================
// ストレージキー
// ============================================

pub const INFOS_KEY: &str = "infos";
pub const CANTINE_KEY: &str = "cantine";
pub const CANTINE_INSCRIPTION_KEY: &str = "cantine_inscription";
pub const ANNONCES_KEY: &str = "annonces";
pub const NEWSLETTER_KEY: &str = "newsletter";
pub const CREDENTIALS_KEY: &str = "credentials";
pub const AUTH_KEY: &str = "auth";

pub const LOG_TRACE_KEY: &str = "ecole_log_trace";
pub const MAX_LOG_ENTRIES: usize = 1000;

// ============================================
// 管理者の初期アカウント
// ============================================

/// 初回ログイン用。`credentials` が保存されるとそちらが優先される。
///
/// 平文比較のデモ用の仕組みであり、実運用の認証ではない。
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// 保存完了メッセージの表示時間(ms)
pub const SAVE_MESSAGE_MS: u32 = 3000;
