//! エラー型
//!
//! 表示文言はそのまま画面に出すため仏語。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// 保存済みデータも初期データも取得・解析できなかった
    #[error("Impossible de charger « {key} » : {reason}")]
    Load { key: String, reason: String },

    /// ストレージが書き込みを拒否した（容量超過など）
    #[error("Échec de l'enregistrement de « {key} » : {reason}")]
    Quota { key: String, reason: String },

    /// JSON/CSV への変換に失敗した
    #[error("Impossible d'encoder « {key} » : {reason}")]
    Encode { key: String, reason: String },

    /// 読み込んだファイルが不正
    #[error("Fichier invalide pour « {key} » : {reason}")]
    Import { key: String, reason: String },

    #[error("Le stockage local du navigateur est indisponible")]
    Unavailable,
}

impl StoreError {
    pub fn load(key: &str, reason: impl ToString) -> Self {
        StoreError::Load { key: key.to_string(), reason: reason.to_string() }
    }

    pub fn quota(key: &str, reason: impl ToString) -> Self {
        StoreError::Quota { key: key.to_string(), reason: reason.to_string() }
    }

    pub fn encode(key: &str, reason: impl ToString) -> Self {
        StoreError::Encode { key: key.to_string(), reason: reason.to_string() }
    }

    pub fn import(key: &str, reason: impl ToString) -> Self {
        StoreError::Import { key: key.to_string(), reason: reason.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Email ou mot de passe incorrect")]
    InvalidCredentials,

    #[error("L'email et le mot de passe ne peuvent pas être vides")]
    EmptyField,

    #[error(transparent)]
    Store(#[from] StoreError),
}
