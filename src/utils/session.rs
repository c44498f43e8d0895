//! 管理画面のセッション管理
//!
//! 認証状態はストアの `auth` フラグ（bool）で保持する。
//! 資格情報は平文で保存・比較しており、デモ用の仕組みでしかない。
//! 実際の利用者がいる環境ではサーバー側の認証に置き換えること。

use crate::config::{AUTH_KEY, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use crate::error::AuthError;
use crate::models::Credentials;
use crate::utils::content_store::{ContentStore, Document};
use crate::utils::log_trace::{log_info, log_info_with_data, log_warn};
use crate::utils::seed::SeedSource;
use crate::utils::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// 保存済みフラグから起動時の状態を決める。読めない場合は未ログイン扱い
pub fn restore<S: KeyValueStorage, F: SeedSource>(store: &ContentStore<S, F>) -> SessionState {
    match store.read::<bool>(AUTH_KEY) {
        Ok(Some(true)) => SessionState::Authenticated,
        Ok(_) => SessionState::Anonymous,
        Err(e) => {
            log_warn("session", &format!("indicateur de session illisible: {}", e));
            SessionState::Anonymous
        }
    }
}

/// 有効な資格情報: 保存済みのもの、なければ初期アカウント
pub fn active_credentials<S: KeyValueStorage, F: SeedSource>(
    store: &ContentStore<S, F>,
) -> Result<Credentials, AuthError> {
    let stored = store.read::<Credentials>(Credentials::KEY)?;
    Ok(stored.unwrap_or_else(|| Credentials {
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        password: DEFAULT_ADMIN_PASSWORD.to_string(),
    }))
}

pub fn login<S: KeyValueStorage, F: SeedSource>(
    store: &ContentStore<S, F>,
    email: &str,
    password: &str,
) -> Result<SessionState, AuthError> {
    let expected = active_credentials(store)?;
    if email != expected.email || password != expected.password {
        log_info_with_data(
            "session",
            "échec de connexion",
            serde_json::json!({ "email": email }),
        );
        return Err(AuthError::InvalidCredentials);
    }

    store.write(AUTH_KEY, &true)?;
    log_info("session", "connexion");
    Ok(SessionState::Authenticated)
}

/// 常に未ログイン状態へ。フラグの削除に失敗してもメモリ上はログアウトする
pub fn logout<S: KeyValueStorage, F: SeedSource>(store: &ContentStore<S, F>) -> SessionState {
    if let Err(e) = store.remove(AUTH_KEY) {
        log_warn("session", &format!("indicateur de session non effacé: {}", e));
    }
    log_info("session", "déconnexion");
    SessionState::Anonymous
}

/// 現在のパスワードを確認したうえで資格情報を置き換える
pub fn change_credentials<S: KeyValueStorage, F: SeedSource>(
    store: &ContentStore<S, F>,
    current_password: &str,
    new_email: &str,
    new_password: &str,
) -> Result<(), AuthError> {
    let active = active_credentials(store)?;
    if current_password != active.password {
        return Err(AuthError::InvalidCredentials);
    }
    if new_email.trim().is_empty() || new_password.is_empty() {
        return Err(AuthError::EmptyField);
    }

    let updated = Credentials {
        email: new_email.trim().to_string(),
        password: new_password.to_string(),
    };
    store.save(&updated)?;
    log_info("session", "identifiants modifiés");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::utils::seed::MemorySeeds;
    use crate::utils::storage::MemoryStorage;

    fn store() -> ContentStore<MemoryStorage, MemorySeeds> {
        ContentStore::new(MemoryStorage::new(), MemorySeeds::default(), "data")
    }

    fn flag(store: &ContentStore<MemoryStorage, MemorySeeds>) -> bool {
        store.read::<bool>(AUTH_KEY).unwrap().unwrap_or(false)
    }

    #[test]
    fn default_credentials_log_in() {
        let store = store();
        assert_eq!(restore(&store), SessionState::Anonymous);
        assert_eq!(
            login(&store, "admin@gmail.com", "admin").unwrap(),
            SessionState::Authenticated
        );
        assert!(flag(&store));
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let store = store();
        assert_eq!(login(&store, "x", "y"), Err(AuthError::InvalidCredentials));
        assert_eq!(
            login(&store, "admin@gmail.com", "Admin"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!flag(&store));
        assert_eq!(restore(&store), SessionState::Anonymous);
    }

    #[test]
    fn flag_survives_reload_and_logout_clears_it() {
        let store = store();
        login(&store, "admin@gmail.com", "admin").unwrap();
        // 再読み込み相当
        assert_eq!(restore(&store), SessionState::Authenticated);

        assert_eq!(logout(&store), SessionState::Anonymous);
        assert!(!flag(&store));
        assert_eq!(restore(&store), SessionState::Anonymous);
    }

    #[test]
    fn stored_credentials_replace_default() {
        let store = store();
        change_credentials(&store, "admin", "direction@ecole.test", "n0uveau").unwrap();

        assert_eq!(
            login(&store, "admin@gmail.com", "admin"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(login(&store, "direction@ecole.test", "n0uveau").is_ok());
    }

    #[test]
    fn change_requires_current_password() {
        let store = store();
        assert_eq!(
            change_credentials(&store, "mauvais", "a@b.c", "pw"),
            Err(AuthError::InvalidCredentials)
        );
        change_credentials(&store, "admin", "a@b.c", "pw").unwrap();
        // 以降の現在パスワードは保存済みのもの
        assert_eq!(
            change_credentials(&store, "admin", "d@e.f", "pw2"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(change_credentials(&store, "pw", "d@e.f", "pw2").is_ok());
    }

    #[test]
    fn change_rejects_empty_fields() {
        let store = store();
        assert_eq!(
            change_credentials(&store, "admin", "  ", "pw"),
            Err(AuthError::EmptyField)
        );
        assert_eq!(
            change_credentials(&store, "admin", "a@b.c", ""),
            Err(AuthError::EmptyField)
        );
        assert_eq!(active_credentials(&store).unwrap().email, DEFAULT_ADMIN_EMAIL);
    }

    #[test]
    fn login_reports_storage_failure() {
        let store = ContentStore::new(MemoryStorage::with_quota(1), MemorySeeds::default(), "data");
        let err = login(&store, "admin@gmail.com", "admin").unwrap_err();
        assert!(matches!(err, AuthError::Store(StoreError::Quota { .. })));
    }
}
