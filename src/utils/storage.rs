//! キー・バリューストレージ
//!
//! ブラウザの LocalStorage と、テスト用のメモリ実装。

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::StoreError;

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================
// LocalStorage
// ============================================

#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

/// DOMException の名前とメッセージを取り出す
fn js_error_reason(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) => format!("{} ({})", ex.name(), ex.message()),
        None => format!("{:?}", err),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::load(key, js_error_reason(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::quota(key, js_error_reason(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::quota(key, js_error_reason(&e)))
    }
}

// ============================================
// メモリ実装
// ============================================

/// `quota` を超える書き込みは `StoreError::Quota` になる
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
    writes: RefCell<usize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// キーと値の合計バイト数の上限を設定
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStorage { quota: Some(bytes), ..Self::default() }
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if self.used_bytes_without(key) + key.len() + value.len() > quota {
                return Err(StoreError::quota(key, "QuotaExceededError"));
            }
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites_and_removes() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "1").unwrap();
        storage.set_item("k", "2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("2"));
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn quota_counts_replaced_value_once() {
        let storage = MemoryStorage::with_quota(8);
        storage.set_item("k", "123456").unwrap();
        // 置き換えなので既存分は数えない
        storage.set_item("k", "abcdef").unwrap();
        let err = storage.set_item("k2", "x").unwrap_err();
        assert!(matches!(err, StoreError::Quota { .. }));
        assert_eq!(storage.get_item("k2").unwrap(), None);
    }
}
