//! 画面から文書を扱うためのハンドル
//!
//! ストアはコンテキストから受け取る。読み込み完了前に画面が破棄された場合、
//! 結果は捨てる（`try_set`）。

use leptos::*;

use crate::config::SAVE_MESSAGE_MS;
use crate::error::StoreError;
use crate::utils::content_store::{Document, Editable};
use crate::utils::export::{download, read_selected_file};
use crate::utils::log_trace::{log_error, log_error_with_data, log_info};
use crate::StoreContext;

pub struct DocumentHandle<T: 'static> {
    pub doc: RwSignal<Option<Editable<T>>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    store: StoredValue<StoreContext>,
}

impl<T: 'static> Clone for DocumentHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DocumentHandle<T> {}

/// 文書を読み込み、編集用ハンドルを返す
pub fn use_document<T: Document>() -> DocumentHandle<T> {
    let ctx = use_context::<StoreContext>().expect("StoreContext not found");
    let handle = DocumentHandle {
        doc: create_rw_signal(None),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
        store: store_value(ctx),
    };
    handle.reload();
    handle
}

impl<T: Document> DocumentHandle<T> {
    fn reload(&self) {
        let handle = *self;
        let Some(StoreContext(store)) = self.store.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = store.load::<T>().await;
            handle.apply_loaded(result);
        });
    }

    fn apply_loaded(&self, result: Result<T, StoreError>) {
        match result {
            Ok(value) => {
                self.doc.try_set(Some(Editable::new(value)));
                self.error.try_set(None);
            }
            Err(e) => {
                log_error_with_data("store", &e.to_string(), serde_json::json!({ "key": T::KEY }));
                self.error.try_set(Some(e.to_string()));
            }
        }
        self.loading.try_set(false);
    }

    /// 現在の値（リアクティブ）
    pub fn value(&self) -> Option<T> {
        self.doc.with(|d| d.as_ref().map(|e| e.value().clone()))
    }

    pub fn is_dirty(&self) -> bool {
        self.doc.with(|d| d.as_ref().map_or(false, |e| e.is_dirty()))
    }

    pub fn mutate(&self, update: impl FnOnce(&mut T)) {
        self.doc.update(|d| {
            if let Some(editable) = d {
                editable.mutate(update);
            }
        });
    }

    /// ストアへ保存。失敗はエラー表示に回し、結果を返す
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(StoreContext(store)) = self.store.try_get_value() else {
            return Err(StoreError::Unavailable);
        };
        let mut result = Ok(());
        self.doc.update(|d| {
            if let Some(editable) = d {
                result = editable.save_to(&*store);
            }
        });
        if let Err(e) = &result {
            self.error.set(Some(e.to_string()));
        }
        result
    }

    /// 保存して、成功時は一定時間メッセージを出す
    pub fn save_and_notify(&self, message: &str) {
        if self.save().is_ok() {
            self.flash(message);
        }
    }

    pub fn flash(&self, message: &str) {
        let notice = self.notice;
        notice.set(Some(message.to_string()));
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(SAVE_MESSAGE_MS).await;
            notice.try_set(None);
        });
    }

    pub fn export(&self) {
        let file = match self.doc.with_untracked(|d| d.as_ref().map(|e| e.export())) {
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                log_error("store", &e.to_string());
                self.error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        match download(&file) {
            Ok(()) => log_info("ui-action", &format!("export {}", file.filename)),
            Err(e) => self.error.set(Some(format!("Export impossible : {}", e))),
        }
    }

    /// ファイル選択イベントから読み込む。保存は別途必要
    ///
    /// 読み込みに失敗していた文書も、インポートした内容で置き換えられる。
    pub fn import(&self, ev: &web_sys::Event) {
        let handle = *self;
        read_selected_file(ev, move |text| {
            let outcome = match text {
                Ok(text) => {
                    let replaced = handle.doc.try_update(|d| {
                        if let Some(editable) = d.as_mut() {
                            return editable.import(&text);
                        }
                        *d = Some(Editable::imported(&text)?);
                        Ok(())
                    });
                    // 画面が破棄済み
                    let Some(outcome) = replaced else {
                        return;
                    };
                    outcome
                }
                Err(e) => Err(StoreError::import(T::KEY, e)),
            };
            match outcome {
                Ok(()) => {
                    log_info("ui-action", &format!("import {}", T::KEY));
                    handle.error.try_set(None);
                    handle.notice.try_set(Some(
                        "Fichier importé. Pensez à enregistrer.".to_string(),
                    ));
                }
                Err(e) => {
                    log_error("store", &e.to_string());
                    handle.error.try_set(Some(e.to_string()));
                }
            }
        });
    }

    /// 保存済みデータを破棄して初期データに戻す
    pub fn restore_default(&self) {
        let handle = *self;
        let Some(StoreContext(store)) = self.store.try_get_value() else {
            return;
        };
        self.loading.set(true);
        spawn_local(async move {
            let result = store.restore_default::<T>().await;
            handle.apply_loaded(result);
        });
    }
}
