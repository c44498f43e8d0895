//! 時系列トレースログシステム
//! ストア操作・ログイン・画面操作を記録し、管理画面の「Journal」から確認できるようにする
//!
//! wasm32 以外（ユニットテスト）ではコンソール出力と LocalStorage への保存は行わない。

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::{LOG_TRACE_KEY, MAX_LOG_ENTRIES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "store", "seed", "session", "newsletter", "ui-action"
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    pub fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let entry = LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        };

        console_sink(level, category, message);

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);

        self.save_to_storage();
    }

    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.save_to_storage();
    }

    #[cfg(target_arch = "wasm32")]
    fn load_from_storage(&mut self) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Ok(Some(json_str)) = storage.get_item(LOG_TRACE_KEY) {
            if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                self.logs = logs.into_iter().collect();
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from_storage(&mut self) {}

    #[cfg(target_arch = "wasm32")]
    fn save_to_storage(&self) {
        // ログ保存の失敗は記録しない（容量超過時に再帰するため）
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let json_str = serde_json::to_string(&self.logs).unwrap_or_else(|_| "[]".to_string());
        let _ = storage.set_item(LOG_TRACE_KEY, &json_str);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to_storage(&self) {
        let _ = LOG_TRACE_KEY;
    }

    pub fn download_logs(&self) -> Result<(), String> {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let file = crate::utils::export::ExportFile {
            filename: format!("log_trace_{}.json", timestamp),
            mime: "application/json",
            contents: self.get_logs_json(),
        };
        crate::utils::export::download(&file)
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(level: &str, category: &str, message: &str) {
    let line = format!("[{}] {}", category, message);
    match level {
        "error" => web_sys::console::error_1(&line.into()),
        "warn" => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_sink(_level: &str, _category: &str, _message: &str) {}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("warn", category, message, None));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("error", category, message, None));
}

pub fn log_error_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("error", category, message, Some(data)));
}

pub fn get_logs() -> Vec<LogEntry> {
    LOG_TRACE.with(|trace| trace.borrow().get_logs())
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

pub fn download_logs() -> Result<(), String> {
    LOG_TRACE.with(|trace| trace.borrow().download_logs())
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| trace.borrow_mut().clear());
}

pub async fn copy_logs_to_clipboard_async() -> Result<(), String> {
    let json_str = get_logs_json();
    let window = web_sys::window().ok_or_else(|| "window indisponible".to_string())?;
    let promise = window.navigator().clipboard().write_text(&json_str);

    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => {
            log_info("log-trace", "journal copié dans le presse-papiers");
            Ok(())
        }
        Err(e) => {
            let error_msg = format!("copie dans le presse-papiers échouée: {:?}", e);
            log_error("log-trace", &error_msg);
            Err(error_msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_buffer_drops_oldest() {
        let mut trace = LogTrace::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            trace.log("info", "store", &format!("entrée {}", i), None);
        }
        let logs = trace.get_logs();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entrée 5");
    }

    #[test]
    fn entries_keep_level_category_and_data() {
        let mut trace = LogTrace::new();
        trace.log("error", "session", "échec", Some(serde_json::json!({ "email": "x" })));
        let logs = trace.get_logs();
        assert_eq!(logs[0].level, "error");
        assert_eq!(logs[0].category, "session");
        assert_eq!(logs[0].data, Some(serde_json::json!({ "email": "x" })));
        assert!(!logs[0].timestamp.is_empty());

        trace.clear();
        assert!(trace.get_logs().is_empty());
        assert_eq!(trace.get_logs_json(), "[]");
    }

    #[test]
    fn global_helpers_share_one_trace() {
        clear_logs();
        log_info("ui-action", "ouverture");
        log_warn("seed", "lent");
        let logs = get_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[1].level, "warn");
    }
}
