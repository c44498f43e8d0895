//! ファイル入出力（エクスポート/インポート）

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FileReader, HtmlInputElement};

use crate::error::StoreError;

/// ダウンロード用ファイル
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// 2スペースインデントのJSON (`<key>.json`)
    pub fn json<T: Serialize>(key: &str, value: &T) -> Result<Self, StoreError> {
        let contents =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::encode(key, e))?;
        Ok(ExportFile {
            filename: format!("{}.json", key),
            mime: "application/json",
            contents,
        })
    }

    pub fn csv(key: &str, contents: String) -> Self {
        ExportFile {
            filename: format!("{}.csv", key),
            mime: "text/csv",
            contents,
        }
    }
}

// ============================================
// 1列CSV
// ============================================

/// ヘッダー1行 + 1行1件
pub fn to_single_column_csv(header: &str, rows: &[String]) -> Result<String, String> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record([header]).map_err(|e| e.to_string())?;
    for row in rows {
        writer.write_record([row]).map_err(|e| e.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// `to_single_column_csv` の逆変換。先頭行が `header` でなければデータとして扱う
pub fn parse_single_column_csv(text: &str, header: &str) -> Result<Vec<String>, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();

    let first = reader.headers().map_err(|e| e.to_string())?.clone();
    if !first.is_empty() {
        let value = single_field(&first, 1)?;
        if !value.eq_ignore_ascii_case(header) {
            records.push(value);
        }
    }

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| e.to_string())?;
        records.push(single_field(&record, idx + 2)?);
    }

    Ok(records)
}

fn single_field(record: &csv::StringRecord, line: usize) -> Result<String, String> {
    match record.len() {
        1 => Ok(record[0].to_string()),
        _ => Err(format!("une seule colonne attendue (enregistrement {})", line)),
    }
}

// ============================================
// ブラウザ連携
// ============================================

/// Blob を作成してダウンロードさせる
pub fn download(file: &ExportFile) -> Result<(), String> {
    let window = web_sys::window().ok_or("window indisponible")?;
    let document = window.document().ok_or("document indisponible")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(&file.contents));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|e| format!("Blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("URL: {:?}", e))?;

    let a = document.create_element("a").map_err(|e| format!("{:?}", e))?;
    let _ = a.set_attribute("href", &url);
    let _ = a.set_attribute("download", &file.filename);
    if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// `<input type="file">` で選択されたファイルをテキストとして読む
///
/// 読み込みは非同期。完了時に `on_done` が一度だけ呼ばれる。
pub fn read_selected_file<F>(ev: &web_sys::Event, on_done: F)
where
    F: Fn(Result<String, String>) + 'static,
{
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    // 同じファイルを再選択しても change が発火するように
    input.set_value("");

    let reader = match FileReader::new() {
        Ok(r) => r,
        Err(e) => {
            on_done(Err(format!("FileReader: {:?}", e)));
            return;
        }
    };
    let reader_clone = reader.clone();
    let on_done = std::rc::Rc::new(on_done);
    let on_error_cb = on_done.clone();

    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let text = reader_clone
            .result()
            .ok()
            .and_then(|r| r.as_string())
            .ok_or_else(|| "fichier illisible".to_string());
        (*on_done)(text);
    }) as Box<dyn FnMut(_)>);

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        (*on_error_cb)(Err("lecture du fichier échouée".to_string()));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if let Err(e) = reader.read_as_text(&file) {
        web_sys::console::error_1(&e);
    }
}
