//! 初期データ(JSON)の取得

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// `data/<key>.json` のような静的リソースを取得する
#[allow(async_fn_in_trait)]
pub trait SeedSource {
    async fn fetch_text(&self, path: &str) -> Result<String, String>;
}

/// `window.fetch` による取得
#[derive(Clone, Copy, Default)]
pub struct HttpSeedSource;

impl SeedSource for HttpSeedSource {
    async fn fetch_text(&self, path: &str) -> Result<String, String> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let request = Request::new_with_str_and_init(path, &opts)
            .map_err(|e| format!("requête invalide: {:?}", e))?;

        let window = web_sys::window().ok_or("window indisponible")?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("fetch échoué: {:?}", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| "réponse invalide".to_string())?;

        if !resp.ok() {
            return Err(format!("HTTP {} pour {}", resp.status(), path));
        }

        let text = JsFuture::from(resp.text().map_err(|e| format!("text() échoué: {:?}", e))?)
            .await
            .map_err(|e| format!("lecture échouée: {:?}", e))?;

        text.as_string().ok_or_else(|| "contenu non textuel".to_string())
    }
}

/// テスト用: パスごとの固定レスポンスと取得回数
#[cfg(test)]
#[derive(Default)]
pub struct MemorySeeds {
    files: std::collections::HashMap<String, String>,
    fetches: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MemorySeeds {
    pub fn with(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetches.borrow().iter().filter(|p| p.as_str() == path).count()
    }
}

#[cfg(test)]
impl SeedSource for MemorySeeds {
    async fn fetch_text(&self, path: &str) -> Result<String, String> {
        self.fetches.borrow_mut().push(path.to_string());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("HTTP 404 pour {}", path))
    }
}
