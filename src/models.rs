//! データ構造体モジュール
//!
//! 各文書は `Document` として独立したキーで保存される。
//! 文書間の参照整合性は持たない。

use serde::{Deserialize, Serialize};

use crate::config::{
    ANNONCES_KEY, CANTINE_INSCRIPTION_KEY, CANTINE_KEY, CREDENTIALS_KEY, INFOS_KEY,
    NEWSLETTER_KEY,
};
use crate::error::StoreError;
use crate::utils::content_store::Document;
use crate::utils::export::{parse_single_column_csv, to_single_column_csv, ExportFile};

// ============================================
// 学校情報 (infos)
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolInfos {
    pub school: School,
    pub tuition: Vec<TuitionFee>,
    pub results: Vec<ExamYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct School {
    pub name: String,
    #[serde(default)]
    pub slogan: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hours: String,
}

/// 学年ごとの学費
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TuitionFee {
    pub level: String,
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub monthly: String,
    #[serde(default)]
    pub annual: String,
}

/// 年度ごとの試験合格率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExamYear {
    pub year: String,
    #[serde(default)]
    pub exams: Vec<ExamResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExamResult {
    pub exam: String,
    /// 合格率(%)
    pub rate: f64,
}

impl Document for SchoolInfos {
    const KEY: &'static str = INFOS_KEY;
}

// ============================================
// 食堂 (cantine / cantine_inscription)
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CantineMenu {
    pub menu: Vec<DayMenu>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayMenu {
    pub day: String,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub side: String,
    #[serde(default)]
    pub drink: String,
    #[serde(default)]
    pub dessert: String,
}

impl Document for CantineMenu {
    const KEY: &'static str = CANTINE_KEY;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CantineInscription {
    pub pricing: Vec<CantinePrice>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CantinePrice {
    pub level: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Document for CantineInscription {
    const KEY: &'static str = CANTINE_INSCRIPTION_KEY;
}

// ============================================
// お知らせ (annonces)
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annonce {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// YYYY-MM-DD
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub important: bool,
}

impl Annonce {
    /// 表示用の日付 (DD/MM/YYYY)。解析できない場合はそのまま返す。
    pub fn display_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Annonces(pub Vec<Annonce>);

impl Annonces {
    /// 既存IDの最大値 + 1（空なら1）。`u32::MAX` が使用済みなら `None`
    pub fn next_id(&self) -> Option<u32> {
        match self.0.iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// IDを採番して追加し、採番したIDを返す。採番できなければ追加しない
    pub fn add(&mut self, mut annonce: Annonce) -> Option<u32> {
        let id = self.next_id()?;
        annonce.id = id;
        self.0.push(annonce);
        Some(id)
    }

    /// 編集フォームの確定。`editing` が `Some` なら既存を置き換え、`None` なら新規追加
    pub fn save_draft(&mut self, editing: Option<u32>, mut draft: Annonce) -> Option<u32> {
        match editing {
            Some(id) => {
                draft.id = id;
                self.update(draft).then_some(id)
            }
            None => self.add(draft),
        }
    }

    pub fn update(&mut self, annonce: Annonce) -> bool {
        match self.0.iter_mut().find(|a| a.id == annonce.id) {
            Some(existing) => {
                *existing = annonce;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.0.len();
        self.0.retain(|a| a.id != id);
        self.0.len() != before
    }

    /// 重要なものを先頭に、その後は日付の新しい順
    pub fn for_display(&self) -> Vec<Annonce> {
        let mut list = self.0.clone();
        list.sort_by(|a, b| b.important.cmp(&a.important).then_with(|| b.date.cmp(&a.date)));
        list
    }
}

impl Document for Annonces {
    const KEY: &'static str = ANNONCES_KEY;
}

// ============================================
// ニュースレター購読者 (newsletter)
// ============================================

const NEWSLETTER_CSV_HEADER: &str = "Email";

/// 購読者メールアドレスの一覧
///
/// 重複判定は完全一致のみ。大文字小文字や空白の正規化はしない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Newsletter(pub Vec<String>);

impl Newsletter {
    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|e| e == email)
    }

    /// 未登録なら末尾に追加。追加した場合は true
    pub fn subscribe(&mut self, email: &str) -> bool {
        if self.contains(email) {
            return false;
        }
        self.0.push(email.to_string());
        true
    }

    pub fn unsubscribe(&mut self, email: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e != email);
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Document for Newsletter {
    const KEY: &'static str = NEWSLETTER_KEY;

    fn fallback() -> Option<Self> {
        Some(Newsletter::default())
    }

    fn export(&self) -> Result<ExportFile, StoreError> {
        let contents = to_single_column_csv(NEWSLETTER_CSV_HEADER, &self.0)
            .map_err(|e| StoreError::encode(Self::KEY, e))?;
        Ok(ExportFile::csv(Self::KEY, contents))
    }

    /// CSVエクスポートの再読み込みと、文字列配列のJSONの両方を受け付ける
    fn import(contents: &str) -> Result<Self, StoreError> {
        if contents.trim_start().starts_with('[') {
            return serde_json::from_str(contents).map_err(|e| StoreError::import(Self::KEY, e));
        }
        parse_single_column_csv(contents, NEWSLETTER_CSV_HEADER)
            .map(Newsletter)
            .map_err(|e| StoreError::import(Self::KEY, e))
    }
}

// ============================================
// 管理者アカウント (credentials)
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Document for Credentials {
    const KEY: &'static str = CREDENTIALS_KEY;
}

// ============================================
// 画面
// ============================================

/// 公開サイトのページ
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Page {
    #[default]
    Accueil,
    Scolarite,
    Resultats,
    Cantine,
    Annonces,
    Admin,
}

/// 管理画面のタブ
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum AdminTab {
    #[default]
    Infos,
    Cantine,
    Annonces,
    Newsletter,
    Connexion,
    Journal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annonce(id: u32, date: &str, important: bool) -> Annonce {
        Annonce {
            id,
            kind: "Information".to_string(),
            title: format!("Annonce {}", id),
            date: date.to_string(),
            audience: "Tous".to_string(),
            description: String::new(),
            important,
        }
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let list = Annonces(vec![
            annonce(1, "2026-01-01", false),
            annonce(2, "2026-01-02", false),
            annonce(5, "2026-01-03", false),
        ]);
        assert_eq!(list.next_id(), Some(6));
        assert_eq!(Annonces::default().next_id(), Some(1));
    }

    #[test]
    fn exhausted_ids_are_refused_instead_of_wrapping() {
        let mut list =
            Annonces::import(r#"[{"id":4294967295,"type":"Information","title":"t"}]"#).unwrap();
        assert_eq!(list.next_id(), None);
        assert_eq!(list.add(annonce(0, "2026-02-01", false)), None);
        assert_eq!(list.0.len(), 1);
    }

    #[test]
    fn editing_id_zero_updates_in_place() {
        let mut list = Annonces(vec![annonce(0, "2026-01-01", false), annonce(1, "2026-01-02", false)]);
        let mut edited = annonce(0, "2026-01-01", false);
        edited.title = "Modifiée".to_string();

        assert_eq!(list.save_draft(Some(0), edited), Some(0));
        assert_eq!(list.0.len(), 2);
        assert_eq!(list.0[0].title, "Modifiée");

        assert_eq!(list.save_draft(None, annonce(0, "2026-02-01", false)), Some(2));
        assert_eq!(list.0.len(), 3);
        assert_eq!(list.save_draft(Some(9), annonce(9, "2026-02-01", false)), None);
    }

    #[test]
    fn add_assigns_fresh_id() {
        let mut list = Annonces(vec![annonce(3, "2026-01-01", false)]);
        let id = list.add(annonce(0, "2026-02-01", false));
        assert_eq!(id, Some(4));
        assert_eq!(list.0.last().map(|a| a.id), Some(4));

        let mut empty = Annonces::default();
        assert_eq!(empty.add(annonce(42, "2026-02-01", false)), Some(1));
    }

    #[test]
    fn update_and_remove_by_id() {
        let mut list = Annonces(vec![annonce(1, "2026-01-01", false), annonce(2, "2026-01-02", false)]);
        let mut edited = annonce(2, "2026-03-01", true);
        edited.title = "Modifiée".to_string();
        assert!(list.update(edited));
        assert_eq!(list.0[1].title, "Modifiée");
        assert!(!list.update(annonce(9, "2026-01-01", false)));

        assert!(list.remove(1));
        assert!(!list.remove(1));
        assert_eq!(list.0.len(), 1);
    }

    #[test]
    fn display_order_puts_important_first_then_newest() {
        let list = Annonces(vec![
            annonce(1, "2026-01-10", false),
            annonce(2, "2026-03-01", false),
            annonce(3, "2025-12-01", true),
        ]);
        let ids: Vec<u32> = list.for_display().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn annonce_kind_serializes_as_type() {
        let json = serde_json::to_value(annonce(1, "2026-01-01", true)).unwrap();
        assert_eq!(json["type"], "Information");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn display_date_formats_iso_dates() {
        assert_eq!(annonce(1, "2026-11-14", false).display_date(), "14/11/2026");
        assert_eq!(annonce(1, "bientôt", false).display_date(), "bientôt");
    }

    #[test]
    fn subscribing_twice_keeps_one_entry() {
        let mut list = Newsletter::default();
        assert!(list.subscribe("parent@example.com"));
        assert!(!list.subscribe("parent@example.com"));
        assert_eq!(list.0, vec!["parent@example.com".to_string()]);
    }

    #[test]
    fn subscriber_matching_is_exact() {
        let mut list = Newsletter::default();
        list.subscribe("Parent@Example.com");
        assert!(list.subscribe("parent@example.com"));
        assert!(list.subscribe(" parent@example.com"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn newsletter_exports_csv_with_email_header() {
        let list = Newsletter(vec!["a@example.com".to_string(), "b@example.com".to_string()]);
        let file = list.export().unwrap();
        assert_eq!(file.filename, "newsletter.csv");
        assert_eq!(file.contents, "Email\na@example.com\nb@example.com\n");
    }

    #[test]
    fn newsletter_import_accepts_json_array() {
        let list = Newsletter::import(r#"["a@example.com", "b@example.com"]"#).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn infos_import_rejects_wrong_shape() {
        let err = SchoolInfos::import(r#"["pas", "un", "objet"]"#).unwrap_err();
        assert!(matches!(err, StoreError::Import { ref key, .. } if key == "infos"));
    }
}
