//! ローカルコンテンツストア
//!
//! 文書キーごとに「保存済みデータ → なければ初期データ」を読み、
//! 編集はメモリ上で行い、明示的な保存で上書きする。
//!
//! 初期データを読んだ場合はその場でストレージへ書き戻す（シード昇格）。
//! 以降の読み込みはストレージだけで完結する。

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::utils::export::ExportFile;
use crate::utils::log_trace::{log_error, log_info, log_warn};
use crate::utils::seed::SeedSource;
use crate::utils::storage::KeyValueStorage;

/// 独立したキーで保存されるJSON文書
pub trait Document: Serialize + DeserializeOwned + Clone + PartialEq + 'static {
    const KEY: &'static str;

    /// 初期データを持たない文書の、未保存時の値
    fn fallback() -> Option<Self> {
        None
    }

    fn export(&self) -> Result<ExportFile, StoreError> {
        ExportFile::json(Self::KEY, self)
    }

    fn import(contents: &str) -> Result<Self, StoreError> {
        serde_json::from_str(contents).map_err(|e| StoreError::import(Self::KEY, e))
    }
}

pub struct ContentStore<S, F> {
    storage: S,
    seeds: F,
    seed_base: String,
}

impl<S: KeyValueStorage, F: SeedSource> ContentStore<S, F> {
    pub fn new(storage: S, seeds: F, seed_base: impl Into<String>) -> Self {
        ContentStore { storage, seeds, seed_base: seed_base.into() }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn seed_path(&self, key: &str) -> String {
        let base = self.seed_base.trim_end_matches('/');
        if base.is_empty() {
            format!("{}.json", key)
        } else {
            format!("{}/{}.json", base, key)
        }
    }

    /// 保存済みの値。未保存なら `None`、解析できなければ `Load` エラー
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.storage.get_item(key)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::load(key, e)),
            None => Ok(None),
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::encode(key, e))?;
        self.storage.set_item(key, &json).map_err(|e| {
            log_error("store", &e.to_string());
            e
        })
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key)
    }

    /// 保存済みデータ、なければ初期値または初期データ
    pub async fn load<T: Document>(&self) -> Result<T, StoreError> {
        if let Some(value) = self.read::<T>(T::KEY)? {
            return Ok(value);
        }
        if let Some(value) = T::fallback() {
            return Ok(value);
        }
        self.ensure_seeded::<T>().await
    }

    /// 未保存なら初期データを取得してストレージへ書き込む
    ///
    /// 保存済みなら取得は行わずその値を返す。
    pub async fn ensure_seeded<T: Document>(&self) -> Result<T, StoreError> {
        if let Some(value) = self.read::<T>(T::KEY)? {
            return Ok(value);
        }

        let path = self.seed_path(T::KEY);
        let text = self
            .seeds
            .fetch_text(&path)
            .await
            .map_err(|e| StoreError::load(T::KEY, e))?;
        let value: T = serde_json::from_str(&text).map_err(|e| StoreError::load(T::KEY, e))?;

        // 書き戻しに失敗しても読み込み自体は成功扱い（次回また取得する）
        match self.write(T::KEY, &value) {
            Ok(()) => log_info("seed", &format!("{} を初期データから作成", T::KEY)),
            Err(e) => log_warn("seed", &format!("{} の初期データを保存できません: {}", T::KEY, e)),
        }
        Ok(value)
    }

    pub fn save<T: Document>(&self, value: &T) -> Result<(), StoreError> {
        self.write(T::KEY, value)?;
        log_info("store", &format!("{} を保存", T::KEY));
        Ok(())
    }

    /// 保存済みデータを破棄して初期データを読み直す
    pub async fn restore_default<T: Document>(&self) -> Result<T, StoreError> {
        self.remove(T::KEY)?;
        log_info("store", &format!("{} を初期データに戻す", T::KEY));
        self.load::<T>().await
    }
}

// ============================================
// 編集中の文書
// ============================================

/// メモリ上の編集コピー。保存するまでストレージには反映されない
#[derive(Debug, Clone, PartialEq)]
pub struct Editable<T> {
    value: T,
    dirty: bool,
}

impl<T: Document> Editable<T> {
    pub fn new(value: T) -> Self {
        Editable { value, dirty: false }
    }

    /// 読み込めなかった文書をファイルから作り直す。未保存扱い
    pub fn imported(contents: &str) -> Result<Self, StoreError> {
        Ok(Editable { value: T::import(contents)?, dirty: true })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mutate(&mut self, update: impl FnOnce(&mut T)) {
        update(&mut self.value);
        self.dirty = true;
    }

    /// 解析に成功した場合のみ置き換える。失敗時は現在の値を保持する
    pub fn import(&mut self, contents: &str) -> Result<(), StoreError> {
        let value = T::import(contents)?;
        self.value = value;
        self.dirty = true;
        Ok(())
    }

    pub fn export(&self) -> Result<ExportFile, StoreError> {
        self.value.export()
    }

    pub fn save_to<S: KeyValueStorage, F: SeedSource>(
        &mut self,
        store: &ContentStore<S, F>,
    ) -> Result<(), StoreError> {
        store.save(&self.value)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use crate::utils::seed::MemorySeeds;
    use crate::utils::storage::MemoryStorage;
    use futures::executor::block_on;

    const INFOS_SEED: &str = include_str!("../../public/data/infos.json");
    const CANTINE_SEED: &str = include_str!("../../public/data/cantine.json");
    const INSCRIPTION_SEED: &str = include_str!("../../public/data/cantine_inscription.json");
    const ANNONCES_SEED: &str = include_str!("../../public/data/annonces.json");

    fn seeded_store() -> ContentStore<MemoryStorage, MemorySeeds> {
        let seeds = MemorySeeds::default()
            .with("data/infos.json", INFOS_SEED)
            .with("data/cantine.json", CANTINE_SEED)
            .with("data/cantine_inscription.json", INSCRIPTION_SEED)
            .with("data/annonces.json", ANNONCES_SEED);
        ContentStore::new(MemoryStorage::new(), seeds, "data")
    }

    fn assert_export_import_roundtrip<T: Document + std::fmt::Debug>(value: T) {
        let file = value.export().unwrap();
        assert_eq!(file.filename.split('.').next(), Some(T::KEY));
        let restored = T::import(&file.contents).unwrap();
        assert_eq!(restored, value);
    }

    #[test]
    fn seed_path_follows_key() {
        let store = ContentStore::new(MemoryStorage::new(), MemorySeeds::default(), "data/");
        assert_eq!(store.seed_path("infos"), "data/infos.json");
        let store = ContentStore::new(MemoryStorage::new(), MemorySeeds::default(), "");
        assert_eq!(store.seed_path("cantine"), "cantine.json");
    }

    #[test]
    fn first_load_promotes_seed_exactly_once() {
        let store = seeded_store();
        let first: SchoolInfos = block_on(store.load()).unwrap();
        let second: SchoolInfos = block_on(store.load()).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.seeds.fetch_count("data/infos.json"), 1);
        assert_eq!(store.storage().write_count(), 1);
        assert!(store.storage().get_item("infos").unwrap().is_some());
    }

    #[test]
    fn ensure_seeded_skips_fetch_when_stored() {
        let store = seeded_store();
        let menu = CantineMenu { menu: vec![DayMenu { day: "Lundi".into(), ..Default::default() }] };
        store.save(&menu).unwrap();

        let loaded: CantineMenu = block_on(store.ensure_seeded()).unwrap();
        assert_eq!(loaded, menu);
        assert_eq!(store.seeds.fetch_count("data/cantine.json"), 0);
    }

    #[test]
    fn all_seed_files_parse() {
        let store = seeded_store();
        let infos: SchoolInfos = block_on(store.load()).unwrap();
        assert!(!infos.tuition.is_empty());
        let menu: CantineMenu = block_on(store.load()).unwrap();
        assert_eq!(menu.menu.len(), 5);
        let inscription: CantineInscription = block_on(store.load()).unwrap();
        assert!(!inscription.conditions.is_empty());
        let annonces: Annonces = block_on(store.load()).unwrap();
        assert_eq!(annonces.next_id(), Some(3));
    }

    #[test]
    fn load_fails_without_store_entry_or_seed() {
        let store = ContentStore::new(MemoryStorage::new(), MemorySeeds::default(), "data");
        let err = block_on(store.load::<SchoolInfos>()).unwrap_err();
        assert!(matches!(err, StoreError::Load { ref key, .. } if key == "infos"));
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn load_fails_on_unparseable_seed() {
        let seeds = MemorySeeds::default().with("data/cantine.json", "<html>404</html>");
        let store = ContentStore::new(MemoryStorage::new(), seeds, "data");
        let err = block_on(store.load::<CantineMenu>()).unwrap_err();
        assert!(matches!(err, StoreError::Load { .. }));
        assert_eq!(store.storage().get_item("cantine").unwrap(), None);
    }

    #[test]
    fn corrupted_store_entry_is_a_load_error_not_a_reseed() {
        let store = seeded_store();
        store.storage().set_item("infos", "{not json").unwrap();
        let err = block_on(store.load::<SchoolInfos>()).unwrap_err();
        assert!(matches!(err, StoreError::Load { .. }));
        assert_eq!(store.seeds.fetch_count("data/infos.json"), 0);
    }

    #[test]
    fn newsletter_defaults_to_empty_without_fetch_or_write() {
        let store = seeded_store();
        let list: Newsletter = block_on(store.load()).unwrap();
        assert!(list.is_empty());
        assert_eq!(store.seeds.fetch_count("data/newsletter.json"), 0);
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = seeded_store();
        let mut annonces: Annonces = block_on(store.load()).unwrap();
        annonces.add(Annonce {
            id: 0,
            kind: "Urgent".into(),
            title: "Fermeture exceptionnelle".into(),
            date: "2026-12-01".into(),
            audience: "Tous".into(),
            description: "École fermée.".into(),
            important: true,
        });
        store.save(&annonces).unwrap();
        let reloaded: Annonces = block_on(store.load()).unwrap();
        assert_eq!(reloaded, annonces);

        let list = Newsletter(vec!["a@example.com".into()]);
        store.save(&list).unwrap();
        assert_eq!(block_on(store.load::<Newsletter>()).unwrap(), list);
    }

    #[test]
    fn load_is_idempotent_after_save() {
        let store = seeded_store();
        let mut infos: SchoolInfos = block_on(store.load()).unwrap();
        infos.school.name = "Nouveau nom".into();
        store.save(&infos).unwrap();
        let a: SchoolInfos = block_on(store.load()).unwrap();
        let b: SchoolInfos = block_on(store.load()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.school.name, "Nouveau nom");
    }

    #[test]
    fn save_over_quota_reports_quota_error() {
        let store = ContentStore::new(MemoryStorage::with_quota(32), MemorySeeds::default(), "data");
        let list = Newsletter((0..10).map(|i| format!("parent{}@example.com", i)).collect());
        let err = store.save(&list).unwrap_err();
        assert!(matches!(err, StoreError::Quota { ref key, .. } if key == "newsletter"));
        assert_eq!(store.storage().get_item("newsletter").unwrap(), None);
    }

    #[test]
    fn seed_promotion_survives_full_storage() {
        let seeds = MemorySeeds::default().with("data/cantine.json", CANTINE_SEED);
        let store = ContentStore::new(MemoryStorage::with_quota(4), seeds, "data");
        let menu: CantineMenu = block_on(store.load()).unwrap();
        assert_eq!(menu.menu.len(), 5);
        assert_eq!(store.storage().get_item("cantine").unwrap(), None);
    }

    #[test]
    fn restore_default_reseeds() {
        let store = seeded_store();
        let mut menu: CantineMenu = block_on(store.load()).unwrap();
        let original = menu.clone();
        menu.menu.clear();
        store.save(&menu).unwrap();

        let restored: CantineMenu = block_on(store.restore_default()).unwrap();
        assert_eq!(restored, original);
        assert_eq!(store.seeds.fetch_count("data/cantine.json"), 2);
    }

    #[test]
    fn export_import_roundtrip_for_every_document() {
        let store = seeded_store();
        assert_export_import_roundtrip(block_on(store.load::<SchoolInfos>()).unwrap());
        assert_export_import_roundtrip(block_on(store.load::<CantineMenu>()).unwrap());
        assert_export_import_roundtrip(block_on(store.load::<CantineInscription>()).unwrap());
        assert_export_import_roundtrip(block_on(store.load::<Annonces>()).unwrap());
        assert_export_import_roundtrip(Newsletter(vec![
            "a@example.com".into(),
            "b,c@example.com".into(),
        ]));
        assert_export_import_roundtrip(Newsletter::default());
        assert_export_import_roundtrip(Credentials {
            email: "direction@example.com".into(),
            password: "s3cret".into(),
        });
    }

    #[test]
    fn malformed_import_leaves_value_untouched() {
        let store = seeded_store();
        let infos: SchoolInfos = block_on(store.load()).unwrap();
        let mut editable = Editable::new(infos.clone());

        let err = editable.import("{ \"school\": ").unwrap_err();
        assert!(matches!(err, StoreError::Import { .. }));
        assert_eq!(editable.value(), &infos);
        assert!(!editable.is_dirty());
    }

    #[test]
    fn import_replaces_memory_but_not_storage() {
        let store = seeded_store();
        let menu: CantineMenu = block_on(store.load()).unwrap();
        let mut editable = Editable::new(menu.clone());

        editable.import(r#"{ "menu": [] }"#).unwrap();
        assert!(editable.value().menu.is_empty());
        assert!(editable.is_dirty());
        assert_eq!(block_on(store.load::<CantineMenu>()).unwrap(), menu);

        editable.save_to(&store).unwrap();
        assert!(!editable.is_dirty());
        assert!(block_on(store.load::<CantineMenu>()).unwrap().menu.is_empty());
    }

    #[test]
    fn mutate_marks_dirty_without_persisting() {
        let store = seeded_store();
        let list: Newsletter = block_on(store.load()).unwrap();
        let mut editable = Editable::new(list);
        editable.mutate(|l| {
            l.subscribe("x@example.com");
        });
        assert!(editable.is_dirty());
        assert_eq!(store.storage().get_item("newsletter").unwrap(), None);
    }

    #[test]
    fn unencodable_value_is_not_a_quota_error() {
        let store = seeded_store();
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], 1u8);
        let err = store.write("infos", &map).unwrap_err();
        assert!(matches!(err, StoreError::Encode { ref key, .. } if key == "infos"));
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn unreadable_entry_can_be_replaced_by_import() {
        let store = seeded_store();
        store.storage().set_item("cantine", "{not json").unwrap();
        assert!(block_on(store.load::<CantineMenu>()).is_err());

        let mut editable = Editable::<CantineMenu>::imported(CANTINE_SEED).unwrap();
        assert!(editable.is_dirty());
        editable.save_to(&store).unwrap();
        assert_eq!(block_on(store.load::<CantineMenu>()).unwrap().menu.len(), 5);

        let err = Editable::<CantineMenu>::imported("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Import { .. }));
    }
}
