use std::fs;
use std::time::UNIX_EPOCH;

const SEED_DIR: &str = "public/data";

fn main() {
    // 初期データ(JSON)の最新更新日時を取得
    let latest = fs::read_dir(SEED_DIR).ok().map(|entries| {
        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "json"))
            .filter_map(|entry| entry.metadata().ok()?.modified().ok())
            .filter_map(|modified| modified.duration_since(UNIX_EPOCH).ok())
            .map(|duration| duration.as_secs())
            .max()
    });

    match latest.flatten() {
        Some(timestamp) => {
            println!("cargo:rustc-env=SEED_DATA_MODIFIED={}", timestamp);
        }
        None => {
            println!("cargo:warning=Could not read seed files in {}", SEED_DIR);
        }
    }

    // 初期データ変更時に再ビルド
    println!("cargo:rerun-if-changed={}", SEED_DIR);
}
