//! 管理画面共通の操作バー（保存・エクスポート・インポート・初期化）

use leptos::*;

use crate::components::{ErrorBanner, Loading, Notice};
use crate::utils::content_store::Document;
use crate::utils::document::DocumentHandle;

#[component]
pub fn DocumentToolbar<T: Document>(
    handle: DocumentHandle<T>,
    /// 初期データを持つ文書のみ「初期値に戻す」を表示
    #[prop(optional)]
    restorable: bool,
) -> impl IntoView {
    let on_save = move |_| handle.save_and_notify("Modifications enregistrées");
    let on_export = move |_| handle.export();
    let on_import = move |ev: web_sys::Event| handle.import(&ev);
    let on_restore = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Remplacer le contenu par les valeurs par défaut ?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            handle.restore_default();
        }
    };

    view! {
        <div class="document-toolbar">
            <div class="toolbar-actions">
                <button class="save-btn"
                    on:click=on_save
                    disabled=move || handle.value().is_none()
                >
                    "Enregistrer"
                </button>
                {move || handle.is_dirty().then(|| view! {
                    <span class="dirty-flag">"Modifications non enregistrées"</span>
                })}
                <button on:click=on_export disabled=move || handle.value().is_none()>
                    "Exporter"
                </button>
                <label class="import-label">
                    "Importer "
                    <input type="file" accept=".json,.csv" on:change=on_import />
                </label>
                {restorable.then(|| view! {
                    <button class="restore-btn" on:click=on_restore>
                        "Valeurs par défaut"
                    </button>
                })}
            </div>
            <Loading loading=handle.loading />
            <ErrorBanner message=handle.error />
            <Notice message=handle.notice />
        </div>
    }
}
