//! 読み込み中・エラー・完了メッセージの表示

use leptos::*;

/// 閉じられるエラー表示
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    move || message.get().map(|msg| view! {
        <div class="status error" role="alert">
            <span>{msg}</span>
            <button class="close-btn" on:click=move |_| message.set(None)>"×"</button>
        </div>
    })
}

#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
    move || message.get().map(|msg| view! {
        <div class="status success">{msg}</div>
    })
}

/// 読み込み中表示。読み込みに失敗した場合は何も出さない（ErrorBanner 側で表示）
#[component]
pub fn Loading(loading: RwSignal<bool>) -> impl IntoView {
    move || loading.get().then(|| view! {
        <p class="status loading">"Chargement..."</p>
    })
}
