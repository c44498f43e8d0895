//! 操作ログの表示・ダウンロード

use leptos::*;

use crate::utils::log_trace::{clear_logs, copy_logs_to_clipboard_async, download_logs, get_logs};

#[component]
pub fn JournalView() -> impl IntoView {
    let (entries, set_entries) = create_signal(get_logs());
    let (status, set_status) = create_signal(None::<String>);

    let refresh = move |_| set_entries.set(get_logs());

    let on_download = move |_| {
        if let Err(e) = download_logs() {
            set_status.set(Some(format!("Téléchargement impossible : {}", e)));
        }
    };

    let on_copy = move |_| {
        spawn_local(async move {
            let text = match copy_logs_to_clipboard_async().await {
                Ok(()) => "Journal copié".to_string(),
                Err(e) => e,
            };
            set_status.try_set(Some(text));
            gloo::timers::future::TimeoutFuture::new(2000).await;
            set_status.try_set(None);
        });
    };

    let on_clear = move |_| {
        clear_logs();
        set_entries.set(Vec::new());
    };

    view! {
        <div class="manager journal">
            <h2>"Journal"</h2>
            <div class="toolbar-actions">
                <button on:click=refresh>"Actualiser"</button>
                <button on:click=on_download>"Télécharger"</button>
                <button on:click=on_copy>"Copier"</button>
                <button class="delete-btn" on:click=on_clear>"Vider"</button>
            </div>
            {move || status.get().map(|s| view! { <p class="status">{s}</p> })}
            <table class="log-table">
                <tbody>
                    {move || entries.get().into_iter().rev().map(|entry| view! {
                        <tr class=format!("log-{}", entry.level)>
                            <td class="timestamp">{entry.timestamp}</td>
                            <td class="category">{entry.category}</td>
                            <td class="message">{entry.message}</td>
                            <td class="data">{entry.data.map(|d| d.to_string())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
