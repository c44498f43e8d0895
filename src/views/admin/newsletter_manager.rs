//! ニュースレター購読者の一覧・CSVエクスポート

use leptos::*;

use crate::components::DocumentToolbar;
use crate::models::Newsletter;
use crate::utils::document::use_document;

#[component]
pub fn NewsletterManager() -> impl IntoView {
    let list = use_document::<Newsletter>();

    let unsubscribe = move |email: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Retirer {} ?", email)).ok())
            .unwrap_or(false);
        if confirmed {
            list.mutate(|l| {
                l.unsubscribe(&email);
            });
            list.save_and_notify("Abonné retiré");
        }
    };

    view! {
        <div class="manager newsletter-manager">
            <h2>"Abonnés à la newsletter"</h2>
            <DocumentToolbar handle=list />
            {move || list.value().map(|subscribers| view! {
                <p class="count">{subscribers.len()} " abonné(s)"</p>
                {subscribers.is_empty().then(|| view! {
                    <p class="empty">"Aucun abonné pour le moment."</p>
                })}
                <ul class="subscriber-list">
                    {subscribers.0.into_iter().map(|email| {
                        let target = email.clone();
                        view! {
                            <li>
                                <span>{email}</span>
                                <button class="delete-btn" on:click=move |_| unsubscribe(target.clone())>"×"</button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            })}
        </div>
    }
}
