//! お知らせ一覧ページ

use leptos::*;

use crate::components::{ErrorBanner, Loading};
use crate::models::Annonces;
use crate::utils::document::use_document;

#[component]
pub fn AnnoncesPage() -> impl IntoView {
    let annonces = use_document::<Annonces>();

    view! {
        <div class="page annonces">
            <h2>"Annonces"</h2>
            <Loading loading=annonces.loading />
            <ErrorBanner message=annonces.error />
            {move || annonces.value().map(|list| {
                if list.0.is_empty() {
                    return view! { <p class="empty">"Aucune annonce pour le moment."</p> }.into_view();
                }
                list.for_display().into_iter().map(|a| view! {
                    <article class=format!("annonce {}", if a.important { "important" } else { "" })>
                        <header>
                            <span class="kind">{a.kind.clone()}</span>
                            <span class="date">{a.display_date()}</span>
                            {a.important.then(|| view! { <span class="badge">"Important"</span> })}
                        </header>
                        <h3>{a.title}</h3>
                        <p class="audience">"Public : " {a.audience}</p>
                        <p>{a.description}</p>
                    </article>
                }).collect_view()
            })}
        </div>
    }
}
