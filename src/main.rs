use leptos::*;
use std::rc::Rc;

mod components;
mod config;
mod error;
mod models;
mod utils;
mod views;

use models::Page;
use utils::content_store::ContentStore;
use utils::seed::HttpSeedSource;
use utils::session::{self, SessionState};
use utils::storage::BrowserStorage;
use views::{AccueilPage, AdminPanel, AnnoncesPage, CantinePage, ResultatsPage, ScolaritePage};

// ============================================
// コンテキスト
// ============================================

pub type AppStore = ContentStore<BrowserStorage, HttpSeedSource>;

/// 全画面で共有するコンテンツストア
#[derive(Clone)]
pub struct StoreContext(pub Rc<AppStore>);

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

// ============================================
// メインアプリ（公開サイト / 管理画面）
// ============================================

const PUBLIC_PAGES: &[(Page, &str)] = &[
    (Page::Accueil, "Accueil"),
    (Page::Scolarite, "Scolarité"),
    (Page::Resultats, "Résultats"),
    (Page::Cantine, "Cantine"),
    (Page::Annonces, "Annonces"),
];

#[component]
fn App() -> impl IntoView {
    let store = Rc::new(ContentStore::new(
        BrowserStorage,
        HttpSeedSource,
        config::seed_base_path(),
    ));
    let session_state = create_rw_signal(session::restore(&*store));

    provide_context(StoreContext(store));
    provide_context(SessionContext { state: session_state });

    let (current_page, set_current_page) = create_signal(Page::default());

    view! {
        <div class="app">
            <header class="app-header">
                <h1 on:click=move |_| set_current_page.set(Page::Accueil)>"Les Lauriers"</h1>
                <nav class="tabs">
                    {PUBLIC_PAGES.iter().map(|(page, label)| {
                        let page = *page;
                        view! {
                            <button
                                class=move || if current_page.get() == page { "active" } else { "" }
                                on:click=move |_| set_current_page.set(page)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <button
                    class=move || if current_page.get() == Page::Admin { "admin-link active" } else { "admin-link" }
                    on:click=move |_| set_current_page.set(Page::Admin)
                >
                    {move || match session_state.get() {
                        SessionState::Authenticated => "Administration",
                        SessionState::Anonymous => "Connexion",
                    }}
                </button>
            </header>

            <main class="container">
                {move || match current_page.get() {
                    Page::Accueil => view! { <AccueilPage /> }.into_view(),
                    Page::Scolarite => view! { <ScolaritePage /> }.into_view(),
                    Page::Resultats => view! { <ResultatsPage /> }.into_view(),
                    Page::Cantine => view! { <CantinePage /> }.into_view(),
                    Page::Annonces => view! { <AnnoncesPage /> }.into_view(),
                    Page::Admin => view! { <AdminPanel /> }.into_view(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
