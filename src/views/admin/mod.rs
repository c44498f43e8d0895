//! 管理画面
//!
//! 各タブは `RequireAuth` の内側でのみ描画される。

pub mod annonces_manager;
pub mod cantine_manager;
pub mod connection_manager;
pub mod infos_manager;
pub mod journal;
pub mod newsletter_manager;

use leptos::*;

use crate::components::RequireAuth;
use crate::models::AdminTab;
use crate::utils::format_seed_modified_time;
use crate::utils::session;
use crate::{SessionContext, StoreContext};

pub use annonces_manager::AnnoncesManager;
pub use cantine_manager::CantineManager;
pub use connection_manager::ConnectionManager;
pub use infos_manager::InfosManager;
pub use journal::JournalView;
pub use newsletter_manager::NewsletterManager;

const TABS: &[(AdminTab, &str)] = &[
    (AdminTab::Infos, "École"),
    (AdminTab::Cantine, "Cantine"),
    (AdminTab::Annonces, "Annonces"),
    (AdminTab::Newsletter, "Newsletter"),
    (AdminTab::Connexion, "Connexion"),
    (AdminTab::Journal, "Journal"),
];

#[component]
pub fn AdminPanel() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminDashboard />
        </RequireAuth>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let StoreContext(store) = use_context::<StoreContext>().expect("StoreContext not found");
    let session_ctx = use_context::<SessionContext>().expect("SessionContext not found");
    let (current_tab, set_current_tab) = create_signal(AdminTab::default());

    let on_logout = move |_| {
        session_ctx.state.set(session::logout(&*store));
    };

    view! {
        <div class="admin-panel">
            <header class="admin-header">
                <nav class="tabs">
                    {TABS.iter().map(|(tab, label)| {
                        let tab = *tab;
                        view! {
                            <button
                                class=move || if current_tab.get() == tab { "active" } else { "" }
                                on:click=move |_| set_current_tab.set(tab)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <button class="logout-btn" on:click=on_logout>"Se déconnecter"</button>
            </header>

            <main class="admin-content">
                {move || match current_tab.get() {
                    AdminTab::Infos => view! { <InfosManager /> }.into_view(),
                    AdminTab::Cantine => view! { <CantineManager /> }.into_view(),
                    AdminTab::Annonces => view! { <AnnoncesManager /> }.into_view(),
                    AdminTab::Newsletter => view! { <NewsletterManager /> }.into_view(),
                    AdminTab::Connexion => view! { <ConnectionManager /> }.into_view(),
                    AdminTab::Journal => view! { <JournalView /> }.into_view(),
                }}
            </main>

            <footer class="admin-footer">{format_seed_modified_time()}</footer>
        </div>
    }
}
