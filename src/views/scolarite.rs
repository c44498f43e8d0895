//! 学費ページ

use leptos::*;

use crate::components::{ErrorBanner, Loading};
use crate::models::SchoolInfos;
use crate::utils::document::use_document;

#[component]
pub fn ScolaritePage() -> impl IntoView {
    let infos = use_document::<SchoolInfos>();

    view! {
        <div class="page scolarite">
            <h2>"Frais de scolarité"</h2>
            <Loading loading=infos.loading />
            <ErrorBanner message=infos.error />
            {move || infos.value().map(|data| view! {
                <table class="tuition-table">
                    <thead>
                        <tr>
                            <th>"Niveau"</th>
                            <th>"Inscription"</th>
                            <th>"Mensualité"</th>
                            <th>"Total annuel"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data.tuition.into_iter().map(|fee| view! {
                            <tr>
                                <td>{fee.level}</td>
                                <td>{fee.registration}</td>
                                <td>{fee.monthly}</td>
                                <td>{fee.annual}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            })}
        </div>
    }
}
