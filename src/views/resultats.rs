//! 試験結果ページ

use leptos::*;

use crate::components::{ErrorBanner, Loading};
use crate::models::SchoolInfos;
use crate::utils::document::use_document;

#[component]
pub fn ResultatsPage() -> impl IntoView {
    let infos = use_document::<SchoolInfos>();

    view! {
        <div class="page resultats">
            <h2>"Résultats aux examens"</h2>
            <Loading loading=infos.loading />
            <ErrorBanner message=infos.error />
            {move || infos.value().map(|data| {
                let mut years = data.results;
                years.sort_by(|a, b| b.year.cmp(&a.year));
                years.into_iter().map(|year| view! {
                    <div class="result-year">
                        <h3>{year.year}</h3>
                        {year.exams.into_iter().map(|exam| {
                            let width = exam.rate.clamp(0.0, 100.0);
                            view! {
                                <div class="result-row">
                                    <span class="exam">{exam.exam}</span>
                                    <div class="progress-bar">
                                        <div class="progress-fill" style=format!("width: {}%", width)></div>
                                    </div>
                                    <span class="rate">{format!("{:.1} %", exam.rate)}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }).collect_view()
            })}
        </div>
    }
}
