//! トップページ

use leptos::*;

use crate::components::{ErrorBanner, Loading};
use crate::models::{Annonces, SchoolInfos};
use crate::utils::document::use_document;
use crate::views::NewsletterForm;

#[component]
pub fn AccueilPage() -> impl IntoView {
    let infos = use_document::<SchoolInfos>();
    let annonces = use_document::<Annonces>();

    view! {
        <div class="page accueil">
            <Loading loading=infos.loading />
            <ErrorBanner message=infos.error />
            {move || infos.value().map(|data| {
                let school = data.school;
                view! {
                    <section class="hero">
                        <h2>{school.name}</h2>
                        <p class="slogan">{school.slogan}</p>
                    </section>
                    <section class="contact">
                        <h3>"Nous contacter"</h3>
                        <p>{school.address}</p>
                        <p>{school.phone}</p>
                        <p><a href=format!("mailto:{}", school.email)>{school.email.clone()}</a></p>
                        <p>{school.hours}</p>
                    </section>
                }
            })}

            <section class="latest-annonces">
                <h3>"Dernières annonces"</h3>
                <ErrorBanner message=annonces.error />
                {move || annonces.value().map(|list| {
                    list.for_display().into_iter().take(3).map(|a| view! {
                        <div class=format!("annonce-teaser {}", if a.important { "important" } else { "" })>
                            <span class="date">{a.display_date()}</span>
                            <span class="title">{a.title}</span>
                        </div>
                    }).collect_view()
                })}
            </section>

            <NewsletterForm />
        </div>
    }
}
