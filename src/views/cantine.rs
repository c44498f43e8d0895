//! 食堂ページ（献立と申込み条件）

use leptos::*;

use crate::components::{ErrorBanner, Loading};
use crate::models::{CantineInscription, CantineMenu};
use crate::utils::document::use_document;

#[component]
pub fn CantinePage() -> impl IntoView {
    let menu = use_document::<CantineMenu>();
    let inscription = use_document::<CantineInscription>();

    view! {
        <div class="page cantine">
            <h2>"Menu de la semaine"</h2>
            <Loading loading=menu.loading />
            <ErrorBanner message=menu.error />
            <div class="menu-grid">
                {move || menu.value().map(|m| m.menu.into_iter().map(|day| view! {
                    <div class="menu-day">
                        <h4>{day.day}</h4>
                        <p class="main">{day.main}</p>
                        <p class="side">{day.side}</p>
                        <p class="drink">{day.drink}</p>
                        <p class="dessert">{day.dessert}</p>
                    </div>
                }).collect_view())}
            </div>

            <h2>"Inscription à la cantine"</h2>
            <ErrorBanner message=inscription.error />
            {move || inscription.value().map(|ins| view! {
                <table class="pricing-table">
                    <thead>
                        <tr><th>"Niveau"</th><th>"Période"</th><th>"Tarif"</th></tr>
                    </thead>
                    <tbody>
                        {ins.pricing.into_iter().map(|p| view! {
                            <tr><td>{p.level}</td><td>{p.period}</td><td>{p.price}</td></tr>
                        }).collect_view()}
                    </tbody>
                </table>
                <ul class="conditions">
                    {ins.conditions.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                </ul>
                <div class="contact">
                    <strong>{ins.contact.name}</strong>
                    <span>{ins.contact.phone}</span>
                    <span>{ins.contact.email}</span>
                </div>
            })}
        </div>
    }
}
