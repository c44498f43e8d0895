//! 食堂の献立・申込み条件の編集

use leptos::*;

use crate::components::{DocumentToolbar, TextField};
use crate::models::{CantineInscription, CantineMenu, CantinePrice, DayMenu};
use crate::utils::document::use_document;

#[component]
pub fn CantineManager() -> impl IntoView {
    let menu = use_document::<CantineMenu>();
    let inscription = use_document::<CantineInscription>();

    view! {
        <div class="manager cantine-manager">
            <h2>"Menu de la semaine"</h2>
            <DocumentToolbar handle=menu restorable=true />
            {move || menu.value().map(|m| view! {
                <div class="menu-editor">
                    {m.menu.into_iter().enumerate().map(|(idx, day)| view! {
                        <div class="form-row day-row">
                            <TextField label="Jour" value=day.day
                                on_change=move |v| menu.mutate(|d| d.menu[idx].day = v) />
                            <TextField label="Plat" value=day.main
                                on_change=move |v| menu.mutate(|d| d.menu[idx].main = v) />
                            <TextField label="Accompagnement" value=day.side
                                on_change=move |v| menu.mutate(|d| d.menu[idx].side = v) />
                            <TextField label="Boisson" value=day.drink
                                on_change=move |v| menu.mutate(|d| d.menu[idx].drink = v) />
                            <TextField label="Dessert" value=day.dessert
                                on_change=move |v| menu.mutate(|d| d.menu[idx].dessert = v) />
                            <button class="delete-btn"
                                on:click=move |_| menu.mutate(|d| { d.menu.remove(idx); })
                            >"×"</button>
                        </div>
                    }).collect_view()}
                    <button class="add-btn" on:click=move |_| menu.mutate(|d| d.menu.push(DayMenu {
                        day: "Nouveau jour".to_string(),
                        ..Default::default()
                    }))>"+ Ajouter un jour"</button>
                </div>
            })}

            <h2>"Inscription à la cantine"</h2>
            <DocumentToolbar handle=inscription restorable=true />
            {move || inscription.value().map(|ins| view! {
                <section class="editor-section">
                    <h3>"Tarifs"</h3>
                    {ins.pricing.into_iter().enumerate().map(|(idx, p)| view! {
                        <div class="form-row">
                            <TextField label="Niveau" value=p.level
                                on_change=move |v| inscription.mutate(|d| d.pricing[idx].level = v) />
                            <TextField label="Période" value=p.period
                                on_change=move |v| inscription.mutate(|d| d.pricing[idx].period = v) />
                            <TextField label="Tarif" value=p.price
                                on_change=move |v| inscription.mutate(|d| d.pricing[idx].price = v) />
                            <button class="delete-btn"
                                on:click=move |_| inscription.mutate(|d| { d.pricing.remove(idx); })
                            >"×"</button>
                        </div>
                    }).collect_view()}
                    <button class="add-btn" on:click=move |_| inscription.mutate(|d| d.pricing.push(CantinePrice::default()))>
                        "+ Ajouter un tarif"
                    </button>
                </section>

                <section class="editor-section">
                    <h3>"Conditions"</h3>
                    {ins.conditions.into_iter().enumerate().map(|(idx, c)| view! {
                        <div class="form-row">
                            <TextField label="Condition" value=c multiline=true
                                on_change=move |v| inscription.mutate(|d| d.conditions[idx] = v) />
                            <button class="delete-btn"
                                on:click=move |_| inscription.mutate(|d| { d.conditions.remove(idx); })
                            >"×"</button>
                        </div>
                    }).collect_view()}
                    <button class="add-btn" on:click=move |_| inscription.mutate(|d| d.conditions.push(String::new()))>
                        "+ Ajouter une condition"
                    </button>
                </section>

                <section class="editor-section">
                    <h3>"Contact"</h3>
                    <TextField label="Nom" value=ins.contact.name
                        on_change=move |v| inscription.mutate(|d| d.contact.name = v) />
                    <TextField label="Téléphone" value=ins.contact.phone
                        on_change=move |v| inscription.mutate(|d| d.contact.phone = v) />
                    <TextField label="Email" value=ins.contact.email
                        on_change=move |v| inscription.mutate(|d| d.contact.email = v) />
                </section>
            })}
        </div>
    }
}
