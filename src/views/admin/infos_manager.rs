//! 学校情報の編集（基本情報・学費・試験結果）

use leptos::*;

use crate::components::{DocumentToolbar, TextField};
use crate::models::{ExamResult, ExamYear, SchoolInfos, TuitionFee};
use crate::utils::document::use_document;

#[component]
pub fn InfosManager() -> impl IntoView {
    let infos = use_document::<SchoolInfos>();

    view! {
        <div class="manager infos-manager">
            <h2>"Informations de l'école"</h2>
            <DocumentToolbar handle=infos restorable=true />

            {move || infos.value().map(|data| {
                let school = data.school;
                view! {
                    <section class="editor-section">
                        <h3>"Établissement"</h3>
                        <TextField label="Nom" value=school.name
                            on_change=move |v| infos.mutate(|d| d.school.name = v) />
                        <TextField label="Slogan" value=school.slogan
                            on_change=move |v| infos.mutate(|d| d.school.slogan = v) />
                        <TextField label="Adresse" value=school.address
                            on_change=move |v| infos.mutate(|d| d.school.address = v) />
                        <div class="form-row">
                            <TextField label="Téléphone" value=school.phone
                                on_change=move |v| infos.mutate(|d| d.school.phone = v) />
                            <TextField label="Email" value=school.email
                                on_change=move |v| infos.mutate(|d| d.school.email = v) />
                        </div>
                        <TextField label="Horaires" value=school.hours
                            on_change=move |v| infos.mutate(|d| d.school.hours = v) />
                    </section>

                    <section class="editor-section">
                        <h3>"Frais de scolarité"</h3>
                        {data.tuition.into_iter().enumerate().map(|(idx, fee)| view! {
                            <div class="form-row tuition-row">
                                <TextField label="Niveau" value=fee.level
                                    on_change=move |v| infos.mutate(|d| d.tuition[idx].level = v) />
                                <TextField label="Inscription" value=fee.registration
                                    on_change=move |v| infos.mutate(|d| d.tuition[idx].registration = v) />
                                <TextField label="Mensualité" value=fee.monthly
                                    on_change=move |v| infos.mutate(|d| d.tuition[idx].monthly = v) />
                                <TextField label="Annuel" value=fee.annual
                                    on_change=move |v| infos.mutate(|d| d.tuition[idx].annual = v) />
                                <button class="delete-btn"
                                    on:click=move |_| infos.mutate(|d| { d.tuition.remove(idx); })
                                >"Supprimer"</button>
                            </div>
                        }).collect_view()}
                        <button class="add-btn" on:click=move |_| infos.mutate(|d| d.tuition.push(TuitionFee {
                            level: "Nouveau niveau".to_string(),
                            ..Default::default()
                        }))>"+ Ajouter un niveau"</button>
                    </section>

                    <section class="editor-section">
                        <h3>"Résultats aux examens"</h3>
                        {data.results.into_iter().enumerate().map(|(y, year)| view! {
                            <div class="result-year-editor">
                                <div class="form-row">
                                    <TextField label="Année" value=year.year
                                        on_change=move |v| infos.mutate(|d| d.results[y].year = v) />
                                    <button class="delete-btn"
                                        on:click=move |_| infos.mutate(|d| { d.results.remove(y); })
                                    >"Supprimer l'année"</button>
                                </div>
                                {year.exams.into_iter().enumerate().map(|(e, exam)| view! {
                                    <div class="form-row exam-row">
                                        <TextField label="Examen" value=exam.exam
                                            on_change=move |v| infos.mutate(|d| d.results[y].exams[e].exam = v) />
                                        <div class="form-group">
                                            <label>"Taux de réussite (%)"</label>
                                            <input type="number" min="0" max="100" step="0.1"
                                                prop:value=exam.rate.to_string()
                                                on:change=move |ev| {
                                                    if let Ok(rate) = event_target_value(&ev).parse::<f64>() {
                                                        infos.mutate(|d| d.results[y].exams[e].rate = rate);
                                                    }
                                                }
                                            />
                                        </div>
                                        <button class="delete-btn"
                                            on:click=move |_| infos.mutate(|d| { d.results[y].exams.remove(e); })
                                        >"×"</button>
                                    </div>
                                }).collect_view()}
                                <button class="add-btn" on:click=move |_| infos.mutate(|d| d.results[y].exams.push(ExamResult {
                                    exam: "Examen".to_string(),
                                    rate: 0.0,
                                }))>"+ Ajouter un examen"</button>
                            </div>
                        }).collect_view()}
                        <button class="add-btn" on:click=move |_| infos.mutate(|d| d.results.push(ExamYear {
                            year: chrono::Utc::now().format("%Y").to_string(),
                            exams: Vec::new(),
                        }))>"+ Ajouter une année"</button>
                    </section>
                }
            })}
        </div>
    }
}
