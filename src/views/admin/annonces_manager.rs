//! お知らせの追加・編集・削除

use leptos::*;

use crate::components::{DocumentToolbar, TextField};
use crate::models::{Annonce, Annonces};
use crate::utils::document::use_document;

const KINDS: &[&str] = &["Information", "Événement", "Urgent", "Examen"];
const AUDIENCES: &[&str] = &["Tous", "Parents", "Élèves", "Personnel"];

/// 新規作成用の下書き。id は追加時に採番する
fn new_draft() -> Annonce {
    Annonce {
        id: 0,
        kind: KINDS[0].to_string(),
        title: String::new(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        audience: AUDIENCES[0].to_string(),
        description: String::new(),
        important: false,
    }
}

#[component]
pub fn AnnoncesManager() -> impl IntoView {
    let annonces = use_document::<Annonces>();
    let draft = create_rw_signal(None::<Annonce>);
    // 編集中の既存ID。新規作成中は None
    let editing = create_rw_signal(None::<u32>);
    let (form_error, set_form_error) = create_signal(None::<String>);

    let submit_draft = move |_| {
        let Some(a) = draft.get_untracked() else {
            return;
        };
        if a.title.trim().is_empty() {
            set_form_error.set(Some("Le titre est obligatoire.".to_string()));
            return;
        }
        let target = editing.get_untracked();
        let mut saved = None;
        annonces.mutate(|list| saved = list.save_draft(target, a));
        if saved.is_none() {
            set_form_error.set(Some(match target {
                Some(_) => "Cette annonce n'existe plus.".to_string(),
                None => "Plus aucun identifiant disponible pour une nouvelle annonce.".to_string(),
            }));
            return;
        }
        set_form_error.set(None);
        draft.set(None);
        annonces.save_and_notify("Annonce enregistrée");
    };

    let delete = move |id: u32| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Supprimer cette annonce ?").ok())
            .unwrap_or(false);
        if confirmed {
            annonces.mutate(|list| {
                list.remove(id);
            });
            annonces.save_and_notify("Annonce supprimée");
        }
    };

    view! {
        <div class="manager annonces-manager">
            <h2>"Annonces"</h2>
            <DocumentToolbar handle=annonces restorable=true />

            <button class="add-btn" on:click=move |_| {
                editing.set(None);
                draft.set(Some(new_draft()));
            }>
                "+ Nouvelle annonce"
            </button>

            {move || draft.get().map(|a| view! {
                <div class="annonce-form editor-section">
                    <h3>{match editing.get_untracked() {
                        Some(id) => format!("Annonce n°{}", id),
                        None => "Nouvelle annonce".to_string(),
                    }}</h3>
                    <TextField label="Titre" value=a.title.clone()
                        on_change=move |v| draft.update(|d| if let Some(d) = d { d.title = v }) />
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Type"</label>
                            <select on:change=move |ev| {
                                let v = event_target_value(&ev);
                                draft.update(|d| if let Some(d) = d { d.kind = v });
                            }>
                                {KINDS.iter().map(|k| view! {
                                    <option value={*k} selected={a.kind == *k}>{*k}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Public"</label>
                            <select on:change=move |ev| {
                                let v = event_target_value(&ev);
                                draft.update(|d| if let Some(d) = d { d.audience = v });
                            }>
                                {AUDIENCES.iter().map(|k| view! {
                                    <option value={*k} selected={a.audience == *k}>{*k}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Date"</label>
                            <input type="date" prop:value=a.date.clone()
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    draft.update(|d| if let Some(d) = d { d.date = v });
                                }
                            />
                        </div>
                    </div>
                    <TextField label="Description" value=a.description.clone() multiline=true
                        on_change=move |v| draft.update(|d| if let Some(d) = d { d.description = v }) />
                    <label class="checkbox-label">
                        <input type="checkbox" prop:checked=a.important
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| if let Some(d) = d { d.important = checked });
                            }
                        />
                        " Important"
                    </label>
                    {move || form_error.get().map(|e| view! { <p class="status error">{e}</p> })}
                    <div class="editor-actions">
                        <button class="back-btn" on:click=move |_| draft.set(None)>"Annuler"</button>
                        <button class="save-btn" on:click=submit_draft>"Valider"</button>
                    </div>
                </div>
            })}

            <div class="annonce-list">
                {move || annonces.value().map(|list| list.for_display().into_iter().map(|a| {
                    let id = a.id;
                    let original = a.clone();
                    view! {
                        <div class=format!("annonce-row {}", if a.important { "important" } else { "" })>
                            <span class="date">{a.display_date()}</span>
                            <span class="kind">{a.kind}</span>
                            <span class="title">{a.title}</span>
                            <span class="audience">{a.audience}</span>
                            <button on:click=move |_| {
                                editing.set(Some(id));
                                draft.set(Some(original.clone()));
                            }>"Modifier"</button>
                            <button class="delete-btn" on:click=move |_| delete(id)>"Supprimer"</button>
                        </div>
                    }
                }).collect_view())}
            </div>
        </div>
    }
}
