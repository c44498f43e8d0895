//! 管理者アカウントの変更

use leptos::*;

use crate::utils::session;
use crate::StoreContext;

#[component]
pub fn ConnectionManager() -> impl IntoView {
    let StoreContext(store) = use_context::<StoreContext>().expect("StoreContext not found");

    let current_email = session::active_credentials(&*store)
        .map(|c| c.email)
        .unwrap_or_default();

    let (current_password, set_current_password) = create_signal(String::new());
    let (new_email, set_new_email) = create_signal(current_email.clone());
    let (new_password, set_new_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<(bool, String)>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if new_password.get_untracked() != confirm_password.get_untracked() {
            set_message.set(Some((false, "Les mots de passe ne correspondent pas.".to_string())));
            return;
        }
        match session::change_credentials(
            &*store,
            &current_password.get_untracked(),
            &new_email.get_untracked(),
            &new_password.get_untracked(),
        ) {
            Ok(()) => {
                set_current_password.set(String::new());
                set_new_password.set(String::new());
                set_confirm_password.set(String::new());
                set_message.set(Some((true, "Identifiants mis à jour.".to_string())));
            }
            Err(e) => set_message.set(Some((false, e.to_string()))),
        }
    };

    view! {
        <div class="manager connection-manager">
            <h2>"Identifiants de connexion"</h2>
            <p class="hint">"Compte actuel : " {current_email}</p>
            <p class="warning">
                "Ces identifiants sont stockés en clair dans ce navigateur. "
                "Ne réutilisez pas un mot de passe important."
            </p>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label>"Mot de passe actuel"</label>
                    <input type="password" required
                        prop:value=move || current_password.get()
                        on:input=move |ev| set_current_password.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Nouvel email"</label>
                    <input type="email" required
                        prop:value=move || new_email.get()
                        on:input=move |ev| set_new_email.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Nouveau mot de passe"</label>
                    <input type="password" required
                        prop:value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Confirmer le mot de passe"</label>
                    <input type="password" required
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev)) />
                </div>
                {move || message.get().map(|(ok, text)| view! {
                    <p class={if ok { "status success" } else { "status error" }}>{text}</p>
                })}
                <button type="submit" class="save-btn">"Mettre à jour"</button>
            </form>
        </div>
    }
}
