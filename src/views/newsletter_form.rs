//! ニュースレター購読フォーム（公開側）

use leptos::*;

use crate::models::Newsletter;
use crate::utils::document::use_document;
use crate::utils::log_trace::log_info;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let list = use_document::<Newsletter>();
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<(bool, String)>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() {
            set_message.set(Some((false, "Veuillez saisir une adresse email.".to_string())));
            return;
        }
        if list.value().is_none() {
            set_message.set(Some((false, "Inscription indisponible pour le moment.".to_string())));
            return;
        }

        let mut added = false;
        list.mutate(|l| added = l.subscribe(&address));
        if !added {
            set_message.set(Some((true, "Vous êtes déjà inscrit(e).".to_string())));
            return;
        }
        match list.save() {
            Ok(()) => {
                log_info("newsletter", "nouvelle inscription");
                set_email.set(String::new());
                set_message.set(Some((true, "Merci pour votre inscription !".to_string())));
            }
            Err(e) => {
                list.mutate(|l| {
                    l.unsubscribe(&address);
                });
                set_message.set(Some((false, e.to_string())));
            }
        }
    };

    view! {
        <section class="newsletter">
            <h3>"Newsletter"</h3>
            <form on:submit=on_submit>
                <input type="email" placeholder="Votre email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit">"S'inscrire"</button>
            </form>
            {move || message.get().map(|(ok, text)| view! {
                <p class={if ok { "status success" } else { "status error" }}>{text}</p>
            })}
        </section>
    }
}
