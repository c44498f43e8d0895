//! 管理画面のログインゲート

use leptos::*;

use crate::utils::session::{self, SessionState};
use crate::{SessionContext, StoreContext};

/// 認証済みなら子要素、未認証ならログインフォームを表示
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    move || match session.state.get() {
        SessionState::Authenticated => children().into_view(),
        SessionState::Anonymous => view! { <LoginForm /> }.into_view(),
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let StoreContext(store) = use_context::<StoreContext>().expect("StoreContext not found");
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_msg, set_error_msg) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match session::login(&*store, &email.get_untracked(), &password.get_untracked()) {
            Ok(state) => {
                set_error_msg.set(None);
                set_password.set(String::new());
                session.state.set(state);
            }
            Err(e) => set_error_msg.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-view">
            <h2>"Espace administration"</h2>
            <form class="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Email"</label>
                    <input type="email" required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Mot de passe"</label>
                    <input type="password" required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {move || error_msg.get().map(|e| view! { <p class="status error">{e}</p> })}
                <button type="submit">"Se connecter"</button>
            </form>
        </div>
    }
}
