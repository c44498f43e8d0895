//! 管理画面の入力欄

use leptos::*;

/// ラベル付きテキスト入力。確定（change）時に `on_change` を呼ぶ
#[component]
pub fn TextField<F>(
    label: &'static str,
    value: String,
    on_change: F,
    #[prop(optional)] multiline: bool,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let input = if multiline {
        view! {
            <textarea prop:value=value on:change=move |ev| on_change(event_target_value(&ev))></textarea>
        }
        .into_view()
    } else {
        view! {
            <input type="text" prop:value=value on:change=move |ev| on_change(event_target_value(&ev)) />
        }
        .into_view()
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            {input}
        </div>
    }
}
