//! 言語選択コンポーネント

use leptos::prelude::*;
use bharatvox_common::Language;

#[component]
pub fn LanguageSelect<F>(
    language: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="form-group">
            <label for="language">"Language"</label>
            <select
                id="language"
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                <option value="" selected=move || language.get().is_empty()>"Select language"</option>
                {Language::ALL
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <option
                                value=lang.as_str()
                                selected=move || language.get() == lang.as_str()
                            >
                                {lang.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
