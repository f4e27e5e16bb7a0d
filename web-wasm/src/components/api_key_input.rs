//! APIキー入力コンポーネント

use leptos::prelude::*;

#[component]
pub fn ApiKeyInput<F>(
    api_key: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="form-group">
            <label for="api-key">"API Key"</label>
            <input
                type="password"
                id="api-key"
                autocomplete="off"
                placeholder="Enter your API key..."
                prop:value=move || api_key.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}
