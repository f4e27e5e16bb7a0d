//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(api_online: ReadSignal<Option<bool>>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"BharatVox AI"</h1>
            <p class="subtitle">"AI-generated voice detection for Indian languages"</p>
            <span class=move || match api_online.get() {
                Some(true) => "api-status online",
                Some(false) => "api-status offline",
                None => "api-status unknown",
            }>
                {move || match api_online.get() {
                    Some(true) => "API online",
                    Some(false) => "API unreachable",
                    None => "Checking API...",
                }}
            </span>
        </header>
    }
}
