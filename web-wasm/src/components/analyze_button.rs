//! 解析ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<F>(
    can_submit: Signal<bool>,
    is_loading: Signal<bool>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary analyze-btn"
            disabled=move || !can_submit.get() || is_loading.get()
            on:click=move |_| on_analyze(())
        >
            <Show
                when=move || is_loading.get()
                fallback=|| view! { <span class="btn-text">"Analyze Voice"</span> }
            >
                <span class="btn-loader" aria-label="Analyzing"></span>
            </Show>
        </button>
    }
}
