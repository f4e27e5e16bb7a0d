//! エラーパネルコンポーネント

use leptos::prelude::*;

use crate::components::result_panel::scroll_into_view;

#[component]
pub fn ErrorPanel(error: Signal<Option<String>>) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if error.with(Option::is_some) {
            if let Some(el) = panel_ref.get() {
                scroll_into_view(&el);
            }
        }
    });

    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-section" node_ref=panel_ref>
                <span class="error-icon">"⚠"</span>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
