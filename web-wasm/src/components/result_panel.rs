//! 判定結果パネルコンポーネント

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use bharatvox_common::VerdictView;

/// パネルを画面内にスムーズスクロール
pub fn scroll_into_view(el: &web_sys::Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn ResultPanel(result: Signal<Option<VerdictView>>) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if result.with(Option::is_some) {
            if let Some(el) = panel_ref.get() {
                scroll_into_view(&el);
            }
        }
    });

    view! {
        <Show when=move || result.with(Option::is_some)>
            <div class="result-section" node_ref=panel_ref>
                {move || result.get().map(|verdict| {
                    let badge_class = verdict.badge_class();
                    let confidence_text = verdict.confidence_text();
                    let bar_style = format!("width: {}", verdict.bar_width());
                    view! {
                        <h2>"Analysis Result"</h2>
                        <div class="result-row">
                            <span class="result-label">"Language"</span>
                            <span class="result-value">{verdict.language}</span>
                        </div>
                        <div class="result-row">
                            <span class="result-label">"Classification"</span>
                            <span class=badge_class>{verdict.badge_label}</span>
                        </div>
                        <div class="result-row">
                            <span class="result-label">"Confidence"</span>
                            <span class="result-value">{confidence_text}</span>
                        </div>
                        <div class="confidence-bar">
                            <div class="confidence-fill" style=bar_style />
                        </div>
                        <div class="result-explanation">
                            <span class="result-label">"Explanation"</span>
                            <p>{verdict.explanation}</p>
                        </div>
                    }
                })}
            </div>
        </Show>
    }
}
