//! MP3ファイル選択コンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// `on_file_selected` が `false` を返したら入力欄をクリアする（検証NG時）
#[component]
pub fn FilePicker<F>(
    file_label: Signal<String>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(Option<File>) -> bool + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let file = input.files().and_then(|files| files.get(0));
        if !on_file_selected(file) {
            input.set_value("");
        }
    };

    view! {
        <div class="form-group">
            <label for="audio-file">"Audio File (MP3, max 10MB)"</label>
            <div class="file-input-wrapper">
                <input
                    type="file"
                    id="audio-file"
                    accept=".mp3,audio/mpeg,audio/mp3"
                    on:change=on_change
                />
                <span class="file-name">{move || file_label.get()}</span>
            </div>
        </div>
    }
}
