//! メインアプリケーションコンポーネント

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use bharatvox_common::{
    encoded_looks_like_mp3, LoadingGuard, Result, SelectOutcome, SelectedFile, SelectionId,
    SubmissionController, VerdictResult,
};
use crate::api::voice_detection::{check_health, detect_voice, API_BASE_URL};
use crate::components::{
    analyze_button::AnalyzeButton,
    api_key_input::ApiKeyInput,
    error_panel::ErrorPanel,
    file_picker::FilePicker,
    header::Header,
    language_select::LanguageSelect,
    result_panel::ResultPanel,
};
use crate::file_reader::read_as_data_url;

/// ブラウザのFileから検証用メタデータを作る
fn selected_file(file: &File) -> SelectedFile {
    SelectedFile::new(file.name(), file.type_(), file.size() as u64)
}

/// 選択をコントローラに反映する
pub(crate) fn apply_selection(
    controller: RwSignal<SubmissionController>,
    file: Option<&File>,
) -> Option<SelectOutcome> {
    controller.try_update(|c| c.select_file(file.map(selected_file)))
}

/// 選択ファイルを読み込んで反映する。古い選択の読込なら捨てて `false`
pub(crate) async fn encode_selection(
    controller: RwSignal<SubmissionController>,
    id: SelectionId,
    file: File,
) -> bool {
    let encoded = read_as_data_url(&file).await;
    if let Ok(data_url) = &encoded {
        if !encoded_looks_like_mp3(data_url) {
            gloo::console::warn!(format!("{} does not start with an MP3 signature", file.name()));
        }
    }
    let applied = controller
        .try_update(|c| c.encoding_finished(id, encoded))
        .unwrap_or(false);
    if !applied {
        gloo::console::debug!(format!("discarded stale read of {}", file.name()));
    }
    applied
}

/// ファイル選択ハンドラ（falseで入力欄をクリア）
pub(crate) fn handle_file_selected(controller: RwSignal<SubmissionController>, file: Option<File>) -> bool {
    match (apply_selection(controller, file.as_ref()), file) {
        (Some(SelectOutcome::Accepted(id)), Some(file)) => {
            spawn_local(async move {
                encode_selection(controller, id, file).await;
            });
            true
        }
        (Some(SelectOutcome::Rejected(err)), _) => {
            gloo::console::warn!(format!("file rejected: {}", err));
            false
        }
        _ => true,
    }
}

/// 送信1回分を実行し結果を反映する
///
/// 成功/失敗どちらでもローディングを解除
pub(crate) async fn run_submission<Fut>(controller: RwSignal<SubmissionController>, detect: Fut)
where
    Fut: Future<Output = Result<VerdictResult>>,
{
    let _loading = LoadingGuard::new(move || {
        controller.update(|c| {
            c.end_loading();
        });
    });

    let outcome = detect.await;
    if let Err(err) = &outcome {
        gloo::console::warn!(format!("voice detection failed: {}", err));
    }
    controller.update(|c| c.record_outcome(outcome));
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 送信フローの状態はコントローラ1つに集約
    let controller = RwSignal::new(SubmissionController::new());
    let (api_online, set_api_online) = signal(None::<bool>);

    // 派生状態
    let language = Signal::derive(move || controller.with(|c| c.language().to_string()));
    let api_key = Signal::derive(move || controller.with(|c| c.api_key().to_string()));
    let file_label = Signal::derive(move || controller.with(|c| c.file_label().to_string()));
    let can_submit = Signal::derive(move || controller.with(|c| c.can_submit()));
    let is_loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let result = Signal::derive(move || controller.with(|c| c.result().cloned()));
    let error = Signal::derive(move || controller.with(|c| c.error_message().map(str::to_string)));

    // 起動時にAPIの疎通確認
    spawn_local(async move {
        match check_health(API_BASE_URL).await {
            Ok(health) => set_api_online.set(Some(health.is_healthy())),
            Err(err) => {
                gloo::console::warn!(format!("health check failed: {}", err));
                set_api_online.set(Some(false));
            }
        }
    });

    let on_language_change = move |value: String| {
        controller.update(|c| c.set_language(value));
    };

    let on_api_key_input = move |value: String| {
        controller.update(|c| c.set_api_key(value));
    };

    let on_file_selected = move |file: Option<File>| handle_file_selected(controller, file);

    // 解析ハンドラ（1クリック1リクエスト）
    let on_analyze = move |_| {
        let Some(submission) = controller.try_update(|c| c.begin_submission()).flatten() else {
            return;
        };
        gloo::console::debug!(format!(
            "submitting {} ({} base64 chars)",
            submission.request.language,
            submission.request.audio_base64.len()
        ));
        spawn_local(run_submission(controller, async move {
            detect_voice(API_BASE_URL, &submission).await
        }));
    };

    view! {
        <div class="container">
            <Header api_online=api_online />

            <div class="card">
                <LanguageSelect language=language on_change=on_language_change />
                <FilePicker file_label=file_label on_file_selected=on_file_selected />
                <ApiKeyInput api_key=api_key on_input=on_api_key_input />
                <AnalyzeButton
                    can_submit=can_submit
                    is_loading=is_loading
                    on_analyze=on_analyze
                />
            </div>

            <ResultPanel result=result />
            <ErrorPanel error=error />
        </div>
    }
}
