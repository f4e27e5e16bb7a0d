//! 1ファイル分の判定フロー
//!
//! Web版と同じ `SubmissionController` を通して 検証 → エンコード → 送信 を行う

use crate::audio;
use crate::client::VoiceClient;
use crate::error::{BharatVoxError, Result};
use bharatvox_common::{
    encoded_looks_like_mp3, Language, LoadingGuard, SelectOutcome, SubmissionController,
    VerdictResult, GENERIC_ERROR_MESSAGE,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// 判定リクエストの入力
pub struct AnalyzeRequest<'a> {
    pub path: &'a Path,
    pub language: Language,
    pub api_key: &'a str,
    /// 送信中にスピナーを表示するか
    pub show_spinner: bool,
}

fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Analyzing voice...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 1ファイルを判定する
pub async fn analyze_file(client: &VoiceClient, request: AnalyzeRequest<'_>) -> Result<VerdictResult> {
    let mut controller = SubmissionController::new();
    controller.set_language(request.language.as_str());
    controller.set_api_key(request.api_key);

    let file = audio::describe_file(request.path)?;
    let id = match controller.select_file(Some(file)) {
        SelectOutcome::Accepted(id) => id,
        SelectOutcome::Rejected(err) => return Err(err.into()),
        SelectOutcome::Cleared => {
            return Err(BharatVoxError::FileNotFound(request.path.display().to_string()))
        }
    };
    debug!(state = ?controller.state(), file = controller.file_label(), "selection accepted");

    let encoded = audio::encode_file(request.path).await;
    if let Ok(text) = &encoded {
        if !encoded_looks_like_mp3(text) {
            warn!(file = controller.file_label(), "file does not start with an MP3 signature");
        }
    }
    controller.encoding_finished(id, encoded);

    if let Some(message) = controller.error_message() {
        return Err(BharatVoxError::Analysis(message.to_string()));
    }

    let submission = controller.begin_submission().ok_or_else(|| {
        let missing = controller.missing_inputs();
        if missing.is_empty() {
            BharatVoxError::FormIncomplete("a submission is already in progress".to_string())
        } else {
            BharatVoxError::FormIncomplete(format!("missing {}", missing.join(", ")))
        }
    })?;

    let pb = spinner(request.show_spinner);
    let outcome = {
        let _loading = LoadingGuard::new(|| pb.finish_and_clear());
        client.detect(&submission).await
    };

    let verdict = match outcome {
        Ok(verdict) => {
            controller.finish_submission(Ok(verdict.clone()));
            verdict
        }
        Err(err) => {
            controller.finish_submission(Err(err));
            let message = controller.error_message().unwrap_or(GENERIC_ERROR_MESSAGE);
            return Err(BharatVoxError::Analysis(message.to_string()));
        }
    };
    debug!(state = ?controller.state(), "submission settled");

    Ok(verdict)
}
