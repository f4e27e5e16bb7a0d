//! 送信フローコントローラ
//!
//! ファイル選択 → 検証 → エンコード → 送信 → 結果表示 の一時状態を一箇所で持つ。
//! I/Oは行わない。Web/CLIはイベントをメッセージとして渡し、
//! ファイル読込とHTTP送信の結果を戻すだけ。
//!
//! ```text
//! Idle → Validating → {Idle(error) | Encoding} → Encoded
//!      → Submitting → {Rendered | ErrorShown} → Idle
//! ```

use crate::encoding::strip_data_url_prefix;
use crate::error::{Error, Result};
use crate::form;
use crate::presentation::VerdictView;
use crate::types::{VerdictResult, VoiceDetectionRequest};
use crate::validation::{validate_selection, SelectedFile};

/// ファイル未選択時のラベル
pub const DEFAULT_FILE_LABEL: &str = "Choose MP3 file...";

/// 選択ごとに増える番号（古いエンコード完了を捨てるため）
pub type SelectionId = u64;

/// 結果/エラーパネル（同時に表示されるのは片方のみ）
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Panel {
    #[default]
    Hidden,
    Result(VerdictView),
    Error(String),
}

/// 現在のフロー状態（表示・ログ用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Encoding,
    Ready,
    Submitting,
    Rendered,
    ErrorShown,
}

/// ファイル選択の結果
#[derive(Debug)]
pub enum SelectOutcome {
    /// 選択解除
    Cleared,
    /// 検証NG（エラーパネル表示済み）
    Rejected(Error),
    /// 検証OK。このIDでエンコード完了を通知すること
    Accepted(SelectionId),
}

/// 送信1回分のリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub request: VoiceDetectionRequest,
    /// 前後空白除去済み。ヘッダーにのみ載せる
    pub api_key: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    language: String,
    api_key: String,
    selection: Option<SelectedFile>,
    payload: Option<String>,
    selection_id: SelectionId,
    pending_encoding: Option<SelectionId>,
    in_flight: bool,
    panel: Panel,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================
    // 入力イベント
    // =============================================

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// ファイル選択イベント
    ///
    /// 選択は毎回まるごと置き換える。前の選択のエンコード結果は無効になる
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> SelectOutcome {
        self.selection_id += 1;
        self.selection = None;
        self.payload = None;
        self.pending_encoding = None;
        self.panel = Panel::Hidden;

        let Some(file) = file else {
            return SelectOutcome::Cleared;
        };

        if let Err(err) = validate_selection(&file) {
            self.panel = Panel::Error(err.user_message());
            return SelectOutcome::Rejected(err);
        }

        self.selection = Some(file);
        self.pending_encoding = Some(self.selection_id);
        SelectOutcome::Accepted(self.selection_id)
    }

    /// エンコード完了通知
    ///
    /// `encoded` はBase64文字列（Data URL可）。古い選択の通知なら無視して `false` を返す
    pub fn encoding_finished(&mut self, id: SelectionId, encoded: Result<String>) -> bool {
        if self.pending_encoding != Some(id) {
            return false;
        }
        self.pending_encoding = None;

        match encoded {
            Ok(text) => {
                self.payload = Some(strip_data_url_prefix(&text).to_string());
            }
            Err(err) => {
                self.payload = None;
                self.panel = Panel::Error(err.user_message());
            }
        }
        true
    }

    // =============================================
    // 送信
    // =============================================

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        !self.in_flight && form::is_ready(&self.language, &self.api_key, self.payload.is_some())
    }

    /// 送信に足りない入力（揃っていれば空）
    pub fn missing_inputs(&self) -> Vec<&'static str> {
        form::missing_inputs(&self.language, &self.api_key, self.payload.is_some())
    }

    /// 送信開始。前回の結果/エラーを消してローディングに入る
    pub fn begin_submission(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        let payload = self.payload.clone()?;

        self.panel = Panel::Hidden;
        self.in_flight = true;

        Some(Submission {
            request: VoiceDetectionRequest::mp3(self.language.clone(), payload),
            api_key: self.api_key.trim().to_string(),
        })
    }

    /// 送信結果をパネルに反映（ローディングは解除しない）
    pub fn record_outcome(&mut self, outcome: Result<VerdictResult>) {
        self.panel = match outcome {
            Ok(result) => Panel::Result(VerdictView::from(&result)),
            Err(err) => Panel::Error(err.user_message()),
        };
    }

    /// ローディング解除。実際に解除したときだけ `true`
    pub fn end_loading(&mut self) -> bool {
        std::mem::replace(&mut self.in_flight, false)
    }

    /// 結果反映 + ローディング解除
    pub fn finish_submission(&mut self, outcome: Result<VerdictResult>) {
        self.record_outcome(outcome);
        self.end_loading();
    }

    // =============================================
    // 参照
    // =============================================

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn file_label(&self) -> &str {
        self.selection
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or(DEFAULT_FILE_LABEL)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn is_encoding(&self) -> bool {
        self.pending_encoding.is_some()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn result(&self) -> Option<&VerdictView> {
        match &self.panel {
            Panel::Result(view) => Some(view),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.panel {
            Panel::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn state(&self) -> FlowState {
        if self.in_flight {
            return FlowState::Submitting;
        }
        match &self.panel {
            Panel::Result(_) => FlowState::Rendered,
            Panel::Error(_) => FlowState::ErrorShown,
            Panel::Hidden if self.is_encoding() => FlowState::Encoding,
            Panel::Hidden if self.can_submit() => FlowState::Ready,
            Panel::Hidden => FlowState::Idle,
        }
    }
}

/// スコープ終了時に一度だけ処理を実行するガード
///
/// ローディング解除を成功/失敗の両分岐に書かず、これに任せる
pub struct LoadingGuard<F: FnOnce()> {
    on_exit: Option<F>,
}

impl<F: FnOnce()> LoadingGuard<F> {
    pub fn new(on_exit: F) -> Self {
        Self { on_exit: Some(on_exit) }
    }
}

impl<F: FnOnce()> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        if let Some(on_exit) = self.on_exit.take() {
            on_exit();
        }
    }
}
