//! BharatVox Common Library
//!
//! CLIとWeb(WASM)で共有される送信フローと型

pub mod types;
pub mod error;
pub mod validation;
pub mod encoding;
pub mod form;
pub mod presentation;
pub mod protocol;
pub mod controller;

pub use types::{AudioFormat, Classification, HealthStatus, Language, VerdictResult, VoiceDetectionRequest};
pub use error::{Error, Result, GENERIC_ERROR_MESSAGE};
pub use validation::{looks_like_mp3, guess_mime_type, validate_selection, SelectedFile, MAX_FILE_SIZE};
pub use encoding::{decode_audio, encode_audio, encoded_looks_like_mp3, strip_data_url_prefix};
pub use presentation::{confidence_percent, BadgeCategory, VerdictView};
pub use protocol::{
    endpoint_url, extract_error_message, health_url, interpret_health, interpret_response,
    API_KEY_HEADER, CONTENT_TYPE_JSON, DEFAULT_API_BASE_URL, FALLBACK_ERROR_MESSAGE,
};
pub use controller::{
    FlowState, LoadingGuard, Panel, SelectOutcome, SelectionId, Submission, SubmissionController,
    DEFAULT_FILE_LABEL,
};
