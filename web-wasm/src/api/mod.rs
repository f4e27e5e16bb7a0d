//! 音声判定API呼び出し

pub mod voice_detection;
