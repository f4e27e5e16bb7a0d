//! ファイル選択の検証

use crate::error::{Error, Result};

/// ファイルサイズ上限（10MiB）
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// 宣言されたMIMEタイプ（不明なら空文字）
    pub mime_type: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// MIMEタイプに `mp3` を含むか、拡張子が `.mp3` ならMP3扱い
    pub fn is_declared_mp3(&self) -> bool {
        self.mime_type.contains("mp3") || self.name.ends_with(".mp3")
    }
}

/// 選択を検証する（種別 → サイズの順）
pub fn validate_selection(file: &SelectedFile) -> Result<()> {
    if !file.is_declared_mp3() {
        return Err(Error::InvalidFileType);
    }
    if file.size > MAX_FILE_SIZE {
        return Err(Error::FileTooLarge {
            size: file.size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// 先頭バイトがMP3のシグネチャに一致するか
///
/// MPEGフレーム同期ワード（`FF FB` / `FF F3` / `FF F2`）またはID3v2タグ
pub fn looks_like_mp3(bytes: &[u8]) -> bool {
    const SIGNATURES: [&[u8]; 4] = [b"\xff\xfb", b"\xff\xf3", b"\xff\xf2", b"ID3"];
    SIGNATURES.iter().any(|sig| bytes.starts_with(sig))
}

/// 拡張子からMIMEタイプを推定（CLI用）
///
/// 拡張子は大文字小文字を区別しない。MP3は `audio/mp3` として宣言する
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    match lower.rsplit_once('.').map(|(_, ext)| ext) {
        Some("mp3") => "audio/mp3",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mp3_extension() {
        let file = SelectedFile::new("voice.mp3", "", 1024);
        assert!(validate_selection(&file).is_ok());
    }

    #[test]
    fn test_accepts_mp3_mime_without_extension() {
        // Firefox系は audio/mp3 を返すことがある
        let file = SelectedFile::new("recording", "audio/mp3", 1024);
        assert!(validate_selection(&file).is_ok());
    }

    #[test]
    fn test_rejects_non_mp3() {
        for (name, mime) in [("voice.wav", "audio/wav"), ("notes.txt", "text/plain"), ("voice.MP3.bak", "")] {
            let file = SelectedFile::new(name, mime, 1024);
            let result = validate_selection(&file);
            assert!(matches!(result, Err(Error::InvalidFileType)), "{name} should be rejected");
        }
    }

    #[test]
    fn test_audio_mpeg_without_extension_is_rejected() {
        // audio/mpeg は "mp3" を含まないため拡張子が必要
        let file = SelectedFile::new("recording", "audio/mpeg", 1024);
        assert!(matches!(validate_selection(&file), Err(Error::InvalidFileType)));
    }

    #[test]
    fn test_size_limit_boundary() {
        let at_limit = SelectedFile::new("a.mp3", "audio/mpeg", MAX_FILE_SIZE);
        assert!(validate_selection(&at_limit).is_ok());

        let over = SelectedFile::new("a.mp3", "audio/mpeg", MAX_FILE_SIZE + 1);
        assert!(matches!(
            validate_selection(&over),
            Err(Error::FileTooLarge { size, limit }) if size == MAX_FILE_SIZE + 1 && limit == MAX_FILE_SIZE
        ));
    }

    #[test]
    fn test_oversized_rejected_regardless_of_mime() {
        let file = SelectedFile::new("big", "audio/mp3", 50 * 1024 * 1024);
        assert!(matches!(validate_selection(&file), Err(Error::FileTooLarge { .. })));
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = SelectedFile::new("big.wav", "audio/wav", 50 * 1024 * 1024);
        assert!(matches!(validate_selection(&file), Err(Error::InvalidFileType)));
    }

    #[test]
    fn test_uppercase_extension_accepted_via_guessed_mime() {
        let file = SelectedFile::new("CLIP.MP3", guess_mime_type("CLIP.MP3"), 1024);
        assert!(validate_selection(&file).is_ok());
    }

    #[test]
    fn test_looks_like_mp3() {
        assert!(looks_like_mp3(b"ID3\x04\x00\x00"));
        assert!(looks_like_mp3(&[0xff, 0xfb, 0x90, 0x64]));
        assert!(looks_like_mp3(&[0xff, 0xf3, 0x00]));
        assert!(looks_like_mp3(&[0xff, 0xf2, 0x00]));
        assert!(!looks_like_mp3(b"RIFF....WAVE"));
        assert!(!looks_like_mp3(&[0xff]));
        assert!(!looks_like_mp3(&[]));
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("clip.mp3"), "audio/mp3");
        assert_eq!(guess_mime_type("CLIP.MP3"), "audio/mp3");
        assert_eq!(guess_mime_type("clip.wav"), "audio/wav");
        assert_eq!(guess_mime_type("clip"), "");
    }
}
