//! ディスク上の音声ファイル読み込み

use crate::error::{BharatVoxError, Result};
use bharatvox_common::{encode_audio, guess_mime_type, Error, SelectedFile};
use std::path::Path;

/// ファイルのメタデータから選択情報を作る（中身は読まない）
pub fn describe_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(BharatVoxError::FileNotFound(path.display().to_string()));
    }

    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = guess_mime_type(&name);

    Ok(SelectedFile::new(name, mime_type, metadata.len()))
}

/// ファイル全体を読み込みBase64化
pub async fn encode_file(path: &Path) -> bharatvox_common::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::Read(e.to_string()))?;
    Ok(encode_audio(&bytes))
}
