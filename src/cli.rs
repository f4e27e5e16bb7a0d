use bharatvox_common::Language;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bharatvox")]
#[command(about = "AI-generated voice detection client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// MP3ファイルを判定
    Analyze {
        /// MP3ファイルのパス（最大10MB）
        #[arg(required = true)]
        file: PathBuf,

        /// 言語 (Tamil/English/Hindi/Malayalam/Telugu)。省略時は設定値か対話選択
        #[arg(short, long)]
        language: Option<Language>,

        /// APIキー（x-api-keyヘッダーで送信）
        #[arg(long)]
        api_key: Option<String>,

        /// APIベースURL
        #[arg(long)]
        base_url: Option<String>,

        /// 判定結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// APIの疎通確認
    Health {
        /// APIベースURL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// 設定を表示
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "bharatvox", "analyze", "voice.mp3", "-l", "tamil", "--api-key", "k", "--json",
        ]);
        match cli.command {
            Commands::Analyze { file, language, api_key, json, base_url } => {
                assert_eq!(file, PathBuf::from("voice.mp3"));
                assert_eq!(language, Some(Language::Tamil));
                assert_eq!(api_key.as_deref(), Some("k"));
                assert!(json);
                assert!(base_url.is_none());
            }
            _ => panic!("analyze expected"),
        }
    }

    #[test]
    fn test_parse_unknown_language_fails() {
        let result = Cli::try_parse_from(["bharatvox", "analyze", "voice.mp3", "-l", "klingon"]);
        assert!(result.is_err());
    }
}
