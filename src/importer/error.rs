// ==========================================
// カスタムオーダー抽出ツール - エラー型
// ==========================================
// 工具: thiserror 派生マクロ
// 方針: 行レベルの不備はエラーにしない（不備フラグで表現）
// ==========================================

use thiserror::Error;

/// 抽出処理のエラー型
///
/// いずれも 1 回の実行全体を中断する致命的エラー。
/// 店舗未一致・数量不正・製作内容欠落などの行レベルの不備はここに含まれない。
#[derive(Error, Debug)]
pub enum ExtractError {
    // ===== 設定関連 =====
    #[error("設定ファイルが見つかりません: {0}")]
    ConfigNotFound(String),

    #[error("設定ファイルの解析に失敗しました ({path}): {message}")]
    ConfigParseError { path: String, message: String },

    #[error("設定値の形式が不正です (key: {key}): {message}")]
    ConfigValueError { key: String, message: String },

    // ===== 入力ファイル関連 =====
    #[error("ファイルが存在しません: {0}")]
    FileNotFound(String),

    #[error("ファイルの読み込みに失敗しました: {0}")]
    FileReadError(String),

    #[error("文字コード {encoding} として読み込めません: {message}")]
    DecodeError { encoding: String, message: String },

    #[error("CSV の解析に失敗しました: {0}")]
    CsvParseError(String),

    #[error("必須列がありません: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ===== 出力関連 =====
    #[error("出力ファイルの書き込みに失敗しました ({path}): {message}")]
    OutputWriteError { path: String, message: String },

    // ===== 汎用 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::CsvParseError(err.to_string())
    }
}

/// Result 型エイリアス
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_every_column() {
        let err = ExtractError::MissingColumns(vec!["店舗名".to_string(), "数量".to_string()]);
        assert_eq!(err.to_string(), "必須列がありません: 店舗名, 数量");
    }

    #[test]
    fn test_io_error_maps_to_file_read_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::FileReadError(_)));
    }
}
