// ==========================================
// カスタムオーダー抽出ツール - CSV 出力
// ==========================================
// 文字コード: CP932（変換不能文字は '?' に置換して続行）
// ファイル名: custom_order_summary_YYYYMMDDHHMM.csv
// 書き込み: 一時ファイル → 完了後に確定（途中失敗時は何も残さない）
// ==========================================

use crate::export::assembler::SummaryTable;
use crate::importer::error::{ExtractError, ExtractResult};
use crate::importer::text_encoding::encode_cp932_lossy;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// 出力ファイル名の接頭辞
pub const OUTPUT_FILE_PREFIX: &str = "custom_order_summary_";

/// 出力ファイルの拡張子
pub const OUTPUT_FILE_EXTENSION: &str = "csv";

/// 出力ファイル名（分単位のタイムスタンプ付き）
pub fn output_file_name(now: NaiveDateTime) -> String {
    format!(
        "{}{}.{}",
        OUTPUT_FILE_PREFIX,
        now.format("%Y%m%d%H%M"),
        OUTPUT_FILE_EXTENSION
    )
}

// ==========================================
// ExportArtifact - 出力物（ダウンロード相当）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// '?' に置換した文字数
    pub replaced_chars: usize,
}

impl ExportArtifact {
    /// 表を CP932 の CSV バイト列にする
    pub fn from_table(table: &SummaryTable, now: NaiveDateTime) -> ExtractResult<Self> {
        let csv_text = table.to_csv_string()?;
        let encoded = encode_cp932_lossy(&csv_text);

        if encoded.replaced > 0 {
            warn!(
                replaced = encoded.replaced,
                "CP932 に変換できない文字を '?' に置換しました"
            );
        }

        Ok(Self {
            file_name: output_file_name(now),
            bytes: encoded.bytes,
            replaced_chars: encoded.replaced,
        })
    }

    /// 出力先ディレクトリにファイル名どおりに書き出す
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> ExtractResult<PathBuf> {
        let target = dir.as_ref().join(&self.file_name);
        self.write_to_path(&target)?;
        Ok(target)
    }

    /// 指定パスに書き出す（同一ディレクトリの一時ファイル経由）
    pub fn write_to_path(&self, target: &Path) -> ExtractResult<()> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let write_error = |message: String| ExtractError::OutputWriteError {
            path: target.display().to_string(),
            message,
        };

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(&self.bytes)
            .and_then(|_| temp.flush())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(target)
            .map_err(|e| write_error(e.error.to_string()))?;

        info!(path = %target.display(), bytes = self.bytes.len(), "出力ファイルを書き込みました");
        Ok(())
    }
}
