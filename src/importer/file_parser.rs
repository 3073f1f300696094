// ==========================================
// カスタムオーダー抽出ツール - ファイル解析
// ==========================================
// 対応: CSV (.csv)、CP932 / UTF-8
// 出力: ヘッダー + 行ごとの HashMap<列名, 値>
// ==========================================

use crate::importer::error::{ExtractError, ExtractResult};
use crate::importer::text_encoding::{decode, TextEncoding};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 解析済みの表（列名と生の行データ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<HashMap<String, String>>,
}

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser {
    /// ファイルを解析して生の行データにする
    fn parse_to_raw_records(&self, file_path: &Path) -> ExtractResult<RawTable>;
}

// ==========================================
// CsvParser 実装
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    encoding: TextEncoding,
}

impl CsvParser {
    pub fn new(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    /// メモリ上のバイト列を解析する（アップロード済みデータ向け）
    pub fn parse_bytes(&self, bytes: &[u8]) -> ExtractResult<RawTable> {
        let text = decode(bytes, self.encoding)?;
        self.parse_text(&text)
    }

    /// 変換済みの文字列を解析する
    pub fn parse_text(&self, text: &str) -> ExtractResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 行ごとの列数の違いを許容
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::with_capacity(headers.len());

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    // 同名の列が重複する場合は先頭の列を採用
                    row_map
                        .entry(header.clone())
                        .or_insert_with(|| value.trim().to_string());
                }
            }

            // 完全に空の行は読み飛ばす
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        debug!(columns = headers.len(), rows = records.len(), "CSV 解析完了");
        Ok(RawTable { headers, records })
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ExtractResult<RawTable> {
        if !file_path.exists() {
            return Err(ExtractError::FileNotFound(file_path.display().to_string()));
        }

        match file_path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => {}
            other => warn!(extension = ?other, "拡張子が .csv ではありませんが CSV として読み込みます"),
        }

        let bytes = fs::read(file_path)?;
        self.parse_bytes(&bytes)
    }
}
