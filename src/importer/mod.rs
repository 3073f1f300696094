// ==========================================
// カスタムオーダー抽出ツール - 取込層
// ==========================================
// 職責: 入力ファイル → OrderRow
// 流れ: 文字コード変換 → CSV 解析 → 必須列検証 → 項目マッピング
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod text_encoding;

// 主要型の再エクスポート
pub use data_cleaner::DataCleaner;
pub use error::{ExtractError, ExtractResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, FileParser, RawTable};
pub use text_encoding::{decode, encode_cp932_lossy, EncodedOutput, TextEncoding};
