// ==========================================
// カスタムオーダー抽出ツール - 出力層
// ==========================================
// 職責: サマリー表の組み立て、画面表示形式、CP932 CSV 出力
// ==========================================

pub mod assembler;
pub mod exporter;

pub use assembler::{assemble, DisplayRow, SummaryTable};
pub use exporter::{output_file_name, ExportArtifact, OUTPUT_FILE_PREFIX};
