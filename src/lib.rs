// ==========================================
// カスタムオーダー抽出ツール - コアライブラリ
// ==========================================
// 入力: ロジレス受注 CSV（CP932）
// 出力: カスタムオーダー製作内容サマリー CSV（CP932）
// ==========================================

// ==========================================
// モジュール宣言
// ==========================================

// ドメイン層 - 受注行・サマリー行
pub mod domain;

// 設定層 - 店舗定義・セット商品
pub mod config;

// 取込層 - 文字コード変換・CSV 解析・項目マッピング
pub mod importer;

// エンジン層 - 抽出・分割・集約
pub mod engine;

// 出力層 - 表示・CSV 出力
pub mod export;

// CLI
pub mod cli;

// ログ
pub mod logging;

// ==========================================
// 主要型の再エクスポート
// ==========================================

pub use config::{ExtractionConfig, SetItemRegistry, ShopRule, ShopRuleRegistry};
pub use domain::{ClassifiedRow, OrderRow, SummaryRow};
pub use engine::{
    BlockSplitter, ExtractionPipeline, ExtractionReport, ExtractionStats, ReconciliationEngine,
    RowClassifier, SetItemFilter,
};
pub use export::{ExportArtifact, SummaryTable};
pub use importer::{ExtractError, ExtractResult, TextEncoding};

// ==========================================
// 定数
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "カスタムオーダー抽出ツール";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
