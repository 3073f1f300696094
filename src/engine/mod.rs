// ==========================================
// カスタムオーダー抽出ツール - エンジン層
// ==========================================
// 職責: 製作内容の抽出・分割・集約・数量整合
// 原則: 行レベルの不備はエラーにせず不備フラグで表す
// ==========================================

pub mod block_splitter;
pub mod classifier;
pub mod grouping;
pub mod pipeline;
pub mod set_item_filter;

// 主要型の再エクスポート
pub use block_splitter::BlockSplitter;
pub use classifier::RowClassifier;
pub use grouping::{OrderGroup, ReconciliationEngine};
pub use pipeline::{ExtractionPipeline, ExtractionReport, ExtractionStats};
pub use set_item_filter::SetItemFilter;
