// ==========================================
// カスタムオーダー抽出ツール - ドメインモデル層
// ==========================================
// 職責: 受注行・サマリー行・列名の定義
// 原則: データアクセス・抽出ロジックを含まない
// ==========================================

pub mod columns;
pub mod order;
pub mod summary;

// 主要型の再エクスポート
pub use order::{ClassifiedRow, OrderRow};
pub use summary::{SummaryRow, INCOMPLETE_MARKER, WARNING_GLYPH};
