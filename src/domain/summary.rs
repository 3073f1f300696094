// ==========================================
// カスタムオーダー抽出ツール - サマリー行モデル
// ==========================================
// 用途: 集約エンジンが生成、出力層が表示・CSV 化
// ==========================================

/// 不備ありを示す文字列（CSV 出力用）
pub const INCOMPLETE_MARKER: &str = "不備あり";

/// 画面表示用に不備マーカーの前へ付ける警告記号
pub const WARNING_GLYPH: &str = "⚠️";

// ==========================================
// SummaryRow - 出力 1 行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub order_id: String,
    pub order_datetime: String,
    pub buyer_name: String,
    pub shop_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub customization_text: String,
    pub incomplete: bool, // 不備フラグ（要目視確認）
}

impl SummaryRow {
    /// 画面表示用の不備フラグ（"⚠️不備あり" または ""）
    pub fn display_flag(&self) -> String {
        if self.incomplete {
            format!("{}{}", WARNING_GLYPH, INCOMPLETE_MARKER)
        } else {
            String::new()
        }
    }

    /// CSV 出力用の不備フラグ（警告記号を除いた "不備あり" または ""）
    pub fn export_flag(&self) -> &'static str {
        if self.incomplete {
            INCOMPLETE_MARKER
        } else {
            ""
        }
    }
}
