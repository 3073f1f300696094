// ==========================================
// カスタムオーダー抽出ツール - 受注行モデル
// ==========================================
// 用途: 取込層で生成、エンジン層は読み取りのみ
// ==========================================

use std::collections::HashMap;

// ==========================================
// OrderRow - 受注 CSV の 1 行
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    // ===== 受注情報 =====
    pub order_id: String,       // 受注コード
    pub order_datetime: String, // 受注日時（入力のまま）
    pub buyer_name: String,     // 購入者名1
    pub shop_name: String,      // 店舗名

    // ===== 商品情報 =====
    pub product_code: String, // ロジレス商品コード
    pub product_name: String, // 商品名
    pub quantity: i64,        // 数量（数値化済み、不正値は 0）

    // ===== 元の全列（店舗別カスタムオーダー列の参照用）=====
    pub fields: HashMap<String, String>,

    // ===== メタ情報 =====
    pub row_number: usize, // データ行番号（1 始まり、ヘッダー除く）
}

impl OrderRow {
    /// 列名で値を取得する。列が存在しなければ空文字列。
    pub fn field(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

// ==========================================
// ClassifiedRow - 製作内容抽出済みの行
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    pub row: OrderRow,
    pub customization_text: String, // トリム済み、該当なしは空文字列
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_missing_column_is_empty() {
        let row = OrderRow {
            order_id: "1001".to_string(),
            order_datetime: String::new(),
            buyer_name: String::new(),
            shop_name: String::new(),
            product_code: String::new(),
            product_name: String::new(),
            quantity: 0,
            fields: HashMap::from([("備考".to_string(), "メモ".to_string())]),
            row_number: 1,
        };

        assert_eq!(row.field("備考"), "メモ");
        assert_eq!(row.field("存在しない列"), "");
    }
}
