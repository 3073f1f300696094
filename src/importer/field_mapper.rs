// ==========================================
// カスタムオーダー抽出ツール - 項目マッピング
// ==========================================
// 職責: 生の行データ → OrderRow、必須列の検証
// ==========================================

use crate::domain::columns::{
    INPUT_BUYER_NAME, INPUT_ORDER_DATETIME, INPUT_ORDER_ID, INPUT_PRODUCT_CODE,
    INPUT_PRODUCT_NAME, INPUT_QUANTITY, INPUT_SHOP_NAME, REQUIRED_INPUT_COLUMNS,
};
use crate::domain::order::OrderRow;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ExtractError, ExtractResult};
use std::collections::HashMap;

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 必須列がすべて揃っているか検証する
    ///
    /// 欠けている列があればまとめて `MissingColumns` を返す。
    pub fn validate_headers(&self, headers: &[String]) -> ExtractResult<()> {
        let missing: Vec<String> = REQUIRED_INPUT_COLUMNS
            .iter()
            .filter(|required| !headers.iter().any(|h| h.as_str() == **required))
            .map(|s| s.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ExtractError::MissingColumns(missing))
        }
    }

    /// 生の行データを OrderRow に変換する（失敗しない）
    pub fn map_to_order_row(&self, row: HashMap<String, String>, row_number: usize) -> OrderRow {
        OrderRow {
            order_id: self.get_string(&row, INPUT_ORDER_ID),
            order_datetime: self.get_string(&row, INPUT_ORDER_DATETIME),
            buyer_name: self.get_string(&row, INPUT_BUYER_NAME),
            shop_name: self.get_string(&row, INPUT_SHOP_NAME),
            product_code: self.get_string(&row, INPUT_PRODUCT_CODE),
            product_name: self.get_string(&row, INPUT_PRODUCT_NAME),
            quantity: self
                .cleaner
                .coerce_quantity(row.get(INPUT_QUANTITY).map(String::as_str).unwrap_or(""), row_number),
            fields: row,
            row_number,
        }
    }

    /// 文字列項目の取得（列なし・欠損表記は空文字列）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key)
            .map(|v| self.cleaner.normalize_null(v))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_headers_ok() {
        let mapper = FieldMapper::new();
        let mut all = headers(REQUIRED_INPUT_COLUMNS);
        all.push("備考".to_string());
        assert!(mapper.validate_headers(&all).is_ok());
    }

    #[test]
    fn test_validate_headers_reports_all_missing() {
        let mapper = FieldMapper::new();
        let result = mapper.validate_headers(&headers(&["受注コード", "受注日時", "購入者名1", "商品名"]));

        match result {
            Err(ExtractError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["店舗名", "ロジレス商品コード", "数量"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_map_to_order_row_basic() {
        let row = HashMap::from([
            ("受注コード".to_string(), "1001".to_string()),
            ("受注日時".to_string(), "2024/05/01 10:00:00".to_string()),
            ("購入者名1".to_string(), "山田太郎".to_string()),
            ("店舗名".to_string(), "楽天市場店".to_string()),
            ("ロジレス商品コード".to_string(), "SET-001".to_string()),
            ("商品名".to_string(), "名入れセット".to_string()),
            ("数量".to_string(), "2".to_string()),
            ("備考".to_string(), "〇1234567890 A".to_string()),
        ]);

        let order = FieldMapper::new().map_to_order_row(row, 3);

        assert_eq!(order.order_id, "1001");
        assert_eq!(order.shop_name, "楽天市場店");
        assert_eq!(order.product_code, "SET-001");
        assert_eq!(order.quantity, 2);
        assert_eq!(order.field("備考"), "〇1234567890 A");
        assert_eq!(order.row_number, 3);
    }

    #[test]
    fn test_map_to_order_row_degrades_missing_values() {
        let row = HashMap::from([
            ("受注コード".to_string(), "1001".to_string()),
            ("数量".to_string(), "abc".to_string()),
            ("購入者名1".to_string(), "nan".to_string()),
        ]);

        let order = FieldMapper::new().map_to_order_row(row, 1);

        assert_eq!(order.quantity, 0);
        assert_eq!(order.buyer_name, "");
        assert_eq!(order.product_name, "");
    }
}
