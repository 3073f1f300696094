// ==========================================
// テストデータビルダー
// ==========================================

#![allow(dead_code)]

use custom_order_extractor::domain::{ClassifiedRow, OrderRow};
use std::collections::HashMap;

// ==========================================
// OrderRow ビルダー
// ==========================================

pub struct OrderRowBuilder {
    order_id: String,
    order_datetime: String,
    buyer_name: String,
    shop_name: String,
    product_code: String,
    product_name: String,
    quantity: i64,
    fields: HashMap<String, String>,
    row_number: usize,
}

impl OrderRowBuilder {
    pub fn new(order_id: &str, product_code: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            order_datetime: "2024/05/01 10:00:00".to_string(),
            buyer_name: "山田太郎".to_string(),
            shop_name: "楽天市場店".to_string(),
            product_code: product_code.to_string(),
            product_name: "名入れセット".to_string(),
            quantity: 1,
            fields: HashMap::new(),
            row_number: 1,
        }
    }

    pub fn buyer(mut self, name: &str) -> Self {
        self.buyer_name = name.to_string();
        self
    }

    pub fn shop(mut self, name: &str) -> Self {
        self.shop_name = name.to_string();
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn field(mut self, column: &str, value: &str) -> Self {
        self.fields.insert(column.to_string(), value.to_string());
        self
    }

    pub fn row_number(mut self, row_number: usize) -> Self {
        self.row_number = row_number;
        self
    }

    pub fn build(self) -> OrderRow {
        OrderRow {
            order_id: self.order_id,
            order_datetime: self.order_datetime,
            buyer_name: self.buyer_name,
            shop_name: self.shop_name,
            product_code: self.product_code,
            product_name: self.product_name,
            quantity: self.quantity,
            fields: self.fields,
            row_number: self.row_number,
        }
    }

    /// 製作内容を直接指定して分類済みの行を作る
    pub fn classified(self, customization_text: &str) -> ClassifiedRow {
        ClassifiedRow {
            row: self.build(),
            customization_text: customization_text.to_string(),
        }
    }
}
