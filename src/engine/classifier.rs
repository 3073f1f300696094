// ==========================================
// カスタムオーダー抽出ツール - 行分類（製作内容抽出）
// ==========================================
// 入力: OrderRow + 店舗ルール登録簿
// 出力: 製作内容テキスト（トリム済み、該当なしは空文字列）
// 原則: 副作用なし、エラーを返さない
// ==========================================

use crate::config::ShopRuleRegistry;
use crate::domain::order::{ClassifiedRow, OrderRow};
use crate::importer::data_cleaner::DataCleaner;
use tracing::debug;

pub struct RowClassifier<'a> {
    shop_rules: &'a ShopRuleRegistry,
    cleaner: DataCleaner,
}

impl<'a> RowClassifier<'a> {
    pub fn new(shop_rules: &'a ShopRuleRegistry) -> Self {
        Self {
            shop_rules,
            cleaner: DataCleaner,
        }
    }

    /// 行から製作内容テキストを取り出す
    ///
    /// # 規則
    /// - 店舗名に一致するルールなし → ""
    /// - 該当列なし・欠損表記 → ""
    /// - それ以外 → 列の値をトリムしたもの
    pub fn classify(&self, row: &OrderRow) -> String {
        match self.shop_rules.lookup(&row.shop_name) {
            Some(field_name) => self.cleaner.normalize_null(row.field(field_name)),
            None => {
                debug!(
                    row_number = row.row_number,
                    shop_name = %row.shop_name,
                    "店舗ルールに一致しません"
                );
                String::new()
            }
        }
    }

    /// 行を分類済みの行に変換する
    pub fn classify_row(&self, row: OrderRow) -> ClassifiedRow {
        let customization_text = self.classify(&row);
        ClassifiedRow {
            row,
            customization_text,
        }
    }
}
