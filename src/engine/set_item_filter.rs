// ==========================================
// カスタムオーダー抽出ツール - セット商品フィルタ
// ==========================================
// 原則: 登録簿にない商品コードの行は、製作内容の有無に関わらず除外
// ==========================================

use crate::config::SetItemRegistry;
use crate::domain::order::ClassifiedRow;
use tracing::debug;

pub struct SetItemFilter<'a> {
    set_items: &'a SetItemRegistry,
}

impl<'a> SetItemFilter<'a> {
    pub fn new(set_items: &'a SetItemRegistry) -> Self {
        Self { set_items }
    }

    pub fn is_set_item(&self, product_code: &str) -> bool {
        self.set_items.is_set_item(product_code)
    }

    /// セット商品の行だけを残す（入力順は保持）
    pub fn filter(&self, rows: Vec<ClassifiedRow>) -> Vec<ClassifiedRow> {
        let before = rows.len();
        let kept: Vec<ClassifiedRow> = rows
            .into_iter()
            .filter(|r| self.is_set_item(&r.row.product_code))
            .collect();
        debug!(before, after = kept.len(), "セット商品フィルタ適用");
        kept
    }
}
