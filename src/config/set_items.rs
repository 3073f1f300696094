// ==========================================
// カスタムオーダー抽出ツール - セット商品登録簿
// ==========================================
// 職責: 抽出対象となる商品コードの完全一致判定
// ==========================================

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetItemRegistry {
    codes: HashSet<String>,
}

impl SetItemRegistry {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// セット商品かどうか（完全一致）
    pub fn is_set_item(&self, product_code: &str) -> bool {
        self.codes.contains(product_code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
