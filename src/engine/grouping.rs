// ==========================================
// カスタムオーダー抽出ツール - 集約・数量整合エンジン
// ==========================================
// 入力: セット商品に絞り込んだ ClassifiedRow（入力順）
// 出力: SummaryRow 一覧
// ==========================================
// 規則:
//   1) (受注コード, 商品コード) ごとにグループ化
//   2) 製作内容は空でないものを出現順に重複排除して改行で連結
//   3) ブロック分割の結果で出力行数・数量を決める
//      - 0 ブロック: 1 行、数量=合計、製作内容="", 不備あり
//      - 1 ブロック: 1 行、数量=合計、ブロックが空なら不備あり
//      - N ブロック: N 行、数量=1 ずつ、ブロックが空なら不備あり
//   4) 受注情報はグループ先頭行からコピー
// ==========================================

use crate::domain::order::{ClassifiedRow, OrderRow};
use crate::domain::summary::SummaryRow;
use crate::engine::block_splitter::BlockSplitter;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, warn};

// ==========================================
// OrderGroup - 同一受注・同一商品の行のまとまり
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct OrderGroup {
    pub order_id: String,
    pub product_code: String,
    members: Vec<ClassifiedRow>, // 入力順、1 件以上
}

impl OrderGroup {
    fn new(first: ClassifiedRow) -> Self {
        Self {
            order_id: first.row.order_id.clone(),
            product_code: first.row.product_code.clone(),
            members: vec![first],
        }
    }

    /// 代表行（グループ内で最初に現れた行）
    pub fn representative(&self) -> &OrderRow {
        &self.members[0].row
    }

    pub fn members(&self) -> &[ClassifiedRow] {
        &self.members
    }

    /// 数量合計（i64::MAX で頭打ち）
    pub fn total_quantity(&self) -> i64 {
        self.members
            .iter()
            .fold(0i64, |acc, m| acc.saturating_add(m.row.quantity))
    }

    /// 空でない製作内容を出現順に重複排除し、改行で連結する
    pub fn merged_text(&self) -> String {
        let mut seen = HashSet::new();
        self.members
            .iter()
            .map(|m| m.customization_text.as_str())
            .filter(|text| !text.is_empty() && seen.insert(*text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ==========================================
// ReconciliationEngine
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationEngine {
    splitter: BlockSplitter,
}

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self {
            splitter: BlockSplitter::new(),
        }
    }

    /// グループ化から出力行の生成までを一括で行う
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn group_and_reconcile(&self, rows: Vec<ClassifiedRow>) -> Vec<SummaryRow> {
        let groups = self.group(rows);
        debug!(groups = groups.len(), "グループ化完了");

        groups
            .iter()
            .flat_map(|group| self.reconcile(group))
            .collect()
    }

    /// (受注コード, 商品コード) でグループ化する
    ///
    /// 受注コード・商品コードが空の行はどのグループにも属さない。
    /// グループはキーの昇順に並ぶ。列内の全キーが整数なら数値順、
    /// 1 つでも整数でないキーがあればその列は文字列順で比較する。
    pub fn group(&self, rows: Vec<ClassifiedRow>) -> Vec<OrderGroup> {
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut groups: Vec<OrderGroup> = Vec::new();

        for row in rows {
            if row.row.order_id.is_empty() || row.row.product_code.is_empty() {
                warn!(
                    row_number = row.row.row_number,
                    "受注コードまたは商品コードが空のため除外します"
                );
                continue;
            }

            let key = (row.row.order_id.clone(), row.row.product_code.clone());
            match index.get(&key) {
                Some(&pos) => groups[pos].members.push(row),
                None => {
                    index.insert(key, groups.len());
                    groups.push(OrderGroup::new(row));
                }
            }
        }

        let numeric_order_ids = groups.iter().all(|g| is_integer_key(&g.order_id));
        let numeric_product_codes = groups.iter().all(|g| is_integer_key(&g.product_code));
        groups.sort_by(|a, b| {
            compare_keys(&a.order_id, &b.order_id, numeric_order_ids).then_with(|| {
                compare_keys(&a.product_code, &b.product_code, numeric_product_codes)
            })
        });
        groups
    }

    /// 1 グループ分の出力行を生成する
    pub fn reconcile(&self, group: &OrderGroup) -> Vec<SummaryRow> {
        let merged = group.merged_text();
        let blocks = self.splitter.split(&merged);
        let total_quantity = group.total_quantity();
        let rep = group.representative();

        debug!(
            order_id = %group.order_id,
            product_code = %group.product_code,
            members = group.members.len(),
            blocks = blocks.len(),
            total_quantity,
            "グループ整合"
        );

        match blocks.len() {
            0 => vec![summary_row(rep, total_quantity, String::new(), true)],
            1 => {
                let block = blocks.into_iter().next().unwrap_or_default();
                let incomplete = block.trim().is_empty();
                vec![summary_row(rep, total_quantity, block, incomplete)]
            }
            _ => blocks
                .into_iter()
                .map(|block| {
                    let incomplete = block.trim().is_empty();
                    summary_row(rep, 1, block, incomplete)
                })
                .collect(),
        }
    }
}

fn summary_row(rep: &OrderRow, quantity: i64, text: String, incomplete: bool) -> SummaryRow {
    SummaryRow {
        order_id: rep.order_id.clone(),
        order_datetime: rep.order_datetime.clone(),
        buyer_name: rep.buyer_name.clone(),
        shop_name: rep.shop_name.clone(),
        product_name: rep.product_name.clone(),
        quantity,
        customization_text: text,
        incomplete,
    }
}

fn is_integer_key(key: &str) -> bool {
    key.parse::<u64>().is_ok()
}

/// キーの比較（`numeric` は列内の全キーが整数のときのみ true）
///
/// 数値が等しいキー（"001" と "1"）は文字列順で並べる。
fn compare_keys(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        if let (Ok(x), Ok(y)) = (a.parse::<u64>(), b.parse::<u64>()) {
            return x.cmp(&y).then_with(|| a.cmp(b));
        }
    }
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(order_id: &str, code: &str, quantity: i64, text: &str) -> ClassifiedRow {
        ClassifiedRow {
            row: OrderRow {
                order_id: order_id.to_string(),
                order_datetime: format!("2024/05/01 {}", order_id),
                buyer_name: format!("購入者{}", order_id),
                shop_name: "楽天市場店".to_string(),
                product_code: code.to_string(),
                product_name: format!("商品{}", code),
                quantity,
                fields: HashMap::new(),
                row_number: 1,
            },
            customization_text: text.to_string(),
        }
    }

    #[test]
    fn test_zero_blocks_single_incomplete_row() {
        let engine = ReconciliationEngine::new();
        let rows = engine.group_and_reconcile(vec![
            classified("1001", "SET-001", 2, ""),
            classified("1001", "SET-001", 1, ""),
        ]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 3);
        assert_eq!(rows[0].customization_text, "");
        assert!(rows[0].incomplete);
    }

    #[test]
    fn test_one_block_keeps_total_quantity() {
        let engine = ReconciliationEngine::new();
        let rows = engine.group_and_reconcile(vec![
            classified("1001", "SET-001", 2, "名入れ: 山田"),
            classified("1001", "SET-001", 3, "名入れ: 山田"),
        ]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 5);
        assert_eq!(rows[0].customization_text, "名入れ: 山田");
        assert!(!rows[0].incomplete);
    }

    #[test]
    fn test_many_blocks_quantity_one_each() {
        let engine = ReconciliationEngine::new();
        let text = "〇1111111111 赤\n〇2222222222 青\n〇3333333333 緑";
        let rows = engine.group_and_reconcile(vec![classified("1001", "SET-001", 5, text)]);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.quantity == 1));
        assert!(rows.iter().all(|r| !r.incomplete));
        assert_eq!(rows.iter().map(|r| r.quantity).sum::<i64>(), 3);
        assert_eq!(rows[2].customization_text, "〇3333333333 緑");
    }

    #[test]
    fn test_total_quantity_saturates_instead_of_overflowing() {
        let engine = ReconciliationEngine::new();
        let rows = engine.group_and_reconcile(vec![
            classified("1001", "SET-001", i64::MAX, "A"),
            classified("1001", "SET-001", 1, "A"),
        ]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, i64::MAX);
    }

    #[test]
    fn test_merged_text_dedupes_in_first_occurrence_order() {
        let engine = ReconciliationEngine::new();
        let groups = engine.group(vec![
            classified("1001", "SET-001", 1, "〇2222222222 青"),
            classified("1001", "SET-001", 1, ""),
            classified("1001", "SET-001", 1, "〇1111111111 赤"),
            classified("1001", "SET-001", 1, "〇2222222222 青"),
        ]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].merged_text(), "〇2222222222 青\n〇1111111111 赤");

        let rows = engine.reconcile(&groups[0]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customization_text, "〇2222222222 青");
    }

    #[test]
    fn test_representative_is_first_row() {
        let engine = ReconciliationEngine::new();
        let mut second = classified("1001", "SET-001", 1, "");
        second.row.buyer_name = "別の購入者".to_string();

        let rows = engine.group_and_reconcile(vec![classified("1001", "SET-001", 1, ""), second]);

        assert_eq!(rows[0].buyer_name, "購入者1001");
    }

    #[test]
    fn test_groups_split_by_product_code() {
        let engine = ReconciliationEngine::new();
        let groups = engine.group(vec![
            classified("1001", "SET-002", 1, "B"),
            classified("1001", "SET-001", 1, "A"),
            classified("1001", "SET-002", 1, "B2"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].product_code, "SET-001");
        assert_eq!(groups[1].members().len(), 2);
        assert_eq!(groups[1].merged_text(), "B\nB2");
    }

    #[test]
    fn test_groups_sorted_numerically() {
        let engine = ReconciliationEngine::new();
        let groups = engine.group(vec![
            classified("1000", "SET-001", 1, ""),
            classified("10", "SET-001", 1, ""),
            classified("999", "SET-001", 1, ""),
        ]);

        let ids: Vec<&str> = groups.iter().map(|g| g.order_id.as_str()).collect();
        assert_eq!(ids, vec!["10", "999", "1000"]);
    }

    #[test]
    fn test_mixed_key_column_sorts_as_text() {
        let engine = ReconciliationEngine::new();
        let groups = engine.group(vec![
            classified("1000", "SET-001", 1, ""),
            classified("A-1", "SET-001", 1, ""),
            classified("999", "SET-001", 1, ""),
        ]);

        let ids: Vec<&str> = groups.iter().map(|g| g.order_id.as_str()).collect();
        assert_eq!(ids, vec!["1000", "999", "A-1"]);
    }

    #[test]
    fn test_key_columns_are_ordered_independently() {
        let engine = ReconciliationEngine::new();
        let groups = engine.group(vec![
            classified("20", "SET-B", 1, ""),
            classified("3", "SET-A", 1, ""),
            classified("3", "100", 1, ""),
        ]);

        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.order_id.as_str(), g.product_code.as_str()))
            .collect();
        assert_eq!(keys, vec![("3", "100"), ("3", "SET-A"), ("20", "SET-B")]);
    }

    #[test]
    fn test_rows_without_key_are_dropped() {
        let engine = ReconciliationEngine::new();
        let rows = engine.group_and_reconcile(vec![
            classified("", "SET-001", 1, "A"),
            classified("1001", "", 1, "B"),
        ]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_compare_keys_breaks_numeric_ties_by_text() {
        let mut keys = vec!["10", "9", "001", "1"];
        keys.sort_by(|a, b| compare_keys(a, b, true));
        assert_eq!(keys, vec!["001", "1", "9", "10"]);
    }
}
