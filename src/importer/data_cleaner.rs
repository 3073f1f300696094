// ==========================================
// カスタムオーダー抽出ツール - データクレンジング
// ==========================================
// 職責: NULL 表記の正規化・数量の数値化
// 原則: ここでの処理は決してエラーを返さない
// ==========================================

use tracing::warn;

/// 空値として扱う表記（表計算ソフト・データフレーム由来の欠損表記）
const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub struct DataCleaner;

impl DataCleaner {
    /// 欠損表記なら true
    pub fn is_null_token(&self, value: &str) -> bool {
        NULL_TOKENS.contains(&value.trim())
    }

    /// TRIM した上で、欠損表記を空文字列に置き換える
    pub fn normalize_null(&self, value: &str) -> String {
        let trimmed = value.trim();
        if self.is_null_token(trimmed) {
            String::new()
        } else {
            trimmed.to_string()
        }
    }

    /// 数量を整数化する
    ///
    /// # 規則
    /// - 整数 → そのまま
    /// - 小数 → 0 方向へ切り捨て（"2.0" → 2, "3.7" → 3）
    /// - 空・数値以外・負数 → 0
    pub fn coerce_quantity(&self, value: &str, row_number: usize) -> i64 {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return 0;
        }

        let parsed = trimmed.parse::<i64>().ok().or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        });

        match parsed {
            Some(q) if q >= 0 => q,
            Some(q) => {
                warn!(row_number, quantity = q, "数量が負数のため 0 とします");
                0
            }
            None => {
                warn!(row_number, value = %trimmed, "数量が数値ではないため 0 とします");
                0
            }
        }
    }
}
