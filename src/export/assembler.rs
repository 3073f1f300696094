// ==========================================
// カスタムオーダー抽出ツール - サマリー表の組み立て
// ==========================================
// 画面表示: 不備フラグは "⚠️不備あり"
// CSV 出力: 警告記号を除いた "不備あり" または ""
// ==========================================

use crate::domain::columns::OUTPUT_COLUMNS;
use crate::domain::summary::SummaryRow;
use crate::importer::error::{ExtractError, ExtractResult};
use serde::Serialize;

// ==========================================
// SummaryTable - 出力行の集合
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

/// 画面表示用の 1 行（列名は出力 CSV と同じ）
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow<'a> {
    #[serde(rename = "受注ID")]
    pub order_id: &'a str,
    #[serde(rename = "受注日時")]
    pub order_datetime: &'a str,
    #[serde(rename = "購入者名")]
    pub buyer_name: &'a str,
    #[serde(rename = "店舗名")]
    pub shop_name: &'a str,
    #[serde(rename = "商品名")]
    pub product_name: &'a str,
    #[serde(rename = "数量")]
    pub quantity: i64,
    #[serde(rename = "製作内容")]
    pub customization_text: &'a str,
    #[serde(rename = "不備フラグ")]
    pub incomplete_flag: String,
}

/// サマリー行から表を組み立てる
pub fn assemble(rows: Vec<SummaryRow>) -> SummaryTable {
    SummaryTable { rows }
}

impl SummaryTable {
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 不備ありの行数
    pub fn incomplete_count(&self) -> usize {
        self.rows.iter().filter(|r| r.incomplete).count()
    }

    /// 画面表示用の行（不備フラグは警告記号付き）
    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        self.rows
            .iter()
            .map(|r| DisplayRow {
                order_id: &r.order_id,
                order_datetime: &r.order_datetime,
                buyer_name: &r.buyer_name,
                shop_name: &r.shop_name,
                product_name: &r.product_name,
                quantity: r.quantity,
                customization_text: &r.customization_text,
                incomplete_flag: r.display_flag(),
            })
            .collect()
    }

    /// 端末表示用のテキスト表（タブ区切り、製作内容の改行は " / " に置換）
    pub fn render_text(&self) -> String {
        let mut out = OUTPUT_COLUMNS.join("\t");
        out.push('\n');
        for row in self.display_rows() {
            let cells = [
                row.order_id.to_string(),
                row.order_datetime.to_string(),
                row.buyer_name.to_string(),
                row.shop_name.to_string(),
                row.product_name.to_string(),
                row.quantity.to_string(),
                row.customization_text.replace("\r\n", " / ").replace('\n', " / "),
                row.incomplete_flag,
            ];
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out
    }

    /// 画面表示用の JSON
    pub fn render_json(&self) -> ExtractResult<String> {
        serde_json::to_string_pretty(&self.display_rows())
            .map_err(|e| ExtractError::Other(anyhow::Error::new(e)))
    }

    /// 出力用 CSV 文字列（不備フラグは警告記号なし、改行は CRLF）
    pub fn to_csv_string(&self) -> ExtractResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(OUTPUT_COLUMNS)?;
        for row in &self.rows {
            let quantity = row.quantity.to_string();
            writer.write_record([
                row.order_id.as_str(),
                row.order_datetime.as_str(),
                row.buyer_name.as_str(),
                row.shop_name.as_str(),
                row.product_name.as_str(),
                quantity.as_str(),
                row.customization_text.as_str(),
                row.export_flag(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExtractError::CsvParseError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExtractError::Other(anyhow::Error::new(e)))
    }
}
