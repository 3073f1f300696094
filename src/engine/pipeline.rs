// ==========================================
// カスタムオーダー抽出ツール - 抽出パイプライン
// ==========================================
// 流れ: 解析 → 必須列検証 → マッピング → 製作内容抽出
//       → セット商品絞り込み → 集約・整合 → 表の組み立て
// ==========================================
// 原則: 1 回の実行の中間状態はこの呼び出しの中だけで完結する
// ==========================================

use crate::config::ExtractionConfig;
use crate::domain::order::ClassifiedRow;
use crate::engine::classifier::RowClassifier;
use crate::engine::grouping::ReconciliationEngine;
use crate::engine::set_item_filter::SetItemFilter;
use crate::export::assembler::{assemble, SummaryTable};
use crate::importer::error::ExtractResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, FileParser, RawTable};
use crate::importer::text_encoding::TextEncoding;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// 実行結果の件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub input_rows: usize,
    pub set_item_rows: usize,
    pub output_rows: usize,
    pub incomplete_rows: usize,
}

/// 1 回の抽出結果
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub run_id: String,
    pub table: SummaryTable,
    pub stats: ExtractionStats,
}

// ==========================================
// ExtractionPipeline
// ==========================================
pub struct ExtractionPipeline<'a> {
    config: &'a ExtractionConfig,
    parser: CsvParser,
    mapper: FieldMapper,
    engine: ReconciliationEngine,
}

impl<'a> ExtractionPipeline<'a> {
    pub fn new(config: &'a ExtractionConfig, encoding: TextEncoding) -> Self {
        Self {
            config,
            parser: CsvParser::new(encoding),
            mapper: FieldMapper::new(),
            engine: ReconciliationEngine::new(),
        }
    }

    /// ファイルから抽出する
    #[instrument(skip(self, file_path), fields(file_path = %file_path.as_ref().display()))]
    pub fn run_file<P: AsRef<Path>>(&self, file_path: P) -> ExtractResult<ExtractionReport> {
        let table = self.parser.parse_to_raw_records(file_path.as_ref())?;
        self.run_table(table)
    }

    /// メモリ上のバイト列から抽出する
    pub fn run_bytes(&self, bytes: &[u8]) -> ExtractResult<ExtractionReport> {
        let table = self.parser.parse_bytes(bytes)?;
        self.run_table(table)
    }

    /// 解析済みの表から抽出する
    pub fn run_table(&self, raw: RawTable) -> ExtractResult<ExtractionReport> {
        let start_time = Instant::now();
        let run_id = Uuid::new_v4().to_string();
        info!(run_id = %run_id, rows = raw.records.len(), "抽出を開始します");

        // === 手順 1: 必須列の検証 ===
        self.mapper.validate_headers(&raw.headers)?;

        // === 手順 2: マッピング + 製作内容抽出 ===
        let classifier = RowClassifier::new(&self.config.shop_rules);
        let input_rows = raw.records.len();
        let classified: Vec<ClassifiedRow> = raw
            .records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| classifier.classify_row(self.mapper.map_to_order_row(record, idx + 1)))
            .collect();
        debug!(rows = classified.len(), "製作内容抽出完了");

        // === 手順 3: セット商品の絞り込み ===
        let filter = SetItemFilter::new(&self.config.set_items);
        let set_rows = filter.filter(classified);
        let set_item_rows = set_rows.len();

        // === 手順 4: 集約・数量整合 ===
        let summary_rows = self.engine.group_and_reconcile(set_rows);

        // === 手順 5: 表の組み立て ===
        let table = assemble(summary_rows);
        let stats = ExtractionStats {
            input_rows,
            set_item_rows,
            output_rows: table.len(),
            incomplete_rows: table.incomplete_count(),
        };

        info!(
            run_id = %run_id,
            input_rows = stats.input_rows,
            set_item_rows = stats.set_item_rows,
            output_rows = stats.output_rows,
            incomplete_rows = stats.incomplete_rows,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "抽出が完了しました"
        );

        Ok(ExtractionReport {
            run_id,
            table,
            stats,
        })
    }
}
