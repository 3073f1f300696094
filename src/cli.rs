// ==========================================
// カスタムオーダー抽出ツール - CLI
// ==========================================
// 職責: 引数解析、設定読み込み、抽出の実行、結果表示
// 原則: 失敗時は 1 行のエラーメッセージのみ、出力ファイルは作らない
// ==========================================

use crate::config::{
    load_set_items, load_shop_rules, resolve_config_path, ExtractionConfig,
    DEFAULT_SET_ITEMS_FILE, DEFAULT_SHOP_RULES_FILE,
};
use crate::engine::ExtractionPipeline;
use crate::export::ExportArtifact;
use crate::importer::TextEncoding;
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// ロジレス注文 CSV からカスタムオーダーの製作内容を抽出する
#[derive(Debug, Parser)]
#[command(
    name = "custom-order-extractor",
    version,
    about = "ロジレス注文データ - カスタムオーダー抽出"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 注文 CSV を 1 件処理し、加工済み CSV を出力する
    Extract {
        /// 入力 CSV（ロジレス出力）
        input: PathBuf,

        /// 店舗定義 YAML（既定: ./config.yaml）
        #[arg(long)]
        config: Option<PathBuf>,

        /// セット商品 YAML（既定: ./set_items.yaml）
        #[arg(long)]
        set_items: Option<PathBuf>,

        /// 出力ディレクトリ（ファイル名は自動）
        #[arg(long, conflicts_with = "output")]
        output_dir: Option<PathBuf>,

        /// 出力ファイルのパス
        #[arg(long)]
        output: Option<PathBuf>,

        /// 入力の文字コード（cp932 / utf8）
        #[arg(long, default_value = "cp932")]
        input_encoding: TextEncoding,

        /// 処理結果の表示形式
        #[arg(long, value_enum, default_value_t = PreviewFormat::Table)]
        preview: PreviewFormat,
    },

    /// 設定ファイルを検証して内容を表示する
    CheckConfig {
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        set_items: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    Table,
    Json,
    None,
}

/// 利用者向けのエラーメッセージ（1 行）
pub fn error_message(err: &anyhow::Error) -> String {
    format!("❌ エラーが発生しました：{:#}", err)
}

/// CLI のエントリポイント（main と結合テストから呼ぶ）
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Extract {
            input,
            config,
            set_items,
            output_dir,
            output,
            input_encoding,
            preview,
        } => {
            let config = ExtractionConfig::load(
                resolve_config_path(config, DEFAULT_SHOP_RULES_FILE),
                resolve_config_path(set_items, DEFAULT_SET_ITEMS_FILE),
            )
            .context("設定ファイルを読み込めません")?;
            info!(command = "extract", input = %input.display(), "抽出を開始します");

            let pipeline = ExtractionPipeline::new(&config, input_encoding);
            let report = pipeline
                .run_file(&input)
                .with_context(|| format!("{} を処理できません", input.display()))?;

            let artifact = ExportArtifact::from_table(&report.table, Local::now().naive_local())?;
            let written = match output {
                Some(path) => {
                    artifact.write_to_path(&path)?;
                    path
                }
                None => artifact.write_to_dir(output_dir.unwrap_or_else(|| PathBuf::from(".")))?,
            };

            // ここまで成功した場合のみ結果を表示する
            writeln!(out, "✅ 抽出が完了しました！")?;
            match preview {
                PreviewFormat::Table => write!(out, "{}", report.table.render_text())?,
                PreviewFormat::Json => writeln!(out, "{}", report.table.render_json()?)?,
                PreviewFormat::None => {}
            }
            writeln!(
                out,
                "出力行数: {} / 不備あり: {}",
                report.stats.output_rows, report.stats.incomplete_rows
            )?;
            if artifact.replaced_chars > 0 {
                writeln!(
                    out,
                    "CP932 に変換できない文字 {} 件を '?' に置換しました",
                    artifact.replaced_chars
                )?;
            }
            writeln!(out, "📥 加工済みCSV: {}", written.display())?;
            Ok(())
        }

        Commands::CheckConfig { config, set_items } => {
            let shop_rules = load_shop_rules(resolve_config_path(config, DEFAULT_SHOP_RULES_FILE))?;
            let set_items =
                load_set_items(resolve_config_path(set_items, DEFAULT_SET_ITEMS_FILE))?;

            writeln!(out, "店舗定義: {} 件（上から順に判定）", shop_rules.len())?;
            for (idx, rule) in shop_rules.rules().iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {}: キーワード「{}」→ 列「{}」",
                    idx + 1,
                    rule.shop_id,
                    rule.keyword,
                    rule.customization_field
                )?;
            }
            writeln!(out, "セット商品コード: {} 件", set_items.len())?;
            Ok(())
        }
    }
}
