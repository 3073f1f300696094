// ==========================================
// テスト補助関数
// ==========================================
// 職責: CP932 の入力 CSV・設定 YAML を一時ディレクトリに作成する
// ==========================================

#![allow(dead_code)]

use custom_order_extractor::importer::{decode, TextEncoding};
use encoding_rs::SHIFT_JIS;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// 入力 CSV のヘッダー（必須列 + 店舗別カスタムオーダー列）
pub const INPUT_HEADER: &str =
    "受注コード,受注日時,購入者名1,店舗名,ロジレス商品コード,商品名,数量,備考,ギフトメッセージ";

/// 店舗定義（楽天は備考、Amazon はギフトメッセージ）
pub const SHOP_RULES_YAML: &str = r#"店舗定義:
  rakuten:
    キーワード: 楽天
    カスタムオーダー列: 備考
  amazon:
    キーワード: Amazon
    カスタムオーダー列: ギフトメッセージ
"#;

/// セット商品コード
pub const SET_ITEMS_YAML: &str = r#"セット商品コード一覧:
  - SET-001
  - SET-002
"#;

/// 文字列を CP932 でファイルに書き込む
pub fn write_cp932(path: &Path, content: &str) -> Result<(), Box<dyn Error>> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(content);
    if had_errors {
        return Err("CP932 に変換できない文字が含まれています".into());
    }
    fs::write(path, &bytes)?;
    Ok(())
}

/// ヘッダーとデータ行から CP932 の入力 CSV を作成する
pub fn create_input_csv(dir: &Path, rows: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join("orders.csv");
    let mut content = String::from(INPUT_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    write_cp932(&path, &content)?;
    Ok(path)
}

/// 既定の設定ファイル 2 つを作成する
///
/// # 戻り値
/// - (店舗定義のパス, セット商品のパス)
pub fn create_config_files(dir: &Path) -> Result<(PathBuf, PathBuf), Box<dyn Error>> {
    let shop_rules = dir.join("config.yaml");
    let set_items = dir.join("set_items.yaml");
    fs::write(&shop_rules, SHOP_RULES_YAML)?;
    fs::write(&set_items, SET_ITEMS_YAML)?;
    Ok((shop_rules, set_items))
}

/// CP932 のファイルを読み込んで文字列にする
pub fn read_cp932(path: &Path) -> Result<String, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    Ok(decode(&bytes, TextEncoding::Cp932)?)
}

/// 出力 CSV をレコード単位で読む（ヘッダー除く）
pub fn read_output_records(path: &Path) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let text = read_cp932(path)?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?.iter().map(|s| s.to_string()).collect());
    }
    Ok(records)
}

/// ディレクトリ内の出力 CSV（custom_order_summary_*.csv）を列挙する
pub fn list_output_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_output = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("custom_order_summary_") && n.ends_with(".csv"))
            .unwrap_or(false);
        if is_output {
            files.push(path);
        }
    }
    Ok(files)
}
