// ==========================================
// カスタムオーダー抽出ツール - 設定ファイル読み込み
// ==========================================
// 入力: 店舗定義 YAML / セット商品 YAML
// 出力: ShopRuleRegistry / SetItemRegistry（以降読み取り専用）
// 原則: 設定の不備は行処理の前に致命的エラーとする
// ==========================================

use crate::config::set_items::SetItemRegistry;
use crate::config::shop_rules::{ShopRule, ShopRuleRegistry};
use crate::importer::error::{ExtractError, ExtractResult};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 店舗定義ファイルの既定パス
pub const DEFAULT_SHOP_RULES_FILE: &str = "config.yaml";

/// セット商品ファイルの既定パス
pub const DEFAULT_SET_ITEMS_FILE: &str = "set_items.yaml";

/// 店舗定義のトップレベルキー
pub const SHOP_RULES_KEY: &str = "店舗定義";

/// セット商品コード一覧のトップレベルキー
pub const SET_ITEMS_KEY: &str = "セット商品コード一覧";

// ==========================================
// ExtractionConfig - 1 回の実行で使う設定一式
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfig {
    pub shop_rules: ShopRuleRegistry,
    pub set_items: SetItemRegistry,
}

impl ExtractionConfig {
    pub fn new(shop_rules: ShopRuleRegistry, set_items: SetItemRegistry) -> Self {
        Self {
            shop_rules,
            set_items,
        }
    }

    /// 2 つの設定ファイルを読み込む
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        shop_rules_path: P,
        set_items_path: Q,
    ) -> ExtractResult<Self> {
        let shop_rules = load_shop_rules(shop_rules_path)?;
        let set_items = load_set_items(set_items_path)?;
        Ok(Self::new(shop_rules, set_items))
    }
}

// 店舗定義 1 件分（YAML 側の形）
#[derive(Debug, Deserialize)]
struct ShopRuleDefinition {
    #[serde(rename = "キーワード")]
    keyword: String,
    #[serde(rename = "カスタムオーダー列")]
    customization_field: String,
}

/// 店舗定義ファイルを読み込む
pub fn load_shop_rules<P: AsRef<Path>>(path: P) -> ExtractResult<ShopRuleRegistry> {
    let path = path.as_ref();
    let content = read_config_file(path)?;
    let registry = parse_shop_rules(&content, &path.display().to_string())?;
    info!(config_path = ?path, rules = registry.len(), "店舗定義を読み込みました");
    Ok(registry)
}

/// 店舗定義 YAML を解析する
///
/// マッピングの記述順がそのままルールの評価順になる。
pub fn parse_shop_rules(content: &str, origin: &str) -> ExtractResult<ShopRuleRegistry> {
    let root = parse_yaml(content, origin)?;

    let section = root
        .get(SHOP_RULES_KEY)
        .ok_or_else(|| ExtractError::ConfigValueError {
            key: SHOP_RULES_KEY.to_string(),
            message: format!("{} にキーがありません", origin),
        })?;

    let mapping = section
        .as_mapping()
        .ok_or_else(|| ExtractError::ConfigValueError {
            key: SHOP_RULES_KEY.to_string(),
            message: "店舗識別子をキーとするマッピングである必要があります".to_string(),
        })?;

    let mut rules = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let shop_id = scalar_to_string(key).ok_or_else(|| ExtractError::ConfigValueError {
            key: SHOP_RULES_KEY.to_string(),
            message: format!("店舗識別子が文字列ではありません: {:?}", key),
        })?;

        let definition: ShopRuleDefinition =
            serde_yaml::from_value(value.clone()).map_err(|e| ExtractError::ConfigValueError {
                key: format!("{}.{}", SHOP_RULES_KEY, shop_id),
                message: e.to_string(),
            })?;

        if definition.customization_field.trim().is_empty() {
            return Err(ExtractError::ConfigValueError {
                key: format!("{}.{}", SHOP_RULES_KEY, shop_id),
                message: "カスタムオーダー列が空です".to_string(),
            });
        }
        if definition.keyword.is_empty() {
            warn!(shop_id = %shop_id, "キーワードが空のため全店舗に一致します");
        }

        rules.push(ShopRule {
            shop_id,
            keyword: definition.keyword,
            customization_field: definition.customization_field,
        });
    }

    if rules.is_empty() {
        warn!(origin = %origin, "店舗定義が 0 件です（製作内容はすべて空になります）");
    }

    Ok(ShopRuleRegistry::new(rules))
}

/// セット商品ファイルを読み込む
pub fn load_set_items<P: AsRef<Path>>(path: P) -> ExtractResult<SetItemRegistry> {
    let path = path.as_ref();
    let content = read_config_file(path)?;
    let registry = parse_set_items(&content, &path.display().to_string())?;
    info!(config_path = ?path, codes = registry.len(), "セット商品コードを読み込みました");
    Ok(registry)
}

/// セット商品 YAML を解析する
///
/// 数値で書かれた商品コードも文字列として扱う（例: `100234` → "100234"）。
pub fn parse_set_items(content: &str, origin: &str) -> ExtractResult<SetItemRegistry> {
    let root = parse_yaml(content, origin)?;

    let section = root
        .get(SET_ITEMS_KEY)
        .ok_or_else(|| ExtractError::ConfigValueError {
            key: SET_ITEMS_KEY.to_string(),
            message: format!("{} にキーがありません", origin),
        })?;

    let sequence = section
        .as_sequence()
        .ok_or_else(|| ExtractError::ConfigValueError {
            key: SET_ITEMS_KEY.to_string(),
            message: "商品コードのリストである必要があります".to_string(),
        })?;

    let mut codes = Vec::with_capacity(sequence.len());
    for (idx, item) in sequence.iter().enumerate() {
        let code = scalar_to_string(item).ok_or_else(|| ExtractError::ConfigValueError {
            key: format!("{}[{}]", SET_ITEMS_KEY, idx),
            message: format!("商品コードがスカラー値ではありません: {:?}", item),
        })?;
        codes.push(code);
    }

    if codes.is_empty() {
        warn!(origin = %origin, "セット商品コードが 0 件です（出力は空になります）");
    }

    Ok(SetItemRegistry::new(codes))
}

fn read_config_file(path: &Path) -> ExtractResult<String> {
    if !path.exists() {
        error!(config_path = ?path, "設定ファイルが見つかりません");
        return Err(ExtractError::ConfigNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| {
        error!(error = ?e, config_path = ?path, "設定ファイルの読み込みに失敗しました");
        ExtractError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })
}

fn parse_yaml(content: &str, origin: &str) -> ExtractResult<Value> {
    serde_yaml::from_str(content).map_err(|e| {
        error!(error = %e, origin = %origin, "YAML の解析に失敗しました");
        ExtractError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        }
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 設定ファイルのパスを、未指定なら既定値で解決する
pub fn resolve_config_path(explicit: Option<PathBuf>, default_name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(default_name))
}
