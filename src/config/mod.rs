// ==========================================
// カスタムオーダー抽出ツール - 設定層
// ==========================================
// 職責: 店舗定義・セット商品コードの読み込みと保持
// 原則: 起動時に 1 度だけ構築し、処理中は変更しない
// ==========================================

pub mod loader;
pub mod set_items;
pub mod shop_rules;

// 主要型の再エクスポート
pub use loader::{
    load_set_items, load_shop_rules, parse_set_items, parse_shop_rules, resolve_config_path,
    ExtractionConfig, DEFAULT_SET_ITEMS_FILE, DEFAULT_SHOP_RULES_FILE,
};
pub use set_items::SetItemRegistry;
pub use shop_rules::{ShopRule, ShopRuleRegistry};
