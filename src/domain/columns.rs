// ==========================================
// カスタムオーダー抽出ツール - 列名定義
// ==========================================
// 入力: ロジレス受注 CSV の列名
// 出力: 加工済みサマリー CSV の列名
// ==========================================

// ===== 入力列 =====
pub const INPUT_ORDER_ID: &str = "受注コード";
pub const INPUT_ORDER_DATETIME: &str = "受注日時";
pub const INPUT_BUYER_NAME: &str = "購入者名1";
pub const INPUT_SHOP_NAME: &str = "店舗名";
pub const INPUT_PRODUCT_CODE: &str = "ロジレス商品コード";
pub const INPUT_PRODUCT_NAME: &str = "商品名";
pub const INPUT_QUANTITY: &str = "数量";

/// 入力 CSV に必須の列（店舗別のカスタムオーダー列は含まない）
pub const REQUIRED_INPUT_COLUMNS: &[&str] = &[
    INPUT_ORDER_ID,
    INPUT_ORDER_DATETIME,
    INPUT_BUYER_NAME,
    INPUT_SHOP_NAME,
    INPUT_PRODUCT_CODE,
    INPUT_PRODUCT_NAME,
    INPUT_QUANTITY,
];

// ===== 出力列 =====
pub const OUTPUT_ORDER_ID: &str = "受注ID";
pub const OUTPUT_ORDER_DATETIME: &str = "受注日時";
pub const OUTPUT_BUYER_NAME: &str = "購入者名";
pub const OUTPUT_SHOP_NAME: &str = "店舗名";
pub const OUTPUT_PRODUCT_NAME: &str = "商品名";
pub const OUTPUT_QUANTITY: &str = "数量";
pub const OUTPUT_CUSTOMIZATION: &str = "製作内容";
pub const OUTPUT_INCOMPLETE_FLAG: &str = "不備フラグ";

/// 出力 CSV の列順
pub const OUTPUT_COLUMNS: [&str; 8] = [
    OUTPUT_ORDER_ID,
    OUTPUT_ORDER_DATETIME,
    OUTPUT_BUYER_NAME,
    OUTPUT_SHOP_NAME,
    OUTPUT_PRODUCT_NAME,
    OUTPUT_QUANTITY,
    OUTPUT_CUSTOMIZATION,
    OUTPUT_INCOMPLETE_FLAG,
];
