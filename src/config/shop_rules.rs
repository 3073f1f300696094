// ==========================================
// カスタムオーダー抽出ツール - 店舗ルール登録簿
// ==========================================
// 職責: 店舗名 → カスタムオーダー列名 の解決
// 原則: 登録順に走査し、最初に一致したルールを採用
// ==========================================

// ==========================================
// ShopRule - 店舗ごとの抽出ルール
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRule {
    /// 店舗識別子（設定ファイルのキー）
    pub shop_id: String,

    /// 店舗名に含まれるべきキーワード（部分一致、大文字小文字・全角半角を区別）
    pub keyword: String,

    /// 製作内容が入っている列名
    pub customization_field: String,
}

// ==========================================
// ShopRuleRegistry - 店舗ルール登録簿（読み取り専用）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopRuleRegistry {
    rules: Vec<ShopRule>,
}

impl ShopRuleRegistry {
    /// ルール一覧から登録簿を作成する（順序はそのまま保持）
    pub fn new(rules: Vec<ShopRule>) -> Self {
        Self { rules }
    }

    /// 店舗名に対応するカスタムオーダー列名を返す
    ///
    /// # 戻り値
    /// - Some(列名): キーワードが店舗名に含まれる最初のルール
    /// - None: 一致するルールなし（呼び出し側は空の製作内容として扱う）
    pub fn lookup(&self, shop_name: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| shop_name.contains(rule.keyword.as_str()))
            .map(|rule| rule.customization_field.as_str())
    }

    /// 登録順のルール一覧
    pub fn rules(&self) -> &[ShopRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
