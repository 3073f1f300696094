// ==========================================
// ログ初期化
// ==========================================
// tracing + tracing-subscriber を使用
// 環境変数 RUST_LOG でログレベルを指定
// 出力先は標準エラー（標準出力はプレビュー表示に使う）
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// ログを初期化する
///
/// # 環境変数
/// - RUST_LOG: ログレベル（既定: info）
///   例: RUST_LOG=debug または RUST_LOG=custom_order_extractor=trace
///
/// # 例
/// ```no_run
/// use custom_order_extractor::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// テスト用のログ初期化（詳細レベル、二重初期化は無視）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
