// ==========================================
// カスタムオーダー抽出ツール - CLI エントリ
// ==========================================

use clap::Parser;
use custom_order_extractor::cli::{error_message, run, Cli};
use custom_order_extractor::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    tracing::info!("{} v{}", custom_order_extractor::APP_NAME, custom_order_extractor::VERSION);

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "処理に失敗しました");
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}
