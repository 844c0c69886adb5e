// ============================================================================
// LocSync - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序入口和顶层错误处理
// 边界:
//   - ✅ 运行时初始化
//   - ✅ 顶层错误输出和退出码
//   - ❌ 不应包含命令处理逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run_cli().await {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
