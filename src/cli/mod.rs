// ============================================================================
// LocSync - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口
// 边界:
//   - ✅ CLI 结构定义
//   - ✅ 命令行参数解析配置
//   - ✅ 运行时参数合并
//   - ❌ 不应包含具体同步实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod sync;

use anyhow::Result;
use clap::Parser;

use crate::models::config::{RuntimeArgs, Settings};
use crate::tf;
use crate::utils::constants::SETTINGS_FILE;
use crate::utils::logger::Logger;
use sync::handle_sync;

/// LocSync - Lightweight localization file sync tool
#[derive(Debug, Parser)]
#[command(name = "locsync")]
#[command(about = "Keeps target language JSON files in sync with the source language")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Base path of the project's internationalization files
    /// (overrides the one specified in settings.toml)
    #[arg(short, long)]
    pub base_path: Option<String>,

    /// Global verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Maximum concurrency
    #[arg(short = 'j', long)]
    pub max_concurrency: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // 设置文件缺失属于致命错误，在任何工作开始前退出
    Settings::initialize()?;

    // Build runtime args to override settings
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global settings
    Settings::merge_runtime_args(runtime_args)?;

    if Settings::get_verbose() {
        Logger::info(tf!("settings.loaded", SETTINGS_FILE));
    }

    handle_sync().await
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        max_concurrency: cli.max_concurrency,
        base_path: cli.base_path.clone(),
        language: cli.language.clone(),
    }
}
