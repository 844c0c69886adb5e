// ============================================================================
// LocSync - CLI Sync 流程
// ============================================================================
//
// 文件: src/cli/sync.rs
// 职责: 同步流程的 CLI 接口层
// 边界:
//   - ✅ 同步全流程编排（备份、计划、翻译、写入、汇总）
//   - ✅ 备份策略判断和用户确认
//   - ❌ 不应包含缺失键计算逻辑
//   - ❌ 不应包含翻译执行细节
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{
    backup, store, AsyncTaskScheduler, GoogleProvider, SchedulerConfig, SyncPlanner,
    TranslateProvider, TranslationOrchestrator,
};
use crate::models::config::Settings;
use crate::ui::summary::render_sync_summary;
use crate::utils::interact;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 备份阶段
enum BackupPhase {
    /// 翻译开始前
    PreRun,
    /// 翻译成功结束后
    PostRun,
}

/// 执行同步流程
pub async fn handle_sync() -> Result<()> {
    let start_time = Instant::now();

    let base_path = Settings::get_base_path()?;
    let source_lang = Settings::get_source_lang()?;
    let target_langs = Settings::get_target_langs()?;

    if !manage_backup(BackupPhase::PreRun, &base_path)? {
        // 用户拒绝在无备份目录的情况下继续
        return Ok(());
    }

    Logger::info(tf!("sync.base_path", base_path.display()));
    Logger::info(tf!("sync.source_language", &source_lang));
    Logger::info(tf!("sync.target_languages", target_langs.join(", ")));

    // 源文件每次运行只加载一次
    let source_folder = Settings::get_language_folder(&source_lang)?;
    let source_files = store::list_json_objects(&base_path.join(&source_folder))?;

    let mut targets = Vec::new();
    let mut folders = HashMap::new();
    for lang in &target_langs {
        let folder = Settings::get_language_folder(lang)?;
        folders.insert(lang.clone(), folder.clone());
        targets.push((lang.clone(), folder));
    }

    // 计划必须先于一切翻译完成（它还负责创建缺失的目标文件）
    let planner = SyncPlanner::new(&base_path, &source_files);
    let plan = planner.build_plan(&targets)?;

    if !plan.has_work() {
        Logger::success(t!("sync.all_in_sync"));
        manage_backup(BackupPhase::PostRun, &base_path)?;
        return Ok(());
    }
    Logger::info(t!("sync.out_of_sync"));

    let provider: Arc<dyn TranslateProvider> = Arc::new(GoogleProvider::new()?);
    let scheduler = AsyncTaskScheduler::new(SchedulerConfig {
        max_concurrency: Settings::get_max_concurrency(),
        verbose: Settings::get_verbose(),
    });
    let orchestrator =
        TranslationOrchestrator::new(provider, base_path.clone(), source_lang, folders);

    let report = orchestrator.run(&source_files, &plan, &scheduler).await?;

    Logger::success(t!("sync.completed"));
    render_sync_summary(&report, Some(start_time.elapsed().as_millis() as u64));

    manage_backup(BackupPhase::PostRun, &base_path)?;

    Ok(())
}

/// 按阶段处理临时备份
///
/// 返回 false 表示用户选择不继续执行。
fn manage_backup(phase: BackupPhase, source_dir: &Path) -> Result<bool> {
    let backup_settings = Settings::get_backup_config()?;

    match phase {
        BackupPhase::PreRun => {
            if !backup_settings.enable_temp_backup {
                return Ok(true);
            }

            if backup_settings.temp_backup_dest.is_empty() {
                let continue_program = interact::get_user_response(&t!("backup.no_dest_prompt"))?;
                if !continue_program {
                    Logger::info(t!("backup.aborted"));
                    return Ok(false);
                }
                Logger::info(t!("backup.continue_without"));
            } else {
                Logger::info(t!("backup.creating"));
                backup::create_backup(source_dir, Path::new(&backup_settings.temp_backup_dest))?;
                Logger::info(t!("backup.created"));
            }
        }
        BackupPhase::PostRun => {
            if backup_settings.enable_temp_backup
                && backup_settings.delete_backup_after_successful_completion
                && !backup_settings.temp_backup_dest.is_empty()
            {
                Logger::info(t!("backup.deleting"));
                backup::delete_backup(Path::new(&backup_settings.temp_backup_dest))?;
                Logger::info(t!("backup.deleted"));
            }
        }
    }

    Ok(true)
}
