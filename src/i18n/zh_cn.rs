// ============================================================================
// LocSync - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 设置相关
    ("settings.loaded", "已加载设置文件: {}"),
    (
        "error.settings_not_found",
        "未找到设置文件。请在根目录下创建 settings.toml 文件。",
    ),
    ("error.settings_parse", "设置文件解析失败: {}"),
    ("error.unknown_language", "未配置语言对应的文件夹映射: {}"),
    // 备份相关
    ("backup.creating", "正在创建临时备份..."),
    ("backup.created", "临时备份创建成功。"),
    ("backup.deleting", "正在删除临时备份..."),
    ("backup.deleted", "临时备份删除成功。"),
    (
        "backup.no_dest_prompt",
        "settings.toml 中未指定临时备份目录。是否在不备份的情况下继续? (yes/no): ",
    ),
    ("backup.continue_without", "跳过临时备份继续执行。"),
    ("backup.aborted", "退出程序。"),
    // 同步流程相关
    ("sync.base_path", "项目根路径: {}"),
    ("sync.source_language", "源语言: {}"),
    ("sync.target_languages", "目标语言: {}"),
    ("sync.all_in_sync", "所有文件均已同步，无需翻译！"),
    ("sync.out_of_sync", "存在与源文件不同步的文件，开始翻译..."),
    ("sync.completed", "翻译全部完成！"),
    // 计划相关
    ("planner.file_missing", "{} 文件在 {} 文件夹中不存在。"),
    ("planner.creating_file", "正在创建 {} 文件（{} 文件夹）..."),
    // 翻译相关
    ("translate.unit_start", "正在将 {} 个键（{}）翻译为 {}..."),
    (
        "translate.rate_limited",
        "翻译 {} 到 {} 时请求过于频繁，已跳过该文件。",
    ),
    ("translate.unit_failed", "翻译 {} 到 {} 失败: {}"),
    // 写入相关
    ("write.start", "正在将翻译写入目标文件..."),
    ("write.file_start", "正在写入 {} ({})..."),
    ("write.file_done", "已写入 {} ({})。"),
    // 调度器相关
    ("scheduler.task_start", "开始任务: {}"),
    ("scheduler.task_success", "任务 {} 完成，耗时 {}s"),
    ("scheduler.task_failed", "任务 {} 失败，耗时 {}s: {}"),
    ("scheduler.task_cancelled", "任务 {} 已取消"),
    ("scheduler.batch_start", "并发执行 {} 个任务..."),
    ("scheduler.batch_complete", "{}/{} 个任务执行成功"),
    ("scheduler.task_join_error", "任务等待失败: {}"),
    // 汇总相关
    ("summary.title", "同步汇总"),
    ("summary.total_units", "任务单元总数: {}"),
    ("summary.translated_units", "已翻译: {}"),
    ("summary.rate_limited_units", "限流跳过: {}"),
    ("summary.failed_units", "失败: {}"),
    ("summary.duration", "耗时: {}s"),
    ("summary.unit_rate_limited", "{} {} 因限流被跳过"),
    ("summary.unit_failed", "{} {} 失败: {}"),
];
