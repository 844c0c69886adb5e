// ============================================================================
// LocSync - 执行结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 同步结果汇总显示
// 边界:
//   - ✅ 执行结果汇总显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含任务执行逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::io::{self, Write};

use crate::core::SyncReport;
use crate::models::UnitOutcome;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::utils::styles::TextStyles;
use crate::{t, tf};

/// 渲染同步汇总
pub fn render_sync_summary(report: &SyncReport, duration_ms: Option<u64>) {
    // 构建汇总内容
    let mut summary_lines = vec![
        "".to_string(),
        TextStyles::bold(&t!("summary.title")),
        "═══════════════════════════════════════".to_string(),
        format!(
            "{} {}",
            icons::FILE,
            tf!("summary.total_units", report.outcomes.len())
        ),
        format!(
            "{} {}",
            icons::SUCCESS,
            tf!("summary.translated_units", report.translated_count())
        ),
        format!(
            "{} {}",
            icons::SKIP,
            tf!("summary.rate_limited_units", report.rate_limited_count())
        ),
        format!(
            "{} {}",
            icons::ERROR,
            tf!("summary.failed_units", report.failed_count())
        ),
    ];

    // 如果有执行时长信息，添加到汇总中
    if let Some(duration) = duration_ms {
        summary_lines.push(format!(
            "{} {}",
            icons::TIME,
            tf!("summary.duration", format!("{:.2}", duration as f64 / 1000.0))
        ));
    }

    // 输出汇总内容
    for line in summary_lines {
        Logger::info(line);
    }

    // 非成功单元逐条列出
    for entry in &report.outcomes {
        match &entry.outcome {
            UnitOutcome::Translated { .. } => {}
            UnitOutcome::RateLimited => {
                Logger::warn(tf!(
                    "summary.unit_rate_limited",
                    &entry.unit.file_name,
                    &entry.unit.lang
                ));
            }
            UnitOutcome::Failed(reason) => {
                Logger::error(tf!(
                    "summary.unit_failed",
                    &entry.unit.file_name,
                    &entry.unit.lang,
                    reason
                ));
            }
        }
    }

    let _ = io::stdout().flush();
}
