// ============================================================================
// LocSync - 翻译编排器
// ============================================================================
//
// 文件: src/core/orchestrator.rs
// 职责: 两阶段执行翻译任务并写回目标文件
// 边界:
//   - ✅ 按 (语言, 文件) 单元并发翻译
//   - ✅ 翻译结果隔离存放（结果表）
//   - ✅ 阶段屏障：翻译全部结束后才开始写入
//   - ✅ 单元级限流处理和结果归集
//   - ❌ 不应包含缺失键计算逻辑
//   - ❌ 不应包含 HTTP 细节
//   - ❌ 不应包含汇总展示逻辑
//
// ============================================================================

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::core::provider::{TranslateError, TranslateProvider};
use crate::core::scheduler::{AsyncTaskScheduler, TaskResult};
use crate::core::store;
use crate::models::{SourceFile, SyncUnit, TranslationPlan, UnitOutcome};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 单元执行结果
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub unit: SyncUnit,
    pub outcome: UnitOutcome,
}

/// 一次同步运行的汇总结果
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn translated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, UnitOutcome::Translated { .. }))
            .count()
    }

    pub fn rate_limited_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == UnitOutcome::RateLimited)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, UnitOutcome::Failed(_)))
            .count()
    }
}

/// 翻译编排器
///
/// 阶段一把每个 (语言, 文件) 单元的缺失键批量送译，结果存入
/// 按单元隔离的结果表；阶段二在所有翻译结束后并发写回目标文件。
/// 结果表按单元隔离，语言之间不共享可变状态。
pub struct TranslationOrchestrator {
    provider: Arc<dyn TranslateProvider>,
    base_path: PathBuf,
    source_lang: String,
    /// 语言代码到文件夹名的映射
    folders: HashMap<String, String>,
}

impl TranslationOrchestrator {
    pub fn new(
        provider: Arc<dyn TranslateProvider>,
        base_path: PathBuf,
        source_lang: String,
        folders: HashMap<String, String>,
    ) -> Self {
        Self {
            provider,
            base_path,
            source_lang,
            folders,
        }
    }

    /// 执行全部翻译单元并写回
    pub async fn run(
        &self,
        source_files: &[SourceFile],
        plan: &TranslationPlan,
        scheduler: &AsyncTaskScheduler,
    ) -> Result<SyncReport> {
        let units = plan.units();
        if units.is_empty() {
            return Ok(SyncReport::default());
        }

        // 结果表：unit id -> 该单元的 (键, 译文) 对，按单元隔离
        let results: Arc<Mutex<HashMap<String, Vec<(String, Value)>>>> =
            Arc::new(Mutex::new(HashMap::new()));

        let phase_one = self
            .run_translation_phase(source_files, &units, scheduler, &results)
            .await?;

        // 阶段屏障：execute_batch 等待全部翻译任务结束后才会返回，
        // 这里才能开始任何写入
        let mut states = phase_one;
        self.run_write_phase(&units, scheduler, &results, &mut states)
            .await?;

        let outcomes = units
            .into_iter()
            .map(|unit| {
                let outcome = states
                    .remove(&unit.id())
                    .unwrap_or_else(|| UnitOutcome::Failed("missing task result".to_string()));
                SyncOutcome { unit, outcome }
            })
            .collect();

        Ok(SyncReport { outcomes })
    }

    /// 阶段一：按单元批量翻译
    async fn run_translation_phase(
        &self,
        source_files: &[SourceFile],
        units: &[SyncUnit],
        scheduler: &AsyncTaskScheduler,
        results: &Arc<Mutex<HashMap<String, Vec<(String, Value)>>>>,
    ) -> Result<HashMap<String, UnitOutcome>> {
        let mut tasks = Vec::new();

        for unit in units {
            let source = source_files
                .iter()
                .find(|file| file.file_name == unit.file_name)
                .ok_or_else(|| {
                    anyhow::anyhow!("source file {} missing from plan", unit.file_name)
                })?;

            // 字符串值送译；其他 JSON 值无可翻译内容，原样复制
            let mut translatable_keys = Vec::new();
            let mut texts = Vec::new();
            let mut passthrough = Vec::new();
            for key in &unit.keys {
                match source.content.get(key) {
                    Some(Value::String(text)) => {
                        translatable_keys.push(key.clone());
                        texts.push(text.clone());
                    }
                    Some(other) => passthrough.push((key.clone(), other.clone())),
                    None => {}
                }
            }

            let provider = Arc::clone(&self.provider);
            let results = Arc::clone(results);
            let source_lang = self.source_lang.clone();
            let lang = unit.lang.clone();
            let file_name = unit.file_name.clone();
            let unit_id = unit.id();

            let task = async move {
                Logger::info(tf!("translate.unit_start", texts.len(), &file_name, &lang));

                match provider.translate_batch(&texts, &source_lang, &lang).await {
                    Ok(translations) => {
                        // 位置对应：译文必须与送译文本一一对应
                        if translations.len() != texts.len() {
                            anyhow::bail!(TranslateError::LengthMismatch {
                                expected: texts.len(),
                                got: translations.len(),
                            });
                        }

                        let mut pairs: Vec<(String, Value)> = translatable_keys
                            .into_iter()
                            .zip(translations.into_iter().map(Value::String))
                            .collect();
                        pairs.extend(passthrough);

                        results
                            .lock()
                            .map_err(|_| anyhow::anyhow!("results table lock poisoned"))?
                            .insert(unit_id, pairs);
                        Ok(true)
                    }
                    Err(TranslateError::RateLimited) => {
                        // 限流只放弃当前单元，其他单元继续
                        Logger::warn(tf!("translate.rate_limited", &file_name, &lang));
                        Ok(false)
                    }
                    Err(e) => {
                        Logger::error(tf!("translate.unit_failed", &file_name, &lang, &e));
                        Err(e.into())
                    }
                }
            };

            tasks.push((unit.id(), task));
        }

        let task_results = scheduler.execute_batch(tasks).await;

        let mut states = HashMap::new();
        for (unit_id, result) in task_results {
            match result {
                // 翻译完成的单元在阶段二才产生最终结果
                TaskResult::Success(true) => {}
                TaskResult::Success(false) => {
                    states.insert(unit_id, UnitOutcome::RateLimited);
                }
                TaskResult::Failed(reason) => {
                    states.insert(unit_id, UnitOutcome::Failed(reason));
                }
                TaskResult::Cancelled => {
                    states.insert(unit_id, UnitOutcome::Failed("task cancelled".to_string()));
                }
            }
        }

        Ok(states)
    }

    /// 阶段二：写回翻译结果
    async fn run_write_phase(
        &self,
        units: &[SyncUnit],
        scheduler: &AsyncTaskScheduler,
        results: &Arc<Mutex<HashMap<String, Vec<(String, Value)>>>>,
        states: &mut HashMap<String, UnitOutcome>,
    ) -> Result<()> {
        // 阶段一结束后结果表不再被并发访问
        let mut table = std::mem::take(
            &mut *results
                .lock()
                .map_err(|_| anyhow::anyhow!("results table lock poisoned"))?,
        );
        if table.is_empty() {
            return Ok(());
        }

        Logger::info(t!("write.start"));

        let mut tasks = Vec::new();
        for unit in units {
            let Some(pairs) = table.remove(&unit.id()) else {
                continue;
            };

            let folder = self
                .folders
                .get(&unit.lang)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!(tf!("error.unknown_language", &unit.lang)))?;
            let path = self.base_path.join(&folder).join(&unit.file_name);
            let lang = unit.lang.clone();
            let file_name = unit.file_name.clone();

            let task = async move {
                Logger::info(tf!("write.file_start", &file_name, &lang));

                // 重新读取磁盘上的当前内容，而不是计划阶段的快照
                let mut target = store::read_object(&path)?;
                let key_count = pairs.len();
                for (key, value) in pairs {
                    target.insert(key, value);
                }
                store::write_object(&path, &target, false)?;

                Logger::info(tf!("write.file_done", &file_name, &lang));
                Ok(key_count)
            };

            tasks.push((unit.id(), task));
        }

        // 显式等待全部写任务结束
        let task_results = scheduler.execute_batch(tasks).await;
        for (unit_id, result) in task_results {
            let outcome = match result {
                TaskResult::Success(key_count) => UnitOutcome::Translated { key_count },
                TaskResult::Failed(reason) => UnitOutcome::Failed(reason),
                TaskResult::Cancelled => UnitOutcome::Failed("task cancelled".to_string()),
            };
            states.insert(unit_id, outcome);
        }

        Ok(())
    }
}
