// ============================================================================
// LocSync - 异步任务调度器
// ============================================================================
//
// 文件: src/core/scheduler.rs
// 职责: 通用异步任务调度和并发控制
// 边界:
//   - ✅ 异步任务调度和执行
//   - ✅ 并发数量控制
//   - ✅ 执行结果聚合
//   - ✅ 错误处理和传播
//   - ❌ 不包含具体业务逻辑
//   - ❌ 不包含翻译和写入细节
//   - ❌ 不包含 UI 显示逻辑
//   - ❌ 不包含配置管理
//
// ============================================================================

use crate::utils::logger::Logger;
use crate::tf;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// 任务执行结果枚举
#[derive(Debug, Clone)]
pub enum TaskResult<T> {
    /// 任务执行成功
    Success(T),
    /// 任务执行失败
    Failed(String),
    /// 任务被取消
    Cancelled,
}

/// 调度器配置
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// 最大并发任务数
    pub max_concurrency: usize,
    /// 是否显示详细日志
    pub verbose: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_concurrency: num_cpus::get(),
            verbose: false,
        }
    }
}

/// 异步任务调度器
pub struct AsyncTaskScheduler {
    /// 调度器配置
    config: SchedulerConfig,
    /// 并发控制信号量
    semaphore: Arc<Semaphore>,
}

impl AsyncTaskScheduler {
    /// 创建新的调度器
    pub fn new(config: SchedulerConfig) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrency));
        Self { config, semaphore }
    }

    /// 执行单个异步任务
    pub async fn execute_task<T, F>(&self, task_id: String, task: F) -> TaskResult<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        // 获取信号量许可
        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(_) => return TaskResult::Cancelled,
        };

        let start_time = Instant::now();

        if self.config.verbose {
            Logger::info(tf!("scheduler.task_start", &task_id));
        }

        let result = match task.await {
            Ok(value) => TaskResult::Success(value),
            Err(e) => TaskResult::Failed(e.to_string()),
        };

        // 输出任务结果日志
        if self.config.verbose {
            let duration = format!("{:.2}", start_time.elapsed().as_secs_f64());
            match &result {
                TaskResult::Success(_) => {
                    Logger::info(tf!("scheduler.task_success", &task_id, duration));
                }
                TaskResult::Failed(err) => {
                    Logger::error(tf!("scheduler.task_failed", &task_id, duration, err));
                }
                TaskResult::Cancelled => {
                    Logger::warn(tf!("scheduler.task_cancelled", &task_id));
                }
            }
        }

        result
    }

    /// 并发执行多个任务，等待全部完成后返回各自结果
    pub async fn execute_batch<T, F>(&self, tasks: Vec<(String, F)>) -> Vec<(String, TaskResult<T>)>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        if tasks.is_empty() {
            return Vec::new();
        }

        if self.config.verbose {
            Logger::info(tf!("scheduler.batch_start", tasks.len()));
        }

        // 创建任务句柄
        let mut handles: Vec<JoinHandle<(String, TaskResult<T>)>> = Vec::new();

        for (task_id, task) in tasks {
            let scheduler = self.clone_for_task();
            let task_id_clone = task_id.clone();

            let handle = tokio::spawn(async move {
                let result = scheduler.execute_task(task_id_clone.clone(), task).await;
                (task_id_clone, result)
            });

            handles.push(handle);
        }

        // 等待所有任务完成
        let mut results = Vec::new();
        for handle in handles {
            match handle.await {
                Ok((task_id, result)) => results.push((task_id, result)),
                Err(e) => {
                    Logger::error(tf!("scheduler.task_join_error", e.to_string()));
                }
            }
        }

        if self.config.verbose {
            let success_count = results
                .iter()
                .filter(|(_, result)| matches!(result, TaskResult::Success(_)))
                .count();

            Logger::info(tf!(
                "scheduler.batch_complete",
                success_count,
                results.len()
            ));
        }

        results
    }

    /// 为任务执行创建调度器克隆
    fn clone_for_task(&self) -> Self {
        Self {
            config: self.config.clone(),
            semaphore: Arc::clone(&self.semaphore),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn batch_returns_result_per_task() {
        let scheduler = AsyncTaskScheduler::new(SchedulerConfig {
            max_concurrency: 2,
            verbose: false,
        });

        let tasks: Vec<(String, _)> = (0..5)
            .map(|i| {
                let id = format!("task-{}", i);
                let fut = async move {
                    if i == 3 {
                        anyhow::bail!("boom");
                    }
                    Ok(i * 10)
                };
                (id, fut)
            })
            .collect();

        let results = scheduler.execute_batch(tasks).await;
        assert_eq!(results.len(), 5);

        let failed: Vec<&String> = results
            .iter()
            .filter(|(_, r)| matches!(r, TaskResult::Failed(_)))
            .map(|(id, _)| id)
            .collect();
        assert_eq!(failed, vec!["task-3"]);

        for (id, result) in &results {
            if id != "task-3" {
                assert!(matches!(result, TaskResult::Success(_)));
            }
        }
    }

    #[tokio::test]
    async fn concurrency_never_exceeds_limit() {
        let scheduler = AsyncTaskScheduler::new(SchedulerConfig {
            max_concurrency: 2,
            verbose: false,
        });

        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<(String, _)> = (0..8)
            .map(|i| {
                let running = Arc::clone(&running);
                let peak = Arc::clone(&peak);
                let fut = async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                    Ok(())
                };
                (format!("task-{}", i), fut)
            })
            .collect();

        scheduler.execute_batch(tasks).await;
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let scheduler = AsyncTaskScheduler::new(SchedulerConfig::default());
        let tasks: Vec<(String, std::future::Ready<Result<()>>)> = Vec::new();
        let results = scheduler.execute_batch(tasks).await;
        assert!(results.is_empty());
    }
}
