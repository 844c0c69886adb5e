// ============================================================================
// LocSync - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod backup;
pub mod orchestrator;
pub mod planner;
pub mod provider;
pub mod scheduler;
pub mod store;

// 重新导出常用类型
pub use orchestrator::{SyncReport, TranslationOrchestrator};
pub use planner::SyncPlanner;
pub use provider::{GoogleProvider, TranslateProvider};
pub use scheduler::{AsyncTaskScheduler, SchedulerConfig};
