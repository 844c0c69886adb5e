// ============================================================================
// LocSync - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口和导出
// 边界:
//   - ✅ 数据模型子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含业务逻辑实现
//   - ❌ 不应包含文件操作逻辑
//
// ============================================================================

pub mod config;
pub mod plan;

// 重新导出常用类型
pub use plan::{FilePlan, LanguagePlan, SourceFile, SyncUnit, TranslationPlan, UnitOutcome};
