// ============================================================================
// LocSync - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 通用工具模块入口和导出
// 边界:
//   - ✅ 工具子模块导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod interact;
pub mod logger;
pub mod styles;
