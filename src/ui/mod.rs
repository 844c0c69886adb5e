// ============================================================================
// LocSync - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 终端展示模块入口和导出
// 边界:
//   - ✅ UI 子模块导出
//   - ❌ 不应包含业务逻辑实现
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod summary;
