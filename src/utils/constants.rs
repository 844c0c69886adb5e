// ============================================================================
// LocSync - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 像素图标字符定义
//   - ✅ 文件约定常量定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件路径处理
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LOCSYNC";

/// 设置文件名
pub const SETTINGS_FILE: &str = "settings.toml";

/// 语言文件扩展名
pub const JSON_EXTENSION: &str = "json";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 文件图标
    pub const FILE: &str = "●";
    /// 跳过图标
    pub const SKIP: &str = "◦";
    /// 时间图标
    pub const TIME: &str = "⧖";
}
