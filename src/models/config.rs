// ============================================================================
// LocSync - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 设置文件数据结构定义和操作
// 边界:
//   - ✅ 设置文件数据结构定义
//   - ✅ 设置序列化/反序列化
//   - ✅ 设置验证和默认值
//   - ✅ 设置文件读取操作
//   - ❌ 不应包含设置应用逻辑
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含文件系统底层操作
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::t;
use crate::utils::constants::SETTINGS_FILE;

/// 全局配置管理器
static GLOBAL_SETTINGS: std::sync::OnceLock<Arc<RwLock<Settings>>> = std::sync::OnceLock::new();

/// LocSync 设置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// 项目配置
    pub project: ProjectConfig,
    /// 语言到文件夹的映射
    #[serde(default)]
    pub language_folder_mapper: HashMap<String, String>,
    /// 备份配置
    #[serde(default)]
    pub backup: BackupConfig,
    /// 执行配置
    #[serde(default)]
    pub execution: ExecutionConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 项目配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// 本地化文件根路径
    pub base_path: String,
    /// 源语言代码
    pub source_lang: String,
    /// 目标语言代码列表
    pub target_lang: Vec<String>,
}

/// 备份配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupConfig {
    /// 是否启用临时备份
    #[serde(default)]
    pub enable_temp_backup: bool,
    /// 临时备份目录
    #[serde(default)]
    pub temp_backup_dest: String,
    /// 执行成功后是否删除备份
    #[serde(default)]
    pub delete_backup_after_successful_completion: bool,
}

/// 执行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// 最大并发数
    #[serde(default = "Settings::default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_concurrency: Settings::default_max_concurrency(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Settings::default_colored")]
    pub colored: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            colored: Settings::default_colored(),
        }
    }
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Settings::default_language")]
    pub language: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Settings::default_language(),
        }
    }
}

/// CLI 运行时参数（用于覆盖设置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub max_concurrency: Option<usize>,
    pub base_path: Option<String>,
    pub language: Option<String>,
}

impl Settings {
    /// 默认最大并发数
    pub fn default_max_concurrency() -> usize {
        num_cpus::get()
    }

    /// 默认彩色输出
    pub fn default_colored() -> bool {
        true
    }

    /// 默认界面语言
    pub fn default_language() -> String {
        "en_us".to_string()
    }

    /// 初始化全局配置（程序启动时调用）
    ///
    /// 设置文件缺失属于致命的配置错误，不会回退到默认配置。
    pub fn initialize() -> anyhow::Result<()> {
        let settings = Self::load_settings()?;
        GLOBAL_SETTINGS
            .set(Arc::new(RwLock::new(settings)))
            .map_err(|_| anyhow::anyhow!("Global settings already initialized"))?;
        Ok(())
    }

    /// 加载设置文件
    fn load_settings() -> anyhow::Result<Self> {
        let settings_path = PathBuf::from(SETTINGS_FILE);
        if !settings_path.exists() {
            anyhow::bail!(t!("error.settings_not_found"));
        }
        let content = std::fs::read_to_string(&settings_path)?;
        let settings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!(crate::tf!("error.settings_parse", e)))?;
        Ok(settings)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let mut settings = global
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings write lock"))?;

        // 合并参数
        if let Some(verbose) = args.verbose {
            settings.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            settings.output.colored = colored;
        }
        if let Some(max_concurrency) = args.max_concurrency {
            settings.execution.max_concurrency = max_concurrency;
        }
        if let Some(base_path) = args.base_path {
            settings.project.base_path = base_path;
        }
        if let Some(language) = args.language {
            settings.i18n.language = language;
        }

        Ok(())
    }

    /// 获取项目根路径
    pub fn get_base_path() -> anyhow::Result<PathBuf> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(PathBuf::from(&settings.project.base_path))
    }

    /// 获取源语言代码
    pub fn get_source_lang() -> anyhow::Result<String> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.project.source_lang.clone())
    }

    /// 获取目标语言代码列表
    pub fn get_target_langs() -> anyhow::Result<Vec<String>> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.project.target_lang.clone())
    }

    /// 获取语言对应的文件夹名
    pub fn get_language_folder(lang: &str) -> anyhow::Result<String> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        settings
            .language_folder_mapper
            .get(lang)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!(crate::tf!("error.unknown_language", lang)))
    }

    /// 获取备份配置
    pub fn get_backup_config() -> anyhow::Result<BackupConfig> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.backup.clone())
    }

    /// 获取最大并发数（带默认值）
    pub fn get_max_concurrency() -> usize {
        match Self::get_max_concurrency_from_settings() {
            Ok(concurrency) => concurrency,
            _ => Self::default_max_concurrency(),
        }
    }

    /// 从配置获取最大并发数（可能失败）
    fn get_max_concurrency_from_settings() -> anyhow::Result<usize> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.execution.max_concurrency)
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::get_verbose_from_settings() {
            Ok(verbose) => verbose,
            _ => false,
        }
    }

    /// 从配置获取详细输出设置（可能失败）
    fn get_verbose_from_settings() -> anyhow::Result<bool> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.output.verbose)
    }

    /// 获取彩色输出设置（带默认值）
    pub fn get_colored() -> bool {
        match Self::get_colored_from_settings() {
            Ok(colored) => colored,
            _ => Self::default_colored(),
        }
    }

    /// 从配置获取彩色输出设置（可能失败）
    fn get_colored_from_settings() -> anyhow::Result<bool> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.output.colored)
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        let global = GLOBAL_SETTINGS
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global settings not initialized"))?;

        let settings = global
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;

        Ok(settings.i18n.language.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_settings_file() {
        let content = r#"
            [project]
            base_path = "./locales"
            source_lang = "en"
            target_lang = ["fr", "de", "zh"]

            [language_folder_mapper]
            en = "en"
            fr = "fr-FR"
            de = "de"
            zh = "zh-Hans"

            [backup]
            enable_temp_backup = true
            temp_backup_dest = "/tmp/locsync-backup"
            delete_backup_after_successful_completion = true

            [execution]
            max_concurrency = 4

            [output]
            verbose = true
            colored = false

            [i18n]
            language = "zh_cn"
        "#;

        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(settings.project.base_path, "./locales");
        assert_eq!(settings.project.source_lang, "en");
        assert_eq!(settings.project.target_lang, vec!["fr", "de", "zh"]);
        assert_eq!(
            settings.language_folder_mapper.get("fr"),
            Some(&"fr-FR".to_string())
        );
        assert!(settings.backup.enable_temp_backup);
        assert!(settings.backup.delete_backup_after_successful_completion);
        assert_eq!(settings.execution.max_concurrency, 4);
        assert!(settings.output.verbose);
        assert!(!settings.output.colored);
        assert_eq!(settings.i18n.language, "zh_cn");
    }

    #[test]
    fn optional_sections_fall_back_to_defaults() {
        let content = r#"
            [project]
            base_path = "./locales"
            source_lang = "en"
            target_lang = ["fr"]

            [language_folder_mapper]
            en = "en"
            fr = "fr"
        "#;

        let settings: Settings = toml::from_str(content).unwrap();
        assert!(!settings.backup.enable_temp_backup);
        assert_eq!(settings.backup.temp_backup_dest, "");
        assert_eq!(
            settings.execution.max_concurrency,
            Settings::default_max_concurrency()
        );
        assert!(!settings.output.verbose);
        assert!(settings.output.colored);
        assert_eq!(settings.i18n.language, "en_us");
    }

    #[test]
    fn section_defaults_match_documented_values() {
        assert_eq!(
            ExecutionConfig::default().max_concurrency,
            Settings::default_max_concurrency()
        );

        let output = OutputConfig::default();
        assert!(!output.verbose);
        assert!(output.colored);

        assert_eq!(I18nConfig::default().language, "en_us");
    }

    #[test]
    fn missing_project_section_is_an_error() {
        let content = r#"
            [language_folder_mapper]
            en = "en"
        "#;

        assert!(toml::from_str::<Settings>(content).is_err());
    }
}
