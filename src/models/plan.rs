// ============================================================================
// LocSync - 同步计划数据模型
// ============================================================================
//
// 文件: src/models/plan.rs
// 职责: 同步与翻译相关的数据结构定义
// 边界:
//   - ✅ 源文件数据结构定义
//   - ✅ 翻译计划数据结构定义
//   - ✅ 任务单元和结果枚举定义
//   - ❌ 不应包含缺失键计算逻辑
//   - ❌ 不应包含翻译执行逻辑
//   - ❌ 不应包含文件操作逻辑
//
// ============================================================================

use serde_json::{Map, Value};
use std::fmt;

/// 源语言文件
///
/// 每次运行从源语言目录加载一次，键序与文件中出现的顺序一致。
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// 文件名（如 greetings.json）
    pub file_name: String,
    /// 文件内容（有序键值映射）
    pub content: Map<String, Value>,
}

/// 单个文件的缺失键计划
#[derive(Debug, Clone)]
pub struct FilePlan {
    /// 文件名
    pub file_name: String,
    /// 目标文件中缺失的键（按源文件键序排列）
    pub keys: Vec<String>,
}

impl FilePlan {
    /// 文件是否已同步
    pub fn is_in_sync(&self) -> bool {
        self.keys.is_empty()
    }
}

/// 单个目标语言的缺失键计划
#[derive(Debug, Clone)]
pub struct LanguagePlan {
    /// 目标语言代码
    pub lang: String,
    /// 各文件的缺失键
    pub files: Vec<FilePlan>,
}

/// 全量翻译计划
#[derive(Debug, Clone, Default)]
pub struct TranslationPlan {
    /// 各目标语言的计划
    pub languages: Vec<LanguagePlan>,
}

impl TranslationPlan {
    /// 是否存在任何待翻译的键
    pub fn has_work(&self) -> bool {
        self.languages
            .iter()
            .any(|lang| lang.files.iter().any(|file| !file.is_in_sync()))
    }

    /// 展开为 (语言, 文件) 任务单元，跳过已同步的文件
    pub fn units(&self) -> Vec<SyncUnit> {
        let mut units = Vec::new();
        for lang_plan in &self.languages {
            for file_plan in &lang_plan.files {
                if !file_plan.is_in_sync() {
                    units.push(SyncUnit {
                        lang: lang_plan.lang.clone(),
                        file_name: file_plan.file_name.clone(),
                        keys: file_plan.keys.clone(),
                    });
                }
            }
        }
        units
    }
}

/// 一个 (语言, 文件) 翻译任务单元
#[derive(Debug, Clone)]
pub struct SyncUnit {
    /// 目标语言代码
    pub lang: String,
    /// 文件名
    pub file_name: String,
    /// 待翻译的键（按源文件键序排列，翻译结果按位置对应）
    pub keys: Vec<String>,
}

impl SyncUnit {
    /// 任务单元标识
    pub fn id(&self) -> String {
        format!("{}:{}", self.lang, self.file_name)
    }
}

/// 任务单元执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// 翻译并写入成功
    Translated {
        /// 写入的键数量
        key_count: usize,
    },
    /// 因翻译接口限流被跳过
    RateLimited,
    /// 执行失败
    Failed(String),
}

impl fmt::Display for UnitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitOutcome::Translated { key_count } => write!(f, "Translated ({} keys)", key_count),
            UnitOutcome::RateLimited => write!(f, "RateLimited"),
            UnitOutcome::Failed(reason) => write!(f, "Failed: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with(lang: &str, files: Vec<(&str, Vec<&str>)>) -> LanguagePlan {
        LanguagePlan {
            lang: lang.to_string(),
            files: files
                .into_iter()
                .map(|(name, keys)| FilePlan {
                    file_name: name.to_string(),
                    keys: keys.into_iter().map(String::from).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn plan_without_missing_keys_has_no_work() {
        let plan = TranslationPlan {
            languages: vec![
                plan_with("fr", vec![("a.json", vec![]), ("b.json", vec![])]),
                plan_with("de", vec![("a.json", vec![])]),
            ],
        };

        assert!(!plan.has_work());
        assert!(plan.units().is_empty());
    }

    #[test]
    fn units_skip_in_sync_files() {
        let plan = TranslationPlan {
            languages: vec![
                plan_with("fr", vec![("a.json", vec!["hello"]), ("b.json", vec![])]),
                plan_with("de", vec![("a.json", vec!["hello", "bye"])]),
            ],
        };

        assert!(plan.has_work());
        let units = plan.units();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].id(), "fr:a.json");
        assert_eq!(units[1].id(), "de:a.json");
        assert_eq!(units[1].keys, vec!["hello", "bye"]);
    }
}
