// ============================================================================
// LocSync - 同步计划器
// ============================================================================
//
// 文件: src/core/planner.rs
// 职责: 计算各目标语言相对源语言的缺失键
// 边界:
//   - ✅ 目标文件存在性保证（缺失时以空对象创建）
//   - ✅ 缺失键集合计算
//   - ✅ 翻译计划构建
//   - ❌ 不应包含翻译执行逻辑
//   - ❌ 不应包含结果写回逻辑
//   - ❌ 不应包含配置读取逻辑
//
// ============================================================================

use anyhow::Result;
use serde_json::Map;
use std::path::{Path, PathBuf};

use crate::core::store;
use crate::models::{FilePlan, LanguagePlan, SourceFile, TranslationPlan};
use crate::utils::logger::Logger;
use crate::tf;

/// 同步计划器
///
/// 必须在任何翻译开始前运行完毕：除了计算缺失键，它还负责
/// 为缺失的目标文件创建空对象占位，使"文件不存在"与"文件为空"
/// 表现一致（两者的缺失键都是源文件的全部键）。
pub struct SyncPlanner<'a> {
    base_path: &'a Path,
    source_files: &'a [SourceFile],
}

impl<'a> SyncPlanner<'a> {
    pub fn new(base_path: &'a Path, source_files: &'a [SourceFile]) -> Self {
        Self {
            base_path,
            source_files,
        }
    }

    /// 构建翻译计划
    ///
    /// `target_langs` 为 (语言代码, 文件夹名) 对。
    pub fn build_plan(&self, target_langs: &[(String, String)]) -> Result<TranslationPlan> {
        // 先保证所有目标文件存在，再做差集计算
        for (lang, folder) in target_langs {
            self.ensure_target_files_exist(lang, folder)?;
        }

        let mut languages = Vec::new();
        for (lang, folder) in target_langs {
            let mut files = Vec::new();
            for source_file in self.source_files {
                let target_path = self.target_path(folder, &source_file.file_name);
                let target_content = store::read_object(&target_path)?;

                files.push(FilePlan {
                    file_name: source_file.file_name.clone(),
                    keys: missing_keys(&source_file.content, &target_content),
                });
            }
            languages.push(LanguagePlan {
                lang: lang.clone(),
                files,
            });
        }

        Ok(TranslationPlan { languages })
    }

    /// 为缺失的目标文件创建空对象占位
    fn ensure_target_files_exist(&self, lang: &str, folder: &str) -> Result<()> {
        let lang_dir = self.base_path.join(folder);
        if !lang_dir.exists() {
            std::fs::create_dir_all(&lang_dir)?;
        }

        for source_file in self.source_files {
            let target_path = self.target_path(folder, &source_file.file_name);
            if !target_path.exists() {
                Logger::info(tf!("planner.file_missing", &source_file.file_name, lang));
                Logger::info(tf!("planner.creating_file", &source_file.file_name, lang));
                store::write_object(&target_path, &Map::new(), true)?;
            }
        }

        Ok(())
    }

    fn target_path(&self, folder: &str, file_name: &str) -> PathBuf {
        self.base_path.join(folder).join(file_name)
    }
}

/// 计算目标文件相对源文件的缺失键
///
/// 以源文件的键集合为准，返回顺序与源文件键序一致，
/// 翻译结果按该顺序做位置对应。
pub fn missing_keys(
    source: &Map<String, serde_json::Value>,
    target: &Map<String, serde_json::Value>,
) -> Vec<String> {
    source
        .keys()
        .filter(|key| !target.contains_key(*key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn source_file(name: &str, pairs: &[(&str, &str)]) -> SourceFile {
        SourceFile {
            file_name: name.to_string(),
            content: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), json!(v)))
                .collect(),
        }
    }

    fn targets(langs: &[&str]) -> Vec<(String, String)> {
        langs
            .iter()
            .map(|lang| (lang.to_string(), lang.to_string()))
            .collect()
    }

    #[test]
    fn missing_keys_is_source_minus_target() {
        let source: Map<String, Value> = [("hi", "Hello"), ("bye", "Goodbye")]
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        let target: Map<String, Value> = [("hi", "Bonjour")]
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();

        assert_eq!(missing_keys(&source, &target), vec!["bye"]);
        assert!(missing_keys(&source, &source).is_empty());
    }

    #[test]
    fn absent_target_file_is_stubbed_as_empty_object() {
        let base = TempDir::new().unwrap();
        let sources = vec![source_file("greetings.json", &[("hi", "Hello")])];
        let planner = SyncPlanner::new(base.path(), &sources);

        let plan = planner.build_plan(&targets(&["fr"])).unwrap();

        let stub = base.path().join("fr/greetings.json");
        assert!(stub.exists());
        assert!(store::read_object(&stub).unwrap().is_empty());

        // 缺文件与空文件等价：缺失键为源文件全部键
        assert_eq!(plan.languages[0].files[0].keys, vec!["hi"]);
    }

    #[test]
    fn existing_keys_are_not_planned_again() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("fr")).unwrap();
        fs::write(
            base.path().join("fr/greetings.json"),
            r#"{"hi": "Bonjour"}"#,
        )
        .unwrap();

        let sources = vec![source_file(
            "greetings.json",
            &[("hi", "Hello"), ("bye", "Goodbye")],
        )];
        let planner = SyncPlanner::new(base.path(), &sources);
        let plan = planner.build_plan(&targets(&["fr"])).unwrap();

        assert_eq!(plan.languages[0].files[0].keys, vec!["bye"]);
    }

    #[test]
    fn fully_synced_tree_yields_no_work() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("fr")).unwrap();
        fs::write(
            base.path().join("fr/greetings.json"),
            r#"{"hi": "Bonjour", "bye": "Au revoir"}"#,
        )
        .unwrap();

        let sources = vec![source_file(
            "greetings.json",
            &[("hi", "Hello"), ("bye", "Goodbye")],
        )];
        let planner = SyncPlanner::new(base.path(), &sources);
        let plan = planner.build_plan(&targets(&["fr"])).unwrap();

        assert!(!plan.has_work());
    }

    #[test]
    fn plan_keys_follow_source_key_order() {
        let base = TempDir::new().unwrap();
        let sources = vec![source_file(
            "a.json",
            &[("z", "1"), ("a", "2"), ("m", "3")],
        )];
        let planner = SyncPlanner::new(base.path(), &sources);
        let plan = planner.build_plan(&targets(&["de"])).unwrap();

        // preserve_order: 键序与源文件一致而非字典序
        assert_eq!(plan.languages[0].files[0].keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn invalid_target_json_aborts_planning() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("fr")).unwrap();
        fs::write(base.path().join("fr/greetings.json"), "{ broken").unwrap();

        let sources = vec![source_file("greetings.json", &[("hi", "Hello")])];
        let planner = SyncPlanner::new(base.path(), &sources);

        assert!(planner.build_plan(&targets(&["fr"])).is_err());
    }
}
