// ============================================================================
// LocSync - 临时备份管理
// ============================================================================
//
// 文件: src/core/backup.rs
// 职责: 本地化目录的临时备份创建和删除
// 边界:
//   - ✅ 目录递归复制
//   - ✅ 备份目录删除
//   - ❌ 不应包含备份策略判断
//   - ❌ 不应包含用户交互逻辑
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 创建备份
///
/// 已存在的备份目录会被整体替换。
pub fn create_backup(source_dir: &Path, dest_dir: &Path) -> Result<()> {
    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir)
            .with_context(|| format!("Failed to remove stale backup at {}", dest_dir.display()))?;
    }

    for entry in WalkDir::new(source_dir) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source_dir)?;
        let dest_path = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest_path)?;
        }
    }

    Ok(())
}

/// 删除备份
pub fn delete_backup(dest_dir: &Path) -> Result<()> {
    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir)
            .with_context(|| format!("Failed to delete backup at {}", dest_dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn backup_copies_nested_directories() {
        let source = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("fr")).unwrap();
        fs::write(source.path().join("fr/app.json"), r#"{"k": "v"}"#).unwrap();
        fs::write(source.path().join("readme.txt"), "notes").unwrap();

        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join("backup");
        create_backup(source.path(), &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("fr/app.json")).unwrap(),
            r#"{"k": "v"}"#
        );
        assert_eq!(fs::read_to_string(dest.join("readme.txt")).unwrap(), "notes");
    }

    #[test]
    fn existing_backup_is_replaced() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("a.json"), "{}").unwrap();

        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join("backup");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale.json"), "{}").unwrap();

        create_backup(source.path(), &dest).unwrap();

        assert!(dest.join("a.json").exists());
        assert!(!dest.join("stale.json").exists());
    }

    #[test]
    fn delete_backup_tolerates_missing_directory() {
        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join("never-created");
        assert!(delete_backup(&dest).is_ok());

        fs::create_dir_all(&dest).unwrap();
        assert!(delete_backup(&dest).is_ok());
        assert!(!dest.exists());
    }
}
