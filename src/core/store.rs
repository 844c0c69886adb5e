// ============================================================================
// LocSync - 语言文件存取
// ============================================================================
//
// 文件: src/core/store.rs
// 职责: 语言 JSON 文件的读取、解析和写入
// 边界:
//   - ✅ 目录下 JSON 文件枚举和解析
//   - ✅ 单文件读取（空内容视为空对象）
//   - ✅ 格式化写入（可选 ASCII 转义）
//   - ✅ 临时文件写入后原子重命名
//   - ❌ 不应包含缺失键计算逻辑
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含备份逻辑
//
// ============================================================================

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

use crate::models::SourceFile;
use crate::utils::constants::JSON_EXTENSION;

/// 文件存取错误
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// 非空内容无法解析为 JSON 对象，属于不可恢复的配置错误
    #[error("File {file_name} in {dir} is not a valid JSON file")]
    InvalidJson { file_name: String, dir: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// 枚举目录下的 *.json 文件并解析为对象
///
/// 返回结果按文件名排序。空文件视为空对象；非空但无法解析的文件
/// 返回致命错误并携带文件名。
pub fn list_json_objects(dir: &Path) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .map(|ext| ext == JSON_EXTENSION)
            .unwrap_or(false);
        if !is_json {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let content = parse_object(&fs::read_to_string(&path)?, &file_name, dir)?;
        files.push(SourceFile { file_name, content });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// 读取单个 JSON 对象文件
///
/// 文件不存在与解析规则由调用方决定，这里只处理已存在的文件。
pub fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    parse_object(&fs::read_to_string(path)?, &file_name, dir)
}

/// 将 JSON 对象写入文件（4 空格缩进）
///
/// `unicode_escape` 为 true 时非 ASCII 字符转义为 \uXXXX，
/// 为 false 时原样保留（翻译文本必须使用该模式）。
/// 先写入同目录临时文件再重命名，避免写入中断产生残缺文件。
pub fn write_object(path: &Path, content: &Map<String, Value>, unicode_escape: bool) -> Result<()> {
    let mut buf = Vec::new();
    if unicode_escape {
        let formatter = AsciiPrettyFormatter::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        content
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    } else {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        content
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    {
        let mut tmp_file = fs::File::create(&tmp_path)?;
        tmp_file.write_all(&buf)?;
        tmp_file.flush()?;
    }
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// 解析文件内容为 JSON 对象
///
/// 空白内容视为空对象；其余内容必须是合法的 JSON 对象。
fn parse_object(raw: &str, file_name: &str, dir: &Path) -> Result<Map<String, Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(StoreError::InvalidJson {
            file_name: file_name.to_string(),
            dir: dir.display().to_string(),
        }),
    }
}

/// 带 ASCII 转义的 4 空格缩进格式化器
///
/// serde_json 本身不提供 ensure_ascii 行为，这里在 PrettyFormatter
/// 之上把非 ASCII 字符写为 \uXXXX（BMP 之外写代理对）。
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl<'a> Formatter for AsciiPrettyFormatter<'a> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // 需要转义的控制字符和引号不会进入 fragment，
        // 这里只负责把非 ASCII 字符改写为 \uXXXX
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            if start < idx {
                writer.write_all(fragment[start..idx].as_bytes())?;
            }
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        if start < fragment.len() {
            writer.write_all(fragment[start..].as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn object(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn empty_file_parses_as_empty_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();

        assert!(read_object(&path).unwrap().is_empty());

        fs::write(&path, "  \n\t ").unwrap();
        assert!(read_object(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_a_fatal_error_with_file_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        match read_object(&path) {
            Err(StoreError::InvalidJson { file_name, .. }) => {
                assert_eq!(file_name, "broken.json");
            }
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn non_object_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("array.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            read_object(&path),
            Err(StoreError::InvalidJson { .. })
        ));
    }

    #[test]
    fn list_json_objects_skips_other_extensions_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), r#"{"k": "v"}"#).unwrap();
        fs::write(dir.path().join("a.json"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = list_json_objects(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "a.json");
        assert!(files[0].content.is_empty());
        assert_eq!(files[1].file_name, "b.json");
        assert_eq!(files[1].content.get("k"), Some(&json!("v")));
    }

    #[test]
    fn round_trip_preserves_content_in_both_modes() {
        let dir = TempDir::new().unwrap();
        let content = object(&[("hello", "Bonjour"), ("cafe", "café"), ("jp", "日本語")]);

        for escape in [false, true] {
            let path = dir.path().join(format!("roundtrip-{}.json", escape));
            write_object(&path, &content, escape).unwrap();
            assert_eq!(read_object(&path).unwrap(), content);
        }
    }

    #[test]
    fn unescaped_mode_preserves_non_ascii_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.json");
        write_object(&path, &object(&[("cafe", "café")]), false).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("café"));
    }

    #[test]
    fn escaped_mode_emits_pure_ascii_with_surrogate_pairs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ascii.json");
        let content = object(&[("cafe", "café"), ("emoji", "🎉")]);
        write_object(&path, &content, true).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.is_ascii());
        assert!(raw.contains("\\u00e9"));
        // 🎉 (U+1F389) 写为 UTF-16 代理对
        assert!(raw.contains("\\ud83c\\udf89"));
        assert_eq!(read_object(&path).unwrap(), content);
    }

    #[test]
    fn write_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("indent.json");
        write_object(&path, &object(&[("k", "v")]), false).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("    \"k\": \"v\""));
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("target.json");
        write_object(&path, &object(&[("k", "v")]), false).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["target.json".to_string()]);
    }
}
