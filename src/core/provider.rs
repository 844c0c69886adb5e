// ============================================================================
// LocSync - 翻译服务适配器
// ============================================================================
//
// 文件: src/core/provider.rs
// 职责: 批量翻译接口抽象和 Google 翻译实现
// 边界:
//   - ✅ 批量翻译 trait 定义
//   - ✅ 目标语言代码归一化
//   - ✅ 限流错误与其他错误区分
//   - ✅ HTTP 请求和响应解析
//   - ❌ 不应包含任务调度逻辑
//   - ❌ 不应包含文件操作逻辑
//   - ❌ 不应包含重试策略
//
// ============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const TIMEOUT_SECS: u64 = 60;

/// 翻译服务错误
#[derive(Error, Debug)]
pub enum TranslateError {
    /// 翻译接口限流，调用方按单元放弃，不做重试
    #[error("Too many requests made to the translation API")]
    RateLimited,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response from translation API: {0}")]
    InvalidResponse(String),

    #[error("Translation count mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// 批量翻译能力
///
/// 返回结果与输入文本数量一致、顺序对应。空输入直接返回空结果，
/// 不产生网络调用。
#[async_trait]
pub trait TranslateProvider: Send + Sync {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        dest_lang: &str,
    ) -> Result<Vec<String>, TranslateError>;
}

/// 目标语言代码归一化
///
/// 中文需要改写为接口期望的地区变体代码。
pub fn normalize_dest_lang(dest_lang: &str) -> String {
    match dest_lang {
        "zh" => "zh-CN".to_string(),
        other => other.to_string(),
    }
}

/// Google 翻译实现
pub struct GoogleProvider {
    client: Client,
    endpoint: String,
}

impl GoogleProvider {
    pub fn new() -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: ENDPOINT.to_string(),
        })
    }

    /// 翻译单条文本
    async fn translate_single(
        &self,
        text: &str,
        source_lang: &str,
        dest_lang: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", dest_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let payload: Value = response.json().await?;
        parse_translation(&payload)
    }
}

#[async_trait]
impl TranslateProvider for GoogleProvider {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        dest_lang: &str,
    ) -> Result<Vec<String>, TranslateError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let dest_lang = normalize_dest_lang(dest_lang);

        // 接口按单条文本翻译，批次内逐条请求并保持顺序
        let mut translations = Vec::with_capacity(texts.len());
        for text in texts {
            translations.push(self.translate_single(text, source_lang, &dest_lang).await?);
        }

        if translations.len() != texts.len() {
            return Err(TranslateError::LengthMismatch {
                expected: texts.len(),
                got: translations.len(),
            });
        }

        Ok(translations)
    }
}

/// 解析翻译接口响应
///
/// 响应形如 [[["译文","原文",...], ...], ...]，取第一层数组中
/// 每个片段的首元素拼接为完整译文。
fn parse_translation(payload: &Value) -> Result<String, TranslateError> {
    let segments = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::InvalidResponse("missing segment array".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(piece);
        }
    }

    if translated.is_empty() {
        return Err(TranslateError::InvalidResponse(
            "empty translation in response".to_string(),
        ));
    }

    Ok(translated)
}
