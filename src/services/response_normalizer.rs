//! LLM 输出清洗
//!
//! 模型经常无视"不要输出 markdown"的要求，这里只去除代码块标记，
//! 其余格式问题（前后的解释文字等）直接解析失败。

use serde_json::Value as JsonValue;
use tracing::error;

use crate::error::ParseError;

/// 去除代码块标记并解析为 JSON
///
/// 不做任何结构校验，按原样返回对象或数组
pub fn normalize(raw: &str) -> Result<JsonValue, ParseError> {
    let cleaned = strip_code_fences(raw);

    serde_json::from_str(&cleaned).map_err(|e| {
        error!("LLM 输出不是合法 JSON: {}，原始输出: {}", e, raw);
        ParseError {
            message: e.to_string(),
            text: cleaned,
        }
    })
}

/// 移除全部 ```json 和 ``` 标记
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
