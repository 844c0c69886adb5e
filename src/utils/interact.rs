// ============================================================================
// LocSync - 用户交互工具
// ============================================================================
//
// 文件: src/utils/interact.rs
// 职责: 控制台用户交互
// 边界:
//   - ✅ 控制台确认提示
//   - ✅ 用户输入读取
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含日志输出逻辑
//
// ============================================================================

use std::io::{self, Write};

use anyhow::Result;

/// 向用户提问并读取 yes/no 回答
///
/// 只有输入 "yes"（不区分大小写）才视为确认。
pub fn get_user_response(msg: &str) -> Result<bool> {
    print!("{}", msg);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("yes"))
}
