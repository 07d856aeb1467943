//! 题目处理上下文
//!
//! 封装"我正在处理哪个文件的第几题"这一信息

use std::fmt::Display;

/// 题目处理上下文
///
/// 只用于日志显示
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 输入文件名
    pub file_name: String,

    /// 题目在文件中的序号（从1开始）
    pub question_index: usize,
}

impl QuestionCtx {
    /// 创建新的题目上下文
    pub fn new(file_name: impl Into<String>, question_index: usize) -> Self {
        Self {
            file_name: file_name.into(),
            question_index,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} 题目#{}]", self.file_name, self.question_index)
    }
}
