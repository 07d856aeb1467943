//! 选择题正文的切分
//!
//! 第一行是题干，之后每个以 `- ` 开头的行是一个错误选项，以 `_ ` 开头的行是正确选项。

use crate::models::question::LINE_BREAK;

/// 选项分隔符：换行后跟 `- `
const OPTION_DELIMITER: &str = "<br/>- ";
/// 正确选项标记
const CORRECT_MARKER: char = '_';

/// 一个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// 在原文中的顺序，同时作为答案编号
    pub index: usize,
    /// 显示文本（正确选项已去掉标记）
    pub text: String,
    pub correct: bool,
}

impl ChoiceOption {
    fn parse(index: usize, part: &str) -> Self {
        match part.strip_prefix(CORRECT_MARKER) {
            Some(rest) => Self {
                index,
                text: rest.strip_prefix(' ').unwrap_or(rest).to_string(),
                correct: true,
            },
            None => Self {
                index,
                text: part.to_string(),
                correct: false,
            },
        }
    }
}

/// 切分后的选择题：题干 + 选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuestion {
    pub stem: String,
    pub options: Vec<ChoiceOption>,
}

impl ChoiceQuestion {
    pub fn parse(body: &str) -> Self {
        let normalized = normalize(body);
        let mut parts = normalized.split(OPTION_DELIMITER);
        let stem = parts.next().unwrap_or_default().to_string();
        let options = parts
            .enumerate()
            .map(|(index, part)| ChoiceOption::parse(index, part))
            .collect();

        Self { stem, options }
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.correct).count()
    }
}

/// 把 `<br/>_` 改写为 `<br/>- _`，让正确选项也能按统一的分隔符切分
fn normalize(body: &str) -> String {
    body.replace(
        &format!("{}{}", LINE_BREAK, CORRECT_MARKER),
        &format!("{}{}", OPTION_DELIMITER, CORRECT_MARKER),
    )
}
