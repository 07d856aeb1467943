//! 填空题正文的切分
//!
//! 正文中每个空写作 `[gap]答案[/gap]`，切分后得到"文本、空、文本、空 …… 文本"交替的序列。

use regex::Regex;

/// 匹配一个空，捕获组为空中的答案
pub const GAP_PATTERN: &str = r"\[gap\]([^\[\]]*)\[/gap\]";

/// 编译填空匹配表达式
pub fn gap_pattern() -> Result<Regex, regex::Error> {
    Regex::new(GAP_PATTERN)
}

/// 切分后的一个片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GapSegment {
    /// 普通文本
    Text(String),
    /// 空中的标准答案
    Gap(String),
}

/// 填空题正文切分结果
///
/// 序列总是以文本开始、以文本结束（可以为空串），空的数量 = (片段数 - 1) / 2。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapText {
    segments: Vec<GapSegment>,
}

impl GapText {
    pub fn parse(body: &str, pattern: &Regex) -> Self {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in pattern.captures_iter(body) {
            let Some(whole) = caps.get(0) else { continue };
            let answer = caps.get(1).map_or("", |m| m.as_str());
            segments.push(GapSegment::Text(body[last_end..whole.start()].to_string()));
            segments.push(GapSegment::Gap(answer.to_string()));
            last_end = whole.end();
        }
        segments.push(GapSegment::Text(body[last_end..].to_string()));

        Self { segments }
    }

    pub fn segments(&self) -> &[GapSegment] {
        &self.segments
    }

    pub fn gap_count(&self) -> usize {
        (self.segments.len() - 1) / 2
    }

    /// 把片段重新拼回 `[gap]...[/gap]` 形式的正文
    pub fn rejoin(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                GapSegment::Text(text) => text.clone(),
                GapSegment::Gap(answer) => format!("[gap]{}[/gap]", answer),
            })
            .collect()
    }
}
