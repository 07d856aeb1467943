//! 题目记录解析器
//!
//! ## 输入格式
//!
//! - `#` 开头的行是注释，无论在题目内外都忽略
//! - `[t][g]标题` 开始一道题，`g` / `s` / `m` 分别表示填空、单选、多选
//! - 题目开始后的非空行都是正文，多行之间用 `<br/>` 连接
//! - 空行结束当前题目
//!
//! 文件末尾没有以空行结束的题目会被丢弃（记录一条警告）。

use crate::models::question::{QuestionRecord, QuestionType};
use std::io;
use tracing::{debug, warn};

/// 题目起始标记
const START_MARKER: &str = "[t]";
/// 注释标记
const COMMENT_MARKER: char = '#';

/// 解析过程中发现的、不影响继续解析的问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagnostic {
    /// 文件结束时题目没有以空行结束，已丢弃
    UnterminatedBlock { id: String },
    /// 题目还没结束就遇到了新的起始行，前一道题已丢弃
    RestartedBlock { id: String, line_number: usize },
    /// 起始行的题型代码无法识别
    UnknownTypeCode { id: String, line_number: usize },
}

/// 逐行解析题库文本的迭代器
///
/// 所有解析状态（当前行号、正在累积的题目）都保存在迭代器自身中，
/// 只向前读一遍，不可重新开始。
pub struct RecordParser<I> {
    lines: I,
    id_prefix: String,
    line_number: usize,
    pending: Option<QuestionRecord>,
    diagnostics: Vec<ParseDiagnostic>,
    finished: bool,
}

impl<I> RecordParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I, id_prefix: impl Into<String>) -> Self {
        Self {
            lines,
            id_prefix: id_prefix.into(),
            line_number: 0,
            pending: None,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    /// 已读取的行数
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// 是否处于一道题目之中
    pub fn in_block(&self) -> bool {
        self.pending.is_some()
    }

    fn start_block(&mut self, rest: &str) {
        let id = format!("{}{}", self.id_prefix, self.line_number);

        if let Some(previous) = self.pending.take() {
            warn!(
                "⚠️ 第 {} 行开始了新题目，但 {} 还没有以空行结束，已丢弃",
                self.line_number, previous.id
            );
            self.diagnostics.push(ParseDiagnostic::RestartedBlock {
                id: previous.id,
                line_number: self.line_number,
            });
        }

        let question_type = parse_type_code(rest);
        if question_type.is_none() {
            debug!("第 {} 行的题型代码无法识别: {}", self.line_number, rest);
            self.diagnostics.push(ParseDiagnostic::UnknownTypeCode {
                id: id.clone(),
                line_number: self.line_number,
            });
        }

        let title: String = rest.chars().skip(3).collect();
        self.pending = Some(QuestionRecord::new(id, question_type, title.trim()));
    }

    fn finish(&mut self) {
        self.finished = true;
        if let Some(record) = self.pending.take() {
            warn!("⚠️ 文件结束时题目 {} 没有以空行结束，已丢弃", record.id);
            self.diagnostics
                .push(ParseDiagnostic::UnterminatedBlock { id: record.id });
        }
    }
}

impl<'a> RecordParser<std::iter::Map<std::str::Lines<'a>, fn(&'a str) -> io::Result<String>>> {
    /// 从内存中的文本解析
    pub fn from_text(text: &'a str, id_prefix: impl Into<String>) -> Self {
        let to_line: fn(&'a str) -> io::Result<String> = |line| Ok(line.to_string());
        RecordParser::new(text.lines().map(to_line), id_prefix)
    }
}

impl<I> Iterator for RecordParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<QuestionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let raw = match self.lines.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finish();
                    return None;
                }
            };
            self.line_number += 1;
            let line = raw.trim();

            if line.is_empty() {
                match self.pending.take() {
                    Some(record) => return Some(Ok(record)),
                    None => continue,
                }
            }

            if line.starts_with(COMMENT_MARKER) {
                continue;
            }

            if let Some(rest) = line.strip_prefix(START_MARKER) {
                self.start_block(rest);
                continue;
            }

            match self.pending.as_mut() {
                Some(record) => record.push_line(line),
                None => debug!("第 {} 行不属于任何题目，已忽略", self.line_number),
            }
        }
    }
}

/// 解析 `[g]` / `[s]` / `[m]` 形式的题型代码
fn parse_type_code(rest: &str) -> Option<QuestionType> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('['), Some(code), Some(']')) => QuestionType::from_code(code),
        _ => None,
    }
}
