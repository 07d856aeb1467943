use std::fmt;

/// 题目正文中多行之间的换行标记
pub const LINE_BREAK: &str = "<br/>";

/// 题型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// 填空题
    Gap,
    /// 单选题
    ChoiceSingle,
    /// 多选题
    ChoiceMulti,
}

impl QuestionType {
    /// 从题型代码解析（`[t][g]标题` 中的 `g`）
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'g' => Some(QuestionType::Gap),
            's' => Some(QuestionType::ChoiceSingle),
            'm' => Some(QuestionType::ChoiceMulti),
            _ => None,
        }
    }

    /// 写入 QUESTIONTYPE 元数据的名称
    pub fn ilias_name(self) -> &'static str {
        match self {
            QuestionType::Gap => "CLOZE QUESTION",
            QuestionType::ChoiceSingle => "SINGLE CHOICE QUESTION",
            QuestionType::ChoiceMulti => "MULTIPLE CHOICE QUESTION",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ilias_name())
    }
}

/// 解析出的一道题目
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    /// 由起始行行号生成，整个运行期间唯一
    pub id: String,
    /// 题型；题型代码无法识别时为 `None`
    pub question_type: Option<QuestionType>,
    pub title: String,
    /// 以 [`LINE_BREAK`] 连接的正文
    pub body: String,
}

impl QuestionRecord {
    pub fn new(id: impl Into<String>, question_type: Option<QuestionType>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question_type,
            title: title.into(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// 追加一行正文，第一行之前不加换行标记
    pub fn push_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push_str(LINE_BREAK);
        }
        self.body.push_str(line);
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question_type {
            Some(question_type) => write!(f, "{} {} {}", self.id, question_type, self.title),
            None => write!(f, "{} <未知题型> {}", self.id, self.title),
        }
    }
}
