//! 题库文本解析
//!
//! 把逐行读入的题库文本切分为一道道 [`QuestionRecord`](crate::models::QuestionRecord)。

pub mod record_parser;

pub use record_parser::{ParseDiagnostic, RecordParser};
