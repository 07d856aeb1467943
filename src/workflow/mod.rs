//! 流程层：一道题从渲染到写入的完整流程

pub mod question_ctx;
pub mod question_flow;

pub use question_ctx::QuestionCtx;
pub use question_flow::{ProcessResult, QuestionFlow};
