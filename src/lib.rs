//! # Question Pool
//!
//! 把纯文本题库转换为可导入 ILIAS 的题库 XML（QTI questestinterop）
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `xml/` - 元素树与文档写出，保证转义和格式良好
//! - `parser/` - `RecordParser`，把逐行输入切分为题目记录
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题目
//! - `GapRenderer` - 填空题渲染与计分
//! - `ChoiceRenderer` - 单选 / 多选题渲染与计分
//! - `QuestionRenderer` - 按题型分派
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionCtx` - 上下文封装（文件名 + 题目序号）
//! - `QuestionFlow` - 流程编排（渲染 → 诊断 → 写入）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文件处理器
//! - `orchestrator/file_processor` - 单个文件处理器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;
pub mod workflow;
pub mod xml;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuestionRecord, QuestionType};
pub use orchestrator::{convert, process_file, App, FileStats, ProcessingStats};
pub use parser::RecordParser;
pub use services::{QuestionRenderer, RenderedQuestion};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow};
