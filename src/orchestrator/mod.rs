//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责文件级别的调度和统计。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文件处理器
//! - 管理应用生命周期
//! - 按顺序处理所有输入文件
//! - 输出全局统计信息
//!
//! ### `file_processor` - 单个文件处理器
//! - 打开输入、创建输出
//! - 遍历解析出的题目（`RecordParser`）
//! - 复用 `QuestionFlow` 处理每道题
//! - 输出单个文件的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! file_processor (处理一个文件中的 QuestionRecord 序列)
//!     ↓
//! workflow::QuestionFlow (处理单个 QuestionRecord)
//!     ↓
//! services (能力层：渲染)
//!     ↓
//! xml (基础设施：元素树与文档写出)
//! ```

pub mod batch_processor;
pub mod file_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use file_processor::{convert, output_path_for, process_file, FileStats};
