//! 批量文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责按顺序转换命令行给出的所有文件。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建可复用的 `QuestionFlow`
//! 2. **顺序处理**：逐个文件委托 `file_processor` 转换
//! 3. **失败即停**：某个文件读写失败时立即返回错误，不再处理后续文件
//! 4. **全局统计**：汇总所有文件的处理结果

use crate::config::Config;
use crate::orchestrator::file_processor::{self, FileStats};
use crate::utils::logging;
use crate::workflow::QuestionFlow;
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

/// 全部文件的处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub files: usize,
    pub written: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub dropped: usize,
}

impl ProcessingStats {
    fn add(&mut self, stats: &FileStats) {
        self.files += 1;
        self.written += stats.written;
        self.skipped += stats.skipped;
        self.warnings += stats.warnings;
        self.dropped += stats.dropped;
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuestionFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let flow = QuestionFlow::new(&config)?;
        Ok(Self { config, flow })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行应用主逻辑
    pub fn run(&self, files: &[PathBuf]) -> Result<ProcessingStats> {
        logging::log_startup(files.len());

        let mut stats = ProcessingStats::default();
        for (index, input) in files.iter().enumerate() {
            let file_stats =
                file_processor::process_file(input, index + 1, files.len(), &self.flow, &self.config)?;
            stats.add(&file_stats);
        }

        if stats.dropped > 0 {
            warn!("⚠️ 有 {} 道题目因未以空行结束而被丢弃", stats.dropped);
        }
        logging::print_final_stats(stats.files, stats.written, stats.skipped, stats.warnings);

        Ok(stats)
    }
}
