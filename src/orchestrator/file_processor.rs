//! 单个文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责转换单个题库文件，是文件级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **逐行解析**：用 `RecordParser` 把输入切分为题目
//! 2. **流程调度**：每道题交给 `QuestionFlow` 渲染并写入
//! 3. **文档拼装**：输出文档的头尾由 `PoolWriter` 负责
//! 4. **统计输出**：记录写入/跳过/警告数量

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::parser::{ParseDiagnostic, RecordParser};
use crate::utils::logging;
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow};
use crate::xml::PoolWriter;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 文件处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileStats {
    /// 解析出的题目数
    pub found: usize,
    pub written: usize,
    pub skipped: usize,
    /// 分数总和不等于 1 的题目数
    pub warnings: usize,
    /// 未以空行结束而被丢弃的题目数
    pub dropped: usize,
}

/// 输出文件路径：在输入文件名后追加后缀
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// 从任意输入读取题库文本，把完整的题库文档写入 `output`
///
/// # 参数
/// - `input`: 逐行读取的题库文本
/// - `output`: 文档写入目标
/// - `file_name`: 输入文件名（仅用于日志）
///
/// # 返回
/// 返回写入目标和统计信息
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: W,
    file_name: &str,
    flow: &QuestionFlow,
    config: &Config,
) -> AppResult<(W, FileStats)> {
    let mut parser = RecordParser::new(input.lines(), config.id_prefix.as_str());
    let mut pool = PoolWriter::new(output, config);
    let mut stats = FileStats::default();

    pool.begin()?;

    for record in parser.by_ref() {
        let record = record.map_err(|e| AppError::file_read_failed(file_name, e))?;
        stats.found += 1;

        let ctx = QuestionCtx::new(file_name, stats.found);
        match flow.run(&record, &ctx, &mut pool)? {
            ProcessResult::Written => stats.written += 1,
            ProcessResult::WrittenWithWarning => {
                stats.written += 1;
                stats.warnings += 1;
            }
            ProcessResult::Skipped => stats.skipped += 1,
        }
    }

    stats.dropped = parser
        .diagnostics()
        .iter()
        .filter(|d| {
            matches!(
                d,
                ParseDiagnostic::UnterminatedBlock { .. } | ParseDiagnostic::RestartedBlock { .. }
            )
        })
        .count();

    let output = pool.finish()?;
    Ok((output, stats))
}

/// 转换单个文件，输出到同目录下追加后缀的文件
///
/// 输入不存在或无法读写时返回错误，调用方应中止整个运行。
pub fn process_file(
    input: &Path,
    file_index: usize,
    total: usize,
    flow: &QuestionFlow,
    config: &Config,
) -> Result<FileStats> {
    let output = output_path_for(input, &config.output_suffix);
    logging::log_file_start(
        file_index,
        total,
        &input.display().to_string(),
        &output.display().to_string(),
    );

    if !input.exists() {
        return Err(AppError::from(FileError::NotFound {
            path: input.display().to_string(),
        }))
        .context("无法转换文件");
    }

    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|e| AppError::file_read_failed(input.display().to_string(), e))?;
    let writer = File::create(&output)
        .map(BufWriter::new)
        .map_err(|e| AppError::file_write_failed(output.display().to_string(), e))?;

    let file_name = input
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let (_, stats) = convert(reader, writer, &file_name, flow, config)
        .with_context(|| format!("转换失败: {}", input.display()))?;

    logging::log_file_complete(stats.found, stats.written, stats.skipped);
    Ok(stats)
}
