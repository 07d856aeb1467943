//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 渲染（按题型分派）
//! 2. 输出诊断信息（分数统计 / 警告 / 错误）
//! 3. 写入题库文档

use std::io::Write;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::question::QuestionRecord;
use crate::services::QuestionRenderer;
use crate::utils::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;
use crate::xml::PoolWriter;

/// 题目处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已写入
    Written,
    /// 已写入，但分数总和不等于 1
    WrittenWithWarning,
    /// 跳过（题型未知、没有空或选项）
    Skipped,
}

/// 题目处理流程
///
/// - 编排单道题目的处理流程
/// - 不持有输出资源，写入目标由调用方传入
/// - 渲染失败只跳过当前题目，不中断整个文件
pub struct QuestionFlow {
    renderer: QuestionRenderer,
    verbose_logging: bool,
}

impl QuestionFlow {
    /// 创建新的题目处理流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            renderer: QuestionRenderer::new(config)?,
            verbose_logging: config.verbose_logging,
        })
    }

    pub fn run<W: Write>(
        &self,
        record: &QuestionRecord,
        ctx: &QuestionCtx,
        pool: &mut PoolWriter<W>,
    ) -> AppResult<ProcessResult> {
        info!("{} {}", ctx, record);

        let rendered = match self.renderer.render(record) {
            Ok(rendered) => rendered,
            Err(e) => {
                error!("{} ❌ {}，跳过此题", ctx, e);
                return Ok(ProcessResult::Skipped);
            }
        };

        info!("{}    {}", ctx, rendered.report);
        if self.verbose_logging {
            debug!("{}    正文: {}", ctx, truncate_text(&record.body, 80));
            for rule in &rendered.rules {
                debug!(
                    "{}    {} {:?} {} → {:.2}",
                    ctx,
                    rule.respident,
                    rule.condition,
                    rule.value,
                    rule.points
                );
            }
        }

        pool.write_item(record, &rendered)?;

        if rendered.report.has_point_mismatch() {
            warn!(
                "{} ⚠️ 分数分配异常：本题共分配了 {:.2} 分（应为 1 分）",
                ctx, rendered.report.points_assigned
            );
            return Ok(ProcessResult::WrittenWithWarning);
        }

        Ok(ProcessResult::Written)
    }
}
