//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别为 `info`，开启详细日志时为 `debug`；设置了 `RUST_LOG` 时以其为准。
/// 重复调用是安全的（测试中会多次调用）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `file_count`: 待转换的文件数量
pub fn log_startup(file_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库文本转换为 ILIAS 题库 XML");
    info!("📄 待转换文件数: {}", file_count);
    info!("{}", "=".repeat(60));
}

/// 记录单个文件开始转换
pub fn log_file_start(file_index: usize, total: usize, input: &str, output: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📦 [{}/{}] 正在读取 {} -> 输出到 {}", file_index, total, input, output);
}

/// 记录单个文件转换完成
///
/// # 参数
/// - `found`: 找到的题目数
/// - `written`: 写入的题目数
/// - `skipped`: 跳过的题目数
pub fn log_file_complete(found: usize, written: usize, skipped: usize) {
    info!("✓ 共找到 {} 道题目：写入 {}，跳过 {}", found, written, skipped);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(files: usize, written: usize, skipped: usize, warnings: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部转换完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📄 文件: {}", files);
    info!("✅ 写入题目: {}", written);
    info!("❌ 跳过题目: {}", skipped);
    info!("⚠️ 警告: {}", warnings);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
