use anyhow::Result;
use clap::Parser;
use question_pool::utils::logging;
use question_pool::{App, Config};
use std::path::PathBuf;

/// 把纯文本题库转换为 ILIAS 题库 XML
#[derive(Parser, Debug)]
#[command(name = "question-pool", version)]
#[command(about = "Create an ILIAS question pool from a text file", long_about = None)]
struct Args {
    /// 一个或多个题库文本文件
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// TOML 配置文件
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 输出文件后缀（覆盖配置）
    #[arg(long, value_name = "SUFFIX")]
    suffix: Option<String>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(suffix) = args.suffix {
        config.output_suffix = suffix;
    }
    config.verbose_logging |= args.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    if args.files.is_empty() {
        println!("Error! Give me one or more input files as parameter!");
        println!("Usage: question-pool [OPTIONS] <FILE>...");
        return Ok(());
    }

    // 初始化并运行应用
    App::initialize(config)?.run(&args.files)?;

    Ok(())
}
