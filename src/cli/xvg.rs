//! # xvg 子命令 CLI 定义
//!
//! 从已导出的 .xvg 文件计算 Kc，输入文件不会被删除。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/xvg.rs`

use super::report::ReportArgs;
use clap::Args;
use std::path::PathBuf;

/// xvg 子命令参数
#[derive(Args, Debug)]
pub struct XvgArgs {
    /// <.xvg> Box-X time series of the length simulation
    #[arg(short, long)]
    pub length: PathBuf,

    /// <.xvg> Temperature, Box-X/Y/Z and Pres-XX time series of the buckled simulation
    #[arg(short, long)]
    pub force: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}
