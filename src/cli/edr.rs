//! # edr 子命令 CLI 定义
//!
//! 从长度模拟和屈曲模拟的 .edr 文件计算 Kc。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/edr.rs`

use super::report::ReportArgs;
use clap::Args;
use std::path::PathBuf;

/// edr 子命令参数
#[derive(Args, Debug)]
pub struct EdrArgs {
    /// <.edr> GROMACS energy file from the system length simulation
    #[arg(short, long)]
    pub length: PathBuf,

    /// <.edr> GROMACS energy file from the force exerted by the buckle
    #[arg(short, long)]
    pub force: PathBuf,

    /// GROMACS executable used to run `energy`
    #[arg(long, env = "KCBUCKLE_GMX", default_value = "gmx")]
    pub gmx: String,

    /// Directory for the intermediate lx.xvg and force.xvg files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Keep the intermediate `gmx energy` outputs instead of deleting them
    #[arg(short, long, default_value_t = false)]
    pub keep: bool,

    /// Replace lx.xvg / force.xvg left in the output directory by an earlier run
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}
