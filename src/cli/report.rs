//! # 结果输出相关的公共参数
//!
//! 被 `edr` 和 `xvg` 子命令通过 `#[command(flatten)]` 共用。
//!
//! ## 依赖关系
//! - 被 `cli/edr.rs`, `cli/xvg.rs` 使用
//! - 参数传递给 `commands/report.rs`

use crate::buckling::DEFAULT_SOLVENT_PRESSURE;
use clap::Args;
use std::path::PathBuf;

/// 输出与约化参数
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Print a human readable report instead of the raw (Kc, Kc_err) tuple
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Solvent (water) pressure in bar subtracted from the mean Pres-XX
    #[arg(long, default_value_t = DEFAULT_SOLVENT_PRESSURE, allow_hyphen_values = true)]
    pub solvent_pressure: f64,

    /// Also write the reduced observables and Kc to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Plot the Pres-XX drift of the buckled run (.png or .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}
