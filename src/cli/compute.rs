//! # compute 子命令 CLI 定义
//!
//! 直接由约化后的标量（nm, bar, K）计算 Kc。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compute.rs`

use clap::Args;
use std::path::PathBuf;

/// compute 子命令参数
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Mean box-X length of the length simulation (nm)
    #[arg(long)]
    pub l: f64,

    /// Standard deviation of the box-X length (nm)
    #[arg(long, allow_hyphen_values = true)]
    pub l_err: f64,

    /// Mean box-X length of the buckled simulation (nm)
    #[arg(long)]
    pub lx: f64,

    /// Mean box-Y length of the buckled simulation (nm)
    #[arg(long)]
    pub ly: f64,

    /// Mean box-Z length of the buckled simulation (nm)
    #[arg(long)]
    pub lz: f64,

    /// Mean Pres-XX with the solvent pressure already subtracted (bar)
    #[arg(long, allow_hyphen_values = true)]
    pub pxx: f64,

    /// Pres-XX error estimate (bar)
    #[arg(long, allow_hyphen_values = true)]
    pub pxx_err: f64,

    /// Mean temperature of the buckled simulation (K)
    #[arg(short, long)]
    pub temperature: f64,

    /// Print a human readable report instead of the raw (Kc, Kc_err) tuple
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Also write the inputs and Kc to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
