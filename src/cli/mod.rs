//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `edr`: 从两个 GROMACS .edr 能量文件计算 Kc（调用 `gmx energy`）
//! - `xvg`: 从已导出的 .xvg 文件计算 Kc
//! - `compute`: 直接由约化后的标量计算 Kc
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: edr, xvg, compute, report

pub mod compute;
pub mod edr;
pub mod report;
pub mod xvg;

use clap::{Parser, Subcommand};

/// kcbuckle - 屈曲法膜弯曲模量计算
#[derive(Parser)]
#[command(name = "kcbuckle")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Calculate the bending modulus Kc of a buckled membrane from GROMACS simulations",
    long_about = None
)]
#[command(
    after_help = "Implements the equation derived in Hu, 2013 (doi: 10.1063/1.4808077)."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute Kc from the length and buckled-run .edr files (runs `gmx energy`)
    Edr(edr::EdrArgs),

    /// Compute Kc from .xvg files already exported by `gmx energy`
    Xvg(xvg::XvgArgs),

    /// Compute Kc directly from reduced observables (nm, bar, K)
    Compute(compute::ComputeArgs),
}
