//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `buckling/`, `utils/`
//! - 子模块: edr, xvg, compute, report

pub mod compute;
pub mod edr;
pub mod report;
pub mod xvg;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Edr(args) => edr::execute(args),
        Commands::Xvg(args) => xvg::execute(args),
        Commands::Compute(args) => compute::execute(args),
    }
}
