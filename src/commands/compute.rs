//! # compute 命令实现
//!
//! 直接由约化后的 8 个标量计算 Kc。
//!
//! ## 依赖关系
//! - 使用 `cli/compute.rs` 定义的参数
//! - 使用 `buckling/calculator.rs`, `commands/report.rs`

use crate::buckling::{calculator, export};
use crate::cli::compute::ComputeArgs;
use crate::commands::report;
use crate::error::Result;
use crate::models::ReducedObservables;
use crate::utils::output;

/// 执行 compute 命令
pub fn execute(args: ComputeArgs) -> Result<()> {
    let result = calculator::compute(
        args.l,
        args.l_err,
        args.lx,
        args.ly,
        args.lz,
        args.pxx,
        args.pxx_err,
        args.temperature,
    )?;

    let obs = ReducedObservables {
        l: args.l,
        l_err: args.l_err,
        lx: args.lx,
        ly: args.ly,
        lz: args.lz,
        p_xx: args.pxx,
        p_xx_err: args.pxx_err,
        temperature: args.temperature,
    };

    if args.verbose {
        report::print_observables(&obs, None);
    }

    if let Some(ref path) = args.csv {
        export::to_csv(&obs, &result, path)?;
        if args.verbose {
            output::print_success(&format!("Results saved to '{}'", path.display()));
        }
    }

    report::print_outcome(&result, args.verbose);
    Ok(())
}
