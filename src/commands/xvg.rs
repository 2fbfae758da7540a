//! # xvg 命令实现
//!
//! 读取已导出的 .xvg 文件并计算 Kc。
//!
//! ## 依赖关系
//! - 使用 `cli/xvg.rs` 定义的参数
//! - 使用 `parsers/xvg.rs`, `commands/report.rs`

use crate::cli::xvg::XvgArgs;
use crate::commands::report;
use crate::error::Result;
use crate::models::{ForceRun, LengthRun};
use crate::parsers::parse_xvg_file;
use crate::utils::output;

use std::path::Path;

/// 执行 xvg 命令
pub fn execute(args: XvgArgs) -> Result<()> {
    if args.report.verbose {
        output::print_header("Bending Modulus from Buckled Membrane");
    }

    let (length, force) = load_runs(&args.length, &args.force, args.report.verbose)?;
    report::report_runs(&length, &force, &args.report)
}

/// 读取长度模拟与屈曲模拟的 .xvg
pub fn load_runs(length_xvg: &Path, force_xvg: &Path, verbose: bool) -> Result<(LengthRun, ForceRun)> {
    let length_table = parse_xvg_file(length_xvg)?;
    let force_table = parse_xvg_file(force_xvg)?;

    if verbose {
        output::print_info(&format!(
            "Read {} rows from '{}' and {} rows from '{}'",
            length_table.num_rows(),
            length_xvg.display(),
            force_table.num_rows(),
            force_xvg.display()
        ));
    }

    Ok((length_table.into_length_run()?, force_table.into_force_run()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::report::ReportArgs;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_xvg_pipeline_writes_csv() {
        let dir = TempDir::new().unwrap();
        let lx = dir.path().join("lx.xvg");
        let force = dir.path().join("force.xvg");
        let csv = dir.path().join("kc.csv");

        fs::write(&lx, "@ s0 legend \"Box-X\"\n0 29.95\n10 30.05\n").unwrap();
        fs::write(
            &force,
            "0 300.0 28.5 10.0 10.0 5.9\n10 300.0 28.5 10.0 10.0 6.1\n",
        )
        .unwrap();

        let args = XvgArgs {
            length: lx.clone(),
            force: force.clone(),
            report: ReportArgs {
                verbose: false,
                solvent_pressure: 1.0,
                csv: Some(csv.clone()),
                plot: None,
            },
        };
        execute(args).unwrap();

        // 输入文件不删除
        assert!(lx.exists());
        assert!(force.exists());

        let text = fs::read_to_string(&csv).unwrap();
        let row: Vec<f64> = text
            .lines()
            .nth(1)
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        // P_xx = 6.0 - 1.0, P_xx_err = |5.9 - 6.1|
        assert!((row[5] - 5.0).abs() < 1e-9);
        assert!((row[6] - 0.2).abs() < 1e-9);
        assert!(row[8].is_finite());
        assert!(row[9] >= 0.0);
    }

    #[test]
    fn test_xvg_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_runs(
            &dir.path().join("lx.xvg"),
            &dir.path().join("force.xvg"),
            false,
        );
        assert!(result.is_err());
    }
}
