//! # edr 命令实现
//!
//! 调用 `gmx energy` 从两个 .edr 文件导出时间序列，再计算 Kc。
//!
//! ## 流程
//! 1. 长度模拟: `Box-X` → lx.xvg
//! 2. 屈曲模拟: `Temperature, Box-X, Box-Y, Box-Z, Pres-XX` → force.xvg
//! 3. 约化 + 计算 + 输出
//! 4. 删除中间 .xvg（`--keep` 时保留）
//!
//! ## 依赖关系
//! - 使用 `cli/edr.rs` 定义的参数
//! - 使用 `utils/gmx.rs`, `utils/progress.rs`, `commands/xvg.rs`, `commands/report.rs`

use crate::cli::edr::EdrArgs;
use crate::commands::{report, xvg};
use crate::error::{KcError, Result};
use crate::parsers::xvg::{FORCE_TERMS, LENGTH_TERMS};
use crate::utils::gmx::{self, IntermediateFiles};
use crate::utils::{output, progress};

use std::fs;

/// 长度模拟导出文件名
pub const LENGTH_XVG: &str = "lx.xvg";

/// 屈曲模拟导出文件名
pub const FORCE_XVG: &str = "force.xvg";

/// 执行 edr 命令
pub fn execute(args: EdrArgs) -> Result<()> {
    let verbose = args.report.verbose;

    if verbose {
        output::print_header("Bending Modulus from Buckled Membrane");
    }

    fs::create_dir_all(&args.out_dir).map_err(|e| KcError::FileWriteError {
        path: args.out_dir.display().to_string(),
        source: e,
    })?;

    let lx_xvg = args.out_dir.join(LENGTH_XVG);
    let force_xvg = args.out_dir.join(FORCE_XVG);

    // 先处理已有文件，再登记清理，避免删除非本次写出的文件
    gmx::prepare_output(&lx_xvg, args.overwrite)?;
    gmx::prepare_output(&force_xvg, args.overwrite)?;

    let mut files = IntermediateFiles::new(args.keep);
    files.track(lx_xvg.clone());
    files.track(force_xvg.clone());

    let pb = progress::create_spinner("Running gmx energy on the length run...", verbose);
    let exported = gmx::run_gmx_energy(&args.gmx, &args.length, &lx_xvg, &LENGTH_TERMS)
        .and_then(|_| {
            pb.set_message("Running gmx energy on the buckled run...");
            gmx::run_gmx_energy(&args.gmx, &args.force, &force_xvg, &FORCE_TERMS)
        });
    pb.finish_and_clear();
    exported?;

    let (length, force) = xvg::load_runs(&lx_xvg, &force_xvg, verbose)?;
    report::report_runs(&length, &force, &args.report)?;

    if files.is_kept() {
        output::print_done(&format!(
            "gmx energy outputs for length and force simulations saved as '{}' and '{}', respectively.",
            lx_xvg.display(),
            force_xvg.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::report::ReportArgs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn edr_args(dir: &Path, gmx: &str, keep: bool, overwrite: bool) -> EdrArgs {
        let length = dir.join("length.edr");
        let force = dir.join("force.edr");
        fs::write(&length, b"").unwrap();
        fs::write(&force, b"").unwrap();

        EdrArgs {
            length,
            force,
            gmx: gmx.to_string(),
            out_dir: dir.join("out"),
            keep,
            overwrite,
            report: ReportArgs {
                verbose: false,
                solvent_pressure: 1.0,
                csv: Some(dir.join("kc.csv")),
                plot: None,
            },
        }
    }

    #[test]
    fn test_edr_without_gmx_cleans_up() {
        let dir = TempDir::new().unwrap();
        let args = edr_args(dir.path(), "kcbuckle-no-such-gmx", false, false);
        let out_dir = args.out_dir.clone();

        let err = execute(args).unwrap_err();
        assert!(matches!(err, KcError::CommandNotFound { .. }));
        assert!(out_dir.is_dir());
        assert!(!out_dir.join(LENGTH_XVG).exists());
    }

    #[test]
    fn test_edr_keeps_existing_user_file() {
        let dir = TempDir::new().unwrap();
        let args = edr_args(dir.path(), "kcbuckle-no-such-gmx", false, false);
        fs::create_dir_all(&args.out_dir).unwrap();
        let user_lx = args.out_dir.join(LENGTH_XVG);
        fs::write(&user_lx, "user data").unwrap();

        let err = execute(args).unwrap_err();
        assert!(matches!(err, KcError::OutputExists { .. }));
        assert_eq!(fs::read_to_string(&user_lx).unwrap(), "user data");
    }

    /// 写一个模拟 `gmx energy` 的脚本：记录 stdin 选择，按选择写出 .xvg
    #[cfg(unix)]
    fn fake_gmx(dir: &Path) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let log = dir.join("selection.log");
        let script = dir.join("fake-gmx");
        let body = r##"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  shift
done
sel=$(cat)
printf '%s\n--\n' "$sel" >> "LOG_PATH"
case "$sel" in
  *Pres-XX*)
    cat > "$out" <<'XVG'
# gmx energy
@ s0 legend "Temperature"
@ s1 legend "Box-X"
@ s2 legend "Box-Y"
@ s3 legend "Box-Z"
@ s4 legend "Pres-XX"
0 300.0 28.5 10.0 10.0 5.95
10 300.0 28.5 10.0 10.0 6.05
XVG
    ;;
  *)
    cat > "$out" <<'XVG'
@ s0 legend "Box-X"
0 29.95
10 30.05
XVG
    ;;
esac
"##
        .replace("LOG_PATH", log.to_str().unwrap());

        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        (script, log)
    }

    #[cfg(unix)]
    fn csv_row(path: &Path) -> Vec<f64> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .nth(1)
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_edr_with_gmx_script() {
        let dir = TempDir::new().unwrap();
        let (script, log) = fake_gmx(dir.path());
        let args = edr_args(dir.path(), script.to_str().unwrap(), false, false);
        let out_dir = args.out_dir.clone();
        let csv = args.report.csv.clone().unwrap();

        execute(args).unwrap();

        // 两次调用的能量项选择都经 stdin 传给 gmx
        let selections = fs::read_to_string(&log).unwrap();
        assert!(selections.contains("Box-X\n0\n--"));
        assert!(selections.contains("Temperature\nBox-X\nBox-Y\nBox-Z\nPres-XX\n0\n--"));

        // L = 30, L_err = 0.05, P_xx = 6 - 1, P_xx_err = 0.1
        let row = csv_row(&csv);
        assert!(((row[0] - 30.0) / 30.0).abs() < 1e-12);
        assert!(((row[5] - 5.0) / 5.0).abs() < 1e-9);
        assert!(((row[8] - 26.715093133104247) / 26.715093133104247).abs() < 1e-9);
        assert!(((row[9] - 0.5403098109964968) / 0.5403098109964968).abs() < 1e-9);

        assert!(!out_dir.join(LENGTH_XVG).exists());
        assert!(!out_dir.join(FORCE_XVG).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_edr_keep_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let (script, _) = fake_gmx(dir.path());

        let args = edr_args(dir.path(), script.to_str().unwrap(), true, false);
        let out_dir = args.out_dir.clone();
        execute(args).unwrap();
        assert!(out_dir.join(LENGTH_XVG).exists());
        assert!(out_dir.join(FORCE_XVG).exists());

        // 再次运行：未加 --overwrite 时拒绝覆盖保留的输出
        let again = edr_args(dir.path(), script.to_str().unwrap(), true, false);
        assert!(matches!(execute(again), Err(KcError::OutputExists { .. })));
        assert!(out_dir.join(FORCE_XVG).exists());

        let replace = edr_args(dir.path(), script.to_str().unwrap(), false, true);
        execute(replace).unwrap();
        assert!(!out_dir.join(LENGTH_XVG).exists());
        assert!(!out_dir.join(FORCE_XVG).exists());
    }
}
