//! # GROMACS `gmx energy` 调用工具
//!
//! 从 .edr 能量文件导出所需能量项到 .xvg，并管理这些中间文件的清理。
//!
//! ## 依赖关系
//! - 被 `commands/edr.rs` 使用
//! - 依赖外部 `gmx` 可执行文件

use crate::error::{KcError, Result};
use crate::utils::output;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 生成 `gmx energy` 的交互式选择输入（以 `0` 结束）
pub fn energy_selection(terms: &[&str]) -> String {
    let mut sel = terms.join("\n");
    sel.push_str("\n0\n");
    sel
}

/// 确认导出目标可写：已存在时拒绝，或在 `overwrite` 时先删除
///
/// 调用成功后目标路径不存在，之后出现的文件只可能由 `gmx` 写出。
pub fn prepare_output(xvg: &Path, overwrite: bool) -> Result<()> {
    if !xvg.exists() {
        return Ok(());
    }
    if !overwrite {
        return Err(KcError::OutputExists {
            path: xvg.display().to_string(),
        });
    }
    fs::remove_file(xvg).map_err(|e| KcError::FileWriteError {
        path: xvg.display().to_string(),
        source: e,
    })
}

/// 运行 `<gmx> energy -f <edr> -o <xvg>`
pub fn run_gmx_energy(gmx: &str, edr: &Path, xvg: &Path, terms: &[&str]) -> Result<()> {
    if !edr.exists() {
        return Err(KcError::FileNotFound {
            path: edr.display().to_string(),
        });
    }

    let command_line = format!("{} energy -f {} -o {}", gmx, edr.display(), xvg.display());

    let mut child = Command::new(gmx)
        .arg("energy")
        .arg("-f")
        .arg(edr)
        .arg("-o")
        .arg(xvg)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|_| KcError::CommandNotFound {
            command: gmx.to_string(),
        })?;

    if let Some(ref mut stdin) = child.stdin {
        stdin
            .write_all(energy_selection(terms).as_bytes())
            .map_err(|e| KcError::CommandFailed {
                command: command_line.clone(),
                stderr: e.to_string(),
            })?;
    }
    // 关闭 stdin，避免 gmx 等待更多输入
    drop(child.stdin.take());

    let out = child
        .wait_with_output()
        .map_err(|e| KcError::CommandFailed {
            command: command_line.clone(),
            stderr: e.to_string(),
        })?;

    if !out.status.success() {
        return Err(KcError::CommandFailed {
            command: command_line,
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        });
    }

    if !xvg.exists() {
        return Err(KcError::CommandFailed {
            command: command_line,
            stderr: format!("expected output '{}' was not written", xvg.display()),
        });
    }

    Ok(())
}

/// `gmx energy` 生成的中间 .xvg 文件，离开作用域时删除（除非保留）
pub struct IntermediateFiles {
    paths: Vec<PathBuf>,
    keep: bool,
}

impl IntermediateFiles {
    pub fn new(keep: bool) -> Self {
        IntermediateFiles {
            paths: Vec::new(),
            keep,
        }
    }

    /// 登记一个中间文件并返回其路径
    pub fn track(&mut self, path: PathBuf) -> PathBuf {
        self.paths.push(path.clone());
        path
    }

    pub fn is_kept(&self) -> bool {
        self.keep
    }
}

impl Drop for IntermediateFiles {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        for path in &self.paths {
            if !path.exists() {
                continue;
            }
            if let Err(e) = fs::remove_file(path) {
                output::print_warning(&format!(
                    "Could not remove intermediate file '{}': {}",
                    path.display(),
                    e
                ));
            }
        }
    }
}
