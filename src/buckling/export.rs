//! # 结果导出
//!
//! 将约化观测量和弯曲模量写入 CSV（一行表头 + 一行数据）。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{KcError, Result};
use crate::models::{BendingResult, ReducedObservables};

use serde::Serialize;
use std::path::Path;

/// CSV 数据行
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "L_nm")]
    l: f64,
    #[serde(rename = "L_err_nm")]
    l_err: f64,
    #[serde(rename = "Lx_nm")]
    lx: f64,
    #[serde(rename = "Ly_nm")]
    ly: f64,
    #[serde(rename = "Lz_nm")]
    lz: f64,
    #[serde(rename = "P_xx_bar")]
    p_xx: f64,
    #[serde(rename = "P_xx_err_bar")]
    p_xx_err: f64,
    #[serde(rename = "T_K")]
    temperature: f64,
    #[serde(rename = "Kc_kBT")]
    modulus: f64,
    #[serde(rename = "Kc_err_kBT")]
    modulus_err: f64,
}

/// 导出为 CSV
pub fn to_csv(obs: &ReducedObservables, result: &BendingResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(KcError::CsvError)?;

    wtr.serialize(CsvRow {
        l: obs.l,
        l_err: obs.l_err,
        lx: obs.lx,
        ly: obs.ly,
        lz: obs.lz,
        p_xx: obs.p_xx,
        p_xx_err: obs.p_xx_err,
        temperature: obs.temperature,
        modulus: result.modulus,
        modulus_err: result.modulus_err,
    })?;

    wtr.flush().map_err(|e| KcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
