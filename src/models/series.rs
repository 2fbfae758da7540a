//! # 时间序列数据模型
//!
//! 存储从 GROMACS 能量输出中提取的单个观测量序列，以及两次模拟的序列集合。
//!
//! ## 依赖关系
//! - 被 `parsers/xvg.rs` 构造
//! - 被 `buckling/reduce.rs`, `buckling/plot.rs` 使用

use crate::error::{KcError, Result};

/// 单个观测量的采样序列
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// 观测量名称 (e.g. "Box-X", "Pres-XX")
    pub name: String,

    /// 采样值（模拟原始单位）
    pub values: Vec<f64>,
}

impl SampleSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        SampleSeries {
            name: name.into(),
            values,
        }
    }

    /// 算术平均
    pub fn mean(&self) -> Result<f64> {
        mean_of(&self.values).ok_or_else(|| self.empty_error())
    }

    /// 总体标准差（除以 N）
    pub fn std_dev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let var = self
            .values
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / self.values.len() as f64;
        Ok(var.sqrt())
    }

    /// 前后两半均值之差的绝对值
    ///
    /// 在 `n / 2` 处切分，奇数长度时多出的样本落在后半段。
    pub fn split_half_drift(&self) -> Result<f64> {
        let (first, second) = self.halves();
        match (mean_of(first), mean_of(second)) {
            (Some(a), Some(b)) => Ok((a - b).abs()),
            _ => Err(self.empty_error()),
        }
    }

    /// 前后两半切片
    pub fn halves(&self) -> (&[f64], &[f64]) {
        self.values.split_at(self.values.len() / 2)
    }

    fn empty_error(&self) -> KcError {
        KcError::EmptySeries {
            name: self.name.clone(),
        }
    }
}

fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// 长度模拟（膜只在 x 方向自由）的序列
#[derive(Debug, Clone)]
pub struct LengthRun {
    pub box_x: SampleSeries,
}

/// 屈曲模拟（膜在 x 方向受压屈曲）的序列
#[derive(Debug, Clone)]
pub struct ForceRun {
    /// 时间列 (ps)
    pub time: SampleSeries,
    pub temperature: SampleSeries,
    pub box_x: SampleSeries,
    pub box_y: SampleSeries,
    pub box_z: SampleSeries,
    pub pres_xx: SampleSeries,
}
