//! # 约化观测量与弯曲模量结果
//!
//! `ReducedObservables` 是两次模拟序列约化后的标量集合，
//! `BendingResult` 是最终的弯曲模量及误差（单位 kBT）。
//!
//! ## 依赖关系
//! - 被 `buckling/` 和 `commands/` 使用

use crate::error::{KcError, Result};
use std::fmt;

/// 约化后的观测量（nm, bar, K）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedObservables {
    /// 长度模拟 Box-X 均值 (nm)
    pub l: f64,

    /// 长度模拟 Box-X 标准差 (nm)
    pub l_err: f64,

    /// 屈曲模拟 Box-X 均值 (nm)
    pub lx: f64,

    /// 屈曲模拟 Box-Y 均值 (nm)
    pub ly: f64,

    /// 屈曲模拟 Box-Z 均值 (nm)
    pub lz: f64,

    /// Pres-XX 均值，已扣除溶剂压力 (bar)
    pub p_xx: f64,

    /// Pres-XX 误差估计 (bar)
    pub p_xx_err: f64,

    /// 屈曲模拟温度均值 (K)
    pub temperature: f64,
}

impl ReducedObservables {
    /// 检查输入是否满足计算前提
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("L", self.l),
            ("L_err", self.l_err),
            ("Lx", self.lx),
            ("Ly", self.ly),
            ("Lz", self.lz),
            ("P_xx", self.p_xx),
            ("P_xx_err", self.p_xx_err),
            ("T", self.temperature),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(KcError::Domain(format!("{} is not finite ({})", name, value)));
        }

        let positive = [
            ("L", self.l),
            ("Lx", self.lx),
            ("Ly", self.ly),
            ("Lz", self.lz),
            ("T", self.temperature),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(KcError::Domain(format!(
                "{} must be strictly positive (got {})",
                name, value
            )));
        }

        Ok(())
    }
}

/// 弯曲模量结果 (kBT)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendingResult {
    pub modulus: f64,
    pub modulus_err: f64,
}

impl BendingResult {
    /// 原始元组输出 `(modulus, modulus_err)`
    pub fn raw(&self) -> String {
        format!("({:?}, {:?})", self.modulus, self.modulus_err)
    }
}

impl fmt::Display for BendingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kc= {:.3} ± {:.3} kBT", self.modulus, self.modulus_err)
    }
}
