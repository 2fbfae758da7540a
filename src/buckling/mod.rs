//! # 屈曲法弯曲模量模块
//!
//! 由屈曲膜模拟计算弯曲模量 Kc（Hu, 2013, doi: 10.1063/1.4808077）。
//!
//! ## 子模块
//! - `coefficients`: 应变级数系数表
//! - `calculator`: 弯曲模量及误差计算
//! - `reduce`: 时间序列约化
//! - `export`: CSV 导出
//! - `plot`: Pres-XX 漂移图
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod calculator;
pub mod coefficients;
pub mod export;
pub mod plot;
pub mod reduce;

pub use calculator::{BendingCalculator, BendingTerms};
pub use reduce::{reduce, DEFAULT_SOLVENT_PRESSURE};
