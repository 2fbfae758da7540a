//! # 数据模型模块
//!
//! 定义模拟时间序列、约化观测量和弯曲模量结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `buckling/` 和 `commands/` 使用
//! - 子模块: series, observables

pub mod observables;
pub mod series;

pub use observables::{BendingResult, ReducedObservables};
pub use series::{ForceRun, LengthRun, SampleSeries};
