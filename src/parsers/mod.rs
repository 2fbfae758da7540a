//! # 解析器模块
//!
//! 提供 GROMACS 输出格式的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xvg

pub mod xvg;

pub use xvg::parse_xvg_file;
