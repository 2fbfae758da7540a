//! # 屈曲理论级数系数
//!
//! Hu, 2013 (doi: 10.1063/1.4808077) 给出的应变截断 Taylor 级数系数。
//! 系数为理论推导的固定常数，不在运行时计算。
//!
//! ## 依赖关系
//! - 被 `buckling/calculator.rs` 使用
//! - 无外部模块依赖

/// 级数项数
pub const SERIES_TERMS: usize = 11;

/// b_i：弯曲系数修正
pub const B_COEFFS: [f64; SERIES_TERMS] = [
    1.0,
    0.5,
    0.28125,
    0.1640625,
    0.0970458984375,
    0.05767822265625,
    0.034286499023438,
    0.020331859588623,
    0.012007629498839,
    0.007054503075778,
    0.004119324556086,
];

/// d_i：力修正项
pub const D_COEFFS: [f64; SERIES_TERMS] = [
    1.0,
    0.625,
    0.421875,
    0.2880859375,
    0.1959228515625,
    0.13201904296875,
    0.087979316711426,
    0.057950466871262,
    0.037723844870925,
    0.024270858848468,
    0.01543510783813,
];

/// 计算 Σ c_i · strain^i
///
/// 逐项直接求幂（不用 Horner），与参考数值保持一致。
pub fn strain_series(coeffs: &[f64; SERIES_TERMS], strain: f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * strain.powi(i as i32))
        .sum()
}
