//! # 弯曲模量计算器
//!
//! 由屈曲膜的几何与 Pres-XX 计算弯曲模量 Kc（kBT 单位）及其误差。
//!
//! ## 算法
//! 1. 单位换算：nm → m, bar → Pa
//! 2. strain = (L - Lx) / L
//! 3. 弯曲系数 coef_bi = L² / (4π² · Ly · Σ b_i strain^i)
//! 4. 力 Fx = Ly · Lz · P_xx，加上热涨落修正 -(3 kB T)/(2L) · Σ d_i strain^i
//! 5. Kc = coef_bi · Fx_corrected / (kB T)
//! 6. 一阶误差传递（只考虑 L 与 P_xx 的误差）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `buckling/coefficients.rs`, `models/observables.rs`

use crate::buckling::coefficients::{strain_series, B_COEFFS, D_COEFFS};
use crate::error::{KcError, Result};
use crate::models::{BendingResult, ReducedObservables};

use std::f64::consts::PI;

/// Boltzmann 常数 (J/K)
pub const BOLTZMANN: f64 = 1.3806488e-23;

/// nm → m
pub const NM_TO_M: f64 = 1e-9;

/// bar → Pa
pub const BAR_TO_PA: f64 = 1e5;

/// 计算中间量（SI 单位）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendingTerms {
    pub strain: f64,
    pub sum_b: f64,
    pub sum_d: f64,
    /// m，乘力得 J
    pub coef_bi: f64,
    /// N
    pub fx: f64,
    /// N
    pub fx_corrected: f64,
    /// J
    pub kappa_j: f64,
    pub result: BendingResult,
}

/// 弯曲模量计算器
#[derive(Debug, Clone, Copy, Default)]
pub struct BendingCalculator;

impl BendingCalculator {
    pub fn new() -> Self {
        BendingCalculator
    }

    /// 计算弯曲模量及误差
    pub fn compute(&self, obs: &ReducedObservables) -> Result<BendingResult> {
        self.compute_terms(obs).map(|terms| terms.result)
    }

    /// 计算弯曲模量，同时返回全部中间量
    pub fn compute_terms(&self, obs: &ReducedObservables) -> Result<BendingTerms> {
        obs.validate()?;

        let l = obs.l * NM_TO_M;
        let l_err = obs.l_err * NM_TO_M;
        let lx = obs.lx * NM_TO_M;
        let ly = obs.ly * NM_TO_M;
        let lz = obs.lz * NM_TO_M;
        let p_xx = obs.p_xx * BAR_TO_PA;
        let p_xx_err = obs.p_xx_err * BAR_TO_PA;
        let t = obs.temperature;

        let strain = (l - lx) / l;

        let sum_b = strain_series(&B_COEFFS, strain);
        if sum_b == 0.0 || !sum_b.is_finite() {
            return Err(KcError::Domain(format!(
                "strain series sum is degenerate (sum_b = {}, strain = {})",
                sum_b, strain
            )));
        }
        let coef_bi = l * l / (4.0 * PI * PI * ly * sum_b);

        // 力及热涨落修正
        let fx = ly * lz * p_xx;
        let sum_d = strain_series(&D_COEFFS, strain);
        let coef_term = -(3.0 * BOLTZMANN * t) / (2.0 * l);
        let fx_corrected = fx + coef_term * sum_d;

        let kappa_j = coef_bi * fx_corrected;
        let modulus = kappa_j / (BOLTZMANN * t);

        // 误差传递
        let coef_error = coef_bi * ly * lz / (l * l);
        let err_l2 = 2f64.sqrt() * l * l_err;
        let err_l2_pxx =
            (p_xx * p_xx * err_l2 * err_l2 + l * l * l * l * p_xx_err * p_xx_err).sqrt();
        let modulus_err = coef_error * err_l2_pxx / (t * BOLTZMANN);

        Ok(BendingTerms {
            strain,
            sum_b,
            sum_d,
            coef_bi,
            fx,
            fx_corrected,
            kappa_j,
            result: BendingResult {
                modulus,
                modulus_err,
            },
        })
    }
}

/// 8 个标量输入的便捷入口（nm, bar, K）
#[allow(clippy::too_many_arguments)]
pub fn compute(
    l: f64,
    l_err: f64,
    lx: f64,
    ly: f64,
    lz: f64,
    p_xx: f64,
    p_xx_err: f64,
    temperature: f64,
) -> Result<BendingResult> {
    BendingCalculator::new().compute(&ReducedObservables {
        l,
        l_err,
        lx,
        ly,
        lz,
        p_xx,
        p_xx_err,
        temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReducedObservables {
        ReducedObservables {
            l: 30.0,
            l_err: 0.05,
            lx: 28.5,
            ly: 10.0,
            lz: 10.0,
            p_xx: 5.0,
            p_xx_err: 0.1,
            temperature: 300.0,
        }
    }

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_reference_scenario() {
        let terms = BendingCalculator::new().compute_terms(&reference()).unwrap();

        assert!((terms.strain - 0.05).abs() < 1e-12);
        assert!((terms.sum_b - 1.0257242579259038).abs() < 1e-12);
        assert!((terms.sum_d - 1.0323419654374335).abs() < 1e-12);
        assert!(rel_close(terms.coef_bi, 2.2225531026851107e-09, 1e-10));
        assert!(rel_close(terms.fx, 5.0e-11, 1e-12));
        assert!(rel_close(terms.fx_corrected, 4.9786204745634385e-11, 1e-10));

        // 独立计算的参考值
        assert!(rel_close(terms.result.modulus, 26.715093133104247, 1e-9));
        assert!(rel_close(terms.result.modulus_err, 0.5403098109964968, 1e-9));
    }

    #[test]
    fn test_scalar_entry_matches_struct_entry() {
        let r = compute(30.0, 0.05, 28.5, 10.0, 10.0, 5.0, 0.1, 300.0).unwrap();
        let s = BendingCalculator::new().compute(&reference()).unwrap();
        assert_eq!(r, s);
    }

    #[test]
    fn test_deterministic() {
        let calc = BendingCalculator::new();
        let a = calc.compute(&reference()).unwrap();
        let b = calc.compute(&reference()).unwrap();
        assert_eq!(a.modulus.to_bits(), b.modulus.to_bits());
        assert_eq!(a.modulus_err.to_bits(), b.modulus_err.to_bits());
    }

    #[test]
    fn test_zero_strain() {
        let mut obs = reference();
        obs.lx = obs.l;
        let terms = BendingCalculator::new().compute_terms(&obs).unwrap();

        assert_eq!(terms.strain, 0.0);
        assert_eq!(terms.sum_b, 1.0);
        assert_eq!(terms.sum_d, 1.0);

        let l = obs.l * NM_TO_M;
        let ly = obs.ly * NM_TO_M;
        assert_eq!(terms.coef_bi, l * l / (4.0 * PI * PI * ly * 1.0));
        assert!(rel_close(terms.result.modulus, 27.406005621371637, 1e-9));
    }

    #[test]
    fn test_error_non_negative_for_negative_inputs() {
        let mut obs = reference();
        obs.l_err = -0.05;
        obs.p_xx_err = -0.1;
        let r = BendingCalculator::new().compute(&obs).unwrap();
        assert!(r.modulus_err >= 0.0);
        assert!(rel_close(r.modulus_err, 0.5403098109964968, 1e-9));
    }

    #[test]
    fn test_pressure_scaling() {
        let calc = BendingCalculator::new();
        let base = calc.compute(&reference()).unwrap();

        let mut doubled = reference();
        doubled.p_xx *= 2.0;
        doubled.p_xx_err *= 2.0;
        let r = calc.compute(&doubled).unwrap();

        // 误差严格线性；模量只差一个与压力无关的修正项
        assert!(rel_close(r.modulus_err, 2.0 * base.modulus_err, 1e-12));
        assert!(rel_close(r.modulus, 53.544908008124246, 1e-9));
        assert!(((r.modulus / base.modulus) - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_boundary_domain_errors() {
        let calc = BendingCalculator::new();

        let mutations: [fn(&mut ReducedObservables); 5] = [
            |o| o.l = 0.0,
            |o| o.ly = 0.0,
            |o| o.temperature = 0.0,
            |o| o.p_xx = f64::NAN,
            |o| o.lz = f64::INFINITY,
        ];

        for mutate in mutations {
            let mut obs = reference();
            mutate(&mut obs);
            assert!(matches!(calc.compute(&obs), Err(KcError::Domain(_))));
        }
    }
}
