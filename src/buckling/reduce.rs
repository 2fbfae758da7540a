//! # 时间序列约化
//!
//! 把长度模拟和屈曲模拟的序列约化为 `ReducedObservables`。
//!
//! ## 规则
//! - L, L_err: 长度模拟 Box-X 的均值与总体标准差
//! - Lx, Ly, Lz, T: 屈曲模拟的均值
//! - P_xx: Pres-XX 均值减去溶剂压力
//! - P_xx_err: Pres-XX 前后两半均值之差（漂移估计）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/series.rs`, `models/observables.rs`

use crate::error::Result;
use crate::models::{ForceRun, LengthRun, ReducedObservables};

/// 默认溶剂（水）压力 (bar)
pub const DEFAULT_SOLVENT_PRESSURE: f64 = 1.0;

/// 约化两次模拟的序列
pub fn reduce(
    length: &LengthRun,
    force: &ForceRun,
    solvent_pressure: f64,
) -> Result<ReducedObservables> {
    Ok(ReducedObservables {
        l: length.box_x.mean()?,
        l_err: length.box_x.std_dev()?,
        lx: force.box_x.mean()?,
        ly: force.box_y.mean()?,
        lz: force.box_z.mean()?,
        p_xx: force.pres_xx.mean()? - solvent_pressure,
        p_xx_err: force.pres_xx.split_half_drift()?,
        temperature: force.temperature.mean()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KcError;
    use crate::models::SampleSeries;

    fn force_run(pres: Vec<f64>) -> ForceRun {
        let n = pres.len();
        ForceRun {
            time: SampleSeries::new("Time", (0..n).map(|i| i as f64).collect()),
            temperature: SampleSeries::new("Temperature", vec![300.0; n]),
            box_x: SampleSeries::new("Box-X", vec![28.5; n]),
            box_y: SampleSeries::new("Box-Y", vec![10.0; n]),
            box_z: SampleSeries::new("Box-Z", vec![10.0; n]),
            pres_xx: SampleSeries::new("Pres-XX", pres),
        }
    }

    #[test]
    fn test_reduce_subtracts_solvent_pressure() {
        let length = LengthRun {
            box_x: SampleSeries::new("Box-X", vec![29.95, 30.05]),
        };
        let force = force_run(vec![5.0, 7.0, 6.0, 8.0]);

        let obs = reduce(&length, &force, DEFAULT_SOLVENT_PRESSURE).unwrap();

        assert!((obs.l - 30.0).abs() < 1e-12);
        assert!((obs.l_err - 0.05).abs() < 1e-12);
        assert_eq!(obs.lx, 28.5);
        assert_eq!(obs.ly, 10.0);
        assert_eq!(obs.temperature, 300.0);
        // mean 6.5 - 1 bar
        assert!((obs.p_xx - 5.5).abs() < 1e-12);
        // 漂移按原始 Pres-XX 计算: |6 - 7|
        assert!((obs.p_xx_err - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reduce_custom_offset() {
        let length = LengthRun {
            box_x: SampleSeries::new("Box-X", vec![30.0]),
        };
        let force = force_run(vec![4.0, 4.0]);

        let obs = reduce(&length, &force, 0.0).unwrap();
        assert_eq!(obs.p_xx, 4.0);
        assert_eq!(obs.p_xx_err, 0.0);
        assert_eq!(obs.l_err, 0.0);
    }

    #[test]
    fn test_reduce_empty_length_run() {
        let length = LengthRun {
            box_x: SampleSeries::new("Box-X", vec![]),
        };
        let force = force_run(vec![1.0, 2.0]);
        let err = reduce(&length, &force, 1.0).unwrap_err();
        assert!(matches!(err, KcError::EmptySeries { name } if name == "Box-X"));
    }
}
