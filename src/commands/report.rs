//! # 结果汇报
//!
//! 约化、计算并输出 Kc，`edr` 与 `xvg` 子命令共用。
//!
//! ## 输出模式
//! - 默认：原始元组 `(Kc, Kc_err)`
//! - `--verbose`：观测量表格 + `Kc= ... ± ... kBT`
//!
//! ## 依赖关系
//! - 被 `commands/edr.rs`, `commands/xvg.rs`, `commands/compute.rs` 使用
//! - 使用 `buckling/`, `utils/output.rs`

use crate::buckling::{self, export, plot, BendingCalculator, BendingTerms};
use crate::cli::report::ReportArgs;
use crate::error::Result;
use crate::models::{BendingResult, ForceRun, LengthRun, ReducedObservables};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 观测量表格行
#[derive(Debug, Clone, Tabled)]
struct QuantityRow {
    #[tabled(rename = "Quantity")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

impl QuantityRow {
    fn new(name: &'static str, value: f64, unit: &'static str) -> Self {
        QuantityRow {
            name,
            value: format!("{:.6}", value),
            unit,
        }
    }

    fn sci(name: &'static str, value: f64, unit: &'static str) -> Self {
        QuantityRow {
            name,
            value: format!("{:.6e}", value),
            unit,
        }
    }
}

/// 约化两次模拟的序列并输出 Kc
pub fn report_runs(length: &LengthRun, force: &ForceRun, args: &ReportArgs) -> Result<()> {
    let obs = buckling::reduce(length, force, args.solvent_pressure)?;
    let terms = BendingCalculator::new().compute_terms(&obs)?;

    if args.verbose {
        output::print_info(&format!(
            "Length run: {} frames, buckled run: {} frames",
            length.box_x.values.len(),
            force.pres_xx.values.len()
        ));
        output::print_info(&format!(
            "Subtracted solvent pressure of {} bar from Pres-XX",
            args.solvent_pressure
        ));
        print_observables(&obs, Some(&terms));
    }

    if let Some(ref path) = args.csv {
        export::to_csv(&obs, &terms.result, path)?;
        if args.verbose {
            output::print_success(&format!("Results saved to '{}'", path.display()));
        }
    }

    if let Some(ref path) = args.plot {
        plot::generate_drift_plot(force, path)?;
        if args.verbose {
            output::print_success(&format!("Pres-XX drift plot saved to '{}'", path.display()));
        }
    }

    print_outcome(&terms.result, args.verbose);
    Ok(())
}

/// 打印约化观测量（以及可选的中间量）
pub fn print_observables(obs: &ReducedObservables, terms: Option<&BendingTerms>) {
    output::print_header("Reduced Observables");

    let mut rows = vec![
        QuantityRow::new("L", obs.l, "nm"),
        QuantityRow::new("L_err", obs.l_err, "nm"),
        QuantityRow::new("Lx", obs.lx, "nm"),
        QuantityRow::new("Ly", obs.ly, "nm"),
        QuantityRow::new("Lz", obs.lz, "nm"),
        QuantityRow::new("P_xx", obs.p_xx, "bar"),
        QuantityRow::new("P_xx_err", obs.p_xx_err, "bar"),
        QuantityRow::new("T", obs.temperature, "K"),
    ];

    if let Some(t) = terms {
        rows.extend([
            QuantityRow::new("strain", t.strain, "-"),
            QuantityRow::new("Σ b_i strain^i", t.sum_b, "-"),
            QuantityRow::new("Σ d_i strain^i", t.sum_d, "-"),
            QuantityRow::sci("coef_bi", t.coef_bi, "m"),
            QuantityRow::sci("Fx", t.fx, "N"),
            QuantityRow::sci("Fx (corrected)", t.fx_corrected, "N"),
            QuantityRow::sci("κ", t.kappa_j, "J"),
        ]);
    }

    println!("{}", Table::new(&rows));
}

/// 按输出模式打印结果
pub fn print_outcome(result: &BendingResult, verbose: bool) {
    if verbose {
        output::print_result(&result.to_string());
    } else {
        println!("{}", result.raw());
    }
}
