//! # Pres-XX 漂移图
//!
//! 使用 `plotters` 绘制屈曲模拟 Pres-XX 时间序列，并标出前后两半的均值，
//! 用于直观检查 P_xx 误差估计所依据的漂移。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `models/series.rs` 的 ForceRun
//! - 使用 `plotters` 渲染图表

use crate::error::{KcError, Result};
use crate::models::ForceRun;

use plotters::prelude::*;
use std::path::Path;

/// 图像尺寸 (像素)
const PLOT_SIZE: (u32, u32) = (1200, 800);

/// 生成 Pres-XX 漂移图，扩展名为 `.svg` 时输出 SVG，否则 PNG
pub fn generate_drift_plot(force: &ForceRun, output_path: &Path) -> Result<()> {
    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, PLOT_SIZE).into_drawing_area();
        draw_drift_chart(&root, force)?;
        root.present()
            .map_err(|e| KcError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, PLOT_SIZE).into_drawing_area();
        draw_drift_chart(&root, force)?;
        root.present()
            .map_err(|e| KcError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制漂移图表
fn draw_drift_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    force: &ForceRun,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let time = &force.time.values;
    let pres = &force.pres_xx.values;
    let n = pres.len().min(time.len());
    if n < 2 {
        return Err(KcError::EmptySeries {
            name: force.pres_xx.name.clone(),
        });
    }

    let data: Vec<(f64, f64)> = time.iter().copied().zip(pres.iter().copied()).collect();
    let mid = n / 2;
    let first_mean = data[..mid].iter().map(|(_, p)| p).sum::<f64>() / mid as f64;
    let second_mean = data[mid..].iter().map(|(_, p)| p).sum::<f64>() / (n - mid) as f64;

    let x_min = data[0].0;
    let x_max = data[n - 1].0;
    let y_min = pres.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = pres.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(1.0);

    root.fill(&WHITE)
        .map_err(|e| KcError::Other(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption("Pres-XX drift (buckled run)", ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, (y_min - y_margin)..(y_max + y_margin))
        .map_err(|e| KcError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Time (ps)")
        .y_desc("Pres-XX (bar)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| KcError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(data.iter().copied(), line_color.mix(0.6)))
        .map_err(|e| KcError::Other(format!("{:?}", e)))?
        .label("Pres-XX")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    // 前后两半均值
    let halves = [
        (data[0].0, data[mid - 1].0, first_mean, RED, "First-half mean"),
        (data[mid].0, x_max, second_mean, GREEN, "Second-half mean"),
    ];
    for (start, end, mean, color, label) in halves {
        chart
            .draw_series(LineSeries::new(
                vec![(start, mean), (end, mean)],
                color.stroke_width(3),
            ))
            .map_err(|e| KcError::Other(format!("{:?}", e)))?
            .label(format!("{} = {:.3} bar", label, mean))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| KcError::Other(format!("{:?}", e)))?;

    Ok(())
}
