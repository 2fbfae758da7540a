//! # GROMACS .xvg 解析器
//!
//! 解析 `gmx energy` 输出的 .xvg 文件，提取各能量项的时间序列。
//!
//! ## 格式
//! ```text
//! # 注释行
//! @    title "GROMACS Energies"
//! @ s0 legend "Temperature"
//! @ s1 legend "Box-X"
//!     0.000000  300.123456    28.512345
//! ```
//! - `#` 与 `@` 开头的行为元数据，`@ sN legend` 给出第 N+1 列的名称
//! - 第 0 列为时间
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/series.rs`

use crate::error::{KcError, Result};
use crate::models::{ForceRun, LengthRun, SampleSeries};

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// 屈曲模拟所需能量项（按 `gmx energy` 输出顺序）
pub const FORCE_TERMS: [&str; 5] = ["Temperature", "Box-X", "Box-Y", "Box-Z", "Pres-XX"];

/// 长度模拟所需能量项
pub const LENGTH_TERMS: [&str; 1] = ["Box-X"];

/// 解析后的 .xvg 表格
#[derive(Debug, Clone)]
pub struct XvgTable {
    /// 来源（文件路径或名称）
    pub source: String,

    /// `(列下标, 名称)`，`@ sN legend` 对应第 N+1 列
    pub legends: Vec<(usize, String)>,

    /// 按列存储的数据，第 0 列为时间
    pub columns: Vec<Vec<f64>>,
}

impl XvgTable {
    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// 取能量项所在列：有 legend 时按名称查找，否则按位置
    pub fn series(&self, term: &str, position: usize) -> Result<SampleSeries> {
        let index = if self.legends.is_empty() {
            Some(position)
        } else {
            self.legends
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(term))
                .map(|(column, _)| *column)
        };

        index
            .and_then(|i| self.columns.get(i))
            .map(|values| SampleSeries::new(term, values.clone()))
            .ok_or_else(|| KcError::MissingColumn {
                column: term.to_string(),
                path: self.source.clone(),
            })
    }

    /// 时间列
    pub fn time(&self) -> Result<SampleSeries> {
        self.columns
            .first()
            .map(|values| SampleSeries::new("Time", values.clone()))
            .ok_or_else(|| KcError::MissingColumn {
                column: "Time".to_string(),
                path: self.source.clone(),
            })
    }

    /// 作为长度模拟解析（Box-X 位于第 1 列）
    pub fn into_length_run(self) -> Result<LengthRun> {
        Ok(LengthRun {
            box_x: self.series(LENGTH_TERMS[0], 1)?,
        })
    }

    /// 作为屈曲模拟解析（T, X, Y, Z, Pxx 位于第 1..5 列）
    pub fn into_force_run(self) -> Result<ForceRun> {
        Ok(ForceRun {
            time: self.time()?,
            temperature: self.series(FORCE_TERMS[0], 1)?,
            box_x: self.series(FORCE_TERMS[1], 2)?,
            box_y: self.series(FORCE_TERMS[2], 3)?,
            box_z: self.series(FORCE_TERMS[3], 4)?,
            pres_xx: self.series(FORCE_TERMS[4], 5)?,
        })
    }
}

fn legend_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^@\s+s(\d+)\s+legend\s+"(.*)""#).unwrap())
}

/// 解析 .xvg 文件
pub fn parse_xvg_file(path: &Path) -> Result<XvgTable> {
    if !path.exists() {
        return Err(KcError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| KcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xvg_content(&content, &path.display().to_string())
}

/// 解析 .xvg 内容
pub fn parse_xvg_content(content: &str, source: &str) -> Result<XvgTable> {
    let parse_err = |line_no: usize, reason: String| KcError::ParseError {
        format: "xvg".to_string(),
        path: source.to_string(),
        reason: format!("line {}: {}", line_no, reason),
    };

    let mut legends: Vec<(usize, String)> = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('#') || trimmed.starts_with('@') {
            if let Some(caps) = legend_regex().captures(trimmed) {
                if let Ok(idx) = caps[1].parse::<usize>() {
                    let column = idx + 1;
                    let name = caps[2].to_string();
                    // 同一 sN 重复定义时以最后一次为准
                    match legends.iter_mut().find(|(c, _)| *c == column) {
                        Some(entry) => entry.1 = name,
                        None => legends.push((column, name)),
                    }
                }
            }
            continue;
        }

        let values: Vec<f64> = trimmed
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| parse_err(line_no, format!("invalid number '{}'", tok)))
            })
            .collect::<Result<_>>()?;

        if columns.is_empty() {
            columns = vec![Vec::new(); values.len()];
        } else if values.len() < columns.len() {
            return Err(parse_err(
                line_no,
                format!("expected {} columns, found {}", columns.len(), values.len()),
            ));
        }

        // 多余的列忽略
        for (col, v) in columns.iter_mut().zip(values) {
            col.push(v);
        }
    }

    if columns.is_empty() {
        return Err(KcError::ParseError {
            format: "xvg".to_string(),
            path: source.to_string(),
            reason: "no data rows".to_string(),
        });
    }

    legends.sort_by_key(|(column, _)| *column);

    Ok(XvgTable {
        source: source.to_string(),
        legends,
        columns,
    })
}
