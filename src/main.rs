//! # kcbuckle - 屈曲法膜弯曲模量计算
//!
//! 按屈曲法流程完成两次生产模拟后（一次膜只在 x 方向自由以测长度，
//! 一次膜在 x 方向屈曲并对盒子壁施力），由两份 GROMACS 能量输出
//! 计算弯曲模量 Kc 及其误差（Hu, 2013, doi: 10.1063/1.4808077）。
//!
//! ## 子命令
//! - `edr` - 由 .edr 文件计算（调用 `gmx energy`）
//! - `xvg` - 由已导出的 .xvg 文件计算
//! - `compute` - 由约化后的标量计算
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (.xvg 解析器)
//!   │     ├── buckling/  (约化与 Kc 计算)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度、gmx 调用)
//!   └── error.rs    (错误处理)
//! ```

mod buckling;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
