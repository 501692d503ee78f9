//! # 资源生成工具 — 入口
//!
//! 不接受任何参数：读取 `app/assets/logo.png`，生成四个固定资源，
//! 成功退出码 0，源文件缺失或任一步骤失败退出码 1。

use asset_generator::asset_generator::{AssetGenerator, GeneratorConfig};
use asset_generator::console;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    for line in console::banner_lines() {
        println!("{line}");
    }

    let mut generator = AssetGenerator::new(GeneratorConfig::default());
    let result = generator.run_with_progress(|event| {
        for line in console::progress_lines(event) {
            println!("{line}");
        }
    });

    let code = match result {
        Ok(report) => {
            for line in console::success_lines(&report) {
                println!("{line}");
            }
            0
        }
        Err(err) => {
            log::error!("资源生成失败（state={:?}）: {err}", generator.state());
            for line in console::failure_lines(&err) {
                eprintln!("{line}");
            }
            err.exit_code()
        }
    };

    std::process::exit(code);
}
