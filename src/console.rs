//! 控制台输出模块
//!
//! 负责横幅、逐项进度、成功汇总与失败提示的文本渲染。
//! 渲染函数只返回字符串行，由 `main` 决定写到 stdout 还是 stderr。
//! 这些文本面向人阅读，不是机器可解析的契约。

use crate::asset_generator::{GenerationReport, OUTPUT_ASSETS, ProgressEvent};
use crate::error::AppError;

const RULE_WIDTH: usize = 50;
const NUMBER_MARKERS: [&str; 4] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣"];

pub fn banner_lines() -> Vec<String> {
    vec![
        "╔══════════════════════════════════════════════════════╗".to_string(),
        "║   资源生成 - asset-generator                          ║".to_string(),
        "╚══════════════════════════════════════════════════════╝".to_string(),
        String::new(),
    ]
}

fn number_marker(index: usize) -> String {
    index
        .checked_sub(1)
        .and_then(|i| NUMBER_MARKERS.get(i))
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{index}."))
}

pub fn progress_lines(event: &ProgressEvent<'_>) -> Vec<String> {
    match event {
        ProgressEvent::SourceLoaded { width, height } => vec![
            format!("📸 Logo 已加载: {}x{}", width, height),
            "🎨 正在生成资源...".to_string(),
            String::new(),
        ],
        ProgressEvent::AssetStarted { index, asset } => vec![format!(
            "{}  正在生成 {} ({}x{})...",
            number_marker(*index),
            asset.file_name,
            asset.width,
            asset.height
        )],
        ProgressEvent::AssetWritten { path, .. } => {
            vec![format!("   ✅ 已生成: {}", path.display())]
        }
    }
}

pub fn success_lines(report: &GenerationReport) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "🎉 所有资源均已生成成功!".to_string(),
        rule,
        String::new(),
        "📁 已生成的文件:".to_string(),
    ];
    lines.extend(report.assets.iter().map(|generated| {
        format!(
            "   ✅ {} ({}x{})",
            generated.asset.file_name, generated.asset.width, generated.asset.height
        )
    }));
    lines.push(String::new());
    lines.push("💡 现在可以运行: npm start".to_string());
    lines
}

pub fn failure_lines(error: &AppError) -> Vec<String> {
    match error {
        AppError::MissingSourceAsset { path } => vec![
            format!("❌ 错误: {} 不存在!", path.display()),
            format!("   请先将 logo 放到 {}", path.display()),
        ],
        AppError::Processing(inner) => {
            let expected: Vec<_> = OUTPUT_ASSETS.iter().map(|a| a.file_name).collect();
            vec![
                format!("❌ 生成资源时出错: {}", inner),
                String::new(),
                "💡 请确认:".to_string(),
                "   1. 源 logo 是可被解码的图片（推荐 PNG）".to_string(),
                "   2. logo.png 位于 app/assets/ 下".to_string(),
                format!("   3. 对输出目录有写权限（{}）", expected.join(", ")),
            ]
        }
    }
}
