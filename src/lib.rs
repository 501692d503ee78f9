//! # 资源生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs  env_logger 初始化 + 控制台输出 + 退出码         │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<GenerationReport, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ─────────── AppError (MissingSourceAsset / Processing) │
//! │  ├─ asset_generator ─ 加载 · 缩放 · 合成 · PNG 写盘        │
//! │  ├─ storage ───────── 遗留 assets/ 目录                     │
//! │  └─ console ───────── 横幅 / 进度 / 汇总文本               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，映射为进程退出码 |
//! | [`asset_generator`] | 从 `app/assets/logo.png` 生成 icon / adaptive-icon / favicon / splash |
//! | [`storage`] | 遗留 `assets/` 目录的创建 |
//! | [`console`] | 面向人的控制台文本渲染 |

pub mod asset_generator;
pub mod console;
pub mod error;
pub mod storage;
