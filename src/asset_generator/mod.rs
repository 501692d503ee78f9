//! # 资源生成模块（asset_generator）
//!
//! ## 设计思路
//!
//! 将“存在性检查 → 加载统一 → 缩放/合成 → PNG 写盘 → 编排”按职责拆分为多个子模块。
//!
//! - `handler`：编排整条流水线（固定顺序 + 阶段耗时日志 + 状态）
//! - `loader`：存在性检查、解码、像素限制、RGBA 统一
//! - `pipeline`：直接缩放与画布居中合成
//! - `writer`：PNG 编码与覆盖写入
//! - `config/error/source`：配置、错误、固定输出清单与中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（AssetGenerator::run_with_progress）
//!    ├─ loader.rs（ensure_source_exists / load_and_normalize）
//!    ├─ storage.rs（遗留 assets/ 目录）
//!    ├─ pipeline.rs（resize_direct / composite_on_canvas）
//!    └─ writer.rs（save_asset）
//!    ↓
//! 返回 AppError 给 main，退出码 1
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{BACKGROUND_COLOR, GeneratorConfig};
pub use error::ImageError;
pub use handler::{AssetGenerator, GenerationReport, ProgressEvent, RunState};
pub use pipeline::centering_offset;
pub use source::{AssetRecipe, GeneratedAsset, OUTPUT_ASSETS, OutputAsset, SourceImage};
