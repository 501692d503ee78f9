//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“固定输出清单”和“流水线中间结果”解耦：
//! - `OutputAsset` / `AssetRecipe` 描述四个固定输出及其生成方式
//! - `SourceImage` 表示已解码并统一为 RGBA 的源图
//! - `GeneratedAsset` 表示已写盘的输出，用于进度与汇总

use std::path::PathBuf;
use std::time::Duration;

use image::{ColorType, RgbaImage};

/// 单个输出的生成方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRecipe {
    /// 直接缩放源图到目标尺寸。
    Direct,
    /// 源图缩放到 `inset_width x inset_height` 后居中合成到背景色画布上。
    Canvas { inset_width: u32, inset_height: u32 },
}

/// 输出资源描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputAsset {
    pub name: &'static str,
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub recipe: AssetRecipe,
}

impl OutputAsset {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// 固定输出清单，按此顺序生成。
pub const OUTPUT_ASSETS: [OutputAsset; 4] = [
    OutputAsset {
        name: "icon",
        file_name: "icon.png",
        width: 1024,
        height: 1024,
        recipe: AssetRecipe::Direct,
    },
    OutputAsset {
        name: "adaptive-icon",
        file_name: "adaptive-icon.png",
        width: 1024,
        height: 1024,
        recipe: AssetRecipe::Canvas {
            inset_width: 800,
            inset_height: 800,
        },
    },
    OutputAsset {
        name: "favicon",
        file_name: "favicon.png",
        width: 48,
        height: 48,
        recipe: AssetRecipe::Direct,
    },
    OutputAsset {
        name: "splash",
        file_name: "splash.png",
        width: 1242,
        height: 2436,
        recipe: AssetRecipe::Canvas {
            inset_width: 800,
            inset_height: 800,
        },
    },
];

/// 加载阶段输出：统一为 RGBA8 的源图。
///
/// 整个运行期间只读，所有输出都从它派生。
pub struct SourceImage {
    pub(crate) rgba: RgbaImage,
    /// 解码时的原始颜色类型（用于日志与汇总）。
    pub(crate) original_color: ColorType,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn original_color(&self) -> ColorType {
        self.original_color
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.rgba
    }
}

/// 已写盘的输出。
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub asset: OutputAsset,
    pub path: PathBuf,
    pub elapsed: Duration,
}
