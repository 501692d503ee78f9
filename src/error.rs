//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，只区分两类终止原因：
//! - 源 logo 缺失（尚未做任何写操作）
//! - 处理失败（解码 / 缩放 / 合成 / 编码 / 写盘）
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ImageError` 提供 `From` 转换，流水线中直接用 `?` 上抛。
//! - 所有错误都是终止性的，统一映射为退出码 1。

use std::path::PathBuf;

use crate::asset_generator::ImageError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 源 logo 不存在
    #[error("源文件不存在: {}", path.display())]
    MissingSourceAsset { path: PathBuf },

    /// 资源生成流水线错误
    #[error("{0}")]
    Processing(#[from] ImageError),
}

impl AppError {
    /// 进程退出码。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSourceAsset { .. } | Self::Processing(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_exits_with_one() {
        let missing = AppError::MissingSourceAsset {
            path: PathBuf::from("app/assets/logo.png"),
        };
        let processing = AppError::from(ImageError::Decode("bad".to_string()));

        assert_eq!(missing.exit_code(), 1);
        assert_eq!(processing.exit_code(), 1);
    }

    #[test]
    fn messages_carry_underlying_details() {
        let missing = AppError::MissingSourceAsset {
            path: PathBuf::from("app/assets/logo.png"),
        };
        let processing = AppError::from(ImageError::FileSystem("permission denied".to_string()));

        assert!(missing.to_string().contains("app/assets/logo.png"));
        assert!(processing.to_string().contains("permission denied"));
    }
}
