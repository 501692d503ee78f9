//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载资源生成链路中的所有错误来源（解码 / 缩放 / 合成 / 编码 / 写盘），
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 资源生成统一错误类型。
///
/// 该类型会在应用层被上转为 `AppError::Processing`，最终由 `main` 打印并以状态码 1 退出。
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
