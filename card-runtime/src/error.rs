//! # Error 模块
//!
//! 定义 card-runtime 中使用的错误类型。
//!
//! 注意：未声明转换的输入事件**不是**错误——场景对其静默忽略。
//! 这里的错误只覆盖真正的契约违反（非法尺寸、未注册的图片元数据等）。

use thiserror::Error;

use crate::command::ImageId;

/// 布局错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// 图片原始尺寸非法（存在零值维度）
    #[error("图片原始尺寸非法: {width}x{height}")]
    InvalidImageMetrics { width: u32, height: u32 },

    /// 视口尺寸非法（存在零值维度）
    #[error("视口尺寸非法: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

/// 运行时错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// 图片元数据尚未注册
    ///
    /// 在图片加载完成前进行布局计算属于契约违反，不是可恢复的运行时状况。
    #[error("图片 '{image}' 的元数据尚未注册")]
    MetricsUnavailable { image: ImageId },

    /// Runtime 尚未调用 `start` 就收到了输入
    #[error("Runtime 尚未启动")]
    NotStarted,
}

/// card-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    /// 布局错误
    #[error("布局错误: {0}")]
    Layout(#[from] LayoutError),

    /// 运行时错误
    #[error("运行时错误: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Result 类型别名
pub type CardResult<T> = Result<T, CardError>;
