//! # Card Runtime
//!
//! 互动贺卡（save-the-date 动画卡片）的核心运行时库。
//!
//! ## 架构概述
//!
//! `card-runtime` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它通过**命令驱动模式**与宿主层（Host）通信：
//!
//! ```text
//! Host                          Runtime
//!   │                              │
//!   │──── SceneInput ────────────►│
//!   │                              │ dispatch()
//!   │◄─── Vec<Command> ───────────│
//!   │                              │
//! ```
//!
//! Host 负责渲染、补间插值、音频与资源加载；Runtime 负责两件事：
//!
//! - **锚点布局**：由背景图原始尺寸与视口尺寸算出 cover 缩放，
//!   把图片内的归一化锚点换算为视口像素坐标
//! - **剧情状态机**：消费离散输入（点击、补间完成），决定下一个
//!   剧情阶段并给出效果列表
//!
//! ## 核心类型
//!
//! - [`Command`]：Runtime 向 Host 发出的指令
//! - [`SceneInput`]：Host 向 Runtime 传递的输入
//! - [`CardRuntime`]：驱动循环
//! - [`SceneContext`]：视口与图片元数据
//!
//! ## 模块结构
//!
//! - [`command`]：Command 定义
//! - [`input`]：SceneInput 定义
//! - [`layout`]：cover 变换与锚点布局
//! - [`tooltip`]：提示框值类型
//! - [`assets`]：资源清单与加载进度
//! - [`scene`]：四个场景的状态机
//! - [`runtime`]：驱动循环
//! - [`error`]：错误类型定义

pub mod assets;
pub mod command;
pub mod error;
pub mod input;
pub mod layout;
pub mod runtime;
pub mod scene;
pub mod tooltip;

// 重导出核心类型
pub use assets::{AssetId, AssetRequest, LoadProgress};
pub use command::{
    ActorId, AnimationId, AudioId, Command, Easing, ImageId, SceneKind, TooltipId,
};
pub use error::{CardError, CardResult, LayoutError, RuntimeError};
pub use input::{PointerTarget, SceneInput};
pub use layout::{
    AnchorPoint, CoverTransform, ImageMetrics, Point, ViewportSize, WalkPlan, XAnchorPolicy,
    anchor_to_viewport, clamp_actor_scale, compute_cover_transform,
};
pub use runtime::CardRuntime;
pub use scene::{EarthPhase, EarthScene, MoonPhase, MoonScene, Scene, SceneContext};
pub use tooltip::{Tooltip, TooltipSize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // 验证所有公共类型都可以正常使用
        let _cmd = Command::HideOverlayPrompt;
        let _input = SceneInput::click();
        let _viewport = ViewportSize::new(1280, 720).unwrap();
        let _progress = LoadProgress::new(0.5);
    }
}
