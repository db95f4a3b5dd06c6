//! # Scene 模块
//!
//! 四个剧本场景的状态机实现。
//!
//! ## 设计说明
//!
//! - 场景是 `{enter, on_pointer_down, on_animation_complete}` 能力集的
//!   tagged union，由驱动循环按事件类型分发，没有引擎基类继承
//! - 场景实例进入时新建、切换时销毁，不跨场景共享可变状态；
//!   唯一的共享只读数据是 [`SceneContext`]
//! - 剧情阶段单调前进，永不回退；未声明转换的输入一律静默忽略
//! - 补间进行中由 busy 标志做重入保护（单线程事件循环，不存在真并发，
//!   防的是动画完成回报到达前的第二次点击）

mod earth;
mod moon;
mod preloader;
mod save_the_date;

pub use earth::{EarthPhase, EarthScene};
pub use moon::{MoonPhase, MoonScene};
pub use preloader::PreloaderScene;
pub use save_the_date::SaveTheDateScene;

use std::collections::HashMap;

use crate::command::{Command, ImageId, SceneKind};
use crate::error::{CardResult, RuntimeError};
use crate::input::SceneInput;
use crate::layout::{ImageMetrics, ViewportSize};

/// 场景上下文
///
/// 场景生命周期内只读：视口与设备信息在启动时确定，
/// 图片元数据在资源加载完成时由 Host 注册。
#[derive(Debug, Clone)]
pub struct SceneContext {
    /// 视口尺寸（设备像素）
    pub viewport: ViewportSize,
    /// 设备像素比
    pub dpr: f64,
    /// 是否移动端（决定资源变体与部分锚点）
    pub is_mobile: bool,
    /// 已注册的图片元数据
    metrics: HashMap<ImageId, ImageMetrics>,
}

impl SceneContext {
    /// 创建场景上下文
    pub fn new(viewport: ViewportSize, dpr: f64, is_mobile: bool) -> Self {
        Self {
            viewport,
            dpr,
            is_mobile,
            metrics: HashMap::new(),
        }
    }

    /// 注册图片元数据（加载完成时由 Host 调用）
    pub fn register_metrics(&mut self, image: ImageId, metrics: ImageMetrics) {
        self.metrics.insert(image, metrics);
    }

    /// 查询图片元数据
    ///
    /// 加载完成前查询属于契约违反，返回 [`RuntimeError::MetricsUnavailable`]。
    pub fn metrics(&self, image: ImageId) -> Result<ImageMetrics, RuntimeError> {
        self.metrics
            .get(&image)
            .copied()
            .ok_or(RuntimeError::MetricsUnavailable { image })
    }

    /// 是否已注册某图片的元数据
    pub fn has_metrics(&self, image: ImageId) -> bool {
        self.metrics.contains_key(&image)
    }

    /// 角色的显示高度（原始高度 × 显示缩放）
    pub fn actor_display_height(&self, image: ImageId, scale: f64) -> Result<f64, RuntimeError> {
        let metrics = self.metrics(image)?;
        Ok(f64::from(metrics.natural_height) * scale)
    }
}

/// 当前活动场景
#[derive(Debug)]
pub enum Scene {
    /// 资源预载
    Preloader(PreloaderScene),
    /// 地球（出发）
    Earth(EarthScene),
    /// 月球（婚礼）
    Moon(MoonScene),
    /// Save the Date 卡片
    SaveTheDate(SaveTheDateScene),
}

impl Scene {
    /// 进入指定场景：构造新实例并返回进入效果
    pub fn enter(kind: SceneKind, ctx: &SceneContext) -> CardResult<(Self, Vec<Command>)> {
        match kind {
            SceneKind::Preloader => {
                let (scene, commands) = PreloaderScene::enter(ctx)?;
                Ok((Self::Preloader(scene), commands))
            }
            SceneKind::Earth => {
                let (scene, commands) = EarthScene::enter(ctx)?;
                Ok((Self::Earth(scene), commands))
            }
            SceneKind::Moon => {
                let (scene, commands) = MoonScene::enter(ctx)?;
                Ok((Self::Moon(scene), commands))
            }
            SceneKind::SaveTheDate => {
                let (scene, commands) = SaveTheDateScene::enter(ctx)?;
                Ok((Self::SaveTheDate(scene), commands))
            }
        }
    }

    /// 场景标识
    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Preloader(_) => SceneKind::Preloader,
            Self::Earth(_) => SceneKind::Earth,
            Self::Moon(_) => SceneKind::Moon,
            Self::SaveTheDate(_) => SceneKind::SaveTheDate,
        }
    }

    /// 按事件类型分发输入
    ///
    /// 当前场景未声明的组合一律返回空效果（静默忽略）。
    /// Save the Date 是终局场景，不再响应任何输入。
    pub fn handle(&mut self, input: &SceneInput, ctx: &SceneContext) -> CardResult<Vec<Command>> {
        match (self, input) {
            (Self::Preloader(scene), SceneInput::LoadProgress { fraction }) => {
                Ok(scene.on_load_progress(*fraction))
            }
            (Self::Preloader(scene), SceneInput::LoadComplete) => Ok(scene.on_load_complete()),

            (Self::Earth(scene), SceneInput::PointerDown { target }) => {
                scene.on_pointer_down(*target, ctx)
            }
            (Self::Earth(scene), SceneInput::AnimationComplete { id }) => {
                scene.on_animation_complete(*id, ctx)
            }

            (Self::Moon(scene), SceneInput::PointerDown { target }) => {
                scene.on_pointer_down(*target, ctx)
            }
            (Self::Moon(scene), SceneInput::AnimationComplete { id }) => {
                Ok(scene.on_animation_complete(*id))
            }

            _ => Ok(Vec::new()),
        }
    }
}
