//! # RenderState 模块
//!
//! Host 端的画面状态。执行器把 Command 映射为这里的状态更新，
//! 渲染（本宿主为终端日志）只读取状态，两者互不直接调用。

use std::collections::HashMap;
use std::time::Duration;

use card_runtime::{
    ActorId, AnimationId, AssetRequest, AudioId, Easing, ImageId, Point, SceneKind, Tooltip,
    TooltipId,
};

/// 精灵状态
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteState {
    /// 使用的图片
    pub image: ImageId,
    /// 视口坐标（底边中点）
    pub position: Point,
    /// 显示缩放
    pub scale: f64,
    /// 是否可见
    pub visible: bool,
    /// 是否接收点击
    pub interactive: bool,
}

/// 提示框状态
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    /// 提示框内容与几何信息
    pub tooltip: Tooltip,
    /// 是否可见
    pub visible: bool,
}

/// 进行中的补间
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAnimation {
    /// 目标角色
    pub actor: ActorId,
    /// 目标位置
    pub to: Point,
    /// 时长
    pub duration: Duration,
    /// 缓动曲线
    pub easing: Easing,
    /// 完成回报用的标识
    pub id: AnimationId,
}

/// Host 端画面状态
#[derive(Debug, Default)]
pub struct RenderState {
    /// 底色矩形
    pub backdrop: Option<u32>,
    /// 当前背景与 cover 缩放
    pub background: Option<(ImageId, f64)>,
    /// 角色精灵
    pub sprites: HashMap<ActorId, SpriteState>,
    /// 提示框
    pub tooltips: HashMap<TooltipId, TooltipState>,
    /// 全屏引导文字
    pub overlay_prompt: Option<String>,
    /// 进度文本
    pub progress_text: Option<String>,
    /// 背景音乐（跨场景持续）
    pub bgm: Option<(AudioId, bool)>,
    /// 进行中的补间（单线程事件循环，同一时刻至多一个）
    pub pending_animation: Option<PendingAnimation>,
    /// 待加载的资源（由主循环消费）
    pub pending_assets: Vec<AssetRequest>,
    /// 最近一次请求切换到的场景
    pub scene: Option<SceneKind>,
}

impl RenderState {
    /// 创建空状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 结束进行中的补间
    ///
    /// 把精灵挪到目标位置，返回需要回报的动画标识。
    pub fn finish_animation(&mut self) -> Option<AnimationId> {
        let animation = self.pending_animation.take()?;
        if let Some(sprite) = self.sprites.get_mut(&animation.actor) {
            sprite.position = animation.to;
        }
        Some(animation.id)
    }

    /// 场景切换时清理场景级画面状态
    ///
    /// 背景音乐跨场景持续，不在清理范围内。
    pub fn clear_scene(&mut self) {
        self.backdrop = None;
        self.background = None;
        self.sprites.clear();
        self.tooltips.clear();
        self.overlay_prompt = None;
        self.progress_text = None;
        self.pending_animation = None;
    }
}
