//! # Command 模块
//!
//! 定义 Runtime 向 Host 发出的所有指令。
//! Command 是 Runtime 与 Host 之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：Command 描述"做什么"，不描述"怎么做"
//! - **无副作用**：Command 本身不执行任何操作
//! - **引擎无关**：不包含任何渲染引擎的类型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::assets::AssetRequest;
use crate::layout::Point;
use crate::tooltip::Tooltip;

/// 图片资源标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageId {
    /// 启动页模糊背景
    LoadingBackground,
    /// 地球场景背景
    EarthBackground,
    /// 月球场景背景
    MoonBackground,
    /// 新郎
    Groom,
    /// 新娘
    Bride,
    /// 婚礼拱门
    WeddingArch,
    /// 火箭
    Rocket,
    /// Save the Date 卡片
    SaveTheDate,
}

impl ImageId {
    /// 资源键名（Host 端缓存键）
    pub fn key(self) -> &'static str {
        match self {
            Self::LoadingBackground => "loading_image",
            Self::EarthBackground => "background",
            Self::MoonBackground => "moon-bg",
            Self::Groom => "groom",
            Self::Bride => "bride",
            Self::WeddingArch => "wedding_arch",
            Self::Rocket => "rocket",
            Self::SaveTheDate => "save-the-date",
        }
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 音频资源标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioId {
    /// 主题曲
    MainTheme,
}

impl AudioId {
    /// 资源键名
    pub fn key(self) -> &'static str {
        match self {
            Self::MainTheme => "main-theme",
        }
    }
}

impl fmt::Display for AudioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 场景中的角色精灵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorId {
    /// 新郎
    Groom,
    /// 新娘
    Bride,
    /// 火箭
    Rocket,
    /// 婚礼拱门
    WeddingArch,
}

/// 提示框标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TooltipId {
    /// 新郎台词框（地球开场与月球场景复用）
    GroomSpeech,
    /// "Almost there!" 提示框
    AlmostThere,
    /// "Just one more step!" 提示框
    OneMoreStep,
}

/// 补间缓动曲线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// 线性
    Linear,
    /// 二次缓动
    Power2,
}

impl Easing {
    /// 缓动名称（供 Host 映射到补间引擎）
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Power2 => "Power2",
        }
    }
}

/// 补间动画标识
///
/// Host 在补间结束时必须以相同标识回报
/// [`SceneInput::AnimationComplete`](crate::input::SceneInput::AnimationComplete)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationId {
    /// 新郎的单步行走
    WalkStep,
    /// 火箭升空
    RocketLaunch,
    /// 新郎走向新娘
    GroomApproach,
}

/// 场景标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    /// 资源预载
    Preloader,
    /// 地球（出发）
    Earth,
    /// 月球（婚礼）
    Moon,
    /// Save the Date 卡片
    SaveTheDate,
}

/// Runtime 向 Host 发出的指令
///
/// Host 接收 Command 后，将其转换为实际的渲染、音频等操作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// 请求加载一批资源
    ///
    /// Host 通过 `LoadProgress` / `LoadComplete` 输入回报聚合进度。
    LoadAssets {
        /// 待加载的资源列表
        assets: Vec<AssetRequest>,
    },

    /// 设置进度文本
    SetProgressText {
        /// 文本内容
        text: String,
    },

    /// 以 cover 方式显示背景（居中，超出部分裁剪）
    ShowBackground {
        /// 背景图片
        image: ImageId,
        /// cover 缩放系数
        scale: f64,
    },

    /// 铺满视口的底色矩形
    FillBackdrop {
        /// RGB 颜色（0xRRGGBB）
        color: u32,
    },

    /// 放置角色精灵（底边中点对齐 position）
    PlaceActor {
        /// 角色
        actor: ActorId,
        /// 使用的图片
        image: ImageId,
        /// 视口坐标
        position: Point,
        /// 显示缩放
        scale: f64,
        /// 是否接收点击
        interactive: bool,
    },

    /// 设置角色可见性
    SetActorVisible {
        /// 角色
        actor: ActorId,
        /// 是否可见
        visible: bool,
    },

    /// 设置角色是否接收点击
    SetActorInteractive {
        /// 角色
        actor: ActorId,
        /// 是否接收点击
        interactive: bool,
    },

    /// 补间移动角色
    ///
    /// 一次性动画：Host 必须在结束时回报一次 `AnimationComplete`，
    /// 不要求中途取消能力。
    MoveActor {
        /// 角色
        actor: ActorId,
        /// 目标位置
        to: Point,
        /// 时长
        duration: Duration,
        /// 缓动曲线
        easing: Easing,
        /// 完成回报用的标识
        animation: AnimationId,
    },

    /// 显示全屏引导文字
    ShowOverlayPrompt {
        /// 文本内容
        text: String,
    },

    /// 隐藏全屏引导文字
    HideOverlayPrompt,

    /// 显示提示框
    ShowTooltip {
        /// 提示框标识
        id: TooltipId,
        /// 提示框内容与几何信息
        tooltip: Tooltip,
    },

    /// 更新提示框正文（位置与可见性不变）
    SetTooltipText {
        /// 提示框标识
        id: TooltipId,
        /// 新正文
        text: String,
    },

    /// 隐藏提示框
    HideTooltip {
        /// 提示框标识
        id: TooltipId,
    },

    /// 播放背景音乐（实际的音频解锁由 Host 负责）
    PlayBgm {
        /// 音频资源
        audio: AudioId,
        /// 是否循环播放
        looping: bool,
    },

    /// 切换场景
    ///
    /// 当前场景实例随之销毁，Host 可释放其资源。
    ChangeScene {
        /// 下一个场景
        next: SceneKind,
    },
}
