//! # Input 模块
//!
//! 定义 Host 向 Runtime 传递的输入事件。
//!
//! ## 设计说明
//!
//! - Runtime 不直接处理鼠标/触摸事件，只处理语义化的输入
//! - 补间动画由 Host 的补间引擎驱动，Runtime 只接收完成回报
//! - 当前状态未声明转换的输入一律静默忽略，不报错、不破坏状态

use serde::{Deserialize, Serialize};

use crate::command::{ActorId, AnimationId};

/// 指针事件的命中目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// 场景任意位置（未命中具体角色）
    Scene,
    /// 命中某个角色精灵
    Actor(ActorId),
}

/// Host 向 Runtime 传递的输入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneInput {
    /// 指针按下
    PointerDown {
        /// 命中目标
        target: PointerTarget,
    },

    /// 补间动画结束（每次 `MoveActor` 恰好回报一次）
    AnimationComplete {
        /// 对应 `MoveActor` 携带的标识
        id: AnimationId,
    },

    /// 聚合加载进度（0..1）
    LoadProgress {
        /// 已完成比例
        fraction: f64,
    },

    /// 全部资源加载完成
    LoadComplete,
}

impl SceneInput {
    /// 场景任意位置的点击
    pub fn click() -> Self {
        Self::PointerDown {
            target: PointerTarget::Scene,
        }
    }

    /// 命中角色的点击
    pub fn click_actor(actor: ActorId) -> Self {
        Self::PointerDown {
            target: PointerTarget::Actor(actor),
        }
    }

    /// 补间完成回报
    pub fn animation_complete(id: AnimationId) -> Self {
        Self::AnimationComplete { id }
    }
}
