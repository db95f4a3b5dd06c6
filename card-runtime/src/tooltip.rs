//! # Tooltip 模块
//!
//! 提示框值类型与共享构造逻辑。
//!
//! 所有场景的提示框都经由 [`Tooltip::above_actor`] 构造，
//! 不允许各场景复制粘贴几何计算。

use serde::{Deserialize, Serialize};

use crate::layout::{Point, ViewportSize};

/// 提示框最小宽度（移动端）
const MIN_WIDTH_EARTH: f64 = 140.0;

/// 月球场景提示框最小宽度（移动端）
const MIN_WIDTH_MOON: f64 = 110.0;

/// 桌面端固定宽度
const DESKTOP_WIDTH: f64 = 320.0;

/// 提示框
///
/// `position` 是顶边中点；提示框悬浮于所属角色头顶。
/// 可见性与文本内容是剧情阶段的纯函数，由场景状态机决定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    /// 标题（说话者）
    pub title: String,
    /// 正文
    pub text: String,
    /// 顶边中点的视口坐标
    pub position: Point,
    /// 宽度（像素）
    pub width: f64,
    /// 高度（像素）
    pub height: f64,
}

impl Tooltip {
    /// 构造悬浮于角色头顶的提示框
    ///
    /// `actor_position` 是角色底边中点，`actor_display_height` 是
    /// 角色的显示高度（原始高度 × 显示缩放）。
    pub fn above_actor(
        title: impl Into<String>,
        text: impl Into<String>,
        actor_position: Point,
        actor_display_height: f64,
        size: TooltipSize,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            position: Point::new(
                actor_position.x,
                actor_position.y - actor_display_height - size.height,
            ),
            width: size.width,
            height: size.height,
        }
    }
}

/// 提示框尺寸（随设备与视口自适应）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSize {
    /// 宽度（像素）
    pub width: f64,
    /// 高度（像素）
    pub height: f64,
}

impl TooltipSize {
    /// 地球场景提示框尺寸
    ///
    /// 移动端取视口宽度的 32%，夹在最小宽度与视口边距之间，防止溢出。
    pub fn earth(viewport: ViewportSize, dpr: f64, is_mobile: bool) -> Self {
        let viewport_width = f64::from(viewport.width);
        let width = if is_mobile {
            (viewport_width * 0.32)
                .max(MIN_WIDTH_EARTH)
                .min(viewport_width - 12.0 * dpr)
        } else {
            DESKTOP_WIDTH
        };
        let height = if is_mobile { 38.0 } else { 80.0 } * dpr;
        Self { width, height }
    }

    /// 月球场景提示框尺寸
    pub fn moon(viewport: ViewportSize, dpr: f64, is_mobile: bool) -> Self {
        let viewport_width = f64::from(viewport.width);
        let width = if is_mobile {
            (viewport_width * 0.35).max(MIN_WIDTH_MOON)
        } else {
            DESKTOP_WIDTH
        };
        let height = if is_mobile { 50.0 } else { 80.0 } * dpr;
        Self { width, height }
    }
}
