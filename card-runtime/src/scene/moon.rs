//! # 月球场景
//!
//! 婚礼剧情：新郎望见新娘，一次点击后走到她身旁，随后切入卡片场景。

use std::time::Duration;

use crate::command::{ActorId, AnimationId, Command, Easing, ImageId, SceneKind, TooltipId};
use crate::error::CardResult;
use crate::input::PointerTarget;
use crate::layout::{
    AnchorPoint, Point, XAnchorPolicy, anchor_to_viewport, clamp_actor_scale,
    compute_cover_transform,
};
use crate::scene::SceneContext;
use crate::tooltip::{Tooltip, TooltipSize};

/// 新郎锚点 X（视口比例，移动端更靠左）
const GROOM_X_DESKTOP: f64 = 0.33;
const GROOM_X_MOBILE: f64 = 0.2;

/// 角色共用的纵向锚点（锚定图片）
const ACTOR_ANCHOR_Y: f64 = 0.62;

/// 新娘锚点 X（视口比例）
const BRIDE_X: f64 = 0.52;

/// 拱门锚点（X 取视口比例，Y 锚定图片）
const ARCH_ANCHOR: AnchorPoint = AnchorPoint { x: 0.5, y: 0.64 };

/// 新郎走向新娘的目标 X（视口比例）
const APPROACH_X_DESKTOP: f64 = 0.49;
const APPROACH_X_MOBILE: f64 = 0.47;

/// 走向新娘的时长
const APPROACH_DURATION: Duration = Duration::from_millis(2000);

const SPEAKER_GROOM: &str = "Groom";
const ADMIRE_TEXT: &str = "She's absolutely stunning!";

/// 月球场景的剧情阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    /// 显示赞叹台词，等待点击
    ShowingAdmiration,
    /// 新郎走向新娘
    Approaching,
    /// 已请求切换场景
    Done,
}

/// 月球场景
#[derive(Debug)]
pub struct MoonScene {
    phase: MoonPhase,
    /// 新郎当前位置
    groom_position: Point,
}

impl MoonScene {
    /// 进入场景：铺背景、放置三个角色、直接显示台词框
    pub fn enter(ctx: &SceneContext) -> CardResult<(Self, Vec<Command>)> {
        let background = ctx.metrics(ImageId::MoonBackground)?;
        let transform = compute_cover_transform(background, ctx.viewport)?;
        let actor_scale = clamp_actor_scale(ctx.viewport.min_side());

        let groom_x = if ctx.is_mobile {
            GROOM_X_MOBILE
        } else {
            GROOM_X_DESKTOP
        };
        let groom_position = anchor_to_viewport(
            AnchorPoint {
                x: groom_x,
                y: ACTOR_ANCHOR_Y,
            },
            background,
            &transform,
            ctx.viewport,
            XAnchorPolicy::Viewport,
        );
        // 新娘与新郎同一水平线
        let bride_position = anchor_to_viewport(
            AnchorPoint {
                x: BRIDE_X,
                y: ACTOR_ANCHOR_Y,
            },
            background,
            &transform,
            ctx.viewport,
            XAnchorPolicy::Viewport,
        );
        let arch_position = anchor_to_viewport(
            ARCH_ANCHOR,
            background,
            &transform,
            ctx.viewport,
            XAnchorPolicy::Viewport,
        );

        let tooltip = Tooltip::above_actor(
            SPEAKER_GROOM,
            ADMIRE_TEXT,
            groom_position,
            ctx.actor_display_height(ImageId::Groom, actor_scale)?,
            TooltipSize::moon(ctx.viewport, ctx.dpr, ctx.is_mobile),
        );

        let commands = vec![
            Command::ShowBackground {
                image: ImageId::MoonBackground,
                scale: transform.scale,
            },
            Command::PlaceActor {
                actor: ActorId::Groom,
                image: ImageId::Groom,
                position: groom_position,
                scale: actor_scale,
                interactive: true,
            },
            Command::PlaceActor {
                actor: ActorId::Bride,
                image: ImageId::Bride,
                position: bride_position,
                scale: actor_scale,
                interactive: true,
            },
            Command::PlaceActor {
                actor: ActorId::WeddingArch,
                image: ImageId::WeddingArch,
                position: arch_position,
                scale: actor_scale,
                interactive: true,
            },
            Command::ShowTooltip {
                id: TooltipId::GroomSpeech,
                tooltip,
            },
        ];

        let scene = Self {
            phase: MoonPhase::ShowingAdmiration,
            groom_position,
        };
        Ok((scene, commands))
    }

    /// 处理指针按下：首次点击触发走向新娘，其余忽略
    pub fn on_pointer_down(
        &mut self,
        _target: PointerTarget,
        ctx: &SceneContext,
    ) -> CardResult<Vec<Command>> {
        match self.phase {
            MoonPhase::ShowingAdmiration => {
                self.phase = MoonPhase::Approaching;
                let target_x = if ctx.is_mobile {
                    APPROACH_X_MOBILE
                } else {
                    APPROACH_X_DESKTOP
                } * f64::from(ctx.viewport.width);

                Ok(vec![
                    Command::HideTooltip {
                        id: TooltipId::GroomSpeech,
                    },
                    Command::MoveActor {
                        actor: ActorId::Groom,
                        to: Point::new(target_x, self.groom_position.y),
                        duration: APPROACH_DURATION,
                        easing: Easing::Power2,
                        animation: AnimationId::GroomApproach,
                    },
                ])
            }

            MoonPhase::Approaching | MoonPhase::Done => Ok(Vec::new()),
        }
    }

    /// 处理补间完成回报
    pub fn on_animation_complete(&mut self, id: AnimationId) -> Vec<Command> {
        match (self.phase, id) {
            (MoonPhase::Approaching, AnimationId::GroomApproach) => {
                self.phase = MoonPhase::Done;
                vec![Command::ChangeScene {
                    next: SceneKind::SaveTheDate,
                }]
            }
            _ => Vec::new(),
        }
    }

    /// 当前剧情阶段
    pub fn phase(&self) -> MoonPhase {
        self.phase
    }
}
