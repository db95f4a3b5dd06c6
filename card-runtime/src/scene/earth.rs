//! # 地球场景
//!
//! 出发剧情：新郎睡过头，三步走到火箭旁，火箭升空飞向月球。
//!
//! ## 剧情阶段
//!
//! ```text
//! AwaitingFirstClick --点击--> ShowingIntro --点击--> ShowingLaunchPrompt
//!     --点击--> Walking(1..3) --第3步完成--> Launching --升空完成--> Done
//! ```
//!
//! 行走是单一幂等保护的动作：第 1 步与后续步共用同一触发函数，
//! busy 标志保证上一步的补间完成前不会开始下一步。

use std::time::Duration;

use crate::command::{ActorId, AnimationId, AudioId, Command, Easing, ImageId, SceneKind, TooltipId};
use crate::error::CardResult;
use crate::input::PointerTarget;
use crate::layout::{
    AnchorPoint, Point, WalkPlan, XAnchorPolicy, anchor_to_viewport, compute_cover_transform,
};
use crate::scene::SceneContext;
use crate::tooltip::{Tooltip, TooltipSize};

/// 新郎锚点（X 取视口比例，Y 锚定图片）
const GROOM_ANCHOR: AnchorPoint = AnchorPoint { x: 0.2, y: 0.83 };

/// 火箭锚点（X 取视口比例，Y 锚定图片）
const ROCKET_ANCHOR: AnchorPoint = AnchorPoint { x: 0.8, y: 0.87 };

/// 行走总步数
const WALK_TOTAL_STEPS: u8 = 3;

/// 单步行走时长
const WALK_STEP_DURATION: Duration = Duration::from_millis(1000);

/// 火箭升空时长
const LAUNCH_DURATION: Duration = Duration::from_millis(1500);

/// 火箭升空目标高度（视口高度比例）
const LAUNCH_TARGET_FRACTION: f64 = 0.30;

const SPEAKER_GROOM: &str = "Groom";
const OVERLAY_PROMPT: &str = "Click anywhere to move the groom";
const INTRO_TEXT: &str = "Oops! I overslept! I need to get to the Moon quickly!";
const LAUNCH_PROMPT_TEXT: &str = "Glad I prepared my rocket!";
const ALMOST_THERE_TEXT: &str = "Almost there!";
const ONE_MORE_STEP_TEXT: &str = "Just one more step!";

/// 地球场景的剧情阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarthPhase {
    /// 等待第一次点击（显示全屏引导文字）
    AwaitingFirstClick,
    /// 显示开场台词
    ShowingIntro,
    /// 显示火箭台词，等待触发行走
    ShowingLaunchPrompt,
    /// 逐步走向火箭
    Walking,
    /// 火箭升空中
    Launching,
    /// 已请求切换场景
    Done,
}

/// 地球场景
#[derive(Debug)]
pub struct EarthScene {
    phase: EarthPhase,
    /// 已开始的行走步数（0..=3，只增不减）
    step: u8,
    /// 补间进行中的重入保护
    busy: bool,
    /// 行走计划（进入场景时确定）
    walk: WalkPlan,
    /// 新郎当前位置（行走完成时更新）
    groom_position: Point,
    /// 火箭位置
    rocket_position: Point,
}

impl EarthScene {
    /// 进入场景：铺背景、放置角色、显示引导文字
    pub fn enter(ctx: &SceneContext) -> CardResult<(Self, Vec<Command>)> {
        let background = ctx.metrics(ImageId::EarthBackground)?;
        let transform = compute_cover_transform(background, ctx.viewport)?;

        let groom_position = anchor_to_viewport(
            GROOM_ANCHOR,
            background,
            &transform,
            ctx.viewport,
            XAnchorPolicy::Viewport,
        );
        let rocket_position = anchor_to_viewport(
            ROCKET_ANCHOR,
            background,
            &transform,
            ctx.viewport,
            XAnchorPolicy::Viewport,
        );

        let commands = vec![
            Command::ShowBackground {
                image: ImageId::EarthBackground,
                scale: transform.scale,
            },
            Command::PlaceActor {
                actor: ActorId::Groom,
                image: ImageId::Groom,
                position: groom_position,
                scale: 1.0,
                interactive: true,
            },
            // 火箭在第二句台词出现前不接收点击
            Command::PlaceActor {
                actor: ActorId::Rocket,
                image: ImageId::Rocket,
                position: rocket_position,
                scale: 1.0,
                interactive: false,
            },
            Command::ShowOverlayPrompt {
                text: OVERLAY_PROMPT.to_string(),
            },
        ];

        let scene = Self {
            phase: EarthPhase::AwaitingFirstClick,
            step: 0,
            busy: false,
            walk: WalkPlan::new(groom_position.x, rocket_position.x, WALK_TOTAL_STEPS),
            groom_position,
            rocket_position,
        };
        Ok((scene, commands))
    }

    /// 处理指针按下
    ///
    /// 前两个阶段接受任意位置的点击；行走阶段点击任意位置或任一角色
    /// 都会推进下一步（补间进行中静默忽略）。
    pub fn on_pointer_down(
        &mut self,
        _target: PointerTarget,
        ctx: &SceneContext,
    ) -> CardResult<Vec<Command>> {
        match self.phase {
            EarthPhase::AwaitingFirstClick => {
                self.phase = EarthPhase::ShowingIntro;
                let tooltip = Tooltip::above_actor(
                    SPEAKER_GROOM,
                    INTRO_TEXT,
                    self.groom_position,
                    ctx.actor_display_height(ImageId::Groom, 1.0)?,
                    TooltipSize::earth(ctx.viewport, ctx.dpr, ctx.is_mobile),
                );
                Ok(vec![
                    Command::PlayBgm {
                        audio: AudioId::MainTheme,
                        looping: true,
                    },
                    Command::HideOverlayPrompt,
                    Command::ShowTooltip {
                        id: TooltipId::GroomSpeech,
                        tooltip,
                    },
                ])
            }

            EarthPhase::ShowingIntro => {
                self.phase = EarthPhase::ShowingLaunchPrompt;
                Ok(vec![
                    Command::SetTooltipText {
                        id: TooltipId::GroomSpeech,
                        text: LAUNCH_PROMPT_TEXT.to_string(),
                    },
                    Command::SetActorInteractive {
                        actor: ActorId::Rocket,
                        interactive: true,
                    },
                ])
            }

            EarthPhase::ShowingLaunchPrompt | EarthPhase::Walking => Ok(self.walk_step()),

            // 升空中与终局不再响应点击
            EarthPhase::Launching | EarthPhase::Done => Ok(Vec::new()),
        }
    }

    /// 触发一步行走
    ///
    /// busy 或步数用尽时为空操作。
    fn walk_step(&mut self) -> Vec<Command> {
        if self.busy || self.step >= WALK_TOTAL_STEPS {
            return Vec::new();
        }

        self.step += 1;
        self.busy = true;

        let mut commands = Vec::new();
        match self.step {
            1 => {
                self.phase = EarthPhase::Walking;
                commands.push(Command::HideTooltip {
                    id: TooltipId::GroomSpeech,
                });
            }
            2 => commands.push(Command::HideTooltip {
                id: TooltipId::AlmostThere,
            }),
            3 => commands.push(Command::HideTooltip {
                id: TooltipId::OneMoreStep,
            }),
            _ => {}
        }

        commands.push(Command::MoveActor {
            actor: ActorId::Groom,
            to: Point::new(self.walk.target_x(self.step), self.groom_position.y),
            duration: WALK_STEP_DURATION,
            easing: Easing::Power2,
            animation: AnimationId::WalkStep,
        });
        commands
    }

    /// 处理补间完成回报
    pub fn on_animation_complete(
        &mut self,
        id: AnimationId,
        ctx: &SceneContext,
    ) -> CardResult<Vec<Command>> {
        match (self.phase, id) {
            (EarthPhase::Walking, AnimationId::WalkStep) => {
                self.busy = false;
                self.groom_position.x = self.walk.target_x(self.step);
                self.after_walk_step(ctx)
            }

            (EarthPhase::Launching, AnimationId::RocketLaunch) => {
                self.phase = EarthPhase::Done;
                Ok(vec![Command::ChangeScene {
                    next: SceneKind::Moon,
                }])
            }

            _ => Ok(Vec::new()),
        }
    }

    /// 单步行走结束后的效果
    fn after_walk_step(&mut self, ctx: &SceneContext) -> CardResult<Vec<Command>> {
        let size = TooltipSize::earth(ctx.viewport, ctx.dpr, ctx.is_mobile);
        let groom_height = ctx.actor_display_height(ImageId::Groom, 1.0)?;

        match self.step {
            1 => Ok(vec![Command::ShowTooltip {
                id: TooltipId::AlmostThere,
                tooltip: Tooltip::above_actor(
                    SPEAKER_GROOM,
                    ALMOST_THERE_TEXT,
                    self.groom_position,
                    groom_height,
                    size,
                ),
            }]),

            2 => Ok(vec![Command::ShowTooltip {
                id: TooltipId::OneMoreStep,
                tooltip: Tooltip::above_actor(
                    SPEAKER_GROOM,
                    ONE_MORE_STEP_TEXT,
                    self.groom_position,
                    groom_height,
                    size,
                ),
            }]),

            3 => {
                // 到达火箭：新郎消失，火箭升空
                self.phase = EarthPhase::Launching;
                self.busy = true;
                Ok(vec![
                    Command::SetActorVisible {
                        actor: ActorId::Groom,
                        visible: false,
                    },
                    Command::MoveActor {
                        actor: ActorId::Rocket,
                        to: Point::new(
                            self.rocket_position.x,
                            LAUNCH_TARGET_FRACTION * f64::from(ctx.viewport.height),
                        ),
                        duration: LAUNCH_DURATION,
                        easing: Easing::Power2,
                        animation: AnimationId::RocketLaunch,
                    },
                ])
            }

            _ => Ok(Vec::new()),
        }
    }

    /// 当前剧情阶段
    pub fn phase(&self) -> EarthPhase {
        self.phase
    }

    /// 已开始的行走步数
    pub fn step(&self) -> u8 {
        self.step
    }

    /// 是否有补间进行中
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
