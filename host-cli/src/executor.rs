//! # CommandExecutor 模块
//!
//! 把 Runtime 发出的 Command 转换为 [`RenderState`] 更新。
//!
//! ## 设计说明
//!
//! - 执行器不直接渲染，只更新状态
//! - 补间与资源加载请求放入状态中的待办槽，由主循环消费
//! - 场景切换时清理场景级状态（对应真实引擎释放旧场景资源）

use tracing::{debug, info, warn};

use card_runtime::Command;

use crate::render_state::{PendingAnimation, RenderState, SpriteState, TooltipState};

/// 执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteResult {
    /// 状态已更新
    Ok,
    /// 开始了一个补间，结束时需回报 `AnimationComplete`
    AnimationStarted,
    /// 请求加载一批资源
    AssetsRequested,
    /// 请求切换场景
    SceneRequested,
}

/// Command 执行器
#[derive(Debug, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    /// 创建新的执行器
    pub fn new() -> Self {
        Self
    }

    /// 执行单个 Command
    pub fn execute(&mut self, command: &Command, state: &mut RenderState) -> ExecuteResult {
        match command {
            Command::LoadAssets { assets } => {
                info!(count = assets.len(), "请求加载资源");
                state.pending_assets = assets.clone();
                ExecuteResult::AssetsRequested
            }

            Command::SetProgressText { text } => {
                info!(%text, "进度");
                state.progress_text = Some(text.clone());
                ExecuteResult::Ok
            }

            Command::ShowBackground { image, scale } => {
                debug!(%image, scale, "显示背景");
                state.background = Some((*image, *scale));
                ExecuteResult::Ok
            }

            Command::FillBackdrop { color } => {
                state.backdrop = Some(*color);
                ExecuteResult::Ok
            }

            Command::PlaceActor {
                actor,
                image,
                position,
                scale,
                interactive,
            } => {
                debug!(?actor, x = position.x, y = position.y, scale, "放置角色");
                state.sprites.insert(
                    *actor,
                    SpriteState {
                        image: *image,
                        position: *position,
                        scale: *scale,
                        visible: true,
                        interactive: *interactive,
                    },
                );
                ExecuteResult::Ok
            }

            Command::SetActorVisible { actor, visible } => {
                if let Some(sprite) = state.sprites.get_mut(actor) {
                    sprite.visible = *visible;
                } else {
                    warn!(?actor, "设置可见性：角色不存在");
                }
                ExecuteResult::Ok
            }

            Command::SetActorInteractive { actor, interactive } => {
                if let Some(sprite) = state.sprites.get_mut(actor) {
                    sprite.interactive = *interactive;
                } else {
                    warn!(?actor, "设置交互：角色不存在");
                }
                ExecuteResult::Ok
            }

            Command::MoveActor {
                actor,
                to,
                duration,
                easing,
                animation,
            } => {
                if state.pending_animation.is_some() {
                    // 不应出现：Runtime 的 busy 保护保证补间不重叠
                    warn!(?actor, "上一个补间尚未完成即收到新补间");
                }
                debug!(?actor, x = to.x, y = to.y, ms = duration.as_millis() as u64, "开始补间");
                state.pending_animation = Some(PendingAnimation {
                    actor: *actor,
                    to: *to,
                    duration: *duration,
                    easing: *easing,
                    id: *animation,
                });
                ExecuteResult::AnimationStarted
            }

            Command::ShowOverlayPrompt { text } => {
                info!(%text, "引导文字");
                state.overlay_prompt = Some(text.clone());
                ExecuteResult::Ok
            }

            Command::HideOverlayPrompt => {
                state.overlay_prompt = None;
                ExecuteResult::Ok
            }

            Command::ShowTooltip { id, tooltip } => {
                info!(title = %tooltip.title, text = %tooltip.text, "提示框");
                state.tooltips.insert(
                    *id,
                    TooltipState {
                        tooltip: tooltip.clone(),
                        visible: true,
                    },
                );
                ExecuteResult::Ok
            }

            Command::SetTooltipText { id, text } => {
                if let Some(entry) = state.tooltips.get_mut(id) {
                    info!(title = %entry.tooltip.title, %text, "提示框");
                    entry.tooltip.text = text.clone();
                } else {
                    warn!(?id, "更新正文：提示框不存在");
                }
                ExecuteResult::Ok
            }

            Command::HideTooltip { id } => {
                if let Some(entry) = state.tooltips.get_mut(id) {
                    entry.visible = false;
                } else {
                    warn!(?id, "隐藏：提示框不存在");
                }
                ExecuteResult::Ok
            }

            Command::PlayBgm { audio, looping } => {
                info!(%audio, looping, "播放背景音乐");
                state.bgm = Some((*audio, *looping));
                ExecuteResult::Ok
            }

            Command::ChangeScene { next } => {
                info!(?next, "切换场景");
                state.clear_scene();
                state.scene = Some(*next);
                ExecuteResult::SceneRequested
            }
        }
    }
}
