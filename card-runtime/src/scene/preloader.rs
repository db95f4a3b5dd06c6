//! # 预载场景
//!
//! 显示模糊背景与聚合加载进度，全部资源就绪后进入地球场景。
//!
//! 进度文本只反映 Host 回报的比例；加载缓慢或失败只会推迟完成信号，
//! 不会让 UI 进入混乱状态。

use crate::assets::{self, LoadProgress};
use crate::command::{Command, ImageId, SceneKind};
use crate::error::CardResult;
use crate::layout::compute_cover_transform;
use crate::scene::SceneContext;

const LOADING_DONE_TEXT: &str = "Loading complete!";

/// 预载场景
#[derive(Debug)]
pub struct PreloaderScene {
    /// 完成信号已处理
    complete: bool,
}

impl PreloaderScene {
    /// 进入场景：铺启动背景、显示零进度、发出加载清单
    pub fn enter(ctx: &SceneContext) -> CardResult<(Self, Vec<Command>)> {
        let background = ctx.metrics(ImageId::LoadingBackground)?;
        let transform = compute_cover_transform(background, ctx.viewport)?;

        let commands = vec![
            Command::ShowBackground {
                image: ImageId::LoadingBackground,
                scale: transform.scale,
            },
            Command::SetProgressText {
                text: progress_text(LoadProgress::new(0.0)),
            },
            Command::LoadAssets {
                assets: assets::manifest(ctx.is_mobile),
            },
        ];

        Ok((Self { complete: false }, commands))
    }

    /// 聚合进度回报
    pub fn on_load_progress(&mut self, fraction: f64) -> Vec<Command> {
        if self.complete {
            return Vec::new();
        }
        vec![Command::SetProgressText {
            text: progress_text(LoadProgress::new(fraction)),
        }]
    }

    /// 完成信号：更新文本并进入地球场景
    pub fn on_load_complete(&mut self) -> Vec<Command> {
        if self.complete {
            return Vec::new();
        }
        self.complete = true;
        vec![
            Command::SetProgressText {
                text: LOADING_DONE_TEXT.to_string(),
            },
            Command::ChangeScene {
                next: SceneKind::Earth,
            },
        ]
    }
}

/// 进度文本
fn progress_text(progress: LoadProgress) -> String {
    format!("Loading... ({}%)", progress.percent())
}
