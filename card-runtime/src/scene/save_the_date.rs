//! # Save the Date 场景
//!
//! 终局卡片：深色底 + cover 铺放的卡片图。进入即结束，不响应任何输入。

use crate::command::{Command, ImageId};
use crate::error::CardResult;
use crate::layout::compute_cover_transform;
use crate::scene::SceneContext;

/// 底色（letterbox）
const BACKDROP_COLOR: u32 = 0x040402;

/// Save the Date 场景
#[derive(Debug)]
pub struct SaveTheDateScene;

impl SaveTheDateScene {
    /// 进入场景：铺底色与卡片图
    pub fn enter(ctx: &SceneContext) -> CardResult<(Self, Vec<Command>)> {
        let card = ctx.metrics(ImageId::SaveTheDate)?;
        let transform = compute_cover_transform(card, ctx.viewport)?;

        let commands = vec![
            Command::FillBackdrop {
                color: BACKDROP_COLOR,
            },
            Command::ShowBackground {
                image: ImageId::SaveTheDate,
                scale: transform.scale,
            },
        ];

        Ok((Self, commands))
    }
}
