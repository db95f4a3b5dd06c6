//! # Host 层
//!
//! 互动贺卡的无头宿主：执行 `card-runtime` 发出的 Command，
//! 模拟资源加载与补间完成，在终端中完整播放贺卡。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 资源加载（无头模式下用规范尺寸表代替真实解码）
//! - 补间推进与完成回报
//! - 输入采集（无头模式下为自动点击）
//! - 将 Runtime 的 Command 转换为画面状态更新
//!
//! Host 层不包含剧情逻辑，只负责执行 Runtime 发出的 Command。

pub mod executor;
pub mod render_state;
pub mod sim;

pub use executor::{CommandExecutor, ExecuteResult};
pub use render_state::{PendingAnimation, RenderState, SpriteState, TooltipState};
