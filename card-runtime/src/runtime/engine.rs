//! # Engine 模块
//!
//! 贺卡驱动循环。
//!
//! ## 执行模型
//!
//! ```text
//! dispatch(input) -> Vec<Command>
//! ```
//!
//! 1. 把输入交给当前场景，收集其产生的 Command
//! 2. 扫描结果中的 `ChangeScene`：构造下一个场景（旧实例随之销毁），
//!    把新场景的进入效果追加到同一批输出
//! 3. `ChangeScene` 本身保留在输出中，Host 据此释放旧场景资源
//!
//! 单线程协作式：一次只处理一个输入或完成回报，没有并行执行。

use crate::command::{Command, ImageId, SceneKind};
use crate::error::{CardResult, RuntimeError};
use crate::input::SceneInput;
use crate::layout::ImageMetrics;
use crate::scene::{Scene, SceneContext};

/// 贺卡执行引擎
///
/// # 使用示例
///
/// ```ignore
/// let mut runtime = CardRuntime::new(SceneContext::new(viewport, dpr, is_mobile));
/// runtime.register_image_metrics(ImageId::LoadingBackground, boot_metrics)?;
///
/// let mut commands = runtime.start()?;
/// loop {
///     // Host 执行 commands，采集下一个输入……
///     commands = runtime.dispatch(input)?;
///     if runtime.is_finished() {
///         break;
///     }
/// }
/// ```
pub struct CardRuntime {
    /// 当前场景（`start` 之前为空）
    scene: Option<Scene>,
    /// 场景上下文
    context: SceneContext,
}

impl CardRuntime {
    /// 创建新的 Runtime 实例
    pub fn new(context: SceneContext) -> Self {
        Self {
            scene: None,
            context,
        }
    }

    /// 启动：进入预载场景
    ///
    /// 调用前 Host 必须已注册启动背景图的元数据。
    /// 重复调用会从预载场景重新开始。
    pub fn start(&mut self) -> CardResult<Vec<Command>> {
        let (scene, mut commands) = Scene::enter(SceneKind::Preloader, &self.context)?;
        self.scene = Some(scene);
        self.process_transitions(&mut commands)?;
        Ok(commands)
    }

    /// 核心驱动函数
    ///
    /// 把输入交给当前场景并处理场景切换。
    /// 未声明转换的输入返回空列表（静默忽略）。
    pub fn dispatch(&mut self, input: SceneInput) -> CardResult<Vec<Command>> {
        let scene = self.scene.as_mut().ok_or(RuntimeError::NotStarted)?;
        let mut commands = scene.handle(&input, &self.context)?;
        self.process_transitions(&mut commands)?;
        Ok(commands)
    }

    /// 处理命令流中的场景切换
    ///
    /// 新场景的进入效果可能再含 `ChangeScene`，按出现顺序逐一处理。
    fn process_transitions(&mut self, commands: &mut Vec<Command>) -> CardResult<()> {
        let mut index = 0;
        while index < commands.len() {
            if let Command::ChangeScene { next } = &commands[index] {
                let (scene, entered) = Scene::enter(*next, &self.context)?;
                self.scene = Some(scene);
                commands.extend(entered);
            }
            index += 1;
        }
        Ok(())
    }

    /// 注册图片元数据（加载完成时由 Host 调用）
    pub fn register_image_metrics(
        &mut self,
        image: ImageId,
        metrics: ImageMetrics,
    ) -> CardResult<()> {
        metrics.validate()?;
        self.context.register_metrics(image, metrics);
        Ok(())
    }

    /// 场景上下文
    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    /// 当前场景标识（`start` 之前为空）
    pub fn scene_kind(&self) -> Option<SceneKind> {
        self.scene.as_ref().map(Scene::kind)
    }

    /// 是否已到终局（进入 Save the Date 场景）
    pub fn is_finished(&self) -> bool {
        matches!(self.scene_kind(), Some(SceneKind::SaveTheDate))
    }
}
