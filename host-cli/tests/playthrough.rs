//! # 完整播放集成测试
//!
//! 测试 Runtime → CommandExecutor → RenderState 的执行链路：
//! 从预载一路推进到 Save the Date 终局。
//! 这些测试不依赖真实的渲染/音频设备。

use card_runtime::{
    ActorId, AnimationId, CardRuntime, Command, ImageId, SceneContext, SceneInput, SceneKind,
    TooltipId, ViewportSize, assets,
};
use host_cli::sim::register_asset;
use host_cli::{CommandExecutor, RenderState};

/// 测试用的无头播放器
struct Player {
    runtime: CardRuntime,
    executor: CommandExecutor,
    state: RenderState,
}

impl Player {
    fn new(width: u32, height: u32, is_mobile: bool) -> Self {
        let viewport = ViewportSize::new(width, height).unwrap();
        let mut runtime = CardRuntime::new(SceneContext::new(viewport, 1.0, is_mobile));
        register_asset(&mut runtime, &assets::boot_image()).unwrap();
        Self {
            runtime,
            executor: CommandExecutor::new(),
            state: RenderState::new(),
        }
    }

    fn apply(&mut self, commands: Vec<Command>) {
        for command in &commands {
            self.executor.execute(command, &mut self.state);
        }
    }

    fn start(&mut self) {
        let commands = self.runtime.start().unwrap();
        self.apply(commands);
    }

    fn dispatch(&mut self, input: SceneInput) {
        let commands = self.runtime.dispatch(input).unwrap();
        self.apply(commands);
    }

    /// 模拟全部资源加载完成
    fn load_all(&mut self) {
        let pending = std::mem::take(&mut self.state.pending_assets);
        assert!(!pending.is_empty(), "预载场景应已发出加载清单");
        let total = pending.len();
        for (index, asset) in pending.iter().enumerate() {
            register_asset(&mut self.runtime, asset).unwrap();
            self.dispatch(SceneInput::LoadProgress {
                fraction: (index + 1) as f64 / total as f64,
            });
        }
        self.dispatch(SceneInput::LoadComplete);
    }

    /// 结束进行中的补间并回报完成
    fn finish_animation(&mut self) {
        let id = self.state.finish_animation().expect("应有进行中的补间");
        self.dispatch(SceneInput::animation_complete(id));
    }
}

#[test]
fn test_full_playthrough_desktop() {
    let mut player = Player::new(1280, 720, false);

    player.start();
    assert_eq!(player.runtime.scene_kind(), Some(SceneKind::Preloader));
    assert_eq!(
        player.state.progress_text.as_deref(),
        Some("Loading... (0%)")
    );
    assert_eq!(
        player.state.background.map(|(image, _)| image),
        Some(ImageId::LoadingBackground)
    );

    player.load_all();
    assert_eq!(player.runtime.scene_kind(), Some(SceneKind::Earth));
    assert_eq!(
        player.state.overlay_prompt.as_deref(),
        Some("Click anywhere to move the groom")
    );
    // 新郎 20%、火箭 80% 视口宽度；火箭初始不可点击
    assert_eq!(player.state.sprites[&ActorId::Groom].position.x, 256.0);
    assert_eq!(player.state.sprites[&ActorId::Rocket].position.x, 1024.0);
    assert!(!player.state.sprites[&ActorId::Rocket].interactive);

    // 第一次点击：音乐响起、引导消失、开场台词
    player.dispatch(SceneInput::click());
    assert!(player.state.bgm.is_some());
    assert!(player.state.overlay_prompt.is_none());
    let speech = &player.state.tooltips[&TooltipId::GroomSpeech];
    assert!(speech.visible);
    assert_eq!(
        speech.tooltip.text,
        "Oops! I overslept! I need to get to the Moon quickly!"
    );

    // 第二次点击：台词更换、火箭可点
    player.dispatch(SceneInput::click());
    assert_eq!(
        player.state.tooltips[&TooltipId::GroomSpeech].tooltip.text,
        "Glad I prepared my rocket!"
    );
    assert!(player.state.sprites[&ActorId::Rocket].interactive);

    // 第 1 步（点火箭触发）：目标 X = 256 + (1024−256)/3
    player.dispatch(SceneInput::click_actor(ActorId::Rocket));
    assert_eq!(
        player.state.pending_animation.as_ref().unwrap().to.x,
        512.0
    );
    assert!(!player.state.tooltips[&TooltipId::GroomSpeech].visible);

    // 补间未完成：点击不改变任何状态
    player.dispatch(SceneInput::click());
    assert_eq!(
        player.state.pending_animation.as_ref().unwrap().to.x,
        512.0
    );

    player.finish_animation();
    assert_eq!(player.state.sprites[&ActorId::Groom].position.x, 512.0);
    assert!(player.state.tooltips[&TooltipId::AlmostThere].visible);

    // 第 2 步
    player.dispatch(SceneInput::click());
    player.finish_animation();
    assert!(!player.state.tooltips[&TooltipId::AlmostThere].visible);
    assert!(player.state.tooltips[&TooltipId::OneMoreStep].visible);

    // 第 3 步：新郎到达并隐身，火箭升空
    player.dispatch(SceneInput::click());
    assert!(!player.state.tooltips[&TooltipId::OneMoreStep].visible);
    player.finish_animation();
    assert!(!player.state.sprites[&ActorId::Groom].visible);
    let launch = player.state.pending_animation.clone().unwrap();
    assert_eq!(launch.id, AnimationId::RocketLaunch);
    assert_eq!(launch.actor, ActorId::Rocket);
    // 垂直升至视口高度的 30%
    assert_eq!(launch.to.x, 1024.0);
    assert_eq!(launch.to.y, 216.0);

    // 升空完成 → 月球场景：三个角色 + 开场台词
    player.finish_animation();
    assert_eq!(player.runtime.scene_kind(), Some(SceneKind::Moon));
    assert_eq!(player.state.sprites.len(), 3);
    assert_eq!(
        player.state.tooltips[&TooltipId::GroomSpeech].tooltip.text,
        "She's absolutely stunning!"
    );
    // 背景音乐跨场景持续
    assert!(player.state.bgm.is_some());

    // 一次点击走向新娘
    player.dispatch(SceneInput::click());
    assert!(!player.state.tooltips[&TooltipId::GroomSpeech].visible);
    assert_eq!(
        player.state.pending_animation.as_ref().unwrap().id,
        AnimationId::GroomApproach
    );
    player.finish_animation();

    // 终局卡片
    assert_eq!(player.runtime.scene_kind(), Some(SceneKind::SaveTheDate));
    assert!(player.runtime.is_finished());
    assert_eq!(
        player.state.background.map(|(image, _)| image),
        Some(ImageId::SaveTheDate)
    );
    assert_eq!(player.state.backdrop, Some(0x040402));

    // 终局不再响应输入
    player.dispatch(SceneInput::click());
    assert!(player.state.pending_animation.is_none());
    assert_eq!(player.runtime.scene_kind(), Some(SceneKind::SaveTheDate));
}

#[test]
fn test_mobile_variant_manifest_and_anchors() {
    let mut player = Player::new(400, 800, true);

    player.start();
    // 移动端清单使用高分辨率切图变体
    assert!(player
        .state
        .pending_assets
        .iter()
        .any(|a| a.path == "assets/images/groom250.png"));
    assert!(player
        .state
        .pending_assets
        .iter()
        .any(|a| a.path == "assets/images/save-the-date-phone.png"));

    player.load_all();
    assert_eq!(player.runtime.scene_kind(), Some(SceneKind::Earth));
    // 新郎仍取视口宽度的 20%
    assert_eq!(player.state.sprites[&ActorId::Groom].position.x, 80.0);
}

#[test]
fn test_progress_text_tracks_fractions() {
    let mut player = Player::new(1280, 720, false);
    player.start();

    player.dispatch(SceneInput::LoadProgress { fraction: 0.5 });
    assert_eq!(
        player.state.progress_text.as_deref(),
        Some("Loading... (50%)")
    );

    player.dispatch(SceneInput::LoadProgress { fraction: 0.874 });
    assert_eq!(
        player.state.progress_text.as_deref(),
        Some("Loading... (87%)")
    );
}
