//! # card-player
//!
//! 互动贺卡的无头播放器：加载（模拟）资源、自动点击推进剧情，
//! 把整张卡片从预载一路播放到 Save the Date 终局。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p host-cli
//! cargo run -p host-cli -- --width 390 --height 844 --dpr 3 --mobile
//! cargo run -p host-cli -- --realtime        # 按真实时长播放补间
//! cargo run -p host-cli -- --trace           # 命令流输出为 JSON 行
//! ```
//!
//! 无头模式不做真实的图片解码，图片元数据来自内置的规范尺寸表；
//! 补间不做插值，按（可选的）时长等待后直接回报完成。

use anyhow::ensure;
use clap::Parser;
use tracing::info;

use card_runtime::{CardRuntime, Command, SceneContext, SceneInput, ViewportSize, assets};
use host_cli::sim::register_asset;
use host_cli::{CommandExecutor, RenderState};

/// 播放循环的收敛上限（正常播放 20 步以内结束）
const MAX_STEPS: usize = 64;

#[derive(Parser)]
#[command(name = "card-player")]
#[command(about = "互动贺卡的无头播放器")]
#[command(version)]
struct Cli {
    /// 窗口 CSS 宽度
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// 窗口 CSS 高度
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// 设备像素比
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// 按移动端变体加载资源
    #[arg(long)]
    mobile: bool,

    /// 按真实时长播放补间（默认立即完成）
    #[arg(long)]
    realtime: bool,

    /// 把命令流输出为 JSON 行
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let viewport = ViewportSize::from_window(cli.width, cli.height, cli.dpr)?;
    info!(
        width = viewport.width,
        height = viewport.height,
        mobile = cli.mobile,
        "视口就绪"
    );

    let mut runtime = CardRuntime::new(SceneContext::new(viewport, cli.dpr, cli.mobile));
    let mut executor = CommandExecutor::new();
    let mut state = RenderState::new();

    // 启动图先行加载，之后才能进入预载场景
    let boot = assets::boot_image();
    register_asset(&mut runtime, &boot)?;
    info!(path = %boot.path, "启动图就绪");

    let commands = runtime.start()?;
    apply(&mut executor, &mut state, &commands, cli.trace)?;

    let mut steps = 0;
    while !runtime.is_finished() {
        steps += 1;
        ensure!(steps <= MAX_STEPS, "播放循环未在 {MAX_STEPS} 步内收敛");

        let input = next_input(&cli, &mut runtime, &mut executor, &mut state)?;
        let commands = runtime.dispatch(input)?;
        apply(&mut executor, &mut state, &commands, cli.trace)?;
    }

    info!("播放完成：save the date!");
    Ok(())
}

/// 决定下一个输入：待加载资源 → 进行中的补间 → 自动点击
fn next_input(
    cli: &Cli,
    runtime: &mut CardRuntime,
    executor: &mut CommandExecutor,
    state: &mut RenderState,
) -> anyhow::Result<SceneInput> {
    if !state.pending_assets.is_empty() {
        simulate_load(cli, runtime, executor, state)?;
        return Ok(SceneInput::LoadComplete);
    }

    if let Some(animation) = state.pending_animation.clone() {
        if cli.realtime {
            std::thread::sleep(animation.duration);
        }
        state.finish_animation();
        info!(animation = ?animation.id, actor = ?animation.actor, "补间完成");
        return Ok(SceneInput::animation_complete(animation.id));
    }

    info!("点击");
    Ok(SceneInput::click())
}

/// 模拟资源加载：逐个注册元数据并回报聚合进度
fn simulate_load(
    cli: &Cli,
    runtime: &mut CardRuntime,
    executor: &mut CommandExecutor,
    state: &mut RenderState,
) -> anyhow::Result<()> {
    let assets = std::mem::take(&mut state.pending_assets);
    let total = assets.len();

    for (index, asset) in assets.iter().enumerate() {
        register_asset(runtime, asset)?;
        let fraction = (index + 1) as f64 / total as f64;
        let commands = runtime.dispatch(SceneInput::LoadProgress { fraction })?;
        apply(executor, state, &commands, cli.trace)?;
    }
    Ok(())
}

/// 执行一批 Command
fn apply(
    executor: &mut CommandExecutor,
    state: &mut RenderState,
    commands: &[Command],
    trace: bool,
) -> anyhow::Result<()> {
    for command in commands {
        if trace {
            println!("{}", serde_json::to_string(command)?);
        }
        executor.execute(command, state);
    }
    Ok(())
}
