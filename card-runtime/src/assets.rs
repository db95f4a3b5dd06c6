//! # Assets 模块
//!
//! 静态资源清单与聚合加载进度。
//!
//! ## 设计说明
//!
//! - 移动端与桌面端使用不同分辨率的切图，由清单统一选择
//! - Runtime 只描述"要加载什么"，实际的获取与解码由 Host 负责
//! - 加载失败或缓慢只会推迟完成信号，不影响剧情状态机

use serde::{Deserialize, Serialize};

use crate::command::{AudioId, ImageId};

/// 资源标识（图片或音频）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetId {
    /// 图片
    Image(ImageId),
    /// 音频
    Audio(AudioId),
}

/// 单个资源加载请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRequest {
    /// 资源标识
    pub id: AssetId,
    /// 资源路径
    pub path: String,
}

impl AssetRequest {
    fn image(id: ImageId, path: &str) -> Self {
        Self {
            id: AssetId::Image(id),
            path: path.to_string(),
        }
    }

    fn audio(id: AudioId, path: &str) -> Self {
        Self {
            id: AssetId::Audio(id),
            path: path.to_string(),
        }
    }
}

/// 启动图（进入预载场景前由 Host 先行加载）
pub fn boot_image() -> AssetRequest {
    AssetRequest::image(
        ImageId::LoadingBackground,
        "assets/images/blurred_background.png",
    )
}

/// 预载场景的完整资源清单
///
/// 角色切图与卡片按设备选择变体。
pub fn manifest(is_mobile: bool) -> Vec<AssetRequest> {
    let mut assets = vec![
        AssetRequest::audio(AudioId::MainTheme, "assets/audio/theme_song.mp3"),
        AssetRequest::image(ImageId::EarthBackground, "assets/images/earth_background.png"),
        AssetRequest::image(ImageId::MoonBackground, "assets/images/moon_background.png"),
    ];

    if is_mobile {
        assets.extend([
            AssetRequest::image(ImageId::Groom, "assets/images/groom250.png"),
            AssetRequest::image(ImageId::Bride, "assets/images/bride230.png"),
            AssetRequest::image(ImageId::WeddingArch, "assets/images/weddingarch450.png"),
            AssetRequest::image(ImageId::Rocket, "assets/images/rocketship350.png"),
            AssetRequest::image(ImageId::SaveTheDate, "assets/images/save-the-date-phone.png"),
        ]);
    } else {
        assets.extend([
            AssetRequest::image(ImageId::Groom, "assets/images/groom170.png"),
            AssetRequest::image(ImageId::Bride, "assets/images/bride150.png"),
            AssetRequest::image(ImageId::WeddingArch, "assets/images/weddingarch400300.png"),
            AssetRequest::image(ImageId::Rocket, "assets/images/rocketship250.png"),
            AssetRequest::image(
                ImageId::SaveTheDate,
                "assets/images/save-the-date-landscape.png",
            ),
        ]);
    }

    assets
}

/// 聚合加载进度
///
/// 构造时夹取到 [0, 1]；非有限值按 0 处理。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadProgress(f64);

impl LoadProgress {
    /// 创建进度值
    pub fn new(fraction: f64) -> Self {
        if fraction.is_finite() {
            Self(fraction.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// 已完成比例（0..1）
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// 整数百分比（四舍五入）
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// 是否已完成
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}
