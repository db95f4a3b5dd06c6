//! # Sim 模块
//!
//! 无头模式的资源模拟：不做真实的图片解码，
//! 用内置的规范尺寸表代替解码结果。

use card_runtime::{AssetId, AssetRequest, CardResult, CardRuntime, ImageId, ImageMetrics};

/// 无头模式下的规范图片尺寸（真实宿主由解码结果提供）
pub fn canonical_metrics(image: ImageId) -> ImageMetrics {
    let (width, height) = match image {
        ImageId::LoadingBackground | ImageId::EarthBackground | ImageId::MoonBackground => {
            (1920, 1080)
        }
        ImageId::Groom => (170, 320),
        ImageId::Bride => (150, 300),
        ImageId::WeddingArch => (400, 300),
        ImageId::Rocket => (250, 420),
        ImageId::SaveTheDate => (1600, 900),
    };
    ImageMetrics {
        natural_width: width,
        natural_height: height,
    }
}

/// 注册单个资源（图片注册规范元数据，音频无需元数据）
pub fn register_asset(runtime: &mut CardRuntime, asset: &AssetRequest) -> CardResult<()> {
    if let AssetId::Image(image) = asset.id {
        runtime.register_image_metrics(image, canonical_metrics(image))?;
    }
    Ok(())
}
