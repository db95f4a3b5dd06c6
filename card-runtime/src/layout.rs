//! # Layout 模块
//!
//! 锚点布局：把背景图片内的归一化锚点换算为视口像素坐标。
//!
//! ## 设计说明
//!
//! - 背景以 **cover** 方式铺满视口：缩放系数取两轴比例的较大者，
//!   超出视口的部分被裁剪
//! - Y 坐标始终锚定在图片上，保证不同设备上对准同一图片特征
//! - X 坐标按锚点各自记录的策略换算：有的锚点随图片（连同裁剪偏移），
//!   有的直接取视口宽度的比例，两种用法并存
//! - 所有函数都是纯函数，相同输入必得相同输出

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// 角色缩放的基准尺寸（视口短边达到此值时角色为原始大小）
pub const ACTOR_REFERENCE_SIZE: f64 = 512.0;

/// 角色缩放的收缩系数
pub const ACTOR_SHRINK_FACTOR: f64 = 0.8;

/// 视口尺寸（设备像素）
///
/// 启动时由窗口 CSS 尺寸和设备像素比计算一次，场景生命周期内不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// 宽度（像素）
    pub width: u32,
    /// 高度（像素）
    pub height: u32,
}

impl ViewportSize {
    /// 创建视口尺寸，两个维度都必须为正
    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    /// 由窗口 CSS 尺寸和设备像素比换算（四舍五入）
    pub fn from_window(css_width: f64, css_height: f64, dpr: f64) -> Result<Self, LayoutError> {
        Self::new(
            (css_width * dpr).round() as u32,
            (css_height * dpr).round() as u32,
        )
    }

    /// 校验维度合法性
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// 视口短边长度
    pub fn min_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

/// 已加载图片的原始尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetrics {
    /// 原始宽度（像素）
    pub natural_width: u32,
    /// 原始高度（像素）
    pub natural_height: u32,
}

impl ImageMetrics {
    /// 创建图片尺寸，两个维度都必须为正
    pub fn new(natural_width: u32, natural_height: u32) -> Result<Self, LayoutError> {
        let metrics = Self {
            natural_width,
            natural_height,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// 校验维度合法性
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.natural_width == 0 || self.natural_height == 0 {
            return Err(LayoutError::InvalidImageMetrics {
                width: self.natural_width,
                height: self.natural_height,
            });
        }
        Ok(())
    }
}

/// 图片内的归一化锚点，两个分量都在 [0, 1] 区间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// 横向比例
    pub x: f64,
    /// 纵向比例
    pub y: f64,
}

/// 锚点 X 坐标的换算策略
///
/// 两种策略在参考行为中并存，属于逐锚点记录的显式约定，
/// 不做静默统一（统一会改变可见布局）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XAnchorPolicy {
    /// 与 Y 同样锚定在图片上（计入裁剪偏移）
    Image,
    /// 直接取视口宽度的比例，忽略裁剪偏移
    Viewport,
}

/// 视口像素坐标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// cover 变换
///
/// - `scale`：使图片完全覆盖视口的缩放系数
/// - `offset_x` / `offset_y`：可见区域左上角在**图片坐标系**中的位置，
///   用于把图片内锚点换算到视口
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// 计算 cover 变换
///
/// 缩放系数严格等于两轴比例中的较大者，保证图片铺满视口（可能裁剪一个轴）。
/// 两个轴比例相等（纵横比一致）时不存在分支差异，结果唯一。
pub fn compute_cover_transform(
    image: ImageMetrics,
    viewport: ViewportSize,
) -> Result<CoverTransform, LayoutError> {
    image.validate()?;
    viewport.validate()?;

    let scale_x = f64::from(viewport.width) / f64::from(image.natural_width);
    let scale_y = f64::from(viewport.height) / f64::from(image.natural_height);
    let scale = scale_x.max(scale_y);

    // 缩放后可见区域换回图片坐标系，居中裁剪
    let visible_width = f64::from(viewport.width) / scale;
    let visible_height = f64::from(viewport.height) / scale;

    Ok(CoverTransform {
        scale,
        offset_x: (f64::from(image.natural_width) - visible_width) / 2.0,
        offset_y: (f64::from(image.natural_height) - visible_height) / 2.0,
    })
}

/// 把图片内锚点换算为视口像素坐标
///
/// Y 始终锚定在图片上：`y = (anchor.y × natural_height − offset_y) × scale`。
/// X 按 `x_policy` 换算（见 [`XAnchorPolicy`]）。
pub fn anchor_to_viewport(
    anchor: AnchorPoint,
    image: ImageMetrics,
    transform: &CoverTransform,
    viewport: ViewportSize,
    x_policy: XAnchorPolicy,
) -> Point {
    let y = (anchor.y * f64::from(image.natural_height) - transform.offset_y) * transform.scale;
    let x = match x_policy {
        XAnchorPolicy::Image => {
            (anchor.x * f64::from(image.natural_width) - transform.offset_x) * transform.scale
        }
        XAnchorPolicy::Viewport => anchor.x * f64::from(viewport.width),
    };
    Point::new(x, y)
}

/// 角色缩放钳制
///
/// 大屏上角色不超过其原始像素尺寸，小屏上按视口短边等比收缩：
/// `min(1, viewport_min / 512 × 0.8)`
pub fn clamp_actor_scale(viewport_min: f64) -> f64 {
    (viewport_min / ACTOR_REFERENCE_SIZE * ACTOR_SHRINK_FACTOR).min(1.0)
}

/// 分步行走计划
///
/// 把起点到终点的水平距离均分为 `total_steps` 步。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkPlan {
    /// 起点 X
    pub start_x: f64,
    /// 终点 X
    pub end_x: f64,
    /// 总步数
    pub total_steps: u8,
}

impl WalkPlan {
    /// 创建行走计划
    pub fn new(start_x: f64, end_x: f64, total_steps: u8) -> Self {
        Self {
            start_x,
            end_x,
            total_steps,
        }
    }

    /// 第 `step` 步（1 起）的目标 X
    ///
    /// 最后一步严格取 `end_x`，避免浮点除法误差造成终点偏移。
    pub fn target_x(&self, step: u8) -> f64 {
        if step >= self.total_steps {
            return self.end_x;
        }
        self.start_x + f64::from(step) * (self.end_x - self.start_x) / f64::from(self.total_steps)
    }

    /// 是否最后一步
    pub fn is_last(&self, step: u8) -> bool {
        step >= self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(w: u32, h: u32) -> ImageMetrics {
        ImageMetrics::new(w, h).unwrap()
    }

    fn viewport(w: u32, h: u32) -> ViewportSize {
        ViewportSize::new(w, h).unwrap()
    }

    #[test]
    fn test_cover_scale_is_exact_max() {
        let cases = [
            (1920u32, 1080u32, 1280u32, 720u32),
            (1000, 2000, 1280, 720),
            (800, 600, 600, 800),
            (333, 777, 1024, 768),
        ];

        for (iw, ih, vw, vh) in cases {
            let transform = compute_cover_transform(image(iw, ih), viewport(vw, vh)).unwrap();
            let scale_x = f64::from(vw) / f64::from(iw);
            let scale_y = f64::from(vh) / f64::from(ih);
            assert_eq!(transform.scale, scale_x.max(scale_y));

            // 缩放后的图片在两个维度上都不小于视口（无缝隙）
            assert!(f64::from(iw) * transform.scale >= f64::from(vw));
            assert!(f64::from(ih) * transform.scale >= f64::from(vh));
        }
    }

    #[test]
    fn test_cover_equal_aspect_ratio_boundary() {
        // 纵横比一致：两个轴比例相等，缩放后尺寸与视口完全重合
        let transform = compute_cover_transform(image(1600, 900), viewport(800, 450)).unwrap();
        assert_eq!(transform.scale, 0.5);
        assert_eq!(transform.offset_x, 0.0);
        assert_eq!(transform.offset_y, 0.0);
    }

    #[test]
    fn test_cover_invalid_inputs() {
        assert_eq!(
            compute_cover_transform(
                ImageMetrics {
                    natural_width: 0,
                    natural_height: 100
                },
                viewport(100, 100)
            ),
            Err(LayoutError::InvalidImageMetrics {
                width: 0,
                height: 100
            })
        );

        assert_eq!(
            compute_cover_transform(
                image(100, 100),
                ViewportSize {
                    width: 100,
                    height: 0
                }
            ),
            Err(LayoutError::InvalidViewport {
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn test_anchor_y_always_image_anchored() {
        // 1000x1000 图片在 500x400 视口：scale = 0.5，纵向裁剪
        let img = image(1000, 1000);
        let vp = viewport(500, 400);
        let transform = compute_cover_transform(img, vp).unwrap();
        assert_eq!(transform.scale, 0.5);
        // 可见高度 = 400 / 0.5 = 800，offset_y = (1000 - 800) / 2 = 100
        assert_eq!(transform.offset_y, 100.0);

        let anchor = AnchorPoint { x: 0.5, y: 0.5 };
        let pos = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Viewport);
        // y = (0.5 × 1000 − 100) × 0.5 = 200（视口纵向中点）
        assert_eq!(pos.y, 200.0);
        // Viewport 策略下 x 直接取视口比例
        assert_eq!(pos.x, 250.0);
    }

    #[test]
    fn test_anchor_x_policies_differ_under_horizontal_crop() {
        // 2000x500 图片在 500x400 视口：scale = 0.8，横向裁剪
        let img = image(2000, 500);
        let vp = viewport(500, 400);
        let transform = compute_cover_transform(img, vp).unwrap();
        assert_eq!(transform.scale, 0.8);

        let anchor = AnchorPoint { x: 0.5, y: 0.8 };
        let image_x = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Image);
        let viewport_x = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Viewport);

        // 图片中点在裁剪居中后仍是视口中点
        assert_eq!(image_x.x, 250.0);
        assert_eq!(viewport_x.x, 250.0);
        // 非中点锚点下两种策略产生不同结果
        let anchor = AnchorPoint { x: 0.2, y: 0.8 };
        let image_x = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Image);
        let viewport_x = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Viewport);
        assert!((image_x.x - viewport_x.x).abs() > 1.0);
        // Y 不受策略影响
        assert_eq!(image_x.y, viewport_x.y);
    }

    #[test]
    fn test_anchor_to_viewport_is_pure() {
        let img = image(1920, 1080);
        let vp = viewport(1280, 720);
        let transform = compute_cover_transform(img, vp).unwrap();
        let anchor = AnchorPoint { x: 0.2, y: 0.83 };

        let first = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Viewport);
        let second = anchor_to_viewport(anchor, img, &transform, vp, XAnchorPolicy::Viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamp_actor_scale() {
        // 256 / 512 × 0.8 = 0.4
        assert_eq!(clamp_actor_scale(256.0), 0.4);
        // 大屏被钳制在 1
        assert_eq!(clamp_actor_scale(2000.0), 1.0);
        // 基准点：512 × 0.8 = 0.8 倍，仍在钳制之下
        assert_eq!(clamp_actor_scale(512.0), 0.8);
    }

    #[test]
    fn test_walk_plan_targets() {
        let plan = WalkPlan::new(100.0, 400.0, 3);
        assert_eq!(plan.target_x(1), 200.0);
        assert_eq!(plan.target_x(2), 300.0);
        // 最后一步严格等于终点
        assert_eq!(plan.target_x(3), 400.0);
        assert!(plan.is_last(3));
        assert!(!plan.is_last(2));
    }

    #[test]
    fn test_walk_plan_last_step_clamps_exactly() {
        // 选择一个除不尽的区间，验证最后一步不受浮点误差影响
        let plan = WalkPlan::new(0.0, 1.0, 3);
        assert_eq!(plan.target_x(3), 1.0);
    }

    #[test]
    fn test_viewport_from_window() {
        let vp = ViewportSize::from_window(390.4, 844.3, 2.0).unwrap();
        assert_eq!(vp.width, 781);
        assert_eq!(vp.height, 1689);

        assert!(ViewportSize::from_window(0.0, 100.0, 2.0).is_err());
    }

    #[test]
    fn test_transform_serialization() {
        let transform =
            compute_cover_transform(image(1920, 1080), viewport(1280, 720)).unwrap();
        let json = serde_json::to_string(&transform).unwrap();
        let deserialized: CoverTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(transform, deserialized);
    }
}
