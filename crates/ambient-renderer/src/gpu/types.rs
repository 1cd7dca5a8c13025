use ambient_config::schema::{PowerPreference, RenderingConfig};

/// Highest device pixel ratio the surface renders at.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("surface lost or outdated")]
    SurfaceLost,

    #[error("timed out acquiring surface texture")]
    SurfaceTimeout,

    #[error("GPU out of memory")]
    OutOfMemory,

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),
}

impl RendererError {
    /// Whether the animation loop should stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RendererError::OutOfMemory)
    }
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RendererError::SurfaceLost,
            wgpu::SurfaceError::Timeout => RendererError::SurfaceTimeout,
            wgpu::SurfaceError::OutOfMemory => RendererError::OutOfMemory,
            #[allow(unreachable_patterns)]
            other => RendererError::SurfaceError(other.to_string()),
        }
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    /// The window's own size, with each side at least 1.
    pub fn window(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Render size for a window of `width`×`height` physical pixels at
    /// `scale_factor`, drawing at no more than [`MAX_PIXEL_RATIO`].
    ///
    /// Each side is at least 1.
    pub fn capped(width: u32, height: u32, scale_factor: f64) -> Self {
        let ratio = if scale_factor > MAX_PIXEL_RATIO {
            MAX_PIXEL_RATIO / scale_factor
        } else {
            1.0
        };
        Self {
            width: ((width as f64 * ratio).round() as u32).max(1),
            height: ((height as f64 * ratio).round() as u32).max(1),
        }
    }
}

/// Sizes for one window configuration.
///
/// The swapchain always matches the window. On displays denser than
/// [`MAX_PIXEL_RATIO`] the scene is drawn into a smaller offscreen target
/// and stretched onto the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameExtent {
    pub surface: PhysicalSize,
    pub render: PhysicalSize,
}

impl FrameExtent {
    pub fn for_window(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            surface: PhysicalSize::window(width, height),
            render: PhysicalSize::capped(width, height, scale_factor),
        }
    }

    /// True when frames go through the offscreen target.
    pub fn is_downscaled(&self) -> bool {
        self.render != self.surface
    }
}

/// Surface and adapter settings derived from `[rendering]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    pub present_mode: wgpu::PresentMode,
    pub power_preference: wgpu::PowerPreference,
}

impl SurfaceOptions {
    pub fn from_config(config: &RenderingConfig) -> Self {
        Self {
            present_mode: if config.vsync {
                wgpu::PresentMode::Fifo
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            power_preference: match config.power_preference {
                PowerPreference::High => wgpu::PowerPreference::HighPerformance,
                PowerPreference::Low => wgpu::PowerPreference::LowPower,
            },
        }
    }
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self::from_config(&RenderingConfig::default())
    }
}

/// Prefer a compositing mode that lets the transparent clear show the
/// content behind the window.
pub fn pick_alpha_mode(available: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    [
        wgpu::CompositeAlphaMode::PreMultiplied,
        wgpu::CompositeAlphaMode::PostMultiplied,
    ]
    .into_iter()
    .find(|mode| available.contains(mode))
    .or_else(|| available.first().copied())
    .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_keeps_size_up_to_ratio_two() {
        assert_eq!(
            PhysicalSize::capped(1600, 1200, 1.0),
            PhysicalSize {
                width: 1600,
                height: 1200
            }
        );
        assert_eq!(
            PhysicalSize::capped(2560, 1600, 2.0),
            PhysicalSize {
                width: 2560,
                height: 1600
            }
        );
    }

    #[test]
    fn capped_scales_down_dense_displays() {
        // 1000×500 logical at 3× is 3000×1500 physical; render at 2×.
        assert_eq!(
            PhysicalSize::capped(3000, 1500, 3.0),
            PhysicalSize {
                width: 2000,
                height: 1000
            }
        );
    }

    #[test]
    fn capped_never_returns_zero() {
        assert_eq!(
            PhysicalSize::capped(0, 0, 1.0),
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn extent_surface_always_matches_window() {
        for scale in [1.0, 1.5, 2.0, 2.5, 3.0, 4.0] {
            let extent = FrameExtent::for_window(3000, 1500, scale);
            assert_eq!(
                extent.surface,
                PhysicalSize {
                    width: 3000,
                    height: 1500
                },
                "scale {scale}"
            );
        }
    }

    #[test]
    fn extent_downscales_only_past_ratio_two() {
        let normal = FrameExtent::for_window(2560, 1600, 2.0);
        assert!(!normal.is_downscaled());
        assert_eq!(normal.render, normal.surface);

        let dense = FrameExtent::for_window(3000, 1500, 3.0);
        assert!(dense.is_downscaled());
        assert_eq!(
            dense.render,
            PhysicalSize {
                width: 2000,
                height: 1000
            }
        );
    }

    #[test]
    fn zero_window_gives_minimal_extent() {
        let extent = FrameExtent::for_window(0, 0, 3.0);
        assert_eq!(extent.surface, PhysicalSize::window(1, 1));
        assert!(!extent.is_downscaled());
    }

    #[test]
    fn surface_options_follow_config() {
        let opts = SurfaceOptions::from_config(&RenderingConfig {
            vsync: false,
            power_preference: PowerPreference::Low,
        });
        assert_eq!(opts.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(opts.power_preference, wgpu::PowerPreference::LowPower);

        let defaults = SurfaceOptions::default();
        assert_eq!(defaults.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(
            defaults.power_preference,
            wgpu::PowerPreference::HighPerformance
        );
    }

    #[test]
    fn alpha_mode_prefers_premultiplied() {
        use wgpu::CompositeAlphaMode::*;
        assert_eq!(pick_alpha_mode(&[Opaque, PostMultiplied, PreMultiplied]), PreMultiplied);
        assert_eq!(pick_alpha_mode(&[Opaque, PostMultiplied]), PostMultiplied);
        assert_eq!(pick_alpha_mode(&[Opaque]), Opaque);
        assert_eq!(pick_alpha_mode(&[]), Auto);
    }

    #[test]
    fn surface_errors_are_classified() {
        assert!(matches!(
            RendererError::from(wgpu::SurfaceError::Outdated),
            RendererError::SurfaceLost
        ));
        assert!(matches!(
            RendererError::from(wgpu::SurfaceError::Lost),
            RendererError::SurfaceLost
        ));
        assert!(matches!(
            RendererError::from(wgpu::SurfaceError::Timeout),
            RendererError::SurfaceTimeout
        ));
        assert!(RendererError::from(wgpu::SurfaceError::OutOfMemory).is_fatal());
    }
}
