use std::sync::Arc;
use winit::window::Window;

use super::types::{pick_alpha_mode, FrameExtent, RendererError, SurfaceOptions};

/// Device, queue, and the window surface the background draws into.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub extent: FrameExtent,
}

/// Swapchain configuration sized to the window, never to the capped
/// render size.
pub(crate) fn surface_configuration(
    format: wgpu::TextureFormat,
    alpha_mode: wgpu::CompositeAlphaMode,
    present_mode: wgpu::PresentMode,
    extent: FrameExtent,
) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: extent.surface.width,
        height: extent.surface.height,
        present_mode,
        desired_maximum_frame_latency: 2,
        alpha_mode,
        view_formats: vec![],
    }
}

impl GpuContext {
    /// Initialize wgpu: create instance, surface, adapter, device, and configure
    /// the surface for rendering.
    pub async fn new(window: Arc<Window>, options: SurfaceOptions) -> Result<Self, RendererError> {
        let inner_size = window.inner_size();
        let extent = FrameExtent::for_window(
            inner_size.width,
            inner_size.height,
            window.scale_factor(),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .map_err(|e| RendererError::SurfaceError(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: options.power_preference,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: Some(&surface),
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("ambient-renderer device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        let alpha_mode = pick_alpha_mode(&surface_caps.alpha_modes);
        tracing::info!(
            "Surface format: {format:?}, alpha: {alpha_mode:?} (available: {:?})",
            surface_caps.formats
        );

        let surface_config =
            surface_configuration(format, alpha_mode, options.present_mode, extent);
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            extent,
        })
    }

    /// Track a new window size or scale factor.
    ///
    /// The surface is reconfigured only when the window size changed.
    /// Returns `false` when neither the surface nor the render size moved.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) -> bool {
        let extent = FrameExtent::for_window(width, height, scale_factor);
        if extent == self.extent {
            return false;
        }

        if extent.surface != self.extent.surface {
            self.surface_config = surface_configuration(
                self.surface_config.format,
                self.surface_config.alpha_mode,
                self.surface_config.present_mode,
                extent,
            );
            self.surface.configure(&self.device, &self.surface_config);
        }
        self.extent = extent;
        true
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Return the surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }
}
