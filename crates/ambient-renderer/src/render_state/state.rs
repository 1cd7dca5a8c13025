use std::sync::Arc;
use winit::window::Window;

use ambient_scene::Scene;

use super::helpers::{log_first_frame, CLEAR_COLOR};
use super::upscale::UpscalePass;
use crate::gpu::{FrameBindings, FrameUniforms, GpuContext, RendererError, SurfaceOptions};
use crate::particles::ParticleRenderer;
use crate::wireframe::WireframeRenderer;

/// GPU state for the background layer: surface, shared frame uniforms,
/// and the particle and wireframe passes.
pub struct RenderState {
    pub gpu: GpuContext,
    frame: FrameBindings,
    particles: ParticleRenderer,
    wireframes: WireframeRenderer,
    /// Present only while the window is denser than the pixel-ratio cap.
    upscale: Option<UpscalePass>,
}

impl RenderState {
    /// Create the surface on `window` and upload the scene's static geometry.
    pub async fn new(
        window: Arc<Window>,
        scene: &Scene,
        options: SurfaceOptions,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, options).await?;
        let frame = FrameBindings::new(&gpu.device);
        let particles = ParticleRenderer::new(
            &gpu.device,
            gpu.format(),
            &frame.layout,
            &scene.particles,
            &scene.camera,
        );
        let wireframes =
            WireframeRenderer::new(&gpu.device, gpu.format(), &frame.layout, &scene.solids);
        let upscale = gpu
            .extent
            .is_downscaled()
            .then(|| UpscalePass::new(&gpu.device, gpu.format(), gpu.extent.render));

        Ok(Self {
            gpu,
            frame,
            particles,
            wireframes,
            upscale,
        })
    }

    /// Handle a window resize or scale change.
    ///
    /// The surface follows the window; the offscreen target follows the
    /// capped size and exists only while the two differ.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        if !self.gpu.resize(width, height, scale_factor) {
            return;
        }

        let extent = self.gpu.extent;
        if !extent.is_downscaled() {
            self.upscale = None;
        } else if let Some(pass) = self.upscale.as_mut() {
            pass.resize(&self.gpu.device, extent.render);
        } else {
            self.upscale = Some(UpscalePass::new(
                &self.gpu.device,
                self.gpu.format(),
                extent.render,
            ));
        }

        tracing::debug!(
            width = extent.surface.width,
            height = extent.surface.height,
            render_width = extent.render.width,
            render_height = extent.render.height,
            scale_factor,
            "surface resized"
        );
    }

    /// Draw one frame of `scene`.
    ///
    /// A lost or outdated surface is reconfigured before the error is
    /// returned, so the next frame can succeed. Only
    /// [`RendererError::is_fatal`] errors should end the animation.
    pub fn render(&mut self, scene: &Scene) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                let err = RendererError::from(e);
                match &err {
                    RendererError::SurfaceLost => {
                        tracing::debug!("Surface lost or outdated, reconfiguring");
                        self.gpu.reconfigure();
                    }
                    RendererError::SurfaceTimeout => {
                        tracing::debug!("Surface texture timed out, skipping frame");
                    }
                    _ => tracing::error!("Failed to get surface texture: {err}"),
                }
                return Err(err);
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.frame
            .write(&self.gpu.queue, &FrameUniforms::from_scene(scene));
        self.particles
            .prepare(&self.gpu.queue, &scene.particles, &scene.camera);
        self.wireframes.prepare(&self.gpu.queue, &scene.solids);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("ambient background encoder"),
            });

        let target = match &self.upscale {
            Some(upscale) => upscale.target(),
            None => &view,
        };

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ambient background pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.frame.bind_group, &[]);
            self.particles.render(&mut pass);
            self.wireframes.render(&mut pass);
        }

        if let Some(upscale) = &self.upscale {
            upscale.render(&mut encoder, &view);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.extent, self.gpu.format());

        Ok(())
    }
}
