use crate::gpu::FrameExtent;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(extent: FrameExtent, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{} drawn at {}x{}, format={:?})",
            extent.surface.width,
            extent.surface.height,
            extent.render.width,
            extent.render.height,
            format,
        );
    }
}

/// Fully transparent: whatever sits behind the window shows through.
pub(crate) const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;
