use std::sync::atomic::{AtomicBool, Ordering};

use crate::gpu::PhysicalSize;

static PRESENTED: AtomicBool = AtomicBool::new(false);

/// Log the first presented frame, once per process.
pub(crate) fn log_first_frame(size: PhysicalSize, format: wgpu::TextureFormat) {
    if !PRESENTED.swap(true, Ordering::Relaxed) {
        tracing::info!(
            width = size.width,
            height = size.height,
            ?format,
            "First frame presented"
        );
    }
}
