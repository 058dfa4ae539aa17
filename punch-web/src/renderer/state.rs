//! GPU State management - WebGPU device, queue, surface initialization

use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use super::shapes::Vertex;
#[cfg(target_arch = "wasm32")]
use super::viewport::{CANVAS_HEIGHT, CANVAS_ID, CANVAS_WIDTH};

/// Vertex buffer capacity (vertices per frame)
pub const MAX_VERTICES: usize = 4096;

/// Errors that can occur during GPU initialization
#[derive(Debug, thiserror::Error)]
pub enum GpuStateError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("No canvas with id 'punch-canvas' found")]
    NoCanvas,
    #[error("Surface creation failed: {0}")]
    SurfaceCreationFailed(String),
    #[error("Failed to find a suitable GPU adapter")]
    NoAdapter,
    #[error("Device creation failed: {0}")]
    DeviceCreationFailed(String),
}

impl From<GpuStateError> for wasm_bindgen::JsValue {
    fn from(err: GpuStateError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

/// Holds all WebGPU state for rendering
pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub render_pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
}

// Thread-local storage for GPU state (WASM is single-threaded)
thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = const { RefCell::new(None) };
}

pub fn is_initialized() -> bool {
    GPU_STATE.with(|state| state.borrow().is_some())
}

/// Initialize WebGPU: adapter, device, surface, pipeline
#[cfg(target_arch = "wasm32")]
pub async fn initialize_gpu() -> Result<(), GpuStateError> {
    let canvas = find_canvas()?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
        .map_err(|e| GpuStateError::SurfaceCreationFailed(format!("{:?}", e)))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(GpuStateError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Punch Visualizer Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| GpuStateError::DeviceCreationFailed(format!("{:?}", e)))?;

    let config = surface_config(&surface.get_capabilities(&adapter))?;
    surface.configure(&device, &config);

    let render_pipeline = create_pose_pipeline(&device, config.format);
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Pose Vertices"),
        size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GPU_STATE.with(|state| {
        *state.borrow_mut() = Some(GpuState {
            device,
            queue,
            surface,
            render_pipeline,
            vertex_buffer,
        });
    });

    log::info!("🎨 WebGPU surface ready ({}x{}, {:?})", CANVAS_WIDTH, CANVAS_HEIGHT, config.format);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn find_canvas() -> Result<web_sys::HtmlCanvasElement, GpuStateError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .ok_or(GpuStateError::NoWindow)?
        .document()
        .ok_or(GpuStateError::NoDocument)?
        .get_element_by_id(CANVAS_ID)
        .ok_or(GpuStateError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| GpuStateError::NoCanvas)
}

/// Fixed-size canvas surface; prefers an sRGB format
#[cfg(target_arch = "wasm32")]
fn surface_config(caps: &wgpu::SurfaceCapabilities) -> Result<wgpu::SurfaceConfiguration, GpuStateError> {
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| GpuStateError::SurfaceCreationFailed("no supported surface format".into()))?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}

/// Colored triangle list in clip space, alpha blended, no depth
#[cfg(target_arch = "wasm32")]
fn create_pose_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Pose Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pose Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });
    let compilation_options = wgpu::PipelineCompilationOptions::default();

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Pose Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: compilation_options.clone(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options,
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::viewport::CANVAS_ID;

    #[test]
    fn test_missing_canvas_message_names_canvas() {
        assert!(GpuStateError::NoCanvas.to_string().contains(CANVAS_ID));
    }

    #[test]
    fn test_uninitialized_without_gpu() {
        assert!(!is_initialized());
    }
}
