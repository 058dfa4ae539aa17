//! Skeleton rendering - grid, kinetic chain, fist and target

use super::shapes::{create_circle_vertices, create_line_vertices, create_ring_vertices, Vertex};
use super::state::{GPU_STATE, MAX_VERTICES};
use super::viewport::{Viewport, GRID_CM, PIXELS_PER_CM};
use crate::kinematics::{Pose, TARGET_RADIUS_CM};

/// Colors for the chain segments and markers
mod colors {
    /// Hip line
    pub const PURPLE: [f32; 4] = [0.545, 0.361, 0.965, 1.0];
    /// Hip center
    pub const VIOLET: [f32; 4] = [0.486, 0.227, 0.929, 1.0];
    /// Collar bones
    pub const BLUE: [f32; 4] = [0.290, 0.620, 1.0, 1.0];
    /// Spine center, elbow joint, fist, target rings
    pub const RED: [f32; 4] = [0.937, 0.267, 0.267, 1.0];
    /// Fist outline
    pub const DARK_RED: [f32; 4] = [0.863, 0.149, 0.149, 1.0];
    /// Collar end points
    pub const GREEN: [f32; 4] = [0.133, 0.773, 0.369, 1.0];
    /// Upper arm and shoulder joint
    pub const AMBER: [f32; 4] = [0.961, 0.620, 0.043, 1.0];
    /// Forearm
    pub const EMERALD: [f32; 4] = [0.063, 0.725, 0.506, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GRID: [f32; 4] = [0.133, 0.133, 0.133, 1.0];
    pub const AXIS: [f32; 4] = [0.267, 0.267, 0.267, 1.0];
    pub const BACKGROUND: wgpu::Color = wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
}

const CIRCLE_SEGMENTS: u32 = 16;

/// Grid squares plus the center cross, drawn in zoomed space
fn build_grid_vertices(viewport: &Viewport) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let step = GRID_CM * PIXELS_PER_CM;
    let stroke = viewport.scale(1.0);
    let (w, h) = (viewport.width, viewport.height);

    let mut x = 0.0;
    while x <= w {
        let from = viewport.zoom_pixel((x, 0.0));
        let to = viewport.zoom_pixel((x, h));
        vertices.extend(create_line_vertices(from, to, stroke, colors::GRID));
        x += step;
    }

    let mut y = 0.0;
    while y <= h {
        let from = viewport.zoom_pixel((0.0, y));
        let to = viewport.zoom_pixel((w, y));
        vertices.extend(create_line_vertices(from, to, stroke, colors::GRID));
        y += step;
    }

    let (cx, cy) = viewport.center();
    vertices.extend(create_line_vertices(
        viewport.zoom_pixel((cx, 0.0)),
        viewport.zoom_pixel((cx, h)),
        stroke,
        colors::AXIS,
    ));
    vertices.extend(create_line_vertices(
        viewport.zoom_pixel((0.0, cy)),
        viewport.zoom_pixel((w, cy)),
        stroke,
        colors::AXIS,
    ));

    vertices
}

/// Hip, collar, upper arm, forearm and fist
fn build_chain_vertices(pose: &Pose, viewport: &Viewport) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let px = |p| viewport.cm_to_pixel(p);
    let dot = |p, r: f32, color| create_circle_vertices(px(p), viewport.scale(r), color, CIRCLE_SEGMENTS);

    // Hip - foundation of the chain
    vertices.extend(create_line_vertices(px(pose.hip.start), px(pose.hip.end), viewport.scale(5.0), colors::PURPLE));
    vertices.extend(dot(pose.center, 3.0, colors::VIOLET));

    // Collar bones over the same pivot
    vertices.extend(create_line_vertices(px(pose.collar.start), px(pose.collar.end), viewport.scale(4.0), colors::BLUE));
    vertices.extend(dot(pose.center, 3.0, colors::RED));
    vertices.extend(dot(pose.collar.start, 2.0, colors::GREEN));
    vertices.extend(dot(pose.collar.end, 2.0, colors::GREEN));

    // Upper arm with shoulder and elbow joints
    vertices.extend(create_line_vertices(px(pose.shoulder), px(pose.elbow), viewport.scale(3.0), colors::AMBER));
    vertices.extend(dot(pose.shoulder, 3.0, colors::AMBER));
    vertices.extend(dot(pose.elbow, 2.0, colors::RED));

    vertices.extend(create_line_vertices(px(pose.elbow), px(pose.fist), viewport.scale(3.0), colors::EMERALD));

    vertices.extend(dot(pose.fist, 4.0, colors::RED));
    vertices.extend(create_ring_vertices(px(pose.fist), viewport.scale(4.0), viewport.scale(2.0), colors::DARK_RED, CIRCLE_SEGMENTS));

    vertices
}

/// Bullseye rings, outermost first
fn build_target_vertices(pose: &Pose, viewport: &Viewport) -> Vec<Vertex> {
    let center = viewport.cm_to_pixel(pose.target);
    let radius = viewport.scale(TARGET_RADIUS_CM * PIXELS_PER_CM);
    let rings = [
        (1.0, colors::RED),
        (0.7, colors::WHITE),
        (0.4, colors::RED),
        (0.15, colors::BLACK),
    ];

    let mut vertices = Vec::new();
    for (fraction, color) in rings {
        vertices.extend(create_circle_vertices(center, radius * fraction, color, CIRCLE_SEGMENTS * 2));
    }
    vertices.extend(create_ring_vertices(center, radius, viewport.scale(2.0), colors::AXIS, CIRCLE_SEGMENTS * 2));
    vertices
}

/// Clip-space vertices for one frame, capped at the GPU buffer size
pub fn build_frame_vertices(pose: &Pose, viewport: &Viewport) -> Vec<Vertex> {
    let mut vertices = build_grid_vertices(viewport);
    vertices.extend(build_chain_vertices(pose, viewport));
    vertices.extend(build_target_vertices(pose, viewport));

    if vertices.len() > MAX_VERTICES {
        log::warn!("Frame has {} vertices, truncating to {}", vertices.len(), MAX_VERTICES);
        vertices.truncate(MAX_VERTICES - MAX_VERTICES % 3);
    }

    for v in &mut vertices {
        v.position = viewport.pixel_to_clip(v.position);
    }
    vertices
}

/// Render one frame of the pose
pub fn render_pose(pose: &Pose, viewport: &Viewport) {
    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let vertices = build_frame_vertices(pose, viewport);

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => {
                log::debug!("Skipping frame: {:?}", err);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Punch Render Encoder") }
        );

        if !vertices.is_empty() {
            state.queue.write_buffer(
                &state.vertex_buffer,
                0,
                bytemuck::cast_slice(&vertices),
            );
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Punch Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
