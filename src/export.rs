// Flat per-frame buffer handed to the JS-side renderer.
//
// Layout: one `FrameHeader` followed by `card_count` `CardInstance`s, all f32.

use helix_core::SceneFrame;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameHeader {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],      // xyz, orbit angle
    pub target: [f32; 4],   // xyz, camera distance
    pub skeleton: [f32; 4], // rotation, bob, scale, scroll progress
    pub meta: [f32; 4],     // tilt pitch, tilt yaw, card count, active index (-1 when none)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CardInstance {
    pub model: [[f32; 4]; 4],
    pub position: [f32; 4], // xyz, rotation angle
    pub score: [f32; 4],    // forward factor, depth score, t, active flag
    pub visual: [f32; 4],   // scale, opacity, forward offset, emissive
    pub accent: [f32; 4],   // rgb, hovered flag
}

pub const HEADER_FLOATS: usize = std::mem::size_of::<FrameHeader>() / 4;
pub const CARD_FLOATS: usize = std::mem::size_of::<CardInstance>() / 4;

#[inline]
fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

pub fn frame_header(frame: &SceneFrame<'_>) -> FrameHeader {
    let cam = &frame.camera;
    FrameHeader {
        view_proj: cam.view_projection().to_cols_array_2d(),
        eye: [cam.eye.x, cam.eye.y, cam.eye.z, frame.pose.orbit_angle],
        target: [
            cam.target.x,
            cam.target.y,
            cam.target.z,
            frame.pose.distance,
        ],
        skeleton: [
            frame.skeleton.rotation,
            frame.skeleton.bob,
            frame.skeleton.scale,
            frame.progress,
        ],
        meta: [
            cam.tilt.x,
            cam.tilt.y,
            frame.cards.len() as f32,
            frame.active_index.map_or(-1.0, |i| i as f32),
        ],
    }
}

pub fn card_instances(frame: &SceneFrame<'_>, hovered: Option<usize>) -> Vec<CardInstance> {
    frame
        .cards
        .iter()
        .zip(frame.visuals)
        .zip(frame.entries)
        .enumerate()
        .map(|(i, ((card, visual), entry))| {
            let p = card.position;
            let [r, g, b] = entry.accent.rgb;
            CardInstance {
                model: visual.world_matrix(card).to_cols_array_2d(),
                position: [p.x, p.y, p.z, card.rotation_angle],
                score: [
                    card.forward_factor,
                    card.depth_score,
                    card.t,
                    flag(frame.active_index == Some(i)),
                ],
                visual: [
                    visual.scale,
                    visual.opacity,
                    visual.forward_offset,
                    visual.emissive,
                ],
                accent: [r, g, b, flag(hovered == Some(i))],
            }
        })
        .collect()
}

/// Pack the whole frame into `out`, replacing its contents.
pub fn pack_frame(out: &mut Vec<f32>, frame: &SceneFrame<'_>, hovered: Option<usize>) {
    let header = frame_header(frame);
    let cards = card_instances(frame, hovered);
    out.clear();
    out.reserve(HEADER_FLOATS + cards.len() * CARD_FLOATS);
    out.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&header)));
    out.extend_from_slice(bytemuck::cast_slice(&cards));
}
