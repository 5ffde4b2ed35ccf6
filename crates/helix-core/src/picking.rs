use crate::camera::Camera;
use glam::{Vec2, Vec3, Vec4};

/// World-space ray through normalised device coordinates (y up).
///
/// Returns `(ray_origin, ray_direction)`.
pub fn ndc_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest sphere hit along the ray, as `(index, distance)`.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    centers: impl IntoIterator<Item = Vec3>,
    radius: f32,
) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, c) in centers.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, c, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}
