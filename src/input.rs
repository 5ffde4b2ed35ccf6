// Pure pointer/keyboard helpers; no web-sys types so they test on the host.

/// Normalise client coordinates to \[-1, 1\] on both axes (y grows downward).
///
/// A degenerate viewport maps to the centre.
#[inline]
pub fn normalized_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> [f32; 2] {
    if !(width > 0.0 && height > 0.0) {
        return [0.0, 0.0];
    }
    let x = ((client_x / width) * 2.0 - 1.0).clamp(-1.0, 1.0);
    let y = ((client_y / height) * 2.0 - 1.0).clamp(-1.0, 1.0);
    [x as f32, y as f32]
}

#[inline]
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if width > 0.0 && height > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

/// Section step requested by a navigation key.
#[inline]
pub fn nav_step_for_key(key: &str) -> Option<isize> {
    match key {
        "n" | "N" | "j" | "J" => Some(1),
        "p" | "P" | "k" | "K" => Some(-1),
        _ => None,
    }
}

/// Clamp a frame delta so a backgrounded tab does not jump the animation.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_dt_sec)
    } else {
        0.0
    }
}
