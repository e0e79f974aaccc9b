//! Host geometry -> drawn rect.

use roundel_engine::coords::{Rect, Vec2};

/// Anchor inside the host rect, `(0, 0)` top-left to `(1, 1)` bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pivot(pub Vec2);

impl Pivot {
    pub const CENTER: Pivot = Pivot(Vec2::new(0.5, 0.5));
    pub const TOP_LEFT: Pivot = Pivot(Vec2::new(0.0, 0.0));

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)))
    }
}

impl Default for Pivot {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Largest rect with the given `aspect` (width / height) that fits in
/// `host`, placed so that the pivot point of both rects coincides.
///
/// `None`, or a non-positive aspect, keeps the host rect unchanged.
pub fn fit_rect(host: Rect, pivot: Pivot, aspect: Option<f32>) -> Rect {
    let host = host.normalized();
    let Some(aspect) = aspect.filter(|a| a.is_finite() && *a > 0.0) else { return host; };
    if host.is_empty() {
        return host;
    }

    let (w, h) = if host.size.x / host.size.y > aspect {
        (host.size.y * aspect, host.size.y)
    } else {
        (host.size.x, host.size.x / aspect)
    };
    let slack = Vec2::new(host.size.x - w, host.size.y - h);
    Rect::new(
        host.origin.x + slack.x * pivot.0.x,
        host.origin.y + slack.y * pivot.0.y,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn free_aspect_keeps_host() {
        let host = Rect::new(5.0, 5.0, 200.0, 100.0);
        assert_eq!(fit_rect(host, Pivot::CENTER, None), host);
        assert_eq!(fit_rect(host, Pivot::CENTER, Some(0.0)), host);
    }

    #[test]
    fn wide_host_is_pillarboxed_around_pivot() {
        let host = Rect::new(0.0, 0.0, 200.0, 100.0);
        let centered = fit_rect(host, Pivot::CENTER, Some(1.0));
        assert_eq!(centered, Rect::new(50.0, 0.0, 100.0, 100.0));

        let left = fit_rect(host, Pivot::TOP_LEFT, Some(1.0));
        assert_eq!(left, Rect::new(0.0, 0.0, 100.0, 100.0));

        let right = fit_rect(host, Pivot::new(1.0, 0.5), Some(1.0));
        assert_eq!(right.origin.x, 100.0);
    }

    #[test]
    fn tall_host_is_letterboxed() {
        let host = Rect::new(10.0, 0.0, 100.0, 300.0);
        let r = fit_rect(host, Pivot::new(0.5, 1.0), Some(2.0));
        assert_abs_diff_eq!(r.size.x, 100.0);
        assert_abs_diff_eq!(r.size.y, 50.0);
        assert_abs_diff_eq!(r.origin.y, 250.0);
    }

    #[test]
    fn pivot_is_clamped() {
        assert_eq!(Pivot::new(-1.0, 3.0), Pivot(Vec2::new(0.0, 1.0)));
    }
}
