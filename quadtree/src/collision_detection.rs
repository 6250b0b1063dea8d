use common::shapes::{Bounds, Point, Rect};

// All tests treat edges as part of the rectangle, so rectangles that only touch still intersect.
#[inline(always)]
pub fn intersect(a: &Bounds, b: &Bounds) -> bool {
    a.lx <= b.hx && a.hx >= b.lx && a.ly <= b.hy && a.hy >= b.ly
}

#[inline(always)]
pub fn contains_point(p: &Point, rect: &Bounds) -> bool {
    rect.contains_point(f64::from(p.x), f64::from(p.y))
}

pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    intersect(&Bounds::from(*a), &Bounds::from(*b))
}

pub fn rect_contains_point(p: &Point, rect: &Rect) -> bool {
    rect.contains_point(p.x, p.y)
}
