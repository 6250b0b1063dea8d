use rand::Rng;
use std::fmt;

/// A ranked point. Lower `rank` is better.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub id: i8,
    pub rank: i32,
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(id: i8, rank: i32, x: f32, y: f32) -> Self {
        Self { id, rank, x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.id, self.rank, self.x, self.y)
    }
}

/// Axis-aligned query rectangle. Callers keep `lx <= hx` and `ly <= hy`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub lx: f32,
    pub ly: f32,
    pub hx: f32,
    pub hy: f32,
}

impl Rect {
    pub fn new(lx: f32, ly: f32, hx: f32, hy: f32) -> Self {
        Self { lx, ly, hx, hy }
    }

    pub fn width(&self) -> f32 {
        self.hx - self.lx
    }

    pub fn height(&self) -> f32 {
        self.hy - self.ly
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.lx && x <= self.hx && y >= self.ly && y <= self.hy
    }

    pub fn random_point_inside<R: Rng>(&self, id: i8, rng: &mut R) -> Point {
        Point {
            id,
            rank: rng.gen(),
            x: self._safe_randf32(rng, self.lx, self.hx),
            y: self._safe_randf32(rng, self.ly, self.hy),
        }
    }

    // Ids wrap around the i8 range; only the rank is expected to be meaningful.
    pub fn random_points<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Point> {
        (0..count)
            .map(|i| self.random_point_inside(i as u8 as i8, rng))
            .collect()
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.lx, self.ly, self.hx, self.hy)
    }
}

/// Double precision rectangle used for the tree's global and node bounds.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Bounds {
    pub lx: f64,
    pub ly: f64,
    pub hx: f64,
    pub hy: f64,
}

impl Bounds {
    pub fn new(lx: f64, ly: f64, hx: f64, hy: f64) -> Self {
        Self { lx, ly, hx, hy }
    }

    pub fn width(&self) -> f64 {
        self.hx - self.lx
    }

    pub fn height(&self) -> f64 {
        self.hy - self.ly
    }

    /// Tight box around `points`, or `None` when there are none.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(first);
        for p in rest {
            bounds.expand_to_include_point(p);
        }
        Some(bounds)
    }

    pub fn from_point(p: &Point) -> Self {
        let x = f64::from(p.x);
        let y = f64::from(p.y);
        Self::new(x, y, x, y)
    }

    pub fn expand_to_include_point(&mut self, p: &Point) {
        let x = f64::from(p.x);
        let y = f64::from(p.y);
        self.lx = self.lx.min(x);
        self.ly = self.ly.min(y);
        self.hx = self.hx.max(x);
        self.hy = self.hy.max(y);
    }

    pub fn expand_to_include(&mut self, other: &Bounds) {
        self.lx = self.lx.min(other.lx);
        self.ly = self.ly.min(other.ly);
        self.hx = self.hx.max(other.hx);
        self.hy = self.hy.max(other.hy);
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.lx && x <= self.hx && y >= self.ly && y <= self.hy
    }

    /// Rounds the corners outwards to whole units.
    pub fn round_out(&self) -> Self {
        Self::new(
            self.lx.floor(),
            self.ly.floor(),
            self.hx.ceil(),
            self.hy.ceil(),
        )
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            f64::from(rect.lx),
            f64::from(rect.ly),
            f64::from(rect.hx),
            f64::from(rect.hy),
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.lx, self.ly, self.hx, self.hy)
    }
}
