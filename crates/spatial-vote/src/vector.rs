/// A two-dimensional vector, used both for positions in the issue space and
/// for directions such as the axis of a [`PartyLine`](crate::PartyLine).
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn sub(&self, b: &Vector) -> Vector {
        Vector { x: self.x - b.x, y: self.y - b.y }
    }

    pub fn dot(&self, b: &Vector) -> f64 {
        self.x * b.x + self.y * b.y
    }

    /// Euclidean distance between `self` and `b`.
    ///
    /// Uses `hypot` so very distant points don't overflow before the square
    /// root is taken.
    pub fn dist(&self, b: &Vector) -> f64 {
        let d = self.sub(b);
        d.x.hypot(d.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
