/// An open distance interval in Angstroms. Boundary values never qualify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceWindow {
    pub min: f64,
    pub max: f64,
}

impl DistanceWindow {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        self.min < distance && distance < self.max
    }
}
