//! Per-point accumulation target for scatter kernels.

use tessera_core::{PointId, Vec2};
use tessera_exec::{AtomicCell, AtomicF64, AtomicStrategy};

/// One atomic `Vec2` per mesh point.
///
/// Many zones share a point, so zone-parallel loops that deposit into
/// points race on the same slots. Every deposit goes through an
/// [`AtomicStrategy`]; the two components are updated independently, so a
/// concurrent reader may see one component of an in-flight deposit before
/// the other. Read only after the loop has joined.
#[derive(Debug, Default)]
pub struct PointAccumulator {
    x: Vec<AtomicF64>,
    y: Vec<AtomicF64>,
}

impl PointAccumulator {
    /// Zero-filled accumulator for `points` points.
    pub fn new(points: usize) -> Self {
        Self {
            x: (0..points).map(|_| AtomicF64::new(0.0)).collect(),
            y: (0..points).map(|_| AtomicF64::new(0.0)).collect(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the accumulator holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Add `value` to `point` using atomic strategy `A`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is out of range.
    #[inline]
    pub fn add<A: AtomicStrategy>(&self, point: PointId, value: Vec2) {
        let i = point.index();
        A::add(&self.x[i], value.x);
        A::add(&self.y[i], value.y);
    }

    /// Current total at `point`.
    pub fn get(&self, point: PointId) -> Vec2 {
        let i = point.index();
        Vec2::new(self.x[i].load(), self.y[i].load())
    }

    /// Snapshot of every point's total.
    pub fn to_vec(&self) -> Vec<Vec2> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(x, y)| Vec2::new(x.load(), y.load()))
            .collect()
    }

    /// Zero every point.
    pub fn reset(&mut self) {
        for cell in self.x.iter_mut().chain(self.y.iter_mut()) {
            *cell = AtomicF64::new(0.0);
        }
    }
}
