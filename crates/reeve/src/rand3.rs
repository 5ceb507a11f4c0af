//! Random tetrahedra and sample points (replay tokens, rejection of slivers).
//!
//! Model
//! - Vertices are uniform in the cube `[-half_width, half_width]^3`.
//! - Draws whose volume falls below `min_volume` are rejected and redrawn, up
//!   to `max_attempts`; this keeps face planes well defined for tests.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so sample `k` of a stream can be regenerated alone.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom3::Tet;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TetDrawCfg {
    /// Vertices are drawn from `[-half_width, half_width]^3`.
    pub half_width: f64,
    /// Reject draws with `volume < min_volume`.
    pub min_volume: f64,
    pub max_attempts: usize,
}

impl Default for TetDrawCfg {
    fn default() -> Self {
        Self {
            half_width: 5.0,
            min_volume: 0.5,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_point<R: Rng>(rng: &mut R, half_width: f64) -> Vector3<f64> {
    let h = half_width.abs().max(1e-9);
    Vector3::new(
        rng.gen_range(-h..=h),
        rng.gen_range(-h..=h),
        rng.gen_range(-h..=h),
    )
}

/// Draw a non-degenerate tetrahedron, or `None` if every attempt was a sliver.
pub fn draw_tetrahedron(cfg: TetDrawCfg, tok: ReplayToken) -> Option<Tet> {
    let mut rng = tok.to_std_rng();
    for _ in 0..cfg.max_attempts.max(1) {
        let tet = Tet::new(
            draw_point(&mut rng, cfg.half_width),
            draw_point(&mut rng, cfg.half_width),
            draw_point(&mut rng, cfg.half_width),
            draw_point(&mut rng, cfg.half_width),
        );
        if tet.volume() >= cfg.min_volume {
            return Some(tet);
        }
    }
    None
}

/// Convex combination of the vertices with every weight at least `min_weight`.
///
/// `min_weight` is clamped to `[0, 0.25]`; a positive value keeps the point
/// strictly inside.
pub fn draw_barycentric_point<R: Rng>(rng: &mut R, tet: &Tet, min_weight: f64) -> Vector3<f64> {
    let floor = min_weight.clamp(0.0, 0.25);
    let raw: [f64; 4] = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
    let sum: f64 = raw.iter().sum::<f64>().max(1e-12);
    let spare = 1.0 - 4.0 * floor;
    let w = raw.map(|x| floor + spare * x / sum);
    let vs = tet.vertices();
    vs[0] * w[0] + vs[1] * w[1] + vs[2] * w[2] + vs[3] * w[3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom3::Location;

    #[test]
    fn replay_is_deterministic() {
        let tok = ReplayToken::new(7, 3);
        let a = draw_tetrahedron(TetDrawCfg::default(), tok);
        let b = draw_tetrahedron(TetDrawCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_tetrahedron(TetDrawCfg::default(), tok.next());
        assert_ne!(a, c);
    }

    #[test]
    fn draws_respect_min_volume() {
        let cfg = TetDrawCfg::default();
        for i in 0..32 {
            let tet = draw_tetrahedron(cfg, ReplayToken::new(11, i)).expect("sample");
            assert!(tet.volume() >= cfg.min_volume);
        }
    }

    #[test]
    fn impossible_volume_gives_none() {
        let cfg = TetDrawCfg {
            half_width: 1.0,
            min_volume: 100.0,
            max_attempts: 4,
        };
        assert!(draw_tetrahedron(cfg, ReplayToken::new(1, 0)).is_none());
    }

    #[test]
    fn barycentric_points_are_interior() {
        let tet = draw_tetrahedron(TetDrawCfg::default(), ReplayToken::new(5, 0)).expect("sample");
        let mut rng = ReplayToken::new(5, 1).to_std_rng();
        for _ in 0..200 {
            let p = draw_barycentric_point(&mut rng, &tet, 0.02);
            assert_eq!(tet.classify(p), Location::Interior);
        }
    }
}
