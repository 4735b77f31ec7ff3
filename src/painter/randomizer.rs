//! Per-instance scale and rotation variation.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::settings::PainterSettings;

/// Random source used for placement variation
#[derive(Resource)]
pub struct PaintRng(pub StdRng);

impl Default for PaintRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Uniform scale factor and orientation for a newly placed instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementVariation {
    pub scale: f32,
    pub rotation: Quat,
}

/// Draw scale and rotation for one instance.
///
/// With random scale off the factor is exactly 1. With it on the factor is
/// uniform over the configured bounds; inverted bounds are swapped rather than
/// producing garbage (validation rejects them before painting anyway).
pub fn randomize<R: Rng + ?Sized>(settings: &PainterSettings, rng: &mut R) -> PlacementVariation {
    let scale = if settings.random_scale {
        let lo = settings.random_scale_min.min(settings.random_scale_max);
        let hi = settings.random_scale_min.max(settings.random_scale_max);
        if lo == hi { lo } else { rng.gen_range(lo..=hi) }
    } else {
        1.0
    };

    let rotation = if settings.random_rotation {
        random_rotation(rng)
    } else {
        Quat::IDENTITY
    };

    PlacementVariation { scale, rotation }
}

/// Uniformly distributed rotation over SO(3) (Shoemake's subgroup algorithm).
pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> Quat {
    let u1: f32 = rng.r#gen();
    let u2: f32 = rng.r#gen();
    let u3: f32 = rng.r#gen();
    let s1 = (1.0 - u1).sqrt();
    let s2 = u1.sqrt();
    let t1 = TAU * u2;
    let t2 = TAU * u3;
    Quat::from_xyzw(s1 * t1.sin(), s1 * t1.cos(), s2 * t2.sin(), s2 * t2.cos()).normalize()
}
