//! Concentric commute-radius rings drawn around the office.

use commute_core::Coordinate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RingTier {
    Close,
    Middle,
    Far,
}

impl RingTier {
    pub const ALL: [RingTier; 3] = [RingTier::Close, RingTier::Middle, RingTier::Far];

    /// Stroke and fill color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            RingTier::Close => "#8BC34A",
            RingTier::Middle => "#FBC02D",
            RingTier::Far => "#FF5252",
        }
    }

    /// Closer rings stack above farther ones.
    #[must_use]
    pub fn z_index(self) -> u8 {
        match self {
            RingTier::Close => 3,
            RingTier::Middle => 2,
            RingTier::Far => 1,
        }
    }
}

/// Display options handed to the map renderer for one ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingStyle {
    pub stroke_color: &'static str,
    pub fill_color: &'static str,
    pub stroke_opacity: f64,
    pub stroke_weight: u8,
    pub fill_opacity: f64,
    pub z_index: u8,
    pub clickable: bool,
    pub draggable: bool,
    pub editable: bool,
    pub visible: bool,
}

impl RingStyle {
    #[must_use]
    pub fn for_tier(tier: RingTier) -> Self {
        Self {
            stroke_color: tier.color(),
            fill_color: tier.color(),
            stroke_opacity: 0.5,
            stroke_weight: 2,
            fill_opacity: 0.05,
            z_index: tier.z_index(),
            clickable: false,
            draggable: false,
            editable: false,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommuteRing {
    pub tier: RingTier,
    pub center: Coordinate,
    pub radius_m: f64,
    pub style: RingStyle,
}

/// Close, middle and far rings centered on `center`.
///
/// `radii_m` is in meters, ordered close to far; see
/// [`commute_core::DEFAULT_RING_RADII_M`].
#[must_use]
pub fn commute_rings(center: Coordinate, radii_m: [f64; 3]) -> [CommuteRing; 3] {
    RingTier::ALL.map(|tier| {
        let radius_m = match tier {
            RingTier::Close => radii_m[0],
            RingTier::Middle => radii_m[1],
            RingTier::Far => radii_m[2],
        };
        CommuteRing {
            tier,
            center,
            radius_m,
            style: RingStyle::for_tier(tier),
        }
    })
}
