use crate::foundation::error::{FlipdeckError, FlipdeckResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Index of one animation tick since session start.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TickIndex(pub u64);

/// Animation tick rate as a rational `num / den` ticks per second.
///
/// One tick is one animation frame; the default is the nominal 60 Hz the
/// per-tick physics constants are tuned for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TickRate {
    /// Numerator, must be > 0.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Default for TickRate {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

impl TickRate {
    /// Build a validated tick rate.
    pub fn new(num: u32, den: u32) -> FlipdeckResult<Self> {
        if num == 0 {
            return Err(FlipdeckError::validation("TickRate num must be > 0"));
        }
        if den == 0 {
            return Err(FlipdeckError::validation("TickRate den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Ticks per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one tick in milliseconds.
    pub fn tick_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Number of whole ticks covering a millisecond duration, at least 1.
    pub fn ticks_for_ms(self, ms: f64) -> u64 {
        let ticks = (ms.max(0.0) * self.as_f64() / 1000.0).round() as u64;
        ticks.max(1)
    }
}

/// Drawing-surface pixel dimensions.
///
/// The surface is resynced on every resize event; consumers read current
/// dimensions per tick rather than caching them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Surface {
    /// Width as a float, for particle math.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float, for particle math.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Premultiplied red.
    pub r: u8,
    /// Premultiplied green.
    pub g: u8,
    /// Premultiplied blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// HSLA color, the `hsl()` analog used by the particle effects.
///
/// Hue is in degrees (any value, wrapped into `[0, 360)`); saturation,
/// lightness and alpha are in `[0, 1]` and clamped on conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    /// Hue in degrees.
    pub hue_deg: f64,
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
    /// Lightness in `[0, 1]`.
    pub lightness: f64,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

impl Hsla {
    /// Build an HSLA color.
    pub fn new(hue_deg: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue_deg,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_premul(self) -> Rgba8Premul {
        let h = self.hue_deg.rem_euclid(360.0) / 360.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);
        let a = self.alpha.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_channel(p, q, h + 1.0 / 3.0),
                hue_channel(p, q, h),
                hue_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba8Premul::from_straight_rgba(
            channel_u8(r),
            channel_u8(g),
            channel_u8(b),
            channel_u8(a),
        )
    }
}

fn hue_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
