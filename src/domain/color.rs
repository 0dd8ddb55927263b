/// An RGB triple, one byte per channel.
/// This is the engine's only color type; the host converts it to whatever
/// its presentation surface wants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of a cell the instant it comes alive.
pub const JUST_BORN: Rgb = Rgb::new(255, 0, 0);

/// Color a living cell fades toward as it ages.
pub const LONG_LIVED: Rgb = Rgb::new(0, 0, 255);

/// Dead cells are black.
pub const DEAD: Rgb = Rgb::new(0, 0, 0);

/// Seconds for a living cell to fade from JUST_BORN to LONG_LIVED.
pub const AGE_RAMP_SECS: f32 = 5.0;

/// Linear interpolation between two colors.
/// `p` is clamped to [0, 1], so the function is total:
/// `lerp(c1, c2, 0) == c1` and `lerp(c1, c2, 1) == c2`.
pub fn lerp(c1: Rgb, c2: Rgb, p: f32) -> Rgb {
    let p = p.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - p) + f32::from(b) * p).round() as u8;

    Rgb::new(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}
