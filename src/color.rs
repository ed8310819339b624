//! Colors used by lights and materials.
//!
//! Components are RGBA `f32` values in the range [0.0, 1.0].

pub use rgb::Rgba;

/// The color type used throughout embed3d. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// White (255, 255, 255)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Builds an opaque color from a `0xRRGGBB` literal, as authored in web tooling.
///
/// # Example
/// ```
/// # use embed3d::color::{from_hex, WHITE};
/// assert_eq!(from_hex(0xffffff), WHITE);
/// ```
pub fn from_hex(hex: u32) -> Color {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Color::new(channel(16), channel(8), channel(0), 1.0)
}
