//! Color type for face shading
//!
//! Colors live in RGB space (0-255 per channel, with alpha) and convert
//! to HSL for lightness manipulation. The one operation the rendering
//! pipeline needs is [`Color::lighten`]: a multiplicative tint by a light
//! color followed by a lightness shift, which is how Lambertian brightness
//! is folded into a face's base color.
//!
//! Channels are carried as `f64` in the 0-255 range so repeated
//! HSL round-trips don't accumulate quantization error.
//!
//! # Examples
//!
//! ```
//! use isorender::Color;
//!
//! let grey = Color::new(100.0, 100.0, 100.0);
//! let lit = grey.lighten(0.2, Color::WHITE);
//! assert!(lit.to_hsla().l > grey.to_hsla().l);
//! ```

/// RGBA color with channels in the 0-255 range
///
/// # Examples
///
/// ```
/// use isorender::Color;
///
/// let red = Color::new(255.0, 0.0, 0.0);
/// assert_eq!(red.a, 255.0);
///
/// let translucent = Color::with_alpha(0.0, 0.0, 255.0, 128.0);
/// assert_eq!(translucent.a, 128.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
  /// Red component (0-255)
  pub r: f64,
  /// Green component (0-255)
  pub g: f64,
  /// Blue component (0-255)
  pub b: f64,
  /// Alpha component (0-255, 255 is opaque)
  pub a: f64,
}

/// HSL representation of a [`Color`]
///
/// Hue is a fraction of the full circle in `[0, 1)`; saturation and
/// lightness are in `[0, 1]`. Alpha is carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
  /// Hue as a fraction of a full turn, `[0, 1)`
  pub h: f64,
  /// Saturation, `[0, 1]`
  pub s: f64,
  /// Lightness, `[0, 1]`
  pub l: f64,
  /// Alpha component (0-255)
  pub a: f64,
}

impl Color {
  /// Opaque black
  pub const BLACK: Self = Self {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 255.0,
  };

  /// Opaque white
  pub const WHITE: Self = Self {
    r: 255.0,
    g: 255.0,
    b: 255.0,
    a: 255.0,
  };

  /// Creates an opaque color
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Color;
  ///
  /// let orange = Color::new(255.0, 128.0, 0.0);
  /// assert_eq!(orange.g, 128.0);
  /// ```
  pub const fn new(r: f64, g: f64, b: f64) -> Self {
    Self { r, g, b, a: 255.0 }
  }

  /// Creates a color with an explicit alpha channel
  pub const fn with_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
    Self { r, g, b, a }
  }

  /// Converts to HSL
  ///
  /// Achromatic colors report zero hue and saturation.
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Color;
  ///
  /// let red = Color::new(255.0, 0.0, 0.0);
  /// let hsl = red.to_hsla();
  /// assert_eq!(hsl.h, 0.0);
  /// assert_eq!(hsl.s, 1.0);
  /// assert_eq!(hsl.l, 0.5);
  /// ```
  pub fn to_hsla(self) -> Hsla {
    let r = self.r / 255.0;
    let g = self.g / 255.0;
    let b = self.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
      // Achromatic
      (0.0, 0.0)
    } else {
      let s = if l < 0.5 {
        delta / (max + min)
      } else {
        delta / (2.0 - max - min)
      };

      let h = if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
      } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
      } else {
        ((r - g) / delta + 4.0) / 6.0
      };

      (h % 1.0, s)
    };

    Hsla {
      h,
      s,
      l,
      a: self.a,
    }
  }

  /// Tints this color by a light color, then raises lightness
  ///
  /// The light color scales each channel multiplicatively (white leaves
  /// the color untouched), and `amount` is added to the HSL lightness,
  /// clamped to `[0, 1]`. Negative amounts darken. Alpha is preserved.
  /// Pure: neither operand is modified.
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Color;
  ///
  /// let grey = Color::new(100.0, 100.0, 100.0);
  /// let lit = grey.lighten(0.2, Color::WHITE);
  /// assert!(lit.r > grey.r);
  ///
  /// let dark = grey.lighten(-0.2, Color::WHITE);
  /// assert!(dark.r < grey.r);
  /// ```
  pub fn lighten(self, amount: f64, light_color: Color) -> Color {
    let tinted = Color {
      r: self.r * light_color.r / 255.0,
      g: self.g * light_color.g / 255.0,
      b: self.b * light_color.b / 255.0,
      a: self.a,
    };

    let mut hsla = tinted.to_hsla();
    hsla.l = (hsla.l + amount).clamp(0.0, 1.0);
    hsla.to_color()
  }
}

impl Hsla {
  /// Converts back to RGB
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Color;
  ///
  /// let color = Color::new(40.0, 80.0, 120.0);
  /// let round_trip = color.to_hsla().to_color();
  /// assert!((round_trip.r - color.r).abs() < 1e-9);
  /// assert!((round_trip.b - color.b).abs() < 1e-9);
  /// ```
  pub fn to_color(self) -> Color {
    if self.s == 0.0 {
      let value = self.l * 255.0;
      return Color {
        r: value,
        g: value,
        b: value,
        a: self.a,
      };
    }

    let q = if self.l < 0.5 {
      self.l * (1.0 + self.s)
    } else {
      self.l + self.s - self.l * self.s
    };
    let p = 2.0 * self.l - q;

    Color {
      r: hue_to_channel(p, q, self.h + 1.0 / 3.0) * 255.0,
      g: hue_to_channel(p, q, self.h) * 255.0,
      b: hue_to_channel(p, q, self.h - 1.0 / 3.0) * 255.0,
      a: self.a,
    }
  }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
  let t = t.rem_euclid(1.0);
  if t < 1.0 / 6.0 {
    p + (q - p) * 6.0 * t
  } else if t < 0.5 {
    q
  } else if t < 2.0 / 3.0 {
    p + (q - p) * (2.0 / 3.0 - t) * 6.0
  } else {
    p
  }
}
