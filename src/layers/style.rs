use serde::{Deserialize, Serialize};

/// Colour with 8-bit channels and a fractional alpha, CSS `rgba()` style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha (0.0 to 1.0)
    pub a: f32,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same colour with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Grid orange used for the finest tier and the highlighted cell.
    pub fn orange() -> Self {
        Self::rgb(255, 140, 0)
    }

    /// Grid blue used for the coarser tiers.
    pub fn grid_blue() -> Self {
        Self::rgb(31, 79, 199)
    }

    /// Route blue.
    pub fn route_blue() -> Self {
        Self::rgb(0, 122, 255)
    }
}

/// How line ends and joints are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Style for line layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Line color
    pub color: Rgba,
    /// Line width
    pub width: f64,
    /// Applied to both cap and join
    #[serde(default)]
    pub cap: LineCap,
}

impl StrokeStyle {
    pub fn new(color: Rgba, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    pub fn rounded(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Rgba::grid_blue().with_alpha(0.18), 1.0)
    }
}

/// Style for polygon layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    /// Fill color
    pub fill: Rgba,
    /// Outline color
    pub outline: Rgba,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::orange().with_alpha(0.3),
            outline: Rgba::orange().with_alpha(0.8),
        }
    }
}
