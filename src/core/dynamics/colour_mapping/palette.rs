use crate::core::data::colour::Colour;
use crate::core::dynamics::fatou::FatouKind;

/// One palette per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatouPalette {
    Purple,
    Green,
    DarkRed,
}

impl FatouPalette {
    pub const ALL: &'static [Self] = &[Self::Purple, Self::Green, Self::DarkRed];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Purple => "Purple",
            Self::Green => "Green",
            Self::DarkRed => "Dark red",
        }
    }

    #[must_use]
    pub const fn for_kind(kind: FatouKind) -> Self {
        match kind {
            FatouKind::Divergent => Self::Purple,
            FatouKind::Convergent => Self::Green,
            FatouKind::Indeterminate => Self::DarkRed,
        }
    }

    /// `period` only shifts the hue of [`FatouPalette::Green`].
    #[must_use]
    pub fn colour(self, value: f64, period: usize) -> Colour {
        match self {
            Self::Purple => {
                let level = clamp_to_byte(255.0 * value);
                Colour {
                    r: level,
                    g: 0,
                    b: level,
                }
            }
            Self::Green => {
                let period = period as f64;
                let fade = 1.0 - value;
                Colour {
                    r: clamp_to_byte((128.0 + 127.0 * (std::f64::consts::SQRT_2 * period).sin()) * fade),
                    g: clamp_to_byte(255.0 * fade),
                    b: clamp_to_byte((128.0 + 127.0 * period.sin()) * fade),
                }
            }
            Self::DarkRed => Colour {
                r: clamp_to_byte(255.0 * value),
                g: 0,
                b: 0,
            },
        }
    }
}

impl std::fmt::Display for FatouPalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Saturating channel conversion; NaN maps to 0.
#[must_use]
pub fn clamp_to_byte(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }

    channel.clamp(0.0, 255.0) as u8
}
