//! Closed option enumerations for line-item attributes.
//!
//! The original data kept these as bare strings (`""`, `"O"`, `"IN"`, ...).
//! They are modeled here as closed enums so "no value" is a real variant
//! rather than an empty-string convention, while still serializing as the
//! original wire strings. Each cycling enum carries the canonical
//! advance-on-click order via [`cycled`](RollDirection::cycled).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an option string that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value:?}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

macro_rules! option_enum {
    ($(#[$doc:meta])* $name:ident, $field:literal, { $($(#[$vdoc:meta])* $variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vdoc])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    other => Err(UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

option_enum!(
    /// Roll direction (the `over` column): standard or reverse roll.
    RollDirection, "over", {
        #[default]
        Normal => "",
        Reverse => "O",
    }
);

option_enum!(
    /// Mount style (the `oi` column): inside or outside mount.
    MountStyle, "oi", {
        #[default]
        Unset => "",
        Inside => "IN",
        Outside => "OUT",
    }
);

option_enum!(
    /// Chain pull side (the `lr` column).
    ChainSide, "lr", {
        #[default]
        Unset => "",
        Left => "L",
        Right => "R",
    }
);

option_enum!(
    /// Dual-bracket flag (the `dual` column). Dual brackets are priced in
    /// pairs; see the pricing strategy.
    DualBracket, "dual", {
        #[default]
        None => "",
        Dual => "D",
    }
);

option_enum!(
    /// Winder upgrade (the `winder` column). Mutually exclusive with a
    /// motor; the store enforces the mutex.
    Winder, "winder", {
        #[default]
        None => "",
        HeavyDuty => "HD",
    }
);

impl RollDirection {
    /// Next value when the cell is clicked: toggles between normal and
    /// reverse.
    pub fn cycled(self) -> Self {
        match self {
            Self::Normal => Self::Reverse,
            Self::Reverse => Self::Normal,
        }
    }
}

impl MountStyle {
    /// Next value when the cell is clicked. Once set, the value alternates
    /// between inside and outside and never returns to unset.
    pub fn cycled(self) -> Self {
        match self {
            Self::Unset | Self::Outside => Self::Inside,
            Self::Inside => Self::Outside,
        }
    }
}

impl ChainSide {
    /// Next value when the cell is clicked. Once set, the value alternates
    /// between left and right and never returns to unset.
    pub fn cycled(self) -> Self {
        match self {
            Self::Unset | Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl DualBracket {
    /// Toggle between dual and none.
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Dual,
            Self::Dual => Self::None,
        }
    }

    pub fn is_dual(&self) -> bool {
        matches!(self, Self::Dual)
    }
}

impl Winder {
    /// Toggle between heavy-duty and none.
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::HeavyDuty,
            Self::HeavyDuty => Self::None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::None)
    }
}
