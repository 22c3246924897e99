use std::str::FromStr;

use crate::core::curves::errors::CurveError;
use crate::core::curves::grammar::Grammar;
use crate::core::curves::{cesaro, cesaro_tri, dragon, koch_curve, levy_c_curve, terdragon};

/// A user-facing parameter of a curve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub id: &'static str,
}

/// Static registry entry describing one curve for a UI layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FractalDescriptor {
    pub kind: FractalKind,
    pub id: &'static str,
    pub display_name: &'static str,
    pub parameters: &'static [ParameterDescriptor],
}

const ITERATION_PARAMETERS: &[ParameterDescriptor] = &[ParameterDescriptor {
    name: "Iterations",
    id: "iterations",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalKind {
    Cesaro,
    CesaroTri,
    Dragon,
    KochCurve,
    LevyCCurve,
    Terdragon,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Cesaro,
        Self::CesaroTri,
        Self::Dragon,
        Self::KochCurve,
        Self::LevyCCurve,
        Self::Terdragon,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cesaro => "cesaro",
            Self::CesaroTri => "cesarotri",
            Self::Dragon => "dragon",
            Self::KochCurve => "kochcurve",
            Self::LevyCCurve => "levyccurve",
            Self::Terdragon => "terdragon",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cesaro => "Cesáro Fractal",
            Self::CesaroTri => "Triangle Cesáro Fractal",
            Self::Dragon => "Dragon Fractal",
            Self::KochCurve => "Koch Curve",
            Self::LevyCCurve => "Levy C Curve",
            Self::Terdragon => "Terdragon Fractal",
        }
    }

    #[must_use]
    pub const fn parameters(self) -> &'static [ParameterDescriptor] {
        ITERATION_PARAMETERS
    }

    #[must_use]
    pub const fn descriptor(self) -> FractalDescriptor {
        FractalDescriptor {
            kind: self,
            id: self.id(),
            display_name: self.display_name(),
            parameters: self.parameters(),
        }
    }

    #[must_use]
    pub fn grammar(self) -> Grammar {
        match self {
            Self::Cesaro => cesaro::grammar(),
            Self::CesaroTri => cesaro_tri::grammar(),
            Self::Dragon => dragon::grammar(),
            Self::KochCurve => koch_curve::grammar(),
            Self::LevyCCurve => levy_c_curve::grammar(),
            Self::Terdragon => terdragon::grammar(),
        }
    }
}

impl FromStr for FractalKind {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| CurveError::UnknownFractalKind { id: s.to_string() })
    }
}

/// Looks up the grammar registered under `fractal_id`.
pub fn lookup(fractal_id: &str) -> Result<Grammar, CurveError> {
    Ok(fractal_id.parse::<FractalKind>()?.grammar())
}
