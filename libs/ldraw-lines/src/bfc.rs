//! # BFC Directives
//!
//! Back-face-culling meta statements (`0 BFC ...`).
//!
//! These control the winding state machine in the resolver: declared face
//! orientation, clipping mode, and the one-shot `INVERTNEXT` flag.

use serde::{Deserialize, Serialize};

/// Declared face orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Parses a `CW`/`CCW` token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "CW" => Some(Self::Clockwise),
            "CCW" => Some(Self::CounterClockwise),
            _ => None,
        }
    }
}

/// A single `0 BFC` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BfcDirective {
    /// `CERTIFY [CW|CCW]` - the file declares a certified orientation.
    Certify(Option<Winding>),
    /// `NOCERTIFY` - the file declares no certified orientation.
    NoCertify,
    /// Bare `CW`/`CCW` - update the default orientation.
    SetWinding(Winding),
    /// `CLIP [CW|CCW]` - enable clipping, optionally updating orientation.
    Clip(Option<Winding>),
    /// `NOCLIP` - disable clipping.
    NoClip,
    /// `INVERTNEXT` - invert the next geometry-producing statement.
    InvertNext,
}

impl BfcDirective {
    /// Parses the tokens following `BFC`. Returns `None` for unrecognized or
    /// malformed directives, which callers treat as plain comments.
    pub fn parse(tokens: &[&str]) -> Option<Self> {
        match tokens {
            ["CERTIFY"] => Some(Self::Certify(None)),
            ["CERTIFY", w] => Winding::parse(w).map(|w| Self::Certify(Some(w))),
            ["NOCERTIFY"] => Some(Self::NoCertify),
            [w @ ("CW" | "CCW")] => Winding::parse(w).map(Self::SetWinding),
            ["CLIP"] => Some(Self::Clip(None)),
            ["CLIP", w] => Winding::parse(w).map(|w| Self::Clip(Some(w))),
            ["NOCLIP"] => Some(Self::NoClip),
            ["INVERTNEXT"] => Some(Self::InvertNext),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certify_bare() {
        assert_eq!(BfcDirective::parse(&["CERTIFY"]), Some(BfcDirective::Certify(None)));
    }

    #[test]
    fn test_certify_with_winding() {
        assert_eq!(
            BfcDirective::parse(&["CERTIFY", "CW"]),
            Some(BfcDirective::Certify(Some(Winding::Clockwise)))
        );
    }

    #[test]
    fn test_bare_winding() {
        assert_eq!(
            BfcDirective::parse(&["CCW"]),
            Some(BfcDirective::SetWinding(Winding::CounterClockwise))
        );
    }

    #[test]
    fn test_clip_variants() {
        assert_eq!(BfcDirective::parse(&["CLIP"]), Some(BfcDirective::Clip(None)));
        assert_eq!(
            BfcDirective::parse(&["CLIP", "CCW"]),
            Some(BfcDirective::Clip(Some(Winding::CounterClockwise)))
        );
        assert_eq!(BfcDirective::parse(&["NOCLIP"]), Some(BfcDirective::NoClip));
    }

    #[test]
    fn test_invertnext() {
        assert_eq!(BfcDirective::parse(&["INVERTNEXT"]), Some(BfcDirective::InvertNext));
    }

    #[test]
    fn test_malformed_is_none() {
        assert_eq!(BfcDirective::parse(&[]), None);
        assert_eq!(BfcDirective::parse(&["CERTIFY", "SIDEWAYS"]), None);
        assert_eq!(BfcDirective::parse(&["CERTIFY", "CW", "CW"]), None);
        assert_eq!(BfcDirective::parse(&["FROBNICATE"]), None);
    }
}
