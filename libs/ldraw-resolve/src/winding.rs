//! # BFC Winding State Machine
//!
//! Per-recursion-frame winding state.
//!
//! Each frame carries the certification/orientation/clipping state declared
//! by the file's BFC statements, the invert flag inherited from its parent,
//! and the one-shot `invert_next` flag. The one-shot flag is consumed by the
//! next geometry-producing statement (sub-file reference, triangle, or quad)
//! and cleared whether or not it was set; statements that fail their grammar
//! never reach this machine and so never consume it.

use ldraw_lines::{BfcDirective, Winding};

/// Certification declared by the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Certification {
    /// No BFC statement seen yet.
    Unknown,
    /// `BFC CERTIFY` seen.
    Certified,
    /// `BFC NOCERTIFY` seen; the file declares no orientation.
    NotCertified,
}

/// Winding state for one recursion frame.
#[derive(Debug, Clone)]
pub struct WindingState {
    certification: Certification,
    winding: Winding,
    clipping: bool,
    invert: bool,
    invert_next: bool,
}

impl WindingState {
    /// Creates frame state with the invert flag inherited from the parent.
    ///
    /// Defaults per the BFC extension: counter-clockwise orientation,
    /// clipping on, certification unknown.
    pub fn new(invert: bool) -> Self {
        Self {
            certification: Certification::Unknown,
            winding: Winding::CounterClockwise,
            clipping: true,
            invert,
            invert_next: false,
        }
    }

    /// Applies a `0 BFC` statement.
    pub fn apply(&mut self, directive: BfcDirective) {
        match directive {
            BfcDirective::Certify(winding) => {
                self.certification = Certification::Certified;
                if let Some(winding) = winding {
                    self.winding = winding;
                }
            }
            BfcDirective::NoCertify => {
                // No winding effect.
                self.certification = Certification::NotCertified;
            }
            BfcDirective::SetWinding(winding) => self.winding = winding,
            BfcDirective::Clip(winding) => {
                self.clipping = true;
                if let Some(winding) = winding {
                    self.winding = winding;
                }
            }
            BfcDirective::NoClip => self.clipping = false,
            BfcDirective::InvertNext => self.invert_next = true,
        }
    }

    /// Resolves the invert flag for the geometry statement being processed,
    /// consuming the one-shot `invert_next`.
    pub fn effective_invert(&mut self) -> bool {
        let one_shot = std::mem::take(&mut self.invert_next);
        self.invert ^ one_shot
    }

    /// Returns the declared default orientation.
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Returns the declared certification.
    pub fn certification(&self) -> Certification {
        self.certification
    }

    /// Returns whether clipping is enabled.
    pub fn clipping(&self) -> bool {
        self.clipping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = WindingState::new(false);
        assert_eq!(state.certification(), Certification::Unknown);
        assert_eq!(state.winding(), Winding::CounterClockwise);
        assert!(state.clipping());
    }

    #[test]
    fn test_inherited_invert_is_stable() {
        let mut state = WindingState::new(true);
        assert!(state.effective_invert());
        // Not one-shot: the inherited flag survives consumption.
        assert!(state.effective_invert());
    }

    #[test]
    fn test_invert_next_is_one_shot() {
        let mut state = WindingState::new(false);
        state.apply(BfcDirective::InvertNext);
        assert!(state.effective_invert());
        assert!(!state.effective_invert());
    }

    #[test]
    fn test_invert_next_xors_with_inherited() {
        let mut state = WindingState::new(true);
        state.apply(BfcDirective::InvertNext);
        assert!(!state.effective_invert());
        assert!(state.effective_invert());
    }

    #[test]
    fn test_certify_sets_winding() {
        let mut state = WindingState::new(false);
        state.apply(BfcDirective::Certify(Some(Winding::Clockwise)));
        assert_eq!(state.certification(), Certification::Certified);
        assert_eq!(state.winding(), Winding::Clockwise);
    }

    #[test]
    fn test_nocertify_keeps_winding() {
        let mut state = WindingState::new(false);
        state.apply(BfcDirective::SetWinding(Winding::Clockwise));
        state.apply(BfcDirective::NoCertify);
        assert_eq!(state.certification(), Certification::NotCertified);
        assert_eq!(state.winding(), Winding::Clockwise);
    }

    #[test]
    fn test_clip_updates_orientation_like_certify() {
        let mut state = WindingState::new(false);
        state.apply(BfcDirective::NoClip);
        assert!(!state.clipping());
        state.apply(BfcDirective::Clip(Some(Winding::Clockwise)));
        assert!(state.clipping());
        assert_eq!(state.winding(), Winding::Clockwise);
    }
}
