//! # Placement Reader
//!
//! Walks a top-level model file and lists where parts go.
//!
//! This is the peer consumer of the mesh engine: it reads only the model's
//! own sub-file lines (no recursion) and yields one placement record per
//! reference. Material resolution for the color codes belongs to the caller.

use std::path::Path;

use config::constants::LDU_TO_METERS;
use glam::{DQuat, DVec3};
use ldraw_lines::{parse_source, ColorCode, Command, SubFileRef};
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::filesystem::FileSystem;

/// One part reference in a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Referenced part file name, verbatim from the model.
    pub part: String,
    /// Raw color code, uninterpreted.
    pub color: ColorCode,
    /// Translation in output units.
    pub position: DVec3,
    /// Rotation extracted from the reference transform.
    ///
    /// Derived with glam's scale/rotation/translation decomposition against
    /// a right-handed Y-up convention; mirrored references surface as
    /// negative scale, not as quaternion sign tweaks.
    pub rotation: DQuat,
}

/// Reads the placement records of a top-level model file.
///
/// Applies the same construction-time validation as mesh resolution: the
/// model must exist and carry an LDraw extension. Malformed lines are
/// skipped by the grammar as usual.
pub fn read_placements<F: FileSystem>(
    fs: &F,
    model: &Path,
) -> Result<Vec<Placement>, ResolveError> {
    if !fs.is_file(model) {
        return Err(ResolveError::FileNotFound {
            path: model.to_path_buf(),
        });
    }
    let is_ldraw = model
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("dat") || e.eq_ignore_ascii_case("ldr"));
    if !is_ldraw {
        return Err(ResolveError::WrongExtension {
            path: model.to_path_buf(),
        });
    }

    let source = fs.read_to_string(model)?;
    Ok(parse_source(&source)
        .iter()
        .filter_map(|command| match command {
            Command::SubFileRef(reference) => Some(placement_of(reference)),
            _ => None,
        })
        .collect())
}

fn placement_of(reference: &SubFileRef) -> Placement {
    let (_scale, rotation, translation) = reference.transform.to_scale_rotation_translation();
    Placement {
        part: reference.file.clone(),
        color: reference.color,
        position: translation * LDU_TO_METERS,
        rotation,
    }
}
