//! # Line Parser
//!
//! Dispatches each source line on its type token and assembles commands.
//!
//! The grammar is strict per line type: geometry lines must consume exactly
//! their token count (trailing junk fails the line), while sub-file
//! references swallow the rest of the line as a verbatim file name. Failed
//! lines are logged and dropped; parsing never aborts.

use glam::DVec3;
use tracing::warn;

use crate::bfc::BfcDirective;
use crate::command::{
    transform_from_line, ColorCode, Command, LinePrimitive, Meta, OptionalLinePrimitive,
    QuadPrimitive, SubFileRef, TrianglePrimitive,
};
use crate::cursor::Cursor;
use crate::error::LineError;

/// Parses a whole source file into commands.
///
/// Tolerates `\n` and `\r\n` endings and leading/trailing whitespace per
/// line. Blank lines produce nothing; malformed lines are skipped with a
/// warning.
///
/// # Example
///
/// ```rust
/// use ldraw_lines::{parse_source, Command};
///
/// let commands = parse_source("0 a comment\r\n4 16 0 0 0 1 0 0 1 0 1 0 0 1\n");
/// assert_eq!(commands.len(), 2);
/// assert!(matches!(commands[1], Command::Quad(_)));
/// ```
pub fn parse_source(source: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(command) => commands.push(command),
            Err(error) => {
                warn!(line = index + 1, text = line, %error, "skipping malformed LDraw line");
            }
        }
    }
    commands
}

/// Parses a single non-empty, trimmed line.
pub fn parse_line(line: &str) -> Result<Command, LineError> {
    let mut cursor = Cursor::new(line);
    // Non-empty input always yields a first token.
    let line_type = cursor.next_token().unwrap_or_default();
    match line_type {
        "0" => Ok(Command::Meta(parse_meta(&cursor))),
        "1" => parse_sub_file_ref(cursor),
        "2" => parse_line_primitive(cursor),
        "3" => parse_triangle(cursor),
        "4" => parse_quad(cursor),
        "5" => parse_optional_line(cursor),
        other => Err(LineError::UnknownLineType(other.to_string())),
    }
}

/// Parses the body of a type-0 line.
///
/// `BFC` and `AUTHOR` keywords get structure; everything else, including
/// malformed BFC statements, falls back to a plain comment.
fn parse_meta(cursor: &Cursor<'_>) -> Meta {
    let body = cursor.remainder();
    let mut meta_cursor = Cursor::new(body);
    match meta_cursor.next_token() {
        Some("BFC") => {
            let tokens: Vec<&str> = meta_cursor.remainder().split_whitespace().collect();
            match BfcDirective::parse(&tokens) {
                Some(directive) => Meta::Bfc(directive),
                None => Meta::Comment(body.to_string()),
            }
        }
        Some("AUTHOR" | "!AUTHOR") => {
            let name = meta_cursor.remainder();
            if name.is_empty() {
                Meta::Comment(body.to_string())
            } else {
                Meta::Author(name.to_string())
            }
        }
        _ => Meta::Comment(body.to_string()),
    }
}

fn parse_color(cursor: &mut Cursor<'_>) -> Option<ColorCode> {
    let token = cursor.next_token()?;
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        // Direct colors encode RGB in hex.
        u32::from_str_radix(hex, 16).ok()
    } else {
        token.parse().ok()
    }
}

fn parse_sub_file_ref(mut cursor: Cursor<'_>) -> Result<Command, LineError> {
    let grammar = LineError::Grammar { line_type: 1 };
    let color = parse_color(&mut cursor).ok_or(grammar.clone())?;
    let mut values = [0.0; 12];
    cursor.fill_f64(&mut values).ok_or(grammar.clone())?;
    let file = cursor.remainder();
    if file.is_empty() {
        return Err(grammar);
    }
    Ok(Command::SubFileRef(SubFileRef {
        color,
        transform: transform_from_line(values),
        file: file.to_string(),
    }))
}

fn parse_points<const N: usize>(
    cursor: &mut Cursor<'_>,
    line_type: u8,
) -> Result<(ColorCode, [DVec3; N]), LineError> {
    let grammar = LineError::Grammar { line_type };
    let color = parse_color(cursor).ok_or(grammar.clone())?;
    let mut points = [DVec3::ZERO; N];
    for point in points.iter_mut() {
        let mut coords = [0.0; 3];
        cursor.fill_f64(&mut coords).ok_or(grammar.clone())?;
        *point = DVec3::from_array(coords);
    }
    if !cursor.is_exhausted() {
        return Err(grammar);
    }
    Ok((color, points))
}

fn parse_line_primitive(mut cursor: Cursor<'_>) -> Result<Command, LineError> {
    let (color, points) = parse_points::<2>(&mut cursor, 2)?;
    Ok(Command::Line(LinePrimitive { color, points }))
}

fn parse_triangle(mut cursor: Cursor<'_>) -> Result<Command, LineError> {
    let (color, vertices) = parse_points::<3>(&mut cursor, 3)?;
    Ok(Command::Triangle(TrianglePrimitive { color, vertices }))
}

fn parse_quad(mut cursor: Cursor<'_>) -> Result<Command, LineError> {
    let (color, vertices) = parse_points::<4>(&mut cursor, 4)?;
    Ok(Command::Quad(QuadPrimitive { color, vertices }))
}

fn parse_optional_line(mut cursor: Cursor<'_>) -> Result<Command, LineError> {
    let (color, all) = parse_points::<4>(&mut cursor, 5)?;
    Ok(Command::OptionalLine(OptionalLinePrimitive {
        color,
        points: [all[0], all[1]],
        control: [all[2], all[3]],
    }))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfc::Winding;
    use glam::DVec3;

    #[test]
    fn test_parse_comment() {
        let cmd = parse_line("0 Brick  2 x  4").unwrap();
        assert_eq!(cmd, Command::Meta(Meta::Comment("Brick  2 x  4".to_string())));
    }

    #[test]
    fn test_parse_author_variants() {
        let cmd = parse_line("0 AUTHOR James Jessiman").unwrap();
        assert_eq!(cmd, Command::Meta(Meta::Author("James Jessiman".to_string())));
        let cmd = parse_line("0 !AUTHOR James Jessiman").unwrap();
        assert_eq!(cmd, Command::Meta(Meta::Author("James Jessiman".to_string())));
    }

    #[test]
    fn test_author_without_name_is_comment() {
        let cmd = parse_line("0 AUTHOR").unwrap();
        assert_eq!(cmd, Command::Meta(Meta::Comment("AUTHOR".to_string())));
    }

    #[test]
    fn test_parse_bfc_certify_ccw() {
        let cmd = parse_line("0 BFC CERTIFY CCW").unwrap();
        assert_eq!(
            cmd,
            Command::Meta(Meta::Bfc(BfcDirective::Certify(Some(Winding::CounterClockwise))))
        );
    }

    #[test]
    fn test_malformed_bfc_is_comment() {
        let cmd = parse_line("0 BFC UPSIDEDOWN").unwrap();
        assert_eq!(cmd, Command::Meta(Meta::Comment("BFC UPSIDEDOWN".to_string())));
    }

    #[test]
    fn test_parse_sub_file_ref() {
        let cmd = parse_line("1 16 0 0 0 1 0 0 0 1 0 0 0 1 stud.dat").unwrap();
        match cmd {
            Command::SubFileRef(reference) => {
                assert_eq!(reference.color, 16);
                assert_eq!(reference.file, "stud.dat");
                assert_eq!(reference.transform, glam::DMat4::IDENTITY);
            }
            other => panic!("expected SubFileRef, got {:?}", other),
        }
    }

    #[test]
    fn test_sub_file_name_with_spaces() {
        let cmd = parse_line("1 16 0 0 0 1 0 0 0 1 0 0 0 1 my spaced part.dat").unwrap();
        match cmd {
            Command::SubFileRef(reference) => {
                assert_eq!(reference.file, "my spaced part.dat");
            }
            other => panic!("expected SubFileRef, got {:?}", other),
        }
    }

    #[test]
    fn test_sub_file_missing_name_fails() {
        let err = parse_line("1 16 0 0 0 1 0 0 0 1 0 0 0 1").unwrap_err();
        assert_eq!(err, LineError::Grammar { line_type: 1 });
    }

    #[test]
    fn test_parse_triangle() {
        let cmd = parse_line("3 16 0 0 0 1 0 0 0 1 0").unwrap();
        match cmd {
            Command::Triangle(triangle) => {
                assert_eq!(triangle.vertices[1], DVec3::X);
                assert_eq!(triangle.vertices[2], DVec3::Y);
            }
            other => panic!("expected Triangle, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_quad() {
        let cmd = parse_line("4 16 0 0 0 1 0 0 1 0 1 0 0 1").unwrap();
        match cmd {
            Command::Quad(quad) => {
                assert_eq!(quad.vertices[3], DVec3::new(0.0, 0.0, 1.0));
            }
            other => panic!("expected Quad, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_optional_line() {
        let cmd = parse_line("5 24 0 0 0 1 0 0 0 1 0 0 0 1").unwrap();
        match cmd {
            Command::OptionalLine(optional) => {
                assert_eq!(optional.points[0], DVec3::ZERO);
                assert_eq!(optional.control[1], DVec3::Z);
            }
            other => panic!("expected OptionalLine, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_junk_fails_geometry_lines() {
        assert!(parse_line("3 16 0 0 0 1 0 0 0 1 0 junk").is_err());
        assert!(parse_line("4 16 0 0 0 1 0 0 1 0 1 0 0 1 junk").is_err());
    }

    #[test]
    fn test_short_triangle_fails() {
        assert!(parse_line("3 16 0 0 0 1 0 0").is_err());
    }

    #[test]
    fn test_hex_direct_color() {
        let cmd = parse_line("3 0x2FF00FF 0 0 0 1 0 0 0 1 0").unwrap();
        match cmd {
            Command::Triangle(triangle) => assert_eq!(triangle.color, 0x2FF00FF),
            other => panic!("expected Triangle, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_line_type_fails() {
        assert_eq!(
            parse_line("7 16 0 0 0").unwrap_err(),
            LineError::UnknownLineType("7".to_string())
        );
    }

    #[test]
    fn test_parse_source_skips_bad_lines() {
        let source = "0 header\n3 16 bad tokens here x y z\n3 16 0 0 0 1 0 0 0 1 0\n";
        let commands = parse_source(source);
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[1], Command::Triangle(_)));
    }

    #[test]
    fn test_parse_source_crlf() {
        let source = "0 header\r\n4 16 0 0 0 1 0 0 1 0 1 0 0 1\r\n";
        let commands = parse_source(source);
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_negative_and_fractional_numbers() {
        let cmd = parse_line("3 16 -1.5 0 0 1.25 0 0 0 -1 0").unwrap();
        match cmd {
            Command::Triangle(triangle) => {
                assert_eq!(triangle.vertices[0].x, -1.5);
                assert_eq!(triangle.vertices[1].x, 1.25);
            }
            other => panic!("expected Triangle, got {:?}", other),
        }
    }
}
