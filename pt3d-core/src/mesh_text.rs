/// Loader for the plain-text mesh format
///
/// One vertex per line (`v x y z`), one triangular face per line
/// (`f i1 i2 i3`, 1-based vertex indices). Blank lines, comments (`#`),
/// and unrecognized line types are skipped.
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, multispace1},
    combinator::map_res,
    number::complete::float,
    IResult,
};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::geometry::{Mesh, Triangle};
use crate::vector::Vec4;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("failed to read mesh file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed {kind} statement")]
    Parse { line: usize, kind: &'static str },
    #[error("line {line}: face index {index} out of range (1..={count})")]
    FaceIndex {
        line: usize,
        index: u32,
        count: usize,
    },
}

/// Load a mesh from a file. Failure here is fatal at startup; the pipeline
/// has no scene without it.
pub fn load_mesh(path: &Path) -> Result<Mesh, MeshError> {
    let text = fs::read_to_string(path)?;
    parse_mesh(&text)
}

/// Parse a mesh from text.
pub fn parse_mesh(text: &str) -> Result<Mesh, MeshError> {
    let mut vertices: Vec<Vec4> = Vec::new();
    let mut mesh = Mesh::new();

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let trimmed = raw.trim();
        match trimmed.as_bytes() {
            [] | [b'#', ..] => {}
            [b'v', b' ' | b'\t', ..] => {
                let (_, (x, y, z)) = parse_vertex(trimmed)
                    .map_err(|_| MeshError::Parse { line, kind: "vertex" })?;
                vertices.push(Vec4::point(x, y, z));
            }
            [b'f', b' ' | b'\t', ..] => {
                let (_, (i0, i1, i2)) = parse_face(trimmed)
                    .map_err(|_| MeshError::Parse { line, kind: "face" })?;
                let resolve = |index: u32| -> Result<Vec4, MeshError> {
                    vertices
                        .get(index.wrapping_sub(1) as usize)
                        .copied()
                        .ok_or(MeshError::FaceIndex {
                            line,
                            index,
                            count: vertices.len(),
                        })
                };
                mesh.add_triangle(Triangle::new(resolve(i0)?, resolve(i1)?, resolve(i2)?));
            }
            _ => {}
        }
    }

    log::debug!(
        "parsed mesh: {} vertices, {} triangles",
        vertices.len(),
        mesh.triangles.len()
    );
    Ok(mesh)
}

fn parse_vertex(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = tag("v")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

fn parse_face(input: &str) -> IResult<&str, (u32, u32, u32)> {
    let (input, _) = tag("f")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, i0) = parse_index(input)?;
    let (input, _) = multispace1(input)?;
    let (input, i1) = parse_index(input)?;
    let (input, _) = multispace1(input)?;
    let (input, i2) = parse_index(input)?;
    Ok((input, (i0, i1, i2)))
}

fn parse_index(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_triangle() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.triangles.len(), 1);
        assert_eq!(mesh.triangles[0].vertices[1], Vec4::point(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_skips_comments_and_unknown_lines() {
        let text = "# a comment\nv 0 0 0\nvn 0 0 1\nv 1 0 0\nv 0 1 0\ns off\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.triangles.len(), 1);
    }

    #[test]
    fn test_tab_separated_lines() {
        let text = "v\t0 0 0\nv\t1\t0\t0\nv 0 1 0\nf\t1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.triangles.len(), 1);
        assert_eq!(mesh.triangles[0].vertices[1], Vec4::point(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_negative_and_fractional_coordinates() {
        let text = "v -1.5 0.25 3e-2\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        let v = mesh.triangles[0].vertices[0];
        assert!((v.x + 1.5).abs() < 1e-6);
        assert!((v.y - 0.25).abs() < 1e-6);
        assert!((v.z - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_face_index_out_of_range() {
        let text = "v 0 0 0\nv 1 0 0\nf 1 2 3\n";
        match parse_mesh(text) {
            Err(MeshError::FaceIndex { line, index, count }) => {
                assert_eq!(line, 3);
                assert_eq!(index, 3);
                assert_eq!(count, 2);
            }
            other => panic!("expected face index error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_vertex_reports_line() {
        let text = "v 0 0 0\nv one 0 0\n";
        match parse_mesh(text) {
            Err(MeshError::Parse { line, kind }) => {
                assert_eq!(line, 2);
                assert_eq!(kind, "vertex");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_mesh(Path::new("/nonexistent/mesh.txt"));
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
