//! Single-shape commands: `show`, `sample` and `report`.

use anyhow::{Context, Result};
use omino::prelude::*;
use std::io::Write;

use crate::provenance;

/// Bounding box rendering when `tight`, otherwise the `size x size` square.
pub fn render_cfg(tight: bool) -> RenderCfg {
    RenderCfg {
        frame: if tight { Frame::Tight } else { Frame::Square },
        ..RenderCfg::default()
    }
}

/// Input key and rendering, then the canonical key, the symmetry that maps
/// the input onto it, and its rendering.
pub fn show<W: Write>(encoding: &str, tight: bool, out: &mut W) -> Result<()> {
    let shape: Shape = encoding
        .parse()
        .with_context(|| format!("parsing {encoding:?}"))?;
    let (canonical, symmetry) = canonicalize_with_symmetry(&shape);
    tracing::info!(size = shape.size(), ?symmetry, "show");
    let cfg = render_cfg(tight);
    writeln!(out, "input:     {}", shape.key())?;
    write!(out, "{}", shape.render(cfg))?;
    writeln!(out, "canonical: {} ({symmetry:?})", canonical.key())?;
    write!(out, "{}", canonical.render(cfg))?;
    Ok(())
}

/// One canonical key per sampled shape, each optionally followed by its
/// tight rendering and a blank line.
pub fn sample<W: Write>(size: usize, seed: u64, count: u64, render: bool, out: &mut W) -> Result<()> {
    tracing::info!(size, seed, count, "sample");
    let shapes = random_polyominoes(size, seed, count)
        .with_context(|| format!("sampling polyominoes of size {size}"))?;
    for shape in shapes {
        writeln!(out, "{}", canonicalize(&shape).key())?;
        if render {
            writeln!(out, "{}", shape.render(render_cfg(true)))?;
        }
    }
    Ok(())
}

pub fn report<W: Write>(tag: Option<String>, out: &mut W) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "omino_version": omino::VERSION,
        "tag": tag,
        "known_free_counts": KNOWN_FREE_COUNTS,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&obj)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use omino::is_canonical;

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn show_prints_input_and_canonical_form() {
        let mut out = Vec::new();
        show("2/0.2", false, &mut out).unwrap();
        assert_eq!(
            text(out),
            "input:     2/0.2\n#.\n#.\ncanonical: 2/0.1 (Rot90)\n..\n##\n"
        );
    }

    #[test]
    fn show_tight_renders_bounding_box() {
        let mut out = Vec::new();
        show("3/0.1.3", true, &mut out).unwrap();
        assert_eq!(
            text(out),
            "input:     3/0.1.3\n#.\n##\ncanonical: 3/0.1.3 (Identity)\n#.\n##\n"
        );
    }

    #[test]
    fn show_rejects_bad_encodings() {
        for bad in ["2/0.3", "x/0", "0/", "3/0.1"] {
            let mut out = Vec::new();
            let err = show(bad, false, &mut out).unwrap_err();
            assert!(format!("{err:#}").contains(bad), "{err:#}");
            assert!(out.is_empty());
        }
    }

    #[test]
    fn sample_is_reproducible_and_canonical() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        sample(6, 42, 5, false, &mut a).unwrap();
        sample(6, 42, 5, false, &mut b).unwrap();
        assert_eq!(a, b);
        let text = text(a);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let shape = Shape::parse(line).unwrap();
            assert_eq!(shape.size(), 6);
            assert!(is_canonical(&shape));
        }
    }

    #[test]
    fn sample_with_render_adds_grids() {
        let mut out = Vec::new();
        sample(1, 0, 2, true, &mut out).unwrap();
        assert_eq!(text(out), "1/0\n#\n\n1/0\n#\n\n");
    }

    #[test]
    fn sample_of_size_zero_fails() {
        assert!(sample(0, 0, 1, false, &mut Vec::new()).is_err());
    }

    #[test]
    fn report_lists_version_tag_and_counts() {
        let mut out = Vec::new();
        report(Some("nightly".into()), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["omino_version"], omino::VERSION);
        assert_eq!(v["tag"], "nightly");
        assert_eq!(v["known_free_counts"][4], 12);
        assert_eq!(
            v["known_free_counts"].as_array().unwrap().len(),
            KNOWN_FREE_COUNTS.len()
        );
        assert!(v.get("code_rev").is_some());
    }
}
