//! Driver loop: seed with the monomino, grow generation by generation, report
//! and optionally write one text file per size plus a `summary.json`.

use anyhow::{bail, Context, Result};
use omino::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::provenance::{write_sidecar, Payload};

/// Options of one enumeration run.
#[derive(Clone, Debug)]
pub struct EnumerateCfg {
    pub max_size: usize,
    pub out_dir: Option<PathBuf>,
    /// Print the rendered shapes of generations smaller than this.
    pub print_below: usize,
    pub render: RenderCfg,
    pub tag: Option<String>,
}

/// One line of the run summary.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationReport {
    pub size: usize,
    pub count: usize,
    pub known: Option<u64>,
    /// Grown shapes before deduplication; 0 for the seed generation.
    pub candidates: usize,
    pub elapsed_ms: f64,
    pub file: Option<PathBuf>,
}

pub fn run<W: Write>(cfg: &EnumerateCfg, out: &mut W) -> Result<Vec<GenerationReport>> {
    if cfg.max_size == 0 {
        bail!("--max-size must be at least 1");
    }
    if let Some(dir) = &cfg.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut reports = Vec::with_capacity(cfg.max_size);
    let mut generation = Generation::monomino();
    let mut candidates = 0;
    let mut elapsed_ms = 0.0;
    loop {
        let size = generation.size();
        let count = generation.len();
        tracing::info!(size, count, candidates, elapsed_ms, tag = ?cfg.tag, "generation");
        let known = known_count(size);
        if let Some(k) = known.filter(|&k| k != count as u64) {
            tracing::warn!(size, count, known = k, "count differs from the known sequence");
        }

        writeln!(out, "Found {count} polyomino(es) of size {size}")?;
        if count < cfg.print_below {
            for shape in generation.iter() {
                writeln!(out, "{}", shape.render(cfg.render))?;
            }
        }

        let file = match &cfg.out_dir {
            Some(dir) => Some(write_generation(dir, &generation, cfg)?),
            None => None,
        };
        reports.push(GenerationReport {
            size,
            count,
            known,
            candidates,
            elapsed_ms,
            file,
        });

        if size >= cfg.max_size {
            break;
        }
        let start = Instant::now();
        let (next, stats) = next_generation_with_stats(&generation);
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        candidates = stats.candidates;
        generation = next;
    }

    if let Some(dir) = &cfg.out_dir {
        let path = dir.join("summary.json");
        fs::write(&path, serde_json::to_vec_pretty(&reports)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(reports)
}

/// `size-NN.txt`: for every shape its encoding line, then its rendering.
fn write_generation(dir: &Path, generation: &Generation, cfg: &EnumerateCfg) -> Result<PathBuf> {
    let path = dir.join(format!("size-{:02}.txt", generation.size()));
    let mut text = String::new();
    for shape in generation.iter() {
        text.push_str(&format!("{}\n{}\n", shape.key(), shape.render(cfg.render)));
    }
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;

    let params = json!({
        "size": generation.size(),
        "max_size": cfg.max_size,
        "filled": cfg.render.filled.to_string(),
        "empty": cfg.render.empty.to_string(),
        "tight": cfg.render.frame == Frame::Tight,
    });
    let payload = Payload::new(params)
        .tag(cfg.tag.clone())
        .shapes(generation.len());
    write_sidecar(&path, payload)?;
    Ok(path)
}
