//! Build one vegetation patch and dump its instances.
//!
//! Usage: cargo run --release --bin scatter_patch -- [--config patch.json]
//!        [--center x,z] [--exclude x,z;x,z;x,z] [--out instances.json]
//!        [--texture blade.png]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use glam::Vec2;

use sward::core::{logging, Result};
use sward::render::RecordingSink;
use sward::texture::{save_blade_texture, BladeTextureDesc};
use sward::{PatchConfig, VegetationPatch};

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    center: Vec2,
    exclude: Option<Vec<Vec2>>,
    out: Option<PathBuf>,
    texture: Option<PathBuf>,
}

fn parse_point(s: &str) -> Option<Vec2> {
    let (x, z) = s.split_once(',')?;
    Some(Vec2::new(x.trim().parse().ok()?, z.trim().parse().ok()?))
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().ok_or_else(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--center" => {
                let v = value()?;
                args.center = parse_point(&v).ok_or_else(|| format!("bad --center '{v}'"))?;
            }
            "--exclude" => {
                let v = value()?;
                let points = v
                    .split(';')
                    .map(parse_point)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| format!("bad --exclude '{v}'"))?;
                args.exclude = Some(points);
            }
            "--out" => args.out = Some(PathBuf::from(value()?)),
            "--texture" => args.texture = Some(PathBuf::from(value()?)),
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => PatchConfig::load(path)?,
        None => PatchConfig::default(),
    };

    let mut patch = VegetationPatch::new(config)?;
    patch.set_center(args.center);
    patch.set_exclusion_polygon(args.exclude.as_deref());

    let start = Instant::now();
    let mut sink = RecordingSink::new();
    patch.ensure_built_and_sync(&mut sink);
    let report = patch.last_report();
    log::info!(
        "Placed {}/{} instances in {} attempts ({:.1}ms){}",
        report.placed,
        report.requested,
        report.attempts,
        start.elapsed().as_secs_f64() * 1000.0,
        if report.is_partial() { " - budget exhausted" } else { "" },
    );

    if let Some(out) = &args.out {
        std::fs::write(out, serde_json::to_string_pretty(patch.instances())?)?;
        log::info!("Wrote {} instances to {}", patch.instances().len(), out.display());
    }

    if let Some(tex) = &args.texture {
        save_blade_texture(&BladeTextureDesc::default(), tex)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            log::error!("{msg}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
