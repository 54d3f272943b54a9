use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use whitted_core::{load_scene, Scene};
use whitted_renderer::{
    render, render_motion_blur, render_pulse_animation, save_gif, save_png, RenderConfig,
    GIF_FRAME_DELAY_MS,
};

mod cli;
mod logger;

use cli::{Args, Effect};
use logger::init_logger;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level.into());

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{} scene(s) failed", failed);
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Render every requested scene, returning how many failed.
fn run(args: &Args) -> Result<usize> {
    let scenes = collect_scenes(args)?;
    if scenes.is_empty() {
        bail!("no scene files given (pass paths or --all <DIR>)");
    }

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("failed to create output directory {}", args.output_dir.display())
    })?;

    log::info!("Rendering {} scene(s) with {:?}", scenes.len(), args.effect);

    let mut failed = 0;
    for path in &scenes {
        if let Err(err) = render_scene(path, args.effect, &args.output_dir) {
            log::error!("{}: {:#}", path.display(), err);
            failed += 1;
        }
    }

    Ok(failed)
}

/// Explicit scene paths first, then the sorted `*.xml` files of `--all`.
fn collect_scenes(args: &Args) -> Result<Vec<PathBuf>> {
    let mut scenes = args.scenes.clone();

    if let Some(dir) = &args.all {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read scene directory {}", dir.display()))?;

        let mut found = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("xml")) {
                found.push(path);
            }
        }
        found.sort();
        scenes.extend(found);
    }

    Ok(scenes)
}

fn render_scene(path: &Path, effect: Effect, output_dir: &Path) -> Result<()> {
    let start = Instant::now();
    let scene = load_scene(path).with_context(|| format!("failed to load {}", path.display()))?;

    let output = effect.output_path(output_dir, &output_name(&scene, path));

    match effect {
        Effect::Plain => save_png(&render(&scene, &RenderConfig::default()), &output)?,
        Effect::Supersampling => save_png(&render(&scene, &RenderConfig::supersampled()), &output)?,
        Effect::MotionBlur => save_png(&render_motion_blur(&scene)?, &output)?,
        Effect::Animation => {
            let frames = render_pulse_animation(&scene);
            save_gif(&frames, &output, GIF_FRAME_DELAY_MS)?
        }
    }

    log::info!("Finished {} in {:.2?}", path.display(), start.elapsed());
    Ok(())
}

/// The scene's own output file name, or `<scene stem>.png` when it has none.
fn output_name(scene: &Scene, path: &Path) -> String {
    if !scene.output_file.trim().is_empty() {
        return scene.output_file.trim().to_string();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "render".to_string());
    format!("{stem}.png")
}
