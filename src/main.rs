// What you SEE:
// • A 400x300 red window.
// • A black circle with a thick pink outline sits under your mouse pointer.
// • The circle grows by one pixel every frame, forever. ESC quits.
//
// Headless: `--headless <frames> [--pointer x,y] [--snapshot out.png]`
// renders without a window and optionally saves the last frame.

use growing_circle::config::USAGE;
use growing_circle::{Conf, Error, GrowingCircle, Runtime};
use std::iter;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = Conf::from_args(std::env::args().skip(1)).inspect_err(|e| {
        log::error!("{e}");
        eprintln!("{USAGE}");
    })?;
    log::debug!("{conf:?}");

    let mut runtime = Runtime::new(GrowingCircle::new())?;

    match conf.headless_frames {
        Some(frames) => {
            runtime.headless(iter::repeat(conf.pointer).take(frames))?;
            log::info!(
                "rendered {} frames, next diameter {}",
                runtime.frames(),
                runtime.sketch().diameter()
            );
        }
        None => runtime.windowed(&conf.title, conf.target_fps)?,
    }

    if let Some(path) = &conf.snapshot {
        runtime.canvas().surface().save_png(path)?;
    }
    Ok(())
}
