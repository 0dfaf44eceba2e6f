use std::path::PathBuf;

use crate::error::Error;
use crate::types::Pointer;

/// Runtime configuration, built from command-line flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Conf {
    /// Window title
    pub title: String,
    /// Target frame rate for the windowed loop (best effort)
    pub target_fps: usize,
    /// Render this many frames without a window instead of opening one
    pub headless_frames: Option<usize>,
    /// Pointer position fed to every headless frame
    pub pointer: Pointer,
    /// Write the last rendered frame here as PNG
    pub snapshot: Option<PathBuf>,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            title: "Growing Circle".to_owned(),
            target_fps: 60,
            headless_frames: None,
            pointer: Pointer::default(),
            snapshot: None,
        }
    }
}

pub const USAGE: &str = "\
usage: growing-circle [--title <text>] [--fps <n>]
                      [--headless <frames>] [--pointer <x>,<y>] [--snapshot <file.png>]";

impl Conf {
    /// Parse flags (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut conf = Conf::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| Error::InvalidArgs(format!("{flag} needs a value")))
            };
            match flag.as_str() {
                "--title" => conf.title = value()?,
                "--fps" => conf.target_fps = parse_number(&flag, &value()?)?,
                "--headless" => conf.headless_frames = Some(parse_number(&flag, &value()?)?),
                "--pointer" => conf.pointer = parse_pointer(&value()?)?,
                "--snapshot" => conf.snapshot = Some(PathBuf::from(value()?)),
                other => return Err(Error::InvalidArgs(format!("unknown flag {other}"))),
            }
        }
        Ok(conf)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, s: &str) -> Result<T, Error> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidArgs(format!("{flag}: not a number: {s}")))
}

fn parse_pointer(s: &str) -> Result<Pointer, Error> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| Error::InvalidArgs(format!("--pointer: expected <x>,<y>, got {s}")))?;
    Ok(Pointer::new(
        parse_number("--pointer", x)?,
        parse_number("--pointer", y)?,
    ))
}
