use std::path::PathBuf;

use clap::Parser;

/// icosa: a rotating wireframe icosahedron, rendered offscreen.
#[derive(Parser, Debug, Clone)]
#[command(name = "icosa", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `icosa=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Number of frames to run before tearing down.
    #[arg(long, default_value_t = 240)]
    pub frames: u64,

    /// Write a snapshot every N drawn frames (0 disables).
    #[arg(long, default_value_t = 60)]
    pub snapshot_every: u64,

    /// Directory for PNG snapshots. Nothing is written when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Resize the surface before this frame.
    #[arg(long)]
    pub resize_at: Option<u64>,

    /// Width after `--resize-at`.
    #[arg(long, default_value_t = 1024)]
    pub resize_width: u32,

    /// Height after `--resize-at`.
    #[arg(long, default_value_t = 768)]
    pub resize_height: u32,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["icosa"]);
        assert_eq!(args.width, 800);
        assert_eq!(args.height, 600);
        assert_eq!(args.frames, 240);
        assert_eq!(args.snapshot_every, 60);
        assert!(args.out.is_none());
        assert!(args.resize_at.is_none());
        assert!(!args.dump_config);
    }

    #[test]
    fn resize_flags() {
        let args = Args::parse_from([
            "icosa",
            "--resize-at",
            "30",
            "--resize-width",
            "320",
            "--resize-height",
            "0",
        ]);
        assert_eq!(args.resize_at, Some(30));
        assert_eq!(args.resize_width, 320);
        assert_eq!(args.resize_height, 0);
    }

    #[test]
    fn out_dir_and_config_are_paths() {
        let args = Args::parse_from(["icosa", "--out", "shots", "--config", "a/b.toml"]);
        assert_eq!(args.out, Some(PathBuf::from("shots")));
        assert_eq!(args.config, Some(PathBuf::from("a/b.toml")));
    }
}
