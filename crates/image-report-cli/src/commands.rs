use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "image-report", version)]
#[command(
    about = "Find retina/non-retina, unused, and missing images in an Xcode iOS project",
    long_about = None
)]
pub struct Cli {
    /// Target directory
    #[arg(short, long)]
    pub dir: PathBuf,
}
