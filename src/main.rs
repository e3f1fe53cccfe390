use clap::Parser;
use sqrl::config::{DEFAULT_SIZE, SquareConfig, SquareMode};
use sqrl::{output, process};
use std::path::Path;
use std::process::ExitCode;

fn version_string() -> &'static str {
    if env!("SQRL_RELEASE_TAG") == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SQRL_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sqrl")]
#[command(about = "Expand or crop images into a square")]
#[command(long_about = "\
Expand or crop images into a square

Without --file, every .jpg, .jpeg, .png and .gif under the current directory
is processed (recursively). Results are written as JPEG into the current
directory:

  input.jpg  →  sqrl-crop-input.jpg     (default: center crop)
  input.jpg  →  sqrl-expand-input.jpg   (--expand: pad with white)

Files whose name starts with sqrl- are never picked up again.
Set RUST_LOG=debug for per-file detail.")]
#[command(version = version_string())]
struct Cli {
    /// Pixel size of square
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: u32,

    /// Specify a filename to prevent resizing the whole folder
    #[arg(short, long, default_value = "")]
    file: String,

    /// Square by adding whitespace
    #[arg(short, long)]
    expand: bool,
}

/// Map parsed flags onto a config rooted at `cwd`. An empty `--file` keeps
/// folder mode.
fn build_config(cli: Cli, cwd: &Path) -> SquareConfig {
    let mode = if cli.expand {
        SquareMode::Expand
    } else {
        SquareMode::Crop
    };
    SquareConfig::new(cwd)
        .with_size(cli.size)
        .with_mode(mode)
        .with_file(cli.file)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let config = build_config(cli, &cwd);

    let report = process::process(&config)?;
    output::print_report(&report, &cwd);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> SquareConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        build_config(cli, Path::new("/work"))
    }

    #[test]
    fn defaults_crop_whole_folder_at_1000() {
        let config = parse(&["sqrl"]);
        assert_eq!(config.size, 1000);
        assert_eq!(config.mode, SquareMode::Crop);
        assert_eq!(config.file, None);
    }

    #[test]
    fn empty_file_flag_means_folder_mode() {
        assert_eq!(parse(&["sqrl", "-f", ""]).file, None);
        assert_eq!(parse(&["sqrl", "--file", ""]).file, None);
    }

    #[test]
    fn file_flag_selects_single_file() {
        let config = parse(&["sqrl", "--file", "photo.png"]);
        assert_eq!(config.resolved_file(), Some(PathBuf::from("/work/photo.png")));
    }

    #[test]
    fn short_flags_set_size_and_expand() {
        let config = parse(&["sqrl", "-s", "400", "-e"]);
        assert_eq!(config.size, 400);
        assert_eq!(config.mode, SquareMode::Expand);
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert!(Cli::try_parse_from(["sqrl", "--size", "big"]).is_err());
    }
}
