use clap::{Parser, Subcommand};
use imgconv_common::paths::normalize_extension;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgconv")]
#[command(author, version, about = "Recursively convert images between JPEG and PNG")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every matching image under a directory
    Convert {
        /// Directory to scan recursively
        #[arg(required = true)]
        dir: PathBuf,

        /// Extension of the files to convert
        #[arg(short, long, default_value = ".jpg", value_parser = parse_extension)]
        from: String,

        /// Extension of the files to write
        #[arg(short, long, default_value = ".png", value_parser = parse_extension)]
        to: String,

        /// List matching files without converting them
        #[arg(long)]
        dry_run: bool,

        /// Print the conversion summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the content type of a file from its leading bytes
    Sniff {
        /// File to inspect
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn parse_extension(value: &str) -> Result<String, String> {
    Ok(normalize_extension(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["imgconv", "convert", "imgs"]).unwrap();
        match cli.command {
            Commands::Convert {
                dir,
                from,
                to,
                dry_run,
                json,
            } => {
                assert_eq!(dir, PathBuf::from("imgs"));
                assert_eq!(from, ".jpg");
                assert_eq!(to, ".png");
                assert!(!dry_run);
                assert!(!json);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_extension_normalization() {
        let cli =
            Cli::try_parse_from(["imgconv", "convert", "imgs", "--from", "png", "--to", "jpg"])
                .unwrap();
        match cli.command {
            Commands::Convert { from, to, .. } => {
                assert_eq!(from, ".png");
                assert_eq!(to, ".jpg");
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_requires_dir() {
        assert!(Cli::try_parse_from(["imgconv", "convert"]).is_err());
    }
}
