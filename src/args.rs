use clap::Parser;
use std::path::PathBuf;

/// treenav: step through a folder tree in file-explorer order
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder to browse (default: current)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File sort order: alphabetical, alphabeticalReverse, byModifiedTime,
    /// byModifiedTimeReverse, byCreatedTime, byCreatedTimeReverse
    #[arg(short, long, env = "TREENAV_SORT", default_value = "alphabetical")]
    pub sort: String,

    /// Extra file extension to treat as navigable (repeatable)
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Show hidden files and folders
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Follow symbolic links and Junction points (Caution: can cause loops)
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (overridden by TREENAV_LOG)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["treenav"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.log_level, "info");
        assert!(args.extensions.is_empty());
    }

    #[test]
    fn sort_key_is_not_validated() {
        let args = Args::try_parse_from(["treenav", "vault", "--sort", "bySize", "-e", "csv", "-e", "txt"]).unwrap();
        assert_eq!(args.sort, "bySize");
        assert_eq!(args.extensions, ["csv", "txt"]);
        assert_eq!(args.path, PathBuf::from("vault"));
    }
}
