use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Interactive calculator for single binary equations
pub struct Options {
    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File computed equations are appended to (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Emit debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let options = Options::try_parse_from(["calc_cli"]).unwrap();
        assert!(options.config.is_none());
        assert!(options.log_file.is_none());
        assert!(!options.verbose);
    }

    #[test]
    fn test_all_flags() {
        let options = Options::try_parse_from([
            "calc_cli",
            "--config",
            "settings.json",
            "--log-file",
            "out.txt",
            "-v",
        ])
        .unwrap();
        assert_eq!(options.config, Some(PathBuf::from("settings.json")));
        assert_eq!(options.log_file, Some(PathBuf::from("out.txt")));
        assert!(options.verbose);
    }
}
