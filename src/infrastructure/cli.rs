use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 16.0)]
    pub frame_rate: f64,

    /// Files to upload on startup; the app opens on the Upload panel
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["studyplatform"])?;
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 16.0);
        assert!(cli.files.is_empty());
        Ok(())
    }

    #[test]
    fn test_rates_and_files() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from([
            "studyplatform",
            "-t",
            "2",
            "--frame-rate",
            "30",
            "notes.pdf",
            "essay.docx",
        ])?;
        assert_eq!(cli.tick_rate, 2.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(
            cli.files,
            vec![PathBuf::from("notes.pdf"), PathBuf::from("essay.docx")]
        );
        Ok(())
    }
}
