use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Path to the run config TOML
    pub config: PathBuf,

    /// Overrides the config's iteration count
    pub iterations: Option<usize>,

    /// Overrides the config's output folder
    pub output_dir: Option<PathBuf>,

    /// Feature names to compute (config or all features when empty)
    pub features: Vec<String>,

    /// Worker threads (rayon default when None)
    pub jobs: Option<usize>,

    /// Print text tables to stdout
    pub print_summary: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("footprint.toml"),
            iterations: None,
            output_dir: None,
            features: Vec::new(),
            jobs: None,
            print_summary: false,
        }
    }
}

/// What a compare run produced
#[derive(Debug, Clone)]
pub struct CompareSummary {
    /// Report files, one per feature
    pub reports: Vec<PathBuf>,

    /// Units attempted
    pub units: usize,

    /// Units that produced no table
    pub failed: usize,
}
