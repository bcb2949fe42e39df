// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag is optional. With no arguments the program uses
// the fixed defaults: the two addata-*-v2.json files in the
// current directory, sizes 5,10,25,50, seed 42, and outputs
// written next to the inputs.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::Args;

use crate::application::sample_use_case::{
    SampleConfig, DEFAULT_HARMFUL_FILE, DEFAULT_SAFE_FILE, DEFAULT_SAMPLE_SIZES, DEFAULT_SEED,
};

/// All arguments for a sampling run.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Directory containing the safe and harmful input files
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Directory to write sampled_data_{n}.json files into
    /// (defaults to the base directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// File name of the safe dataset, relative to --base-dir
    #[arg(long, default_value = DEFAULT_SAFE_FILE)]
    pub safe_file: String,

    /// File name of the harmful dataset, relative to --base-dir
    #[arg(long, default_value = DEFAULT_HARMFUL_FILE)]
    pub harmful_file: String,

    /// Records to draw from each dataset, processed in the given order.
    /// Changing the order changes every output file.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SAMPLE_SIZES.to_vec())]
    pub sizes: Vec<usize>,

    /// Seed for the random generator shared by every draw and shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Convert CLI SampleArgs into the application-layer SampleConfig.
/// The application layer never sees clap types.
impl From<SampleArgs> for SampleConfig {
    fn from(a: SampleArgs) -> Self {
        let output_dir = a.output_dir.unwrap_or_else(|| a.base_dir.clone());
        SampleConfig {
            base_dir:     a.base_dir,
            output_dir,
            safe_file:    a.safe_file,
            harmful_file: a.harmful_file,
            sample_sizes: a.sizes,
            seed:         a.seed,
        }
    }
}
