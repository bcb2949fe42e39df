// ============================================================
// Layer 2 — SampleUseCase
// ============================================================
// Orchestrates the full subsampling run in order:
//
//   Step 1: Check both input files exist   (fatal if not)
//   Step 2: Load safe + harmful datasets   (Layer 4 - data)
//   Step 3: Seed the generator once        (here)
//   Step 4: For each sample size n, in order:
//             - draw n safe records        (Layer 4 - data)
//             - draw n harmful records     (Layer 4 - data)
//             - combine + shuffle          (Layer 4 - data)
//             - write sampled_data_n.json  (Layer 6 - infra)
//   Step 5: List output files now on disk
//
// The generator is seeded once and then drawn from for every
// size in turn. Processing the sizes in a different order
// therefore changes every output file, not just the moved one.

use std::{fs, path::PathBuf};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::data::{
    combiner::combine,
    dataset::Dataset,
    loader::JsonArrayLoader,
    sampler::{sample, Shortfall},
};
use crate::domain::{error::SubsampleError, label::Label, traits::RecordSource};
use crate::infra::writer::{SampleWriter, WriteSummary};

pub const DEFAULT_SAFE_FILE:    &str         = "addata-safe-v2.json";
pub const DEFAULT_HARMFUL_FILE: &str         = "addata-harmful-v2.json";
pub const DEFAULT_SAMPLE_SIZES: [usize; 4]   = [5, 10, 25, 50];
pub const DEFAULT_SEED:         u64          = 42;

// ─── Sampling Configuration ──────────────────────────────────────────────────
// Everything a run needs. The defaults reproduce the fixed
// behaviour: inputs in the current directory, outputs next
// to them, sizes 5/10/25/50, seed 42.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    /// Directory holding the two input files
    pub base_dir:     PathBuf,
    /// Directory receiving sampled_data_{n}.json
    pub output_dir:   PathBuf,
    pub safe_file:    String,
    pub harmful_file: String,
    /// Processed in this order; the order is part of reproducibility
    pub sample_sizes: Vec<usize>,
    pub seed:         u64,
}

impl SampleConfig {
    pub fn safe_path(&self) -> PathBuf {
        self.base_dir.join(&self.safe_file)
    }

    pub fn harmful_path(&self) -> PathBuf {
        self.base_dir.join(&self.harmful_file)
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            base_dir:     PathBuf::from("."),
            output_dir:   PathBuf::from("."),
            safe_file:    DEFAULT_SAFE_FILE.to_string(),
            harmful_file: DEFAULT_HARMFUL_FILE.to_string(),
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            seed:         DEFAULT_SEED,
        }
    }
}

// ─── Run Reports ─────────────────────────────────────────────────────────────

/// Outcome of one sample size.
#[derive(Debug)]
pub struct SizeReport {
    pub sample_size:   usize,
    pub path:          PathBuf,
    /// Records actually drawn from each dataset
    pub safe_drawn:    usize,
    pub harmful_drawn: usize,
    /// Datasets that were smaller than `sample_size`
    pub shortfalls:    Vec<Shortfall>,
    /// Write result; an Err here did not stop the run
    pub outcome:       Result<WriteSummary, SubsampleError>,
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct RunReport {
    pub safe_loaded:      usize,
    pub harmful_loaded:   usize,
    /// One entry per configured size, in processing order
    pub sizes:            Vec<SizeReport>,
    /// Output files present on disk after the run
    pub existing_outputs: Vec<PathBuf>,
}

impl RunReport {
    /// Number of sizes whose file could not be written
    pub fn failed_writes(&self) -> usize {
        self.sizes.iter().filter(|s| s.outcome.is_err()).count()
    }
}

// ─── SampleUseCase ───────────────────────────────────────────────────────────
pub struct SampleUseCase {
    config: SampleConfig,
}

impl SampleUseCase {
    /// Create a new SampleUseCase with the given configuration
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Execute the full run against the configured files.
    pub fn execute(&self) -> Result<RunReport, SubsampleError> {
        let cfg = &self.config;
        tracing::debug!("Sampling config: {:?}", cfg);

        // ── Step 1: Both inputs must exist before anything is written ─────────
        for (label, path) in [(Label::Safe, cfg.safe_path()), (Label::Harmful, cfg.harmful_path())] {
            if !path.exists() {
                return Err(SubsampleError::MissingInputFile { label, path });
            }
        }

        let safe_source    = JsonArrayLoader::new(cfg.safe_path());
        let harmful_source = JsonArrayLoader::new(cfg.harmful_path());

        // ── Step 3: Seed once for the whole run ───────────────────────────────
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        self.run(&safe_source, &harmful_source, &mut rng)
    }

    /// Run steps 2, 4 and 5 with caller-supplied sources and generator.
    pub fn run<S, H, R>(&self, safe: &S, harmful: &H, rng: &mut R) -> Result<RunReport, SubsampleError>
    where
        S: RecordSource + ?Sized,
        H: RecordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let cfg = &self.config;

        // ── Step 2: Load both datasets once ───────────────────────────────────
        // Either failure aborts the run; no partial data is sampled.
        let safe    = Dataset::new(Label::Safe,    safe.load_all()?);
        let harmful = Dataset::new(Label::Harmful, harmful.load_all()?);
        tracing::info!(
            "Loaded {} safe and {} harmful records",
            safe.len(),
            harmful.len()
        );

        if let Err(e) = fs::create_dir_all(&cfg.output_dir) {
            // Each write below will then fail and be reported on its own
            tracing::warn!(
                "Cannot create output directory '{}': {}",
                cfg.output_dir.display(),
                e
            );
        }
        let writer = SampleWriter::new(&cfg.output_dir);

        // ── Step 4: One output file per size, in configured order ─────────────
        let sizes: Vec<SizeReport> = cfg
            .sample_sizes
            .iter()
            .map(|&size| process_size(size, &safe, &harmful, &writer, &mut *rng))
            .collect();

        // ── Step 5: Which outputs exist now ───────────────────────────────────
        let existing_outputs = existing_outputs(&writer, &cfg.sample_sizes);
        tracing::info!("{} output files on disk", existing_outputs.len());

        Ok(RunReport {
            safe_loaded:    safe.len(),
            harmful_loaded: harmful.len(),
            sizes,
            existing_outputs,
        })
    }
}

/// Draw, combine, and write the sample for one size.
fn process_size<R>(
    size:    usize,
    safe:    &Dataset,
    harmful: &Dataset,
    writer:  &SampleWriter,
    rng:     &mut R,
) -> SizeReport
where
    R: Rng + ?Sized,
{
    tracing::info!("Processing sample size {}", size);

    // Safe first, then harmful: the draw order is fixed
    let safe_draw    = sample(safe, size, rng);
    let harmful_draw = sample(harmful, size, rng);

    let safe_drawn    = safe_draw.len();
    let harmful_drawn = harmful_draw.len();
    let shortfalls: Vec<Shortfall> = [safe_draw.shortfall, harmful_draw.shortfall]
        .into_iter()
        .flatten()
        .collect();

    let combined = combine(safe_draw.records, harmful_draw.records, rng);
    let outcome  = writer.write(size, &combined);

    match &outcome {
        Ok(summary) => tracing::info!(
            "Saved '{}': {} items ({} safe, {} harmful)",
            summary.path.display(),
            summary.written,
            summary.labels.safe,
            summary.labels.harmful,
        ),
        Err(e) => tracing::warn!("{}: {}", e, source_text(e)),
    }

    SizeReport {
        sample_size: size,
        path: writer.output_path(size),
        safe_drawn,
        harmful_drawn,
        shortfalls,
        outcome,
    }
}

/// Output files for `sizes` that exist as regular files, in size order.
fn existing_outputs(writer: &SampleWriter, sizes: &[usize]) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = Vec::new();
    for &size in sizes {
        let path = writer.output_path(size);
        if path.is_file() && !found.contains(&path) {
            found.push(path);
        }
    }
    found
}

/// The underlying cause of an error, or an empty string
pub fn source_text(e: &SubsampleError) -> String {
    std::error::Error::source(e)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::path::Path;
    use tempfile::TempDir;

    fn records(label: Label, n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                serde_json::from_value(json!({
                    "id":          format!("{label}-{i}"),
                    "instruction": "判断这条广告",
                    "output":      format!("analysis {i}\nintent: {label}"),
                }))
                .unwrap()
            })
            .collect()
    }

    fn write_input(dir: &Path, name: &str, records: &[Record]) {
        fs::write(dir.join(name), serde_json::to_string(records).unwrap()).unwrap();
    }

    fn setup(safe_n: usize, harmful_n: usize) -> (TempDir, SampleConfig) {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), DEFAULT_SAFE_FILE, &records(Label::Safe, safe_n));
        write_input(dir.path(), DEFAULT_HARMFUL_FILE, &records(Label::Harmful, harmful_n));

        let config = SampleConfig {
            base_dir:   dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
            ..SampleConfig::default()
        };
        (dir, config)
    }

    fn read_array(path: &Path) -> Vec<Value> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn ids_with_prefix(items: &[Value], prefix: &str) -> Vec<String> {
        items
            .iter()
            .filter_map(|v| v["id"].as_str())
            .filter(|id| id.starts_with(prefix))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_end_to_end_default_sizes() {
        let (_dir, config) = setup(100, 100);
        let report = SampleUseCase::new(config.clone()).execute().unwrap();

        assert_eq!(report.safe_loaded, 100);
        assert_eq!(report.harmful_loaded, 100);
        assert_eq!(report.sizes.len(), 4);
        assert_eq!(report.failed_writes(), 0);

        for (size, expected) in [(5, 10), (10, 20), (25, 50), (50, 100)] {
            let path  = config.output_dir.join(format!("sampled_data_{size}.json"));
            let items = read_array(&path);
            assert_eq!(items.len(), expected);

            // Each per-dataset draw has no duplicates and only known ids
            for (prefix, n) in [("safe-", 100), ("harmful-", 100)] {
                let ids    = ids_with_prefix(&items, prefix);
                let unique = ids.iter().collect::<HashSet<_>>();
                assert_eq!(ids.len(), size);
                assert_eq!(unique.len(), size);
                assert!(ids.iter().all(|id| {
                    id[prefix.len()..].parse::<usize>().map(|i| i < n).unwrap_or(false)
                }));
            }
        }

        let expected_files: Vec<PathBuf> = DEFAULT_SAMPLE_SIZES
            .iter()
            .map(|n| config.output_dir.join(format!("sampled_data_{n}.json")))
            .collect();
        assert_eq!(report.existing_outputs, expected_files);
    }

    #[test]
    fn test_label_accounting_matches_markers() {
        let (_dir, config) = setup(100, 100);
        let report = SampleUseCase::new(config.clone()).execute().unwrap();

        let first   = &report.sizes[0];
        let summary = first.outcome.as_ref().unwrap();
        let items   = read_array(&first.path);

        let with_marker = |marker: &str| {
            items
                .iter()
                .filter(|v| v["output"].as_str().unwrap_or("").contains(marker))
                .count()
        };
        assert_eq!(summary.labels.safe, with_marker("intent: safe"));
        assert_eq!(summary.labels.harmful, with_marker("intent: harmful"));
        assert!(summary.labels.safe + summary.labels.harmful <= summary.written);
        assert_eq!(summary.written, 10);
    }

    #[test]
    fn test_short_safe_dataset_takes_all() {
        let (_dir, config) = setup(3, 100);
        let report = SampleUseCase::new(config).execute().unwrap();

        let first = &report.sizes[0];
        assert_eq!(first.sample_size, 5);
        assert_eq!(first.safe_drawn, 3);
        assert_eq!(first.harmful_drawn, 5);
        assert_eq!(
            first.shortfalls,
            vec![Shortfall { label: Label::Safe, available: 3, requested: 5 }]
        );

        let items    = read_array(&first.path);
        let mut safe = ids_with_prefix(&items, "safe-");
        safe.sort();
        assert_eq!(items.len(), 8);
        assert_eq!(safe, vec!["safe-0", "safe-1", "safe-2"]);
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let (dir, config) = setup(60, 80);

        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");
        for out in [&out_a, &out_b] {
            let config = SampleConfig { output_dir: out.clone(), ..config.clone() };
            SampleUseCase::new(config).execute().unwrap();
        }

        for n in DEFAULT_SAMPLE_SIZES {
            let name = format!("sampled_data_{n}.json");
            assert_eq!(fs::read(out_a.join(&name)).unwrap(), fs::read(out_b.join(&name)).unwrap());
        }
    }

    #[test]
    fn test_different_seed_changes_output() {
        let (dir, config) = setup(100, 100);
        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");

        SampleUseCase::new(SampleConfig { output_dir: out_a.clone(), ..config.clone() })
            .execute()
            .unwrap();
        SampleUseCase::new(SampleConfig { output_dir: out_b.clone(), seed: 7, ..config })
            .execute()
            .unwrap();

        let name = "sampled_data_50.json";
        assert_ne!(fs::read(out_a.join(name)).unwrap(), fs::read(out_b.join(name)).unwrap());
    }

    #[test]
    fn test_missing_input_aborts_before_writing() {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), DEFAULT_HARMFUL_FILE, &records(Label::Harmful, 10));
        let config = SampleConfig {
            base_dir:   dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
            ..SampleConfig::default()
        };

        let err = SampleUseCase::new(config).execute().unwrap_err();
        assert!(matches!(err, SubsampleError::MissingInputFile { label: Label::Safe, .. }));
        assert!(!dir.path().join("sampled_data_5.json").exists());
    }

    #[test]
    fn test_invalid_input_aborts() {
        let (dir, config) = setup(10, 10);
        fs::write(dir.path().join(DEFAULT_HARMFUL_FILE), "not json").unwrap();

        let err = SampleUseCase::new(config).execute().unwrap_err();
        assert!(matches!(err, SubsampleError::Load { .. }));
        assert!(!dir.path().join("sampled_data_5.json").exists());
    }

    #[test]
    fn test_write_failure_does_not_stop_later_sizes() {
        let (dir, config) = setup(100, 100);
        // A directory where the first output file should go
        fs::create_dir(dir.path().join("sampled_data_5.json")).unwrap();

        let report = SampleUseCase::new(config).execute().unwrap();

        assert!(matches!(report.sizes[0].outcome, Err(SubsampleError::Write { .. })));
        assert!(report.sizes[1..].iter().all(|s| s.outcome.is_ok()));
        assert_eq!(report.failed_writes(), 1);
        assert_eq!(report.existing_outputs.len(), 3);
    }

    #[test]
    fn test_uncreatable_output_dir_fails_each_write() {
        let (dir, config) = setup(100, 100);
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "regular file").unwrap();
        let config = SampleConfig { output_dir: blocker.join("out"), ..config };

        let report = SampleUseCase::new(config).execute().unwrap();

        assert_eq!(report.sizes.len(), DEFAULT_SAMPLE_SIZES.len());
        assert!(report
            .sizes
            .iter()
            .all(|s| matches!(s.outcome, Err(SubsampleError::Write { .. }))));
        assert_eq!(report.failed_writes(), DEFAULT_SAMPLE_SIZES.len());
        assert!(report.existing_outputs.is_empty());
    }

    #[test]
    fn test_injected_sources_and_rng() {
        let dir    = TempDir::new().unwrap();
        let config = SampleConfig {
            output_dir:   dir.path().to_path_buf(),
            sample_sizes: vec![10],
            ..SampleConfig::default()
        };
        let safe    = records(Label::Safe, 10);
        let harmful = records(Label::Harmful, 10);

        let use_case = SampleUseCase::new(config);
        let report   = use_case
            .run(&safe, &harmful, &mut StdRng::seed_from_u64(1))
            .unwrap();

        // Full draws: every record appears exactly once
        let items  = read_array(&report.sizes[0].path);
        let mut ids: Vec<_> = items.iter().map(|v| v["id"].as_str().unwrap().to_string()).collect();
        ids.sort();
        let mut expected: Vec<String> = (0..10)
            .flat_map(|i| [format!("safe-{i}"), format!("harmful-{i}")])
            .collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_output_preserves_record_content() {
        let (_dir, config) = setup(5, 5);
        let report = SampleUseCase::new(config).execute().unwrap();

        let text = fs::read_to_string(&report.sizes[0].path).unwrap();
        assert!(text.contains("判断这条广告"));
        assert!(text.starts_with("[\n  {\n    \"id\": "));
    }
}
