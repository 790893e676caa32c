use crate::analysis::catalog::AssetCatalog;
use crate::analysis::classify::{self, Classification, References};
use crate::analysis::usage::{self, UnusedAssets};
use crate::config::AppConfig;
use crate::error::Error;
use crate::extract::ReferenceExtractor;
use crate::progress::ProgressReporter;
use crate::scanner;
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct AuditEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct AuditResult {
    pub catalog: AssetCatalog,
    pub references: References,
    pub classification: Classification,
    pub unused: UnusedAssets,
    pub images_scanned: usize,
    pub sources_scanned: usize,
    pub scan_duration: Duration,
    pub analysis_duration: Duration,
    pub finished_at: DateTime<Local>,
}

impl AuditEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the full audit over `dir`:
    /// 1. Recursive image scan and top-level source scan
    /// 2. Reference extraction from each source file
    /// 3. Classification against the asset catalog
    /// 4. Unused asset detection and sizing
    pub fn audit(&self, dir: &Path, reporter: &dyn ProgressReporter) -> Result<AuditResult, Error> {
        // Phase 1: Scan
        reporter.on_scan_start();
        let scan_start = Instant::now();
        let images = scanner::scan_images(
            dir,
            &self.config.image_extension,
            &self.config.ignore_patterns,
        )?;
        let sources = scanner::scan_sources(dir, &self.config.source_extensions)?;
        let scan_duration = scan_start.elapsed();
        reporter.on_scan_complete(images.len(), sources.len(), scan_duration.as_secs_f64());
        debug!(
            "Scan completed in {:.2}s: {} images, {} source files",
            scan_duration.as_secs_f64(),
            images.len(),
            sources.len(),
        );

        let analysis_start = Instant::now();
        let catalog = AssetCatalog::build(
            images.iter().map(|image| image.name.as_str()),
            &self.config.high_density_suffix,
        );
        debug!(
            "Catalog: {} base only, {} high-density only, {} both",
            catalog.base_only().len(),
            catalog.high_density_only().len(),
            catalog.both().len(),
        );

        // Phase 2: Extract
        let extractor = ReferenceExtractor::new(&self.config.image_extension)?;
        let mut references = References::new();
        let mut reference_count = 0usize;
        for (index, source) in sources.iter().enumerate() {
            let file_name = source
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            reporter.on_extract_progress(index + 1, sources.len(), &file_name);
            let tokens = extractor.extract_from_file(source);
            reference_count += tokens.len();
            references.insert(file_name, tokens);
        }
        reporter.on_extract_complete(reference_count, analysis_start.elapsed().as_secs_f64());

        // Phase 3: Classify
        let classification = classify::classify(&catalog, &references);

        // Phase 4: Unused
        let unused_names = usage::find_unused(&catalog, &references);
        let unused = UnusedAssets::measure(unused_names, &images)?;
        let analysis_duration = analysis_start.elapsed();

        info!(
            "Audited {} images against {} references in {:.2}s",
            images.len(),
            reference_count,
            analysis_duration.as_secs_f64(),
        );

        Ok(AuditResult {
            catalog,
            references,
            classification,
            unused,
            images_scanned: images.len(),
            sources_scanned: sources.len(),
            scan_duration,
            analysis_duration,
            finished_at: Local::now(),
        })
    }
}
