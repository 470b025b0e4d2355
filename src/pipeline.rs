//! Core processing pipeline
//!
//! Runs one extraction pass per configured policy, writes the sorted lists,
//! zips them together with the input, checksums the zip and removes the
//! intermediate lists.

use crate::archive::{archive_files, ArchiveSummary};
use crate::cli::Args;
use crate::dedup::deduplicate;
use crate::digest::{write_digest, DigestSummary};
use crate::error::{Result, VocabError};
use crate::filter::{WordFilter, WordPolicy};
use crate::output::{write_list, ArtifactPaths};
use crate::progress::RunStats;
use crate::sort::sort_vocabulary;
use crate::tokenizer::extract_words;

use std::fs;
use std::path::{Path, PathBuf};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub min_length: usize,
    pub lowercase_policy: WordPolicy,
    /// Policy of the optional uppercase pass; `None` skips it
    pub caps_policy: Option<WordPolicy>,
    pub keep_intermediate: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            lowercase_policy: WordPolicy::Lowercase,
            caps_policy: None,
            keep_intermediate: false,
        }
    }
}

impl PipelineConfig {
    pub fn from_args(args: &Args, min_length: usize, include_caps: bool) -> Self {
        Self {
            min_length,
            lowercase_policy: WordPolicy::Lowercase,
            caps_policy: include_caps.then(|| args.caps_policy.into()),
            keep_intermediate: args.keep_intermediate,
        }
    }

    /// Policies to run, lowercase first
    pub fn policies(&self) -> Vec<WordPolicy> {
        std::iter::once(self.lowercase_policy)
            .chain(self.caps_policy)
            .collect()
    }
}

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub policy: WordPolicy,
    pub list_path: PathBuf,
    pub tokens: u64,
    pub accepted: u64,
    pub unique: u64,
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub passes: Vec<PassReport>,
    pub archive: ArchiveSummary,
    pub digest: DigestSummary,
    /// List files still on disk (only when intermediates are kept)
    pub kept_lists: Vec<PathBuf>,
    pub stats: RunStats,
}

/// Main pipeline
pub struct Pipeline {
    config: PipelineConfig,
    filters: Vec<WordFilter>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> anyhow::Result<Self> {
        // Each pass owns one list file
        if let Some(caps) = config.caps_policy {
            if caps.is_caps() == config.lowercase_policy.is_caps() {
                anyhow::bail!(
                    "{} and {} passes would write the same list file",
                    config.lowercase_policy, caps
                );
            }
        }

        let filters = config
            .policies()
            .into_iter()
            .map(|policy| WordFilter::new(config.min_length, policy))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { config, filters })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage for `input`, aborting on the first failure
    pub fn run(&self, input: &Path) -> Result<PipelineReport> {
        let mut stats = RunStats::new();
        stats.input_bytes = fs::metadata(input).map_err(|e| VocabError::read(input, e))?.len();

        let paths = ArtifactPaths::for_input(input);
        let mut passes = Vec::with_capacity(self.filters.len());

        for filter in &self.filters {
            let pass = self.run_pass(input, filter, &paths, &mut stats)?;
            passes.push(pass);
        }

        let mut sources = vec![paths.input.clone()];
        sources.extend(passes.iter().map(|p| p.list_path.clone()));

        log::debug!("archiving {} files into {:?}", sources.len(), paths.archive);
        let archive = archive_files(&sources, &paths.archive)?;
        stats.archive_bytes = archive.archive_bytes;

        let digest = write_digest(&archive.path)?;
        log::debug!("{} written to {:?}", crate::digest::ALGORITHM, digest.path);

        let lists: Vec<PathBuf> = passes.iter().map(|p| p.list_path.clone()).collect();
        let kept_lists = if self.config.keep_intermediate {
            lists
        } else {
            remove_artifacts(&lists)?;
            Vec::new()
        };

        stats.finish();

        Ok(PipelineReport {
            passes,
            archive,
            digest,
            kept_lists,
            stats,
        })
    }

    fn run_pass(
        &self,
        input: &Path,
        filter: &WordFilter,
        paths: &ArtifactPaths,
        stats: &mut RunStats,
    ) -> Result<PassReport> {
        let policy = filter.policy();
        log::debug!("extracting {} words (min length {})", policy, filter.min_length());

        let extraction = extract_words(input, filter)?;
        let extract_stats = extraction.stats;

        let set = deduplicate(extraction.words);
        let dedup_stats = set.stats();
        let sorted = sort_vocabulary(set);

        let list_path = paths.list_for(policy).to_path_buf();
        let written = write_list(&list_path, &sorted)?;
        log::debug!("{} unique {} words written to {:?}", written.lines_written, policy, list_path);

        stats.add_pass(
            extract_stats.lines,
            extract_stats.tokens,
            extract_stats.accepted,
            dedup_stats.duplicate_count,
            dedup_stats.unique_count,
        );

        Ok(PassReport {
            policy,
            list_path,
            tokens: extract_stats.tokens,
            accepted: extract_stats.accepted,
            unique: written.lines_written,
        })
    }
}

/// Delete intermediate artifacts; the input file is never passed here
pub fn remove_artifacts(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        fs::remove_file(path).map_err(|e| VocabError::filesystem(path, e))?;
    }
    Ok(())
}
