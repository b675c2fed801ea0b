// src/config/builder.rs

use super::{
    parsing::{collect_names, normalize_extensions, owned, parse_max_size},
    path_resolve::{absolutize, resolve_input_path},
    validation::validate_builder_options,
    Config, DiscoveryConfig, OutputConfig, ProcessingConfig,
};
use crate::cli::Cli;
use crate::constants;
use crate::errors::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// A builder for creating a `Config` instance.
///
/// Every setting is optional; unset settings fall back to the defaults in
/// `constants`. `build()` resolves paths and validates the combination.
///
/// # Examples
///
/// ```
/// use dirprint::ConfigBuilder;
/// # fn main() -> dirprint::errors::Result<()> {
/// let temp = tempfile::tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .input_path(temp.path().to_str().unwrap())
///     .extensions(vec!["rs".to_string()])
///     .max_size("1MiB")
///     .build()?;
///
/// assert_eq!(config.discovery.extensions, vec![".rs".to_string()]);
/// assert_eq!(config.processing.max_file_size, 1024 * 1024);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) input_path: Option<String>,
    pub(super) exclude_dirs: Option<Vec<String>>,
    pub(super) exclude_files: Option<Vec<String>>,
    pub(super) extensions: Option<Vec<String>>,
    pub(super) only: Option<Vec<String>>,
    pub(super) use_gitignore: Option<bool>,
    pub(super) max_size: Option<String>,
    pub(super) read_timeout_secs: Option<u64>,
    pub(super) batch_size: Option<usize>,
    pub(super) checkpoint_interval: Option<usize>,
    pub(super) output_dir: Option<String>,
    pub(super) output_file: Option<String>,
    pub(super) state_file: Option<String>,
    pub(super) assume_yes: Option<bool>,
    pub(super) fresh: Option<bool>,
    pub(super) dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with every setting unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.input_path),
            exclude_dirs: cli.exclude_dirs,
            exclude_files: cli.exclude_files,
            extensions: cli.extensions,
            only: cli.only,
            use_gitignore: Some(cli.gitignore),
            max_size: cli.max_size,
            read_timeout_secs: cli.read_timeout,
            batch_size: cli.batch_size,
            checkpoint_interval: cli.checkpoint_interval,
            output_dir: cli.output_dir,
            output_file: cli.output_file,
            state_file: cli.state_file,
            assume_yes: Some(cli.yes),
            fresh: Some(cli.fresh),
            dry_run: Some(cli.dry_run),
        }
    }

    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.exclude_dirs = Some(names);
        self
    }

    pub fn exclude_files(mut self, names: Vec<String>) -> Self {
        self.exclude_files = Some(names);
        self
    }

    pub fn extensions(mut self, suffixes: Vec<String>) -> Self {
        self.extensions = Some(suffixes);
        self
    }

    /// Switches discovery to the filename allowlist.
    pub fn only(mut self, names: Vec<String>) -> Self {
        self.only = Some(names);
        self
    }

    pub fn use_gitignore(mut self, enabled: bool) -> Self {
        self.use_gitignore = Some(enabled);
        self
    }

    /// Sets the size ceiling as a human-readable string (e.g. "512k").
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }

    pub fn read_timeout_secs(mut self, secs: u64) -> Self {
        self.read_timeout_secs = Some(secs);
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    pub fn checkpoint_interval(mut self, every: usize) -> Self {
        self.checkpoint_interval = Some(every);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = Some(name.into());
        self
    }

    pub fn state_file(mut self, path: impl Into<String>) -> Self {
        self.state_file = Some(path.into());
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = Some(yes);
        self
    }

    pub fn fresh(mut self, fresh: bool) -> Self {
        self.fresh = Some(fresh);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Validates the settings and produces the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for invalid values and an error if the root
    /// path cannot be resolved to an existing directory.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let input_path = self.input_path.unwrap_or_else(|| ".".to_string());
        let root = resolve_input_path(&input_path)?;

        let exclude_dirs = collect_names(
            self.exclude_dirs
                .unwrap_or_else(|| owned(constants::DEFAULT_EXCLUDED_DIRS)),
            "directory",
        )
        .map_err(config_error)?;
        let exclude_files = collect_names(
            self.exclude_files
                .unwrap_or_else(|| owned(constants::DEFAULT_EXCLUDED_FILES)),
            "file",
        )
        .map_err(config_error)?;
        let extensions = normalize_extensions(
            self.extensions
                .unwrap_or_else(|| owned(constants::DEFAULT_EXTENSIONS)),
        )
        .map_err(config_error)?;
        let only_names = self
            .only
            .map(|names| collect_names(names, "file"))
            .transpose()
            .map_err(config_error)?;

        let max_file_size = parse_max_size(
            self.max_size.as_deref(),
            constants::DEFAULT_MAX_FILE_SIZE,
        )
        .map_err(config_error)?;

        let output_dir = absolutize(&PathBuf::from(
            self.output_dir
                .unwrap_or_else(|| constants::DEFAULT_OUTPUT_DIR.to_string()),
        ))?;
        let output_path = output_dir.join(
            self.output_file
                .unwrap_or_else(|| constants::DEFAULT_OUTPUT_FILENAME.to_string()),
        );
        let state_path = match self.state_file {
            Some(path) => absolutize(&PathBuf::from(path))?,
            None => output_dir.join(constants::STATE_FILENAME),
        };
        if state_path == output_path {
            return Err(Error::Config(
                "The state file and the output file must be different paths".to_string(),
            ));
        }

        let config = Config {
            input_path,
            discovery: DiscoveryConfig {
                root,
                exclude_dirs,
                exclude_files,
                extensions,
                only_names,
                use_gitignore: self.use_gitignore.unwrap_or(false),
                skip_paths: vec![output_path.clone(), state_path.clone()],
            },
            processing: ProcessingConfig {
                max_file_size,
                read_timeout: Duration::from_secs(
                    self.read_timeout_secs
                        .unwrap_or(constants::DEFAULT_READ_TIMEOUT_SECS),
                ),
                batch_size: self.batch_size.unwrap_or(constants::DEFAULT_BATCH_SIZE),
                checkpoint_interval: self
                    .checkpoint_interval
                    .unwrap_or(constants::DEFAULT_CHECKPOINT_INTERVAL),
            },
            output: OutputConfig {
                output_dir,
                output_path,
                state_path,
            },
            assume_yes: self.assume_yes.unwrap_or(false),
            fresh: self.fresh.unwrap_or(false),
            dry_run: self.dry_run.unwrap_or(false),
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}

fn config_error(e: anyhow::Error) -> Error {
    Error::Config(format!("{:#}", e))
}
