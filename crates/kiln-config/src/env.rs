//! Environment facts consumed by resolution.
//!
//! Host lookups live behind [`EnvironmentFacts`] so resolution stays a pure
//! function of its inputs. Real runs use [`HostEnvironment`]; tests substitute
//! [`StaticEnvironment`].

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Number of concurrent workers the build engine is advised to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parallelism(NonZeroUsize);

impl Parallelism {
    pub const SERIAL: Parallelism = Parallelism(NonZeroUsize::MIN);

    /// Wrap a detected worker count, falling back to one worker when it is
    /// missing or zero.
    pub fn from_detected(detected: Option<usize>) -> Self {
        match detected.and_then(NonZeroUsize::new) {
            Some(count) => Parallelism(count),
            None => {
                tracing::warn!("could not determine host parallelism, using 1 worker");
                Parallelism::SERIAL
            }
        }
    }

    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Parallelism)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Parallelism::SERIAL
    }
}

pub trait EnvironmentFacts {
    /// Detected worker count, `None` when the host cannot tell.
    fn available_parallelism(&self) -> Option<usize>;

    /// Project root that relative paths resolve against.
    fn working_dir(&self) -> &Path;

    fn parallelism(&self) -> Parallelism {
        Parallelism::from_detected(self.available_parallelism())
    }
}

/// Facts read from the running host, captured once at construction.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    parallelism: Option<usize>,
    cwd: PathBuf,
}

impl HostEnvironment {
    pub fn detect() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::detect_in(cwd))
    }

    pub fn detect_in(root: impl Into<PathBuf>) -> Self {
        let parallelism = std::thread::available_parallelism()
            .ok()
            .map(NonZeroUsize::get);
        let cwd = root.into();
        tracing::debug!(?parallelism, cwd = %cwd.display(), "detected host environment");
        Self { parallelism, cwd }
    }
}

impl EnvironmentFacts for HostEnvironment {
    fn available_parallelism(&self) -> Option<usize> {
        self.parallelism
    }

    fn working_dir(&self) -> &Path {
        &self.cwd
    }
}

/// Fixed facts, for tests and for callers that already know the answer.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    pub parallelism: Option<usize>,
    pub cwd: PathBuf,
}

impl StaticEnvironment {
    pub fn new(parallelism: Option<usize>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            parallelism,
            cwd: cwd.into(),
        }
    }
}

impl EnvironmentFacts for StaticEnvironment {
    fn available_parallelism(&self) -> Option<usize> {
        self.parallelism
    }

    fn working_dir(&self) -> &Path {
        &self.cwd
    }
}
