use std::fmt;
use std::str::FromStr;

use crate::field::MultiExpScalar;
use crate::group::MultiExpGroup;
use crate::utils::errors::MultiExpError;

use super::{multi_exp, multi_exp_with_mixed_addition};

pub const CHUNKS_ENV: &str = "MULTIEXP_CHUNKS";
pub const METHOD_ENV: &str = "MULTIEXP_METHOD";
pub const MIXED_ENV: &str = "MULTIEXP_MIXED";

/// Per-chunk evaluation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MultiExpMethod {
    /// One double-and-add per term.
    Naive,
    #[default]
    BosCoster,
}

impl FromStr for MultiExpMethod {
    type Err = MultiExpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(MultiExpMethod::Naive),
            "bos-coster" | "bos_coster" => Ok(MultiExpMethod::BosCoster),
            _ => Err(MultiExpError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for MultiExpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiExpMethod::Naive => write!(f, "naive"),
            MultiExpMethod::BosCoster => write!(f, "bos-coster"),
        }
    }
}

/// Settings for a chunked multi-exponentiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiExpConfig {
    /// Number of ranges evaluated in parallel. Defaults to the size of the
    /// rayon pool.
    pub chunks: usize,
    pub method: MultiExpMethod,
    /// Route through [`multi_exp_with_mixed_addition`]. Only worth it when the
    /// bases are in special form.
    pub mixed_addition: bool,
}

impl Default for MultiExpConfig {
    fn default() -> Self {
        Self {
            chunks: rayon::current_num_threads(),
            method: MultiExpMethod::default(),
            mixed_addition: false,
        }
    }
}

impl MultiExpConfig {
    pub fn with_chunks(mut self, chunks: usize) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn with_method(mut self, method: MultiExpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_mixed_addition(mut self, mixed_addition: bool) -> Self {
        self.mixed_addition = mixed_addition;
        self
    }

    pub fn use_multiexp(&self) -> bool {
        self.method == MultiExpMethod::BosCoster
    }

    pub fn validate(&self) -> Result<(), MultiExpError> {
        if self.chunks == 0 {
            return Err(MultiExpError::ZeroChunks);
        }
        Ok(())
    }

    /// [`MultiExpConfig::default`] overridden by `MULTIEXP_CHUNKS`,
    /// `MULTIEXP_METHOD` and `MULTIEXP_MIXED` where set.
    pub fn from_env() -> Result<Self, MultiExpError> {
        let mut config = Self::default();
        if let Some(value) = read_env(CHUNKS_ENV) {
            config.chunks = value
                .trim()
                .parse()
                .map_err(|_| MultiExpError::InvalidEnvValue {
                    var: CHUNKS_ENV,
                    value,
                })?;
        }
        if let Some(value) = read_env(METHOD_ENV) {
            config.method = value.parse()?;
        }
        if let Some(value) = read_env(MIXED_ENV) {
            config.mixed_addition = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => {
                    return Err(MultiExpError::InvalidEnvValue {
                        var: MIXED_ENV,
                        value,
                    })
                }
            };
        }
        config.validate()?;
        tracing::debug!(?config, "multi-exponentiation config from environment");
        Ok(config)
    }

    /// `Σ scalars[i] · bases[i]` under this configuration.
    pub fn run<G: MultiExpGroup, F: MultiExpScalar>(
        &self,
        bases: &[G],
        scalars: &[F],
    ) -> Result<G, MultiExpError> {
        self.validate()?;
        if bases.len() != scalars.len() {
            return Err(MultiExpError::LengthMismatch(bases.len(), scalars.len()));
        }
        Ok(if self.mixed_addition {
            multi_exp_with_mixed_addition(bases, scalars, self.chunks, self.use_multiexp())
        } else {
            multi_exp(bases, scalars, self.chunks, self.use_multiexp())
        })
    }
}

fn read_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}
