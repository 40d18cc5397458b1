//! Model-spec resolution against the host registry.
//!
//! # Resolution Order
//!
//! 1. `provider/id` specs are looked up exactly (split at the first `/`)
//! 2. Bare ids matching a single registry entry resolve to it, credentials or not
//! 3. Bare ids matching several entries are narrowed to credentialed entries
//! 4. Remaining ties are broken by provider priority, then registry order
//! 5. Error if nothing (or nothing credentialed) remains

use super::Model;
use crate::config::default_provider_priority;
use crate::error::{ModelPinError, Result};
use crate::host::ModelRegistry;
use std::fmt;

/// How a model spec was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The spec named an exact `provider/id` pair.
    Exact,
    /// Only one provider registers the bare id.
    UniqueId,
    /// Several providers register the id; only one has credentials.
    OnlyCredentialed,
    /// Several credentialed providers; the named provider won on priority.
    ProviderPriority(String),
    /// Several credentialed providers, none in the priority list; registry order won.
    RegistryOrder,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::Exact => write!(f, "exact provider/id match"),
            ResolutionSource::UniqueId => write!(f, "only provider serving this id"),
            ResolutionSource::OnlyCredentialed => {
                write!(f, "only credentialed provider serving this id")
            }
            ResolutionSource::ProviderPriority(provider) => {
                write!(f, "provider priority ({})", provider)
            }
            ResolutionSource::RegistryOrder => write!(f, "first credentialed match"),
        }
    }
}

/// A model spec resolved to a concrete model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    /// The selected model.
    pub model: Model,
    /// Which rule selected it.
    pub source: ResolutionSource,
}

/// Resolves model specs using a provider priority list for tie-breaks.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    provider_priority: Vec<String>,
}

impl Default for ModelResolver {
    fn default() -> Self {
        Self::new(default_provider_priority())
    }
}

impl ModelResolver {
    pub fn new(provider_priority: Vec<String>) -> Self {
        Self { provider_priority }
    }

    pub fn provider_priority(&self) -> &[String] {
        &self.provider_priority
    }

    /// Resolve a model spec against `registry`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if a `provider/id` spec has an empty side
    /// - `NotFound` if no registry entry matches
    /// - `Ambiguous` if several entries share a bare id and none has credentials
    pub fn resolve<R>(&self, registry: &R, spec: &str) -> Result<ResolvedModel>
    where
        R: ModelRegistry + ?Sized,
    {
        if let Some((provider, id)) = spec.split_once('/') {
            if provider.is_empty() || id.is_empty() {
                return Err(ModelPinError::InvalidFormat {
                    spec: spec.to_string(),
                });
            }
            return registry
                .find(provider, id)
                .map(|model| ResolvedModel {
                    model,
                    source: ResolutionSource::Exact,
                })
                .ok_or_else(|| ModelPinError::NotFound {
                    spec: spec.to_string(),
                });
        }

        let matches: Vec<Model> = registry
            .all()
            .into_iter()
            .filter(|m| m.id == spec)
            .collect();

        match matches.as_slice() {
            [] => Err(ModelPinError::NotFound {
                spec: spec.to_string(),
            }),
            [only] => Ok(ResolvedModel {
                model: only.clone(),
                source: ResolutionSource::UniqueId,
            }),
            _ => self.pick_credentialed(registry, spec, &matches),
        }
    }

    /// Narrow several same-id matches down to one credentialed model.
    fn pick_credentialed<R>(
        &self,
        registry: &R,
        spec: &str,
        matches: &[Model],
    ) -> Result<ResolvedModel>
    where
        R: ModelRegistry + ?Sized,
    {
        let available = registry.available();
        let credentialed: Vec<&Model> = matches
            .iter()
            .filter(|m| available.iter().any(|a| a.same_as(m)))
            .collect();

        tracing::debug!(
            "model '{}' matches {} providers, {} credentialed",
            spec,
            matches.len(),
            credentialed.len()
        );

        match credentialed.as_slice() {
            [] => Err(ModelPinError::Ambiguous {
                spec: spec.to_string(),
                options: matches.iter().map(Model::key).collect(),
            }),
            [only] => Ok(ResolvedModel {
                model: (*only).clone(),
                source: ResolutionSource::OnlyCredentialed,
            }),
            [first, ..] => {
                for provider in &self.provider_priority {
                    if let Some(model) = credentialed.iter().find(|m| &m.provider == provider) {
                        return Ok(ResolvedModel {
                            model: (*model).clone(),
                            source: ResolutionSource::ProviderPriority(provider.clone()),
                        });
                    }
                }
                Ok(ResolvedModel {
                    model: (*first).clone(),
                    source: ResolutionSource::RegistryOrder,
                })
            }
        }
    }
}
