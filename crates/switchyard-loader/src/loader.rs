// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load sequence: registry, manager, selection, integration.

use switchyard_config::SwitchyardConfig;
use switchyard_core::{ComponentConfig, SwitchyardError};
use switchyard_integration::IntegrationManager;
use switchyard_registry::ComponentRegistry;
use tracing::{error, info};

/// Owns the discovery registry and the integration manager and runs the
/// load sequence against both.
#[derive(Debug, Default)]
pub struct DynamicLoader {
    registry: ComponentRegistry,
    manager: IntegrationManager,
}

impl DynamicLoader {
    pub fn new(registry: ComponentRegistry, manager: IntegrationManager) -> Self {
        Self { registry, manager }
    }

    /// Build the registry and evaluator chain described by `config`.
    ///
    /// Configured `[[components]]` are not loaded here; see [`Self::load_all`].
    pub fn from_config(config: &SwitchyardConfig) -> Self {
        let registry =
            ComponentRegistry::new().with_required_fields(config.registry.required_fields.clone());
        let manager = IntegrationManager::from_config(&config.evaluators);
        Self::new(registry, manager)
    }

    /// Load one component bundle and return the name of the integrated component.
    ///
    /// The integrated component is the best match for the bundle's type and
    /// version among everything loaded so far, which is not necessarily the
    /// bundle itself. If the registry rejects the descriptor the manager is
    /// never touched. Every failure is reported as
    /// [`SwitchyardError::ComponentLoading`] with the cause as its source.
    pub fn load_component(&mut self, bundle: &ComponentConfig) -> Result<String, SwitchyardError> {
        self.try_load(bundle).map_err(|cause| {
            error!(
                component = bundle.name.as_str(),
                error = %cause,
                "component loading failed"
            );
            SwitchyardError::ComponentLoading {
                name: bundle.name.clone(),
                source: Some(Box::new(cause)),
            }
        })
    }

    /// Load every bundle independently; one failure does not stop the rest.
    pub fn load_all(
        &mut self,
        bundles: &[ComponentConfig],
    ) -> Vec<Result<String, SwitchyardError>> {
        bundles
            .iter()
            .map(|bundle| self.load_component(bundle))
            .collect()
    }

    fn try_load(&mut self, bundle: &ComponentConfig) -> Result<String, SwitchyardError> {
        if !self
            .registry
            .register(bundle.name.clone(), bundle.description.clone())
        {
            return Err(SwitchyardError::Validation {
                name: bundle.name.clone(),
                reason: "component registration failed".to_string(),
            });
        }

        // The registry has validated the descriptor; the manager takes it as is.
        self.manager
            .register_component(bundle.name.clone(), bundle.description.clone());

        let criteria = bundle.criteria();
        let best = self.manager.find_best_component(&criteria).ok_or_else(|| {
            SwitchyardError::Internal(format!(
                "no component matches {} {}",
                bundle.component_type, bundle.version
            ))
        })?;

        self.manager.integrate_component(&best)?;
        info!(
            component = bundle.name.as_str(),
            integrated = best.as_str(),
            "component loaded"
        );
        Ok(best)
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn manager(&self) -> &IntegrationManager {
        &self.manager
    }

    /// Mutable access to the manager, e.g. to add custom evaluators.
    pub fn manager_mut(&mut self) -> &mut IntegrationManager {
        &mut self.manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use switchyard_core::ComponentDescriptor;
    use switchyard_integration::{TypeMatchEvaluator, VersionEvaluator};
    use switchyard_test_utils::bundle;
    use tracing_test::traced_test;

    fn loader() -> DynamicLoader {
        let mut manager = IntegrationManager::new();
        manager.add_evaluator(Box::new(TypeMatchEvaluator));
        manager.add_evaluator(Box::new(VersionEvaluator));
        DynamicLoader::new(ComponentRegistry::new(), manager)
    }

    #[test]
    fn load_registers_and_integrates() {
        let mut loader = loader();
        let name = loader.load_component(&bundle("ocr", "vision", "1.0.0")).unwrap();

        assert_eq!(name, "ocr");
        assert!(loader.registry().get("ocr").is_some());
        assert!(loader.manager().is_integrated("ocr"));
    }

    #[test]
    fn registry_copy_is_not_marked_integrated() {
        let mut loader = loader();
        loader.load_component(&bundle("ocr", "vision", "1.0.0")).unwrap();
        assert!(!loader.registry().get("ocr").unwrap().is_integrated());
    }

    #[traced_test]
    #[test]
    fn invalid_descriptor_never_reaches_manager() {
        let mut loader = loader();
        let mut broken = bundle("ocr", "vision", "1.0.0");
        broken.description = ComponentDescriptor::new();

        let err = loader.load_component(&broken).unwrap_err();
        assert!(matches!(
            err,
            SwitchyardError::ComponentLoading { ref name, .. } if name == "ocr"
        ));
        let source = err.source().unwrap().to_string();
        assert!(source.contains("registration failed"), "got {source}");

        assert!(loader.registry().is_empty());
        assert_eq!(loader.manager().component_count(), 0);
        assert!(logs_contain("component loading failed"));
    }

    #[test]
    fn load_returns_best_match_not_the_bundle() {
        let mut loader = loader();
        loader.load_component(&bundle("ocr-v1", "vision", "1.0.0")).unwrap();

        // Same type and version as an existing component: the earlier one
        // wins the tie and is returned again.
        let name = loader.load_component(&bundle("ocr-dup", "vision", "1.0.0")).unwrap();
        assert_eq!(name, "ocr-v1");
        assert!(!loader.manager().is_integrated("ocr-dup"));
        assert_eq!(loader.manager().component_count(), 2);
    }

    #[test]
    fn load_all_keeps_going_after_a_failure() {
        let mut loader = loader();
        let mut broken = bundle("broken", "audio", "1.0.0");
        broken.description = ComponentDescriptor::new();

        let results = loader.load_all(&[
            bundle("ocr", "vision", "1.0.0"),
            broken,
            bundle("asr", "audio", "2.0.0"),
        ]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref().unwrap(), "ocr");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_deref().unwrap(), "asr");
    }

    #[test]
    fn from_config_applies_registry_and_chain() {
        let mut config = SwitchyardConfig::default();
        config.registry.required_fields = vec!["vendor".to_string()];

        let mut loader = DynamicLoader::from_config(&config);
        assert_eq!(loader.manager().evaluator_names(), vec!["weighted", "type"]);
        assert!(loader.load_component(&bundle("ocr", "vision", "1.0.0")).is_err());
    }
}
