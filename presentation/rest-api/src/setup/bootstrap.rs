use crate::config::app_config::AppConfig;
use crate::config::env::EnvSource;
use crate::setup::dependency_injection::DependencyContainer;

/// Validates configuration, then wires dependencies.
///
/// Nothing downstream is constructed unless every required setting is present.
pub fn prepare(env: &impl EnvSource) -> anyhow::Result<(AppConfig, DependencyContainer)> {
    let config = AppConfig::from_source(env)?;
    let container = DependencyContainer::new(&config);
    Ok((config, container))
}
