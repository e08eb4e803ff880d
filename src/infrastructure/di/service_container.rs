//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{CalculatorService, DashboardService, PaymentService};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{
    ConsoleNotifier, DataProvider, DemoDataProvider, FileDataProvider, Notifier,
};

/// Container holding the settings and the I/O boundary implementations.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Snapshot source
    pub provider: Arc<dyn DataProvider>,

    /// Notification sink
    pub notifier: Arc<dyn Notifier>,
}

impl ServiceContainer {
    /// Create a container with real implementations.
    ///
    /// Uses the configured snapshot file if any, demo data otherwise.
    pub fn new(settings: Settings) -> Self {
        let provider: Arc<dyn DataProvider> = match &settings.snapshot {
            Some(path) => {
                debug!("ServiceContainer: snapshot file {}", path.display());
                Arc::new(FileDataProvider::new(path.clone()))
            }
            None => {
                debug!("ServiceContainer: demo snapshot");
                Arc::new(DemoDataProvider)
            }
        };
        Self::with_deps(settings, provider, Arc::new(ConsoleNotifier))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        provider: Arc<dyn DataProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            provider,
            notifier,
        }
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(Arc::clone(&self.provider))
    }

    /// Calculator using the configured commission schedule (validated here).
    pub fn calculator(&self) -> ApplicationResult<CalculatorService> {
        let schedule = self.settings.commission.schedule()?;
        Ok(CalculatorService::new(schedule))
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(Arc::clone(&self.notifier))
    }
}
