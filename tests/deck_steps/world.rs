//! Shared world state for dashboard and session BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskdeck::{
    app::TaskDeck,
    notification::adapters::InMemoryNotifier,
    session::{
        adapters::InMemoryNavigator,
        domain::{AdminCredentials, RouteDecision, SessionDomainError},
    },
    storage::adapters::InMemoryKeyValueStore,
    task::{adapters::SequentialTaskIdGenerator, domain::TaskDomainError},
};

use crate::test_helpers::FixedClock;

/// Admin email accepted in scenarios.
pub const ADMIN_EMAIL: &str = "admin@example.com";
/// Admin password accepted in scenarios.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Container type driven by the scenarios.
pub type TestDeck = TaskDeck<InMemoryKeyValueStore, InMemoryNavigator, FixedClock>;

/// Scenario world for dashboard and session behaviour tests.
pub struct DeckWorld {
    pub slot: Arc<InMemoryKeyValueStore>,
    pub navigator: InMemoryNavigator,
    pub notifier: InMemoryNotifier,
    pub deck: Option<TestDeck>,
    pub last_form_error: Option<TaskDomainError>,
    pub last_login_error: Option<SessionDomainError>,
    pub last_decision: Option<RouteDecision>,
    pub last_prompt: Option<String>,
}

impl DeckWorld {
    /// Creates a world with an empty slot and the browser at the dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(InMemoryKeyValueStore::new()),
            navigator: InMemoryNavigator::default(),
            notifier: InMemoryNotifier::new(),
            deck: None,
            last_form_error: None,
            last_login_error: None,
            last_decision: None,
            last_prompt: None,
        }
    }

    /// Starts the container over the prepared slot and location.
    pub fn open(&mut self) {
        let deck = TaskDeck::start(
            Arc::clone(&self.slot),
            Arc::new(self.navigator.clone()),
            Arc::new(FixedClock::on(2025, 1, 10)),
            Arc::new(self.notifier.clone()),
            AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD),
        )
        .with_id_generator(Arc::new(SequentialTaskIdGenerator::new()));
        self.deck = Some(deck);
    }

    /// Returns the running container.
    pub fn deck(&self) -> Result<&TestDeck, eyre::Report> {
        self.deck
            .as_ref()
            .ok_or_else(|| eyre::eyre!("the dashboard has not been opened"))
    }

    /// Returns the running container mutably.
    pub fn deck_mut(&mut self) -> Result<&mut TestDeck, eyre::Report> {
        self.deck
            .as_mut()
            .ok_or_else(|| eyre::eyre!("the dashboard has not been opened"))
    }
}

impl Default for DeckWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DeckWorld {
    DeckWorld::default()
}
