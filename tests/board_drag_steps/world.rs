//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use zenkanban::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Task, TaskStore},
    ports::KeyValueStore,
    services::{BoardService, DEFAULT_STORAGE_KEY, encode},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub storage: Arc<InMemoryKeyValueStore>,
    pub seed: Vec<Task>,
    pub service: Option<TestBoardService>,
}

impl BoardWorld {
    /// Creates a world with no tasks and no running service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(InMemoryKeyValueStore::new()),
            seed: Vec::new(),
            service: None,
        }
    }

    /// Returns the board service, starting it from the seeded tasks on first
    /// use.
    pub fn service_mut(&mut self) -> Result<&mut TestBoardService, eyre::Report> {
        if self.service.is_none() {
            let seed = TaskStore::from_tasks(self.seed.drain(..));
            self.storage.set(DEFAULT_STORAGE_KEY, &encode(&seed)?)?;
            self.service = Some(BoardService::new(
                Arc::clone(&self.storage),
                Arc::new(DefaultClock),
            ));
        }
        self.service
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board service failed to start"))
    }

    /// Returns the running board service.
    pub fn service(&self) -> Result<&TestBoardService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board service has not been started"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
