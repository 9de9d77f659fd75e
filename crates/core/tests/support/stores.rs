use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use creatorhub_core::update::ports::{SiteDataStore, StreamHistoryStore};
use creatorhub_domain::{HubError, Result as DomainResult, SiteData, StreamHistory};

/// In-memory `data.json`.
#[derive(Default, Clone)]
pub struct MemorySiteDataStore {
    data: Arc<Mutex<SiteData>>,
    saves: Arc<Mutex<usize>>,
}

impl MemorySiteDataStore {
    pub fn new(data: SiteData) -> Self {
        Self { data: Arc::new(Mutex::new(data)), saves: Arc::default() }
    }

    pub fn current(&self) -> SiteData {
        self.data.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl SiteDataStore for MemorySiteDataStore {
    async fn load(&self) -> DomainResult<SiteData> {
        Ok(self.current())
    }

    async fn save(&self, data: &SiteData) -> DomainResult<()> {
        *self.data.lock().unwrap() = data.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

/// In-memory `streams_history.json`.
#[derive(Default, Clone)]
pub struct MemoryHistoryStore {
    history: Arc<Mutex<StreamHistory>>,
    unreadable: bool,
    saves: Arc<Mutex<usize>>,
}

impl MemoryHistoryStore {
    pub fn new(history: StreamHistory) -> Self {
        Self { history: Arc::new(Mutex::new(history)), ..Self::default() }
    }

    /// A store whose document exists but does not parse.
    pub fn unreadable(history: StreamHistory) -> Self {
        Self { unreadable: true, ..Self::new(history) }
    }

    pub fn current(&self) -> StreamHistory {
        self.history.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl StreamHistoryStore for MemoryHistoryStore {
    async fn load(&self) -> DomainResult<StreamHistory> {
        if self.unreadable {
            return Err(HubError::Parse("streams_history.json: expected value at line 3 column 5".into()));
        }
        Ok(self.current())
    }

    async fn save(&self, history: &StreamHistory) -> DomainResult<()> {
        *self.history.lock().unwrap() = history.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
