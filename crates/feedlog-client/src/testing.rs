//! Scripted in-memory gateway for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use feedlog_core::Result;
use feedlog_core::error::{Error, StorageError};
use feedlog_core::{FeedingRecord, FeedingTime, FeedingType, Gateway, NewFeedingRecord, RecordId};

#[derive(Debug, Default)]
struct State {
    records: Vec<FeedingRecord>,
    fail_list: Option<String>,
    fail_create: Option<String>,
    fail_delete: Option<String>,
    hang_deletes: bool,
    calls: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedGateway {
    state: Mutex<State>,
}

fn unavailable(message: &str) -> Error {
    Error::Storage(StorageError::Unavailable {
        message: message.to_string(),
    })
}

impl ScriptedGateway {
    pub(crate) fn with_records(records: Vec<FeedingRecord>) -> Self {
        let gateway = Self::default();
        gateway.state.lock().unwrap().records = records;
        gateway
    }

    pub(crate) fn fail_list(&self, message: &str) {
        self.state.lock().unwrap().fail_list = Some(message.to_string());
    }

    pub(crate) fn fail_create(&self, message: &str) {
        self.state.lock().unwrap().fail_create = Some(message.to_string());
    }

    pub(crate) fn fail_delete(&self, message: &str) {
        self.state.lock().unwrap().fail_delete = Some(message.to_string());
    }

    pub(crate) fn hang_deletes(&self) {
        self.state.lock().unwrap().hang_deletes = true;
    }

    pub(crate) fn clear_failures(&self) {
        let mut state = self.state.lock().unwrap();
        state.fail_list = None;
        state.fail_create = None;
        state.fail_delete = None;
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn stored(&self) -> Vec<FeedingRecord> {
        self.state.lock().unwrap().records.clone()
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn create(&self, record: &NewFeedingRecord) -> Result<FeedingRecord> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create");
        if let Some(message) = &state.fail_create {
            return Err(unavailable(message));
        }

        let id = state
            .records
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or_default()
            .checked_next()
            .unwrap();
        let created = record.clone().into_record(id);
        state.records.push(created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<FeedingRecord>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list_all");
        if let Some(message) = &state.fail_list {
            return Err(unavailable(message));
        }
        Ok(state.records.clone())
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<()> {
        let hang = {
            let mut state = self.state.lock().unwrap();
            state.calls.push("delete_by_id");
            if let Some(message) = &state.fail_delete {
                return Err(unavailable(message));
            }
            state.hang_deletes
        };

        if hang {
            std::future::pending::<()>().await;
        }

        self.state.lock().unwrap().records.retain(|r| r.id != id);
        Ok(())
    }
}

pub(crate) fn record(id: u64, time: &str, amount: u32) -> FeedingRecord {
    candidate(time, amount).into_record(RecordId::new(id))
}

pub(crate) fn candidate(time: &str, amount: u32) -> NewFeedingRecord {
    NewFeedingRecord::new(
        FeedingType::new("bottle").unwrap(),
        FeedingTime::new(time).unwrap(),
    )
    .with_amount(amount)
}
