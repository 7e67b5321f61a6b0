//! In-memory backend used by the controller tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Notify, oneshot};

use bank_admin::domain::client::ClientRecord;
use bank_admin::domain::stats::StatsSummary;
use bank_admin::domain::types::{AccountNumber, Balance, ClientName};
use bank_admin::gateway::errors::{GatewayError, GatewayResult};
use bank_admin::gateway::{ClientReader, ClientWriter};
use bank_admin::services::stats;

pub fn client(account: &str, name: &str, balance: f64) -> ClientRecord {
    ClientRecord::new(
        AccountNumber::new(account).expect("valid account number"),
        ClientName::new(name).expect("valid name"),
        Balance::new(balance).expect("valid balance"),
    )
}

pub fn sample_clients() -> Vec<ClientRecord> {
    vec![
        client("A001", "X", 500.0),
        client("A002", "Y", 3000.0),
        client("A003", "Z", 9000.0),
    ]
}

/// Parks the next call of an operation until released.
struct Hold {
    entered: Arc<Notify>,
    release: oneshot::Receiver<()>,
}

async fn wait(hold: Option<Hold>) {
    if let Some(hold) = hold {
        hold.entered.notify_one();
        let _ = hold.release.await;
    }
}

fn offline() -> GatewayError {
    GatewayError::Network("connection refused".to_string())
}

#[derive(Default)]
pub struct FakeGateway {
    clients: Mutex<Vec<ClientRecord>>,
    pub fail_list: AtomicBool,
    pub fail_stats: AtomicBool,
    pub fail_writes: AtomicBool,
    pub panic_on_list: AtomicBool,
    list_hold: Mutex<Option<Hold>>,
    create_hold: Mutex<Option<Hold>>,
    pub list_calls: AtomicUsize,
    pub write_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_clients(clients: Vec<ClientRecord>) -> Arc<Self> {
        let gateway = Self::default();
        *gateway.clients.lock().expect("lock poisoned") = clients;
        Arc::new(gateway)
    }

    pub fn snapshot(&self) -> Vec<ClientRecord> {
        self.clients.lock().expect("lock poisoned").clone()
    }

    pub fn insert(&self, record: ClientRecord) {
        self.clients.lock().expect("lock poisoned").push(record);
    }

    /// Returns a signal raised once the next list call is parked, and the
    /// sender that lets it continue.
    pub fn hold_next_list(&self) -> (Arc<Notify>, oneshot::Sender<()>) {
        Self::hold(&self.list_hold)
    }

    pub fn hold_next_create(&self) -> (Arc<Notify>, oneshot::Sender<()>) {
        Self::hold(&self.create_hold)
    }

    fn hold(slot: &Mutex<Option<Hold>>) -> (Arc<Notify>, oneshot::Sender<()>) {
        let entered = Arc::new(Notify::new());
        let (tx, rx) = oneshot::channel();
        *slot.lock().expect("lock poisoned") = Some(Hold {
            entered: entered.clone(),
            release: rx,
        });
        (entered, tx)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn write_guard(&self) -> GatewayResult<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(())
    }
}

#[async_trait]
impl ClientReader for FakeGateway {
    async fn list_clients(&self) -> GatewayResult<Vec<ClientRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.snapshot();
        let hold = self.list_hold.lock().expect("lock poisoned").take();
        wait(hold).await;

        if self.panic_on_list.load(Ordering::SeqCst) {
            panic!("list handler blew up");
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(snapshot)
    }

    async fn get_stats(&self) -> GatewayResult<StatsSummary> {
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(stats::summarize(&self.snapshot()).unwrap_or(StatsSummary {
            total: 0.0,
            min: 0.0,
            max: 0.0,
        }))
    }

    async fn ping(&self) -> GatewayResult<usize> {
        Ok(self.list_clients().await?.len())
    }
}

#[async_trait]
impl ClientWriter for FakeGateway {
    async fn create_client(&self, record: &ClientRecord) -> GatewayResult<()> {
        let hold = self.create_hold.lock().expect("lock poisoned").take();
        wait(hold).await;

        self.write_guard()?;
        self.insert(record.clone());
        Ok(())
    }

    async fn update_client(
        &self,
        account_number: &AccountNumber,
        record: &ClientRecord,
    ) -> GatewayResult<()> {
        self.write_guard()?;
        let mut clients = self.clients.lock().expect("lock poisoned");
        let existing = clients
            .iter_mut()
            .find(|c| &c.account_number == account_number)
            .ok_or(GatewayError::NotFound)?;
        *existing = record.clone();
        Ok(())
    }

    async fn delete_client(&self, account_number: &AccountNumber) -> GatewayResult<()> {
        self.write_guard()?;
        let mut clients = self.clients.lock().expect("lock poisoned");
        let before = clients.len();
        clients.retain(|c| &c.account_number != account_number);
        if clients.len() == before {
            return Err(GatewayError::NotFound);
        }
        Ok(())
    }
}
