//! View state of the client list screen.
//!
//! The controller owns the screen's copy of the client collection and the
//! server statistics. Every load takes a new epoch and responses belonging to
//! an older epoch are dropped. Only one mutation may be in flight at a time;
//! after a successful mutation the whole list is refetched. Tearing the screen
//! down cancels whatever is still running.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::domain::client::ClientRecord;
use crate::domain::stats::{BalanceStatistics, StatsSummary};
use crate::domain::types::AccountNumber;
use crate::forms::client::{AddClientForm, EditClientForm};
use crate::gateway::{ClientReader, ClientWriter};
use crate::services::client as client_service;
use crate::services::stats;
use crate::services::{ServiceError, ServiceResult};

/// What the list screen should currently show.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded {
        clients: Vec<ClientRecord>,
        stats: Option<StatsSummary>,
    },
}

impl ViewState {
    pub fn clients(&self) -> &[ClientRecord] {
        match self {
            ViewState::Loaded { clients, .. } => clients,
            _ => &[],
        }
    }
}

/// Releases the mutation slot when dropped.
struct MutationSlot<'a>(&'a AtomicBool);

impl Drop for MutationSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ClientListController<G> {
    gateway: Arc<G>,
    state: watch::Sender<ViewState>,
    epoch: AtomicU64,
    mutation_in_flight: AtomicBool,
    lifecycle: CancellationToken,
}

impl<G> ClientListController<G>
where
    G: ClientReader + ClientWriter + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            gateway,
            state,
            epoch: AtomicU64::new(0),
            mutation_in_flight: AtomicBool::new(false),
            lifecycle: CancellationToken::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Statistics for the loaded collection, `None` while nothing is loaded.
    pub fn statistics(&self) -> Option<BalanceStatistics> {
        match &*self.state.borrow() {
            ViewState::Loaded { clients, stats } => {
                Some(stats::aggregate(stats.as_ref(), clients))
            }
            _ => None,
        }
    }

    pub fn is_mutation_pending(&self) -> bool {
        self.mutation_in_flight.load(Ordering::Acquire)
    }

    pub fn is_detached(&self) -> bool {
        self.lifecycle.is_cancelled()
    }

    /// Initial load when the screen appears.
    pub async fn mount(&self) -> ServiceResult<()> {
        self.reload().await
    }

    /// Manual retry offered by the error view.
    pub async fn refresh(&self) -> ServiceResult<()> {
        self.reload().await
    }

    /// Cancels in-flight requests and discards the loaded data.
    pub fn teardown(&self) {
        self.lifecycle.cancel();
        self.state.send_replace(ViewState::Loading);
        log::debug!("Client list torn down");
    }

    pub async fn add_client(&self, form: AddClientForm) -> ServiceResult<ClientRecord> {
        let _slot = self.acquire_mutation_slot()?;

        let record = self
            .run(move |gateway| async move {
                client_service::add_client(gateway.as_ref(), form).await
            })
            .await
            .map_err(|err| self.mutation_failed("add client", err))?;

        self.resync().await?;
        Ok(record)
    }

    pub async fn edit_client(
        &self,
        account_number: &AccountNumber,
        form: EditClientForm,
    ) -> ServiceResult<ClientRecord> {
        let _slot = self.acquire_mutation_slot()?;

        let account_number = account_number.clone();
        let record = self
            .run(move |gateway| async move {
                client_service::edit_client(gateway.as_ref(), &account_number, form).await
            })
            .await
            .map_err(|err| self.mutation_failed("update client", err))?;

        self.resync().await?;
        Ok(record)
    }

    pub async fn delete_client(&self, account_number: &AccountNumber) -> ServiceResult<()> {
        let _slot = self.acquire_mutation_slot()?;

        let account_number = account_number.clone();
        self.run(move |gateway| async move {
            client_service::delete_client(gateway.as_ref(), &account_number).await
        })
        .await
        .map_err(|err| self.mutation_failed("delete client", err))?;

        self.resync().await
    }

    fn ensure_attached(&self) -> ServiceResult<()> {
        if self.lifecycle.is_cancelled() {
            return Err(ServiceError::Detached);
        }
        Ok(())
    }

    fn acquire_mutation_slot(&self) -> ServiceResult<MutationSlot<'_>> {
        self.ensure_attached()?;
        self.mutation_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ServiceError::Busy)?;
        Ok(MutationSlot(&self.mutation_in_flight))
    }

    /// The list keeps its stale data; the error is the caller's notice.
    fn mutation_failed(&self, operation: &str, err: ServiceError) -> ServiceError {
        log::warn!("Failed to {operation}: {err}");
        err
    }

    /// Refetch after a successful mutation. A failed refetch is already
    /// reflected in the state, so only detachment is reported.
    async fn resync(&self) -> ServiceResult<()> {
        match self.reload().await {
            Err(ServiceError::Detached) => Err(ServiceError::Detached),
            _ => Ok(()),
        }
    }

    /// Runs a gateway operation on its own task, bound to the screen lifetime.
    async fn run<T, F, Fut>(&self, operation: F) -> ServiceResult<T>
    where
        F: FnOnce(Arc<G>) -> Fut,
        Fut: Future<Output = ServiceResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        self.ensure_attached()?;
        let mut task = tokio::spawn(operation(Arc::clone(&self.gateway)));

        tokio::select! {
            _ = self.lifecycle.cancelled() => {
                task.abort();
                Err(ServiceError::Detached)
            }
            joined = &mut task => match joined {
                Ok(result) => result,
                Err(err) => Err(ServiceError::Fatal(err.to_string())),
            },
        }
    }

    fn begin_load(&self) -> u64 {
        let mut epoch = 0;
        self.state.send_modify(|state| {
            epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
            *state = ViewState::Loading;
        });
        epoch
    }

    /// Applies `update` only if `epoch` is still the latest load.
    fn apply<F>(&self, epoch: u64, update: F) -> bool
    where
        F: FnOnce(&mut ViewState) -> bool,
    {
        self.state.send_if_modified(|state| {
            if self.lifecycle.is_cancelled() || self.epoch.load(Ordering::Acquire) != epoch {
                log::debug!("Discarding stale response for load #{epoch}");
                return false;
            }
            update(state)
        })
    }

    async fn reload(&self) -> ServiceResult<()> {
        self.ensure_attached()?;
        let epoch = self.begin_load();

        let listed = self
            .run(|gateway| async move { gateway.list_clients().await.map_err(ServiceError::from) })
            .await;

        let clients = match listed {
            Ok(clients) => clients,
            Err(ServiceError::Detached) => return Err(ServiceError::Detached),
            Err(err) => {
                log::error!("Failed to load clients: {err}");
                let message = format!("Failed to load clients: {err}");
                self.apply(epoch, |state| {
                    *state = ViewState::Error(message);
                    true
                });
                return Err(err);
            }
        };

        let count = clients.len();
        let applied = self.apply(epoch, |state| {
            *state = ViewState::Loaded {
                clients,
                stats: None,
            };
            true
        });
        if !applied {
            return Ok(());
        }
        log::debug!("Loaded {count} clients (load #{epoch})");

        match self
            .run(|gateway| async move { gateway.get_stats().await.map_err(ServiceError::from) })
            .await
        {
            Ok(summary) => {
                self.apply(epoch, |state| match state {
                    ViewState::Loaded { stats, .. } => {
                        *stats = Some(summary);
                        true
                    }
                    _ => false,
                });
                Ok(())
            }
            Err(ServiceError::Detached) => Err(ServiceError::Detached),
            Err(err) => {
                log::warn!("Statistics unavailable, falling back to local figures: {err}");
                Ok(())
            }
        }
    }
}

impl<G> Drop for ClientListController<G> {
    fn drop(&mut self) {
        self.lifecycle.cancel();
    }
}
