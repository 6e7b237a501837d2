//! In-process domain event bus.
//!
//! Handlers are registered against an [`EventPattern`] at startup and looked
//! up on every publish. Each subscription carries a [`DispatchMode`]:
//!
//! - Synchronous handlers run on the publisher's task. Their failures are
//!   collected and returned from `publish`, and the event's deferred handlers
//!   are then not scheduled.
//! - Deferred handlers become jobs on a bounded queue drained by a fixed pool
//!   of worker tasks. A failing or panicking job is logged and dropped.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `worker_count` | 4 | Tasks draining the deferred queue |
//! | `queue_capacity` | 1024 | Jobs buffered before publishers wait |
//!
//! ## Shutdown
//!
//! [`InProcessEventBus::shutdown`] waits until no deferred job is queued or
//! running, including follow-up events that handlers publish while draining,
//! then closes the queue and joins the workers. Publishing a deferred event
//! afterwards fails with `event-bus-closed`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, Mutex as AsyncMutex, Notify};
use tokio::task::JoinHandle;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, EventPattern};
use crate::ports::{DispatchMode, EventHandler, EventPublisher, EventSubscriber};

/// Configuration for the deferred worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBusConfig {
    pub worker_count: usize,
    pub queue_capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            worker_count: 4,
            queue_capacity: 1024,
        }
    }
}

impl EventBusConfig {
    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}

struct Subscription {
    pattern: EventPattern,
    mode: DispatchMode,
    handler: Arc<dyn EventHandler>,
}

tokio::task_local! {
    /// Set while a deferred job runs on a pool worker.
    static ON_WORKER: ();
}

/// One deferred handler invocation.
struct Job {
    handler: Arc<dyn EventHandler>,
    event: EventEnvelope,
}

/// Event bus with synchronous and deferred dispatch inside one process.
///
/// Must be created inside a Tokio runtime; the worker pool is spawned by
/// [`InProcessEventBus::new`].
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InProcessEventBus::new(EventBusConfig::default()));
/// bus.subscribe("*", Arc::new(AuditLogger));
/// bus.subscribe_deferred("todo.completed", recalculation);
///
/// bus.publish(envelope).await?;
/// bus.shutdown().await;
/// ```
pub struct InProcessEventBus {
    subscriptions: RwLock<Vec<Subscription>>,
    sender: Mutex<Option<mpsc::Sender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    pending: Arc<Pending>,
}

/// Deferred jobs queued or running.
#[derive(Default)]
struct Pending {
    count: AtomicUsize,
    idle: Notify,
}

impl Pending {
    fn add(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn done(&self) {
        if self.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }

    async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            if self.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl InProcessEventBus {
    /// Creates the bus and spawns its worker pool.
    ///
    /// `worker_count` and `queue_capacity` are raised to at least 1.
    pub fn new(config: EventBusConfig) -> Self {
        let (sender, receiver) = mpsc::channel(config.queue_capacity.max(1));
        let receiver = Arc::new(AsyncMutex::new(receiver));
        let pending = Arc::new(Pending::default());

        let workers = (0..config.worker_count.max(1))
            .map(|worker| {
                tokio::spawn(run_worker(
                    worker,
                    Arc::clone(&receiver),
                    Arc::clone(&pending),
                ))
            })
            .collect();

        Self {
            subscriptions: RwLock::new(Vec::new()),
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(workers),
            pending,
        }
    }

    /// Number of registered subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Waits for the deferred queue to drain, then stops the workers.
    ///
    /// Safe to call more than once.
    pub async fn shutdown(&self) {
        self.pending.wait_idle().await;

        // Dropping the last sender lets workers see the end of the queue.
        drop(
            self.sender
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take(),
        );

        let workers: Vec<JoinHandle<()>> = std::mem::take(
            &mut *self.workers.lock().unwrap_or_else(PoisonError::into_inner),
        );

        for worker in workers {
            if let Err(e) = worker.await {
                tracing::error!(error = %e, "event bus worker terminated abnormally");
            }
        }

        tracing::info!("event bus drained");
    }

    /// Splits matching handlers by dispatch mode, releasing the registry lock.
    fn matching(&self, event_type: &str) -> (Vec<Arc<dyn EventHandler>>, Vec<Arc<dyn EventHandler>>) {
        let subscriptions = self
            .subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let mut synchronous = Vec::new();
        let mut deferred = Vec::new();
        for subscription in subscriptions
            .iter()
            .filter(|s| s.pattern.matches(event_type))
        {
            match subscription.mode {
                DispatchMode::Synchronous => synchronous.push(Arc::clone(&subscription.handler)),
                DispatchMode::Deferred => deferred.push(Arc::clone(&subscription.handler)),
            }
        }
        (synchronous, deferred)
    }

    fn current_sender(&self) -> Option<mpsc::Sender<Job>> {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Queues one job, waiting for capacity unless called from a worker.
    async fn enqueue(&self, sender: &mpsc::Sender<Job>, job: Job) -> Result<(), DomainError> {
        self.pending.add();

        if ON_WORKER.try_with(|_| ()).is_err() {
            return match sender.send(job).await {
                Ok(()) => Ok(()),
                Err(_) => {
                    self.pending.done();
                    Err(bus_closed())
                }
            };
        }

        match sender.try_send(job) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(job)) => {
                tracing::debug!(
                    event_type = %job.event.event_type,
                    "deferred queue full, handing follow-up to overflow task"
                );
                let sender = sender.clone();
                let pending = Arc::clone(&self.pending);
                tokio::spawn(async move {
                    if sender.send(job).await.is_err() {
                        pending.done();
                    }
                });
                Ok(())
            }
            Err(TrySendError::Closed(_)) => {
                self.pending.done();
                Err(bus_closed())
            }
        }
    }
}

fn bus_closed() -> DomainError {
    DomainError::new(ErrorCode::EventBusClosed, "Event bus is shut down")
}

#[async_trait]
impl EventPublisher for InProcessEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let (synchronous, deferred) = self.matching(&event.event_type);

        tracing::debug!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            synchronous = synchronous.len(),
            deferred = deferred.len(),
            "publishing event"
        );

        let mut errors = Vec::new();
        for handler in synchronous {
            if let Err(e) = handler.handle(event.clone()).await {
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EventHandlerFailed,
                format!("Handler errors: {}", errors.join(", ")),
            )
            .with_detail("event_type", event.event_type));
        }

        if deferred.is_empty() {
            return Ok(());
        }

        let sender = self.current_sender().ok_or_else(bus_closed)?;

        for handler in deferred {
            let job = Job {
                handler,
                event: event.clone(),
            };
            self.enqueue(&sender, job).await?;
        }

        Ok(())
    }
}

impl EventSubscriber for InProcessEventBus {
    fn subscribe_with_mode(
        &self,
        pattern: &str,
        mode: DispatchMode,
        handler: Arc<dyn EventHandler>,
    ) {
        let pattern = EventPattern::parse(pattern);
        tracing::debug!(%pattern, ?mode, handler = handler.name(), "event handler subscribed");

        self.subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscription {
                pattern,
                mode,
                handler,
            });
    }
}

async fn run_worker(
    worker: usize,
    receiver: Arc<AsyncMutex<mpsc::Receiver<Job>>>,
    pending: Arc<Pending>,
) {
    loop {
        // Lock is held only while waiting for the next job.
        let next = receiver.lock().await.recv().await;
        let Some(job) = next else {
            break;
        };
        run_job(worker, job).await;
        pending.done();
    }
    tracing::debug!(worker, "event bus worker stopped");
}

async fn run_job(worker: usize, job: Job) {
    let Job { handler, event } = job;
    let event_id = event.event_id.clone();
    let event_type = event.event_type.clone();

    let outcome = AssertUnwindSafe(ON_WORKER.scope((), handler.handle(event)))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(
            worker,
            handler = handler.name(),
            %event_id,
            %event_type,
            error = %e,
            "deferred event handler failed"
        ),
        Err(_) => tracing::error!(
            worker,
            handler = handler.name(),
            %event_id,
            %event_type,
            "deferred event handler panicked"
        ),
    }
}
