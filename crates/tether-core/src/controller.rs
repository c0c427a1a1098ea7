// ── Platform abstraction ──
//
// Full lifecycle management for a platform connection: authentication,
// reference data loading, initial list fetch, background state polling,
// and command routing.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use tether_api::{RestClient, TransportConfig};

use crate::command::{Command, CommandEnvelope, CommandOutcome};
use crate::config::PlatformConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{Actuator, Adapter, ComponentState, EntityId, RuleTrigger, Settings};
use crate::notify::{Notification, Notifier};
use crate::store::DataStore;

const COMMAND_CHANNEL_SIZE: usize = 64;

// ── ConnectionState ──────────────────────────────────────────────

/// Connection state observable by consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

// ── Delete confirmation ──────────────────────────────────────────

/// Outcome of a delete confirmation prompt. Anything other than
/// `Confirmed` aborts the deletion silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// A component that will be cascade-deleted alongside an adapter.
#[derive(Debug, Clone)]
pub struct DependentComponent {
    pub name: String,
    pub kind: String,
}

/// Everything a front end needs to phrase a delete confirmation.
#[derive(Debug, Clone)]
pub struct DeletePrompt {
    /// Resource kind being deleted ("actuator", "adapter", ...).
    pub resource: &'static str,
    /// Display name of the item (falls back to the id if unknown).
    pub name: String,
    /// Components that will be deleted as a side effect.
    pub cascades: Vec<DependentComponent>,
}

/// Result of a gated delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(EntityId),
    /// Confirmation was declined or dismissed; nothing was sent.
    Aborted,
}

/// Transform applied to every adapter as it enters the store
/// (resource-specific decoration, supplied by the consumer).
pub type AdapterPreprocess = Arc<dyn Fn(&mut Adapter) + Send + Sync>;

// ── Platform ─────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<PlatformInner>`. Manages the full
/// connection lifecycle: authentication, reference data, initial list
/// fetch, background state polling, and command routing.
#[derive(Clone)]
pub struct Platform {
    inner: Arc<PlatformInner>,
}

struct PlatformInner {
    config: PlatformConfig,
    store: Arc<DataStore>,
    notifier: Notifier,
    connection_state: watch::Sender<ConnectionState>,
    command_tx: Mutex<mpsc::Sender<CommandEnvelope>>,
    command_rx: Mutex<Option<mpsc::Receiver<CommandEnvelope>>>,
    cancel: CancellationToken,
    /// Child token for the current connection -- cancelled on disconnect,
    /// replaced on reconnect (avoids permanent cancellation).
    cancel_child: Mutex<CancellationToken>,
    client: Mutex<Option<Arc<RestClient>>>,
    /// Set before `connect()`; applied to adapters at load and create.
    adapter_preprocess: std::sync::RwLock<Option<AdapterPreprocess>>,
    task_handles: Mutex<Vec<JoinHandle<()>>>,
    /// Warnings accumulated during connect (e.g. reference data failure).
    warnings: Mutex<Vec<String>>,
}

impl Platform {
    /// Create a new Platform from configuration. Does NOT connect --
    /// call [`connect()`](Self::connect) to authenticate and start
    /// background tasks.
    pub fn new(config: PlatformConfig) -> Self {
        let store = Arc::new(DataStore::new());
        let (connection_state, _) = watch::channel(ConnectionState::Disconnected);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
        let cancel = CancellationToken::new();
        let cancel_child = cancel.child_token();

        Self {
            inner: Arc::new(PlatformInner {
                config,
                store,
                notifier: Notifier::new(),
                connection_state,
                command_tx: Mutex::new(command_tx),
                command_rx: Mutex::new(Some(command_rx)),
                cancel,
                cancel_child: Mutex::new(cancel_child),
                client: Mutex::new(None),
                adapter_preprocess: std::sync::RwLock::new(None),
                task_handles: Mutex::new(Vec::new()),
                warnings: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Access the platform configuration.
    pub fn config(&self) -> &PlatformConfig {
        &self.inner.config
    }

    /// Access the underlying DataStore.
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    /// Install the adapter decoration transform. Must be called before
    /// `connect()` to cover the initial list fetch.
    pub fn set_adapter_preprocess(&self, f: AdapterPreprocess) {
        *self
            .inner
            .adapter_preprocess
            .write()
            .expect("preprocess lock poisoned") = Some(f);
    }

    // ── Connection lifecycle ─────────────────────────────────────

    /// Connect to the platform.
    ///
    /// Builds the HTTP client, loads reference data (degrading on
    /// failure), fetches the initial snapshot of every resource kind,
    /// runs one immediate bulk state fetch, and spawns background
    /// tasks (command processor, state poll).
    pub async fn connect(&self) -> Result<(), CoreError> {
        self.inner
            .connection_state
            .send_replace(ConnectionState::Connecting);
        // Warnings describe the current connection only.
        self.inner.warnings.lock().await.clear();

        // Fresh child token for this connection (supports reconnect).
        let child = self.inner.cancel.child_token();
        *self.inner.cancel_child.lock().await = child.clone();

        let config = &self.inner.config;
        let transport = TransportConfig {
            timeout: config.timeout,
            accept_invalid_certs: config.accept_invalid_certs,
        };
        let mut client = RestClient::new(config.url.clone(), &transport)?;
        if let Some(creds) = &config.credentials {
            client = client.with_credentials(creds.username.clone(), creds.password.clone());
        }
        let client = Arc::new(client);
        *self.inner.client.lock().await = Some(Arc::clone(&client));

        // Reference data -- failure degrades the affected UI section but
        // never blocks the rest of the page.
        self.load_reference_data(&client).await;

        // Initial list fetch -- these are the page's backing collections,
        // so failure here is fatal to the connect.
        if let Err(e) = self.initial_lists(&client).await {
            self.inner
                .connection_state
                .send_replace(ConnectionState::Failed);
            return Err(e);
        }

        // Settings and documentation metadata -- degrade on failure.
        self.load_settings(&client).await;

        // Immediate state pass; subsequent passes come from the poll task.
        if let Err(e) = self.refresh_all_actuator_states().await {
            warn!(error = %e, "initial state fetch failed");
        }

        // Spawn background tasks.
        let mut handles = self.inner.task_handles.lock().await;

        if let Some(rx) = self.inner.command_rx.lock().await.take() {
            let platform = self.clone();
            handles.push(tokio::spawn(command_processor_task(platform, rx)));
        }

        let poll_interval = config.state_poll_interval;
        if !poll_interval.is_zero() {
            let platform = self.clone();
            let cancel = child.clone();
            handles.push(tokio::spawn(state_poll_task(platform, poll_interval, cancel)));
        }

        self.inner
            .connection_state
            .send_replace(ConnectionState::Connected);
        info!("connected to platform");
        Ok(())
    }

    /// Disconnect from the platform.
    ///
    /// Cancels background tasks and resets the connection state.
    /// In-flight requests are not aborted; their callbacks land in a
    /// task that is already gone.
    pub async fn disconnect(&self) {
        // Cancel the child token (not the parent -- allows reconnect).
        self.inner.cancel_child.lock().await.cancel();

        // Join all background tasks.
        let mut handles = self.inner.task_handles.lock().await;
        for handle in handles.drain(..) {
            let _ = handle.await;
        }
        drop(handles);

        *self.inner.client.lock().await = None;

        // Recreate the command channel so reconnects can spawn a fresh
        // receiver; the previous one was consumed by the processor task.
        {
            let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
            *self.inner.command_tx.lock().await = tx;
            *self.inner.command_rx.lock().await = Some(rx);
        }

        self.inner
            .connection_state
            .send_replace(ConnectionState::Disconnected);
        debug!("disconnected");
    }

    // ── Command execution ────────────────────────────────────────

    /// Execute a command against the platform.
    ///
    /// Sends the command through the internal channel to the command
    /// processor task and awaits the result.
    pub async fn execute(&self, cmd: Command) -> Result<CommandOutcome, CoreError> {
        if *self.inner.connection_state.borrow() != ConnectionState::Connected {
            return Err(CoreError::PlatformDisconnected);
        }

        let (tx, rx) = tokio::sync::oneshot::channel();
        let command_tx = self.inner.command_tx.lock().await.clone();

        command_tx
            .send(CommandEnvelope {
                command: cmd,
                response_tx: tx,
            })
            .await
            .map_err(|_| CoreError::PlatformDisconnected)?;

        rx.await.map_err(|_| CoreError::PlatformDisconnected)?
    }

    // ── Create conveniences ──────────────────────────────────────

    /// Register a new actuator. On success the returned item is already
    /// in the store, decorated `Loading`, with its first state fetch
    /// issued.
    pub async fn create_actuator(
        &self,
        req: crate::CreateActuatorRequest,
    ) -> Result<Arc<Actuator>, CoreError> {
        match self.execute(Command::CreateActuator(req)).await? {
            CommandOutcome::Actuator(a) => Ok(a),
            other => Err(unexpected_outcome(other)),
        }
    }

    /// Register a new adapter. The preprocessing transform (if any) has
    /// been applied by the time this returns.
    pub async fn create_adapter(
        &self,
        req: crate::CreateAdapterRequest,
    ) -> Result<Arc<Adapter>, CoreError> {
        match self.execute(Command::CreateAdapter(req)).await? {
            CommandOutcome::Adapter(a) => Ok(a),
            other => Err(unexpected_outcome(other)),
        }
    }

    /// Register a new rule trigger.
    pub async fn create_rule_trigger(
        &self,
        req: crate::CreateRuleTriggerRequest,
    ) -> Result<Arc<RuleTrigger>, CoreError> {
        match self.execute(Command::CreateRuleTrigger(req)).await? {
            CommandOutcome::RuleTrigger(t) => Ok(t),
            other => Err(unexpected_outcome(other)),
        }
    }

    /// Persist the platform settings.
    pub async fn save_settings(&self, settings: Settings) -> Result<(), CoreError> {
        self.execute(Command::SaveSettings(settings)).await?;
        Ok(())
    }

    // ── Gated deletes ────────────────────────────────────────────

    /// Delete an actuator, gated by a confirmation callback.
    ///
    /// The prompt carries the actuator's display name. The request is
    /// issued only on [`Confirmation::Confirmed`]; any other outcome
    /// aborts silently -- no request, no state change, no notification.
    pub async fn delete_actuator<F, Fut>(
        &self,
        id: &EntityId,
        confirm: F,
    ) -> Result<DeleteOutcome, CoreError>
    where
        F: FnOnce(DeletePrompt) -> Fut,
        Fut: Future<Output = Confirmation>,
    {
        let prompt = DeletePrompt {
            resource: "actuator",
            name: self.display_name(self.inner.store.actuator(id), id),
            cascades: Vec::new(),
        };
        self.gated_delete(prompt, confirm, Command::DeleteActuator { id: id.clone() })
            .await
    }

    /// Delete an adapter, gated by a confirmation callback.
    ///
    /// The prompt is enriched with the components currently using the
    /// adapter -- the backend cascade-deletes them, and the user should
    /// know before agreeing.
    pub async fn delete_adapter<F, Fut>(
        &self,
        id: &EntityId,
        confirm: F,
    ) -> Result<DeleteOutcome, CoreError>
    where
        F: FnOnce(DeletePrompt) -> Fut,
        Fut: Future<Output = Confirmation>,
    {
        let client = self.client().await?;
        let cascades = client
            .adapter_using_components(id.as_str())
            .await?
            .into_iter()
            .map(|d| DependentComponent {
                name: d.name,
                kind: d.component,
            })
            .collect();

        let prompt = DeletePrompt {
            resource: "adapter",
            name: self.display_name(self.inner.store.adapter(id), id),
            cascades,
        };
        self.gated_delete(prompt, confirm, Command::DeleteAdapter { id: id.clone() })
            .await
    }

    /// Delete a rule trigger, gated by a confirmation callback.
    pub async fn delete_rule_trigger<F, Fut>(
        &self,
        id: &EntityId,
        confirm: F,
    ) -> Result<DeleteOutcome, CoreError>
    where
        F: FnOnce(DeletePrompt) -> Fut,
        Fut: Future<Output = Confirmation>,
    {
        let prompt = DeletePrompt {
            resource: "rule trigger",
            name: self.display_name(self.inner.store.rule_trigger(id), id),
            cascades: Vec::new(),
        };
        self.gated_delete(prompt, confirm, Command::DeleteRuleTrigger { id: id.clone() })
            .await
    }

    async fn gated_delete<F, Fut>(
        &self,
        prompt: DeletePrompt,
        confirm: F,
        command: Command,
    ) -> Result<DeleteOutcome, CoreError>
    where
        F: FnOnce(DeletePrompt) -> Fut,
        Fut: Future<Output = Confirmation>,
    {
        if confirm(prompt).await != Confirmation::Confirmed {
            debug!("deletion aborted by user");
            return Ok(DeleteOutcome::Aborted);
        }

        match self.execute(command).await? {
            CommandOutcome::Deleted(id) => Ok(DeleteOutcome::Deleted(id)),
            other => Err(unexpected_outcome(other)),
        }
    }

    fn display_name<T>(&self, item: Option<Arc<T>>, id: &EntityId) -> String
    where
        T: NamedEntity,
    {
        item.map_or_else(|| id.to_string(), |i| i.display_name().to_owned())
    }

    // ── State refresh ────────────────────────────────────────────

    /// Fetch the deployment state of a single actuator and patch it in
    /// place. The item shows `Loading` while the fetch is in flight and
    /// `Unknown` (with one error notification) if it fails.
    pub async fn refresh_actuator_state(
        &self,
        id: &EntityId,
    ) -> Result<ComponentState, CoreError> {
        let client = self.client().await?;
        let store = &self.inner.store;

        store.apply_single_state(id, ComponentState::Loading);
        match client.actuator_state(id.as_str()).await {
            Ok(raw) => {
                let state = ComponentState::from_wire(&raw);
                store.apply_single_state(id, state);
                Ok(state)
            }
            Err(e) => {
                store.apply_single_state(id, ComponentState::Unknown);
                self.inner
                    .notifier
                    .error("Could not retrieve the actuator state.");
                Err(e.into())
            }
        }
    }

    /// Bulk-fetch the states of all actuators and patch them in place.
    ///
    /// On failure every actuator goes `Unknown` and exactly one error
    /// notification is emitted for the batch.
    pub async fn refresh_all_actuator_states(&self) -> Result<(), CoreError> {
        let client = self.client().await?;
        let store = &self.inner.store;

        match client.all_actuator_states().await {
            Ok(raw) => {
                let states: HashMap<EntityId, ComponentState> = raw
                    .into_iter()
                    .map(|(id, s)| (EntityId::from(id), ComponentState::from_wire(&s)))
                    .collect();
                store.apply_state_map(&states);
                Ok(())
            }
            Err(e) => {
                store.mark_all_states_unknown();
                self.inner
                    .notifier
                    .error("Could not retrieve actuator states.");
                Err(e.into())
            }
        }
    }

    // ── One-shot convenience ─────────────────────────────────────

    /// One-shot: connect, run closure, disconnect.
    ///
    /// Optimized for CLI invocations: the background state poll is
    /// disabled since only a single request-response cycle is needed.
    pub async fn oneshot<F, Fut, T>(config: PlatformConfig, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(Platform) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let mut cfg = config;
        cfg.state_poll_interval = Duration::ZERO;

        let platform = Platform::new(cfg);
        platform.connect().await?;
        let result = f(platform.clone()).await;
        platform.disconnect().await;
        result
    }

    // ── State observation ────────────────────────────────────────

    /// Subscribe to connection state changes.
    pub fn connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.connection_state.subscribe()
    }

    /// Subscribe to user-facing notifications.
    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.inner.notifier.subscribe()
    }

    /// Warnings accumulated during connect (degraded sections).
    pub async fn warnings(&self) -> Vec<String> {
        self.inner.warnings.lock().await.clone()
    }

    // ── Private helpers ──────────────────────────────────────────

    async fn client(&self) -> Result<Arc<RestClient>, CoreError> {
        self.inner
            .client
            .lock()
            .await
            .as_ref()
            .map(Arc::clone)
            .ok_or(CoreError::PlatformDisconnected)
    }

    /// Load component and parameter types. Failure degrades the
    /// affected form sections; the page itself still loads.
    async fn load_reference_data(&self, client: &RestClient) {
        let (types_res, params_res) =
            tokio::join!(client.component_types("ACTUATOR"), client.parameter_types());

        match types_res {
            Ok(types) => {
                self.inner
                    .store
                    .actuator_types
                    .send_replace(Arc::new(types.into_iter().map(Into::into).collect()));
            }
            Err(e) => {
                warn!(error = %e, "failed to load actuator types");
                self.push_warning("Actuator types unavailable").await;
            }
        }

        match params_res {
            Ok(params) if !params.is_empty() => {
                self.inner
                    .store
                    .parameter_types
                    .send_replace(Arc::new(params.into_iter().map(Into::into).collect()));
            }
            Ok(_) | Err(_) => {
                self.inner.notifier.error("Could not load parameter types.");
                self.push_warning("Parameter types unavailable").await;
            }
        }
    }

    async fn initial_lists(&self, client: &RestClient) -> Result<(), CoreError> {
        let (actuators_res, adapters_res, triggers_res) = tokio::join!(
            client.list_actuators(),
            client.list_adapters(),
            client.list_rule_triggers(),
        );

        let actuators: Vec<Actuator> =
            actuators_res?.into_iter().map(Actuator::from).collect();
        let mut adapters: Vec<Adapter> =
            adapters_res?.into_iter().map(Adapter::from).collect();
        let triggers: Vec<RuleTrigger> =
            triggers_res?.into_iter().map(RuleTrigger::from).collect();

        if let Some(preprocess) = self.adapter_preprocess() {
            for adapter in &mut adapters {
                preprocess(adapter);
            }
        }

        debug!(
            actuators = actuators.len(),
            adapters = adapters.len(),
            triggers = triggers.len(),
            "initial list fetch complete"
        );

        let store = &self.inner.store;
        store.apply_actuators(actuators);
        store.apply_adapters(adapters);
        store.apply_rule_triggers(triggers);
        Ok(())
    }

    async fn load_settings(&self, client: &RestClient) {
        match client.get_settings().await {
            Ok(dto) => {
                self.inner.store.settings.send_replace(Some(dto.into()));
            }
            Err(e) => {
                warn!(error = %e, "failed to load settings");
                self.inner
                    .notifier
                    .error("Could not load application settings.");
            }
        }

        match client.documentation_metadata().await {
            Ok(dto) => {
                self.inner.store.documentation.send_replace(Some(dto.into()));
            }
            Err(e) => {
                warn!(error = %e, "failed to load documentation metadata");
                self.inner
                    .notifier
                    .error("Could not load documentation meta data.");
            }
        }
    }

    fn adapter_preprocess(&self) -> Option<AdapterPreprocess> {
        self.inner
            .adapter_preprocess
            .read()
            .expect("preprocess lock poisoned")
            .clone()
    }

    async fn push_warning(&self, msg: impl Into<String>) {
        self.inner.warnings.lock().await.push(msg.into());
    }
}

/// Entities that have a user-facing display name.
trait NamedEntity {
    fn display_name(&self) -> &str;
}

impl NamedEntity for Actuator {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl NamedEntity for Adapter {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl NamedEntity for RuleTrigger {
    fn display_name(&self) -> &str {
        &self.name
    }
}

fn unexpected_outcome(outcome: CommandOutcome) -> CoreError {
    CoreError::Internal(format!("unexpected command outcome: {outcome:?}"))
}

// ── Background tasks ─────────────────────────────────────────────

/// Recurring bulk state refresh for all displayed actuators.
async fn state_poll_task(platform: Platform, period: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                // Failure already marked states Unknown and notified;
                // the next tick is the only retry mechanism.
                if let Err(e) = platform.refresh_all_actuator_states().await {
                    warn!(error = %e, "periodic state refresh failed");
                }
            }
        }
    }
}

async fn command_processor_task(platform: Platform, mut rx: mpsc::Receiver<CommandEnvelope>) {
    let cancel = platform.inner.cancel_child.lock().await.clone();

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            envelope = rx.recv() => {
                let Some(envelope) = envelope else { break };
                let result = route_command(&platform, envelope.command).await;
                let _ = envelope.response_tx.send(result);
            }
        }
    }
}

// ── Command routing ──────────────────────────────────────────────

/// Route a command to the appropriate API call and apply its result to
/// the store. Request failures leave the store untouched and emit one
/// error notification.
async fn route_command(platform: &Platform, cmd: Command) -> Result<CommandOutcome, CoreError> {
    let client = platform.client().await?;
    let store = &platform.inner.store;
    let notifier = &platform.inner.notifier;

    match cmd {
        // ── Actuators ────────────────────────────────────────────
        Command::CreateActuator(req) => {
            let dto = convert::actuator_create_dto(&req);
            let created = match client.create_actuator(&dto).await {
                Ok(d) => Actuator::from(d),
                Err(e) => {
                    notifier.error("Could not create actuator.");
                    return Err(e.into());
                }
            };

            // Enters the list decorated exactly like initially fetched
            // items: Loading, then an immediate state lookup.
            let id = created.id.clone();
            store.actuators.upsert(created);

            if let Err(e) = platform.refresh_actuator_state(&id).await {
                warn!(error = %e, %id, "state fetch for new actuator failed");
            }

            let actuator = store
                .actuator(&id)
                .ok_or_else(|| CoreError::Internal("created actuator vanished".into()))?;
            Ok(CommandOutcome::Actuator(actuator))
        }

        Command::DeleteActuator { id } => {
            if let Err(e) = client.delete_actuator(id.as_str()).await {
                notifier.error("Could not delete actuator.");
                return Err(e.into());
            }
            store.actuators.remove(&id);
            Ok(CommandOutcome::Deleted(id))
        }

        Command::RefreshActuatorState { id } => {
            let state = platform.refresh_actuator_state(&id).await?;
            Ok(CommandOutcome::State(state))
        }

        Command::RefreshAllActuatorStates => {
            platform.refresh_all_actuator_states().await?;
            Ok(CommandOutcome::Ok)
        }

        // ── Adapters ─────────────────────────────────────────────
        Command::CreateAdapter(req) => {
            let dto = convert::adapter_create_dto(&req);
            let mut created = match client.create_adapter(&dto).await {
                Ok(d) => Adapter::from(d),
                Err(e) => {
                    notifier.error("Could not create adapter.");
                    return Err(e.into());
                }
            };

            if let Some(preprocess) = platform.adapter_preprocess() {
                preprocess(&mut created);
            }

            let id = created.id.clone();
            store.adapters.upsert(created);
            let adapter = store
                .adapter(&id)
                .ok_or_else(|| CoreError::Internal("created adapter vanished".into()))?;
            Ok(CommandOutcome::Adapter(adapter))
        }

        Command::DeleteAdapter { id } => {
            if let Err(e) = client.delete_adapter(id.as_str()).await {
                notifier.error("Could not delete adapter.");
                return Err(e.into());
            }
            store.adapters.remove(&id);
            Ok(CommandOutcome::Deleted(id))
        }

        // ── Rule triggers ────────────────────────────────────────
        Command::CreateRuleTrigger(req) => {
            let dto = convert::trigger_create_dto(&req);
            let created = match client.create_rule_trigger(&dto).await {
                Ok(d) => RuleTrigger::from(d),
                Err(e) => {
                    notifier.error("Could not create rule trigger.");
                    return Err(e.into());
                }
            };

            let id = created.id.clone();
            store.rule_triggers.upsert(created);
            let trigger = store
                .rule_trigger(&id)
                .ok_or_else(|| CoreError::Internal("created trigger vanished".into()))?;
            Ok(CommandOutcome::RuleTrigger(trigger))
        }

        Command::DeleteRuleTrigger { id } => {
            if let Err(e) = client.delete_rule_trigger(id.as_str()).await {
                notifier.error("Could not delete rule trigger.");
                return Err(e.into());
            }
            store.rule_triggers.remove(&id);
            Ok(CommandOutcome::Deleted(id))
        }

        // ── Settings ─────────────────────────────────────────────
        Command::SaveSettings(settings) => {
            let dto = convert::settings_dto(&settings);
            if let Err(e) = client.save_settings(&dto).await {
                notifier.error("The settings could not be saved.");
                return Err(e.into());
            }
            store.settings.send_replace(Some(settings));
            notifier.success("The settings were saved successfully.");
            Ok(CommandOutcome::Ok)
        }
    }
}
