//! Mutation dispatcher: one worker task owning the HTTP client.
//!
//! Commands arrive on a channel and are processed strictly one at a time,
//! so the refetch that follows a successful mutation can never overlap the
//! mutation itself, and a failed mutation never triggers a refetch. Each
//! remote call is attempted exactly once per user action.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::client::{DrinkService, DrinksApi};
use crate::api::error::ApiError;
use crate::api::types::{Drink, DrinkDraft, DrinkId};
use crate::config::ApiConfig;

/// Bounded queue of pending remote operations. User actions are rare; this
/// never fills in practice, and `try_send` failure is surfaced as an error.
const COMMAND_BUFFER: usize = 32;

/// A remote operation requested by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// Read the full collection and replace the local one.
    Refresh,
    /// Insert a new record, then refetch.
    Create(DrinkDraft),
    /// Replace the fields of an existing record, then refetch.
    Update { id: DrinkId, draft: DrinkDraft },
    /// Remove a record, then refetch. Confirmation already happened.
    Delete(DrinkId),
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Outcome of a remote operation, delivered back to the view's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    Loaded(Vec<Drink>),
    LoadFailed(String),
    Created,
    CreateFailed(String),
    Updated,
    UpdateFailed(String),
    Deleted,
    DeleteFailed(String),
}

/// Start the worker on its own thread with a single-threaded runtime.
///
/// Returns the command sender; events flow back through `on_event` (the
/// runtime wires this to the UI event channel).
pub fn spawn(
    config: &ApiConfig,
    on_event: impl Fn(ApiEvent) + Send + 'static,
) -> Result<ApiCommandSender, ApiError> {
    let api = DrinksApi::new(config)?;
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!(error = %err, "failed to start api worker runtime");
                return;
            }
        };
        runtime.block_on(run(&api, rx, &on_event));
    });

    Ok(tx)
}

async fn run<S, F>(api: &S, mut commands: mpsc::Receiver<ApiCommand>, emit: &F)
where
    S: DrinkService,
    F: Fn(ApiEvent),
{
    while let Some(command) = commands.recv().await {
        handle(api, command, emit).await;
    }
    debug!("api worker channel closed, stopping");
}

async fn handle<S, F>(api: &S, command: ApiCommand, emit: &F)
where
    S: DrinkService,
    F: Fn(ApiEvent),
{
    match command {
        ApiCommand::Refresh => refresh(api, emit).await,

        ApiCommand::Create(draft) => match api.create(&draft).await {
            Ok(()) => {
                debug!(title = %draft.title, "drink created");
                emit(ApiEvent::Created);
                refresh(api, emit).await;
            }
            Err(err) => {
                warn!(error = %err, "create failed");
                emit(ApiEvent::CreateFailed(err.to_string()));
            }
        },

        ApiCommand::Update { id, draft } => match api.update(&id, &draft).await {
            Ok(()) => {
                debug!(%id, "drink updated");
                emit(ApiEvent::Updated);
                refresh(api, emit).await;
            }
            Err(err) => {
                warn!(%id, error = %err, "update failed");
                emit(ApiEvent::UpdateFailed(err.to_string()));
            }
        },

        ApiCommand::Delete(id) => match api.delete(&id).await {
            Ok(()) => {
                debug!(%id, "drink deleted");
                emit(ApiEvent::Deleted);
                refresh(api, emit).await;
            }
            Err(err) => {
                // The record is assumed to still exist; removal only ever
                // happens via a successful refetch.
                warn!(%id, error = %err, "delete failed");
                emit(ApiEvent::DeleteFailed(err.to_string()));
            }
        },
    }
}

async fn refresh<S, F>(api: &S, emit: &F)
where
    S: DrinkService,
    F: Fn(ApiEvent),
{
    match api.list().await {
        Ok(drinks) => emit(ApiEvent::Loaded(drinks)),
        Err(err) => {
            warn!(error = %err, "collection read failed");
            emit(ApiEvent::LoadFailed(err.to_string()));
        }
    }
}
