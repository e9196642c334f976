//! Store loop and the handles used to talk to it

use super::{Action, AppState, Effect, EffectContext};
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

/// Cloneable handle that enqueues actions for the store
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn dispatch(&self, action: impl Into<Action>) -> Result<()> {
        let action = action.into();
        trace!("Dispatching {}", action.kind());
        self.sender
            .send(action)
            .map_err(|e| Error::StoreClosed(format!("dropped {}", e.0.kind())))
    }
}

/// Read access to the latest published state
#[derive(Clone)]
pub struct StateReader {
    receiver: watch::Receiver<AppState>,
}

impl StateReader {
    /// Snapshot of the current state. Cheap: slices are `Arc`s.
    pub fn current(&self) -> AppState {
        self.receiver.borrow().clone()
    }

    /// Wait until a newer state is published
    pub async fn changed(&mut self) -> Result<()> {
        self.receiver
            .changed()
            .await
            .map_err(|_| Error::StoreClosed("state channel closed".to_string()))
    }
}

/// Owns the state and the registered effects until spawned
pub struct Store {
    state: watch::Sender<AppState>,
    sender: mpsc::UnboundedSender<Action>,
    receiver: mpsc::UnboundedReceiver<Action>,
    processed: broadcast::Sender<Action>,
    effects: Vec<Arc<dyn Effect>>,
}

impl Store {
    /// Create a store seeded with `initial`
    pub fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        let (sender, receiver) = mpsc::unbounded_channel();
        let (processed, _) = broadcast::channel(1000);
        Self {
            state,
            sender,
            receiver,
            processed,
            effects: Vec::new(),
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    pub fn state(&self) -> StateReader {
        StateReader {
            receiver: self.state.subscribe(),
        }
    }

    /// Receive every action after it has been reduced
    pub fn subscribe(&self) -> broadcast::Receiver<Action> {
        self.processed.subscribe()
    }

    /// Register an effect. Effects are notified in registration order.
    pub fn register_effect(&mut self, effect: Arc<dyn Effect>) {
        debug!("Registered effect {}", effect.name());
        self.effects.push(effect);
    }

    /// Reduce one action and start the effects observing it.
    ///
    /// This is the body of the loop started by [`Store::spawn`]. Calling it
    /// directly drives an unspawned store one action at a time, which is how
    /// tests and hosts with their own loop use it. Follow-up actions from
    /// effects still go to the dispatcher queue.
    pub fn process(&self, action: Action) {
        let next = {
            let current = self.state.borrow();
            current.reduce(&action)
        };
        self.state.send_replace(next.clone());
        debug!("Reduced {}", action.kind());

        // Nobody listening is fine
        let _ = self.processed.send(action.clone());

        for effect in &self.effects {
            if effect.observes(&action) {
                self.spawn_effect(Arc::clone(effect), action.clone(), next.clone());
            }
        }
    }

    fn spawn_effect(&self, effect: Arc<dyn Effect>, action: Action, snapshot: AppState) {
        let ctx = EffectContext {
            state: self.state(),
            snapshot,
        };
        let dispatcher = self.dispatcher();
        let trigger = action.kind();

        tokio::spawn(async move {
            match effect.handle(action, ctx).await {
                Ok(Some(next)) => {
                    debug!("Effect {} on {} produced {}", effect.name(), trigger, next.kind());
                    if let Err(e) = dispatcher.dispatch(next) {
                        error!("Effect {} could not dispatch: {}", effect.name(), e);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Effect {} failed on {}: {}", effect.name(), trigger, e);
                }
            }
        });
    }

    /// Run the store loop on the current runtime
    pub fn spawn(self) -> StoreHandle {
        let dispatcher = self.dispatcher();
        let state = self.state();
        let processed = self.processed.clone();
        let task = tokio::spawn(self.run());
        StoreHandle {
            dispatcher,
            state,
            processed,
            task,
        }
    }

    async fn run(mut self) {
        while let Some(action) = self.receiver.recv().await {
            self.process(action);
        }
        debug!("Store loop finished");
    }
}

/// Handle to a running store
pub struct StoreHandle {
    dispatcher: Dispatcher,
    state: StateReader,
    processed: broadcast::Sender<Action>,
    task: JoinHandle<()>,
}

impl StoreHandle {
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn state(&self) -> StateReader {
        self.state.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Action> {
        self.processed.subscribe()
    }

    pub fn dispatch(&self, action: impl Into<Action>) -> Result<()> {
        self.dispatcher.dispatch(action)
    }

    /// Stop the store loop. In-flight effect tasks are not cancelled.
    pub fn shutdown(self) {
        self.task.abort();
    }
}
