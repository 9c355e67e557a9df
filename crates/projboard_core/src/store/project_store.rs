//! Project store and listener registry.
//!
//! # Responsibility
//! - Create projects with unique ids and apply status transitions.
//! - Notify listeners with post-mutation snapshots.
//!
//! # Invariants
//! - `add_project` always notifies; `move_project` notifies only when the
//!   status actually changes.
//! - Lookup misses and unchanged moves are silent no-ops.
//! - Mutation is committed before listeners run, so a failing listener can
//!   leave a stale render but never corrupt the collection.

use crate::config::ListenerFailurePolicy;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Receiver of store change notifications.
///
/// Filtering by status is the listener's job; the store always delivers the
/// whole collection.
pub trait ProjectListener {
    fn on_projects_changed(&mut self, projects: &[Project]) -> Result<(), ListenerError>;
}

impl<F> ProjectListener for F
where
    F: FnMut(&[Project]) -> Result<(), ListenerError>,
{
    fn on_projects_changed(&mut self, projects: &[Project]) -> Result<(), ListenerError> {
        self(projects)
    }
}

/// Handle returned by listener registration; used for disposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Result of a status transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified.
    Moved,
    /// Project already had the requested status.
    Unchanged,
    /// No project with the given id.
    NotFound,
}

/// Failure reported by, or while reaching, one listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// The listener was already borrowed, usually by a reentrant call chain.
    Busy,
    /// The listener could not apply the snapshot.
    Failed(String),
}

impl ListenerError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Busy => write!(f, "listener is busy"),
            Self::Failed(message) => write!(f, "listener failed: {message}"),
        }
    }
}

impl Error for ListenerError {}

/// Store-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A mutation was requested while a notification was in flight.
    Reentrant,
    /// A listener failed under `ListenerFailurePolicy::FailFast`.
    Listener {
        subscription: SubscriptionId,
        source: ListenerError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reentrant => write!(f, "store mutation requested during notification"),
            Self::Listener {
                subscription,
                source,
            } => write!(f, "notification aborted at {subscription}: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Reentrant => None,
            Self::Listener { source, .. } => Some(source),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

struct Subscription {
    id: SubscriptionId,
    listener: Rc<RefCell<dyn ProjectListener>>,
}

impl Subscription {
    fn same_listener(&self, identity: *const ()) -> bool {
        Rc::as_ptr(&self.listener) as *const () == identity
    }
}

/// Single source of truth for the project collection.
pub struct ProjectStore {
    projects: Vec<Project>,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
    failure_policy: ListenerFailurePolicy,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(ListenerFailurePolicy::default())
    }
}

impl ProjectStore {
    pub fn new(failure_policy: ListenerFailurePolicy) -> Self {
        Self {
            projects: Vec::new(),
            subscriptions: Vec::new(),
            next_subscription: 0,
            failure_policy,
        }
    }

    /// Registers a listener for every future change.
    ///
    /// The listener is not invoked with the current state.
    pub fn add_listener<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Project]) -> Result<(), ListenerError> + 'static,
    {
        self.push_subscription(Rc::new(RefCell::new(listener)))
    }

    /// Registers a listener shared with its owner (typically a view).
    ///
    /// Registering the same instance twice returns the existing handle, so a
    /// listener is never notified twice for one change.
    pub fn add_shared_listener<L>(&mut self, listener: Rc<RefCell<L>>) -> SubscriptionId
    where
        L: ProjectListener + 'static,
    {
        let identity = Rc::as_ptr(&listener) as *const ();
        if let Some(existing) = self
            .subscriptions
            .iter()
            .find(|subscription| subscription.same_listener(identity))
        {
            debug!(
                "event=listener_register module=store status=noop reason=duplicate subscription={}",
                existing.id
            );
            return existing.id;
        }
        self.push_subscription(listener)
    }

    /// Disposes one subscription. Returns `false` for unknown handles.
    pub fn remove_listener(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        let removed = self.subscriptions.len() != before;
        debug!(
            "event=listener_remove module=store status={} subscription={id}",
            if removed { "ok" } else { "noop" }
        );
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Creates an active project and notifies every listener.
    ///
    /// # Errors
    /// - Returns `StoreError::Listener` only under `FailFast`; the project is
    ///   stored regardless.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> StoreResult<ProjectId> {
        let (id, notified) = self.commit_project(title, description, people);
        notified?;
        Ok(id)
    }

    /// Like `add_project`, but hands back the id of the stored project next
    /// to the notification result, so callers can tell "stored, listener
    /// failed" apart from "not stored".
    pub fn commit_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> (ProjectId, StoreResult<()>) {
        let mut project = Project::new(title, description, people);
        while self.get(&project.id).is_some() {
            project.id = ProjectId::generate();
        }
        let id = project.id.clone();
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok project_id={id} total={}",
            self.projects.len()
        );
        (id, self.notify())
    }

    /// Moves a project to `new_status`, notifying only on an actual change.
    pub fn move_project(
        &mut self,
        id: &ProjectId,
        new_status: ProjectStatus,
    ) -> StoreResult<MoveOutcome> {
        let Some(project) = self.projects.iter_mut().find(|project| &project.id == id) else {
            debug!("event=project_move module=store status=noop reason=not_found project_id={id}");
            return Ok(MoveOutcome::NotFound);
        };
        if project.status == new_status {
            debug!(
                "event=project_move module=store status=noop reason=unchanged project_id={id} to={new_status}"
            );
            return Ok(MoveOutcome::Unchanged);
        }

        let from = project.status;
        project.status = new_status;
        info!("event=project_move module=store status=ok project_id={id} from={from} to={new_status}");
        self.notify()?;
        Ok(MoveOutcome::Moved)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    /// Projects with `status`, in creation order.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn push_subscription(&mut self, listener: Rc<RefCell<dyn ProjectListener>>) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscriptions.push(Subscription { id, listener });
        debug!("event=listener_register module=store status=ok subscription={id}");
        id
    }

    fn notify(&self) -> StoreResult<()> {
        for subscription in &self.subscriptions {
            let result = match subscription.listener.try_borrow_mut() {
                Ok(mut listener) => listener.on_projects_changed(&self.projects),
                Err(_) => Err(ListenerError::Busy),
            };
            let Err(err) = result else {
                continue;
            };

            warn!(
                "event=listener_failed module=store status=error subscription={} error={}",
                subscription.id, err
            );
            if self.failure_policy == ListenerFailurePolicy::FailFast {
                return Err(StoreError::Listener {
                    subscription: subscription.id,
                    source: err,
                });
            }
        }
        Ok(())
    }
}
