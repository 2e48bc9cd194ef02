//! History tree controller
//!
//! Holds the tracked file and its revisions, refreshes them when focus
//! changes, and answers the tree widget's queries through
//! [`RevisionPresenter`].
//!
//! State is either empty (nothing tracked yet) or loaded. It only changes on
//! a successful, non-empty history query; failed or empty queries leave the
//! current timeline on screen. Refreshes are never cancelled: overlapping
//! queries each resolve on their own and [`RefreshPolicy`] decides whether a
//! late, older result may still overwrite a newer one.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use futures::{FutureExt, Stream, StreamExt};
use tracing::{debug, info};

use super::node::{DisplayNode, HistoryItem};
use super::presenter::RevisionPresenter;
use super::provider::TreeDataProvider;
use super::signal::{ChangeSignal, Subscription};
use super::{DocumentChange, TimelineError};
use crate::config::{DocumentChangePolicy, RefreshPolicy, TimelineConfig};
use crate::model::RevisionRecord;
use crate::p4::{FileSpec, HistoryOptions, HistoryQuery};

/// The file under observation and its history, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub file: FileSpec,
    pub revisions: Vec<Rc<RevisionRecord>>,
}

/// Stateful coordinator between focus changes, the history query and the tree
#[derive(Debug)]
pub struct HistoryTreeController<Q> {
    query: Q,
    config: TimelineConfig,
    state: RefCell<Option<TrackedFile>>,
    /// Stamp of the most recently issued query
    issued: Cell<u64>,
    /// Stamp of the query whose result is currently shown
    applied: Cell<u64>,
    changed: ChangeSignal,
    /// Focus stream binding, aborted on dispose
    binding: RefCell<Option<AbortHandle>>,
}

impl<Q: HistoryQuery> HistoryTreeController<Q> {
    pub fn new(query: Q, config: TimelineConfig) -> Self {
        Self {
            query,
            config,
            state: RefCell::new(None),
            issued: Cell::new(0),
            applied: Cell::new(0),
            changed: ChangeSignal::new(),
            binding: RefCell::new(None),
        }
    }

    /// Currently tracked file, if any
    pub fn tracked_file(&self) -> Option<FileSpec> {
        self.state.borrow().as_ref().map(|tracked| tracked.file.clone())
    }

    /// Snapshot of the current state
    pub fn tracked(&self) -> Option<TrackedFile> {
        self.state.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Refresh the timeline for a newly focused file
    ///
    /// `None` (nothing focused) is a no-op. The file is tracked by its
    /// revision-less identity and queried without following branches.
    pub async fn on_focus_changed(&self, file: Option<&Path>) {
        let Some(path) = file else {
            return;
        };
        let spec = FileSpec::from_path(path);

        let stamp = self.issued.get() + 1;
        self.issued.set(stamp);

        let options = HistoryOptions {
            follow_branches: false,
        };
        let revisions = match self.query.file_history(&spec, options).await {
            Ok(revisions) => revisions,
            Err(e) => {
                debug!(file = %spec, error = %e, "history query failed, keeping current timeline");
                return;
            }
        };

        if revisions.is_empty() {
            debug!(file = %spec, "no history, keeping current timeline");
            return;
        }

        if self.config.refresh_policy == RefreshPolicy::LatestRequest
            && stamp < self.applied.get()
        {
            debug!(file = %spec, stamp, applied = self.applied.get(), "discarding stale history");
            return;
        }

        info!(file = %spec, revisions = revisions.len(), "timeline updated");
        self.applied.set(stamp);
        *self.state.borrow_mut() = Some(TrackedFile {
            file: spec,
            revisions: revisions.into_iter().map(Rc::new).collect(),
        });
        self.changed.fire();
    }

    /// React to a document edit
    ///
    /// Live edits do not affect history, so by default this does nothing.
    /// With [`DocumentChangePolicy::Reject`] it reports the call as
    /// unsupported.
    pub fn on_document_changed(&self, change: &DocumentChange) -> Result<(), TimelineError> {
        match self.config.document_changes {
            DocumentChangePolicy::Ignore => Ok(()),
            DocumentChangePolicy::Reject => {
                debug!(file = %change.file.display(), "rejecting document change");
                Err(TimelineError::UnsupportedOperation("document change tracking"))
            }
        }
    }

    /// Stop following focus and drop every change listener
    pub fn dispose(&self) {
        if let Some(handle) = self.binding.borrow_mut().take() {
            handle.abort();
        }
        self.changed.clear();
    }
}

impl<Q: HistoryQuery + 'static> HistoryTreeController<Q> {
    /// Follow a stream of focus changes
    ///
    /// Returns the future the host must drive (e.g. spawn on a local
    /// executor). Each event starts a refresh immediately, without waiting
    /// for or cancelling earlier ones. Binding again replaces the previous
    /// binding; [`dispose`](Self::dispose) ends it.
    pub fn bind<S>(self: &Rc<Self>, focus: S) -> impl Future<Output = ()> + use<Q, S>
    where
        S: Stream<Item = Option<PathBuf>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.binding.borrow_mut().replace(handle) {
            previous.abort();
        }

        let controller = Rc::clone(self);
        let refreshes = focus.for_each_concurrent(None, move |file| {
            let controller = Rc::clone(&controller);
            async move { controller.on_focus_changed(file.as_deref()).await }
        });

        Abortable::new(refreshes, registration).map(|_| ())
    }
}

impl<Q: HistoryQuery> TreeDataProvider for HistoryTreeController<Q> {
    fn root_nodes(&self) -> Vec<DisplayNode> {
        let state = self.state.borrow();
        let Some(tracked) = state.as_ref() else {
            return Vec::new();
        };

        tracked
            .revisions
            .iter()
            .map(|revision| RevisionPresenter::present_revision(revision, &tracked.file))
            .collect()
    }

    fn children(&self, node: &DisplayNode) -> Vec<DisplayNode> {
        match &node.source {
            HistoryItem::Integration(_) => Vec::new(),
            HistoryItem::Revision(revision) => revision
                .integrations
                .iter()
                .map(RevisionPresenter::present_integration)
                .collect(),
        }
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        self.changed.subscribe(listener)
    }
}
