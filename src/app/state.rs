//! Application state and view management

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::SystemTime;

use futures::channel::mpsc;
use futures::task::{LocalSpawn, LocalSpawnExt, SpawnError};
use tracing::{debug, warn};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::model::Notification;
use crate::p4::{FileSpec, P4Executor};
use crate::timeline::{
    CommandDescriptor, DocumentChange, HistoryTreeController, Subscription, TreeDataProvider,
    commands,
};
use crate::ui::views::{DiffView, TimelineView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Timeline,
    Diff,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// History of the focused file, shared with the focus binding task
    pub timeline: Rc<HistoryTreeController<P4Executor>>,
    /// p4 executor for commands bound to nodes
    pub p4: P4Executor,
    /// Focus events consumed by the timeline binding
    focus_tx: mpsc::UnboundedSender<Option<PathBuf>>,
    /// Set by the timeline's change signal, cleared by [`App::sync`]
    tree_dirty: Rc<Cell<bool>>,
    _tree_changed: Subscription,
    /// Files the user can focus, in `]` order
    pub files: Vec<PathBuf>,
    /// Index of the focused file in `files`
    pub focus_index: Option<usize>,
    /// Modification time of the focused file when last checked
    focused_mtime: Option<SystemTime>,
    /// Timeline view state
    pub timeline_view: TimelineView,
    /// Diff view state (created on demand)
    pub diff_view: Option<DiffView>,
    /// Path prompt (open while Some)
    pub prompt: Option<TextArea<'static>>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display
    pub notification: Option<Notification>,
    /// Last known frame height (updated during render)
    pub(crate) last_frame_height: Cell<u16>,
}

impl App {
    /// Construct the app and spawn its focus binding on `spawner`
    ///
    /// The first configured file (if any) is focused right away.
    pub fn new(config: &Config, spawner: &impl LocalSpawn) -> Result<Self, SpawnError> {
        let p4 = P4Executor::with_settings(&config.p4);
        let timeline = Rc::new(HistoryTreeController::new(p4.clone(), config.timeline));

        let (focus_tx, focus_rx) = mpsc::unbounded();
        spawner.spawn_local(timeline.bind(focus_rx))?;

        let tree_dirty = Rc::new(Cell::new(false));
        let dirty = Rc::clone(&tree_dirty);
        let tree_changed = timeline.subscribe(Box::new(move || dirty.set(true)));

        let mut app = Self {
            running: true,
            current_view: View::Timeline,
            timeline,
            p4,
            focus_tx,
            tree_dirty,
            _tree_changed: tree_changed,
            files: config.files.clone(),
            focus_index: None,
            focused_mtime: None,
            timeline_view: TimelineView::new(),
            diff_view: None,
            prompt: None,
            error_message: None,
            notification: None,
            last_frame_height: Cell::new(24),
        };

        if !app.files.is_empty() {
            app.focus(0);
        }

        Ok(app)
    }

    /// Pick up timeline changes made by the binding task
    ///
    /// Call after driving the local executor, before drawing.
    pub fn sync(&mut self) {
        if self.tree_dirty.replace(false) {
            self.timeline_view.reload(&*self.timeline);
            self.timeline_view.title = self.timeline.tracked_file().map(|f| f.to_string());
        }

        self.check_document_change();

        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    /// Report an on-disk edit of the focused file to the timeline
    ///
    /// An edit is a change of modification time since the last check. Depot
    /// paths and unreadable files have no modification time and never report.
    pub(crate) fn check_document_change(&mut self) {
        let Some(path) = self.focus_index.and_then(|i| self.files.get(i)).cloned() else {
            return;
        };
        let mtime = modified_time(&path);
        if mtime.is_none() || mtime == self.focused_mtime {
            return;
        }
        let previous = std::mem::replace(&mut self.focused_mtime, mtime);
        if previous.is_none() {
            return;
        }

        let change = DocumentChange { file: path };
        if let Err(e) = self.timeline.on_document_changed(&change) {
            warn!(file = %change.file.display(), error = %e, "document change not handled");
            self.notification = Some(Notification::warning(e.to_string()));
        }
    }

    /// Focus `files[index]` and ask the timeline to follow it
    pub(crate) fn focus(&mut self, index: usize) {
        let Some(path) = self.files.get(index).cloned() else {
            return;
        };
        self.focus_index = Some(index);
        self.focused_mtime = modified_time(&path);
        self.notification = Some(Notification::info(format!(
            "Loading history of {}",
            FileSpec::from_path(&path).file_name()
        )));
        self.send_focus(Some(path));
    }

    /// Focus the next (`step = 1`) or previous (`step = -1`) file, wrapping
    pub(crate) fn cycle_focus(&mut self, step: isize) {
        let count = self.files.len();
        if count == 0 {
            self.notification = Some(Notification::warning("No files to focus (o to open)"));
            return;
        }
        let next = match self.focus_index {
            Some(current) => (current as isize + step).rem_euclid(count as isize) as usize,
            None => 0,
        };
        self.focus(next);
    }

    /// Focus a path typed into the prompt, adding it to the file list
    pub(crate) fn open_file(&mut self, path: PathBuf) {
        let index = match self.files.iter().position(|f| *f == path) {
            Some(index) => index,
            None => {
                self.files.push(path);
                self.files.len() - 1
            }
        };
        self.focus(index);
    }

    /// Re-query the focused file
    pub(crate) fn refresh(&mut self) {
        match self.focus_index {
            Some(index) => self.focus(index),
            None => self.notification = Some(Notification::warning("Nothing focused")),
        }
    }

    fn send_focus(&mut self, file: Option<PathBuf>) {
        debug!(file = ?file, "focus changed");
        if self.focus_tx.unbounded_send(file).is_err() {
            self.error_message = Some("Timeline is no longer following focus".to_string());
        }
    }

    /// Run a command bound to a timeline node
    pub(crate) fn run_command(&mut self, command: CommandDescriptor) {
        match command.id {
            commands::DIFF_REVISIONS => match command.arguments.as_slice() {
                [left, right] => match self.p4.compare(left, right) {
                    Ok(content) => {
                        self.diff_view = Some(DiffView::new(content));
                        self.current_view = View::Diff;
                    }
                    Err(e) => {
                        self.error_message = Some(format!("p4 diff2 error: {}", e));
                    }
                },
                args => {
                    warn!(count = args.len(), "diff command needs two revisions");
                }
            },
            other => {
                warn!(command = other, "unknown command");
                self.notification = Some(Notification::warning(format!(
                    "Unknown command: {}",
                    other
                )));
            }
        }
    }

    /// Leave the diff view
    pub(crate) fn go_back(&mut self) {
        self.diff_view = None;
        self.current_view = View::Timeline;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.timeline.dispose();
        self.running = false;
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::executor::LocalPool;
    use tempfile::TempDir;

    use super::*;
    use crate::config::{DocumentChangePolicy, P4Settings};
    use crate::model::NotificationKind;

    fn create_test_config(files: &[&str]) -> Config {
        Config {
            files: files.iter().map(PathBuf::from).collect(),
            p4: P4Settings {
                command: PathBuf::from("/nonexistent/p4tl-test/p4"),
                ..P4Settings::default()
            },
            ..Config::default()
        }
    }

    fn create_test_app(files: &[&str]) -> (App, LocalPool) {
        let pool = LocalPool::new();
        let app = App::new(&create_test_config(files), &pool.spawner())
            .expect("spawn focus binding");
        (app, pool)
    }

    #[test]
    fn test_new_focuses_first_file() {
        let (app, _pool) = create_test_app(&["/ws/a.c", "/ws/b.c"]);
        assert_eq!(app.focus_index, Some(0));
        assert!(app.notification.is_some());
        assert_eq!(app.current_view, View::Timeline);
    }

    #[test]
    fn test_new_without_files() {
        let (app, _pool) = create_test_app(&[]);
        assert_eq!(app.focus_index, None);
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let (mut app, _pool) = create_test_app(&["/ws/a.c", "/ws/b.c", "/ws/c.c"]);
        app.cycle_focus(1);
        assert_eq!(app.focus_index, Some(1));
        app.cycle_focus(1);
        app.cycle_focus(1);
        assert_eq!(app.focus_index, Some(0));
        app.cycle_focus(-1);
        assert_eq!(app.focus_index, Some(2));
    }

    #[test]
    fn test_cycle_focus_without_files_warns() {
        let (mut app, _pool) = create_test_app(&[]);
        app.cycle_focus(1);
        assert_eq!(app.focus_index, None);
        assert!(app.notification.is_some());
    }

    #[test]
    fn test_open_file_adds_once() {
        let (mut app, _pool) = create_test_app(&["/ws/a.c"]);
        app.open_file(PathBuf::from("/ws/b.c"));
        assert_eq!(app.files.len(), 2);
        assert_eq!(app.focus_index, Some(1));

        app.open_file(PathBuf::from("/ws/a.c"));
        assert_eq!(app.files.len(), 2);
        assert_eq!(app.focus_index, Some(0));
    }

    #[test]
    fn test_failed_query_keeps_empty_timeline() {
        let (mut app, mut pool) = create_test_app(&["/ws/a.c"]);
        pool.run_until_stalled();
        app.sync();
        assert!(!app.timeline.is_loaded());
        assert!(app.timeline_view.rows.is_empty());
    }

    #[test]
    fn test_diff_command_with_missing_p4_sets_error() {
        let (mut app, _pool) = create_test_app(&[]);
        let file = FileSpec::from_path(Path::new("/ws/a.c"));
        app.run_command(CommandDescriptor {
            id: commands::DIFF_REVISIONS,
            title: "Compare".to_string(),
            arguments: vec![file.at_revision("1"), file.at_revision("2")],
        });
        assert!(app.error_message.is_some());
        assert_eq!(app.current_view, View::Timeline);
        assert!(app.diff_view.is_none());
    }

    #[test]
    fn test_unknown_command_warns() {
        let (mut app, _pool) = create_test_app(&[]);
        app.run_command(CommandDescriptor {
            id: "p4tl.unknown",
            title: "Unknown".to_string(),
            arguments: vec![],
        });
        assert!(app.notification.is_some());
        assert!(app.error_message.is_none());
    }

    fn touch(path: &Path, secs: u64) {
        let file = fs::File::options().write(true).open(path).expect("open file");
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .expect("set mtime");
    }

    fn create_watched_app(policy: DocumentChangePolicy) -> (App, LocalPool, TempDir, PathBuf) {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("a.c");
        fs::write(&path, "int main;\n").expect("write file");
        touch(&path, 1_000);

        let mut config = create_test_config(&[]);
        config.files = vec![path.clone()];
        config.timeline.document_changes = policy;

        let pool = LocalPool::new();
        let mut app = App::new(&config, &pool.spawner()).expect("spawn focus binding");
        app.notification = None;
        (app, pool, dir, path)
    }

    #[test]
    fn test_unchanged_file_reports_nothing() {
        let (mut app, _pool, _dir, _path) = create_watched_app(DocumentChangePolicy::Reject);
        app.check_document_change();
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_edited_file_rejected_by_policy_warns() {
        let (mut app, _pool, _dir, path) = create_watched_app(DocumentChangePolicy::Reject);
        touch(&path, 2_000);

        app.check_document_change();
        let notification = app.notification.take().expect("warning");
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert!(notification.message.contains("document change tracking"));

        // Reported once per edit
        app.check_document_change();
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_edited_file_ignored_by_default() {
        let (mut app, _pool, _dir, path) = create_watched_app(DocumentChangePolicy::Ignore);
        touch(&path, 2_000);

        app.check_document_change();
        assert!(app.notification.is_none());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_quit_disposes_binding() {
        let (mut app, mut pool) = create_test_app(&["/ws/a.c"]);
        app.quit();
        assert!(!app.running);

        // Binding is aborted; further focus changes are not delivered
        pool.run_until_stalled();
        app.cycle_focus(1);
        pool.run_until_stalled();
        assert!(app.error_message.is_some());
    }
}
