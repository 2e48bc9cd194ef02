//! Tree data provider capability

use super::{DisplayNode, Subscription};

/// What a tree widget needs from its data source
///
/// The widget asks for the roots, lazily asks for a node's children when the
/// node is expanded, and re-queries after the change signal fires.
pub trait TreeDataProvider {
    fn root_nodes(&self) -> Vec<DisplayNode>;

    fn children(&self, node: &DisplayNode) -> Vec<DisplayNode>;

    /// Listen for "data changed" notifications
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription;
}
