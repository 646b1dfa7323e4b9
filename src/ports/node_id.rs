/// Source of cluster node identifiers.
///
/// Every call must return a fresh, non-empty token without coordinating
/// with other hosts.
pub trait NodeIdSource {
    fn next_node_id(&self) -> String;
}
