use uuid::Uuid;

use crate::ports::NodeIdSource;

/// Random UUIDv4 node identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNodeId;

impl NodeIdSource for RandomNodeId {
    fn next_node_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_non_empty() {
        let a = RandomNodeId.next_node_id();
        let b = RandomNodeId.next_node_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
