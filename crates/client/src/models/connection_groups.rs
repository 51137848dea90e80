//! Connection group models.

use serde::{Deserialize, Serialize};

use crate::models::{Attributes, Connection};

/// Identifier of the root connection group, the parent of all top-level
/// connections and groups. Pass it to
/// [`connection_group_tree`](crate::GuacamoleClient::connection_group_tree)
/// to fetch the full topology.
pub const ROOT_CONNECTION_GROUP: &str = "ROOT";

/// The kind of a connection group.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionGroupType {
    /// A purely hierarchical (folder-like) group.
    #[default]
    Organizational,
    /// A group that load-balances sessions across its child connections.
    Balancing,
}

/// An organizational or load-balancing group of connections.
///
/// `child_connections` and `child_connection_groups` are populated only by
/// the tree operation; plain reads return them empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionGroup {
    /// Server-assigned identifier. Leave `None` when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_identifier: Option<String>,
    #[serde(rename = "type")]
    pub group_type: ConnectionGroupType,
    /// Always serialized, `{}` when empty.
    #[serde(default)]
    pub attributes: Attributes,
    /// Read-only count of active sessions within this group.
    #[serde(default)]
    pub active_connections: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_connection_groups: Vec<ConnectionGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&ConnectionGroupType::Organizational).unwrap(),
            r#""ORGANIZATIONAL""#
        );
        assert_eq!(
            serde_json::to_string(&ConnectionGroupType::Balancing).unwrap(),
            r#""BALANCING""#
        );
    }

    #[test]
    fn test_deserialize_group() {
        let json = r#"{
            "identifier": "3",
            "name": "lab",
            "parentIdentifier": "ROOT",
            "type": "BALANCING",
            "attributes": {},
            "activeConnections": 0
        }"#;
        let group: ConnectionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.identifier.as_deref(), Some("3"));
        assert_eq!(group.group_type, ConnectionGroupType::Balancing);
        assert!(group.child_connections.is_empty());
        assert!(group.child_connection_groups.is_empty());
    }

    #[test]
    fn test_deserialize_tree_recurses() {
        let json = r#"{
            "identifier": "ROOT",
            "name": "ROOT",
            "type": "ORGANIZATIONAL",
            "childConnections": [
                {"identifier": "1", "name": "box-a", "protocol": "ssh", "attributes": {}}
            ],
            "childConnectionGroups": [
                {
                    "identifier": "2",
                    "name": "lab",
                    "type": "ORGANIZATIONAL",
                    "childConnectionGroups": [
                        {"identifier": "4", "name": "inner", "type": "BALANCING"}
                    ]
                }
            ]
        }"#;
        let tree: ConnectionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(tree.child_connections.len(), 1);
        assert_eq!(tree.child_connections[0].name, "box-a");
        assert_eq!(tree.child_connection_groups.len(), 1);
        let lab = &tree.child_connection_groups[0];
        assert_eq!(lab.name, "lab");
        assert_eq!(lab.child_connection_groups[0].name, "inner");
        assert_eq!(
            lab.child_connection_groups[0].group_type,
            ConnectionGroupType::Balancing
        );
    }

    #[test]
    fn test_serialize_new_group() {
        let group = ConnectionGroup {
            name: "lab".to_string(),
            parent_identifier: Some(ROOT_CONNECTION_GROUP.to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["type"], "ORGANIZATIONAL");
        assert_eq!(json["attributes"], serde_json::json!({}));
        assert!(json.get("childConnections").is_none());
    }
}
