//! Session-bus plumbing: connection setup, service-name listing, and
//! introspection-based discovery of child objects.

use zbus::Connection;
use zbus::fdo::{DBusProxy, IntrospectableProxy};
use zbus_xml::Node;

use crate::error::{Error, Result};

/// Open the session bus. One connection per process; callers thread it
/// through every remote call and let it drop at process exit.
pub async fn session_bus() -> Result<Connection> {
    Ok(Connection::session().await?)
}

/// Names currently registered on the bus, well-known and unique alike.
pub async fn list_service_names(conn: &Connection) -> Result<Vec<String>> {
    let proxy = DBusProxy::new(conn).await?;
    let names = proxy
        .list_names()
        .await
        .map_err(|e| Error::from_call("org.freedesktop.DBus", e.into()))?;
    Ok(names.into_iter().map(|name| name.to_string()).collect())
}

/// Immediate child node names of an introspection document, in document
/// order.
///
/// Elements other than `<node>` (interfaces, mostly) are skipped, and a
/// document with no children yields an empty list rather than an error.
pub fn child_nodes(xml: &str) -> Result<Vec<String>> {
    let root = Node::from_reader(xml.as_bytes())?;
    Ok(root
        .nodes()
        .into_iter()
        .filter_map(|node| node.name().map(str::to_owned))
        .collect())
}

/// Introspect `path` on `service` and return its child node names.
pub async fn introspect_children(
    conn: &Connection,
    service: &str,
    path: &str,
) -> Result<Vec<String>> {
    let proxy = IntrospectableProxy::builder(conn)
        .destination(service.to_owned())?
        .path(path.to_owned())?
        .build()
        .await?;
    let xml = proxy
        .introspect()
        .await
        .map_err(|e| Error::from_call(service, e.into()))?;
    child_nodes(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_nodes_empty_document() {
        let xml = "<node></node>";
        assert!(child_nodes(xml).unwrap().is_empty());
    }

    #[test]
    fn child_nodes_skips_interfaces_keeps_order() {
        let xml = r#"
            <node>
              <interface name="org.freedesktop.DBus.Introspectable">
                <method name="Introspect">
                  <arg name="xml_data" type="s" direction="out"/>
                </method>
              </interface>
              <node name="2"/>
              <interface name="org.freedesktop.DBus.Properties"/>
              <node name="1"/>
              <node name="5"/>
            </node>
        "#;
        assert_eq!(child_nodes(xml).unwrap(), vec!["2", "1", "5"]);
    }

    #[test]
    fn child_nodes_rejects_malformed_document() {
        let err = child_nodes("this is not an introspection document").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
