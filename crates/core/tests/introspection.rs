//! Discovery against real-shaped Konsole introspection documents.

use themeflip_core::bus::child_nodes;

// Trimmed from what a live Konsole returns for `/Windows`.
const KONSOLE_WINDOWS: &str = r#"<!DOCTYPE node PUBLIC "-//freedesktop//DTD D-BUS Object Introspection 1.0//EN"
 "http://www.freedesktop.org/standards/dbus/1.0/introspect.dtd">
<node>
  <interface name="org.freedesktop.DBus.Introspectable">
    <method name="Introspect">
      <arg name="xml_data" type="s" direction="out"/>
    </method>
  </interface>
  <interface name="org.freedesktop.DBus.Properties">
    <method name="Get">
      <arg name="interface_name" type="s" direction="in"/>
      <arg name="property_name" type="s" direction="in"/>
      <arg name="value" type="v" direction="out"/>
    </method>
  </interface>
  <node name="1"/>
</node>
"#;

const KONSOLE_SESSIONS: &str = r#"<node>
  <interface name="org.freedesktop.DBus.Introspectable">
    <method name="Introspect">
      <arg name="xml_data" type="s" direction="out"/>
    </method>
  </interface>
  <node name="1"/>
  <node name="2"/>
  <node name="4"/>
</node>
"#;

#[test]
fn windows_document_yields_the_single_window() {
    assert_eq!(child_nodes(KONSOLE_WINDOWS).unwrap(), vec!["1"]);
}

#[test]
fn sessions_document_yields_all_sessions_in_order() {
    assert_eq!(child_nodes(KONSOLE_SESSIONS).unwrap(), vec!["1", "2", "4"]);
}

#[test]
fn leaf_object_has_no_children() {
    let leaf = r#"<node>
      <interface name="org.kde.konsole.Session">
        <method name="profile">
          <arg type="s" direction="out"/>
        </method>
        <method name="setProfile">
          <arg name="profile" type="s" direction="in"/>
        </method>
      </interface>
    </node>"#;
    assert!(child_nodes(leaf).unwrap().is_empty());
}
