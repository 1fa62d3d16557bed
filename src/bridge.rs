//! Launch description for the rosbridge websocket server and rosapi

use crate::actions::{DeclareArgument, Node, Parameter};
use crate::description::{LaunchDescription, LaunchEntity};
use crate::substitution::Expr;

/// Name of the overridable listen-port argument
pub const PORT_ARG: &str = "port";

/// Default websocket listen port
pub const DEFAULT_PORT: &str = "9090";

/// Build the launch description: the port argument, the websocket bridge
/// node, and the rosapi introspection node, in that order.
///
/// Pure construction. The port parameter stays deferred until the
/// description is resolved against command-line overrides; everything else
/// is a fixed literal.
pub fn description() -> LaunchDescription {
    let port_arg = DeclareArgument {
        name: PORT_ARG.to_string(),
        default: Some(DEFAULT_PORT.to_string()),
        description: Some("Port for rosbridge websocket server".to_string()),
    };

    let rosbridge = Node {
        package: "rosbridge_server".to_string(),
        executable: "rosbridge_websocket".to_string(),
        name: Some("rosbridge_websocket".to_string()),
        output: Some("screen".to_string()),
        parameters: vec![
            Parameter::new(PORT_ARG, Expr::configuration(PORT_ARG)),
            Parameter::new("address", "0.0.0.0"),
            Parameter::new("use_compression", false),
            Parameter::new("max_message_size", 10000000i64),
            Parameter::new("send_action_goals_in_new_thread", true),
            Parameter::new("call_services_in_new_thread", true),
            Parameter::new("default_call_service_timeout", 5.0),
        ],
    };

    let rosapi = Node {
        package: "rosapi".to_string(),
        executable: "rosapi_node".to_string(),
        name: Some("rosapi".to_string()),
        output: Some("screen".to_string()),
        parameters: vec![],
    };

    LaunchDescription::new(vec![
        LaunchEntity::Argument(port_arg),
        LaunchEntity::Node(rosbridge),
        LaunchEntity::Node(rosapi),
    ])
}
