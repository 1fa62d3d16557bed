//! Command-line and record generation

use crate::actions::Node;
use crate::error::SubstitutionError;
use crate::record::types::NodeRecord;
use crate::substitution::LaunchContext;

pub struct CommandGenerator;

impl CommandGenerator {
    pub fn generate_node_record(
        node: &Node,
        context: &LaunchContext,
    ) -> Result<NodeRecord, SubstitutionError> {
        let cmd = Self::generate_node_command(node, context)?;

        let name = node.name.clone().or_else(|| Some(node.executable.clone()));

        let params: Vec<(String, String)> = node
            .parameters
            .iter()
            .map(|p| Ok((p.name.clone(), p.render(context)?)))
            .collect::<Result<Vec<_>, SubstitutionError>>()?;

        Ok(NodeRecord {
            executable: node.executable.clone(),
            package: node.package.clone(),
            name,
            output: node.output.clone(),
            params,
            cmd,
        })
    }

    pub fn generate_node_command(
        node: &Node,
        context: &LaunchContext,
    ) -> Result<Vec<String>, SubstitutionError> {
        let mut cmd = Vec::new();

        // 1. Executable path
        cmd.push(Self::resolve_executable_path(&node.package, &node.executable));

        // 2. ROS args delimiter
        cmd.push("--ros-args".to_string());

        // 3. Node name
        let node_name = node.name.clone().unwrap_or_else(|| node.executable.clone());
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node_name));

        // 4. Parameters
        for param in &node.parameters {
            let value = param.render(context)?;
            cmd.push("-p".to_string());
            cmd.push(format!("{}:={}", param.name, value));
        }

        Ok(cmd)
    }

    /// Path where a distro install places a package's node executables.
    /// No existence check: a missing executable is the launch runtime's
    /// failure to report, not ours.
    fn resolve_executable_path(package: &str, executable: &str) -> String {
        let distro = std::env::var("ROS_DISTRO").unwrap_or_else(|_| "humble".to_string());
        format!("/opt/ros/{}/lib/{}/{}", distro, package, executable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Parameter;
    use crate::substitution::Expr;

    fn make_node(parameters: Vec<Parameter>) -> Node {
        Node {
            package: "rosbridge_server".to_string(),
            executable: "rosbridge_websocket".to_string(),
            name: None,
            output: None,
            parameters,
        }
    }

    #[test]
    fn test_generate_simple_command() {
        let node = make_node(vec![]);
        let context = LaunchContext::new();
        let cmd = CommandGenerator::generate_node_command(&node, &context).unwrap();

        assert!(cmd[0].starts_with("/opt/ros/"));
        assert!(cmd[0].ends_with("/lib/rosbridge_server/rosbridge_websocket"));
        assert_eq!(cmd[1], "--ros-args");
        assert_eq!(cmd[2], "-r");
        assert_eq!(cmd[3], "__node:=rosbridge_websocket");
    }

    #[test]
    fn test_generate_command_with_params() {
        let node = make_node(vec![Parameter::new("default_call_service_timeout", 5.0)]);
        let context = LaunchContext::new();
        let cmd = CommandGenerator::generate_node_command(&node, &context).unwrap();

        assert!(cmd.contains(&"-p".to_string()));
        assert!(cmd.contains(&"default_call_service_timeout:=5.0".to_string()));
    }

    #[test]
    fn test_generate_command_with_deferred_param() {
        let node = make_node(vec![Parameter::new("port", Expr::configuration("port"))]);

        let mut context = LaunchContext::new();
        context.set_configuration("port".to_string(), "9090".to_string());
        let cmd = CommandGenerator::generate_node_command(&node, &context).unwrap();
        assert!(cmd.contains(&"port:=9090".to_string()));
    }

    #[test]
    fn test_deferred_param_requires_configuration() {
        let node = make_node(vec![Parameter::new("port", Expr::configuration("port"))]);

        let context = LaunchContext::new();
        match CommandGenerator::generate_node_command(&node, &context) {
            Err(SubstitutionError::UndefinedConfiguration(name)) => assert_eq!(name, "port"),
            other => panic!("Expected UndefinedConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_record_name_falls_back_to_executable() {
        let node = make_node(vec![]);
        let context = LaunchContext::new();
        let record = CommandGenerator::generate_node_record(&node, &context).unwrap();

        assert_eq!(record.name, Some("rosbridge_websocket".to_string()));
        assert_eq!(record.package, "rosbridge_server");
        assert!(record.params.is_empty());
    }

    #[test]
    fn test_record_params_resolved_in_order() {
        let node = make_node(vec![
            Parameter::new("port", Expr::configuration("port")),
            Parameter::new("address", "0.0.0.0"),
            Parameter::new("use_compression", false),
        ]);

        let mut context = LaunchContext::new();
        context.set_configuration("port".to_string(), "8080".to_string());
        let record = CommandGenerator::generate_node_record(&node, &context).unwrap();

        assert_eq!(
            record.params,
            vec![
                ("port".to_string(), "8080".to_string()),
                ("address".to_string(), "0.0.0.0".to_string()),
                ("use_compression".to_string(), "false".to_string()),
            ]
        );
    }
}
