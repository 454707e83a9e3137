use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Help entry for one comment command.
pub struct PluginCommandHelp {
    pub usage: String,
    pub description: String,
    pub featured: bool,
    pub who_can_use: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Help metadata exposed to the hosting bot framework.
pub struct PluginHelp {
    pub name: String,
    pub description: String,
    pub commands: Vec<PluginCommandHelp>,
}

pub const PONY_PLUGIN_NAME: &str = "pony";

// The plugin takes no configuration, so no config section is rendered.
pub fn pony_plugin_help() -> PluginHelp {
    PluginHelp {
        name: PONY_PLUGIN_NAME.to_string(),
        description:
            "The pony plugin adds a pony image to an issue or PR in response to the `/pony` command."
                .to_string(),
        commands: vec![PluginCommandHelp {
            usage: "/(pony) [pony]".to_string(),
            description: "Add a little pony image to the issue or PR. A particular pony can optionally be named for a picture of that specific pony.".to_string(),
            featured: false,
            who_can_use: "Anyone".to_string(),
            examples: vec!["/pony".to_string(), "/pony Twilight Sparkle".to_string()],
        }],
    }
}

#[cfg(test)]
mod tests {
    use pony_github::pony_command_parser::{parse_pony_invocations, PONY_COMMAND_MAX_INVOCATIONS};

    use super::pony_plugin_help;

    #[test]
    fn unit_pony_plugin_help_lists_single_unfeatured_command() {
        let help = pony_plugin_help();
        assert_eq!(help.name, "pony");
        assert_eq!(help.commands.len(), 1);
        assert!(!help.commands[0].featured);
        assert_eq!(help.commands[0].who_can_use, "Anyone");
    }

    #[test]
    fn regression_pony_plugin_help_examples_are_recognized_by_parser() {
        for example in pony_plugin_help().commands[0].examples.iter() {
            assert_eq!(
                parse_pony_invocations(example, PONY_COMMAND_MAX_INVOCATIONS).len(),
                1,
                "example `{example}` should parse"
            );
        }
    }

    #[test]
    fn functional_pony_plugin_help_serializes_snake_case_fields() {
        let rendered = serde_json::to_value(pony_plugin_help()).expect("json");
        assert_eq!(rendered["commands"][0]["usage"], "/(pony) [pony]");
        assert_eq!(rendered["commands"][0]["who_can_use"], "Anyone");
    }
}
