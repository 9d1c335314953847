//! Socket proxy bootstrap parameters: admin identity, the engine endpoint,
//! and the proxy's advertised and bind addresses.

use super::text;
use crate::prompt::{Fallback, Prompt, PromptGroup, PromptKind, PromptPlan, Responses};
use crate::secrets::API_KEY_LEN;
use meridian_ids::UNASSIGNED_GROUP;
use serde_json::{json, Map, Value};

pub const PLAN: PromptPlan = PromptPlan {
    groups: &[
        PromptGroup {
            label: "Administrator Account",
            prompts: &[
                Prompt {
                    key: "admin_user",
                    text: "Please enter the API administrator username (meridian): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("meridian"),
                },
                Prompt {
                    key: "admin_group",
                    text: "Please enter the API administrator group UUID (unassigned): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static(UNASSIGNED_GROUP),
                },
                Prompt {
                    key: "admin_key",
                    text: "Please enter the API key for the administrator account (generated): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Generated(API_KEY_LEN),
                },
            ],
        },
        PromptGroup {
            label: "API Engine Connection",
            prompts: &[
                Prompt {
                    key: "engine_host",
                    text: "Please enter the hostname of the API engine (localhost): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("localhost"),
                },
                Prompt {
                    key: "engine_port",
                    text: "Please enter the port of the API engine (10550): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("10550"),
                },
            ],
        },
        PromptGroup {
            label: "Socket Server",
            prompts: &[
                Prompt {
                    key: "socket_host",
                    text: "Please enter the hostname for the socket server (localhost): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("localhost"),
                },
                Prompt {
                    key: "socket_port",
                    text: "Please enter the port for the socket server (10551): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("10551"),
                },
                Prompt {
                    key: "socket_bind_ipaddr",
                    text: "Please enter the IP address the socket server binds to (127.0.0.1): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("127.0.0.1"),
                },
            ],
        },
    ],
};

/// Render the updated socket proxy configuration.
pub fn render_config(responses: &Responses) -> Map<String, Value> {
    let config = json!({
        "admin": {
            "user": text(responses, "admin_user"),
            "group": text(responses, "admin_group"),
            "key": text(responses, "admin_key"),
        },
        "engine": {
            "host": text(responses, "engine_host"),
            "port": text(responses, "engine_port"),
        },
        "socket": {
            "host": text(responses, "socket_host"),
            "port": text(responses, "socket_port"),
            "bind_ip": text(responses, "socket_bind_ipaddr"),
        },
    });
    config.as_object().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::tests::defaulted_responses;
    use meridian_answers::SectionName;

    #[test]
    fn renders_distinct_bind_address() {
        let config = render_config(&defaulted_responses(SectionName::Socket));
        assert_eq!(config["socket"]["host"], "localhost");
        assert_eq!(config["socket"]["bind_ip"], "127.0.0.1");
        assert_eq!(config["engine"]["port"], "10550");
    }
}
