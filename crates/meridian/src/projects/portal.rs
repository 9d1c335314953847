//! Portal bootstrap parameters: admin identity, its own database subset and
//! bind address, plus the engine and socket endpoints it connects to.

use super::text;
use crate::prompt::{Fallback, Prompt, PromptGroup, PromptKind, PromptPlan, Responses};
use crate::secrets::{random_string, API_KEY_LEN, SECRET_LEN};
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
            label: "Database Configuration",
            prompts: &[
                Prompt {
                    key: "db_host",
                    text: "Please enter the hostname or IP address of the database server (localhost): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("localhost"),
                },
                Prompt {
                    key: "db_port",
                    text: "Please enter the port to connect to the database server (3306): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("3306"),
                },
                Prompt {
                    key: "db_name",
                    text: "Please enter the name of the database to use (meridian): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("meridian"),
                },
                Prompt {
                    key: "db_user",
                    text: "Please enter the name of the primary non-root database user (meridian): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("meridian"),
                },
                Prompt {
                    key: "db_user_password",
                    text: "Please enter the password for the primary non-root database user: ",
                    kind: PromptKind::Password,
                    fallback: Fallback::Required,
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
            label: "Portal Server",
            prompts: &[
                Prompt {
                    key: "portal_host",
                    text: "Please enter the hostname for the portal server (localhost): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("localhost"),
                },
                Prompt {
                    key: "portal_port",
                    text: "Please enter the port for the portal server (80): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("80"),
                },
            ],
        },
        PromptGroup {
            label: "Socket Proxy Connection",
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
            ],
        },
    ],
};

/// Render the updated portal configuration, including a fresh secret.
pub fn render_config(responses: &Responses) -> Map<String, Value> {
    let secret = random_string(SECRET_LEN);
    let config = json!({
        "admin": {
            "user": text(responses, "admin_user"),
            "group": text(responses, "admin_group"),
            "key": text(responses, "admin_key"),
        },
        "db": {
            "host": text(responses, "db_host"),
            "port": text(responses, "db_port"),
            "user": text(responses, "db_user"),
            "password": text(responses, "db_user_password"),
            "name": text(responses, "db_name"),
        },
        "engine": {
            "host": text(responses, "engine_host"),
            "port": text(responses, "engine_port"),
        },
        "portal": {
            "host": text(responses, "portal_host"),
            "port": text(responses, "portal_port"),
            "secret": secret,
        },
        "socket": {
            "host": text(responses, "socket_host"),
            "port": text(responses, "socket_port"),
        },
    });
    config.as_object().cloned().unwrap_or_default()
}
