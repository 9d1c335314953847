//! Engine bootstrap parameters: database, API server, and the endpoints of
//! the portal and socket components it talks to.

use super::text;
use crate::prompt::{Fallback, Prompt, PromptGroup, PromptKind, PromptPlan, Responses};
use crate::secrets::{random_string, SECRET_LEN};
use serde_json::{json, Map, Value};

pub const PLAN: PromptPlan = PromptPlan {
    groups: &[
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
                Prompt {
                    key: "db_root_password",
                    text: "Please enter the root password for the database server: ",
                    kind: PromptKind::Password,
                    fallback: Fallback::Required,
                },
            ],
        },
        PromptGroup {
            label: "API Engine Configuration",
            prompts: &[
                Prompt {
                    key: "api_admin_password",
                    text: "Please enter a password for the default administrator account: ",
                    kind: PromptKind::Password,
                    fallback: Fallback::Required,
                },
                Prompt {
                    key: "api_admin_email",
                    text: "Please enter the email address for the default administrator account: ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Required,
                },
                Prompt {
                    key: "api_host",
                    text: "Please enter the hostname for the API server (localhost): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("localhost"),
                },
                Prompt {
                    key: "api_port",
                    text: "Please enter the port for the API server (10550): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("10550"),
                },
            ],
        },
        PromptGroup {
            label: "Portal Connection",
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

/// Render the updated engine configuration, including a fresh secret.
pub fn render_config(responses: &Responses) -> Map<String, Value> {
    let secret = random_string(SECRET_LEN);
    let config = json!({
        "engine": {
            "host": text(responses, "api_host"),
            "port": text(responses, "api_port"),
            "secret": secret,
        },
        "db": {
            "host": text(responses, "db_host"),
            "port": text(responses, "db_port"),
            "user": text(responses, "db_user"),
            "password": text(responses, "db_user_password"),
            "name": text(responses, "db_name"),
        },
        "portal": {
            "host": text(responses, "portal_host"),
            "port": text(responses, "portal_port"),
        },
        "socket": {
            "host": text(responses, "socket_host"),
            "port": text(responses, "socket_port"),
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
    fn renders_default_database_connection() {
        let config = render_config(&defaulted_responses(SectionName::Engine));
        assert_eq!(config["db"]["port"], "3306");
        assert_eq!(config["db"]["name"], "meridian");
        assert_eq!(config["engine"]["port"], "10550");
    }

    #[test]
    fn admin_credentials_are_not_persisted() {
        // Administrator email/password and the database root password are
        // collected for account seeding, not written to engine.conf.
        let config = render_config(&defaulted_responses(SectionName::Engine));
        assert!(!config.contains_key("admin"));
        let sections: Vec<&str> = config.keys().map(String::as_str).collect();
        assert_eq!(sections, ["db", "engine", "portal", "socket"]);
    }

    #[test]
    fn every_render_gets_a_fresh_secret() {
        let responses = defaulted_responses(SectionName::Engine);
        let a = render_config(&responses);
        let b = render_config(&responses);
        let secret_a = a["engine"]["secret"].as_str().unwrap();
        let secret_b = b["engine"]["secret"].as_str().unwrap();
        assert_eq!(secret_a.len(), SECRET_LEN);
        assert_ne!(secret_a, secret_b);
    }
}
