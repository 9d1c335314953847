//! Client bootstrap parameters: the administrative identity only.

use super::text;
use crate::prompt::{Fallback, Prompt, PromptGroup, PromptKind, PromptPlan, Responses};
use crate::secrets::API_KEY_LEN;
use meridian_ids::UNASSIGNED_GROUP;
use serde_json::{json, Map, Value};

pub const PLAN: PromptPlan = PromptPlan {
    groups: &[PromptGroup {
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
    }],
};

/// Render the updated client configuration.
pub fn render_config(responses: &Responses) -> Map<String, Value> {
    let config = json!({
        "admin": {
            "user": text(responses, "admin_user"),
            "group": text(responses, "admin_group"),
            "key": text(responses, "admin_key"),
        },
    });
    config.as_object().cloned().unwrap_or_default()
}
