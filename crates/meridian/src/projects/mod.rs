//! Per-component bootstrap parameters.
//!
//! Each component module declares its prompt plan and renders the updated
//! server configuration from the collected responses.

mod client;
mod engine;
mod portal;
mod socket;

use crate::prompt::{PromptPlan, Responses};
use meridian_answers::SectionName;
use serde_json::{Map, Value};

/// The prompt plan for one component.
pub fn prompt_plan(name: SectionName) -> &'static PromptPlan {
    match name {
        SectionName::Engine => &engine::PLAN,
        SectionName::Portal => &portal::PLAN,
        SectionName::Client => &client::PLAN,
        SectionName::Socket => &socket::PLAN,
    }
}

/// Render the component's configuration sections from prompt responses.
pub fn render_config(name: SectionName, responses: &Responses) -> Map<String, Value> {
    match name {
        SectionName::Engine => engine::render_config(responses),
        SectionName::Portal => portal::render_config(responses),
        SectionName::Client => client::render_config(responses),
        SectionName::Socket => socket::render_config(responses),
    }
}

/// Response value as JSON text, empty when the key was never collected.
pub(crate) fn text(responses: &Responses, key: &str) -> Value {
    Value::String(responses.get(key).cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Fallback;
    use meridian_answers::default_document;
    use std::collections::BTreeMap;

    /// Resolve a plan purely from defaults and the given section, the way a
    /// non-interactive run would.
    pub(crate) fn defaulted_responses(name: SectionName) -> Responses {
        let answers = default_document();
        let section = answers.section(name);
        let mut responses = BTreeMap::new();
        for group in prompt_plan(name).groups {
            for prompt in group.prompts {
                let value = section
                    .get(prompt.key)
                    .cloned()
                    .or(match prompt.fallback {
                        Fallback::Static(v) => Some(v.to_string()),
                        Fallback::Generated(n) => Some(crate::secrets::random_string(n)),
                        Fallback::Required => None,
                    })
                    .unwrap_or_default();
                responses.insert(prompt.key.to_string(), value);
            }
        }
        responses
    }

    #[test]
    fn every_plan_key_is_unique_within_its_component() {
        for name in SectionName::ALL {
            let mut seen = std::collections::BTreeSet::new();
            for group in prompt_plan(name).groups {
                for prompt in group.prompts {
                    assert!(seen.insert(prompt.key), "{name}: duplicate key {}", prompt.key);
                }
            }
        }
    }

    #[test]
    fn default_answers_cover_every_non_secret_prompt() {
        // Every plan key without a static default must be a credential the
        // default answer file supplies.
        let answers = default_document();
        for name in SectionName::ALL {
            for group in prompt_plan(name).groups {
                for prompt in group.prompts {
                    let covered = answers.section(name).contains_key(prompt.key)
                        || !matches!(prompt.fallback, Fallback::Required);
                    assert!(covered, "{name}: no default or answer for {}", prompt.key);
                }
            }
        }
    }
}
