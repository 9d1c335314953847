//! Interactive prompts with answer-file precedence.
//!
//! Each component declares a static prompt plan: groups of keyed prompts
//! with optional defaults. Collection resolves every key in order — answer
//! file first, then interactive input, then the fallback. The [`Prompter`]
//! seam keeps the flow testable without a terminal.

use crate::secrets::random_string;
use anyhow::{bail, Result};
use meridian_answers::Section;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::info;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Collected prompt responses, keyed by configuration key.
pub type Responses = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Plain text input, echoed back.
    Text,
    /// Password input: minimum length, asked twice.
    Password,
}

/// What to use when neither the answer file nor the operator supplies a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// A fixed default.
    Static(&'static str),
    /// Generate a random alphanumeric string of this length.
    Generated(usize),
    /// No fallback: the value must be provided.
    Required,
}

#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    pub key: &'static str,
    pub text: &'static str,
    pub kind: PromptKind,
    pub fallback: Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct PromptGroup {
    pub label: &'static str,
    pub prompts: &'static [Prompt],
}

#[derive(Debug, Clone, Copy)]
pub struct PromptPlan {
    pub groups: &'static [PromptGroup],
}

/// Input source for interactive prompts.
pub trait Prompter {
    fn read_text(&mut self, prompt: &str) -> Result<String>;
    fn read_password(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter backed by the terminal: plain text from stdin, passwords read
/// with echo disabled.
pub struct StdinPrompter;

impl StdinPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            bail!("Input stream closed");
        }
        Ok(line.trim().to_string())
    }
}

impl Prompter for StdinPrompter {
    fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        let line = rpassword::prompt_password(prompt)?;
        Ok(line.trim().to_string())
    }
}

/// Resolve every prompt in the plan.
///
/// Answer-file values win unconditionally and are taken verbatim. With
/// `use_defaults` the flow is non-interactive: unanswered prompts take
/// their fallback and required prompts fail.
pub fn collect_responses(
    plan: &PromptPlan,
    answers: &Section,
    prompter: &mut dyn Prompter,
    use_defaults: bool,
) -> Result<Responses> {
    let mut responses = Responses::new();

    for group in plan.groups {
        let unanswered = group
            .prompts
            .iter()
            .any(|p| !answers.contains_key(p.key));
        if unanswered && !use_defaults {
            println!("{}", group.label);
            println!("{}", "-".repeat(20));
        }

        for prompt in group.prompts {
            let value = if let Some(value) = answers.get(prompt.key) {
                info!("Value for {} found in answer file", prompt.key);
                value.clone()
            } else if use_defaults {
                resolve_fallback(prompt)?
            } else {
                match prompt.kind {
                    PromptKind::Text => read_text_value(prompt, prompter)?,
                    PromptKind::Password => read_password_value(prompt, prompter)?,
                }
            };
            responses.insert(prompt.key.to_string(), value);
        }

        if unanswered && !use_defaults {
            println!();
        }
    }

    Ok(responses)
}

fn resolve_fallback(prompt: &Prompt) -> Result<String> {
    match prompt.fallback {
        Fallback::Static(value) => Ok(value.to_string()),
        Fallback::Generated(length) => Ok(random_string(length)),
        Fallback::Required => bail!(
            "No answer or default available for \"{}\"; supply it in an answer file",
            prompt.key
        ),
    }
}

fn read_text_value(prompt: &Prompt, prompter: &mut dyn Prompter) -> Result<String> {
    loop {
        let input = prompter.read_text(prompt.text)?;
        if !input.is_empty() {
            return Ok(input);
        }
        match prompt.fallback {
            Fallback::Static(value) => return Ok(value.to_string()),
            Fallback::Generated(length) => return Ok(random_string(length)),
            Fallback::Required => {
                eprintln!("Must provide a value");
            }
        }
    }
}

fn read_password_value(prompt: &Prompt, prompter: &mut dyn Prompter) -> Result<String> {
    loop {
        let password = prompter.read_password(prompt.text)?;
        if password.len() < MIN_PASSWORD_LEN {
            eprintln!(
                "Password cannot be empty and must be at least {} characters long",
                MIN_PASSWORD_LEN
            );
            continue;
        }
        let confirm = prompter.read_password("Please confirm the password: ")?;
        if password != confirm {
            eprintln!("Passwords do not match, try again");
            continue;
        }
        return Ok(password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    pub struct ScriptedPrompter {
        lines: VecDeque<String>,
    }

    impl ScriptedPrompter {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_text(&mut self, _prompt: &str) -> Result<String> {
            self.next_line()
        }

        fn read_password(&mut self, _prompt: &str) -> Result<String> {
            self.next_line()
        }
    }

    impl ScriptedPrompter {
        // Exhausted input behaves like a closed stdin.
        fn next_line(&mut self) -> Result<String> {
            self.lines
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("Input stream closed"))
        }
    }

    const PLAN: PromptPlan = PromptPlan {
        groups: &[PromptGroup {
            label: "Test Group",
            prompts: &[
                Prompt {
                    key: "host",
                    text: "Host (localhost): ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Static("localhost"),
                },
                Prompt {
                    key: "password",
                    text: "Password: ",
                    kind: PromptKind::Password,
                    fallback: Fallback::Required,
                },
                Prompt {
                    key: "api_key",
                    text: "API key: ",
                    kind: PromptKind::Text,
                    fallback: Fallback::Generated(64),
                },
            ],
        }],
    };

    #[test]
    fn answer_file_values_win_verbatim() {
        let mut answers = Section::new();
        answers.insert("host".into(), "db.internal".into());
        answers.insert("password".into(), "short".into());
        answers.insert("api_key".into(), "fixed".into());

        let mut prompter = ScriptedPrompter::new(&[]);
        let responses = collect_responses(&PLAN, &answers, &mut prompter, false).unwrap();
        assert_eq!(responses["host"], "db.internal");
        // Answer-file values skip the minimum length check.
        assert_eq!(responses["password"], "short");
        assert_eq!(responses["api_key"], "fixed");
    }

    #[test]
    fn empty_input_takes_default_or_generates() {
        let mut prompter =
            ScriptedPrompter::new(&["", "longenough", "longenough", ""]);
        let responses =
            collect_responses(&PLAN, &Section::new(), &mut prompter, false).unwrap();
        assert_eq!(responses["host"], "localhost");
        assert_eq!(responses["password"], "longenough");
        assert_eq!(responses["api_key"].len(), 64);
    }

    #[test]
    fn short_or_mismatched_passwords_are_rejected() {
        let mut prompter = ScriptedPrompter::new(&[
            "myhost",
            "short",                       // too short, re-asked
            "longenough", "different",     // mismatch, re-asked
            "longenough", "longenough",    // accepted
            "key",
        ]);
        let responses =
            collect_responses(&PLAN, &Section::new(), &mut prompter, false).unwrap();
        assert_eq!(responses["password"], "longenough");
    }

    #[test]
    fn closed_input_aborts_a_required_prompt() {
        // Only the host line is available; the required password prompt
        // must surface the input error instead of re-asking forever.
        let mut prompter = ScriptedPrompter::new(&["myhost"]);
        let err = collect_responses(&PLAN, &Section::new(), &mut prompter, false).unwrap_err();
        assert!(err.to_string().contains("Input stream closed"));
    }

    #[test]
    fn use_defaults_fails_on_required_prompts() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let err = collect_responses(&PLAN, &Section::new(), &mut prompter, true).unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn use_defaults_resolves_static_and_generated() {
        let mut answers = Section::new();
        answers.insert("password".into(), "fromanswers".into());
        let mut prompter = ScriptedPrompter::new(&[]);
        let responses = collect_responses(&PLAN, &answers, &mut prompter, true).unwrap();
        assert_eq!(responses["host"], "localhost");
        assert_eq!(responses["api_key"].len(), 64);
    }
}
