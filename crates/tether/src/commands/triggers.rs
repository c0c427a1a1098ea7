//! Rule trigger command handlers.
//!
//! Trigger creation is driven through the `TriggerWizard` state machine
//! so the CLI enforces the same step guards as any other front end.

use std::sync::Arc;

use tabled::Tabled;
use tether_core::{DeleteOutcome, Platform, RuleTrigger, TriggerWizard};

use crate::cli::{GlobalOpts, TriggersArgs, TriggersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TriggerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Query")]
    query: String,
}

impl From<&Arc<RuleTrigger>> for TriggerRow {
    fn from(t: &Arc<RuleTrigger>) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            query: t.query.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    platform: &Platform,
    args: TriggersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TriggersCommand::List => {
            let snap = platform.store().rule_triggers_snapshot();
            let out = output::render_list(
                &global.output,
                &snap,
                |t| TriggerRow::from(t),
                |t| t.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TriggersCommand::Create {
            name,
            description,
            query,
        } => {
            let request = build_trigger_request(name, description, query)?;
            let created = platform.create_rule_trigger(request).await?;
            if !global.quiet {
                eprintln!("Rule trigger '{}' created ({})", created.name, created.id);
            }
            Ok(())
        }

        TriggersCommand::Delete { trigger } => {
            let id = util::resolve_trigger_id(platform, &trigger)?;
            let outcome = platform
                .delete_rule_trigger(&id, |prompt| {
                    let decision = util::confirm_delete(&prompt, global.yes);
                    async move { decision }
                })
                .await?;
            match outcome {
                DeleteOutcome::Deleted(_) => {
                    if !global.quiet {
                        eprintln!("Rule trigger deleted");
                    }
                }
                DeleteOutcome::Aborted => {}
            }
            Ok(())
        }
    }
}

/// Walk the trigger wizard to a finished request. The query builder is
/// either the `--query` flag value or an interactive prompt.
fn build_trigger_request(
    name: String,
    description: Option<String>,
    query: Option<String>,
) -> Result<tether_core::CreateRuleTriggerRequest, CliError> {
    let mut provided = query;
    let mut wizard = TriggerWizard::new(move || {
        if let Some(q) = provided.take() {
            return Some(q);
        }
        prompt_query()
    });

    {
        let draft = wizard.draft_mut();
        draft.name = name;
        draft.description = description;
    }

    // Details -> Query -> Review
    for _ in 0..2 {
        wizard.advance().map_err(|e| CliError::Validation {
            field: "trigger".into(),
            reason: e.to_string(),
        })?;
    }

    wizard.finish().map_err(|e| CliError::Validation {
        field: "trigger".into(),
        reason: e.to_string(),
    })
}

fn prompt_query() -> Option<String> {
    let input: Result<String, _> = dialoguer::Input::new()
        .with_prompt("CEP query")
        .interact_text();
    input.ok().filter(|q| !q.trim().is_empty())
}
