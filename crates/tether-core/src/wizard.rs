// ── Rule trigger creation wizard ──
//
// Explicit finite-state machine over the named steps of the trigger
// creation flow. Rendering is someone else's problem: a front end asks
// for the current step, mutates the draft, and calls `advance` /
// `back` / `finish`. Transitions are guarded; leaving the query step
// requires the injected query builder to produce a query string.

use thiserror::Error;

use crate::command::requests::CreateRuleTriggerRequest;

/// Named steps of the trigger wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Name and description entry.
    Details,
    /// Condition query construction.
    Query,
    /// Final review before submission.
    Review,
}

/// Guard violations and misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("a trigger name is required before continuing")]
    NameMissing,

    #[error("the condition query is incomplete")]
    QueryIncomplete,

    #[error("cannot go back from the first step")]
    AtFirstStep,

    #[error("cannot advance past the review step")]
    AtLastStep,

    #[error("the wizard can only finish from the review step")]
    NotAtReview,
}

/// Mutable draft owned by the wizard; the front end fills it in
/// step by step.
#[derive(Debug, Clone, Default)]
pub struct TriggerDraft {
    pub name: String,
    pub description: Option<String>,
    /// Set when the query step is left, from the injected builder.
    pub query: Option<String>,
}

/// The wizard state machine.
///
/// `B` is the query-builder seam: invoked when leaving [`WizardStep::Query`],
/// it returns the generated query string, or `None` while the condition
/// is incomplete -- in which case the transition is refused.
pub struct TriggerWizard<B>
where
    B: FnMut() -> Option<String>,
{
    step: WizardStep,
    draft: TriggerDraft,
    build_query: B,
}

impl<B> TriggerWizard<B>
where
    B: FnMut() -> Option<String>,
{
    pub fn new(build_query: B) -> Self {
        Self {
            step: WizardStep::Details,
            draft: TriggerDraft::default(),
            build_query,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &TriggerDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TriggerDraft {
        &mut self.draft
    }

    /// Move to the next step, enforcing the current step's guard.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Details => {
                if self.draft.name.trim().is_empty() {
                    return Err(WizardError::NameMissing);
                }
                WizardStep::Query
            }
            WizardStep::Query => {
                let Some(query) = (self.build_query)() else {
                    return Err(WizardError::QueryIncomplete);
                };
                self.draft.query = Some(query);
                WizardStep::Review
            }
            WizardStep::Review => return Err(WizardError::AtLastStep),
        };
        Ok(self.step)
    }

    /// Move to the previous step. Always allowed except at the start.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Details => return Err(WizardError::AtFirstStep),
            WizardStep::Query => WizardStep::Details,
            WizardStep::Review => WizardStep::Query,
        };
        Ok(self.step)
    }

    /// Consume the wizard, yielding the create request. Only valid from
    /// the review step, which guarantees name and query are present.
    pub fn finish(self) -> Result<CreateRuleTriggerRequest, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotAtReview);
        }
        let query = self.draft.query.ok_or(WizardError::QueryIncomplete)?;
        Ok(CreateRuleTriggerRequest {
            name: self.draft.name,
            description: self.draft.description,
            query,
        })
    }
}
