use crate::collection::{collection_path, CreatedCollection, CreationDraft};
use crate::display::{Presentation, Translator};
use crate::error::{CollectionError, Result};
use std::collections::VecDeque;
use std::sync::Arc;

pub const MIN_NAME_LENGTH: usize = 5;
pub const PROMPT_TEXT: &str = "Collection name";
pub const NAME_TOO_SHORT: &str = "Please provide a longer name for your new puzzle collection";

pub trait NamePrompt {
    /// Asks for a name. `Ok(None)` means the prompt was dismissed.
    async fn ask(&mut self, message: &str, error: Option<&str>) -> Result<Option<String>>;
}

pub trait CollectionCreator {
    async fn create_collection(&self, draft: &CreationDraft) -> Result<CreatedCollection>;
}

pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

pub trait ErrorReporter {
    fn report(&mut self, error: &CollectionError);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreationState {
    #[default]
    Idle,
    Prompting {
        error: Option<String>,
    },
    Submitting {
        draft: CreationDraft,
    },
    Created {
        id: u64,
    },
}

#[derive(Debug)]
pub enum CreationEvent {
    Open,
    Confirm(String),
    Dismiss,
    Submitted(CreatedCollection),
    Failed(CollectionError),
    Navigated,
}

#[derive(Debug)]
pub enum Effect {
    ShowPrompt { error: Option<String> },
    Submit(CreationDraft),
    Navigate(String),
    ReportError(CollectionError),
}

#[derive(Debug)]
pub struct Transition {
    pub state: CreationState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: CreationState, effects: Vec<Effect>) -> Self {
        Transition { state, effects }
    }
}

// Length is in UTF-16 code units of the raw input, as the site counts it.
pub fn validate_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.encode_utf16().count() < MIN_NAME_LENGTH {
        Err(NAME_TOO_SHORT)
    } else {
        Ok(())
    }
}

pub fn transition(state: CreationState, event: CreationEvent, tr: &dyn Translator) -> Transition {
    use CreationEvent as E;
    use CreationState as S;

    match (state, event) {
        (S::Idle, E::Open) => Transition::to(
            S::Prompting { error: None },
            vec![Effect::ShowPrompt { error: None }],
        ),
        (S::Prompting { .. }, E::Dismiss) => Transition::to(S::Idle, Vec::new()),
        (S::Prompting { .. }, E::Confirm(name)) => match validate_name(&name) {
            Err(key) => {
                let error = Some(tr.translate(key));
                Transition::to(
                    S::Prompting {
                        error: error.clone(),
                    },
                    vec![Effect::ShowPrompt { error }],
                )
            }
            Ok(()) => {
                let draft = CreationDraft::new(name);
                Transition::to(
                    S::Submitting {
                        draft: draft.clone(),
                    },
                    vec![Effect::Submit(draft)],
                )
            }
        },
        (S::Submitting { .. }, E::Submitted(created)) => match created.id {
            Some(id) => Transition::to(
                S::Created { id },
                vec![Effect::Navigate(collection_path(id))],
            ),
            None => Transition::to(
                S::Idle,
                vec![Effect::ReportError(CollectionError::MissingId)],
            ),
        },
        (S::Submitting { .. }, E::Failed(err)) => {
            Transition::to(S::Idle, vec![Effect::ReportError(err)])
        }
        (S::Created { .. }, E::Navigated) => Transition::to(S::Idle, Vec::new()),
        (state, event) => {
            log::debug!("ignoring {:?} while {:?}", event, state);
            Transition::to(state, Vec::new())
        }
    }
}

pub struct CreationWorkflow {
    state: CreationState,
    display: Arc<Presentation>,
}

impl CreationWorkflow {
    pub fn new(display: Arc<Presentation>) -> Self {
        CreationWorkflow {
            state: CreationState::Idle,
            display,
        }
    }

    pub fn state(&self) -> &CreationState {
        &self.state
    }

    pub fn dispatch(&mut self, event: CreationEvent) -> Vec<Effect> {
        let current = std::mem::take(&mut self.state);
        let next = transition(current, event, self.display.translator.as_ref());
        self.state = next.state;
        next.effects
    }

    pub async fn run<P, C, N, R>(
        &mut self,
        prompt: &mut P,
        creator: &C,
        navigator: &mut N,
        reporter: &mut R,
    ) -> Result<Option<u64>>
    where
        P: NamePrompt,
        C: CollectionCreator,
        N: Navigator,
        R: ErrorReporter,
    {
        let title = self.display.tr(PROMPT_TEXT);
        let mut created = None;
        let mut queue: VecDeque<Effect> = self.dispatch(CreationEvent::Open).into();

        while let Some(effect) = queue.pop_front() {
            let event = match effect {
                Effect::ShowPrompt { error } => match prompt.ask(&title, error.as_deref()).await {
                    Ok(Some(name)) => CreationEvent::Confirm(name),
                    Ok(None) => CreationEvent::Dismiss,
                    Err(err) => {
                        self.state = CreationState::Idle;
                        return Err(err);
                    }
                },
                Effect::Submit(draft) => match creator.create_collection(&draft).await {
                    Ok(response) => CreationEvent::Submitted(response),
                    Err(err) => CreationEvent::Failed(err),
                },
                Effect::Navigate(path) => {
                    log::info!("navigating to {}", path);
                    navigator.navigate_to(&path);
                    CreationEvent::Navigated
                }
                Effect::ReportError(err) => {
                    reporter.report(&err);
                    continue;
                }
            };
            queue.extend(self.dispatch(event));
            if let CreationState::Created { id } = self.state {
                created = Some(id);
            }
        }

        Ok(created)
    }
}
