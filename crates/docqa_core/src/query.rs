use crate::{AppState, AskResult, Effect, Operation};

const ENTER_QUESTION: &str = "Please enter a question.";
const NO_ANSWER_FOUND: &str = "No answer found.";
const ERROR_GETTING_ANSWER: &str = "Error getting answer.";

/// Starts a question round trip with the trimmed question text, or notifies
/// when there is nothing to ask.
pub(crate) fn ask(state: &mut AppState) -> Vec<Effect> {
    let question = state.selection.trimmed_question();
    if question.is_empty() {
        return vec![state.notifications.show(ENTER_QUESTION)];
    }

    let question = question.to_owned();
    state.busy.acquire(Operation::Ask);
    vec![Effect::AskQuestion { question }]
}

/// Applies the engine's completion. A failure is reported on both the answer
/// area and the notification channel.
pub(crate) fn finish(state: &mut AppState, result: AskResult) -> Vec<Effect> {
    let effects = match result {
        AskResult::Answered { answer } => {
            let text = answer
                .filter(|answer| !answer.is_empty())
                .unwrap_or_else(|| NO_ANSWER_FOUND.to_owned());
            state.answer.set(text);
            Vec::new()
        }
        AskResult::Failed => {
            state.answer.set(ERROR_GETTING_ANSWER);
            vec![state.notifications.show(ERROR_GETTING_ANSWER)]
        }
    };
    state.busy.release();
    effects
}
