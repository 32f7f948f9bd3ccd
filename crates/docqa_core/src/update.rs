use crate::{query, upload, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentSelected(document) => {
            state.selection.set_document(document);
            state.mark_dirty();
            Vec::new()
        }
        Msg::QuestionChanged(text) => {
            state.selection.set_question(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::UploadClicked => {
            state.mark_dirty();
            upload::upload(&mut state)
        }
        Msg::AskClicked => {
            state.mark_dirty();
            query::ask(&mut state)
        }
        Msg::UploadFinished(result) => {
            state.mark_dirty();
            upload::finish(&mut state, result)
        }
        Msg::AskFinished(result) => {
            state.mark_dirty();
            query::finish(&mut state, result)
        }
        Msg::NotificationExpired { generation } => {
            if state.notifications.expire(generation) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}
