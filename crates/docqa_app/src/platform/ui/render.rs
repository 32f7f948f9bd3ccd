use docqa_core::{AppViewModel, ButtonView};

/// Renders the whole view as plain text, one frame per state change.
pub fn render(view: &AppViewModel) -> String {
    let document = view.document_name.as_deref().unwrap_or("(no file selected)");
    let question = if view.question.is_empty() {
        format!("({})", view.question_placeholder)
    } else {
        view.question.clone()
    };

    let mut lines = vec![
        format!("== {} ==", view.title),
        format!("Document: {document}"),
        format!("Question: {question}"),
        format!(
            "{}  {}",
            format_button(view.upload_button),
            format_button(view.ask_button)
        ),
    ];
    if let Some(message) = &view.notification {
        lines.push(format!("** {message} **"));
    }
    lines.push(format!("Answer: {}", view.answer));
    lines.join("\n")
}

fn format_button(button: ButtonView) -> String {
    if button.enabled {
        format!("[{}]", button.label)
    } else {
        format!("[{}] (disabled)", button.label)
    }
}
