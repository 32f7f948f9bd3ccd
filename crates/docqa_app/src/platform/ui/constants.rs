pub const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
Commands:
  file <path>        select the document to upload
  question <text>    type the question
  upload             click Upload
  ask [text]         click Ask (optionally replacing the question first)
  help               show this text
  quit               leave";
