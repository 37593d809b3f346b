use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}
