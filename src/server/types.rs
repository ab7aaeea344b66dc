use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}
