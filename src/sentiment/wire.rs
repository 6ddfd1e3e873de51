use serde::{Deserialize, Serialize};

/* ----- generateContent request ----- */

#[derive(Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub(crate) contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
pub(crate) struct RequestContent<'a> {
    pub(crate) parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
pub(crate) struct RequestPart<'a> {
    pub(crate) text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) const fn text(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

/* ----- generateContent response ----- */

#[derive(Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub(crate) struct Candidate {
    pub(crate) content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub(crate) parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
pub(crate) struct ResponsePart {
    pub(crate) text: Option<String>,
}
