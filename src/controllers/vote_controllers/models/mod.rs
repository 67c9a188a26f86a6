use serde::Deserialize;

#[derive(Deserialize)]
pub struct CastVoteForm {
    pub option: Option<String>,
}

#[derive(Deserialize)]
pub struct FormFlags {
    pub success: Option<String>,
}
