use serde::Deserialize;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// Body of the cancel confirmation form. `decision` is `confirm` when the
/// user accepted; anything else, or nothing, is a decline.
#[derive(Deserialize)]
pub struct CancelForm {
    pub csrf_token: String,
    #[serde(default)]
    pub decision: String,
}
