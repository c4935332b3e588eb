//! Session - Realtime session query parameters

use serde::Deserialize;
use utoipa::IntoParams;

use drivethru::DEFAULT_VOICE;

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SessionQuery {
    /// Voice for the assistant (default: alloy)
    #[serde(default = "default_voice")]
    pub voice: String,
}
