pub mod session_json;

pub use session_json::{
    apply_substitution_json, draw_session_json, suggest_substitute_json, ApplyRequest,
    ApplyResponse, DrawRequest, DrawResponse, SuggestRequest, SuggestResponse,
};
