use std::sync::Arc;

use tollbooth_auth::ProviderKind;

#[derive(Debug)]
pub struct InnerState {
    pub production: bool,
    pub providers: Vec<ProviderKind>,
}

pub type State = Arc<InnerState>;
