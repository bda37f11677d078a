//! State

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use coupons_app::context::AppContext;

/// Shared handler state, injected into the depot once per request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("State").field("app", &self.app).finish()
    }
}
