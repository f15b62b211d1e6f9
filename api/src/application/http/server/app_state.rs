use std::sync::Arc;

use dinesure_core::application::DineSureService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DineSureService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DineSureService) -> Self {
        Self { args, service }
    }
}
