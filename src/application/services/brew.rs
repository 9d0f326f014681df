//! Brew service: runs the pipeline once for one set of inputs

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::services::{
    build_plan, render_header, render_plan, resolve_request, resolve_stage40_or,
};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{BrewInput, BrewPlan, BrewRequest, Stage40Split};

/// Everything one brew resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrewOutcome {
    pub request: BrewRequest,
    pub stage40: Stage40Split,
    pub plan: BrewPlan,
}

impl BrewOutcome {
    /// Header block, a blank line, then the step rows.
    pub fn render_text(&self) -> Vec<String> {
        let mut lines = render_header(&self.request, &self.stage40);
        lines.push(String::new());
        lines.extend(render_plan(&self.plan));
        lines
    }
}

/// Service computing brew plans with process-wide defaults applied.
pub struct BrewService {
    settings: Settings,
}

impl BrewService {
    /// Create a new brew service.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolve `input` and derive its plan.
    #[instrument(level = "debug", skip_all)]
    pub fn brew(&self, input: &BrewInput) -> ApplicationResult<BrewOutcome> {
        let input = self.with_defaults(input);
        debug!("brew: input={:?}", input);

        let request = resolve_request(&input)?;
        let stage40 = resolve_stage40_or(
            request.water_mass,
            input.ratio40,
            input.ratio40_raw.as_deref(),
            self.settings.ratio40,
        )?;
        let plan = build_plan(&request, &stage40);
        debug!("brew: {} steps", plan.steps.len());

        Ok(BrewOutcome {
            request,
            stage40,
            plan,
        })
    }

    /// Fill unset ratio and pour count from settings. The ratio40 default is
    /// handed to the stage-40 resolver, which only uses it when no form of
    /// ratio40 was given.
    fn with_defaults(&self, input: &BrewInput) -> BrewInput {
        let mut input = input.clone();
        input.ratio = input.ratio.or(Some(self.settings.ratio));
        input.pours60 = input.pours60.or(Some(self.settings.pours60));
        input
    }
}

impl Default for BrewService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
