mod plan;

pub(crate) use plan::{JsonPlanFormatter, PlainTextPlanFormatter, PlanFormatter};
