use std::rc::Rc;

use yew::prelude::*;

/// Asks the contact form to pre-fill itself for a plan. `seq` changes on
/// every request so picking the same plan twice still re-applies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    pub plan: String,
    pub seq: u32,
}

/// Page-wide state shared by the landing page handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSession {
    pub selected_plan: String,
    pub form_started: bool,
    pub plan_request: Option<PlanRequest>,
}

pub enum SessionAction {
    OpenContactForm(String),
    ClearPlan,
    FormStarted(bool),
}

impl Reducible for PageSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::OpenContactForm(plan) => {
                let seq = next.plan_request.as_ref().map(|r| r.seq + 1).unwrap_or(0);
                next.selected_plan = plan.clone();
                next.plan_request = Some(PlanRequest { plan, seq });
            }
            SessionAction::ClearPlan => next.selected_plan.clear(),
            SessionAction::FormStarted(started) => {
                if next.form_started == started {
                    return self;
                }
                next.form_started = started;
            }
        }
        Rc::new(next)
    }
}
