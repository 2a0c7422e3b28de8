//! State: an object alters its behavior when its internal stage changes.
//!
//! The stages form a closed set, so they are a tagged union rather than an
//! open trait hierarchy, and the context owns its current stage outright.

use crate::reflect;

/// The closed set of stages a [`Context`] moves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Drafting,
    Reviewing,
}

impl Stage {
    /// Display name of the stage.
    pub fn name(self) -> &'static str {
        match self {
            Self::Drafting => "Drafting",
            Self::Reviewing => "Reviewing",
        }
    }
}

/// Holds the current stage and forwards requests to it.
///
/// # Example
///
/// ```rust
/// use repertoire::state::{Context, Stage};
///
/// let mut context = Context::new(Stage::Drafting);
/// context.first_request();
/// assert_eq!(context.stage(), Stage::Reviewing);
/// ```
pub struct Context {
    stage: Stage,
}

impl Context {
    /// Create a context starting in `stage`.
    pub fn new(stage: Stage) -> Self {
        tracing::debug!(
            context = reflect::short_type_name::<Self>(),
            stage = stage.name(),
            "context created"
        );
        Self { stage }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Handle the first kind of request.
    ///
    /// Drafting handles it and asks to move on to Reviewing.
    pub fn first_request(&mut self) -> String {
        match self.stage {
            Stage::Drafting => {
                let line = format!(
                    "{} handles the first request and asks to move on.",
                    self.stage.name()
                );
                self.transition_to(Stage::Reviewing);
                line
            }
            Stage::Reviewing => {
                format!("{} handles the first request.", self.stage.name())
            }
        }
    }

    /// Handle the second kind of request.
    ///
    /// Reviewing handles it and hands the work back to Drafting.
    pub fn second_request(&mut self) -> String {
        match self.stage {
            Stage::Drafting => {
                format!("{} handles the second request.", self.stage.name())
            }
            Stage::Reviewing => {
                let line = format!(
                    "{} handles the second request and hands the work back.",
                    self.stage.name()
                );
                self.transition_to(Stage::Drafting);
                line
            }
        }
    }

    fn transition_to(&mut self, stage: Stage) {
        tracing::debug!(from = self.stage.name(), to = stage.name(), "transition");
        self.stage = stage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafting_moves_on_after_first_request() {
        let mut context = Context::new(Stage::Drafting);
        let line = context.first_request();
        assert!(line.starts_with("Drafting handles the first request"));
        assert_eq!(context.stage(), Stage::Reviewing);
    }

    #[test]
    fn reviewing_hands_back_after_second_request() {
        let mut context = Context::new(Stage::Reviewing);
        let line = context.second_request();
        assert!(line.starts_with("Reviewing handles the second request"));
        assert_eq!(context.stage(), Stage::Drafting);
    }

    #[test]
    fn other_requests_leave_the_stage_alone() {
        let mut context = Context::new(Stage::Drafting);
        context.second_request();
        assert_eq!(context.stage(), Stage::Drafting);

        let mut context = Context::new(Stage::Reviewing);
        context.first_request();
        assert_eq!(context.stage(), Stage::Reviewing);
    }

    #[test]
    fn requests_cycle_through_both_stages() {
        let mut context = Context::new(Stage::Drafting);
        context.first_request();
        context.second_request();
        assert_eq!(context.stage(), Stage::Drafting);
    }
}
