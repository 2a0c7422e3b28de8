//! Template Method: a fixed skeleton whose individual steps vary.
//!
//! The skeleton is a provided trait method; implementors fill in the
//! required steps and may override the optional hooks.

/// A multi-step routine with a fixed overall shape.
pub trait Routine {
    /// The skeleton: fixed steps and implementor steps run in a fixed
    /// order. Hooks contribute a line only when overridden.
    fn run(&self) -> Vec<String> {
        let mut lines = vec![
            "routine: doing the bulk of the work".to_owned(),
            self.required_one(),
            "routine: letting implementors override some steps".to_owned(),
        ];
        if let Some(line) = self.hook_one() {
            lines.push(line);
        }
        lines.push(self.required_two());
        lines.push("routine: finishing the bulk of the work anyway".to_owned());
        if let Some(line) = self.hook_two() {
            lines.push(line);
        }
        lines
    }

    /// First varying step.
    fn required_one(&self) -> String;

    /// Second varying step.
    fn required_two(&self) -> String;

    /// Optional step between the required ones.
    fn hook_one(&self) -> Option<String> {
        None
    }

    /// Optional final step.
    fn hook_two(&self) -> Option<String> {
        None
    }
}

/// Implements only the required steps.
pub struct StandardRoutine;

impl Routine for StandardRoutine {
    fn required_one(&self) -> String {
        "standard: implemented step one".to_owned()
    }

    fn required_two(&self) -> String {
        "standard: implemented step two".to_owned()
    }
}

/// Overrides a hook in addition to the required steps.
pub struct ExtendedRoutine;

impl Routine for ExtendedRoutine {
    fn required_one(&self) -> String {
        "extended: implemented step one".to_owned()
    }

    fn required_two(&self) -> String {
        "extended: implemented step two".to_owned()
    }

    fn hook_one(&self) -> Option<String> {
        Some("extended: overridden hook".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_order_is_fixed() {
        let lines = StandardRoutine.run();
        assert_eq!(
            lines,
            [
                "routine: doing the bulk of the work",
                "standard: implemented step one",
                "routine: letting implementors override some steps",
                "standard: implemented step two",
                "routine: finishing the bulk of the work anyway",
            ]
        );
    }

    #[test]
    fn overridden_hook_appears_in_place() {
        let lines = ExtendedRoutine.run();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "extended: overridden hook");
    }

    #[test]
    fn same_caller_works_with_any_routine() {
        let routines: Vec<Box<dyn Routine>> =
            vec![Box::new(StandardRoutine), Box::new(ExtendedRoutine)];
        for routine in &routines {
            assert!(routine.run().len() >= 5);
        }
    }
}
