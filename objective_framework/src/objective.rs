use crate::{evaluated_solution::EvaluatedSolution, level::Level, objective_value::ObjectiveValue};

/// A hierarchical objective: a priority-ordered list of `Level`s. Solutions
/// are compared lexicographically, level 0 first.
pub struct Objective<S> {
    levels: Vec<Level<S>>,
}

impl<S> Objective<S> {
    pub fn new(levels: Vec<Level<S>>) -> Objective<S> {
        Objective { levels }
    }

    pub fn evaluate(&self, solution: S) -> EvaluatedSolution<S> {
        let objective_value = ObjectiveValue::new(
            self.levels
                .iter()
                .map(|level| level.evaluate(&solution))
                .collect(),
        );
        EvaluatedSolution::new(solution, objective_value)
    }

    pub fn print_objective_value(&self, objective_value: &ObjectiveValue) {
        for (level, value) in self.levels.iter().zip(objective_value.iter()) {
            println!("  {}: {}", level.to_string(), value);
        }
    }

    pub fn print_objective_value_with_comparison(
        &self,
        objective_value: &ObjectiveValue,
        previous_objective_value: &ObjectiveValue,
    ) {
        for ((level, value), previous_value) in self
            .levels
            .iter()
            .zip(objective_value.iter())
            .zip(previous_objective_value.iter())
        {
            println!(
                "  {}: {} {}",
                level.to_string(),
                value,
                value.print_difference(*previous_value)
            );
        }
    }
}
