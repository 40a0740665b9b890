use crate::{base_value::BaseValue, coefficient::Coefficient, indicator::Indicator};

/// A level of the objective hierarchy: a linear combination of indicators.
pub struct Level<S> {
    summands: Vec<(Coefficient, Box<dyn Indicator<S>>)>,
}

impl<S> Level<S> {
    pub fn new(summands: Vec<(Coefficient, Box<dyn Indicator<S>>)>) -> Level<S> {
        Level { summands }
    }

    pub fn evaluate(&self, solution: &S) -> BaseValue {
        self.summands
            .iter()
            .map(|(coefficient, indicator)| coefficient * indicator.evaluate(solution))
            .sum()
    }

    pub fn to_string(&self) -> String {
        self.summands
            .iter()
            .map(|(coefficient, indicator)| {
                if coefficient.is_one() {
                    indicator.name().to_string()
                } else {
                    format!("{}*{}", coefficient, indicator.name())
                }
            })
            .collect::<Vec<String>>()
            .join(" + ")
    }
}
