/// A single measurable quantity of a solution, e.g. "total cost" or
/// "number of routes". Implementors are combined (with a `Coefficient`)
/// into a `Level`.
pub trait Indicator<S> {
    fn evaluate(&self, solution: &S) -> crate::base_value::BaseValue;
    fn name(&self) -> String;
}
