/// A type that collects the rewrite steps applied by an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step; pass
/// `&mut ()` when you only want the result. It is also implemented for `Vec<S>`, which records
/// every step in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
