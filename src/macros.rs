//! Macros for defining pipelines.
//!
//! - `pipeline!`: Define a named, non-empty pipeline of steps over one carried
//!   value type.

/// Define a named pipeline of steps.
///
/// A pipeline is a declarative wrapper around a [`Chainer`](crate::Chainer):
/// `run` builds a fresh chain and feeds every step through it in declaration
/// order, halting at the first failure. Pipelines must name at least one step;
/// an empty pipeline does not parse.
///
/// # Generated Code
///
/// The macro generates:
/// - `{Name}Steps` struct with a field for each step instance
/// - `{Name}` struct with `new()` and `run()`
///
/// Step types must implement [`Step`](crate::Step) for the pipeline's value
/// type, plus `Debug` and `Clone` for the generated derives.
///
/// # Example
///
/// ```
/// use chainer::{pipeline, Outcome, Step};
///
/// #[derive(Debug, Clone)]
/// struct Add(u8);
///
/// impl Step<u8> for Add {
///     fn run(&mut self, prev: Option<&u8>) -> Outcome<u8> {
///         Outcome::Success(prev.copied().unwrap_or(0) + self.0)
///     }
/// }
///
/// pipeline! {
///     Tally<u8> {
///         first: Add,
///         second: Add,
///     }
/// }
///
/// let chain = Tally::new(TallySteps { first: Add(2), second: Add(3) }).run();
/// assert_eq!(chain.result(), Some(&Outcome::Success(5)));
/// ```
#[macro_export]
macro_rules! pipeline {
    (
        $name:ident <$value:ty> {
            $(
                $step_name:ident : $step_type:ty
            ),+
            $(,)?
        }
    ) => {
        $crate::paste::paste! {
            /// Step instances for the pipeline.
            #[derive(Debug, Clone)]
            pub struct [<$name Steps>] {
                $(
                    pub $step_name: $step_type,
                )+
            }

            /// The pipeline struct.
            #[derive(Debug, Clone)]
            pub struct $name {
                steps: [<$name Steps>],
            }

            impl $name {
                /// Create a new pipeline with the given steps.
                pub fn new(steps: [<$name Steps>]) -> Self {
                    Self { steps }
                }

                /// Run every step in order, halting at the first failure.
                pub fn run(self) -> $crate::Chainer<$value> {
                    let mut chain = $crate::Chainer::new();
                    $(
                        chain.chain(self.steps.$step_name);
                    )+
                    chain
                }
            }
        }
    };
}
