//! Runtime composition of same-typed stages.
//!
//! [`compose!`](crate::compose!) fixes the number of functions at compile
//! time. [`Pipeline`] holds an ordered list of `A -> A` stages decided at
//! runtime and folds an input through them from first to last.
//!
//! An empty list of stages has no meaningful composition, so building or
//! running an empty pipeline returns [`ComposeError::EmptyChain`] instead of
//! silently behaving like the identity function.
//!
//! # Examples
//!
//! ```
//! use functorial::compose::{ComposeError, Pipeline};
//!
//! let pipeline = Pipeline::new()
//!     .then(|n: i32| n + 1)
//!     .then(|n| n * 2);
//! assert_eq!(pipeline.apply(5), Ok(12));
//!
//! let empty: Pipeline<i32> = Pipeline::new();
//! assert_eq!(empty.apply(5), Err(ComposeError::EmptyChain));
//! ```

use std::fmt;

use smallvec::SmallVec;

/// A single boxed pipeline stage.
pub type Stage<A> = Box<dyn Fn(A) -> A + Send + Sync>;

/// Errors raised when composing functions at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// There were no functions to compose.
    #[error("cannot compose an empty chain of functions")]
    EmptyChain,
}

/// An ordered sequence of `A -> A` stages applied left to right.
pub struct Pipeline<A> {
    stages: SmallVec<[Stage<A>; 4]>,
}

impl<A> Pipeline<A> {
    /// Creates a pipeline with no stages.
    pub fn new() -> Self {
        Self {
            stages: SmallVec::new(),
        }
    }

    /// Builds a pipeline from an ordered sequence of stages.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::EmptyChain`] if `stages` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use functorial::compose::Pipeline;
    ///
    /// fn add_one(n: i32) -> i32 { n + 1 }
    /// fn double(n: i32) -> i32 { n * 2 }
    ///
    /// let stages: [fn(i32) -> i32; 3] = [add_one, double, add_one];
    /// let pipeline = Pipeline::try_from_stages(stages)?;
    /// assert_eq!(pipeline.apply(1)?, 5);
    /// # Ok::<(), functorial::compose::ComposeError>(())
    /// ```
    pub fn try_from_stages<I, F>(stages: I) -> Result<Self, ComposeError>
    where
        I: IntoIterator<Item = F>,
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        let stages: SmallVec<[Stage<A>; 4]> = stages
            .into_iter()
            .map(|stage| Box::new(stage) as Stage<A>)
            .collect();
        if stages.is_empty() {
            return Err(ComposeError::EmptyChain);
        }
        tracing::debug!(stages = stages.len(), "pipeline built");
        Ok(Self { stages })
    }

    /// Appends a stage, returning the extended pipeline.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        self.push(stage);
        self
    }

    /// Appends a stage in place.
    pub fn push<F>(&mut self, stage: F)
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs `input` through every stage in order.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::EmptyChain`] if the pipeline has no stages.
    pub fn apply(&self, input: A) -> Result<A, ComposeError> {
        if self.stages.is_empty() {
            return Err(ComposeError::EmptyChain);
        }
        Ok(self.run(input))
    }

    /// Converts the pipeline into a plain function.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::EmptyChain`] if the pipeline has no stages.
    pub fn into_fn(self) -> Result<impl Fn(A) -> A + Send + Sync, ComposeError> {
        if self.stages.is_empty() {
            return Err(ComposeError::EmptyChain);
        }
        Ok(move |input: A| self.run(input))
    }

    fn run(&self, input: A) -> A {
        let output = self
            .stages
            .iter()
            .enumerate()
            .fold(input, |value, (index, stage)| {
                tracing::trace!(stage = index, "applying pipeline stage");
                stage(value)
            });
        tracing::debug!(stages = self.stages.len(), "pipeline applied");
        output
    }
}

impl<A> Default for Pipeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Pipeline<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Composes an ordered sequence of `A -> A` functions into one function.
///
/// # Errors
///
/// Returns [`ComposeError::EmptyChain`] if `functions` yields nothing.
///
/// # Examples
///
/// ```
/// use functorial::compose::{ComposeError, compose_all};
///
/// let trim_then_upper = compose_all([
///     (|text: String| text.trim().to_string()) as fn(String) -> String,
///     |text: String| text.to_uppercase(),
/// ])?;
/// assert_eq!(trim_then_upper("  hi ".to_string()), "HI");
///
/// let empty: Vec<fn(i32) -> i32> = Vec::new();
/// assert_eq!(compose_all(empty).err(), Some(ComposeError::EmptyChain));
/// # Ok::<(), ComposeError>(())
/// ```
pub fn compose_all<A, I, F>(functions: I) -> Result<impl Fn(A) -> A + Send + Sync, ComposeError>
where
    I: IntoIterator<Item = F>,
    F: Fn(A) -> A + Send + Sync + 'static,
{
    Pipeline::try_from_stages(functions)?.into_fn()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn apply_runs_stages_in_order() {
        let pipeline = Pipeline::new()
            .then(|text: String| text + "a")
            .then(|text| text + "b")
            .then(|text| text + "c");
        assert_eq!(pipeline.apply(String::new()), Ok("abc".to_string()));
    }

    #[rstest]
    fn empty_pipeline_fails_fast() {
        let pipeline: Pipeline<i32> = Pipeline::default();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(1), Err(ComposeError::EmptyChain));
    }

    #[rstest]
    fn empty_stage_list_is_rejected() {
        let stages: Vec<Stage<i32>> = Vec::new();
        let result = Pipeline::try_from_stages(stages);
        assert_eq!(
            result.err().map(|error| error.to_string()),
            Some("cannot compose an empty chain of functions".to_string())
        );
    }

    #[rstest]
    fn boxed_stages_are_accepted() {
        let stages = vec![
            Box::new(|n: i32| n + 1) as Stage<i32>,
            Box::new(|n: i32| n * 10),
        ];
        let pipeline = Pipeline::try_from_stages(stages).expect("non-empty");
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.apply(0), Ok(10));
    }

    #[rstest]
    fn push_extends_in_place() {
        let mut pipeline = Pipeline::new();
        pipeline.push(|n: u8| n.saturating_add(200));
        pipeline.push(|n: u8| n.saturating_add(200));
        assert_eq!(pipeline.apply(1), Ok(u8::MAX));
    }

    #[rstest]
    fn into_fn_is_reusable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let function = Pipeline::new()
            .then(move |n: i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                n - 1
            })
            .into_fn()
            .expect("non-empty");

        assert_eq!(function(3), 2);
        assert_eq!(function(10), 9);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn debug_reports_stage_count() {
        let pipeline = Pipeline::new().then(|n: i32| n);
        assert_eq!(format!("{pipeline:?}"), "Pipeline { stages: 1 }");
    }
}
