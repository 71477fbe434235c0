//! The scenarios run by the `functorial` binary.
//!
//! [`Walkthrough`] holds the command line input and [`Walkthrough::run`]
//! evaluates every pipeline flavour against it, returning a [`Report`] the
//! binary prints. Absent input short-circuits every stage that depends on it.
//!
//! # Examples
//!
//! ```
//! use functorial::control::Maybe;
//! use functorial::walkthrough::Walkthrough;
//!
//! let report = Walkthrough::new(None).run().unwrap();
//!
//! assert_eq!(report.maybe, Maybe::Absent);
//! assert_eq!(report.runtime, Maybe::Absent);
//! assert_eq!(report.chained, Maybe::Present(12));
//! ```

use std::fmt;

use crate::compose::{ComposeError, Pipeline, lift_chain, lift_map};
use crate::control::Maybe;
use crate::text::{DEFAULT_SUFFIX, announce, capitalize, enhance_with, non_blank};
use crate::typeclass::{Identity, Monad};
use crate::{compose, pipe};

/// Word used by the plain composition stages when no text was given.
pub const SAMPLE_TEXT: &str = "test";

/// Seed used by the numeric chain when none is configured.
pub const DEFAULT_SEED: i64 = 5;

/// Input for one run of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    /// Text fed to the `Maybe` pipelines; `None` runs them on an absent value.
    pub text: Option<String>,
    /// Suffix appended by the enhance stage.
    pub suffix: String,
    /// Starting value of the numeric chain.
    pub seed: i64,
}

/// Values produced by [`Walkthrough::run`], one per pipeline flavour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// `compose!(capitalize, enhance)` applied to the text or [`SAMPLE_TEXT`].
    pub compose: String,
    /// The same stages applied with `pipe!`.
    pub pipe: String,
    /// Method-chained `Maybe` pipeline with a printing stage.
    pub maybe: Maybe<String>,
    /// The same pipeline built point-free from lifted stages.
    pub lifted: Maybe<String>,
    /// Runtime [`Pipeline`], run only on present text.
    pub runtime: Maybe<String>,
    /// `seed + 1` then `* 2`, absent on overflow.
    pub chained: Maybe<i64>,
    /// The same chain on [`Identity`], which cannot be absent and saturates.
    pub identity: Identity<i64>,
}

impl Walkthrough {
    /// Creates a walkthrough with the default suffix and seed.
    #[must_use]
    pub fn new(text: Option<String>) -> Self {
        Self {
            text,
            suffix: DEFAULT_SUFFIX.to_string(),
            seed: DEFAULT_SEED,
        }
    }

    /// Replaces the enhance suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replaces the numeric seed.
    #[must_use]
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Runs every scenario.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] if the runtime pipeline has no stages.
    pub fn run(&self) -> Result<Report, ComposeError> {
        tracing::info!(
            present = self.text.is_some(),
            suffix = %self.suffix,
            seed = self.seed,
            "running walkthrough"
        );

        let enhance = enhance_with(&self.suffix);

        let sample = self
            .text
            .clone()
            .unwrap_or_else(|| SAMPLE_TEXT.to_string());
        let headline = compose!(capitalize, &enhance);
        let composed = headline(sample.clone());
        let piped = pipe!(sample, capitalize, &enhance);

        let maybe = Maybe::of_nullable(self.text.clone())
            .chain(non_blank)
            .map(capitalize)
            .map(announce)
            .map(&enhance);
        tracing::debug!(present = maybe.is_present(), "maybe pipeline finished");

        let point_free = compose!(
            lift_chain::<Maybe<String>, _, _>(non_blank),
            lift_map::<Maybe<String>, _, _>(capitalize),
            lift_map::<Maybe<String>, _, _>(&enhance),
        );
        let lifted = point_free(Maybe::of_nullable(self.text.clone()));

        let pipeline = Pipeline::new()
            .then(capitalize)
            .then(enhance_with(&self.suffix));
        let runtime = Maybe::of_nullable(
            self.text
                .clone()
                .map(|text| pipeline.apply(text))
                .transpose()?,
        );

        let chained = Maybe::of(self.seed)
            .chain(|x| Maybe::of_nullable(x.checked_add(1)))
            .chain(|x| Maybe::of_nullable(x.checked_mul(2)));
        if chained.is_absent() {
            tracing::warn!(seed = self.seed, "numeric chain overflowed");
        }
        let identity = Identity::new(self.seed)
            .chain(|x| Identity::new(x.saturating_add(1)))
            .chain(|x| Identity::new(x.saturating_mul(2)));

        Ok(Report {
            compose: composed,
            pipe: piped,
            maybe,
            lifted,
            runtime,
            chained,
            identity,
        })
    }
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "compose: {}", self.compose)?;
        writeln!(formatter, "pipe:    {}", self.pipe)?;
        writeln!(
            formatter,
            "maybe:   {}",
            self.maybe.as_ref().fold(|| "nothing to say", String::as_str)
        )?;
        writeln!(formatter, "lifted:  {}", self.lifted)?;
        writeln!(formatter, "runtime: {}", self.runtime)?;
        writeln!(
            formatter,
            "chain:   {} / {}",
            self.chained,
            self.identity.as_inner()
        )
    }
}
