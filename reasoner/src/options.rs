//! Defines types for configuring the rule engine.

/// The entailment regime implemented by a [`RdfsReasoner`](crate::RdfsReasoner).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Level {
    /// No rule: only the captured schema and the base data are visible.
    Simple,
    /// The RDFS rules useful in practice:
    /// domain and range, sub-property and sub-class transitivity and application,
    /// container membership and datatypes.
    #[default]
    Rdfs,
    /// [`Level::Rdfs`], plus the axiomatic triples,
    /// the typing of every resource and property,
    /// and the reflexive closures of `rdfs:subPropertyOf` and `rdfs:subClassOf`.
    RdfsFull,
}

/// Options of a [`RdfsReasoner`](crate::RdfsReasoner).
///
/// ```
/// # use strata_reasoner::{Level, ReasonerOptions};
/// let options = ReasonerOptions::new()
///     .with_level(Level::RdfsFull)
///     .with_max_rounds(Some(10));
/// assert_eq!(options.level(), Level::RdfsFull);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReasonerOptions {
    level: Level,
    max_rounds: Option<usize>,
}

impl ReasonerOptions {
    /// Build the default options: [`Level::Rdfs`], no cap on saturation rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entailment regime.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The maximum number of saturation rounds, if any.
    ///
    /// When the cap is reached, saturation stops (with a warning),
    /// and the entailed set may be incomplete.
    pub fn max_rounds(&self) -> Option<usize> {
        self.max_rounds
    }

    /// Change the [`level`](Self::level) option.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Change the [`max_rounds`](Self::max_rounds) option.
    ///
    /// `Some(0)` is interpreted as `Some(1)`.
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds.map(|n| n.max(1));
        self
    }
}
