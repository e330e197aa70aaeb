//! I define the trait [`RuleEngine`], and its implementation [`RdfsReasoner`].
use std::collections::BTreeSet;

use strata_api::triple::Triple;
use strata_inmem::SchemaView;

use crate::_saturation::Saturation;
use crate::options::{Level, ReasonerOptions};
use crate::ruleset::RuleSet;

mod _rdfs;
pub(crate) use _rdfs::VOCABULARY;
use _rdfs::*;

/// A [`RuleEngine`] compiles a schema into a [`RuleSet`].
///
/// Compilation takes a snapshot of the schema:
/// the resulting rule set is not affected by later changes of the schema.
pub trait RuleEngine {
    /// Compile the given schema triples.
    fn compile_triples(&self, schema: &BTreeSet<Triple>) -> RuleSet;

    /// Compile the current content of `schema` (including its sub-stores).
    fn compile(&self, schema: &SchemaView) -> RuleSet {
        self.compile_triples(&schema.as_triple_set())
    }
}

/// A forward-chaining [`RuleEngine`] for RDFS entailment.
///
/// See [`Level`] for the supported regimes.
///
/// # Limitations
///
/// * datatypes are not interpreted: literals are never typed by their datatype,
///   and ill-typed literals are not detected;
/// * under [`Level::RdfsFull`], only the membership properties (`rdf:_n`)
///   used in the schema or the data get their axiomatic triples.
#[derive(Clone, Debug, Default)]
pub struct RdfsReasoner {
    options: ReasonerOptions,
}

impl RdfsReasoner {
    /// Build a reasoner with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a reasoner with the given options.
    pub fn with_options(options: ReasonerOptions) -> Self {
        RdfsReasoner { options }
    }

    /// Build a reasoner with the default options, except for the [`Level`].
    pub fn with_level(level: Level) -> Self {
        Self::with_options(ReasonerOptions::new().with_level(level))
    }

    /// The options of this reasoner.
    pub fn options(&self) -> &ReasonerOptions {
        &self.options
    }
}

impl RuleEngine for RdfsReasoner {
    fn compile_triples(&self, schema: &BTreeSet<Triple>) -> RuleSet {
        RuleSet::compile(self.options.clone(), schema)
    }
}

/// Saturate `graph` with all the triples entailed under `options`.
///
/// Return the number of rounds performed.
pub(crate) fn saturate(graph: &mut Saturation, options: &ReasonerOptions) -> usize {
    let level = options.level();
    if level == Level::Simple {
        return 0;
    }
    let full = level == Level::RdfsFull;
    let mut buf = vec![];

    if full {
        buf.extend_from_slice(AXIOMS);
        buf.extend(rdfs_membership_properties(graph));
        graph.insert_all(&mut buf);
    }

    let mut rounds = 0;
    let mut changed = true;
    while changed {
        if options.max_rounds() == Some(rounds) {
            log::warn!("saturation stopped after {rounds} round(s), the entailed set may be incomplete");
            break;
        }
        rounds += 1;
        changed = false;

        if full {
            buf.extend(rdfd2(graph)); // predicates are properties
            changed |= graph.insert_all(&mut buf);

            buf.extend(rdfs4(graph)); // resources are rdfs:Resource
            changed |= graph.insert_all(&mut buf);
        }

        buf.extend(rdfs12(graph)); // rdfs:ContainerMembershipProperty → rdfs:member
        changed |= graph.insert_all(&mut buf);

        buf.extend(rdfs13(graph)); // rdfs:Datatype → rdfs:Literal
        changed |= graph.insert_all(&mut buf);

        buf.extend(rdfs2(graph)); // rdfs:domain
        changed |= graph.insert_all(&mut buf);

        buf.extend(rdfs3(graph)); // rdfs:range
        changed |= graph.insert_all(&mut buf);

        let mut spo = true;
        while spo {
            buf.extend(rdfs5(graph)); // transitive closure rdfs:subPropertyOf
            spo = graph.insert_all(&mut buf);
            changed |= spo;
        }

        if full {
            buf.extend(rdfs6(graph)); // reflexive closure rdfs:subPropertyOf
            changed |= graph.insert_all(&mut buf);
        }

        buf.extend(rdfs7(graph)); // rdfs:subPropertyOf
        changed |= graph.insert_all(&mut buf);

        let mut sco = true;
        while sco {
            buf.extend(rdfs11(graph)); // transitive closure rdfs:subClassOf
            sco = graph.insert_all(&mut buf);
            changed |= sco;
        }

        if full {
            buf.extend(rdfs8_rdfs10(graph)); // classes subclassOf rdfs:Resource and themselves
            changed |= graph.insert_all(&mut buf);
        }

        buf.extend(rdfs9(graph)); // rdfs:subClassOf
        changed |= graph.insert_all(&mut buf);

        log::trace!("saturation round {rounds}: {} triple(s)", graph.len());
    }
    rounds
}
