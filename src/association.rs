// License: MIT
// Copyright © 2026 The cim-production Authors

//! Associations between entity types, and the typed ends through which they
//! are read and mutated.
//!
//! Every association has two ends, each declared on an entity type.  The ends
//! are exposed as associated constants on their entity types, for example
//! [`GeneratingUnit::GEN_UNIT_OP_COST_CURVES`][crate::entities::GeneratingUnit::GEN_UNIT_OP_COST_CURVES]
//! and its mirror
//! [`GenUnitOpCostCurve::GENERATING_UNIT`][crate::entities::GenUnitOpCostCurve::GENERATING_UNIT].

mod table;

use std::marker::PhantomData;

use crate::EntityClass;

pub use table::Association;

/// The number of entities an association end can relate an entity to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// At most one entity.
    One,
    /// Any number of entities, in insertion order.
    Many,
}

/// Which of the two ends of an association an [`End`] is.
///
/// A link is stored as a graph edge from the entity on the `Source` end to the
/// entity on the `Target` end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Side {
    Source,
    Target,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }
}

/// The static description of one association end.
pub(crate) struct EndSpec {
    pub(crate) class: EntityClass,
    pub(crate) field: &'static str,
    pub(crate) cardinality: Cardinality,
}

/// One end of an association, without type information.
///
/// Displayed as its serialization token, `Class.field`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct End {
    association: Association,
    side: Side,
}

impl End {
    pub(crate) const fn new(association: Association, side: Side) -> Self {
        Self { association, side }
    }

    /// Returns an iterator over both ends of every association.
    pub fn all() -> impl Iterator<Item = End> {
        Association::ALL.iter().flat_map(|association| {
            [Side::Source, Side::Target]
                .into_iter()
                .map(move |side| End::new(*association, side))
        })
    }

    /// Returns the association this end belongs to.
    pub fn association(&self) -> Association {
        self.association
    }

    pub(crate) fn side(&self) -> Side {
        self.side
    }

    /// Returns the other end of the same association.
    pub fn mirror(&self) -> End {
        End::new(self.association, self.side.other())
    }

    /// Returns the class the end is declared on.
    pub fn class(&self) -> EntityClass {
        self.association.spec(self.side).class
    }

    /// Returns the field name of the end.
    pub fn field(&self) -> &'static str {
        self.association.spec(self.side).field
    }

    /// Returns the cardinality of the end.
    pub fn cardinality(&self) -> Cardinality {
        self.association.spec(self.side).cardinality
    }

    /// Returns true if entities of the given class can use this end, because
    /// the class is the class the end is declared on or a specialisation of
    /// it.
    pub fn declared_on(&self, class: EntityClass) -> bool {
        class.is_a(self.class())
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.class(), self.field())
    }
}

/// An association end that relates an entity of type `O` to at most one
/// entity of type `F`.
pub struct ToOne<O, F> {
    end: End,
    marker: PhantomData<fn() -> (O, F)>,
}

/// An association end that relates an entity of type `O` to an ordered
/// collection of entities of type `F`.
pub struct ToMany<O, F> {
    end: End,
    marker: PhantomData<fn() -> (O, F)>,
}

/// Shared implementations for the typed end wrappers.
macro_rules! typed_end {
    ($ty:ident) => {
        impl<O, F> $ty<O, F> {
            pub(crate) const fn new(end: End) -> Self {
                Self {
                    end,
                    marker: PhantomData,
                }
            }

            /// Returns the untyped end.
            pub fn end(&self) -> End {
                self.end
            }
        }

        impl<O, F> Clone for $ty<O, F> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<O, F> Copy for $ty<O, F> {}

        impl<O, F> std::fmt::Debug for $ty<O, F> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.end)
            }
        }

        impl<O, F> From<$ty<O, F>> for End {
            fn from(end: $ty<O, F>) -> Self {
                end.end
            }
        }
    };
}

typed_end!(ToOne);
typed_end!(ToMany);
