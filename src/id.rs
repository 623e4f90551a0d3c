// License: MIT
// Copyright © 2026 The cim-production Authors

//! Typed handles to the entities stored in a [`Model`][crate::Model].

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use petgraph::graph::NodeIndex;

use crate::{Entity, IsA};

/// A handle to an entity of type `T` stored in a [`Model`][crate::Model].
///
/// Handles are cheap to copy and stay valid until the entity is removed from
/// the model.  A handle is only meaningful for the model that issued it.
pub struct Id<T> {
    index: NodeIndex,
    marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub(crate) fn new(index: NodeIndex) -> Self {
        Self {
            index,
            marker: PhantomData,
        }
    }

    pub(crate) fn index(&self) -> NodeIndex {
        self.index
    }
}

impl<T: Entity> Id<T> {
    /// Returns a handle to the same entity, typed as one of the classes it
    /// specialises.
    pub fn upcast<U: Entity>(self) -> Id<U>
    where
        T: IsA<U>,
    {
        Id::new(self.index)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T: Entity> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id<{}>({})", T::CLASS, self.index.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GeneratingUnit, ThermalGeneratingUnit};

    #[test]
    fn test_upcast() {
        let thermal: Id<ThermalGeneratingUnit> = Id::new(NodeIndex::new(3));
        let unit: Id<GeneratingUnit> = thermal.upcast();

        assert_eq!(unit.index(), thermal.index());
        assert_eq!(format!("{thermal:?}"), "Id<ThermalGeneratingUnit>(3)");
        assert_eq!(format!("{unit:?}"), "Id<GeneratingUnit>(3)");
    }
}
