//! Dots and energizers scattered over the maze.

use std::collections::HashMap;

use glam::IVec2;
use strum_macros::AsRefStr;
use tracing::trace;

use crate::constants::scoring::{ENERGIZER_SCORE, PELLET_SCORE};
use crate::error::MapError;

/// The kind of an edible dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DotKind {
    Pellet,
    Energizer,
}

impl DotKind {
    /// Points awarded for eating a dot of this kind.
    pub const fn score_value(self) -> u32 {
        match self {
            DotKind::Pellet => PELLET_SCORE,
            DotKind::Energizer => ENERGIZER_SCORE,
        }
    }
}

/// A single dot placement, as supplied by the dot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DotSpec {
    pub position: IVec2,
    pub kind: DotKind,
}

impl DotSpec {
    pub const fn new(position: IVec2, kind: DotKind) -> Self {
        Self { position, kind }
    }

    pub const fn pellet(x: i32, y: i32) -> Self {
        Self::new(IVec2::new(x, y), DotKind::Pellet)
    }

    pub const fn energizer(x: i32, y: i32) -> Self {
        Self::new(IVec2::new(x, y), DotKind::Energizer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub position: IVec2,
    pub kind: DotKind,
    pub eaten: bool,
}

impl Dot {
    pub fn is_energizer(&self) -> bool {
        self.kind == DotKind::Energizer
    }
}

/// Every dot in the maze, in layout order.
#[derive(Debug, Clone)]
pub struct DotField {
    layout: Vec<DotSpec>,
    dots: Vec<Dot>,
    by_cell: HashMap<IVec2, usize>,
}

impl DotField {
    /// Builds the field from a layout, rejecting duplicate coordinates.
    pub fn new(layout: Vec<DotSpec>) -> Result<Self, MapError> {
        let mut by_cell = HashMap::with_capacity(layout.len());
        for (index, spec) in layout.iter().enumerate() {
            if by_cell.insert(spec.position, index).is_some() {
                return Err(MapError::DuplicateDot(spec.position));
            }
        }

        let mut field = Self {
            layout,
            dots: Vec::new(),
            by_cell,
        };
        field.reset();
        Ok(field)
    }

    /// Rebuilds every dot from the layout, uneaten.
    pub fn reset(&mut self) {
        self.dots = self
            .layout
            .iter()
            .map(|spec| Dot {
                position: spec.position,
                kind: spec.kind,
                eaten: false,
            })
            .collect();
    }

    /// Eats the dot at `cell`, if there is one left.
    pub fn consume(&mut self, cell: IVec2) -> Option<Dot> {
        let dot = self.dots.get_mut(*self.by_cell.get(&cell)?)?;
        if dot.eaten {
            return None;
        }
        dot.eaten = true;
        trace!(?cell, kind = dot.kind.as_ref(), "Dot eaten");
        Some(*dot)
    }

    pub fn get(&self, cell: IVec2) -> Option<&Dot> {
        self.by_cell.get(&cell).and_then(|&index| self.dots.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.dots.iter().filter(|dot| !dot.eaten).count()
    }

    pub fn all_eaten(&self) -> bool {
        self.dots.iter().all(|dot| dot.eaten)
    }
}
