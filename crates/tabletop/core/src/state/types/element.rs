//! Elemental infusion board.

use strum::{EnumIter, IntoEnumIterator};

/// The six infusable elements, in board order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Element {
    Fire,
    Ice,
    Air,
    Earth,
    Light,
    Dark,
}

impl Element {
    pub const COUNT: usize = 6;

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Strength of a single element on the infusion board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Infusion {
    Strong,
    Waning,
    #[default]
    Inert,
}

impl Infusion {
    /// Forward step of the infusion toggle: `inert → strong → waning → inert`.
    pub const fn infused(self) -> Self {
        match self {
            Infusion::Strong => Infusion::Waning,
            Infusion::Waning => Infusion::Inert,
            Infusion::Inert => Infusion::Strong,
        }
    }

    /// Backward step of the infusion toggle. Exact inverse of [`Self::infused`].
    pub const fn reverted(self) -> Self {
        match self {
            Infusion::Strong => Infusion::Inert,
            Infusion::Waning => Infusion::Strong,
            Infusion::Inert => Infusion::Waning,
        }
    }

    /// End-of-round decay: strong elements wane, everything else goes inert.
    pub const fn decayed(self) -> Self {
        match self {
            Infusion::Strong => Infusion::Waning,
            Infusion::Waning | Infusion::Inert => Infusion::Inert,
        }
    }
}

/// Fixed map of every [`Element`] to its current [`Infusion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementalInfusion {
    levels: [Infusion; Element::COUNT],
}

impl ElementalInfusion {
    /// All elements inert.
    pub const fn inert() -> Self {
        Self {
            levels: [Infusion::Inert; Element::COUNT],
        }
    }

    pub fn get(&self, element: Element) -> Infusion {
        self.levels[element.index()]
    }

    pub fn set(&mut self, element: Element, infusion: Infusion) {
        self.levels[element.index()] = infusion;
    }

    pub fn update(&mut self, element: Element, f: impl FnOnce(Infusion) -> Infusion) {
        let slot = &mut self.levels[element.index()];
        *slot = f(*slot);
    }

    /// Returns a copy with every element decayed for the next round.
    pub fn decayed(&self) -> Self {
        let mut next = *self;
        for level in next.levels.iter_mut() {
            *level = level.decayed();
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, Infusion)> + '_ {
        Element::iter().map(|element| (element, self.get(element)))
    }
}
