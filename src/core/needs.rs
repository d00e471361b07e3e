use std::ops::{BitOr, BitOrAssign};

/// Set of optional requirements a directive must fulfill.
///
/// The extra-leading-space rule is not part of the mask: it always applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Needs(u8);

impl Needs {
    pub const NONE: Needs = Needs(0);
    /// Directive must start right after `//`: `//nolint`.
    pub const MACHINE: Needs = Needs(1 << 0);
    /// Directive must name at least one linter: `//nolint:lll`.
    pub const SPECIFIC: Needs = Needs(1 << 1);
    /// Directive must carry a trailing `// explanation`.
    pub const EXPLANATION: Needs = Needs(1 << 2);
    pub const ALL: Needs = Needs(Self::MACHINE.0 | Self::SPECIFIC.0 | Self::EXPLANATION.0);

    pub fn from_bits(bits: u8) -> Self {
        Needs(bits & Self::ALL.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every requirement in `other` is also in `self`.
    pub fn contains(self, other: Needs) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Build a mask from the three CLI/config switches.
    pub fn from_flags(machine: bool, specific: bool, explanation: bool) -> Self {
        let mut needs = Needs::NONE;
        if machine {
            needs |= Needs::MACHINE;
        }
        if specific {
            needs |= Needs::SPECIFIC;
        }
        if explanation {
            needs |= Needs::EXPLANATION;
        }
        needs
    }
}

impl BitOr for Needs {
    type Output = Needs;

    fn bitor(self, rhs: Needs) -> Needs {
        Needs(self.0 | rhs.0)
    }
}

impl BitOrAssign for Needs {
    fn bitor_assign(&mut self, rhs: Needs) {
        self.0 |= rhs.0;
    }
}
