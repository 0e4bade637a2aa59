//! Popular sectors offered by the search screen.

use std::fmt;

/// Number of sectors exposed as quick-access buttons.
pub const QUICK_SECTOR_COUNT: usize = 6;

/// A preset sector from the popular searches list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    Healthcare,
    Finance,
    Education,
    ECommerce,
    SaaS,
    RealEstate,
    FoodAndBeverage,
    Fitness,
    Travel,
    Gaming,
}

impl Sector {
    /// All popular sectors in display order.
    pub const ALL: [Self; 10] = [
        Self::Healthcare,
        Self::Finance,
        Self::Education,
        Self::ECommerce,
        Self::SaaS,
        Self::RealEstate,
        Self::FoodAndBeverage,
        Self::Fitness,
        Self::Travel,
        Self::Gaming,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::ECommerce => "E-commerce",
            Self::SaaS => "SaaS",
            Self::RealEstate => "Real Estate",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Fitness => "Fitness",
            Self::Travel => "Travel",
            Self::Gaming => "Gaming",
        }
    }

    /// The leading sectors shown as one-press shortcuts.
    #[must_use]
    pub fn quick() -> &'static [Self] {
        &Self::ALL[..QUICK_SECTOR_COUNT]
    }

    /// Quick-access sector at `index`, if there is one.
    #[must_use]
    pub fn quick_at(index: usize) -> Option<Self> {
        Self::quick().get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|sector| *sector == self)
            .unwrap_or_default()
    }

    /// Step forward through the list; `None` means "no selection" and sits
    /// before the first entry.
    #[must_use]
    pub fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(sector) => Self::ALL.get(sector.index() + 1).copied(),
        }
    }

    #[must_use]
    pub fn cycle_prev(current: Option<Self>) -> Option<Self> {
        match current {
            None => Self::ALL.last().copied(),
            Some(sector) => sector
                .index()
                .checked_sub(1)
                .map(|index| Self::ALL[index]),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
