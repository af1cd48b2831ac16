use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::gift_card::GiftCard;
use crate::product::ProductPrice;

/// Money in minor currency units (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Subtract a discount, flooring at zero
    pub fn discounted_by(self, discount: Cents) -> Cents {
        Cents(self.0.saturating_sub(discount.0))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Cents(value)
    }
}

/// Pick the cheapest schedule entry covering `date`.
///
/// Ties resolve to the first entry encountered.
pub fn lowest_price_on<'a, I>(entries: I, date: NaiveDate) -> Option<&'a ProductPrice>
where
    I: IntoIterator<Item = &'a ProductPrice>,
{
    entries
        .into_iter()
        .filter(|entry| entry.covers(date))
        .min_by_key(|entry| entry.price)
}

/// Result of presenting a gift card at a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftCardOutcome {
    Applied { price: Cents },
    NotApplicable { price: Cents },
}

impl GiftCardOutcome {
    pub fn price(&self) -> Cents {
        match self {
            GiftCardOutcome::Applied { price } | GiftCardOutcome::NotApplicable { price } => *price,
        }
    }
}

/// Apply `card` to `price` if the card is valid on `date`
pub fn apply_gift_card(price: Cents, card: &GiftCard, date: NaiveDate) -> GiftCardOutcome {
    if card.is_applicable_on(date) {
        GiftCardOutcome::Applied {
            price: price.discounted_by(card.amount),
        }
    } else {
        GiftCardOutcome::NotApplicable { price }
    }
}
