use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::Cents;

/// Gift card redeemable against a product price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GiftCard {
    pub id: Uuid,
    pub code: String,
    /// Value of the card in cents
    pub amount: Cents,
    /// Open-ended when `None`
    pub date_start: Option<NaiveDate>,
    /// Open-ended when `None`
    pub date_end: Option<NaiveDate>,
}

impl GiftCard {
    pub fn new(
        code: impl Into<String>,
        amount: Cents,
        date_start: Option<NaiveDate>,
        date_end: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            amount,
            date_start,
            date_end,
        }
    }

    /// A card applies when neither bound excludes `date`
    pub fn is_applicable_on(&self, date: NaiveDate) -> bool {
        let started = self.date_start.map_or(true, |start| start <= date);
        let not_ended = self.date_end.map_or(true, |end| end >= date);
        started && not_ended
    }

    pub fn formatted_amount(&self) -> String {
        self.amount.to_string()
    }
}

impl fmt::Display for GiftCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounded_card() {
        let card = GiftCard::new(
            "250OFF",
            Cents(25000),
            Some(date(2018, 12, 1)),
            Some(date(2019, 1, 1)),
        );

        assert!(!card.is_applicable_on(date(2018, 11, 30)));
        assert!(card.is_applicable_on(date(2018, 12, 1)));
        assert!(card.is_applicable_on(date(2018, 12, 12)));
        assert!(card.is_applicable_on(date(2019, 1, 1)));
        assert!(!card.is_applicable_on(date(2019, 6, 25)));
    }

    #[test]
    fn test_open_ended_cards() {
        let no_end = GiftCard::new("10OFF", Cents(1000), Some(date(2018, 7, 1)), None);
        assert!(!no_end.is_applicable_on(date(2018, 6, 25)));
        assert!(no_end.is_applicable_on(date(2030, 1, 1)));

        let no_start = GiftCard::new("EARLY", Cents(1000), None, Some(date(2018, 7, 1)));
        assert!(no_start.is_applicable_on(date(1999, 1, 1)));
        assert!(!no_start.is_applicable_on(date(2018, 7, 2)));

        let always = GiftCard::new("ANY", Cents(1), None, None);
        assert!(always.is_applicable_on(date(2018, 7, 2)));
    }

    #[test]
    fn test_display() {
        let card = GiftCard::new("50OFF", Cents(5000), None, None);
        assert_eq!(card.to_string(), "50OFF - $50.00");
        assert_eq!(card.formatted_amount(), "$50.00");
    }

    #[test]
    fn test_amount_serializes_as_integer_cents() {
        let card = GiftCard::new("10OFF", Cents(1000), Some(date(2018, 7, 1)), None);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["amount"], 1000);
        assert_eq!(json["date_start"], "2018-07-01");
        assert!(json["date_end"].is_null());
    }
}
