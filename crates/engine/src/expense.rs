use api_types::{expense::ExpenseNew, outing::OutingId};

use crate::{EngineError, Money, ResultEngine};

/// Raw text of the "add expense" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
}

impl ExpenseDraft {
    /// Validates the form and builds the request body.
    ///
    /// A zero amount is rejected. Whitespace runs in the description collapse
    /// to one space; a blank description is sent as `None`.
    pub fn to_request(&self, outing_id: &OutingId, person_name: &str) -> ResultEngine<ExpenseNew> {
        let person_name = person_name.trim();
        if person_name.is_empty() {
            return Err(EngineError::MissingField("name"));
        }

        let amount: Money = self.amount.parse()?;
        if amount.is_zero() {
            return Err(EngineError::InvalidAmount("amount must not be zero".to_string()));
        }

        Ok(ExpenseNew {
            outing_id: outing_id.clone(),
            person_name: person_name.to_string(),
            amount: amount.to_major(),
            description: normalize_description(&self.description),
        })
    }

    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
    }
}

fn normalize_description(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
