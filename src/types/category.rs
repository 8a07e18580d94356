//! Category types for ledger transactions
//!
//! Categories are closed sets, one per transaction type. Each set publishes an
//! explicit ordered menu of `(display name, value)` pairs so that menu numbering
//! is decoupled from the stored representation: persisted data always refers to
//! a category by its name, never by its position in a menu.

use super::transaction::TransactionType;
use std::fmt;
use std::str::FromStr;

/// Categories available for expense transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Education,
    Other,
}

/// Categories available for income transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeCategory {
    Salary,
    Bonus,
    Freelance,
    Investment,
    Gift,
    Other,
}

impl ExpenseCategory {
    /// Menu entries in display order
    pub const MENU: &'static [(&'static str, ExpenseCategory)] = &[
        ("Food", ExpenseCategory::Food),
        ("Transport", ExpenseCategory::Transport),
        ("Housing", ExpenseCategory::Housing),
        ("Utilities", ExpenseCategory::Utilities),
        ("Entertainment", ExpenseCategory::Entertainment),
        ("Health", ExpenseCategory::Health),
        ("Shopping", ExpenseCategory::Shopping),
        ("Education", ExpenseCategory::Education),
        ("Other", ExpenseCategory::Other),
    ];

    /// Persisted name of the category
    pub fn name(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl IncomeCategory {
    /// Menu entries in display order
    pub const MENU: &'static [(&'static str, IncomeCategory)] = &[
        ("Salary", IncomeCategory::Salary),
        ("Bonus", IncomeCategory::Bonus),
        ("Freelance", IncomeCategory::Freelance),
        ("Investment", IncomeCategory::Investment),
        ("Gift", IncomeCategory::Gift),
        ("Other", IncomeCategory::Other),
    ];

    /// Persisted name of the category
    pub fn name(self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Bonus => "Bonus",
            IncomeCategory::Freelance => "Freelance",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Gift => "Gift",
            IncomeCategory::Other => "Other",
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExpenseCategory::MENU
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, category)| *category)
            .ok_or_else(|| format!("Unknown expense category '{}'", s))
    }
}

impl FromStr for IncomeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IncomeCategory::MENU
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, category)| *category)
            .ok_or_else(|| format!("Unknown income category '{}'", s))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a stored transaction
///
/// The transaction type is derived from the category, so a known category can
/// never disagree with its type. `Unrecognized` holds a category token read from
/// a file that did not name any category of the row's type; the raw token is
/// kept so that saving the ledger writes it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Expense(ExpenseCategory),
    Income(IncomeCategory),
    Unrecognized {
        tx_type: TransactionType,
        name: String,
    },
}

impl Category {
    /// Parse a category token for the given transaction type
    ///
    /// Never fails: a token that names no category of `tx_type` becomes
    /// `Category::Unrecognized`.
    pub fn parse_for(tx_type: TransactionType, token: &str) -> Category {
        let parsed = match tx_type {
            TransactionType::Expense => token.parse().ok().map(Category::Expense),
            TransactionType::Income => token.parse().ok().map(Category::Income),
        };
        parsed.unwrap_or_else(|| Category::Unrecognized {
            tx_type,
            name: token.to_string(),
        })
    }

    /// Parse a category token, rejecting names outside the type's closed set
    pub fn parse_known(tx_type: TransactionType, token: &str) -> Result<Category, String> {
        match tx_type {
            TransactionType::Expense => token.parse().map(Category::Expense),
            TransactionType::Income => token.parse().map(Category::Income),
        }
    }

    /// Map a 1-based menu choice to a category of the given type
    pub fn from_menu_choice(tx_type: TransactionType, choice: usize) -> Option<Category> {
        let index = choice.checked_sub(1)?;
        match tx_type {
            TransactionType::Expense => ExpenseCategory::MENU
                .get(index)
                .map(|(_, category)| Category::Expense(*category)),
            TransactionType::Income => IncomeCategory::MENU
                .get(index)
                .map(|(_, category)| Category::Income(*category)),
        }
    }

    /// Display names of the menu for the given type, in menu order
    pub fn menu_names(tx_type: TransactionType) -> Vec<&'static str> {
        match tx_type {
            TransactionType::Expense => ExpenseCategory::MENU.iter().map(|(n, _)| *n).collect(),
            TransactionType::Income => IncomeCategory::MENU.iter().map(|(n, _)| *n).collect(),
        }
    }

    pub fn tx_type(&self) -> TransactionType {
        match self {
            Category::Expense(_) => TransactionType::Expense,
            Category::Income(_) => TransactionType::Income,
            Category::Unrecognized { tx_type, .. } => *tx_type,
        }
    }

    /// Category name as plain text, whatever the variant
    pub fn name(&self) -> &str {
        match self {
            Category::Expense(category) => category.name(),
            Category::Income(category) => category.name(),
            Category::Unrecognized { name, .. } => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Unrecognized { .. })
    }
}

impl From<ExpenseCategory> for Category {
    fn from(category: ExpenseCategory) -> Self {
        Category::Expense(category)
    }
}

impl From<IncomeCategory> for Category {
    fn from(category: IncomeCategory) -> Self {
        Category::Income(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
