use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    #[value(name = "INCOME", alias = "income")]
    Income,
    #[value(name = "EXPENSE", alias = "expense")]
    Expense,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl TransactionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
            Self::Unknown => "N/A",
        }
    }
}
