//! Bank accounts whose withdrawal rules refine a shared base account.
//!
//! Amounts are whole dollars.

use tracing::debug;

/// Minimum balance a savings account must keep after a withdrawal.
pub const SAVINGS_MINIMUM_BALANCE: i64 = 100;

pub trait Account {
    fn account_number(&self) -> &str;

    fn balance(&self) -> i64;

    /// Attempt a withdrawal and describe the result.
    fn withdraw(&mut self, amount: i64) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub account_number: String,
    balance: i64,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>, balance: i64) -> Self {
        Self {
            account_number: account_number.into(),
            balance,
        }
    }

    fn debit(&mut self, amount: i64) -> String {
        self.balance -= amount;
        format!("Withdrew ${}. New balance: ${}", amount, self.balance)
    }
}

impl Account for BankAccount {
    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn balance(&self) -> i64 {
        self.balance
    }

    fn withdraw(&mut self, amount: i64) -> String {
        if amount <= self.balance {
            return self.debit(amount);
        }
        "Insufficient funds".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    base: BankAccount,
    pub interest_rate: f64,
}

impl SavingsAccount {
    pub fn new(account_number: impl Into<String>, balance: i64, interest_rate: f64) -> Self {
        Self {
            base: BankAccount::new(account_number, balance),
            interest_rate,
        }
    }
}

impl Account for SavingsAccount {
    fn account_number(&self) -> &str {
        self.base.account_number()
    }

    fn balance(&self) -> i64 {
        self.base.balance()
    }

    fn withdraw(&mut self, amount: i64) -> String {
        if self.base.balance() - amount < SAVINGS_MINIMUM_BALANCE {
            return format!(
                "Withdrawal denied. Must maintain ${} minimum balance.",
                SAVINGS_MINIMUM_BALANCE
            );
        }
        self.base.withdraw(amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckingAccount {
    base: BankAccount,
    pub overdraft_limit: i64,
}

impl CheckingAccount {
    pub fn new(account_number: impl Into<String>, balance: i64, overdraft_limit: i64) -> Self {
        Self {
            base: BankAccount::new(account_number, balance),
            overdraft_limit,
        }
    }
}

impl Account for CheckingAccount {
    fn account_number(&self) -> &str {
        self.base.account_number()
    }

    fn balance(&self) -> i64 {
        self.base.balance()
    }

    fn withdraw(&mut self, amount: i64) -> String {
        if amount <= self.base.balance() + self.overdraft_limit {
            return self.base.debit(amount);
        }
        "Transaction denied. Overdraft limit exceeded".to_string()
    }
}

/// Scripted withdrawals against a savings and a checking account.
pub fn banking_demo() -> Vec<String> {
    let mut savings = SavingsAccount::new("SA123", 500, 0.03);
    let mut checking = CheckingAccount::new("CA456", 200, 100);
    let results = vec![
        savings.withdraw(450),
        savings.withdraw(300),
        checking.withdraw(250),
        checking.withdraw(100),
    ];
    debug!(
        account = savings.account_number(),
        balance = savings.balance(),
        interest_rate = savings.interest_rate,
        "savings after withdrawals"
    );
    debug!(
        account = checking.account_number(),
        balance = checking.balance(),
        overdraft_limit = checking.overdraft_limit,
        "checking after withdrawals"
    );
    results
}
