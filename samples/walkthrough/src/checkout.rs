//! Paying for a cart from an account.
//!
//! `pay` is a curried step that either debits the account or fails with one
//! of two error kinds. `checkout` folds the outcome into a message, routing
//! the failure through exhaustive kind dispatch.

use fp_lessons::control::{Outcome, Tagged, dispatch};
use fp_lessons::pipe;
use thiserror::Error;

/// A bank account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Account {
    /// Available balance.
    pub balance: u64,
    /// A frozen account cannot pay.
    pub frozen: bool,
}

impl Account {
    /// Creates an account that is not frozen.
    pub const fn open(balance: u64) -> Self {
        Self {
            balance,
            frozen: false,
        }
    }

    /// Creates a frozen account.
    pub const fn frozen(balance: u64) -> Self {
        Self {
            balance,
            frozen: true,
        }
    }
}

/// A line in a cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: u64,
}

/// A shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<Item>,
    /// Amount to pay.
    pub total: u64,
}

impl Cart {
    /// A cart whose total is the sum of its item prices.
    pub fn from_items(items: Vec<Item>) -> Self {
        let total = items.iter().map(|item| item.price).sum();
        Self { items, total }
    }

    /// An empty cart with a fixed total.
    pub const fn with_total(total: u64) -> Self {
        Self {
            items: Vec::new(),
            total,
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// The account is frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Cannot pay with a frozen account!")]
pub struct AccountFrozen;

/// The balance does not cover the amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Cannot pay {amount} with a balance of {balance}!")]
pub struct NotEnoughBalance {
    /// Requested amount.
    pub amount: u64,
    /// Balance at the time of the attempt.
    pub balance: u64,
}

/// Every way [`pay`] can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Tagged)]
pub enum PayError {
    /// See [`AccountFrozen`].
    #[error(transparent)]
    AccountFrozen(#[from] AccountFrozen),
    /// See [`NotEnoughBalance`].
    #[error(transparent)]
    NotEnoughBalance(#[from] NotEnoughBalance),
}

// =============================================================================
// Operations
// =============================================================================

/// Returns a step that pays `amount` from an account.
///
/// A frozen account fails with [`AccountFrozen`] whatever its balance;
/// otherwise a balance below `amount` fails with [`NotEnoughBalance`].
///
/// # Examples
///
/// ```
/// use fp_lessons::control::Outcome;
/// use walkthrough::checkout::{Account, pay};
///
/// assert_eq!(pay(50)(Account::open(70)), Outcome::Success(Account::open(20)));
/// ```
pub fn pay(amount: u64) -> impl Fn(Account) -> Outcome<PayError, Account> {
    move |account| {
        Outcome::from_predicate(
            account,
            |account| !account.frozen,
            |_| PayError::from(AccountFrozen),
        )
        .flat_map(|account| {
            Outcome::from_predicate(
                account,
                |account| account.balance >= amount,
                |account| {
                    PayError::from(NotEnoughBalance {
                        amount,
                        balance: account.balance,
                    })
                },
            )
        })
        .map(|account| Account {
            balance: account.balance - amount,
            ..account
        })
    }
}

/// Returns a step that pays for `cart` and describes the result.
///
/// # Examples
///
/// ```
/// use walkthrough::checkout::{Account, Cart, checkout};
///
/// let checkout_fifty = checkout(&Cart::with_total(50));
/// assert_eq!(checkout_fifty(Account::open(70)), "Success. Remaining balance 20");
/// assert_eq!(checkout_fifty(Account::frozen(100)), "Cannot pay with a frozen account!");
/// ```
pub fn checkout(cart: &Cart) -> impl Fn(Account) -> String + use<> {
    let total = cart.total;
    move |account| {
        pipe!(account, pay(total)).fold(
            dispatch::<PayError, _>(PayErrorHandlers {
                account_frozen: |error: AccountFrozen| error.to_string(),
                not_enough_balance: |error: NotEnoughBalance| error.to_string(),
            }),
            |account| format!("Success. Remaining balance {}", account.balance),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Account::open(70), Outcome::Success(Account::open(20)))]
    #[case(
        Account::open(30),
        Outcome::Failure(PayError::NotEnoughBalance(NotEnoughBalance { amount: 50, balance: 30 }))
    )]
    #[case(Account::frozen(100), Outcome::Failure(PayError::AccountFrozen(AccountFrozen)))]
    fn pay_fifty(#[case] account: Account, #[case] expected: Outcome<PayError, Account>) {
        assert_eq!(pay(50)(account), expected);
    }

    #[rstest]
    fn frozen_wins_over_low_balance() {
        let failure = pay(50)(Account::frozen(10)).into_failure();
        assert_eq!(failure.map(|error| error.kind()), Some("AccountFrozen"));
    }

    #[rstest]
    fn paying_the_whole_balance_leaves_zero() {
        assert_eq!(pay(30)(Account::open(30)), Outcome::Success(Account::open(0)));
    }

    #[rstest]
    #[case(Account::open(70), "Success. Remaining balance 20")]
    #[case(Account::open(30), "Cannot pay 50 with a balance of 30!")]
    #[case(Account::frozen(100), "Cannot pay with a frozen account!")]
    fn checkout_fifty(#[case] account: Account, #[case] expected: &str) {
        assert_eq!(checkout(&Cart::with_total(50))(account), expected);
    }

    #[rstest]
    fn checkout_step_outlives_the_cart() {
        let checkout_step = {
            let cart = Cart::with_total(25);
            checkout(&cart)
        };
        assert_eq!(checkout_step(Account::open(30)), "Success. Remaining balance 5");
    }

    #[rstest]
    fn cart_total_sums_item_prices() {
        let cart = Cart::from_items(vec![
            Item {
                name: "book".to_string(),
                price: 12,
            },
            Item {
                name: "pen".to_string(),
                price: 3,
            },
        ]);
        assert_eq!(cart.total, 15);
    }
}
