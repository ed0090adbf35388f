//! Precondition checks for cursors and views.
//!
//! Reading or advancing a cursor at the end of its sequence is a caller bug.
//! These checks are compiled in for debug builds and, with the `checked`
//! feature, for release builds too. Reads that have nothing to return always
//! panic through [`violated`].

use crate::error::ContractError;

/// Whether [`contract_assert!`](crate::contract_assert) evaluates its condition.
pub const CHECKED: bool = cfg!(any(debug_assertions, feature = "checked"));

#[cold]
#[inline(never)]
#[track_caller]
pub fn violated(error: ContractError) -> ! {
    panic!("contract violation: {error}")
}

/// Panics with `$error` if `$cond` does not hold and contract checks are on.
#[macro_export]
macro_rules! contract_assert {
    ($cond:expr, $error:expr $(,)?) => {
        if $crate::contract::CHECKED && !$cond {
            $crate::contract::violated($error);
        }
    };
}
