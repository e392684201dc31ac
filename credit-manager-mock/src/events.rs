use common::credit::types::CreditStatus;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum CreditEvent {
    Initialized(Address),
    BorrowerApproved(Address, u128, u32),
    StatusUpdated(Address, CreditStatus, CreditStatus),
}

impl CreditEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CreditEvent::Initialized(..) => stringify!(Initialized),
            CreditEvent::BorrowerApproved(..) => stringify!(BorrowerApproved),
            CreditEvent::StatusUpdated(..) => stringify!(StatusUpdated),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            CreditEvent::Initialized(pool_owner) => {
                v.push_back(pool_owner.into_val(env));
            }
            CreditEvent::BorrowerApproved(borrower, credit_limit, num_periods) => {
                v.push_back(borrower.into_val(env));
                v.push_back(credit_limit.into_val(env));
                v.push_back(num_periods.into_val(env));
            }
            CreditEvent::StatusUpdated(borrower, from, to) => {
                v.push_back(borrower.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
