#![cfg(test)]

use std::cell::Cell;

use common::credit::interface::CreditManagerContractClient;
use common::credit::types::Error as CreditError;
use credit_manager_mock::CreditManagerMock;
use soroban_sdk::{
    xdr::{
        HostFunction, InvokeHostFunctionOp, OperationBody, ScVal, TransactionEnvelope,
    },
    Address, Env, String as SorobanString, Symbol, TryFromVal, Val, Vec as SorobanVec,
};

use crate::{
    error::InvokeError,
    invocation::ContractCall,
    rpc::{AccountFetcher, AccountState, Simulation, TransactionSimulator},
    value::TaggedValue,
};

pub const POOL_OWNER: &str = "GBWOHPLK53VVKNEV7C6O6IYN7X3OLHXDML6GVZBPEB7MTWWHPB3N7VLC";
pub const BORROWER: &str = "GCJOREE3MWDTANSP4CRM6HZYMQTCZLOYUR6L3XFR34FP4R37WMR5NHWC";
pub const CREDIT_MANAGER: &str = "CDHYIC3ISV3F3RL7FROC3SI2GW65ZOJHMA2AMZJYLIRLWSDELFF3CR23";

/// The `approve_borrower` arguments used against the credit manager.
pub fn approve_borrower_args() -> Vec<TaggedValue> {
    vec![
        TaggedValue::address(BORROWER),
        TaggedValue::U128(1000_0000000),
        TaggedValue::U32(5),
        TaggedValue::U32(1200),
        TaggedValue::U128(0),
        TaggedValue::U64(0),
        TaggedValue::Bool(true),
    ]
}

pub fn approve_borrower_call() -> ContractCall {
    let mut call = ContractCall::new(CREDIT_MANAGER, "approve_borrower");
    call.args = approve_borrower_args();
    call
}

pub fn to_val(env: &Env, val: &ScVal) -> Val {
    Val::try_from_val(env, val).unwrap()
}

pub fn strkey_address(env: &Env, strkey: &str) -> Address {
    Address::from_string(&SorobanString::from_str(env, strkey))
}

pub struct StaticAccounts {
    sequence: i64,
    calls: Cell<u32>,
}

impl StaticAccounts {
    pub fn new(sequence: i64) -> Self {
        StaticAccounts {
            sequence,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl AccountFetcher for StaticAccounts {
    fn get_account(&self, account_id: &str) -> Result<AccountState, InvokeError> {
        self.calls.set(self.calls.get() + 1);
        Ok(AccountState::new(account_id, self.sequence))
    }
}

pub struct UnreachableRpc;

impl AccountFetcher for UnreachableRpc {
    fn get_account(&self, _account_id: &str) -> Result<AccountState, InvokeError> {
        Err(InvokeError::Rpc("connection refused".into()))
    }
}

/// Executes invocations against the mock credit manager deployed at the
/// same contract id the network uses.
pub struct LocalSimulator {
    pub env: Env,
    pub client: CreditManagerContractClient<'static>,
}

impl LocalSimulator {
    pub fn new() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id = strkey_address(&env, CREDIT_MANAGER);
        env.register_at(&contract_id, CreditManagerMock, ());
        let client = CreditManagerContractClient::new(&env, &contract_id);
        client.initialize(&strkey_address(&env, POOL_OWNER));

        LocalSimulator { env, client }
    }
}

impl TransactionSimulator for LocalSimulator {
    fn simulate(&self, envelope: &TransactionEnvelope) -> Result<Simulation, InvokeError> {
        let TransactionEnvelope::Tx(v1) = envelope else {
            return Err(InvokeError::Simulation("unsupported envelope".into()));
        };
        let operation = v1
            .tx
            .operations
            .first()
            .ok_or(InvokeError::MissingOperation)?;
        let OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
            host_function: HostFunction::InvokeContract(invoke),
            ..
        }) = &operation.body
        else {
            return Err(InvokeError::Simulation("not a contract invocation".into()));
        };

        let env = &self.env;
        let contract = Address::try_from_val(
            env,
            &to_val(env, &ScVal::Address(invoke.contract_address.clone())),
        )
        .map_err(|_| InvokeError::Simulation("bad contract address".into()))?;
        let function = invoke
            .function_name
            .0
            .to_utf8_string()
            .map_err(|e| InvokeError::Simulation(e.to_string()))?;

        let mut args: SorobanVec<Val> = SorobanVec::new(env);
        for arg in invoke.args.iter() {
            args.push_back(to_val(env, arg));
        }

        let result = env
            .try_invoke_contract::<Val, CreditError>(&contract, &Symbol::new(env, &function), args)
            .map_err(|e| InvokeError::Simulation(format!("{:?}", e)))?
            .map_err(|e| InvokeError::Simulation(format!("{:?}", e)))?;

        Ok(Simulation {
            return_value: ScVal::try_from_val(env, &result)
                .map_err(|e| InvokeError::Simulation(format!("{:?}", e)))?,
            min_resource_fee: 0,
            latest_ledger: env.ledger().sequence(),
        })
    }
}
