use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::{
    config::InvokeConfig,
    error::InvokeError,
    invocation::{ContractCall, TransactionBuilder},
    rpc::{AccountFetcher, Simulation, TransactionSimulator},
};

/// Fetches the source account, builds the invocation and simulates it.
pub fn simulate_call<F, S>(
    fetcher: &F,
    simulator: &S,
    config: &InvokeConfig,
    source_account: &str,
    call: &ContractCall,
) -> Result<Simulation, InvokeError>
where
    F: AccountFetcher + ?Sized,
    S: TransactionSimulator + ?Sized,
{
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| InvokeError::Clock)?
        .as_secs();
    simulate_call_at(fetcher, simulator, config, source_account, call, now)
}

/// Same as [`simulate_call`] with an explicit unix time for the time bounds.
pub fn simulate_call_at<F, S>(
    fetcher: &F,
    simulator: &S,
    config: &InvokeConfig,
    source_account: &str,
    call: &ContractCall,
    now: u64,
) -> Result<Simulation, InvokeError>
where
    F: AccountFetcher + ?Sized,
    S: TransactionSimulator + ?Sized,
{
    // Arguments are converted before any network round trip.
    let operation = call.to_operation()?;

    let account = fetcher.get_account(source_account)?;
    debug!(
        "fetched {} at sequence {}",
        account.account_id, account.sequence
    );

    let transaction = TransactionBuilder::new(account, &config.network)
        .fee(config.fee)
        .timeout(config.timeout())
        .add_operation(operation)
        .build(now)?;

    debug!(
        "simulating {}.{} via {}",
        call.contract_id, call.method, config.network.rpc_url
    );
    let simulation = simulator.simulate(&transaction.envelope())?;
    debug!(
        "simulation finished at ledger {} with min resource fee {}",
        simulation.latest_ledger, simulation.min_resource_fee
    );

    Ok(simulation)
}
