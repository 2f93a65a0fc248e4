pub mod farm_contract;
pub mod rpc_client;
