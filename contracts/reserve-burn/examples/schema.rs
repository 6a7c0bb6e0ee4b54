use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};
use reserve_burn::msg::*;
use reserve_burn::state::*;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(BurnState), &out_dir);
    export_schema(&schema_for!(ReserveAllocation), &out_dir);
    export_schema(&schema_for!(BurnRecord), &out_dir);
    export_schema(&schema_for!(QueryConfigResponse), &out_dir);
    export_schema(&schema_for!(QueryBurnStateResponse), &out_dir);
    export_schema(&schema_for!(QueryAllocationResponse), &out_dir);
    export_schema(&schema_for!(ConstantsResponse), &out_dir);
    export_schema(&schema_for!(BurnHistoryResponse), &out_dir);
}
